//! Interactive loop over a line-oriented reader.
//!
//! Reads one task per line, runs it through the [`ChatSession`] and prints the
//! Search Agent's final reply. The session is reset after every task.

use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};

use crate::agent::ChatSession;

/// Prompt printed before each read.
pub const PROMPT: &str = "Please enter your research paper query (or type 'quit' to exit): ";

/// Warning printed for blank input.
pub const EMPTY_INPUT_WARNING: &str = "No input received, please try again.";

/// Printed when the agent produced no text.
pub const NO_REPLY: &str = "(no response)";

/// Where the loop currently is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopState {
    AwaitingInput,
    RunningTurn,
    Terminated,
}

/// A classified input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Input<'a> {
    Quit,
    Empty,
    Task(&'a str),
}

/// Classify a raw input line.
#[must_use]
pub fn classify_input(line: &str) -> Input<'_> {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        Input::Empty
    } else if trimmed.eq_ignore_ascii_case("quit") {
        Input::Quit
    } else {
        Input::Task(trimmed)
    }
}

/// Line-oriented driver around a [`ChatSession`].
#[derive(Debug)]
pub struct Repl {
    session: ChatSession,
    state: LoopState,
    tasks_run: usize,
}

impl Repl {
    #[must_use]
    pub fn new(session: ChatSession) -> Self {
        Self { session, state: LoopState::AwaitingInput, tasks_run: 0 }
    }

    #[must_use]
    pub const fn state(&self) -> LoopState {
        self.state
    }

    /// Tasks handed to the session so far.
    #[must_use]
    pub const fn tasks_run(&self) -> usize {
        self.tasks_run
    }

    /// Run until `quit` or end of input.
    ///
    /// # Errors
    ///
    /// Returns error only if reading `input` or writing `out` fails.
    pub async fn run<R, W>(&mut self, input: R, out: &mut W) -> std::io::Result<()>
    where
        R: AsyncBufRead + Unpin,
        W: AsyncWrite + Unpin,
    {
        let mut reader = input;
        let mut line = String::new();

        tracing::info!("Interactive session ready");

        while self.state != LoopState::Terminated {
            out.write_all(PROMPT.as_bytes()).await?;
            out.flush().await?;

            line.clear();
            let bytes_read = reader.read_line(&mut line).await?;

            if bytes_read == 0 {
                tracing::info!("Input closed, shutting down");
                out.write_all(b"\n").await?;
                self.state = LoopState::Terminated;
                break;
            }

            match classify_input(&line) {
                Input::Quit => {
                    tracing::info!("Quit requested");
                    self.state = LoopState::Terminated;
                }
                Input::Empty => {
                    out.write_all(EMPTY_INPUT_WARNING.as_bytes()).await?;
                    out.write_all(b"\n").await?;
                }
                Input::Task(task) => {
                    self.state = LoopState::RunningTurn;
                    let reply = self.run_task(task).await;
                    out.write_all(reply.as_bytes()).await?;
                    out.write_all(b"\n").await?;
                    self.state = LoopState::AwaitingInput;
                }
            }
            out.flush().await?;
        }

        Ok(())
    }

    async fn run_task(&mut self, task: &str) -> String {
        self.tasks_run += 1;
        tracing::debug!(task, "Running task");

        let reply = match self.session.initiate_chat(task, None).await {
            Ok(transcript) => transcript.last_agent_message().unwrap_or(NO_REPLY).to_string(),
            Err(e) => {
                tracing::error!(error = %e, "Task failed");
                format!("Error: {e}")
            }
        };

        self.session.reset();
        reply
    }
}

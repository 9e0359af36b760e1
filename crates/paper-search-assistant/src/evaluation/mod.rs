//! Evaluation harness.
//!
//! Runs each canned prompt through a bounded conversation, hands the Search
//! Agent's last reply to a critic model and prints the parsed verdict. A
//! malformed critic reply never stops the run.

mod critic;
mod prompts;
mod report;
mod verdict;

pub use critic::CriticAgent;
pub use prompts::{
    CANNED_PROMPTS, CRITIC_SYSTEM_MESSAGE, critic_prompt, default_prompts, load_prompts,
};
pub use report::{EvaluationReport, EvaluationRun, EvaluationSummary};
pub use verdict::{
    DECODE_ERROR, EMPTY_CRITIC_ERROR, SCORE_RANGE_ERROR, parse_verdict, strip_code_fence,
};

use std::time::Duration;

use chrono::Utc;
use tokio::io::{AsyncWrite, AsyncWriteExt};

use crate::agent::ChatSession;
use crate::config::session;
use crate::formatters;
use crate::models::{EvaluationOutcome, VerdictError};

/// Response recorded when the Search Agent never produced text.
pub const NO_RESPONSE: &str = "Agent did not provide a response.";

/// Error marker used when the critic model call itself fails.
pub const CRITIC_UNAVAILABLE_ERROR: &str = "CriticUnavailable";

/// Harness pacing and bounds.
#[derive(Debug, Clone, Copy)]
pub struct HarnessOptions {
    /// Exchanges allowed per prompt.
    pub max_turns: usize,
    /// Pause between prompts.
    pub delay: Duration,
}

impl Default for HarnessOptions {
    fn default() -> Self {
        Self { max_turns: session::EVALUATION_MAX_TURNS, delay: session::EVALUATION_DELAY }
    }
}

/// Runs prompts through the agents and the critic.
#[derive(Debug)]
pub struct EvaluationHarness {
    session: ChatSession,
    critic: CriticAgent,
    prompts: Vec<String>,
    options: HarnessOptions,
}

impl EvaluationHarness {
    /// Create a harness over the built-in prompt list.
    #[must_use]
    pub fn new(session: ChatSession, critic: CriticAgent) -> Self {
        Self { session, critic, prompts: default_prompts(), options: HarnessOptions::default() }
    }

    /// Replace the prompt list.
    #[must_use]
    pub fn with_prompts(mut self, prompts: Vec<String>) -> Self {
        self.prompts = prompts;
        self
    }

    /// Replace pacing and bounds.
    #[must_use]
    pub fn with_options(mut self, options: HarnessOptions) -> Self {
        self.options = options;
        self
    }

    /// Prompts this harness will run.
    #[must_use]
    pub fn prompts(&self) -> &[String] {
        &self.prompts
    }

    /// Evaluate a single prompt and reset the agents afterwards.
    pub async fn evaluate_prompt(&mut self, prompt: &str) -> EvaluationReport {
        let max_turns = Some(self.options.max_turns);
        let agent_response = match self.session.initiate_chat(prompt, max_turns).await {
            Ok(transcript) => transcript.last_agent_message().unwrap_or(NO_RESPONSE).to_string(),
            Err(e) => {
                tracing::error!(error = %e, prompt, "Conversation failed");
                NO_RESPONSE.to_string()
            }
        };
        self.session.reset();

        let evaluation = match self.critic.evaluate(prompt, &agent_response).await {
            Ok(text) => parse_verdict(&text),
            Err(e) => {
                tracing::error!(error = %e, "Critic call failed");
                EvaluationOutcome::Error(VerdictError {
                    error: CRITIC_UNAVAILABLE_ERROR.to_string(),
                    details: Some(e.to_string()),
                    original_string: None,
                })
            }
        };

        EvaluationReport {
            prompt: prompt.to_string(),
            agent_response,
            evaluation,
            evaluated_at: Utc::now(),
        }
    }

    /// Evaluate every prompt, printing each report to `out`.
    ///
    /// # Errors
    ///
    /// Returns error only if writing to `out` fails.
    pub async fn run<W>(&mut self, out: &mut W) -> std::io::Result<EvaluationRun>
    where
        W: AsyncWrite + Unpin,
    {
        let prompts = self.prompts.clone();
        let mut reports = Vec::with_capacity(prompts.len());

        tracing::info!(
            prompts = prompts.len(),
            max_turns = self.options.max_turns,
            "Starting evaluation"
        );

        for (i, prompt) in prompts.iter().enumerate() {
            let report = self.evaluate_prompt(prompt).await;

            let block = formatters::format_report_text(&report).map_err(std::io::Error::other)?;
            out.write_all(block.as_bytes()).await?;
            out.flush().await?;
            reports.push(report);

            if i + 1 < prompts.len() {
                let secs = self.options.delay.as_secs_f64();
                let banner = format!("--- Waiting for {secs} seconds before next prompt ---\n");
                out.write_all(banner.as_bytes()).await?;
                out.flush().await?;
                tokio::time::sleep(self.options.delay).await;
            }
        }

        let run = EvaluationRun::new(reports);
        out.write_all(formatters::format_summary_markdown(&run.summary).as_bytes()).await?;
        out.flush().await?;

        Ok(run)
    }
}

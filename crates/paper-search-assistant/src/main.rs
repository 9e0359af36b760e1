//! Paper Search Assistant - Entry Point
//!
//! Interactive chat by default, plus a critic-based evaluation run and a
//! direct, model-free search command.

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use clap::{Parser, Subcommand};
use tokio::io::{AsyncWriteExt, BufReader};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use paper_search_assistant::{
    SemanticScholarClient,
    agent::ChatSession,
    config::Config,
    evaluation::{CriticAgent, EvaluationHarness, HarnessOptions, load_prompts},
    formatters,
    llm::{ChatModel, OpenAiChatModel},
    models::{ResponseFormat, SearchPapersInput, YearOperator},
    repl::Repl,
    tools::{self, ToolContext, ToolRegistry},
};

#[derive(Parser, Debug)]
#[command(name = "paper-search-assistant")]
#[command(about = "Conversational research-paper search over Semantic Scholar")]
#[command(version)]
struct Cli {
    /// Semantic Scholar API key (optional, enables higher rate limits)
    #[arg(long, global = true, env = "SEMANTIC_SCHOLAR_API_KEY")]
    api_key: Option<String>,

    /// API key for the chat completions backend
    #[arg(long, global = true, env = "OPENAI_API_KEY")]
    llm_api_key: Option<String>,

    /// Base URL of an OpenAI-compatible chat completions backend
    #[arg(long, global = true, env = "OPENAI_BASE_URL")]
    llm_base_url: Option<String>,

    /// Chat model name
    #[arg(long, global = true, env = "OPENAI_MODEL")]
    model: Option<String>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, global = true, default_value = "warn", env = "RUST_LOG")]
    log_level: String,

    /// Output logs as JSON
    #[arg(long, global = true)]
    json_logs: bool,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Interactive paper search (default)
    Chat,

    /// Score the agent on a prompt list with a critic model
    Evaluate {
        /// Exchanges allowed per prompt
        #[arg(long, default_value_t = 3)]
        max_turns: usize,

        /// Seconds to wait between prompts
        #[arg(long, default_value_t = 5)]
        delay_secs: u64,

        /// File with one prompt per line (defaults to the built-in list)
        #[arg(long)]
        prompts_file: Option<PathBuf>,

        /// Write the full run as JSON to this file
        #[arg(long)]
        output: Option<PathBuf>,
    },

    /// Run one search without a chat model
    Search {
        /// Research topic
        topic: String,

        /// Publication year
        #[arg(long)]
        year: Option<i32>,

        /// How to compare against --year
        #[arg(long, value_enum)]
        year_operator: Option<YearOperator>,

        /// Minimum citation count
        #[arg(long)]
        min_citations: Option<i32>,

        /// Maximum number of papers
        #[arg(long, default_value_t = 10)]
        limit: u32,

        /// Output format
        #[arg(long, value_enum, default_value_t = ResponseFormat::Markdown)]
        format: ResponseFormat,
    },
}

fn init_tracing(log_level: &str, json: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));

    let subscriber = tracing_subscriber::registry().with(filter);

    if json {
        subscriber.with(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr)).init();
    } else {
        subscriber
            .with(tracing_subscriber::fmt::layer().compact().with_writer(std::io::stderr))
            .init();
    }
}

fn build_config(cli: &Cli) -> anyhow::Result<Config> {
    let mut config = Config::from_env()?;

    if cli.api_key.is_some() {
        config.api_key.clone_from(&cli.api_key);
    }
    if cli.llm_api_key.is_some() {
        config.llm.api_key.clone_from(&cli.llm_api_key);
    }
    if let Some(base_url) = &cli.llm_base_url {
        config.llm.base_url.clone_from(base_url);
    }
    if let Some(model) = &cli.model {
        config.llm.model.clone_from(model);
    }

    Ok(config)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    init_tracing(&cli.log_level, cli.json_logs);

    let config = build_config(&cli)?;

    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        model = %config.llm.model,
        has_api_key = config.has_api_key(),
        "Starting Paper Search Assistant"
    );

    let client = Arc::new(SemanticScholarClient::new(&config)?);

    match cli.command.unwrap_or(Command::Chat) {
        Command::Chat => {
            let registry = Arc::new(ToolRegistry::with_all_tools(ToolContext::new(client)));
            let model: Arc<dyn ChatModel> = Arc::new(OpenAiChatModel::new(&config.llm)?);

            let mut repl = Repl::new(ChatSession::new(model, registry));
            let stdin = BufReader::new(tokio::io::stdin());
            let mut stdout = tokio::io::stdout();
            repl.run(stdin, &mut stdout).await?;

            tracing::info!(tasks = repl.tasks_run(), "Session ended");
        }
        Command::Evaluate { max_turns, delay_secs, prompts_file, output } => {
            let registry = Arc::new(ToolRegistry::with_all_tools(ToolContext::new(client)));
            let model: Arc<dyn ChatModel> = Arc::new(OpenAiChatModel::new(&config.llm)?);

            let session = ChatSession::new(Arc::clone(&model), registry);
            let mut harness = EvaluationHarness::new(session, CriticAgent::new(model))
                .with_options(HarnessOptions {
                    max_turns,
                    delay: Duration::from_secs(delay_secs),
                });
            if let Some(path) = prompts_file {
                harness = harness.with_prompts(load_prompts(&path)?);
            }

            let mut stdout = tokio::io::stdout();
            let run = harness.run(&mut stdout).await?;

            if let Some(path) = output {
                run.write_json(&path)?;
            }
        }
        Command::Search { topic, year, year_operator, min_citations, limit, format } => {
            let mut input = SearchPapersInput::new(topic).with_limit(limit);
            if let Some(year) = year {
                input = input.with_year(year, year_operator);
            }
            if let Some(min_citations) = min_citations {
                input = input.with_min_citations(min_citations);
            }
            input.validate()?;

            let records = tools::search_papers(&client, &input).await?;
            let rendered = match format {
                ResponseFormat::Markdown => formatters::format_records_markdown(&records),
                ResponseFormat::Json => formatters::records_json(&records)?,
            };

            let mut stdout = tokio::io::stdout();
            stdout.write_all(rendered.as_bytes()).await?;
            stdout.write_all(b"\n").await?;
            stdout.flush().await?;
        }
    }

    Ok(())
}

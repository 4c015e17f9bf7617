//! CLI entrypoint for BrainBytes
//!
//! This is the main binary that wires together all layers using
//! dependency injection. It also plays the "caller" role around the
//! orchestrator: empty questions are rejected here, and every reply is
//! raced against the configured deadline.

use anyhow::{anyhow, bail, Result};
use brainbytes_application::{
    ConversationEvent, ConversationLogger, GenerateReplyUseCase, NoProgress, ReplyParams,
    TIMEOUT_REPLY,
};
use brainbytes_domain::{Model, Question};
use brainbytes_infrastructure::{
    ConfigLoader, FileConfig, HuggingFaceGateway, JsonlConversationLogger, RandomChooser,
};
use brainbytes_presentation::{
    answer_with_deadline, ChatRepl, Cli, ConsoleFormatter, OutputFormat, ProgressReporter,
};
use clap::Parser;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.show_config {
        ConfigLoader::print_config_sources();
        return Ok(());
    }

    // Initialize logging based on verbosity level
    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"), // -vvv or more
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    info!("Starting BrainBytes");

    // Load configuration
    let config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_ref())
            .map_err(|e| anyhow!("Failed to load configuration: {e}"))?
    };

    ConsoleFormatter::set_color(config.output.color);

    let model: Model = cli
        .model
        .as_deref()
        .unwrap_or(&config.provider.model)
        .parse()
        .unwrap();

    let output_format = cli
        .output
        .or_else(|| {
            config
                .output
                .format
                .as_deref()
                .and_then(|s| <OutputFormat as clap::ValueEnum>::from_str(s, true).ok())
        })
        .unwrap_or(OutputFormat::Full);

    // === Dependency Injection ===
    let gateway = Arc::new(HuggingFaceGateway::new(&config.provider)?);
    let chooser = Arc::new(RandomChooser);
    let mut use_case = GenerateReplyUseCase::new(gateway, chooser, model);

    let transcript_logger = transcript_logger(&config, cli.no_transcript);
    if let Some(logger) = &transcript_logger {
        info!("Transcript: {}", logger.path().display());
        use_case = use_case.with_conversation_logger(logger.clone());
    }

    let params = ReplyParams::from_secs(config.reply.deadline_secs);

    // Chat mode
    if cli.chat {
        let mut repl = ChatRepl::new(use_case)
            .with_params(params)
            .with_progress(!cli.quiet && config.repl.show_progress)
            .with_history_file(history_file(&config));
        if let Some(logger) = transcript_logger {
            repl = repl.with_conversation_logger(logger);
        }
        repl.run().await?;
        return Ok(());
    }

    // Single question mode - question is required
    let question = match cli.question {
        Some(q) => q,
        None => bail!("Question is required. Use --chat for interactive mode."),
    };
    let question = match Question::try_new(question) {
        Some(q) => q,
        None => bail!("Question cannot be empty."),
    };

    // Race the orchestrator against the deadline
    let reply = if cli.quiet {
        answer_with_deadline(&use_case, &question, &params, &NoProgress).await
    } else {
        let progress = ProgressReporter::new();
        answer_with_deadline(&use_case, &question, &params, &progress).await
    };

    match reply {
        Some(reply) => {
            let output = match output_format {
                OutputFormat::Full => ConsoleFormatter::format(&reply),
                OutputFormat::Answer => ConsoleFormatter::format_answer_only(&reply),
                OutputFormat::Json => ConsoleFormatter::format_json(&reply),
            };
            println!("{}", output);
        }
        None => {
            if let Some(logger) = &transcript_logger {
                logger.log(ConversationEvent::new(
                    "reply_timeout",
                    serde_json::json!({
                        "question": question.content(),
                        "text": TIMEOUT_REPLY,
                    }),
                ));
            }
            println!("{}", TIMEOUT_REPLY);
        }
    }

    Ok(())
}

/// Open the JSONL transcript in the platform data directory, unless
/// disabled by config or flag.
fn transcript_logger(config: &FileConfig, no_transcript: bool) -> Option<Arc<JsonlConversationLogger>> {
    if no_transcript || !config.reply.transcript {
        return None;
    }
    let path = dirs::data_dir()?.join("brainbytes").join("transcript.jsonl");
    JsonlConversationLogger::new(path).map(Arc::new)
}

fn history_file(config: &FileConfig) -> Option<PathBuf> {
    config
        .repl
        .history_file
        .as_ref()
        .map(PathBuf::from)
        .or_else(|| dirs::data_dir().map(|p| p.join("brainbytes").join("history.txt")))
}

//! CLI command definitions

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Output format for tutoring replies
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum OutputFormat {
    /// Formatted output with classification labels
    Full,
    /// Only the answer text
    Answer,
    /// JSON output
    Json,
}

/// CLI arguments for brainbytes
#[derive(Parser, Debug)]
#[command(name = "brainbytes")]
#[command(author, version, about = "BrainBytes - tutoring assistant for students")]
#[command(long_about = r#"
BrainBytes answers a student question with help from a hosted language model.

Every question is classified first (subject category, question type,
sentiment); the labels shape the reply and pick a curated fallback answer
whenever the model is unreachable, so a usable answer always comes back.

Configuration files are loaded from (in priority order):
1. --config <path>        Explicit config file
2. ./brainbytes.toml      Project-level config
3. ~/.config/brainbytes/config.toml   Global config

Example:
  brainbytes "What is evaporation?"
  brainbytes -m google/flan-t5-large "Why is the sky blue?"
  brainbytes --chat
"#)]
pub struct Cli {
    /// The question to ask (not required in chat mode)
    pub question: Option<String>,

    /// Start interactive chat mode
    #[arg(short, long)]
    pub chat: bool,

    /// Model to query on the inference endpoint
    #[arg(short, long, value_name = "MODEL")]
    pub model: Option<String>,

    /// Output format (defaults to the configured format, else "full")
    #[arg(short, long, value_enum)]
    pub output: Option<OutputFormat>,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress progress indicators and banners
    #[arg(short, long)]
    pub quiet: bool,

    /// Path to configuration file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long)]
    pub no_config: bool,

    /// Skip writing the conversation transcript
    #[arg(long)]
    pub no_transcript: bool,

    /// Show configuration file locations and exit
    #[arg(long)]
    pub show_config: bool,
}

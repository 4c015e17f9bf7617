//! Presentation layer for BrainBytes
//!
//! This crate contains the CLI definition, output formatters, the progress
//! spinner, the deadline race around the orchestrator, and the interactive
//! chat REPL. This layer is the "caller" in the core's failure contract:
//! it rejects empty input and substitutes the fixed timeout reply when the
//! deadline wins the race.

pub mod chat;
pub mod cli;
pub mod deadline;
pub mod output;
pub mod progress;

// Re-export commonly used types
pub use chat::ChatRepl;
pub use cli::commands::{Cli, OutputFormat};
pub use deadline::answer_with_deadline;
pub use output::console::ConsoleFormatter;
pub use progress::reporter::{ProgressReporter, SimpleProgress};

//! Infrastructure layer for BrainBytes
//!
//! This crate contains the adapters behind the application ports: the
//! Hugging Face Inference API gateway, TOML configuration loading, the
//! JSONL conversation transcript writer, and the random fallback-example
//! chooser.

pub mod config;
pub mod logging;
pub mod providers;
pub mod selection;

// Re-export commonly used types
pub use config::file_config::{FileConfig, FileOutputConfig, FileProviderConfig, FileReplConfig, FileReplyConfig};
pub use config::loader::ConfigLoader;
pub use logging::jsonl_logger::JsonlConversationLogger;
pub use providers::hugging_face::HuggingFaceGateway;
pub use selection::RandomChooser;

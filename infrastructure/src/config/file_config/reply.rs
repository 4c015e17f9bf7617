//! Reply configuration from TOML (`[reply]` section)

use serde::{Deserialize, Serialize};

/// Raw reply configuration from TOML
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileReplyConfig {
    /// Seconds the caller waits before substituting the timeout reply.
    /// `0` disables the deadline.
    pub deadline_secs: u64,
    /// Write the conversation transcript (JSONL) to the data directory
    pub transcript: bool,
}

impl Default for FileReplyConfig {
    fn default() -> Self {
        Self {
            deadline_secs: 30,
            transcript: true,
        }
    }
}

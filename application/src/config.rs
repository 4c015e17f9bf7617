//! Application-level reply parameters.
//!
//! [`ReplyParams`] carries the deadline the *caller* races the orchestrator
//! against. The orchestrator itself never watches the clock beyond what the
//! network client enforces; when the deadline wins the race, the caller
//! abandons the in-flight call and shows [`TIMEOUT_REPLY`] instead.

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// The fixed user-facing message substituted when the deadline wins.
pub const TIMEOUT_REPLY: &str = "I'm sorry, but I couldn't process your request in time. Please try again with a simpler question.";

/// Caller-side reply control parameters.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReplyParams {
    /// How long the caller waits for a reply before substituting
    /// [`TIMEOUT_REPLY`]. `None` waits indefinitely.
    pub deadline: Option<Duration>,
}

impl Default for ReplyParams {
    fn default() -> Self {
        Self {
            deadline: Some(Duration::from_secs(30)),
        }
    }
}

impl ReplyParams {
    pub fn with_deadline(mut self, deadline: Option<Duration>) -> Self {
        self.deadline = deadline;
        self
    }

    /// Build from a config value where `0` means "no deadline".
    pub fn from_secs(deadline_secs: u64) -> Self {
        let deadline = if deadline_secs == 0 {
            None
        } else {
            Some(Duration::from_secs(deadline_secs))
        };
        Self { deadline }
    }
}

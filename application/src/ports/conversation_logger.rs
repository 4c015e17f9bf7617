//! Port for structured conversation logging.
//!
//! Defines the [`ConversationLogger`] trait for recording the tutoring
//! transcript (questions, replies, timeouts) to a structured log.
//!
//! This is separate from `tracing`-based operation logs: tracing carries
//! human-readable diagnostics, while this port captures the conversation
//! itself in a machine-readable format (JSONL). The downstream contract is
//! that a question and its reply are recorded as two ordered entries
//! tagged with the same category/questionType/sentiment triple.

use serde_json::Value;

/// A structured conversation event for logging.
pub struct ConversationEvent {
    /// Event type identifier (e.g., "question", "reply", "reply_timeout").
    pub event_type: &'static str,
    /// JSON payload with event-specific data.
    pub payload: Value,
}

impl ConversationEvent {
    /// Create a new conversation event.
    pub fn new(event_type: &'static str, payload: Value) -> Self {
        Self {
            event_type,
            payload,
        }
    }
}

/// Port for logging conversation events to a structured log.
///
/// The `log` method is intentionally synchronous and non-fallible so a
/// logging failure can never disturb answer generation — failures are
/// silently ignored.
pub trait ConversationLogger: Send + Sync {
    /// Record a conversation event.
    fn log(&self, event: ConversationEvent);
}

/// No-op implementation for tests and when logging is disabled.
pub struct NoConversationLogger;

impl ConversationLogger for NoConversationLogger {
    fn log(&self, _event: ConversationEvent) {}
}

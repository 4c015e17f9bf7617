//! Conversation transcript logging

pub mod jsonl_logger;

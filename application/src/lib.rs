//! Application layer for BrainBytes
//!
//! This crate defines the ports infrastructure adapters implement and the
//! use cases that orchestrate domain logic. The central piece is
//! [`GenerateReplyUseCase`]: classify the question, ask the hosted model,
//! and shape (or substitute) the answer so every invocation resolves to a
//! well-formed [`TutorReply`](brainbytes_domain::TutorReply).
//!
//! # Failure policy
//!
//! Generation failures never cross this layer's boundary. Transport errors,
//! non-success statuses and malformed payloads all collapse into the
//! fallback branch; the caller only has to handle the timeout race it runs
//! itself (see [`ReplyParams`]).

pub mod config;
pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use config::{ReplyParams, TIMEOUT_REPLY};
pub use ports::conversation_logger::{
    ConversationEvent, ConversationLogger, NoConversationLogger,
};
pub use ports::llm_gateway::{GatewayError, LlmGateway};
pub use ports::progress::{NoProgress, ProgressNotifier};
pub use use_cases::generate_reply::GenerateReplyUseCase;

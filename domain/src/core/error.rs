//! Domain error types

use thiserror::Error;

/// Domain-level errors
#[derive(Error, Debug)]
pub enum DomainError {
    #[error("Invalid question: {0}")]
    InvalidQuestion(String),

    #[error("Unknown category label: {0}")]
    UnknownCategory(String),

    #[error("Unknown question type label: {0}")]
    UnknownQuestionType(String),

    #[error("Unknown sentiment label: {0}")]
    UnknownSentiment(String),
}

impl DomainError {
    /// Check if this error comes from parsing a label string
    pub fn is_label_error(&self) -> bool {
        matches!(
            self,
            DomainError::UnknownCategory(_)
                | DomainError::UnknownQuestionType(_)
                | DomainError::UnknownSentiment(_)
        )
    }
}

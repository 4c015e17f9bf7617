//! LLM Gateway port
//!
//! Defines the interface for the hosted text-generation endpoint. The
//! orchestrator makes exactly one unretried call per question; anything
//! that goes wrong maps onto [`GatewayError`] and triggers the fallback
//! branch upstream.

use async_trait::async_trait;
use brainbytes_domain::Model;
use thiserror::Error;

/// Errors that can occur while querying the generation endpoint
#[derive(Error, Debug)]
pub enum GatewayError {
    #[error("Connection error: {0}")]
    Connection(String),

    #[error("Request failed with status {status}: {message}")]
    Status { status: u16, message: String },

    #[error("Malformed reply: {0}")]
    MalformedReply(String),

    #[error("Timeout")]
    Timeout,

    #[error("Other error: {0}")]
    Other(String),
}

impl GatewayError {
    /// Check if this error came from the transport rather than the service
    pub fn is_transport(&self) -> bool {
        matches!(self, GatewayError::Connection(_) | GatewayError::Timeout)
    }
}

/// Gateway to the hosted text-generation service
///
/// This port defines how the application layer reaches the model endpoint.
/// Implementations (adapters) live in the infrastructure layer.
#[async_trait]
pub trait LlmGateway: Send + Sync {
    /// Send a prompt to the given model and return the generated text.
    ///
    /// The prompt is the raw question text; the gateway must not rewrite it.
    async fn complete(&self, model: &Model, prompt: &str) -> Result<String, GatewayError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_transport() {
        assert!(GatewayError::Connection("refused".to_string()).is_transport());
        assert!(GatewayError::Timeout.is_transport());
        assert!(
            !GatewayError::Status {
                status: 503,
                message: "unavailable".to_string()
            }
            .is_transport()
        );
        assert!(!GatewayError::MalformedReply("no text".to_string()).is_transport());
    }

    #[test]
    fn test_status_display() {
        let error = GatewayError::Status {
            status: 504,
            message: "Gateway Timeout".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Request failed with status 504: Gateway Timeout"
        );
    }
}

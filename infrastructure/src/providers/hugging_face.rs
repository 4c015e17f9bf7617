//! Hugging Face Inference API gateway
//!
//! Implements [`LlmGateway`] against the hosted inference endpoint. One
//! POST per question: `{"inputs": <prompt>, "options": {"wait_for_model":
//! true}}` with a bearer token read from the environment. Transport
//! failures, non-success statuses and payloads without a generated-text
//! field all map onto [`GatewayError`]; the orchestrator treats them
//! uniformly as "generation failed".

use crate::config::file_config::FileProviderConfig;
use async_trait::async_trait;
use brainbytes_application::ports::llm_gateway::{GatewayError, LlmGateway};
use brainbytes_domain::Model;
use std::time::Duration;
use tracing::{debug, warn};

/// Gateway adapter for the Hugging Face Inference API.
pub struct HuggingFaceGateway {
    client: reqwest::Client,
    endpoint: String,
    token: Option<String>,
    wait_for_model: bool,
}

impl HuggingFaceGateway {
    /// Create a new gateway from provider configuration.
    ///
    /// Reads the bearer token from the environment variable the config
    /// names. A missing token is not an error — the endpoint accepts
    /// anonymous calls at a lower rate limit — but it is worth a warning.
    pub fn new(config: &FileProviderConfig) -> Result<Self, GatewayError> {
        let token = std::env::var(&config.token_env).ok();
        if token.is_none() {
            warn!(
                "{} is not set; inference calls may be rate-limited or rejected",
                config.token_env
            );
        }

        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()
            .map_err(|e| GatewayError::Other(format!("Failed to build HTTP client: {e}")))?;

        Ok(Self {
            client,
            endpoint: config.endpoint.trim_end_matches('/').to_string(),
            token,
            wait_for_model: config.wait_for_model,
        })
    }

    fn model_url(&self, model: &Model) -> String {
        format!("{}/{}", self.endpoint, model.as_str())
    }
}

#[async_trait]
impl LlmGateway for HuggingFaceGateway {
    async fn complete(&self, model: &Model, prompt: &str) -> Result<String, GatewayError> {
        let url = self.model_url(model);
        debug!(model = %model, "Sending inference request");

        let mut request = self.client.post(&url).json(&serde_json::json!({
            "inputs": prompt,
            "options": { "wait_for_model": self.wait_for_model },
        }));
        if let Some(token) = &self.token {
            request = request.bearer_auth(token);
        }

        let response = request.send().await.map_err(|e| {
            if e.is_timeout() {
                GatewayError::Timeout
            } else {
                GatewayError::Connection(e.to_string())
            }
        })?;

        let status = response.status();
        if !status.is_success() {
            return Err(GatewayError::Status {
                status: status.as_u16(),
                message: status.canonical_reason().unwrap_or("Unknown").to_string(),
            });
        }

        let payload: serde_json::Value = response
            .json()
            .await
            .map_err(|e| GatewayError::MalformedReply(format!("Invalid JSON body: {e}")))?;

        extract_generated_text(&payload)
    }
}

/// Pull the generated text out of an inference reply.
///
/// The API answers `[{"generated_text": "..."}]` for most text models and
/// `{"generated_text": "..."}` for some hosted pipelines; both are
/// accepted. Anything else is a malformed reply.
fn extract_generated_text(payload: &serde_json::Value) -> Result<String, GatewayError> {
    let text = payload
        .get(0)
        .and_then(|entry| entry.get("generated_text"))
        .or_else(|| payload.get("generated_text"))
        .and_then(|v| v.as_str());

    match text {
        Some(t) if !t.trim().is_empty() => Ok(t.to_string()),
        Some(_) => Err(GatewayError::MalformedReply(
            "Empty generated_text field".to_string(),
        )),
        None => Err(GatewayError::MalformedReply(
            "Missing generated_text field".to_string(),
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_from_array_payload() {
        let payload = serde_json::json!([{"generated_text": "Water evaporates."}]);
        assert_eq!(
            extract_generated_text(&payload).unwrap(),
            "Water evaporates."
        );
    }

    #[test]
    fn test_extract_from_object_payload() {
        let payload = serde_json::json!({"generated_text": "Water evaporates."});
        assert_eq!(
            extract_generated_text(&payload).unwrap(),
            "Water evaporates."
        );
    }

    #[test]
    fn test_missing_field_is_malformed() {
        let payload = serde_json::json!([{"summary_text": "nope"}]);
        let error = extract_generated_text(&payload).unwrap_err();
        assert!(matches!(error, GatewayError::MalformedReply(_)));
    }

    #[test]
    fn test_blank_text_is_malformed() {
        let payload = serde_json::json!([{"generated_text": "   "}]);
        assert!(extract_generated_text(&payload).is_err());
    }

    #[test]
    fn test_model_url_joins_cleanly() {
        let config = FileProviderConfig {
            endpoint: "https://api-inference.huggingface.co/models/".to_string(),
            ..FileProviderConfig::default()
        };
        let gateway = HuggingFaceGateway::new(&config).unwrap();
        assert_eq!(
            gateway.model_url(&Model::BartLargeCnn),
            "https://api-inference.huggingface.co/models/facebook/bart-large-cnn"
        );
    }
}

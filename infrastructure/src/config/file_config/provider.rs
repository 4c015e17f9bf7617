//! Provider configuration from TOML (`[provider]` section)

use serde::{Deserialize, Serialize};

/// Raw provider configuration from TOML
///
/// Points the gateway at a hosted inference endpoint. The API token itself
/// never lives in the file; only the name of the environment variable
/// holding it does.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileProviderConfig {
    /// Base URL of the inference API
    pub endpoint: String,
    /// Model identifier appended to the endpoint
    pub model: String,
    /// Environment variable holding the bearer token
    pub token_env: String,
    /// Per-request timeout enforced by the HTTP client
    pub request_timeout_secs: u64,
    /// Ask the service to queue the request while the model loads
    pub wait_for_model: bool,
}

impl Default for FileProviderConfig {
    fn default() -> Self {
        Self {
            endpoint: "https://api-inference.huggingface.co/models".to_string(),
            model: "facebook/bart-large-cnn".to_string(),
            token_env: "HUGGINGFACE_TOKEN".to_string(),
            request_timeout_secs: 10,
            wait_for_model: true,
        }
    }
}

//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! Every section has serde defaults, so a partial (or missing) file always
//! deserializes.

mod output;
mod provider;
mod repl;
mod reply;

pub use output::FileOutputConfig;
pub use provider::FileProviderConfig;
pub use repl::FileReplConfig;
pub use reply::FileReplyConfig;

use serde::{Deserialize, Serialize};

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Hosted model endpoint settings
    pub provider: FileProviderConfig,
    /// Reply deadline and transcript settings
    pub reply: FileReplyConfig,
    /// Output settings
    pub output: FileOutputConfig,
    /// REPL settings
    pub repl: FileReplConfig,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_full_config() {
        let toml_str = r#"
[provider]
model = "google/flan-t5-large"
request_timeout_secs = 20

[reply]
deadline_secs = 45
transcript = false

[output]
color = false

[repl]
show_progress = false
"#;

        let config: FileConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.provider.model, "google/flan-t5-large");
        assert_eq!(config.provider.request_timeout_secs, 20);
        assert_eq!(config.reply.deadline_secs, 45);
        assert!(!config.reply.transcript);
        assert!(!config.output.color);
        assert!(!config.repl.show_progress);
    }

    #[test]
    fn test_deserialize_partial_config() {
        let toml_str = r#"
[reply]
deadline_secs = 10
"#;

        let config: FileConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.reply.deadline_secs, 10);
        // Defaults should apply everywhere else
        assert_eq!(config.provider.model, "facebook/bart-large-cnn");
        assert!(config.output.color);
        assert!(config.repl.show_progress);
    }

    #[test]
    fn test_default_config() {
        let config = FileConfig::default();
        assert_eq!(config.reply.deadline_secs, 30);
        assert!(config.provider.wait_for_model);
        assert!(config.repl.history_file.is_none());
    }
}

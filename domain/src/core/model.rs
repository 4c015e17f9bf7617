//! Model value object representing a hosted text-generation model

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Hosted text-generation models (Value Object)
///
/// This is a domain concept naming the inference-endpoint models the tutor
/// can send a question to. The string form doubles as the model path on the
/// hosted inference API.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Model {
    /// BART fine-tuned for summarization — small and quick to respond
    BartLargeCnn,
    /// FLAN-T5, instruction-tuned
    FlanT5Large,
    /// Mistral 7B instruction-tuned
    Mistral7bInstruct,
    // Custom
    Custom(String),
}

impl Model {
    /// Get the string identifier for this model
    pub fn as_str(&self) -> &str {
        match self {
            Model::BartLargeCnn => "facebook/bart-large-cnn",
            Model::FlanT5Large => "google/flan-t5-large",
            Model::Mistral7bInstruct => "mistralai/Mistral-7B-Instruct-v0.2",
            Model::Custom(s) => s,
        }
    }
}

impl Default for Model {
    /// Returns the default model (facebook/bart-large-cnn)
    fn default() -> Self {
        Model::BartLargeCnn
    }
}

impl std::fmt::Display for Model {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for Model {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(match s {
            "facebook/bart-large-cnn" => Model::BartLargeCnn,
            "google/flan-t5-large" => Model::FlanT5Large,
            "mistralai/Mistral-7B-Instruct-v0.2" => Model::Mistral7bInstruct,
            other => Model::Custom(other.to_string()),
        })
    }
}

impl Serialize for Model {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Model {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Ok(s.parse().unwrap())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_model_roundtrip() {
        for model in [Model::BartLargeCnn, Model::FlanT5Large, Model::Mistral7bInstruct] {
            let s = model.to_string();
            let parsed: Model = s.parse().unwrap();
            assert_eq!(model, parsed);
        }
    }

    #[test]
    fn test_custom_model() {
        let model: Model = "my-org/my-model".parse().unwrap();
        assert_eq!(model, Model::Custom("my-org/my-model".to_string()));
        assert_eq!(model.to_string(), "my-org/my-model");
    }

    #[test]
    fn test_model_default() {
        let model = Model::default();
        assert_eq!(model, Model::BartLargeCnn);
    }
}

//! Reply shaping: the final payload and its text-processing passes.

pub mod format;
pub mod markdown;

use crate::classify::{labels::{Category, QuestionType, Sentiment}, ClassificationResult};
use serde::{Deserialize, Serialize};

/// The final tutoring payload returned to the caller (Value Object).
///
/// Constructed once per question and never mutated. Serializes to the wire
/// shape downstream collaborators expect: `category`, `questionType`,
/// `sentiment`, `response`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TutorReply {
    pub category: Category,
    pub question_type: QuestionType,
    pub sentiment: Sentiment,
    pub response: String,
}

impl TutorReply {
    /// Build a reply from the classifier's labels and the shaped text.
    pub fn new(labels: ClassificationResult, response: impl Into<String>) -> Self {
        Self {
            category: labels.category,
            question_type: labels.question_type,
            sentiment: labels.sentiment,
            response: response.into(),
        }
    }

    /// The labels of this reply as a classification triple.
    pub fn labels(&self) -> ClassificationResult {
        ClassificationResult {
            category: self.category,
            question_type: self.question_type,
            sentiment: self.sentiment,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classify::classify;

    #[test]
    fn test_reply_serializes_to_wire_shape() {
        let reply = TutorReply::new(classify("What is a circle?"), "A circle is round.");
        let json = serde_json::to_value(&reply).unwrap();
        assert_eq!(json["category"], "general");
        assert_eq!(json["questionType"], "definition");
        assert_eq!(json["sentiment"], "neutral");
        assert_eq!(json["response"], "A circle is round.");
    }

    #[test]
    fn test_labels_roundtrip() {
        let labels = classify("Calculate 12 * 8");
        let reply = TutorReply::new(labels, "96");
        assert_eq!(reply.labels(), labels);
    }
}

//! Type- and sentiment-conditioned reply formatting.

use crate::classify::labels::QuestionType;
use crate::select::ExampleChooser;

/// Acknowledgment clauses prepended when the student sounds frustrated.
/// One is chosen per reply through the injected chooser.
pub const ACKNOWLEDGMENTS: &[&str] = &[
    "I understand this might be confusing. Let me try to explain it more clearly.",
    "I can see this might be frustrating. Let's approach this differently.",
    "I apologize if my previous answer wasn't helpful. Let me try again.",
    "Sometimes these concepts can be challenging. Let's break this down step by step.",
    "I understand your frustration. Let me provide a simpler explanation.",
];

/// Pick an acknowledgment clause for a negative-sentiment reply.
pub fn acknowledgment(chooser: &dyn ExampleChooser) -> &'static str {
    ACKNOWLEDGMENTS[chooser.choose(ACKNOWLEDGMENTS.len())]
}

/// Shape the answer text for the detected question type.
///
/// A near-identity pass: it labels the answer where that helps ("Definition:",
/// "Explanation:") and leaves paragraph structure untouched. Example and
/// calculation answers are only labeled when the text does not already speak
/// of an example or a result.
pub fn format_by_type(text: &str, question_type: QuestionType) -> String {
    match question_type {
        QuestionType::Definition => format!("Definition: {text}"),
        QuestionType::Explanation => format!("Explanation: {text}"),
        QuestionType::Example => {
            if text.contains("example") || text.contains("Example") {
                text.to_string()
            } else {
                format!("Here's an example: {text}")
            }
        }
        QuestionType::Calculation => {
            if text.contains("result") || text.contains("answer") {
                text.to_string()
            } else {
                format!("The result is: {text}")
            }
        }
        QuestionType::General => text.to_string(),
    }
}

//! Question type detection.
//!
//! Prefix-anchored rules carry heavy bonuses (a question opening with
//! "why" is an explanation request almost regardless of what follows);
//! phrase matches add single points on top. `general` starts with one
//! point, so another type must score at least two to displace it.

use super::contains_word;
use super::keywords::{FIND_THE_PATTERNS, TYPE_PHRASES};
use super::labels::QuestionType;

/// Bonus for prefix-anchored rules.
const PREFIX_BONUS: u32 = 3;

/// Head start for the `general` default.
const GENERAL_SEED: u32 = 1;

/// Detect what kind of answer a question is asking for.
///
/// Never fails; returns [`QuestionType::General`] when no rule fires. Each
/// phrase contributes at most one point per call. Ties go to the first type
/// in [`QuestionType::ALL`], which puts `general` ahead.
pub fn detect_question_type(question: &str) -> QuestionType {
    let text = question.trim().to_lowercase();
    let mut scores: Vec<(QuestionType, u32)> = QuestionType::ALL
        .iter()
        .map(|&t| {
            let seed = if t == QuestionType::General { GENERAL_SEED } else { 0 };
            (t, seed)
        })
        .collect();

    if text.starts_with("what is") || text.starts_with("define") {
        bump(&mut scores, QuestionType::Definition, PREFIX_BONUS);
    }
    if text.starts_with("why") || text.starts_with("how does") {
        bump(&mut scores, QuestionType::Explanation, PREFIX_BONUS);
    }
    if text.starts_with("calculate")
        || text.starts_with("compute")
        || FIND_THE_PATTERNS.iter().any(|p| text.contains(p))
    {
        bump(&mut scores, QuestionType::Calculation, PREFIX_BONUS);
    }
    if contains_word(&text, "example") || text.contains("instance of") {
        bump(&mut scores, QuestionType::Example, PREFIX_BONUS);
    }

    for (question_type, phrases) in TYPE_PHRASES {
        for phrase in *phrases {
            if text.contains(phrase) {
                bump(&mut scores, *question_type, 1);
            }
        }
    }

    let mut best = (QuestionType::General, 0);
    for &(question_type, score) in &scores {
        if score > best.1 {
            best = (question_type, score);
        }
    }
    best.0
}

fn bump(scores: &mut [(QuestionType, u32)], question_type: QuestionType, points: u32) {
    if let Some(entry) = scores.iter_mut().find(|(t, _)| *t == question_type) {
        entry.1 += points;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_definition_questions() {
        assert_eq!(
            detect_question_type("What is a circle?"),
            QuestionType::Definition
        );
        assert_eq!(
            detect_question_type("Define osmosis"),
            QuestionType::Definition
        );
        assert_eq!(
            detect_question_type("What is photosynthesis?"),
            QuestionType::Definition
        );
    }

    #[test]
    fn test_explanation_questions() {
        assert_eq!(
            detect_question_type("Why is the sky blue?"),
            QuestionType::Explanation
        );
        assert_eq!(
            detect_question_type("How does a battery store charge?"),
            QuestionType::Explanation
        );
        assert_eq!(
            detect_question_type("Why does the sun rise in the east?"),
            QuestionType::Explanation
        );
    }

    #[test]
    fn test_example_questions() {
        assert_eq!(
            detect_question_type("Give an example of a mammal"),
            QuestionType::Example
        );
        assert_eq!(
            detect_question_type("Show me an instance of alliteration"),
            QuestionType::Example
        );
    }

    #[test]
    fn test_calculation_questions() {
        assert_eq!(
            detect_question_type("Calculate 12 * 8"),
            QuestionType::Calculation
        );
        assert_eq!(
            detect_question_type("Compute the average of 3, 5 and 7"),
            QuestionType::Calculation
        );
        assert_eq!(
            detect_question_type("Can you find the value of x?"),
            QuestionType::Calculation
        );
    }

    #[test]
    fn test_general_by_default() {
        assert_eq!(
            detect_question_type("Tell me about the Philippines"),
            QuestionType::General
        );
        assert_eq!(detect_question_type(""), QuestionType::General);
    }

    #[test]
    fn test_single_weak_hit_does_not_displace_general() {
        // "such as" alone scores one, tying general's head start; the tie
        // goes to general
        assert_eq!(
            detect_question_type("Creatures such as whales are mammals"),
            QuestionType::General
        );
    }

    #[test]
    fn test_leading_whitespace_is_ignored() {
        assert_eq!(
            detect_question_type("   What is a circle?"),
            QuestionType::Definition
        );
    }
}

//! Question classification.
//!
//! Three independent keyword/pattern classifiers label every question with a
//! subject [`Category`], a [`QuestionType`], and a [`Sentiment`]. All three
//! are total functions over arbitrary strings: they never fail, and the
//! zero-element defaults (`general`, `neutral`) are returned when no signal
//! fires.
//!
//! Matching is done on the lower-cased text. Single keywords match on word
//! boundaries (so `hard` does not fire inside `hardware`); multi-word
//! phrases match with boundaries at both ends.

pub mod category;
pub mod keywords;
pub mod labels;
pub mod question_type;
pub mod sentiment;

use labels::{Category, QuestionType, Sentiment};
use serde::{Deserialize, Serialize};

/// The three labels computed for a single question (Value Object).
///
/// Computed fresh per question, immutable, no identity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassificationResult {
    pub category: Category,
    pub question_type: QuestionType,
    pub sentiment: Sentiment,
}

/// Run all three classifiers once over the raw question text.
pub fn classify(question: &str) -> ClassificationResult {
    ClassificationResult {
        category: category::detect_category(question),
        question_type: question_type::detect_question_type(question),
        sentiment: sentiment::detect_sentiment(question),
    }
}

/// Check whether `needle` occurs in `haystack` on word boundaries.
///
/// A boundary is any position not surrounded by alphanumeric characters on
/// the relevant side, so punctuation and string ends both qualify.
pub(crate) fn contains_word(haystack: &str, needle: &str) -> bool {
    haystack
        .match_indices(needle)
        .any(|(start, _)| is_boundary_match(haystack, start, needle.len()))
}

/// All word-boundary match positions of `needle` in `haystack`.
pub(crate) fn word_indices(haystack: &str, needle: &str) -> Vec<usize> {
    haystack
        .match_indices(needle)
        .filter(|(start, _)| is_boundary_match(haystack, *start, needle.len()))
        .map(|(start, _)| start)
        .collect()
}

fn is_boundary_match(haystack: &str, start: usize, len: usize) -> bool {
    let before_ok = start == 0
        || !haystack[..start]
            .chars()
            .next_back()
            .is_some_and(|c| c.is_alphanumeric());
    let end = start + len;
    let after_ok = end == haystack.len()
        || !haystack[end..]
            .chars()
            .next()
            .is_some_and(|c| c.is_alphanumeric());
    before_ok && after_ok
}

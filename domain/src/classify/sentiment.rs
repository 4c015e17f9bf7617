//! Sentiment detection.
//!
//! Word-boundary keyword scan with three refinements over raw counting:
//! a negation lookback window, double weight for a fixed subset of strong
//! words, and exact-phrase bonuses for common gratitude and frustration
//! wordings whose individual words would not dominate the lists.
//!
//! A negated positive word ("not helpful") contributes to the *negative*
//! score rather than subtracting from the positive one, so a message can
//! register negative without containing a single literal negative keyword.

use super::keywords::{
    FRUSTRATION_PHRASES, GRATITUDE_PHRASES, NEGATION_TOKENS, NEGATIVE_KEYWORDS, POSITIVE_KEYWORDS,
    STRONG_NEGATIVE, STRONG_POSITIVE,
};
use super::labels::Sentiment;
use super::{contains_word, word_indices};

/// Characters scanned backwards from a positive hit for a negation token.
const NEGATION_WINDOW: usize = 20;

/// Bonus for the exact-phrase overrides.
const PHRASE_BONUS: u32 = 3;

/// Detect the sentiment of a question.
///
/// Never fails. Positive wins on `pos > neg && pos >= 1`, negative on the
/// symmetric condition, neutral otherwise.
pub fn detect_sentiment(question: &str) -> Sentiment {
    let text = question.to_lowercase();
    let mut positive = 0u32;
    let mut negative = 0u32;

    for keyword in POSITIVE_KEYWORDS {
        for start in word_indices(&text, keyword) {
            if is_negated(&text, start) {
                negative += 1;
            } else {
                positive += weight(keyword, STRONG_POSITIVE);
            }
        }
    }

    for keyword in NEGATIVE_KEYWORDS {
        let hits = word_indices(&text, keyword).len() as u32;
        negative += hits * weight(keyword, STRONG_NEGATIVE);
    }

    for phrase in GRATITUDE_PHRASES {
        if text.contains(phrase) {
            positive += PHRASE_BONUS;
        }
    }
    for phrase in FRUSTRATION_PHRASES {
        if text.contains(phrase) {
            negative += PHRASE_BONUS;
        }
    }

    if positive > negative && positive >= 1 {
        Sentiment::Positive
    } else if negative > positive && negative >= 1 {
        Sentiment::Negative
    } else {
        Sentiment::Neutral
    }
}

fn weight(keyword: &str, strong: &[&str]) -> u32 {
    if strong.contains(&keyword) { 2 } else { 1 }
}

/// Check the window immediately preceding a positive hit for a negation
/// token. The window is byte-based; the start is nudged forward to the
/// nearest character boundary.
fn is_negated(text: &str, hit_start: usize) -> bool {
    let mut window_start = hit_start.saturating_sub(NEGATION_WINDOW);
    while !text.is_char_boundary(window_start) {
        window_start += 1;
    }
    let window = &text[window_start..hit_start];
    NEGATION_TOKENS
        .iter()
        .any(|token| contains_word(window, token))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_positive_from_keywords() {
        assert_eq!(
            detect_sentiment("This is a great explanation, thank you"),
            Sentiment::Positive
        );
        assert_eq!(
            detect_sentiment("Thank you for this helpful information"),
            Sentiment::Positive
        );
    }

    #[test]
    fn test_negative_from_keywords() {
        assert_eq!(
            detect_sentiment("I am disappointed with this answer"),
            Sentiment::Negative
        );
        assert_eq!(
            detect_sentiment("This is so confusing and difficult"),
            Sentiment::Negative
        );
    }

    #[test]
    fn test_neutral_for_plain_questions() {
        assert_eq!(
            detect_sentiment("What is the capital of Japan?"),
            Sentiment::Neutral
        );
        assert_eq!(
            detect_sentiment("What is the capital of France?"),
            Sentiment::Neutral
        );
    }

    #[test]
    fn test_negated_positive_becomes_negative() {
        // No literal negative keyword anywhere in the text
        assert_eq!(
            detect_sentiment("This is not helpful at all"),
            Sentiment::Negative
        );
        assert_eq!(detect_sentiment("I don't like this"), Sentiment::Negative);
    }

    #[test]
    fn test_negation_window_is_bounded() {
        // "never" sits well outside the 20-character window before "clear"
        assert_eq!(
            detect_sentiment("never mind the other thing, this answer was clear"),
            Sentiment::Positive
        );
    }

    #[test]
    fn test_strong_words_weigh_double() {
        // One strong positive (2) beats two plain negatives? No — but it
        // beats one plain negative.
        assert_eq!(
            detect_sentiment("excellent, though the start was hard"),
            Sentiment::Positive
        );
    }

    #[test]
    fn test_gratitude_phrase_bonus() {
        // "hard" alone would tie a single "thanks"; the phrase bonus tips it
        assert_eq!(
            detect_sentiment("hard material but thank you so much"),
            Sentiment::Positive
        );
    }

    #[test]
    fn test_frustration_phrase_bonus() {
        assert_eq!(
            detect_sentiment("this makes no sense to me"),
            Sentiment::Negative
        );
    }

    #[test]
    fn test_balanced_scores_are_neutral() {
        assert_eq!(
            detect_sentiment("the good part was good, the bad part was bad"),
            Sentiment::Neutral
        );
    }

    #[test]
    fn test_multibyte_text_does_not_panic() {
        assert_eq!(detect_sentiment("médaille — great café"), Sentiment::Positive);
    }
}

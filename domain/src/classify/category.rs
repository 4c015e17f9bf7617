//! Subject category detection.
//!
//! Score-based rather than first-match: a question touching several math
//! keywords beats a single weak hit in another subject, and two bonus rules
//! catch signals the keyword table cannot express (numeric expressions,
//! specialized science vocabulary).

use super::contains_word;
use super::keywords::{
    ARITHMETIC_SYMBOLS, COMPUTATION_VERBS, SPECIALIZED_SCIENCE_TERMS, SUBJECT_KEYWORDS,
};
use super::labels::Category;

/// Fixed bonus for the two pattern rules. Large enough that a pattern hit
/// outweighs any realistic keyword accumulation in another subject.
const PATTERN_BONUS: u32 = 5;

/// Detect the subject category of a question.
///
/// Never fails; returns [`Category::General`] when no rule fires. Each
/// keyword contributes at most one point per call regardless of how many
/// times it occurs. Ties go to the first category in [`Category::ALL`].
pub fn detect_category(question: &str) -> Category {
    let text = question.to_lowercase();
    let mut scores: Vec<(Category, u32)> = Category::ALL.iter().map(|&c| (c, 0)).collect();

    // Numeric expressions and computation verbs are math even when no
    // literal math keyword appears ("What is 2+2?").
    let has_digit = text.chars().any(|c| c.is_ascii_digit());
    let has_operator = text.chars().any(|c| ARITHMETIC_SYMBOLS.contains(&c));
    let asks_computation = COMPUTATION_VERBS.iter().any(|v| contains_word(&text, v));
    if (has_digit && has_operator) || asks_computation {
        bump(&mut scores, Category::Math, PATTERN_BONUS);
    }

    if SPECIALIZED_SCIENCE_TERMS
        .iter()
        .any(|term| contains_word(&text, term))
    {
        bump(&mut scores, Category::Science, PATTERN_BONUS);
    }

    for (category, keywords) in SUBJECT_KEYWORDS {
        for keyword in *keywords {
            if contains_word(&text, keyword) {
                bump(&mut scores, *category, 1);
            }
        }
    }

    // Arg-max with ties broken by enumeration order. The initial best is
    // (General, 0), which also covers the all-zero case.
    let mut best = (Category::General, 0);
    for &(category, score) in &scores {
        if score > best.1 {
            best = (category, score);
        }
    }
    best.0
}

fn bump(scores: &mut [(Category, u32)], category: Category, points: u32) {
    if let Some(entry) = scores.iter_mut().find(|(c, _)| *c == category) {
        entry.1 += points;
    }
}

//! Curated fallback replies.
//!
//! When the hosted model is unreachable, times out at the transport, or
//! returns a malformed payload, the student still gets a topic-appropriate
//! answer. Selection preference, per category:
//!
//! 1. A sub-topic rule whose needle occurs in the question (deterministic)
//! 2. One of the category's curated example pairs, picked through the
//!    injected [`ExampleChooser`]
//! 3. The category's default answer
//! 4. The generic "please rephrase" answer
//!
//! Every path returns non-empty text.

pub mod content;

use crate::classify::labels::Category;
use crate::select::ExampleChooser;
use content::{CATEGORY_DEFAULTS, CURATED_EXAMPLES, GENERIC_REPHRASE, SUBTOPIC_RULES};

/// Select a fallback answer for a failed generation.
pub fn fallback_reply(
    category: Category,
    question: &str,
    chooser: &dyn ExampleChooser,
) -> String {
    let text = question.to_lowercase();

    if let Some(rules) = lookup(SUBTOPIC_RULES, category) {
        for (needle, answer) in rules {
            if text.contains(needle) {
                return (*answer).to_string();
            }
        }
    }

    if let Some(examples) = lookup(CURATED_EXAMPLES, category) {
        if !examples.is_empty() {
            let (_, answer) = examples[chooser.choose(examples.len())];
            return answer.to_string();
        }
    }

    if let Some((_, answer)) = CATEGORY_DEFAULTS.iter().find(|(c, _)| *c == category) {
        return (*answer).to_string();
    }

    GENERIC_REPHRASE.to_string()
}

fn lookup<'a>(
    table: &'a [(Category, &'a [(&'a str, &'a str)])],
    category: Category,
) -> Option<&'a [(&'a str, &'a str)]> {
    table
        .iter()
        .find(|(c, _)| *c == category)
        .map(|(_, entries)| *entries)
}

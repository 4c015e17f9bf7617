//! Static keyword and phrase tables.
//!
//! Process-wide constant data: loaded once, never mutated at runtime, safe
//! for unsynchronized concurrent reads. The tables drive all three
//! classifiers; the two bonus lists in the category classifier patch the
//! systematic gaps keyword lists can't cover (numeric expressions are not
//! literally "math" words, and niche science vocabulary does not scale well
//! as keyword-list entries).

use super::labels::{Category, QuestionType};

/// One point per matched keyword, per subject.
pub(crate) const SUBJECT_KEYWORDS: &[(Category, &[&str])] = &[
    (
        Category::Math,
        &[
            "calculate",
            "math",
            "addition",
            "subtraction",
            "multiply",
            "division",
            "equation",
            "algebra",
            "geometry",
            "calculus",
            "trigonometry",
            "fraction",
            "decimal",
            "percentage",
            "sum",
            "difference",
            "product",
            "quotient",
        ],
    ),
    (
        Category::Science,
        &[
            "science",
            "evaporation",
            "precipitation",
            "water",
            "chemical",
            "biology",
            "physics",
            "chemistry",
            "atoms",
            "molecules",
            "cells",
            "dna",
            "evolution",
            "energy",
            "force",
            "gravity",
            "electricity",
            "magnetism",
            "ecosystem",
            "planet",
            "solar system",
            "temperature",
        ],
    ),
    (
        Category::History,
        &[
            "history",
            "capital",
            "philippines",
            "president",
            "war",
            "revolution",
            "empire",
            "civilization",
            "ancient",
            "medieval",
            "modern",
            "century",
            "decade",
            "era",
            "dynasty",
            "kingdom",
            "democracy",
            "monarch",
            "constitution",
        ],
    ),
    (
        Category::Literature,
        &[
            "book",
            "novel",
            "poem",
            "author",
            "character",
            "plot",
            "literature",
            "fiction",
            "nonfiction",
            "genre",
            "metaphor",
            "simile",
            "theme",
            "symbolism",
            "playwright",
            "poetry",
            "prose",
            "narrative",
            "story",
        ],
    ),
    (
        Category::Geography,
        &[
            "country",
            "mountain",
            "river",
            "ocean",
            "continent",
            "climate",
            "population",
            "city",
            "map",
            "region",
            "latitude",
            "longitude",
            "equator",
            "hemisphere",
            "border",
            "terrain",
            "landform",
            "geography",
        ],
    ),
    (
        Category::Language,
        &[
            "language",
            "grammar",
            "vocabulary",
            "noun",
            "verb",
            "adjective",
            "adverb",
            "syntax",
            "semantics",
            "pronunciation",
            "dialect",
            "idiom",
            "phrase",
            "translation",
            "linguistic",
            "bilingual",
            "multilingual",
        ],
    ),
];

/// Symbols that, together with a digit, mark a numeric expression.
pub(crate) const ARITHMETIC_SYMBOLS: &[char] = &['+', '-', '*', '/', '=', '<', '>'];

/// Verbs that ask for a computation outright.
pub(crate) const COMPUTATION_VERBS: &[&str] =
    &["calculate", "solve", "equation", "formula", "compute"];

/// Specialized science nouns that are unambiguous on their own but too
/// narrow to earn entries in the general science keyword list.
pub(crate) const SPECIALIZED_SCIENCE_TERMS: &[&str] = &[
    "neutron",
    "proton",
    "electron",
    "isotope",
    "photon",
    "photosynthesis",
    "chromosome",
    "mitosis",
    "osmosis",
    "enzyme",
    "quark",
    "nucleus",
];

/// One point per matched phrase, per question type. Substring matches.
pub(crate) const TYPE_PHRASES: &[(QuestionType, &[&str])] = &[
    (
        QuestionType::Definition,
        &[
            "what is",
            "define",
            "meaning of",
            "definition of",
            "describe what",
            "what does",
            "what are",
            "what was",
            "what were",
        ],
    ),
    (
        QuestionType::Explanation,
        &[
            "how does",
            "explain",
            "why does",
            "why is",
            "why are",
            "how is",
            "how are",
            "what happens",
            "what caused",
            "how can",
        ],
    ),
    (
        QuestionType::Example,
        &[
            "give an example",
            "for example",
            "show me an example",
            "such as",
            "provide an example",
            "what is an example",
            "like what",
        ],
    ),
    (
        QuestionType::Calculation,
        &[
            "calculate",
            "compute",
            "solve",
            "find the value",
            "what is the result",
            "how much is",
            "evaluate",
        ],
    ),
];

/// "find the ..." request forms that mark a calculation.
pub(crate) const FIND_THE_PATTERNS: &[&str] =
    &["find the value", "find the result", "find the answer"];

/// Positive sentiment keywords. Strong words weigh double.
pub(crate) const POSITIVE_KEYWORDS: &[&str] = &[
    "good",
    "great",
    "excellent",
    "amazing",
    "wonderful",
    "fantastic",
    "brilliant",
    "clear",
    "helpful",
    "useful",
    "thanks",
    "thank you",
    "appreciate",
    "love",
    "like",
    "enjoy",
    "perfect",
    "awesome",
];

pub(crate) const STRONG_POSITIVE: &[&str] = &[
    "excellent",
    "amazing",
    "fantastic",
    "brilliant",
    "wonderful",
    "awesome",
    "perfect",
];

/// Negative sentiment keywords. Strong words weigh double.
pub(crate) const NEGATIVE_KEYWORDS: &[&str] = &[
    "confused",
    "frustrating",
    "frustrated",
    "difficult",
    "hard",
    "not understand",
    "don't get it",
    "can't grasp",
    "stupid",
    "unclear",
    "complicated",
    "confusing",
    "impossible",
    "hate",
    "annoyed",
    "annoying",
    "doesn't make sense",
    "doesn't work",
    "wrong",
    "bad",
    "terrible",
    "horrible",
    "awful",
    "worst",
    "disappointed",
    "disappointing",
];

pub(crate) const STRONG_NEGATIVE: &[&str] = &[
    "terrible",
    "horrible",
    "awful",
    "hate",
    "worst",
    "impossible",
];

/// Tokens that flip a following positive word into negative evidence.
pub(crate) const NEGATION_TOKENS: &[&str] = &["not", "don't", "doesn't", "can't", "won't", "never"];

/// Exact phrases that override keyword arithmetic with a +3 bonus.
pub(crate) const GRATITUDE_PHRASES: &[&str] =
    &["thank you so much", "thanks so much", "really appreciate"];

pub(crate) const FRUSTRATION_PHRASES: &[&str] =
    &["i give up", "makes no sense", "so frustrated"];

//! Classification label enums.
//!
//! Each label domain is a closed enum with a fixed enumeration order. The
//! order matters: the scoring classifiers break ties by taking the first
//! label reaching the maximum score, walking the `ALL` arrays below.

use crate::core::error::DomainError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Subject category of a question (Value Object)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Math,
    Science,
    History,
    Literature,
    Geography,
    Language,
    General,
}

impl Category {
    /// All categories in tie-break order. `General` comes last and is the
    /// all-zero default.
    pub const ALL: [Category; 7] = [
        Category::Math,
        Category::Science,
        Category::History,
        Category::Literature,
        Category::Geography,
        Category::Language,
        Category::General,
    ];

    /// Get the string identifier for this category
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Math => "math",
            Category::Science => "science",
            Category::History => "history",
            Category::Literature => "literature",
            Category::Geography => "geography",
            Category::Language => "language",
            Category::General => "general",
        }
    }
}

/// Kind of answer a question is asking for (Value Object)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum QuestionType {
    Definition,
    Explanation,
    Example,
    Calculation,
    General,
}

impl QuestionType {
    /// All question types in tie-break order. `General` comes first: it is
    /// seeded with a head-start score, and another type must strictly beat
    /// it to win.
    pub const ALL: [QuestionType; 5] = [
        QuestionType::General,
        QuestionType::Definition,
        QuestionType::Explanation,
        QuestionType::Example,
        QuestionType::Calculation,
    ];

    /// Get the string identifier for this question type
    pub fn as_str(&self) -> &'static str {
        match self {
            QuestionType::Definition => "definition",
            QuestionType::Explanation => "explanation",
            QuestionType::Example => "example",
            QuestionType::Calculation => "calculation",
            QuestionType::General => "general",
        }
    }
}

/// Detected sentiment of a question (Value Object)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Sentiment {
    Positive,
    Negative,
    Neutral,
}

impl Sentiment {
    /// Get the string identifier for this sentiment
    pub fn as_str(&self) -> &'static str {
        match self {
            Sentiment::Positive => "positive",
            Sentiment::Negative => "negative",
            Sentiment::Neutral => "neutral",
        }
    }
}

macro_rules! label_impls {
    ($ty:ident) => {
        impl std::fmt::Display for $ty {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.as_str())
            }
        }

        impl Serialize for $ty {
            fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
            where
                S: Serializer,
            {
                serializer.serialize_str(self.as_str())
            }
        }

        impl<'de> Deserialize<'de> for $ty {
            fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
            where
                D: Deserializer<'de>,
            {
                let s = String::deserialize(deserializer)?;
                s.parse().map_err(serde::de::Error::custom)
            }
        }
    };
}

label_impls!(Category);
label_impls!(QuestionType);
label_impls!(Sentiment);

impl std::str::FromStr for Category {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .iter()
            .copied()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| DomainError::UnknownCategory(s.to_string()))
    }
}

impl std::str::FromStr for QuestionType {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        QuestionType::ALL
            .iter()
            .copied()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| DomainError::UnknownQuestionType(s.to_string()))
    }
}

impl std::str::FromStr for Sentiment {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        [Sentiment::Positive, Sentiment::Negative, Sentiment::Neutral]
            .iter()
            .copied()
            .find(|v| v.as_str() == s)
            .ok_or_else(|| DomainError::UnknownSentiment(s.to_string()))
    }
}

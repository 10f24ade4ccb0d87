//! Statistic Names

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// A document-level statistic held by the feature store
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TextStatistic {
    /// Words with a single syllable
    #[serde(rename = "monosyll_count")]
    MonosyllableCount,
    /// Words with three or more syllables
    #[serde(rename = "polysyll_count")]
    PolysyllableCount,
    TokenCount,
    SentenceCount,
    UniqueTokensCount,
    /// Tokens per sentence
    AverageSentenceLength,
}

impl TextStatistic {
    /// Every statistic, in canonical column order
    pub const ALL: [TextStatistic; 6] = [
        TextStatistic::MonosyllableCount,
        TextStatistic::PolysyllableCount,
        TextStatistic::TokenCount,
        TextStatistic::SentenceCount,
        TextStatistic::UniqueTokensCount,
        TextStatistic::AverageSentenceLength,
    ];

    /// Column name of the statistic
    pub fn as_str(&self) -> &'static str {
        match self {
            TextStatistic::MonosyllableCount => "monosyll_count",
            TextStatistic::PolysyllableCount => "polysyll_count",
            TextStatistic::TokenCount => "token_count",
            TextStatistic::SentenceCount => "sentence_count",
            TextStatistic::UniqueTokensCount => "unique_tokens_count",
            TextStatistic::AverageSentenceLength => "average_sentence_length",
        }
    }

    /// Column names of every statistic, in canonical order
    pub fn names() -> Vec<&'static str> {
        Self::ALL.iter().map(TextStatistic::as_str).collect()
    }
}

impl fmt::Display for TextStatistic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Name outside the statistic set
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown statistic: {0}")]
pub struct ParseStatisticError(pub String);

impl FromStr for TextStatistic {
    type Err = ParseStatisticError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|stat| stat.as_str() == s)
            .ok_or_else(|| ParseStatisticError(s.to_string()))
    }
}

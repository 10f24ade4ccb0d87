//! In-Memory Store Implementation

use crate::{FeatureStore, StoreError, TextStatistic};
use ndarray::Array2;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::RwLock;
use tracing::{debug, info};

/// Characters of a document kept in error messages
const PREVIEW_CHARS: usize = 40;

/// Precomputed statistics for one document
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct TextStats {
    pub monosyll_count: f64,
    pub polysyll_count: f64,
    pub token_count: f64,
    pub sentence_count: f64,
    pub unique_tokens_count: f64,
    pub average_sentence_length: f64,
}

impl TextStats {
    /// Value of a single statistic
    pub fn get(&self, stat: TextStatistic) -> f64 {
        match stat {
            TextStatistic::MonosyllableCount => self.monosyll_count,
            TextStatistic::PolysyllableCount => self.polysyll_count,
            TextStatistic::TokenCount => self.token_count,
            TextStatistic::SentenceCount => self.sentence_count,
            TextStatistic::UniqueTokensCount => self.unique_tokens_count,
            TextStatistic::AverageSentenceLength => self.average_sentence_length,
        }
    }
}

/// Snapshot entry: a document and its statistics
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoreRecord {
    pub text: String,
    #[serde(flatten)]
    pub stats: TextStats,
}

/// Feature store holding precomputed statistics keyed by document text
pub struct InMemoryFeatureStore {
    records: RwLock<HashMap<String, TextStats>>,
}

impl InMemoryFeatureStore {
    /// Create an empty store
    pub fn new() -> Self {
        info!("Creating in-memory feature store");
        Self {
            records: RwLock::new(HashMap::new()),
        }
    }

    /// Create a store from snapshot records; later duplicates win
    pub fn with_records<I>(records: I) -> Self
    where
        I: IntoIterator<Item = StoreRecord>,
    {
        let map: HashMap<_, _> = records.into_iter().map(|r| (r.text, r.stats)).collect();
        info!("Creating in-memory feature store with {} documents", map.len());
        Self {
            records: RwLock::new(map),
        }
    }

    /// Insert or replace the statistics of a document
    pub fn insert(&self, text: impl Into<String>, stats: TextStats) -> Result<(), StoreError> {
        let mut records = self
            .records
            .write()
            .map_err(|e| StoreError::Lock(e.to_string()))?;
        records.insert(text.into(), stats);
        Ok(())
    }

    /// Statistics of a document, if present
    pub fn get(&self, text: &str) -> Result<Option<TextStats>, StoreError> {
        let records = self
            .records
            .read()
            .map_err(|e| StoreError::Lock(e.to_string()))?;
        Ok(records.get(text).copied())
    }

    pub fn contains(&self, text: &str) -> Result<bool, StoreError> {
        let records = self
            .records
            .read()
            .map_err(|e| StoreError::Lock(e.to_string()))?;
        Ok(records.contains_key(text))
    }

    /// Number of documents held
    pub fn len(&self) -> Result<usize, StoreError> {
        let records = self
            .records
            .read()
            .map_err(|e| StoreError::Lock(e.to_string()))?;
        Ok(records.len())
    }

    pub fn is_empty(&self) -> Result<bool, StoreError> {
        Ok(self.len()? == 0)
    }

    /// Remove every document
    pub fn clear(&self) -> Result<(), StoreError> {
        let mut records = self
            .records
            .write()
            .map_err(|e| StoreError::Lock(e.to_string()))?;
        records.clear();
        Ok(())
    }
}

impl Default for InMemoryFeatureStore {
    fn default() -> Self {
        Self::new()
    }
}

impl FeatureStore for InMemoryFeatureStore {
    type Error = StoreError;

    fn get_textstats_from_texts<D: AsRef<str>>(
        &self,
        texts: &[D],
        columns: &[TextStatistic],
    ) -> Result<Array2<f64>, StoreError> {
        let records = self
            .records
            .read()
            .map_err(|e| StoreError::Lock(e.to_string()))?;

        let mut matrix = Array2::zeros((texts.len(), columns.len()));
        for (mut row, text) in matrix.rows_mut().into_iter().zip(texts) {
            let text = text.as_ref();
            let stats = records.get(text).ok_or_else(|| StoreError::MissingDocument {
                text: text.chars().take(PREVIEW_CHARS).collect(),
            })?;
            for (cell, &stat) in row.iter_mut().zip(columns) {
                *cell = stats.get(stat);
            }
        }

        debug!(
            "Looked up {} statistics for {} documents",
            columns.len(),
            texts.len()
        );
        Ok(matrix)
    }
}

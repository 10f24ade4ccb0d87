//! Feature Store
//!
//! Lookup boundary for precomputed document-level text statistics, keyed by
//! document text. Nothing in this crate computes a statistic.

mod repository;
mod statistic;

pub use repository::{InMemoryFeatureStore, StoreRecord, TextStats};
pub use statistic::{ParseStatisticError, TextStatistic};

use ndarray::Array2;
use std::sync::Arc;
use thiserror::Error;

/// Store errors
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Document not found in feature store: {text:?}")]
    MissingDocument { text: String },
    #[error("Lock error: {0}")]
    Lock(String),
}

/// Source of per-document statistics.
///
/// Implementations return one row per text and one column per requested
/// statistic, both in the order given.
pub trait FeatureStore {
    type Error: std::error::Error + Send + Sync + 'static;

    /// Look up `columns` for every text in `texts`
    fn get_textstats_from_texts<D: AsRef<str>>(
        &self,
        texts: &[D],
        columns: &[TextStatistic],
    ) -> Result<Array2<f64>, Self::Error>;
}

impl<T: FeatureStore + ?Sized> FeatureStore for &T {
    type Error = T::Error;

    fn get_textstats_from_texts<D: AsRef<str>>(
        &self,
        texts: &[D],
        columns: &[TextStatistic],
    ) -> Result<Array2<f64>, Self::Error> {
        (**self).get_textstats_from_texts(texts, columns)
    }
}

impl<T: FeatureStore + ?Sized> FeatureStore for Box<T> {
    type Error = T::Error;

    fn get_textstats_from_texts<D: AsRef<str>>(
        &self,
        texts: &[D],
        columns: &[TextStatistic],
    ) -> Result<Array2<f64>, Self::Error> {
        (**self).get_textstats_from_texts(texts, columns)
    }
}

impl<T: FeatureStore + ?Sized> FeatureStore for Arc<T> {
    type Error = T::Error;

    fn get_textstats_from_texts<D: AsRef<str>>(
        &self,
        texts: &[D],
        columns: &[TextStatistic],
    ) -> Result<Array2<f64>, Self::Error> {
        (**self).get_textstats_from_texts(texts, columns)
    }
}

//! Text Statistics Stage

use crate::columns::validate_columns;
use crate::error::ConfigError;
use crate::settings::TextstatsConfig;
use crate::transformer::Transformer;
use feature_store::{FeatureStore, TextStatistic};
use ndarray::Array2;
use std::fmt;
use tracing::{debug, info};

/// Pipeline stage returning precomputed document statistics from a feature
/// store.
///
/// The store is borrowed; whoever assembles the pipeline owns it. Columns
/// are validated once, at construction, and never change afterwards.
pub struct TextstatsTransformer<'s, S: ?Sized> {
    feature_store: &'s S,
    columns: Vec<TextStatistic>,
}

impl<'s, S: FeatureStore + ?Sized> TextstatsTransformer<'s, S> {
    /// Create a stage returning all six statistics
    pub fn new(feature_store: &'s S) -> Self {
        Self {
            feature_store,
            columns: TextStatistic::ALL.to_vec(),
        }
    }

    /// Create a stage returning the named statistics, in the given order
    pub fn with_columns<I, N>(feature_store: &'s S, columns: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = N>,
        N: AsRef<str>,
    {
        let columns = validate_columns(columns)?;
        info!("Text statistics stage configured with {} columns", columns.len());
        Ok(Self {
            feature_store,
            columns,
        })
    }

    /// Create a stage from loaded configuration
    pub fn from_config(feature_store: &'s S, config: &TextstatsConfig) -> Result<Self, ConfigError> {
        Self::with_columns(feature_store, &config.columns)
    }

    /// Configured statistics, in output order
    pub fn columns(&self) -> &[TextStatistic] {
        &self.columns
    }
}

impl<S: ?Sized> fmt::Debug for TextstatsTransformer<'_, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TextstatsTransformer")
            .field("columns", &self.columns)
            .finish_non_exhaustive()
    }
}

impl<S: FeatureStore + ?Sized> Transformer for TextstatsTransformer<'_, S> {
    type Error = S::Error;

    /// Nothing to learn.
    fn fit<D: AsRef<str>>(
        &mut self,
        _documents: &[D],
        _labels: Option<&[f64]>,
    ) -> Result<&mut Self, S::Error> {
        Ok(self)
    }

    /// Store errors are returned as-is.
    fn transform<D: AsRef<str>>(&self, documents: &[D]) -> Result<Array2<f64>, S::Error> {
        debug!(
            "Fetching {} statistics for {} documents",
            self.columns.len(),
            documents.len()
        );
        self.feature_store
            .get_textstats_from_texts(documents, &self.columns)
    }

    fn feature_names_out(&self, _input_features: Option<&[String]>) -> Vec<String> {
        self.columns.iter().map(|c| c.as_str().to_string()).collect()
    }
}

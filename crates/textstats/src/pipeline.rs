//! Stage runner
//!
//! Drives a [`Transformer`] through fit, transform and feature naming, and
//! pairs the resulting matrix with its column names.

use crate::transformer::Transformer;
use ndarray::Array2;
use serde::ser::{Serialize, SerializeStruct, Serializer};
use thiserror::Error;
use tracing::debug;

/// Errors from running a stage
#[derive(Debug, Error)]
pub enum PipelineError<E: std::error::Error + 'static> {
    /// The stage itself failed; its error is kept as-is
    #[error("Stage failed: {0}")]
    Stage(#[source] E),

    /// Matrix shape disagrees with documents and feature names
    #[error("Stage produced a {actual:?} matrix, expected {expected:?}")]
    Shape {
        expected: (usize, usize),
        actual: (usize, usize),
    },
}

/// Named feature matrix
#[derive(Debug, Clone, PartialEq)]
pub struct FeatureFrame {
    pub names: Vec<String>,
    pub values: Array2<f64>,
}

impl FeatureFrame {
    /// Number of documents
    pub fn n_rows(&self) -> usize {
        self.values.nrows()
    }

    /// Values of one named column
    pub fn column(&self, name: &str) -> Option<Vec<f64>> {
        let idx = self.names.iter().position(|n| n == name)?;
        Some(self.values.column(idx).to_vec())
    }

    /// Rows as plain vectors
    pub fn rows(&self) -> Vec<Vec<f64>> {
        self.values.rows().into_iter().map(|r| r.to_vec()).collect()
    }
}

impl Serialize for FeatureFrame {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("FeatureFrame", 2)?;
        state.serialize_field("names", &self.names)?;
        state.serialize_field("rows", &self.rows())?;
        state.end()
    }
}

/// Fit `stage` on `documents`, transform them, and name the output columns
pub fn run_stage<T, D>(
    stage: &mut T,
    documents: &[D],
    labels: Option<&[f64]>,
) -> Result<FeatureFrame, PipelineError<T::Error>>
where
    T: Transformer,
    D: AsRef<str>,
{
    let values = stage
        .fit(documents, labels)
        .map_err(PipelineError::Stage)?
        .transform(documents)
        .map_err(PipelineError::Stage)?;
    let names = stage.feature_names_out(None);

    let expected = (documents.len(), names.len());
    if values.dim() != expected {
        return Err(PipelineError::Shape {
            expected,
            actual: values.dim(),
        });
    }

    debug!(
        "Stage produced {} rows x {} features",
        values.nrows(),
        values.ncols()
    );
    Ok(FeatureFrame { names, values })
}

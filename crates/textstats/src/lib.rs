//! Text Statistics Feature Stage
//!
//! Exposes precomputed document-level text statistics (syllable, token and
//! sentence counts) as a feature matrix inside a fit/transform pipeline.
//! Statistics are looked up in a [`FeatureStore`]; nothing is computed here.

pub mod columns;
mod error;
mod features;
pub mod pipeline;
pub mod settings;
mod transformer;

pub use error::ConfigError;
pub use features::TextstatsTransformer;
pub use pipeline::{run_stage, FeatureFrame, PipelineError};
pub use settings::{load_layered, TextstatsConfig};
pub use transformer::Transformer;

pub use feature_store::{FeatureStore, TextStatistic};

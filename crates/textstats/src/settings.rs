//! Stage Configuration

use crate::columns::validate_columns;
use crate::error::ConfigError;
use config::builder::DefaultState;
use config::{ConfigBuilder, Environment, File, FileFormat};
use feature_store::TextStatistic;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;
use tracing::debug;

/// Prefix of environment overrides, e.g. `TEXTSTATS_COLUMNS=token_count,sentence_count`
pub const ENV_PREFIX: &str = "TEXTSTATS";

/// Statistics stage configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TextstatsConfig {
    /// Statistic names, in output column order
    pub columns: Vec<String>,
}

impl Default for TextstatsConfig {
    fn default() -> Self {
        Self {
            columns: TextStatistic::names()
                .into_iter()
                .map(String::from)
                .collect(),
        }
    }
}

impl TextstatsConfig {
    /// Config requesting only the given statistics
    pub fn with_columns<I, S>(columns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            columns: columns.into_iter().map(Into::into).collect(),
        }
    }

    /// Load from an optional file, then `TEXTSTATS_*` environment variables
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        load_layered(path)
    }

    /// Check that every configured column is a known statistic
    pub fn validate(&self) -> Result<Vec<TextStatistic>, ConfigError> {
        validate_columns(&self.columns)
    }
}

/// Deserialize `T` from an optional config file layered under the process
/// environment. A path that is given must exist.
pub fn load_layered<T: DeserializeOwned>(path: Option<&Path>) -> Result<T, ConfigError> {
    load_with_env(path, None)
}

/// Like [`load_layered`], reading `TEXTSTATS_*` variables from `vars`
/// instead of the process environment when given.
pub fn load_with_env<T: DeserializeOwned>(
    path: Option<&Path>,
    vars: Option<HashMap<String, String>>,
) -> Result<T, ConfigError> {
    let mut builder = config::Config::builder();
    if let Some(path) = path {
        debug!("Loading configuration from {}", path.display());
        builder = builder.add_source(File::from(path).required(true));
    }
    deserialize(builder.add_source(environment(vars)))
}

/// Deserialize `T` from in-memory TOML alone
pub fn from_toml<T: DeserializeOwned>(contents: &str) -> Result<T, ConfigError> {
    deserialize(config::Config::builder().add_source(File::from_str(contents, FileFormat::Toml)))
}

fn environment(vars: Option<HashMap<String, String>>) -> Environment {
    Environment::with_prefix(ENV_PREFIX)
        .prefix_separator("_")
        .separator("__")
        .try_parsing(true)
        .list_separator(",")
        .with_list_parse_key("columns")
        .source(vars.map(|v| v.into_iter().collect()))
}

fn deserialize<T: DeserializeOwned>(builder: ConfigBuilder<DefaultState>) -> Result<T, ConfigError> {
    builder
        .build()
        .and_then(|c| c.try_deserialize())
        .map_err(|e| ConfigError::Load(e.to_string()))
}

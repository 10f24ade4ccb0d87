//! Configuration Error Types

use thiserror::Error;

/// Errors raised while configuring a statistics stage
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// Requested column is not a known statistic
    #[error("Invalid column name: {name}. Possible columns are: [{}]", quoted(.valid))]
    InvalidConfiguration {
        name: String,
        valid: Vec<&'static str>,
    },

    /// Configuration sources could not be read or deserialized
    #[error("Failed to load configuration: {0}")]
    Load(String),
}

/// `'a', 'b'`, the way the names appear in configuration
fn quoted(names: &[&str]) -> String {
    names
        .iter()
        .map(|name| format!("'{name}'"))
        .collect::<Vec<_>>()
        .join(", ")
}

//! Column Validation

use crate::error::ConfigError;
use feature_store::TextStatistic;
use tracing::warn;

/// Resolve column names to statistics, failing on the first unknown name.
///
/// Order and duplicates are preserved.
pub fn validate_columns<I, S>(columns: I) -> Result<Vec<TextStatistic>, ConfigError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    columns
        .into_iter()
        .map(|name| validate_column(name.as_ref()))
        .collect()
}

/// Resolve a single column name
pub fn validate_column(name: &str) -> Result<TextStatistic, ConfigError> {
    name.parse::<TextStatistic>().map_err(|_| {
        warn!("Rejected column name {:?}", name);
        ConfigError::InvalidConfiguration {
            name: name.to_string(),
            valid: TextStatistic::names(),
        }
    })
}

//! Text Statistics CLI support
//!
//! Settings, logging setup, input loading and the command bodies of the
//! `textstats` binary.

use anyhow::{Context, Result};
use feature_store::{InMemoryFeatureStore, StoreRecord};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::io::Read;
use std::path::{Path, PathBuf};
use textstats::settings::load_with_env;
use textstats::{run_stage, FeatureFrame, TextstatsConfig, TextstatsTransformer};
use tracing::info;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Log output format
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Text,
    Json,
}

/// Runner settings, read from the same sources as the stage configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CliSettings {
    /// JSON snapshot of precomputed statistics
    pub store: Option<PathBuf>,
    pub log_format: LogFormat,
    /// Default filter directive when `RUST_LOG` is unset
    pub log_level: String,
}

impl Default for CliSettings {
    fn default() -> Self {
        Self {
            store: None,
            log_format: LogFormat::Text,
            log_level: "info".to_string(),
        }
    }
}

/// Load settings from the config file and environment; a `--store` flag wins
/// over both.
pub fn resolve_settings(config: Option<&Path>, store: Option<PathBuf>) -> Result<CliSettings> {
    resolve_settings_with_env(config, None, store)
}

fn resolve_settings_with_env(
    config: Option<&Path>,
    vars: Option<HashMap<String, String>>,
    store: Option<PathBuf>,
) -> Result<CliSettings> {
    let mut settings: CliSettings = load_with_env(config, vars)?;
    if store.is_some() {
        settings.store = store;
    }
    Ok(settings)
}

/// Install the global tracing subscriber. Logs go to stderr.
pub fn init_logging(settings: &CliSettings) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&settings.log_level));

    let registry = tracing_subscriber::registry().with(filter);
    match settings.log_format {
        LogFormat::Text => registry
            .with(fmt::layer().with_target(true).with_writer(std::io::stderr))
            .init(),
        LogFormat::Json => registry
            .with(fmt::layer().json().with_writer(std::io::stderr))
            .init(),
    }
}

/// Build a feature store from a JSON array of [`StoreRecord`]s
pub fn load_store(path: &Path) -> Result<InMemoryFeatureStore> {
    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read store snapshot {}", path.display()))?;
    let store = parse_store(&contents)
        .with_context(|| format!("Invalid store snapshot {}", path.display()))?;
    info!("Loaded {} documents from {}", store.len()?, path.display());
    Ok(store)
}

/// Parse a JSON array of [`StoreRecord`]s
pub fn parse_store(contents: &str) -> Result<InMemoryFeatureStore> {
    let records: Vec<StoreRecord> = serde_json::from_str(contents)?;
    Ok(InMemoryFeatureStore::with_records(records))
}

/// Read one document per line from a file, or stdin for `-`
pub fn read_documents(path: &Path) -> Result<Vec<String>> {
    let contents = if path == Path::new("-") {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .context("Failed to read documents from stdin")?;
        buf
    } else {
        std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read documents {}", path.display()))?
    };
    Ok(split_documents(&contents))
}

/// One document per line. Blank lines are documents too; only the final
/// line terminator is dropped.
pub fn split_documents(contents: &str) -> Vec<String> {
    contents.lines().map(String::from).collect()
}

/// Feature matrix for `documents`, using the configured store snapshot
pub fn run(
    settings: &CliSettings,
    config: &TextstatsConfig,
    documents: &[String],
) -> Result<FeatureFrame> {
    let store_path = settings
        .store
        .as_deref()
        .context("No store snapshot configured (use --store or TEXTSTATS_STORE)")?;
    let store = load_store(store_path)?;

    let mut stage = TextstatsTransformer::from_config(&store, config)?;
    info!("Transforming {} documents", documents.len());
    Ok(run_stage(&mut stage, documents, None)?)
}

/// Validated feature names, in configured order
pub fn column_names(config: &TextstatsConfig) -> Result<Vec<String>> {
    Ok(config
        .validate()?
        .into_iter()
        .map(|stat| stat.to_string())
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    const SNAPSHOT: &str = r#"[
        {"text": "doc1", "monosyll_count": 8, "polysyll_count": 1, "token_count": 10,
         "sentence_count": 2, "unique_tokens_count": 9, "average_sentence_length": 5},
        {"text": "", "monosyll_count": 0, "polysyll_count": 0, "token_count": 0,
         "sentence_count": 0, "unique_tokens_count": 0, "average_sentence_length": 0}
    ]"#;

    /// Write `contents` to a per-process file under the temp dir
    fn scratch_file(name: &str, contents: &str) -> PathBuf {
        let path = std::env::temp_dir().join(format!(
            "textstats-cli-{}-{}",
            std::process::id(),
            name
        ));
        std::fs::write(&path, contents).unwrap();
        path
    }

    fn vars(pairs: &[(&str, &str)]) -> Option<HashMap<String, String>> {
        Some(
            pairs
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
        )
    }

    #[test]
    fn test_split_documents_keeps_blank_lines() {
        assert_eq!(split_documents("a\n\nb\n"), vec!["a", "", "b"]);
        assert_eq!(split_documents("a\r\n  \r\nb"), vec!["a", "  ", "b"]);
        assert!(split_documents("").is_empty());
    }

    #[test]
    fn test_parse_store() {
        let store = parse_store(SNAPSHOT).unwrap();
        assert_eq!(store.len().unwrap(), 2);
        assert_eq!(store.get("doc1").unwrap().map(|s| s.token_count), Some(10.0));
    }

    #[test]
    fn test_parse_store_rejects_missing_fields() {
        assert!(parse_store(r#"[{"text": "doc1", "token_count": 10}]"#).is_err());
    }

    #[test]
    fn test_settings_defaults() {
        let settings: CliSettings = textstats::settings::from_toml("").unwrap();
        assert_eq!(settings.log_format, LogFormat::Text);
        assert_eq!(settings.log_level, "info");
        assert_eq!(settings.store, None);
    }

    #[test]
    fn test_settings_from_toml() {
        let settings: CliSettings = textstats::settings::from_toml(
            "store = \"stats.json\"\nlog_format = \"json\"\ncolumns = [\"token_count\"]",
        )
        .unwrap();
        assert_eq!(settings.store, Some(PathBuf::from("stats.json")));
        assert_eq!(settings.log_format, LogFormat::Json);
    }

    #[test]
    fn test_store_precedence() {
        let config = scratch_file("precedence.toml", "store = \"file.json\"\n");

        let from_file = resolve_settings_with_env(Some(config.as_path()), vars(&[]), None).unwrap();
        assert_eq!(from_file.store, Some(PathBuf::from("file.json")));

        let from_env = resolve_settings_with_env(
            Some(config.as_path()),
            vars(&[("TEXTSTATS_STORE", "env.json")]),
            None,
        )
        .unwrap();
        assert_eq!(from_env.store, Some(PathBuf::from("env.json")));

        let from_flag = resolve_settings_with_env(
            Some(config.as_path()),
            vars(&[("TEXTSTATS_STORE", "env.json")]),
            Some(PathBuf::from("flag.json")),
        )
        .unwrap();
        assert_eq!(from_flag.store, Some(PathBuf::from("flag.json")));

        std::fs::remove_file(config).unwrap();
    }

    #[test]
    fn test_run_requires_store() {
        let err = run(
            &CliSettings::default(),
            &TextstatsConfig::default(),
            &["doc1".to_string()],
        )
        .unwrap_err();
        assert!(err.to_string().contains("No store snapshot configured"));
    }

    #[test]
    fn test_run_one_row_per_line() {
        let snapshot = scratch_file("rows.json", SNAPSHOT);
        let settings = CliSettings {
            store: Some(snapshot.clone()),
            ..Default::default()
        };
        let config = TextstatsConfig::with_columns(["token_count", "sentence_count"]);
        let documents = split_documents("doc1\n\ndoc1\n");

        let frame = run(&settings, &config, &documents).unwrap();

        assert_eq!(frame.names, vec!["token_count", "sentence_count"]);
        assert_eq!(frame.values, array![[10.0, 2.0], [0.0, 0.0], [10.0, 2.0]]);
        std::fs::remove_file(snapshot).unwrap();
    }

    #[test]
    fn test_run_rejects_invalid_columns() {
        let snapshot = scratch_file("invalid.json", SNAPSHOT);
        let settings = CliSettings {
            store: Some(snapshot.clone()),
            ..Default::default()
        };
        let config = TextstatsConfig::with_columns(["bogus_stat"]);

        let err = run(&settings, &config, &["doc1".to_string()]).unwrap_err();
        assert!(err.to_string().contains("bogus_stat"));
        std::fs::remove_file(snapshot).unwrap();
    }

    #[test]
    fn test_column_names_keep_configured_order() {
        let config = TextstatsConfig::with_columns(["sentence_count", "monosyll_count"]);
        assert_eq!(
            column_names(&config).unwrap(),
            vec!["sentence_count", "monosyll_count"]
        );

        let bad = TextstatsConfig::with_columns(["token_count", "nope"]);
        assert!(column_names(&bad).is_err());
    }
}

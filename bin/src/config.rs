//! Configuration files for the docsize CLI.

use anyhow::{Context, Result};
use docsize_lib::prelude::*;
use std::fs;
use std::path::Path;
use tracing::info;

/// Resolved CLI settings.
#[derive(Debug, Clone)]
pub(crate) struct Settings {
    pub(crate) size_config: SizeConfig,
}

impl Settings {
    /// Loads the size configuration from `path`, or the built-in one.
    pub(crate) fn load(path: Option<&Path>) -> Result<Self> {
        let size_config = match path {
            Some(path) => {
                let json = fs::read_to_string(path)
                    .with_context(|| format!("Failed to read config {}", path.display()))?;
                let config = SizeConfig::from_json(&json)
                    .with_context(|| format!("Invalid size config {}", path.display()))?;
                info!(path = %path.display(), types = config.types.len(), "loaded size config");
                config
            }
            None => Catalog::global().size_config().clone(),
        };
        Ok(Self { size_config })
    }

    pub(crate) fn estimator(&self) -> SizeEstimator {
        SizeEstimator::new(self.size_config.clone())
    }
}

/// Loads catalog statistics, overlaid with the statistics in `path` if given.
pub(crate) fn load_statistics(path: Option<&Path>) -> Result<StatisticsTable> {
    let base = Catalog::global().statistics().clone();
    let Some(path) = path else {
        return Ok(base);
    };

    let json = fs::read_to_string(path)
        .with_context(|| format!("Failed to read statistics {}", path.display()))?;
    let overrides: StatisticsTable = serde_json::from_str(&json)
        .with_context(|| format!("Invalid statistics file {}", path.display()))?;
    info!(path = %path.display(), count = overrides.len(), "loaded statistics");

    Ok(base.merged(&overrides))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_temp(contents: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_default_settings_use_catalog_config() {
        let settings = Settings::load(None).unwrap();
        assert_eq!(settings.size_config.key_overhead, 12.0);
    }

    #[test]
    fn test_load_config_file() {
        let file = write_temp(
            r#"{"key_overhead": 2, "types": {"Integer": 4, "string": {"statistic": "avg_len"}}}"#,
        );

        let settings = Settings::load(Some(file.path())).unwrap();

        assert_eq!(settings.size_config.key_overhead, 2.0);
        assert!(settings.size_config.types.get("integer").is_some());
        assert_eq!(
            settings.size_config.types.get("string"),
            Some(&TypeSize::statistic("avg_len"))
        );
    }

    #[test]
    fn test_invalid_config_file() {
        let file = write_temp("{ not json");
        let err = Settings::load(Some(file.path())).unwrap_err();
        assert!(err.to_string().starts_with("Invalid size config"));
    }

    #[test]
    fn test_missing_config_file() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("missing.json");
        assert!(Settings::load(Some(&missing)).is_err());
    }

    #[test]
    fn test_statistics_overlay() {
        let file = write_temp(r#"{"clients": 42, "avg_len": 7.5}"#);

        let stats = load_statistics(Some(file.path())).unwrap();

        assert_eq!(stats.get("clients").unwrap(), 42.0);
        assert_eq!(stats.get("avg_len").unwrap(), 7.5);
        assert_eq!(stats.get("products").unwrap(), 1e5);
    }
}

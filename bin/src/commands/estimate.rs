//! Estimate command implementation.
//!
//! This module sizes a user-supplied schema against the catalog statistics,
//! optionally overlaid with a statistics file.

use crate::config::{Settings, load_statistics};
use crate::display::{Format, Report, print_report};
use anyhow::{Context, Result};
use docsize_lib::prelude::*;
use docsize_lib::{CollectionReport, CollectionSpec, DocumentCount};
use std::fs;
use std::path::Path;
use tracing::info;

/// Estimate one document, and its collection when a count is given.
pub(crate) fn estimate(
    settings: &Settings,
    schema_path: &Path,
    stats_path: Option<&Path>,
    count: Option<f64>,
    count_stat: Option<&str>,
    format: Format,
) -> Result<()> {
    let schema = load_schema(schema_path)?;
    let stats = load_statistics(stats_path)?;
    let estimator = settings.estimator();
    let spec = collection_spec(schema_path, schema, count, count_stat);

    let estimate = estimator
        .estimate_collection(&spec, &stats)
        .context("Failed to size schema")?;
    let analysis = estimator
        .analyze_document(&spec.schema, &stats)
        .context("Failed to analyze schema")?;

    info!(
        collection = %estimate.name,
        document_bytes = estimate.document_bytes,
        collection_bytes = estimate.collection_bytes,
        "estimated schema"
    );

    print_report(
        &Report::Collection(CollectionReport {
            estimate: &estimate,
            analysis: &analysis,
        }),
        format,
    )
}

fn load_schema(path: &Path) -> Result<Schema> {
    let json = fs::read_to_string(path)
        .with_context(|| format!("Failed to read schema {}", path.display()))?;
    Schema::from_json(&json).with_context(|| format!("Invalid schema {}", path.display()))
}

/// Wraps a loaded schema as a collection named after its title or file.
///
/// Without a count or count statistic the collection holds one document.
fn collection_spec(
    schema_path: &Path,
    schema: Schema,
    count: Option<f64>,
    count_stat: Option<&str>,
) -> CollectionSpec {
    let name = schema
        .name()
        .map(str::to_string)
        .or_else(|| {
            schema_path
                .file_stem()
                .map(|stem| stem.to_string_lossy().into_owned())
        })
        .unwrap_or_else(|| "collection".to_string());

    let count = match (count, count_stat) {
        (Some(count), _) => DocumentCount::Fixed(count),
        (None, Some(key)) => DocumentCount::statistic(key),
        (None, None) => DocumentCount::Fixed(1.0),
    };

    CollectionSpec::new(name, schema, count)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    const SCHEMA: &str = r#"{
        "title": "Client",
        "type": "object",
        "properties": {
            "IDC": {"type": "integer"},
            "email": {"type": "string"},
            "tags": {"type": "array", "items": {"type": "string"}, "length": "avg_tags"}
        }
    }"#;

    fn schema_file(contents: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_load_schema_file() {
        let file = schema_file(SCHEMA);
        let schema = load_schema(file.path()).unwrap();

        assert_eq!(schema.name(), Some("Client"));
        assert_eq!(schema.label(), EntityLabel::Client);
    }

    #[test]
    fn test_invalid_schema_file() {
        let file = schema_file(r#"{"type": "array"}"#);
        let err = load_schema(file.path()).unwrap_err();
        assert!(err.to_string().starts_with("Invalid schema"));
    }

    fn client_spec(count: Option<f64>, count_stat: Option<&str>) -> CollectionSpec {
        let schema = Schema::from_json(SCHEMA).unwrap();
        collection_spec(Path::new("schemas/client.json"), schema, count, count_stat)
    }

    #[test]
    fn test_collection_estimate_uses_catalog_sizes() {
        let stats = Catalog::global().statistics().clone().with("avg_tags", 2.0);
        let estimator = Settings::load(None).unwrap().estimator();

        let estimate = estimator
            .estimate_collection(&client_spec(Some(10.0), None), &stats)
            .unwrap();

        assert_eq!(estimate.name, "Client");
        // (12 + 8) + (12 + 80) + 12 + 2 * (12 + 80)
        assert_eq!(estimate.document_bytes, 308.0);
        assert_eq!(estimate.collection_bytes, 3080.0);
    }

    #[test]
    fn test_count_defaults_to_one_document() {
        let spec = client_spec(None, None);
        assert_eq!(spec.count, DocumentCount::Fixed(1.0));

        let spec = client_spec(None, Some("clients"));
        assert_eq!(spec.count, DocumentCount::statistic("clients"));
    }

    #[test]
    fn test_untitled_schema_is_named_after_file() {
        let schema = Schema::from_json(r#"{"type": "object", "properties": {}}"#).unwrap();
        let spec = collection_spec(Path::new("schemas/orders.json"), schema, None, None);
        assert_eq!(spec.name, "orders");
    }

    #[test]
    fn test_missing_length_statistic() {
        let estimator = Settings::load(None).unwrap().estimator();
        let stats = Catalog::global().statistics();

        let err = estimator
            .estimate_collection(&client_spec(None, None), stats)
            .unwrap_err();
        assert!(err.to_string().contains("avg_tags"));
    }

    #[test]
    fn test_invalid_counts_are_rejected() {
        let stats = Catalog::global().statistics().clone().with("avg_tags", 2.0);
        let estimator = Settings::load(None).unwrap().estimator();

        for count in [-1.0, f64::NAN, f64::INFINITY] {
            let spec = client_spec(Some(count), None);
            assert!(estimator.estimate_collection(&spec, &stats).is_err());
        }
    }
}

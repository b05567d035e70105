//! Report format abstraction.

use std::io::Write;

use docsize_estimate::{CollectionEstimate, DatabaseEstimate, DocumentAnalysis, ShardingStats};
use docsize_types::DatabaseDesign;
use serde::Serialize;
use thiserror::Error;

/// Output format identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum OutputFormat {
    /// Human-readable text tables.
    #[default]
    Text,
    /// JSON document.
    Json,
    /// Newline-delimited JSON format.
    Ndjson,
    /// CSV rows.
    Csv,
}

impl OutputFormat {
    /// Returns the file extension for this format.
    #[must_use]
    pub const fn extension(&self) -> &'static str {
        match self {
            Self::Text => "txt",
            Self::Json => "json",
            Self::Ndjson => "ndjson",
            Self::Csv => "csv",
        }
    }

    /// Returns all available formats.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[Self::Text, Self::Json, Self::Ndjson, Self::Csv]
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.extension())
    }
}

impl std::str::FromStr for OutputFormat {
    type Err = FormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" | "txt" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            "ndjson" | "jsonl" => Ok(Self::Ndjson),
            "csv" => Ok(Self::Csv),
            _ => Err(FormatError::UnknownFormat(s.to_string())),
        }
    }
}

/// Errors that can occur during formatting.
#[derive(Error, Debug)]
pub enum FormatError {
    /// Unknown output format.
    #[error("Unknown format: {0}")]
    UnknownFormat(String),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Detailed report of one collection: its estimate and document breakdown.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct CollectionReport<'a> {
    /// Collection-level estimate.
    pub estimate: &'a CollectionEstimate,
    /// Breakdown of one document.
    pub analysis: &'a DocumentAnalysis,
}

/// Database summary together with the breakdown of some of its collections.
#[derive(Debug, Clone, Serialize)]
pub struct AnalysisReport<'a> {
    /// Estimate of the whole design.
    pub database: &'a DatabaseEstimate,
    /// Detailed reports of the analyzed collections.
    pub collections: Vec<CollectionReport<'a>>,
}

/// One design as listed in a catalog overview.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DesignSummary<'a> {
    /// Design name.
    pub name: &'a str,
    /// Compact notation of the design.
    pub signature: &'a str,
    /// Collection names in display order.
    pub collections: Vec<&'a str>,
}

impl<'a> DesignSummary<'a> {
    /// Summarizes a design.
    #[must_use]
    pub fn new(design: &'a DatabaseDesign) -> Self {
        Self {
            name: &design.name,
            signature: &design.signature,
            collections: design.collections.iter().map(|c| c.name.as_str()).collect(),
        }
    }
}

/// Trait for report formatters.
pub trait Formatter: Send + Sync {
    /// Writes the per-collection summary of one design.
    ///
    /// # Errors
    ///
    /// Returns an error if writing fails.
    fn write_database<W: Write + Send>(
        &self,
        estimate: &DatabaseEstimate,
        writer: W,
    ) -> Result<(), FormatError>;

    /// Writes the detailed analysis of one collection.
    ///
    /// # Errors
    ///
    /// Returns an error if writing fails.
    fn write_collection<W: Write + Send>(
        &self,
        report: &CollectionReport<'_>,
        writer: W,
    ) -> Result<(), FormatError>;

    /// Writes a database summary followed by its collection breakdowns as
    /// one report.
    ///
    /// # Errors
    ///
    /// Returns an error if writing fails.
    fn write_analysis<W: Write + Send>(
        &self,
        report: &AnalysisReport<'_>,
        writer: W,
    ) -> Result<(), FormatError>;

    /// Writes a listing of designs.
    ///
    /// # Errors
    ///
    /// Returns an error if writing fails.
    fn write_designs<W: Write + Send>(
        &self,
        designs: &[DesignSummary<'_>],
        writer: W,
    ) -> Result<(), FormatError>;

    /// Writes a size comparison of several designs.
    ///
    /// # Errors
    ///
    /// Returns an error if writing fails.
    fn write_comparison<W: Write + Send>(
        &self,
        estimates: &[DatabaseEstimate],
        writer: W,
    ) -> Result<(), FormatError>;

    /// Writes a sharding table.
    ///
    /// # Errors
    ///
    /// Returns an error if writing fails.
    fn write_sharding<W: Write + Send>(
        &self,
        stats: &[ShardingStats],
        writer: W,
    ) -> Result<(), FormatError>;

    /// Returns the file extension for this format.
    fn extension(&self) -> &str;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_format() {
        assert_eq!("TEXT".parse::<OutputFormat>().unwrap(), OutputFormat::Text);
        assert_eq!("jsonl".parse::<OutputFormat>().unwrap(), OutputFormat::Ndjson);
        assert_eq!("csv".parse::<OutputFormat>().unwrap(), OutputFormat::Csv);
        assert!(matches!(
            "xml".parse::<OutputFormat>(),
            Err(FormatError::UnknownFormat(_))
        ));
    }

    #[test]
    fn test_design_summary() {
        let design = DatabaseDesign::new("DB0", "Wa", Vec::new());
        let summary = DesignSummary::new(&design);

        assert_eq!(summary.name, "DB0");
        assert_eq!(summary.signature, "Wa");
        assert!(summary.collections.is_empty());
    }

    #[test]
    fn test_extensions() {
        let extensions: Vec<_> = OutputFormat::all().iter().map(OutputFormat::extension).collect();
        assert_eq!(extensions, ["txt", "json", "ndjson", "csv"]);
    }
}

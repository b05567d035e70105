//! CSV output format.

use std::borrow::Cow;
use std::io::Write;

use docsize_estimate::{DatabaseEstimate, ShardingStats};

use crate::units::to_gb;
use crate::{AnalysisReport, CollectionReport, DesignSummary, FormatError, Formatter};

/// CSV formatter.
#[derive(Debug, Clone)]
pub struct CsvFormatter {
    /// Field delimiter (default: comma).
    delimiter: char,
    /// Whether to include header row.
    include_header: bool,
}

impl CsvFormatter {
    /// Creates a new CSV formatter with default settings.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            delimiter: ',',
            include_header: true,
        }
    }

    /// Sets the field delimiter.
    #[must_use]
    pub const fn with_delimiter(mut self, delimiter: char) -> Self {
        self.delimiter = delimiter;
        self
    }

    /// Sets whether to include a header row.
    #[must_use]
    pub const fn with_header(mut self, include: bool) -> Self {
        self.include_header = include;
        self
    }

    /// Creates a tab-separated values (TSV) formatter.
    #[must_use]
    pub const fn tsv() -> Self {
        Self {
            delimiter: '\t',
            include_header: true,
        }
    }

    /// Quotes a text field if it contains the delimiter, a quote or a newline.
    fn quote<'a>(&self, field: &'a str) -> Cow<'a, str> {
        if field.contains([self.delimiter, '"', '\n']) {
            Cow::Owned(format!("\"{}\"", field.replace('"', "\"\"")))
        } else {
            Cow::Borrowed(field)
        }
    }

    fn write_header<W: Write>(&self, writer: &mut W, columns: &[&str]) -> Result<(), FormatError> {
        if self.include_header {
            writeln!(writer, "{}", columns.join(&self.delimiter.to_string()))?;
        }
        Ok(())
    }
}

impl Default for CsvFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl Formatter for CsvFormatter {
    fn write_database<W: Write + Send>(
        &self,
        estimate: &DatabaseEstimate,
        mut writer: W,
    ) -> Result<(), FormatError> {
        let d = self.delimiter;

        self.write_header(
            &mut writer,
            &[
                "database",
                "collection",
                "label",
                "document_count",
                "document_bytes",
                "collection_bytes",
            ],
        )?;

        for collection in &estimate.collections {
            writeln!(
                writer,
                "{}{d}{}{d}{}{d}{}{d}{}{d}{}",
                self.quote(&estimate.name),
                self.quote(&collection.name),
                collection.label,
                collection.document_count,
                collection.document_bytes,
                collection.collection_bytes,
            )?;
        }

        Ok(())
    }

    fn write_collection<W: Write + Send>(
        &self,
        report: &CollectionReport<'_>,
        mut writer: W,
    ) -> Result<(), FormatError> {
        let d = self.delimiter;
        let CollectionReport { estimate, analysis } = *report;

        self.write_header(&mut writer, &["metric", "value"])?;

        let rows: [(&str, f64); 8] = [
            ("document_count", estimate.document_count),
            ("embedded_entities", analysis.embedded_entities as f64),
            ("key_count", analysis.key_count),
            ("outside_bytes", analysis.outside_bytes),
            ("inside_bytes", analysis.inside_bytes),
            ("key_bytes", analysis.key_bytes),
            ("document_bytes", analysis.document_bytes),
            ("collection_bytes", estimate.collection_bytes),
        ];
        for (metric, value) in rows {
            writeln!(writer, "{metric}{d}{value}")?;
        }

        Ok(())
    }

    fn write_analysis<W: Write + Send>(
        &self,
        report: &AnalysisReport<'_>,
        mut writer: W,
    ) -> Result<(), FormatError> {
        let d = self.delimiter;

        self.write_header(
            &mut writer,
            &[
                "database",
                "collection",
                "label",
                "document_count",
                "document_bytes",
                "collection_bytes",
                "embedded_entities",
                "key_count",
                "outside_bytes",
                "inside_bytes",
                "key_bytes",
            ],
        )?;

        for CollectionReport { estimate, analysis } in &report.collections {
            writeln!(
                writer,
                "{}{d}{}{d}{}{d}{}{d}{}{d}{}{d}{}{d}{}{d}{}{d}{}{d}{}",
                self.quote(&report.database.name),
                self.quote(&estimate.name),
                estimate.label,
                estimate.document_count,
                analysis.document_bytes,
                estimate.collection_bytes,
                analysis.embedded_entities,
                analysis.key_count,
                analysis.outside_bytes,
                analysis.inside_bytes,
                analysis.key_bytes,
            )?;
        }

        Ok(())
    }

    fn write_designs<W: Write + Send>(
        &self,
        designs: &[DesignSummary<'_>],
        mut writer: W,
    ) -> Result<(), FormatError> {
        let d = self.delimiter;

        self.write_header(&mut writer, &["name", "collections", "signature"])?;

        for design in designs {
            writeln!(
                writer,
                "{}{d}{}{d}{}",
                self.quote(design.name),
                self.quote(&design.collections.join(";")),
                self.quote(design.signature),
            )?;
        }

        Ok(())
    }

    fn write_comparison<W: Write + Send>(
        &self,
        estimates: &[DatabaseEstimate],
        mut writer: W,
    ) -> Result<(), FormatError> {
        let d = self.delimiter;

        self.write_header(
            &mut writer,
            &["database", "signature", "collections", "total_bytes", "total_gb"],
        )?;

        for estimate in estimates {
            writeln!(
                writer,
                "{}{d}{}{d}{}{d}{}{d}{:.4}",
                self.quote(&estimate.name),
                self.quote(&estimate.signature),
                estimate.collections.len(),
                estimate.total_bytes,
                to_gb(estimate.total_bytes),
            )?;
        }

        Ok(())
    }

    fn write_sharding<W: Write + Send>(
        &self,
        stats: &[ShardingStats],
        mut writer: W,
    ) -> Result<(), FormatError> {
        let d = self.delimiter;

        self.write_header(
            &mut writer,
            &[
                "strategy",
                "total_docs",
                "distinct_values",
                "servers",
                "docs_per_server",
                "distinct_values_per_server",
            ],
        )?;

        for entry in stats {
            writeln!(
                writer,
                "{}{d}{}{d}{}{d}{}{d}{}{d}{}",
                self.quote(&entry.strategy()),
                entry.total_docs,
                entry.distinct_values,
                entry.servers,
                entry.docs_per_server,
                entry.distinct_values_per_server,
            )?;
        }

        Ok(())
    }

    fn extension(&self) -> &str {
        "csv"
    }
}

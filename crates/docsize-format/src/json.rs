//! JSON output format.

use serde::Serialize;
use std::io::Write;

use docsize_estimate::{DatabaseEstimate, ShardingStats};

use crate::{AnalysisReport, CollectionReport, DesignSummary, FormatError, Formatter};

/// JSON output style.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum JsonStyle {
    /// One JSON value per report.
    #[default]
    Array,
    /// Newline-delimited JSON (NDJSON/JSONL), one row per line.
    Ndjson,
}

/// JSON formatter.
#[derive(Debug, Clone, Default)]
pub struct JsonFormatter {
    /// Output style.
    style: JsonStyle,
    /// Whether to pretty-print (only for array style).
    pretty: bool,
}

impl JsonFormatter {
    /// Creates a new JSON formatter with default settings (array style).
    #[must_use]
    pub const fn new() -> Self {
        Self {
            style: JsonStyle::Array,
            pretty: false,
        }
    }

    /// Creates a new NDJSON formatter.
    #[must_use]
    pub const fn ndjson() -> Self {
        Self {
            style: JsonStyle::Ndjson,
            pretty: false,
        }
    }

    /// Sets whether to pretty-print output (array style only).
    #[must_use]
    pub const fn with_pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }

    /// Sets the output style.
    #[must_use]
    pub const fn with_style(mut self, style: JsonStyle) -> Self {
        self.style = style;
        self
    }

    fn write_value<T, W>(&self, value: &T, mut writer: W) -> Result<(), FormatError>
    where
        T: Serialize + ?Sized,
        W: Write,
    {
        if self.pretty && self.style == JsonStyle::Array {
            serde_json::to_writer_pretty(&mut writer, value)?;
        } else {
            serde_json::to_writer(&mut writer, value)?;
        }
        writeln!(writer)?;
        Ok(())
    }

    /// Writes `whole` as one value, or each of `rows` on its own line.
    fn write_rows<T, R, W>(&self, whole: &T, rows: &[R], mut writer: W) -> Result<(), FormatError>
    where
        T: Serialize + ?Sized,
        R: Serialize,
        W: Write,
    {
        match self.style {
            JsonStyle::Array => self.write_value(whole, writer),
            JsonStyle::Ndjson => {
                for row in rows {
                    serde_json::to_writer(&mut writer, row)?;
                    writeln!(writer)?;
                }
                Ok(())
            }
        }
    }
}

impl Formatter for JsonFormatter {
    fn write_database<W: Write + Send>(
        &self,
        estimate: &DatabaseEstimate,
        writer: W,
    ) -> Result<(), FormatError> {
        self.write_rows(estimate, &estimate.collections, writer)
    }

    fn write_collection<W: Write + Send>(
        &self,
        report: &CollectionReport<'_>,
        writer: W,
    ) -> Result<(), FormatError> {
        self.write_value(report, writer)
    }

    fn write_analysis<W: Write + Send>(
        &self,
        report: &AnalysisReport<'_>,
        writer: W,
    ) -> Result<(), FormatError> {
        self.write_rows(report, &report.collections, writer)
    }

    fn write_designs<W: Write + Send>(
        &self,
        designs: &[DesignSummary<'_>],
        writer: W,
    ) -> Result<(), FormatError> {
        self.write_rows(designs, designs, writer)
    }

    fn write_comparison<W: Write + Send>(
        &self,
        estimates: &[DatabaseEstimate],
        writer: W,
    ) -> Result<(), FormatError> {
        self.write_rows(estimates, estimates, writer)
    }

    fn write_sharding<W: Write + Send>(
        &self,
        stats: &[ShardingStats],
        writer: W,
    ) -> Result<(), FormatError> {
        self.write_rows(stats, stats, writer)
    }

    fn extension(&self) -> &str {
        match self.style {
            JsonStyle::Array => "json",
            JsonStyle::Ndjson => "ndjson",
        }
    }
}

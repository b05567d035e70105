//! Display utilities and output formatting for the docsize CLI.

use anyhow::Result;
use clap::ValueEnum;
use docsize_lib::prelude::*;
use docsize_lib::{AnalysisReport, CollectionReport, DesignSummary, JsonStyle};
use std::io::{self, BufWriter, Write};

/// Output format for reports.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub(crate) enum Format {
    Text,
    Json,
    Ndjson,
    Csv,
}

impl From<Format> for OutputFormat {
    fn from(format: Format) -> Self {
        match format {
            Format::Text => Self::Text,
            Format::Json => Self::Json,
            Format::Ndjson => Self::Ndjson,
            Format::Csv => Self::Csv,
        }
    }
}

impl std::fmt::Display for Format {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", OutputFormat::from(*self))
    }
}

/// One report the CLI can print.
pub(crate) enum Report<'a> {
    Designs(&'a [DesignSummary<'a>]),
    Collection(CollectionReport<'a>),
    Analysis(&'a AnalysisReport<'a>),
    Comparison(&'a [DatabaseEstimate]),
    Sharding(&'a [ShardingStats]),
}

fn write_with<F, W>(formatter: &F, report: &Report<'_>, writer: W) -> Result<()>
where
    F: Formatter,
    W: Write + Send,
{
    match report {
        Report::Designs(designs) => formatter.write_designs(designs, writer)?,
        Report::Collection(report) => formatter.write_collection(report, writer)?,
        Report::Analysis(report) => formatter.write_analysis(report, writer)?,
        Report::Comparison(estimates) => formatter.write_comparison(estimates, writer)?,
        Report::Sharding(stats) => formatter.write_sharding(stats, writer)?,
    }
    Ok(())
}

/// Writes a report to `writer` in the specified format.
pub(crate) fn write_report<W: Write + Send>(
    report: &Report<'_>,
    format: Format,
    writer: W,
) -> Result<()> {
    match format {
        Format::Text => write_with(&TextFormatter::new(), report, writer),
        Format::Json => write_with(&JsonFormatter::new().with_pretty(true), report, writer),
        Format::Ndjson => write_with(
            &JsonFormatter::new().with_style(JsonStyle::Ndjson),
            report,
            writer,
        ),
        Format::Csv => write_with(&CsvFormatter::new(), report, writer),
    }
}

/// Prints a report to stdout in the specified format.
pub(crate) fn print_report(report: &Report<'_>, format: Format) -> Result<()> {
    let mut out = BufWriter::new(io::stdout());
    write_report(report, format, &mut out)?;
    out.flush()?;
    Ok(())
}

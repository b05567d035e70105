//! Report formatters for docsize estimates.
//!
//! - [`TextFormatter`] - fixed-width tables for the terminal
//! - [`JsonFormatter`] - JSON document or NDJSON rows
//! - [`CsvFormatter`] - CSV or TSV rows

#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/factordynamics/docsize/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod csv;
mod formatter;
mod json;
mod text;
mod units;

pub use crate::csv::CsvFormatter;
pub use formatter::{
    AnalysisReport, CollectionReport, DesignSummary, FormatError, Formatter, OutputFormat,
};
pub use json::{JsonFormatter, JsonStyle};
pub use text::TextFormatter;
pub use units::{format_bytes, group_thousands, to_gb};

//! Core types for the docsize document size calculator.
//!
//! This crate provides the data structures every other docsize crate works on:
//!
//! - [`Schema`], [`Field`] and [`SchemaNode`] - Finite schema trees of one document
//! - [`StatisticsTable`] - Named averages and counts
//! - [`TypeSizeTable`], [`TypeSize`] and [`SizeConfig`] - Scalar byte sizes and key overhead
//! - [`DatabaseDesign`], [`CollectionSpec`] and [`ShardingCase`] - Designs to compare
//! - [`EntityLabel`] - Labels guessed from field names for reports
//! - [`ConfigurationError`] - Inputs that make an estimate impossible

#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/factordynamics/docsize/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod design;
mod error;
mod label;
mod schema;
mod statistics;
mod type_size;

pub use design::{CollectionSpec, DatabaseDesign, DocumentCount, ShardingCase};
pub use error::{ConfigurationError, DocsizeError, Result, SchemaError};
pub use label::EntityLabel;
pub use schema::{Field, Schema, SchemaNode};
pub use statistics::StatisticsTable;
pub use type_size::{SizeConfig, TypeSize, TypeSizeTable};

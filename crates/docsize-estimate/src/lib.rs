//! Document, collection and database size estimation for docsize.
//!
//! This crate walks schema trees and scales per-document sizes into totals:
//!
//! - [`SizeEstimator`] - Recursive document, collection and database sizes
//! - [`DocumentAnalysis`] - Breakdown of one document by scalars, arrays and keys
//! - [`DatabaseEstimate`] - Per-collection sizes of a whole design
//! - [`ShardingStats`] - Uniform per-server averages for a sharding key

#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/factordynamics/docsize/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod analysis;
mod database;
mod estimator;
mod sharding;

pub use analysis::{ArrayAnalysis, DocumentAnalysis, ScalarCounts};
pub use database::{CollectionEstimate, DatabaseEstimate};
pub use estimator::{CollectionInput, SizeEstimator};
pub use sharding::{ShardingStats, sharding_average};

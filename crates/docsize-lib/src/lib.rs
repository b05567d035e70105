//! Size estimation for NoSQL document databases.
//!
//! This is a facade crate that re-exports functionality from the docsize
//! workspace crates for convenient access.
//!
//! # Quick Start
//!
//! ```
//! use docsize_lib::prelude::*;
//!
//! let catalog = Catalog::global();
//! let estimator = SizeEstimator::new(catalog.size_config().clone());
//!
//! let estimates = estimator
//!     .compare_databases(catalog.designs(), catalog.statistics())
//!     .unwrap();
//! for estimate in &estimates {
//!     println!("{}: {:.4} GB", estimate.name, to_gb(estimate.total_bytes));
//! }
//! ```

#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/factordynamics/docsize/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Re-export core types
pub use docsize_types::*;

// Re-export estimation
pub use docsize_estimate::{
    ArrayAnalysis, CollectionEstimate, CollectionInput, DatabaseEstimate, DocumentAnalysis,
    ScalarCounts, ShardingStats, SizeEstimator, sharding_average,
};

// Re-export the case study catalog
#[cfg(feature = "catalog")]
pub use docsize_catalog::Catalog;

// Re-export formatters
#[cfg(feature = "format")]
pub use docsize_format::{
    AnalysisReport, CollectionReport, CsvFormatter, DesignSummary, FormatError, Formatter,
    JsonFormatter, JsonStyle, OutputFormat, TextFormatter, format_bytes, group_thousands, to_gb,
};

/// Prelude module for convenient imports.
///
/// ```
/// use docsize_lib::prelude::*;
/// ```
pub mod prelude {
    pub use docsize_types::{
        DatabaseDesign, DocsizeError, EntityLabel, Field, Result, Schema, SchemaNode, SizeConfig,
        StatisticsTable, TypeSize, TypeSizeTable,
    };

    pub use docsize_estimate::{
        CollectionEstimate, DatabaseEstimate, DocumentAnalysis, ShardingStats, SizeEstimator,
        sharding_average,
    };

    #[cfg(feature = "catalog")]
    pub use docsize_catalog::Catalog;

    #[cfg(feature = "format")]
    pub use docsize_format::{
        CsvFormatter, Formatter, JsonFormatter, OutputFormat, TextFormatter, to_gb,
    };
}

//! Analyze command implementation.
//!
//! This module prints the size summary of one catalog design together with
//! the detailed breakdown of its collections, as a single report.

use crate::config::Settings;
use crate::display::{Format, Report, print_report};
use anyhow::{Context, Result};
use docsize_lib::prelude::*;
use docsize_lib::{AnalysisReport, CollectionReport};
use tracing::info;

/// Estimates and breakdowns of one design, ready to be reported.
pub(crate) struct DesignAnalysis {
    pub(crate) database: DatabaseEstimate,
    pub(crate) collections: Vec<(CollectionEstimate, DocumentAnalysis)>,
}

impl DesignAnalysis {
    pub(crate) fn report(&self) -> AnalysisReport<'_> {
        AnalysisReport {
            database: &self.database,
            collections: self
                .collections
                .iter()
                .map(|(estimate, analysis)| CollectionReport { estimate, analysis })
                .collect(),
        }
    }
}

/// Analyze a catalog design, or a single collection of it.
pub(crate) fn analyze(
    settings: &Settings,
    design_name: &str,
    collection: Option<&str>,
    format: Format,
) -> Result<()> {
    let analysis = analyze_design(&settings.estimator(), design_name, collection)?;
    print_report(&Report::Analysis(&analysis.report()), format)
}

/// Estimates `design_name` and breaks down the selected collections.
///
/// Every collection is broken down unless `collection` names one.
pub(crate) fn analyze_design(
    estimator: &SizeEstimator,
    design_name: &str,
    collection: Option<&str>,
) -> Result<DesignAnalysis> {
    let catalog = Catalog::global();
    let design = catalog
        .design(design_name)
        .with_context(|| format!("Unknown database design: {design_name}"))?;
    let stats = catalog.statistics();

    let database = estimator
        .estimate_database(design, stats)
        .with_context(|| format!("Failed to estimate {}", design.name))?;
    info!(design = %design.name, total_bytes = database.total_bytes, "estimated design");

    let specs: Vec<_> = match collection {
        Some(name) => vec![design.collection(name).with_context(|| {
            format!("Unknown collection '{name}' in {}", design.name)
        })?],
        None => design.collections.iter().collect(),
    };

    let collections = specs
        .into_iter()
        .map(|spec| {
            let estimate = estimator
                .estimate_collection(spec, stats)
                .with_context(|| format!("Failed to estimate collection {}", spec.name))?;
            let analysis = estimator
                .analyze_document(&spec.schema, stats)
                .with_context(|| format!("Failed to analyze collection {}", spec.name))?;
            Ok((estimate, analysis))
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(DesignAnalysis {
        database,
        collections,
    })
}

//! Compare command implementation.

use crate::config::Settings;
use crate::display::{Format, Report, print_report};
use anyhow::{Context, Result};
use docsize_lib::prelude::*;
use tracing::info;

/// Compare the total size of every catalog design.
pub(crate) fn compare(settings: &Settings, format: Format) -> Result<()> {
    let catalog = Catalog::global();
    let estimates = settings
        .estimator()
        .compare_databases(catalog.designs(), catalog.statistics())
        .context("Failed to estimate the catalog designs")?;

    if let Some(largest) = estimates
        .iter()
        .max_by(|a, b| a.total_bytes.total_cmp(&b.total_bytes))
    {
        info!(design = %largest.name, total_gb = to_gb(largest.total_bytes), "largest design");
    }

    print_report(&Report::Comparison(&estimates), format)
}

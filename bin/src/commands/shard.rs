//! Shard command implementation.
//!
//! This module evaluates the catalog sharding strategies on the reference
//! design.

use crate::display::{Format, Report, print_report};
use anyhow::{Context, Result};
use docsize_lib::prelude::*;
use tracing::debug;

/// Print documents and distinct key values per server for each strategy.
pub(crate) fn shard(servers: Option<f64>, format: Format) -> Result<()> {
    let catalog = Catalog::global();
    let servers = match servers {
        Some(servers) => servers,
        None => catalog
            .servers()
            .context("The catalog has no \"servers\" statistic; pass --servers")?,
    };

    let stats = sharding_table(catalog, servers)?;
    print_report(&Report::Sharding(&stats), format)
}

fn sharding_table(catalog: &Catalog, servers: f64) -> Result<Vec<ShardingStats>> {
    let design = catalog.reference_design();
    catalog
        .sharding_cases()
        .iter()
        .map(|case| {
            debug!(collection = %case.collection, key = %case.key, "evaluating sharding case");
            ShardingStats::for_case(case, design, catalog.statistics(), servers)
                .with_context(|| format!("Failed to evaluate {}", case.strategy()))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_custom_server_count() {
        let stats = sharding_table(Catalog::global(), 500.0).unwrap();
        let stock = stats.iter().find(|s| s.strategy() == "Stock-#IDP").unwrap();

        assert_eq!(stock.servers, 500.0);
        assert_eq!(stock.docs_per_server, 40_000.0);
    }

    #[test]
    fn test_zero_servers_is_rejected() {
        let err = sharding_table(Catalog::global(), 0.0).unwrap_err();
        assert!(format!("{err:#}").contains("Invalid server count"));
    }
}

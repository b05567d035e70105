//! Uniform sharding averages.
//!
//! These are closed-form averages under the assumption that keys spread
//! evenly over servers. They say nothing about real key skew.

use docsize_types::{
    ConfigurationError, DatabaseDesign, DocsizeError, ShardingCase, StatisticsTable,
};
use serde::Serialize;

/// Average number of items per server: `total / servers`.
///
/// # Errors
///
/// Returns [`ConfigurationError::InvalidServerCount`] if `servers` is zero,
/// negative or NaN.
pub fn sharding_average(total: f64, servers: f64) -> Result<f64, ConfigurationError> {
    if servers.is_nan() || servers <= 0.0 {
        return Err(ConfigurationError::InvalidServerCount(servers));
    }
    Ok(total / servers)
}

/// Distribution of one collection sharded on one key.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ShardingStats {
    /// Sharded collection.
    pub collection: String,
    /// Sharding key.
    pub key: String,
    /// Documents in the collection.
    pub total_docs: f64,
    /// Distinct values of the key.
    pub distinct_values: f64,
    /// Servers in the cluster.
    pub servers: f64,
    /// Average documents per server.
    pub docs_per_server: f64,
    /// Average distinct key values per server.
    pub distinct_values_per_server: f64,
}

impl ShardingStats {
    /// Computes the averages for a collection sharded on `key`.
    ///
    /// # Errors
    ///
    /// Returns an error if `servers` is not positive.
    pub fn compute(
        collection: impl Into<String>,
        key: impl Into<String>,
        total_docs: f64,
        distinct_values: f64,
        servers: f64,
    ) -> Result<Self, ConfigurationError> {
        Ok(Self {
            collection: collection.into(),
            key: key.into(),
            total_docs,
            distinct_values,
            servers,
            docs_per_server: sharding_average(total_docs, servers)?,
            distinct_values_per_server: sharding_average(distinct_values, servers)?,
        })
    }

    /// Evaluates a sharding case against a design's collection counts.
    ///
    /// # Errors
    ///
    /// Returns an error if the collection is not part of `design`, a
    /// statistic is missing or `servers` is not positive.
    pub fn for_case(
        case: &ShardingCase,
        design: &DatabaseDesign,
        stats: &StatisticsTable,
        servers: f64,
    ) -> Result<Self, DocsizeError> {
        let collection =
            design
                .collection(&case.collection)
                .ok_or_else(|| DocsizeError::UnknownCollection {
                    design: design.name.clone(),
                    collection: case.collection.clone(),
                })?;
        let total_docs = collection.count.resolve(stats)?;
        let distinct_values = stats.get(&case.distinct_values)?;

        Ok(Self::compute(
            &collection.name,
            &case.key,
            total_docs,
            distinct_values,
            servers,
        )?)
    }

    /// Returns the strategy name, e.g. `Stock-#IDP`.
    #[must_use]
    pub fn strategy(&self) -> String {
        format!("{}-#{}", self.collection, self.key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use docsize_types::{CollectionSpec, DocumentCount, Schema};

    #[test]
    fn test_sharding_average() {
        assert_eq!(sharding_average(1000.0, 4.0), Ok(250.0));
        assert_eq!(sharding_average(0.0, 4.0), Ok(0.0));
        assert_eq!(
            sharding_average(1000.0, 0.0),
            Err(ConfigurationError::InvalidServerCount(0.0))
        );
        assert!(sharding_average(1000.0, -3.0).is_err());
        assert!(sharding_average(1000.0, f64::NAN).is_err());
    }

    #[test]
    fn test_compute_stats() {
        let stats = ShardingStats::compute("Stock", "IDW", 2e7, 200.0, 1000.0).unwrap();

        assert_eq!(stats.docs_per_server, 20_000.0);
        assert_eq!(stats.distinct_values_per_server, 0.2);
        assert_eq!(stats.strategy(), "Stock-#IDW");
    }

    #[test]
    fn test_for_case() {
        let design = DatabaseDesign::new(
            "DB1",
            "St",
            vec![CollectionSpec::new(
                "Stock",
                Schema::default(),
                DocumentCount::statistic("stocks"),
            )],
        );
        let stats = StatisticsTable::new()
            .with("stocks", 2e7)
            .with("products", 1e5);
        let case = ShardingCase {
            collection: "stock".into(),
            key: "IDP".into(),
            distinct_values: "products".into(),
        };

        let result = ShardingStats::for_case(&case, &design, &stats, 1000.0).unwrap();
        assert_eq!(result.collection, "Stock");
        assert_eq!(result.docs_per_server, 20_000.0);
        assert_eq!(result.distinct_values_per_server, 100.0);

        let missing = ShardingCase {
            collection: "OrderLine".into(),
            ..case
        };
        assert!(matches!(
            ShardingStats::for_case(&missing, &design, &stats, 1000.0),
            Err(DocsizeError::UnknownCollection { .. })
        ));
    }
}

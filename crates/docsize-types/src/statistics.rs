//! Named statistics used to resolve lengths and counts.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::ConfigurationError;

/// Externally supplied averages and counts, keyed by name.
///
/// Array lengths, statistic-sized string types and collection document
/// counts are all resolved through this table.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StatisticsTable {
    values: BTreeMap<String, f64>,
}

impl StatisticsTable {
    /// Creates an empty statistics table.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            values: BTreeMap::new(),
        }
    }

    /// Adds a statistic, returning the updated table.
    #[must_use]
    pub fn with(mut self, key: impl Into<String>, value: f64) -> Self {
        self.values.insert(key.into(), value);
        self
    }

    /// Inserts or replaces a statistic.
    pub fn insert(&mut self, key: impl Into<String>, value: f64) {
        self.values.insert(key.into(), value);
    }

    /// Looks up a statistic.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigurationError::MissingStatistic`] if `key` is absent.
    pub fn get(&self, key: &str) -> Result<f64, ConfigurationError> {
        self.values
            .get(key)
            .copied()
            .ok_or_else(|| ConfigurationError::MissingStatistic(key.to_string()))
    }

    /// Returns true if the statistic is present.
    #[must_use]
    pub fn contains(&self, key: &str) -> bool {
        self.values.contains_key(key)
    }

    /// Overlays `other` on top of this table; keys in `other` win.
    #[must_use]
    pub fn merged(mut self, other: &Self) -> Self {
        for (key, value) in &other.values {
            self.values.insert(key.clone(), *value);
        }
        self
    }

    /// Returns all statistics in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.values.iter().map(|(k, v)| (k.as_str(), *v))
    }

    /// Returns the number of statistics.
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns true if the table is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl<K: Into<String>> FromIterator<(K, f64)> for StatisticsTable {
    fn from_iter<I: IntoIterator<Item = (K, f64)>>(iter: I) -> Self {
        Self {
            values: iter.into_iter().map(|(k, v)| (k.into(), v)).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_statistic_is_an_error() {
        let stats = StatisticsTable::new().with("clients", 1e7);

        assert_eq!(stats.get("clients"), Ok(1e7));
        assert_eq!(
            stats.get("products"),
            Err(ConfigurationError::MissingStatistic("products".to_string()))
        );
    }

    #[test]
    fn test_merged_overrides() {
        let base = StatisticsTable::from_iter([("a", 1.0), ("b", 2.0)]);
        let overlay = StatisticsTable::new().with("b", 5.0).with("c", 3.0);

        let merged = base.merged(&overlay);
        assert_eq!(merged.len(), 3);
        assert_eq!(merged.get("b"), Ok(5.0));
    }

    #[test]
    fn test_deserialize_flat_map() {
        let stats: StatisticsTable =
            serde_json::from_str(r#"{"clients": 10000000, "avg_len": 2.5}"#).unwrap();
        assert_eq!(stats.get("avg_len"), Ok(2.5));
        assert!(stats.contains("clients"));
    }
}

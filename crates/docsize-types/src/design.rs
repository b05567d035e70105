//! Collections, database designs and sharding scenarios.

use serde::{Deserialize, Serialize};

use crate::{ConfigurationError, EntityLabel, Schema, StatisticsTable};

/// How many documents a collection holds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum DocumentCount {
    /// A literal count.
    Fixed(f64),
    /// A count read from the statistics table.
    Statistic {
        /// Statistic holding the count.
        statistic: String,
    },
}

impl DocumentCount {
    /// Creates a count read from `statistic`.
    #[must_use]
    pub fn statistic(statistic: impl Into<String>) -> Self {
        Self::Statistic {
            statistic: statistic.into(),
        }
    }

    /// Resolves the count.
    ///
    /// # Errors
    ///
    /// Returns an error if the statistic is missing.
    pub fn resolve(&self, stats: &StatisticsTable) -> Result<f64, ConfigurationError> {
        match self {
            Self::Fixed(count) => Ok(*count),
            Self::Statistic { statistic } => stats.get(statistic),
        }
    }
}

/// One collection of a database design.
#[derive(Debug, Clone, PartialEq)]
pub struct CollectionSpec {
    /// Collection name (e.g. "Product").
    pub name: String,
    /// Schema of its documents.
    pub schema: Schema,
    /// Number of documents.
    pub count: DocumentCount,
}

impl CollectionSpec {
    /// Creates a collection spec.
    #[must_use]
    pub fn new(name: impl Into<String>, schema: Schema, count: DocumentCount) -> Self {
        Self {
            name: name.into(),
            schema,
            count,
        }
    }

    /// Returns the label detected from the collection's schema.
    #[must_use]
    pub fn label(&self) -> EntityLabel {
        self.schema.label()
    }
}

/// A set of collections modelling one schema design.
#[derive(Debug, Clone, PartialEq)]
pub struct DatabaseDesign {
    /// Design name (e.g. "DB2").
    pub name: String,
    /// Compact notation of the design, e.g. `Prod{[Cat],Supp,[St]}, Wa`.
    pub signature: String,
    /// The collections, in display order.
    pub collections: Vec<CollectionSpec>,
}

impl DatabaseDesign {
    /// Creates a design.
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        signature: impl Into<String>,
        collections: Vec<CollectionSpec>,
    ) -> Self {
        Self {
            name: name.into(),
            signature: signature.into(),
            collections,
        }
    }

    /// Looks up a collection by name (case-insensitive).
    #[must_use]
    pub fn collection(&self, name: &str) -> Option<&CollectionSpec> {
        self.collections
            .iter()
            .find(|c| c.name.eq_ignore_ascii_case(name))
    }
}

/// A sharding scenario: a collection distributed on one key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShardingCase {
    /// Sharded collection.
    pub collection: String,
    /// Sharding key.
    pub key: String,
    /// Statistic holding the number of distinct key values.
    pub distinct_values: String,
}

impl ShardingCase {
    /// Returns the strategy name, e.g. `Stock-#IDP`.
    #[must_use]
    pub fn strategy(&self) -> String {
        format!("{}-#{}", self.collection, self.key)
    }
}

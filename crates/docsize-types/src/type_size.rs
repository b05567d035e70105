//! Scalar byte sizes and the per-field key overhead.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::{ConfigurationError, StatisticsTable};

/// Byte size of one scalar type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TypeSize {
    /// A fixed number of bytes.
    Fixed(f64),
    /// A size driven by an average-length statistic.
    Statistic {
        /// Statistic holding the average length.
        statistic: String,
        /// Bytes per unit of length.
        #[serde(default = "one")]
        bytes_per_unit: f64,
    },
}

const fn one() -> f64 {
    1.0
}

impl TypeSize {
    /// Creates a fixed size.
    #[must_use]
    pub const fn fixed(bytes: f64) -> Self {
        Self::Fixed(bytes)
    }

    /// Creates a size resolved from `statistic`, one byte per unit.
    #[must_use]
    pub fn statistic(statistic: impl Into<String>) -> Self {
        Self::Statistic {
            statistic: statistic.into(),
            bytes_per_unit: 1.0,
        }
    }

    /// Resolves the size in bytes.
    ///
    /// # Errors
    ///
    /// Returns an error if the size depends on a statistic that is missing.
    pub fn resolve(&self, stats: &StatisticsTable) -> Result<f64, ConfigurationError> {
        match self {
            Self::Fixed(bytes) => Ok(*bytes),
            Self::Statistic {
                statistic,
                bytes_per_unit,
            } => Ok(stats.get(statistic)? * bytes_per_unit),
        }
    }
}

/// Mapping from scalar type name to byte size.
///
/// Names are case-insensitive: `Integer` and `integer` are the same type.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "BTreeMap<String, TypeSize>", into = "BTreeMap<String, TypeSize>")]
pub struct TypeSizeTable {
    sizes: BTreeMap<String, TypeSize>,
}

impl TypeSizeTable {
    /// Creates an empty table.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            sizes: BTreeMap::new(),
        }
    }

    /// Adds an entry, returning the updated table.
    #[must_use]
    pub fn with(mut self, type_name: &str, size: TypeSize) -> Self {
        self.insert(type_name, size);
        self
    }

    /// Inserts or replaces an entry.
    pub fn insert(&mut self, type_name: &str, size: TypeSize) {
        self.sizes.insert(type_name.to_lowercase(), size);
    }

    /// Returns the entry for a type, if any.
    #[must_use]
    pub fn get(&self, type_name: &str) -> Option<&TypeSize> {
        self.sizes.get(&type_name.to_lowercase())
    }

    /// Resolves the byte size of a scalar type.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigurationError::UnknownType`] for a type without an
    /// entry, or a missing-statistic error for statistic-sized types.
    pub fn resolve(
        &self,
        type_name: &str,
        stats: &StatisticsTable,
    ) -> Result<f64, ConfigurationError> {
        self.get(type_name)
            .ok_or_else(|| ConfigurationError::UnknownType(type_name.to_string()))?
            .resolve(stats)
    }

    /// Returns the number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.sizes.len()
    }

    /// Returns true if the table is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sizes.is_empty()
    }
}

impl From<BTreeMap<String, TypeSize>> for TypeSizeTable {
    fn from(raw: BTreeMap<String, TypeSize>) -> Self {
        let mut table = Self::new();
        for (name, size) in raw {
            table.insert(&name, size);
        }
        table
    }
}

impl From<TypeSizeTable> for BTreeMap<String, TypeSize> {
    fn from(table: TypeSizeTable) -> Self {
        table.sizes
    }
}

/// Size model handed to the estimator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SizeConfig {
    /// Bytes added once per field for its key.
    pub key_overhead: f64,
    /// Scalar type sizes.
    pub types: TypeSizeTable,
}

impl SizeConfig {
    /// Creates a size configuration.
    #[must_use]
    pub const fn new(key_overhead: f64, types: TypeSizeTable) -> Self {
        Self {
            key_overhead,
            types,
        }
    }

    /// Parses a configuration from JSON.
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON is invalid.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

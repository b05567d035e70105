//! Per-document size breakdown.

use std::collections::BTreeMap;

use docsize_types::{
    ConfigurationError, EntityLabel, Field, Schema, SchemaNode, StatisticsTable,
};
use serde::Serialize;

use crate::SizeEstimator;
use crate::estimator::array_length;

/// Number of scalars per type name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ScalarCounts {
    counts: BTreeMap<String, u64>,
}

impl ScalarCounts {
    fn add(&mut self, type_name: &str) {
        *self.counts.entry(type_name.to_lowercase()).or_default() += 1;
    }

    /// Returns the count for a type (case-insensitive).
    #[must_use]
    pub fn get(&self, type_name: &str) -> u64 {
        self.counts
            .get(&type_name.to_lowercase())
            .copied()
            .unwrap_or_default()
    }

    /// Returns the number of scalars of all types.
    #[must_use]
    pub fn total(&self) -> u64 {
        self.counts.values().sum()
    }

    /// Returns the non-zero counts in type name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, u64)> {
        self.counts.iter().map(|(k, v)| (k.as_str(), *v))
    }

    /// Returns true if no scalar was counted.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }
}

/// One array node of a document.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ArrayAnalysis {
    /// Dotted path of the array field, e.g. `stock` or `orders[].lines`.
    pub path: String,
    /// Statistic the length was read from.
    pub length_statistic: String,
    /// Average number of elements.
    pub length: f64,
    /// Number of such arrays per document (product of enclosing lengths).
    pub occurrences: f64,
    /// Scalars directly inside one element, nested arrays excluded.
    pub scalars: ScalarCounts,
}

/// Breakdown of one document's estimated size.
///
/// `outside_bytes + inside_bytes + key_bytes == document_bytes`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DocumentAnalysis {
    /// Label detected from the top-level fields.
    pub label: EntityLabel,
    /// Scalars that are not inside any array.
    pub scalars_outside: ScalarCounts,
    /// Every array node, in schema order.
    pub arrays: Vec<ArrayAnalysis>,
    /// Number of keys per document, weighted by array lengths.
    pub key_count: f64,
    /// Objects whose detected label differs from the enclosing entity.
    pub embedded_entities: usize,
    /// Bytes of scalars outside arrays.
    pub outside_bytes: f64,
    /// Bytes of scalars inside arrays.
    pub inside_bytes: f64,
    /// Bytes of keys.
    pub key_bytes: f64,
    /// Total document size.
    pub document_bytes: f64,
}

impl SizeEstimator {
    /// Breaks the size of one document down by scalars, arrays and keys.
    ///
    /// # Errors
    ///
    /// Fails under the same conditions as [`SizeEstimator::document_size`].
    pub fn analyze_document(
        &self,
        schema: &Schema,
        stats: &StatisticsTable,
    ) -> Result<DocumentAnalysis, ConfigurationError> {
        let label = schema.label();
        let mut walk = Walk {
            estimator: self,
            stats,
            analysis: DocumentAnalysis {
                label,
                scalars_outside: ScalarCounts::default(),
                arrays: Vec::new(),
                key_count: 0.0,
                embedded_entities: 0,
                outside_bytes: 0.0,
                inside_bytes: 0.0,
                key_bytes: 0.0,
                document_bytes: 0.0,
            },
        };

        let root = Scope {
            multiplier: 1.0,
            array: None,
            entity: label,
        };
        walk.fields(schema.fields(), "", root)?;

        let mut analysis = walk.analysis;
        analysis.document_bytes =
            analysis.outside_bytes + analysis.inside_bytes + analysis.key_bytes;
        Ok(analysis)
    }
}

#[derive(Clone, Copy)]
struct Scope {
    /// Occurrences of the current node per document.
    multiplier: f64,
    /// Innermost enclosing array, as an index into `arrays`.
    array: Option<usize>,
    /// Innermost enclosing entity.
    entity: EntityLabel,
}

struct Walk<'a> {
    estimator: &'a SizeEstimator,
    stats: &'a StatisticsTable,
    analysis: DocumentAnalysis,
}

impl Walk<'_> {
    fn fields(
        &mut self,
        fields: &[Field],
        prefix: &str,
        scope: Scope,
    ) -> Result<(), ConfigurationError> {
        for field in fields {
            let path = if prefix.is_empty() {
                field.name().to_string()
            } else {
                format!("{prefix}.{}", field.name())
            };
            self.node(field.node(), &path, scope)?;
        }
        Ok(())
    }

    fn node(
        &mut self,
        node: &SchemaNode,
        path: &str,
        scope: Scope,
    ) -> Result<(), ConfigurationError> {
        let key = self.estimator.key_overhead();
        self.analysis.key_count += scope.multiplier;
        self.analysis.key_bytes += scope.multiplier * key;

        match node {
            SchemaNode::Scalar(type_name) => {
                let bytes = scope.multiplier
                    * self.estimator.config().types.resolve(type_name, self.stats)?;
                match scope.array {
                    Some(index) => {
                        self.analysis.arrays[index].scalars.add(type_name);
                        self.analysis.inside_bytes += bytes;
                    }
                    None => {
                        self.analysis.scalars_outside.add(type_name);
                        self.analysis.outside_bytes += bytes;
                    }
                }
            }
            SchemaNode::Object(fields) => {
                let label = node.label();
                let entity = if label.is_known() && label != scope.entity {
                    self.analysis.embedded_entities += 1;
                    label
                } else {
                    scope.entity
                };
                self.fields(fields, path, Scope { entity, ..scope })?;
            }
            SchemaNode::Array { items, length } => {
                let average = array_length(self.stats, length)?;
                let index = self.analysis.arrays.len();
                self.analysis.arrays.push(ArrayAnalysis {
                    path: path.to_string(),
                    length_statistic: length.clone(),
                    length: average,
                    occurrences: scope.multiplier,
                    scalars: ScalarCounts::default(),
                });
                let inner = Scope {
                    multiplier: scope.multiplier * average,
                    array: Some(index),
                    entity: scope.entity,
                };
                self.node(items, &format!("{path}[]"), inner)?;
            }
        }
        Ok(())
    }
}

//! Recursive document size estimation.

use docsize_types::{ConfigurationError, Field, Schema, SchemaNode, SizeConfig, StatisticsTable};
use tracing::trace;

/// One collection handed to [`SizeEstimator::database_size`].
#[derive(Debug, Clone, Copy)]
pub struct CollectionInput<'a> {
    /// Schema of the collection's documents.
    pub schema: &'a Schema,
    /// Statistics used to resolve the schema.
    pub stats: &'a StatisticsTable,
    /// Number of documents in the collection.
    pub document_count: f64,
}

impl<'a> CollectionInput<'a> {
    /// Creates a collection input.
    #[must_use]
    pub const fn new(schema: &'a Schema, stats: &'a StatisticsTable, document_count: f64) -> Self {
        Self {
            schema,
            stats,
            document_count,
        }
    }
}

/// Document, collection and database size estimator.
///
/// Sizes follow one composition law, with `K` the key overhead:
///
/// - scalar of type `T`: `size(T) + K`
/// - object: `K + sum(children)`
/// - array of `E` with average length `L`: `K + L * size(E)`
///
/// A document is the sum of its top-level fields.
#[derive(Debug, Clone, PartialEq)]
pub struct SizeEstimator {
    config: SizeConfig,
}

impl SizeEstimator {
    /// Creates an estimator for a size configuration.
    #[must_use]
    pub const fn new(config: SizeConfig) -> Self {
        Self { config }
    }

    /// Returns the size configuration.
    #[must_use]
    pub const fn config(&self) -> &SizeConfig {
        &self.config
    }

    /// Returns the bytes added per field for its key.
    #[must_use]
    pub const fn key_overhead(&self) -> f64 {
        self.config.key_overhead
    }

    /// Estimates the serialized size of one document in bytes.
    ///
    /// # Errors
    ///
    /// Returns an error if the schema uses a scalar type missing from the
    /// size table or a statistic missing from `stats`.
    pub fn document_size(
        &self,
        schema: &Schema,
        stats: &StatisticsTable,
    ) -> Result<f64, ConfigurationError> {
        self.fields_size(schema.fields(), stats)
    }

    /// Estimates the size of one schema node, key included.
    ///
    /// # Errors
    ///
    /// See [`Self::document_size`].
    pub fn node_size(
        &self,
        node: &SchemaNode,
        stats: &StatisticsTable,
    ) -> Result<f64, ConfigurationError> {
        let key = self.config.key_overhead;
        let size = match node {
            SchemaNode::Scalar(type_name) => key + self.config.types.resolve(type_name, stats)?,
            SchemaNode::Object(fields) => key + self.fields_size(fields, stats)?,
            SchemaNode::Array { items, length } => {
                key + array_length(stats, length)? * self.node_size(items, stats)?
            }
        };
        trace!(?node, size, "sized schema node");
        Ok(size)
    }

    fn fields_size(
        &self,
        fields: &[Field],
        stats: &StatisticsTable,
    ) -> Result<f64, ConfigurationError> {
        fields.iter().try_fold(0.0, |total, field| {
            Ok(total + self.node_size(field.node(), stats)?)
        })
    }

    /// Estimates the size of a collection of `document_count` documents.
    ///
    /// # Errors
    ///
    /// Returns an error if `document_count` is negative or not finite, or
    /// if the document size cannot be computed.
    pub fn collection_size(
        &self,
        schema: &Schema,
        stats: &StatisticsTable,
        document_count: f64,
    ) -> Result<f64, ConfigurationError> {
        validate_document_count(document_count)?;
        Ok(self.document_size(schema, stats)? * document_count)
    }

    /// Estimates the total size of several collections.
    ///
    /// # Errors
    ///
    /// Returns the first error raised by [`Self::collection_size`].
    pub fn database_size<'a, I>(&self, collections: I) -> Result<f64, ConfigurationError>
    where
        I: IntoIterator<Item = CollectionInput<'a>>,
    {
        collections.into_iter().try_fold(0.0, |total, input| {
            Ok(total + self.collection_size(input.schema, input.stats, input.document_count)?)
        })
    }
}

/// Rejects negative, NaN and infinite document counts.
pub(crate) fn validate_document_count(document_count: f64) -> Result<(), ConfigurationError> {
    if !document_count.is_finite() || document_count < 0.0 {
        return Err(ConfigurationError::InvalidDocumentCount(document_count));
    }
    Ok(())
}

/// Reads the average length of an array, rejecting negative and non-finite values.
pub(crate) fn array_length(
    stats: &StatisticsTable,
    statistic: &str,
) -> Result<f64, ConfigurationError> {
    let length = stats.get(statistic)?;
    if !length.is_finite() || length < 0.0 {
        return Err(ConfigurationError::InvalidArrayLength {
            statistic: statistic.to_string(),
            length,
        });
    }
    Ok(length)
}

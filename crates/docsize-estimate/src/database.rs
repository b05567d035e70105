//! Collection and database estimates for whole designs.

use docsize_types::{
    CollectionSpec, ConfigurationError, DatabaseDesign, EntityLabel, StatisticsTable,
};
use serde::Serialize;
use tracing::debug;

use crate::estimator::validate_document_count;
use crate::{CollectionInput, SizeEstimator};

/// Estimated size of one collection.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CollectionEstimate {
    /// Collection name.
    pub name: String,
    /// Label detected from the collection's schema.
    pub label: EntityLabel,
    /// Number of documents.
    pub document_count: f64,
    /// Size of one document in bytes.
    pub document_bytes: f64,
    /// Size of the collection in bytes.
    pub collection_bytes: f64,
}

/// Estimated size of a database design.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DatabaseEstimate {
    /// Design name.
    pub name: String,
    /// Design signature.
    pub signature: String,
    /// Per-collection estimates, in design order.
    pub collections: Vec<CollectionEstimate>,
    /// Sum of all collection sizes in bytes.
    pub total_bytes: f64,
}

impl DatabaseEstimate {
    /// Returns the estimate for a collection by name (case-insensitive).
    #[must_use]
    pub fn collection(&self, name: &str) -> Option<&CollectionEstimate> {
        self.collections
            .iter()
            .find(|c| c.name.eq_ignore_ascii_case(name))
    }
}

impl SizeEstimator {
    /// Estimates one collection of a design.
    ///
    /// # Errors
    ///
    /// Returns an error if the document count statistic is missing or
    /// invalid, or if the document size cannot be computed.
    pub fn estimate_collection(
        &self,
        spec: &CollectionSpec,
        stats: &StatisticsTable,
    ) -> Result<CollectionEstimate, ConfigurationError> {
        let document_count = spec.count.resolve(stats)?;
        validate_document_count(document_count)?;
        let document_bytes = self.document_size(&spec.schema, stats)?;
        let collection_bytes = document_bytes * document_count;

        debug!(
            collection = %spec.name,
            document_count,
            document_bytes,
            collection_bytes,
            "estimated collection"
        );

        Ok(CollectionEstimate {
            name: spec.name.clone(),
            label: spec.label(),
            document_count,
            document_bytes,
            collection_bytes,
        })
    }

    /// Estimates every collection of a design and their total.
    ///
    /// # Errors
    ///
    /// Returns the first error raised by [`Self::estimate_collection`].
    pub fn estimate_database(
        &self,
        design: &DatabaseDesign,
        stats: &StatisticsTable,
    ) -> Result<DatabaseEstimate, ConfigurationError> {
        let collections = design
            .collections
            .iter()
            .map(|spec| self.estimate_collection(spec, stats))
            .collect::<Result<Vec<_>, _>>()?;

        let inputs = design
            .collections
            .iter()
            .zip(&collections)
            .map(|(spec, estimate)| {
                CollectionInput::new(&spec.schema, stats, estimate.document_count)
            });
        let total_bytes = self.database_size(inputs)?;

        debug!(design = %design.name, total_bytes, "estimated database");

        Ok(DatabaseEstimate {
            name: design.name.clone(),
            signature: design.signature.clone(),
            collections,
            total_bytes,
        })
    }

    /// Estimates several designs against the same statistics.
    ///
    /// Results keep the input order.
    ///
    /// # Errors
    ///
    /// Returns the first error raised by [`Self::estimate_database`].
    pub fn compare_databases(
        &self,
        designs: &[DatabaseDesign],
        stats: &StatisticsTable,
    ) -> Result<Vec<DatabaseEstimate>, ConfigurationError> {
        designs
            .iter()
            .map(|design| self.estimate_database(design, stats))
            .collect()
    }
}

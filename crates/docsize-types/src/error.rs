//! Error types for docsize.

use thiserror::Error;

/// Result type alias for docsize operations.
pub type Result<T> = std::result::Result<T, DocsizeError>;

/// Errors that can occur while loading inputs and estimating sizes.
#[derive(Error, Debug)]
pub enum DocsizeError {
    /// The size configuration or statistics do not cover the schema.
    #[error(transparent)]
    Configuration(#[from] ConfigurationError),

    /// The schema description is malformed.
    #[error(transparent)]
    Schema(#[from] SchemaError),

    /// Unknown database design.
    #[error("Unknown database design: {0}")]
    UnknownDesign(String),

    /// A design refers to a schema that is not defined.
    #[error("Unknown schema: {0}")]
    UnknownSchema(String),

    /// Unknown collection within a design.
    #[error("Unknown collection '{collection}' in {design}")]
    UnknownCollection {
        /// The design that was searched.
        design: String,
        /// The collection that was not found.
        collection: String,
    },

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON deserialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Inputs that make an estimate impossible to compute.
///
/// These are never defaulted: an estimate built on a silently zeroed size
/// looks plausible and is wrong.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigurationError {
    /// A schema references a scalar type missing from the size table.
    #[error("Unknown scalar type '{0}' (not in the type size table)")]
    UnknownType(String),

    /// A schema or collection references a statistic that was not supplied.
    #[error("Missing statistic '{0}'")]
    MissingStatistic(String),

    /// Sharding over zero or a negative number of servers.
    #[error("Invalid server count {0}: must be greater than zero")]
    InvalidServerCount(f64),

    /// A collection with a negative (or non-finite) number of documents.
    #[error("Invalid document count {0}: must be a non-negative number")]
    InvalidDocumentCount(f64),

    /// An array length statistic that is negative or not finite.
    #[error("Invalid array length {length} in statistic '{statistic}': must be non-negative")]
    InvalidArrayLength {
        /// Statistic the length was read from.
        statistic: String,
        /// Offending value.
        length: f64,
    },
}

/// Errors raised while parsing a schema description.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SchemaError {
    /// The node at `path` is not a JSON object.
    #[error("Schema node at '{0}' is not an object")]
    NotAnObject(String),

    /// The node at `path` has no string `type` member.
    #[error("Schema node at '{0}' has no \"type\"")]
    MissingType(String),

    /// An object node without `properties`.
    #[error("Object node at '{0}' has no \"properties\"")]
    MissingProperties(String),

    /// An array node without `items`.
    #[error("Array node at '{0}' has no \"items\"")]
    MissingItems(String),

    /// An array node without the statistic naming its average length.
    #[error("Array node at '{0}' has no \"length\" statistic")]
    MissingLength(String),

    /// The document root must be an object.
    #[error("Schema root must be an object, found '{0}'")]
    RootNotObject(String),
}

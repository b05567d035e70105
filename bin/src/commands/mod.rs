//! CLI command implementations.

pub(crate) mod analyze;
pub(crate) mod compare;
pub(crate) mod databases;
pub(crate) mod estimate;
pub(crate) mod shard;

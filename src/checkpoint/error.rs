//! Checkpoint error types.

use crate::core::{AutomatonError, Dimensions};
use thiserror::Error;

/// Errors that can occur during checkpoint operations
#[derive(Debug, Error)]
pub enum CheckpointError {
    /// Serialization to JSON or binary format failed
    #[error("Serialization failed: {0}")]
    SerializationFailed(String),

    /// Deserialization from JSON or binary format failed
    #[error("Deserialization failed: {0}")]
    DeserializationFailed(String),

    /// Checkpoint version is not supported by this version
    #[error("Unsupported checkpoint version {found}, supported: {supported}")]
    UnsupportedVersion { found: u32, supported: u32 },

    /// Checkpoint was taken against a table of a different shape
    #[error("Checkpoint dimensions {found:?} do not match table dimensions {expected:?}")]
    DimensionMismatch {
        found: Dimensions,
        expected: Dimensions,
    },

    /// Checkpoint data failed validation
    #[error("Checkpoint validation failed: {0}")]
    ValidationFailed(#[from] AutomatonError),
}

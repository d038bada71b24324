//! Build errors for transition tables.

use crate::audit::TableViolation;
use crate::core::{AutomatonError, Dimensions};
use thiserror::Error;

/// Errors that can occur when building a transition table.
#[derive(Debug, Error)]
pub enum BuildError {
    #[error("Table has no states. At least the trap state is required")]
    EmptyStateSpace,

    #[error(
        "Table of {} states and {} symbols does not fit in memory",
        .dimensions.num_states,
        .dimensions.alphabet_size
    )]
    TooLarge { dimensions: Dimensions },

    #[error("Table failed audit with {} violation(s): {}", .violations.len(), join(.violations))]
    InvalidTable { violations: Vec<TableViolation> },

    #[error("Transition out of bounds: {0}")]
    OutOfRange(#[from] AutomatonError),

    #[error("Invalid table definition: {0}")]
    Json(#[from] serde_json::Error),
}

fn join(violations: &[TableViolation]) -> String {
    violations
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

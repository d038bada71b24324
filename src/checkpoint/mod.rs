//! Checkpoint and resume functionality for automata.
//!
//! A checkpoint captures where an automaton is so that a long input stream
//! can be paused and resumed later, possibly in another process. The table
//! and mapper are not part of the checkpoint; resuming requires handing
//! the same table back, and its shape is checked against the one recorded.

use crate::core::{Dimensions, StateId, SymbolMapper, TransitionTable};
use crate::engine::Automaton;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub mod error;

pub use error::CheckpointError;

/// Version identifier for checkpoint format
pub const CHECKPOINT_VERSION: u32 = 1;

/// Serializable snapshot of an automaton's position.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Checkpoint {
    /// Checkpoint format version
    pub version: u32,

    /// Unique checkpoint identifier
    pub id: Uuid,

    /// When checkpoint was created
    pub timestamp: DateTime<Utc>,

    /// Shape of the table the automaton was running on
    pub dimensions: Dimensions,

    /// Initial state of the automaton
    pub initial_state: StateId,

    /// Current state of the automaton
    pub current_state: StateId,
}

impl Checkpoint {
    pub fn to_json(&self) -> Result<String, CheckpointError> {
        serde_json::to_string(self)
            .map_err(|e| CheckpointError::SerializationFailed(e.to_string()))
    }

    pub fn from_json(json: &str) -> Result<Self, CheckpointError> {
        serde_json::from_str(json)
            .map_err(|e| CheckpointError::DeserializationFailed(e.to_string()))
    }

    pub fn to_bytes(&self) -> Result<Vec<u8>, CheckpointError> {
        bincode::serialize(self).map_err(|e| CheckpointError::SerializationFailed(e.to_string()))
    }

    pub fn from_bytes(bytes: &[u8]) -> Result<Self, CheckpointError> {
        bincode::deserialize(bytes)
            .map_err(|e| CheckpointError::DeserializationFailed(e.to_string()))
    }
}

impl<'a, I, M> Automaton<'a, I, M>
where
    I: ?Sized,
    M: SymbolMapper<I> + ?Sized,
{
    /// Snapshot the automaton's current position.
    pub fn checkpoint(&self) -> Checkpoint {
        let checkpoint = Checkpoint {
            version: CHECKPOINT_VERSION,
            id: Uuid::new_v4(),
            timestamp: Utc::now(),
            dimensions: self.table().dimensions(),
            initial_state: self.initial_state(),
            current_state: self.query_state(),
        };
        tracing::debug!(
            "Checkpoint {} taken at state {}",
            checkpoint.id,
            checkpoint.current_state
        );
        checkpoint
    }

    /// Rebuild an automaton from a checkpoint against `table` and `mapper`.
    pub fn resume(
        table: &'a TransitionTable,
        mapper: &'a M,
        checkpoint: &Checkpoint,
    ) -> Result<Self, CheckpointError> {
        if checkpoint.version != CHECKPOINT_VERSION {
            return Err(CheckpointError::UnsupportedVersion {
                found: checkpoint.version,
                supported: CHECKPOINT_VERSION,
            });
        }

        if checkpoint.dimensions != table.dimensions() {
            return Err(CheckpointError::DimensionMismatch {
                found: checkpoint.dimensions,
                expected: table.dimensions(),
            });
        }

        let mut automaton = Automaton::new(table, mapper, checkpoint.initial_state)?;
        automaton.set_state(checkpoint.current_state)?;
        tracing::debug!(
            "Resumed from checkpoint {} at state {}",
            checkpoint.id,
            checkpoint.current_state
        );
        Ok(automaton)
    }
}

//! Defects an audit can find in authored transitions.

use crate::core::{StateId, Symbol};
use thiserror::Error;

/// A single problem with an authored table
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TableViolation {
    #[error("transition from {from} on {symbol}: source state out of range ({num_states} states)")]
    SourceOutOfRange {
        from: StateId,
        symbol: Symbol,
        num_states: usize,
    },

    #[error("transition from {from} on {symbol}: symbol out of range ({symbol_count} symbols)")]
    SymbolOutOfRange {
        from: StateId,
        symbol: Symbol,
        symbol_count: usize,
    },

    #[error("transition from {from} on {symbol}: target {to} out of range ({num_states} states)")]
    TargetOutOfRange {
        from: StateId,
        symbol: Symbol,
        to: StateId,
        num_states: usize,
    },

    #[error("cell ({from}, {symbol}) authored twice: {first} and {second}")]
    ConflictingTransition {
        from: StateId,
        symbol: Symbol,
        first: StateId,
        second: StateId,
    },

    #[error("trap state escapes to {to} on {symbol}")]
    TrapEscapes { symbol: Symbol, to: StateId },

    #[error("custom check failed: {message}")]
    CustomCheckFailed { message: String },
}

//! Errors raised when a lookup leaves the configured table bounds.

use super::state::StateId;
use super::symbol::Symbol;
use thiserror::Error;

/// Contract violations detected by the engine.
///
/// Unrecognized input is not an error: mappers route it through
/// [`Symbol::INVALID`]. These variants only appear when a caller, mapper or
/// checkpoint hands the engine an id outside the table's dimensions.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum AutomatonError {
    #[error("state {state} is out of range (table has {num_states} states)")]
    StateOutOfRange { state: StateId, num_states: usize },

    #[error("symbol {symbol} is out of range (table has {symbol_count} symbols)")]
    SymbolOutOfRange { symbol: Symbol, symbol_count: usize },
}

impl AutomatonError {
    /// Stable code for reporting.
    pub fn error_code(&self) -> &'static str {
        match self {
            AutomatonError::StateOutOfRange { .. } => "STATE_OUT_OF_RANGE",
            AutomatonError::SymbolOutOfRange { .. } => "SYMBOL_OUT_OF_RANGE",
        }
    }
}

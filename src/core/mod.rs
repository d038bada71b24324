//! Core automaton types.
//!
//! This module contains the pieces every configuration is made of:
//! - [`StateId`] and [`Symbol`] ids, plus the [`Label`] trait for typed names
//! - The [`SymbolMapper`] capability that turns raw input into symbols
//! - The immutable [`TransitionTable`]
//! - [`Acceptance`] sets and run [`Trace`]s for interpreting results
//!
//! Nothing here mutates shared state; the only mutable value in the crate is
//! an [`crate::engine::Automaton`]'s current state.

mod acceptance;
mod error;
mod history;
mod state;
mod symbol;
mod table;

pub use acceptance::Acceptance;
pub use error::AutomatonError;
pub use history::{StepRecord, Trace};
pub use state::{Label, StateId};
pub use symbol::{Symbol, SymbolMapper};
pub use table::{Dimensions, Transition, TransitionTable};

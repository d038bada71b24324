//! The automaton engine.
//!
//! An [`Automaton`] couples one mutable value, its current state, with a
//! borrowed [`TransitionTable`](crate::core::TransitionTable) and a borrowed
//! [`SymbolMapper`](crate::core::SymbolMapper). Every operation is
//! synchronous and bounded: `step` is a single table lookup, `run` a loop of
//! steps.
//!
//! # Guarantees
//!
//! - **Determinism**: the same input from the same state always leads to the
//!   same next state
//! - **Absorption**: once in trap, no input leaves it (tables are audited for
//!   this when built)
//! - **Composition**: running `a ++ b` equals running `a`, then `b`
//! - **Bounds**: an out-of-range state or symbol is reported as an
//!   [`AutomatonError`](crate::core::AutomatonError), never read unchecked

mod automaton;

pub use automaton::Automaton;

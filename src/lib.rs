//! Stately: table-driven deterministic finite automata
//!
//! A configuration is three things: a [`SymbolMapper`] that turns raw input
//! into small symbol ids, an immutable [`TransitionTable`] indexed by state
//! and symbol, and a start state. An [`Automaton`] borrows the first two and
//! owns only its current state, so one table can back any number of
//! automata at once.
//!
//! # Core Concepts
//!
//! - **Trap**: state `0`. Every cell nobody authored leads there, and the
//!   trap row never leads anywhere else
//! - **Invalid**: symbol `0`. Mappers return it for unrecognized input
//! - **Audit**: tables are checked with Stillwater's `Validation` when built,
//!   reporting every defect at once
//! - **Acceptance**: kept outside the engine; callers decide what a final
//!   state means
//!
//! # Example
//!
//! ```rust
//! use stately::{states, symbols, Acceptance, Automaton, Symbol, TableBuilder};
//!
//! states! {
//!     enum Turnstile {
//!         Trap,
//!         Locked,
//!         Unlocked,
//!     }
//! }
//!
//! symbols! {
//!     enum Event {
//!         Invalid,
//!         Coin,
//!         Push,
//!     }
//! }
//!
//! let table = TableBuilder::for_labels::<Turnstile, Event>()
//!     .on(Turnstile::Locked, Event::Coin, Turnstile::Unlocked)
//!     .on(Turnstile::Locked, Event::Push, Turnstile::Locked)
//!     .on(Turnstile::Unlocked, Event::Coin, Turnstile::Unlocked)
//!     .on(Turnstile::Unlocked, Event::Push, Turnstile::Locked)
//!     .build()
//!     .unwrap();
//!
//! let mapper = |word: &str| match word {
//!     "coin" => Symbol::from(Event::Coin),
//!     "push" => Symbol::from(Event::Push),
//!     _ => Symbol::INVALID,
//! };
//!
//! let mut gate = Automaton::new(&table, &mapper, Turnstile::Locked).unwrap();
//! let state = gate.run(["coin", "push", "coin"]).unwrap();
//! assert_eq!(Turnstile::try_from(state), Ok(Turnstile::Unlocked));
//! assert!(gate.is_accepting(&Acceptance::new([Turnstile::Unlocked])));
//!
//! gate.step("kick").unwrap();
//! assert!(gate.is_trapped());
//! ```

pub mod audit;
pub mod builder;
pub mod checkpoint;
pub mod core;
pub mod engine;
pub mod validators;

// Re-export commonly used types
pub use builder::{load_table, BuildError, TableBuilder, TableDefinition};
pub use checkpoint::{Checkpoint, CheckpointError};
pub use core::{
    Acceptance, AutomatonError, Dimensions, Label, StateId, Symbol, SymbolMapper, Trace,
    TransitionTable,
};
pub use engine::Automaton;

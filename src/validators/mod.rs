//! Ready-made automaton configurations.
//!
//! Each submodule bundles typed state and symbol enums, a mapper, a shared
//! table built on first use, and a convenience entry point:
//!
//! | Module | Input | Entry point |
//! |--------|-------|-------------|
//! | [`binary`] | `char` | [`binary::is_accepted`] |
//! | [`date`] | `char` | [`date::is_valid_date`] |
//! | [`number`] | `char` | [`number::is_number`] |
//! | [`parity`] | [`parity::Tally`] | [`parity::running_parity`] |
//!
//! The tables are plain [`TransitionTable`](crate::core::TransitionTable)s,
//! so they can also drive an [`Automaton`](crate::engine::Automaton) by hand:
//!
//! ```rust
//! use stately::validators::date::{self, DateState};
//!
//! let mut automaton = date::automaton();
//! let state = automaton.run("1999-13-01".chars()).unwrap();
//! assert_eq!(DateState::try_from(state), Ok(DateState::Trap));
//! ```

pub mod binary;
pub mod date;
pub mod number;
pub mod parity;

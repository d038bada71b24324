//! State identifiers and typed labels.
//!
//! The engine only ever sees plain [`StateId`] values. Embedding validators
//! usually name their states with an enum generated by [`crate::states!`],
//! which implements [`Label`] and converts into `StateId`.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier of a node in a transition table.
///
/// Ids are dense, starting at zero. Id `0` is the trap state by convention:
/// its row loops back to itself for every symbol, so once an automaton
/// reaches it no input can move it out again.
///
/// # Example
///
/// ```rust
/// use stately::core::StateId;
///
/// let accepting = StateId::new(1);
/// assert_eq!(accepting.index(), 1);
/// assert!(!accepting.is_trap());
/// assert!(StateId::TRAP.is_trap());
/// ```
#[derive(
    Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct StateId(usize);

impl StateId {
    /// The absorbing reject state.
    pub const TRAP: StateId = StateId(0);

    pub const fn new(index: usize) -> Self {
        StateId(index)
    }

    pub const fn index(self) -> usize {
        self.0
    }

    pub const fn is_trap(self) -> bool {
        self.0 == 0
    }
}

impl From<usize> for StateId {
    fn from(index: usize) -> Self {
        StateId(index)
    }
}

impl fmt::Display for StateId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "q{}", self.0)
    }
}

/// A fieldless enum naming the ids of a table axis (states or symbols).
///
/// Variants are numbered in declaration order, so `ALL[i].index() == i`.
/// Implementations are normally generated by [`crate::states!`] and
/// [`crate::symbols!`] rather than written by hand.
pub trait Label: Copy + PartialEq + fmt::Debug + 'static {
    /// Every variant, in id order.
    const ALL: &'static [Self];

    /// Variant name for display and logging.
    fn name(&self) -> &'static str;

    /// Dense id of this variant.
    fn index(&self) -> usize;

    /// Look a variant up by its id.
    ///
    /// Default implementation indexes into `ALL`.
    fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Number of variants.
    fn count() -> usize {
        Self::ALL.len()
    }
}

//! Caller-side interpretation of which states count as success.
//!
//! The engine has no notion of acceptance: it only reports the state it
//! ended in. An [`Acceptance`] names the states a particular validator
//! treats as accepting, so that "did the input match" is a pure query on
//! the final state.

use super::state::StateId;
use std::collections::BTreeSet;

/// Set of accepting states.
///
/// # Example
///
/// ```rust
/// use stately::core::{Acceptance, StateId};
///
/// let accepting = Acceptance::new([StateId::new(3), StateId::new(5)]);
///
/// assert!(accepting.accepts(StateId::new(3)));
/// assert!(!accepting.accepts(StateId::new(4)));
/// assert!(!accepting.accepts(StateId::TRAP));
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Acceptance {
    states: BTreeSet<StateId>,
}

impl Acceptance {
    pub fn new<I, S>(states: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<StateId>,
    {
        Self {
            states: states.into_iter().map(Into::into).collect(),
        }
    }

    /// Whether ending in `state` counts as a match.
    pub fn accepts(&self, state: StateId) -> bool {
        self.states.contains(&state)
    }

    /// Accepting states in id order.
    pub fn states(&self) -> impl Iterator<Item = StateId> + '_ {
        self.states.iter().copied()
    }

    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }
}

impl<S: Into<StateId>> FromIterator<S> for Acceptance {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self::new(iter)
    }
}

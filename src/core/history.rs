//! Step-by-step traces of an automaton run.
//!
//! A [`Trace`] records every transition a run took, which is what a test
//! harness needs to report *where* an input went wrong rather than only
//! that it did.

use super::state::StateId;
use super::symbol::Symbol;
use serde::{Deserialize, Serialize};

/// Record of a single committed step.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct StepRecord {
    /// State before the step
    pub from: StateId,
    /// Symbol the mapper produced for the input token
    pub symbol: Symbol,
    /// State after the step
    pub to: StateId,
}

/// Ordered record of the steps taken from a starting state.
///
/// # Example
///
/// ```rust
/// use stately::core::{StateId, StepRecord, Symbol, Trace};
///
/// let trace = Trace::new(StateId::new(1))
///     .record(StepRecord {
///         from: StateId::new(1),
///         symbol: Symbol::new(2),
///         to: StateId::new(1),
///     })
///     .record(StepRecord {
///         from: StateId::new(1),
///         symbol: Symbol::new(1),
///         to: StateId::TRAP,
///     });
///
/// assert_eq!(trace.path(), vec![StateId::new(1), StateId::new(1), StateId::TRAP]);
/// assert_eq!(trace.trapped_at(), Some(1));
/// assert_eq!(trace.final_state(), StateId::TRAP);
/// ```
#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct Trace {
    start: StateId,
    steps: Vec<StepRecord>,
}

impl Trace {
    /// Create an empty trace starting at `start`.
    pub fn new(start: StateId) -> Self {
        Self {
            start,
            steps: Vec::new(),
        }
    }

    /// Append a step, returning the extended trace.
    pub fn record(mut self, step: StepRecord) -> Self {
        self.steps.push(step);
        self
    }

    pub fn start(&self) -> StateId {
        self.start
    }

    pub fn steps(&self) -> &[StepRecord] {
        &self.steps
    }

    /// States visited: the start, then the target of each step.
    pub fn path(&self) -> Vec<StateId> {
        std::iter::once(self.start)
            .chain(self.steps.iter().map(|s| s.to))
            .collect()
    }

    /// State after the last step, or the start for an empty trace.
    pub fn final_state(&self) -> StateId {
        self.steps.last().map(|s| s.to).unwrap_or(self.start)
    }

    /// Index of the first step that entered the trap state.
    ///
    /// `None` if the run never entered trap by stepping, including runs
    /// that started there.
    pub fn trapped_at(&self) -> Option<usize> {
        self.steps
            .iter()
            .position(|s| s.to.is_trap() && !s.from.is_trap())
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }
}

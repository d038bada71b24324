//! Automaton that steps a current state through a shared table.

use crate::core::{
    Acceptance, AutomatonError, StateId, StepRecord, SymbolMapper, Trace, TransitionTable,
};
use std::borrow::Borrow;
use std::fmt;
use std::marker::PhantomData;

/// A deterministic finite automaton over raw inputs of type `I`.
///
/// The automaton owns only its current state. The table and the mapper are
/// borrowed, so one table can back many automata at once, including on
/// different threads.
///
/// # Example
///
/// ```rust
/// use stately::builder::TableBuilder;
/// use stately::core::{Dimensions, StateId, Symbol};
/// use stately::engine::Automaton;
///
/// const ACCEPTING: StateId = StateId::new(1);
/// const ZERO: Symbol = Symbol::new(1);
/// const ONE: Symbol = Symbol::new(2);
///
/// let table = TableBuilder::new(Dimensions::new(2, 2))
///     .on(ACCEPTING, ONE, ACCEPTING)
///     .build()
///     .unwrap();
///
/// let mapper = |c: &char| match c {
///     '0' => ZERO,
///     '1' => ONE,
///     _ => Symbol::INVALID,
/// };
///
/// let mut automaton = Automaton::new(&table, &mapper, ACCEPTING).unwrap();
/// assert_eq!(automaton.run("1111".chars()), Ok(ACCEPTING));
/// assert_eq!(automaton.run("10".chars()), Ok(StateId::TRAP));
/// assert!(automaton.is_trapped());
/// ```
pub struct Automaton<'a, I: ?Sized, M: ?Sized> {
    current: StateId,
    initial: StateId,
    table: &'a TransitionTable,
    mapper: &'a M,
    _input: PhantomData<fn(&I)>,
}

impl<'a, I, M> Automaton<'a, I, M>
where
    I: ?Sized,
    M: SymbolMapper<I> + ?Sized,
{
    /// Create an automaton in `initial`.
    /// Fails if `initial` is not a state of `table`.
    pub fn new(
        table: &'a TransitionTable,
        mapper: &'a M,
        initial: impl Into<StateId>,
    ) -> Result<Self, AutomatonError> {
        let initial = table.dimensions().check_state(initial.into())?;
        Ok(Self {
            current: initial,
            initial,
            table,
            mapper,
            _input: PhantomData,
        })
    }

    /// Get current state (pure)
    pub fn query_state(&self) -> StateId {
        self.current
    }

    /// State the automaton was created in.
    pub fn initial_state(&self) -> StateId {
        self.initial
    }

    pub fn table(&self) -> &'a TransitionTable {
        self.table
    }

    pub fn mapper(&self) -> &'a M {
        self.mapper
    }

    /// Force the current state, e.g. to replay from the middle of a sequence.
    /// An out-of-range state is rejected and the current state is kept.
    pub fn set_state(&mut self, state: impl Into<StateId>) -> Result<(), AutomatonError> {
        let state = state.into();
        match self.table.dimensions().check_state(state) {
            Ok(state) => {
                tracing::debug!("Automaton state set: {} -> {}", self.current, state);
                self.current = state;
                Ok(())
            }
            Err(e) => {
                tracing::warn!("Refused to set automaton state: {}", e);
                Err(e)
            }
        }
    }

    /// Return to the initial state.
    pub fn reset(&mut self) {
        self.current = self.initial;
    }

    /// The state `step(input)` would move to, without moving (pure).
    pub fn peek(&self, input: &I) -> Result<StateId, AutomatonError> {
        let symbol = self.mapper.map(input);
        self.table.next(self.current, symbol)
    }

    /// Consume one input token and commit the transition.
    pub fn step(&mut self, input: &I) -> Result<StateId, AutomatonError> {
        self.step_record(input).map(|record| record.to)
    }

    /// Feed every input in order and return the final state.
    ///
    /// Equivalent to calling [`Automaton::step`] once per input. If a step
    /// fails, the automaton stays in the last state it reached.
    pub fn run<T, It>(&mut self, inputs: It) -> Result<StateId, AutomatonError>
    where
        It: IntoIterator<Item = T>,
        T: Borrow<I>,
    {
        for input in inputs {
            self.step(input.borrow())?;
        }
        Ok(self.current)
    }

    /// Like [`Automaton::run`], but also record every step taken.
    pub fn run_traced<T, It>(&mut self, inputs: It) -> Result<Trace, AutomatonError>
    where
        It: IntoIterator<Item = T>,
        T: Borrow<I>,
    {
        let mut trace = Trace::new(self.current);
        for input in inputs {
            trace = trace.record(self.step_record(input.borrow())?);
        }
        Ok(trace)
    }

    /// Check if the automaton is in the trap state (pure)
    pub fn is_trapped(&self) -> bool {
        self.current.is_trap()
    }

    /// Check if the current state is accepting under `acceptance` (pure)
    pub fn is_accepting(&self, acceptance: &Acceptance) -> bool {
        acceptance.accepts(self.current)
    }

    fn step_record(&mut self, input: &I) -> Result<StepRecord, AutomatonError> {
        let from = self.current;
        let symbol = self.mapper.map(input);
        let to = self.table.next(from, symbol).map_err(|e| {
            tracing::warn!("Step from {} on {} failed: {}", from, symbol, e);
            e
        })?;
        tracing::trace!("Step {} --{}--> {}", from, symbol, to);
        self.current = to;
        Ok(StepRecord { from, symbol, to })
    }
}

impl<I: ?Sized, M: ?Sized> Clone for Automaton<'_, I, M> {
    fn clone(&self) -> Self {
        Self {
            current: self.current,
            initial: self.initial,
            table: self.table,
            mapper: self.mapper,
            _input: PhantomData,
        }
    }
}

impl<I: ?Sized, M: ?Sized> fmt::Debug for Automaton<'_, I, M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Automaton")
            .field("current", &self.current)
            .field("initial", &self.initial)
            .field("dimensions", &self.table.dimensions())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::TableBuilder;
    use crate::core::{Dimensions, Symbol};

    const REJECTING: StateId = StateId::TRAP;
    const ACCEPTING: StateId = StateId::new(1);
    const ZERO: Symbol = Symbol::new(1);
    const ONE: Symbol = Symbol::new(2);

    fn ones_table() -> TransitionTable {
        TableBuilder::new(Dimensions::new(2, 2))
            .on(ACCEPTING, ONE, ACCEPTING)
            .on(ACCEPTING, ZERO, REJECTING)
            .build()
            .unwrap()
    }

    fn bit(c: &char) -> Symbol {
        match c {
            '0' => ZERO,
            '1' => ONE,
            _ => Symbol::INVALID,
        }
    }

    #[test]
    fn new_rejects_out_of_range_initial_state() {
        let table = ones_table();
        let result = Automaton::<char, _>::new(&table, &bit, StateId::new(2));

        assert_eq!(
            result.unwrap_err(),
            AutomatonError::StateOutOfRange {
                state: StateId::new(2),
                num_states: 2,
            }
        );
    }

    #[test]
    fn step_commits_and_returns_next_state() {
        let table = ones_table();
        let mut automaton = Automaton::new(&table, &bit, ACCEPTING).unwrap();

        assert_eq!(automaton.step(&'1'), Ok(ACCEPTING));
        assert_eq!(automaton.query_state(), ACCEPTING);
        assert_eq!(automaton.step(&'0'), Ok(REJECTING));
        assert_eq!(automaton.query_state(), REJECTING);
        assert!(automaton.is_trapped());
    }

    #[test]
    fn unrecognized_input_routes_through_invalid_symbol() {
        let table = ones_table();
        let mut automaton = Automaton::new(&table, &bit, ACCEPTING).unwrap();

        assert_eq!(automaton.step(&' '), Ok(StateId::TRAP));
    }

    #[test]
    fn peek_does_not_commit() {
        let table = ones_table();
        let automaton = Automaton::new(&table, &bit, ACCEPTING).unwrap();

        assert_eq!(automaton.peek(&'0'), Ok(REJECTING));
        assert_eq!(automaton.query_state(), ACCEPTING);
    }

    #[test]
    fn set_state_and_reset() {
        let table = ones_table();
        let mut automaton = Automaton::new(&table, &bit, ACCEPTING).unwrap();

        automaton.set_state(REJECTING).unwrap();
        assert_eq!(automaton.query_state(), REJECTING);

        automaton.reset();
        assert_eq!(automaton.query_state(), ACCEPTING);
        assert_eq!(automaton.initial_state(), ACCEPTING);
    }

    #[test]
    fn set_state_rejects_out_of_range_and_keeps_current() {
        let table = ones_table();
        let mut automaton = Automaton::new(&table, &bit, ACCEPTING).unwrap();

        let result = automaton.set_state(StateId::new(7));
        assert!(matches!(
            result,
            Err(AutomatonError::StateOutOfRange { num_states: 2, .. })
        ));
        assert_eq!(automaton.query_state(), ACCEPTING);
    }

    #[test]
    fn mapper_out_of_range_symbol_is_reported() {
        let table = ones_table();
        let wild = |_: &char| Symbol::new(9);
        let mut automaton = Automaton::new(&table, &wild, ACCEPTING).unwrap();

        assert_eq!(
            automaton.step(&'1'),
            Err(AutomatonError::SymbolOutOfRange {
                symbol: Symbol::new(9),
                symbol_count: 3,
            })
        );
        assert_eq!(automaton.query_state(), ACCEPTING);
    }

    #[test]
    fn run_stops_at_last_good_state_on_error() {
        let table = ones_table();
        let picky = |c: &char| if *c == '!' { Symbol::new(9) } else { bit(c) };
        let mut automaton = Automaton::new(&table, &picky, ACCEPTING).unwrap();

        let result = automaton.run("11!0".chars());
        assert!(result.is_err());
        assert_eq!(automaton.query_state(), ACCEPTING);
    }

    #[test]
    fn run_on_empty_input_is_identity() {
        let table = ones_table();
        let mut automaton = Automaton::new(&table, &bit, ACCEPTING).unwrap();

        assert_eq!(automaton.run("".chars()), Ok(ACCEPTING));
    }

    #[test]
    fn run_accepts_borrowed_inputs() {
        let table = ones_table();
        let mut automaton = Automaton::new(&table, &bit, ACCEPTING).unwrap();
        let inputs = vec!['1', '1', '1'];

        assert_eq!(automaton.run(&inputs), Ok(ACCEPTING));
        assert_eq!(automaton.run(inputs), Ok(ACCEPTING));
    }

    #[test]
    fn run_traced_records_each_step() {
        let table = ones_table();
        let mut automaton = Automaton::new(&table, &bit, ACCEPTING).unwrap();

        let trace = automaton.run_traced("110".chars()).unwrap();
        assert_eq!(trace.len(), 3);
        assert_eq!(trace.start(), ACCEPTING);
        assert_eq!(trace.final_state(), REJECTING);
        assert_eq!(trace.trapped_at(), Some(2));
        assert_eq!(
            trace.steps()[2],
            StepRecord {
                from: ACCEPTING,
                symbol: ZERO,
                to: REJECTING,
            }
        );
        assert_eq!(automaton.query_state(), REJECTING);
    }

    #[test]
    fn acceptance_is_interpreted_by_caller() {
        let table = ones_table();
        let mut automaton = Automaton::new(&table, &bit, ACCEPTING).unwrap();
        let acceptance = Acceptance::new([ACCEPTING]);

        assert!(automaton.is_accepting(&acceptance));
        automaton.step(&'0').unwrap();
        assert!(!automaton.is_accepting(&acceptance));
    }

    #[test]
    fn record_inputs_work_through_trait_objects() {
        struct Reading {
            value: i32,
        }

        let table = TableBuilder::new(Dimensions::new(3, 2))
            .on(StateId::new(1), Symbol::new(1), StateId::new(1))
            .on(StateId::new(1), Symbol::new(2), StateId::new(2))
            .on(StateId::new(2), Symbol::new(1), StateId::new(1))
            .on(StateId::new(2), Symbol::new(2), StateId::new(2))
            .build()
            .unwrap();
        let sign = |r: &Reading| Symbol::new(if r.value < 0 { 2 } else { 1 });
        let mapper: &dyn SymbolMapper<Reading> = &sign;

        let mut automaton = Automaton::new(&table, mapper, StateId::new(1)).unwrap();
        let readings = [Reading { value: 3 }, Reading { value: -1 }];

        assert_eq!(automaton.run(&readings), Ok(StateId::new(2)));
    }

    #[test]
    fn clones_step_independently() {
        let table = ones_table();
        let mut first = Automaton::new(&table, &bit, ACCEPTING).unwrap();
        let mut second = first.clone();

        first.step(&'0').unwrap();
        assert_eq!(first.query_state(), REJECTING);
        assert_eq!(second.query_state(), ACCEPTING);
        assert_eq!(second.step(&'1'), Ok(ACCEPTING));
    }
}

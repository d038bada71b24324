//! Immutable transition tables.
//!
//! A [`TransitionTable`] is a dense `num_states x (alphabet_size + 1)`
//! matrix. Construction starts from an explicit fill with
//! [`StateId::TRAP`], so any cell an author leaves out sends the automaton
//! to the trap state. Once built the table never changes and can back any
//! number of automata, on any number of threads.

use super::error::AutomatonError;
use super::state::{Label, StateId};
use super::symbol::Symbol;
use crate::builder::config::TableDefinition;
use serde::{Deserialize, Serialize};

/// Shape of a transition table.
///
/// `alphabet_size` counts the recognized symbols. The reserved invalid
/// symbol adds one more column, see [`Dimensions::symbol_count`].
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub struct Dimensions {
    pub num_states: usize,
    pub alphabet_size: usize,
}

impl Dimensions {
    pub const fn new(num_states: usize, alphabet_size: usize) -> Self {
        Self {
            num_states,
            alphabet_size,
        }
    }

    /// Dimensions spanned by a state label enum and a symbol label enum.
    ///
    /// The symbol enum's first variant is the invalid symbol, so it does not
    /// count towards the alphabet size.
    pub fn of<S: Label, Y: Label>() -> Self {
        Self::new(S::count(), Y::count().saturating_sub(1))
    }

    /// Number of columns: every recognized symbol plus [`Symbol::INVALID`].
    ///
    /// Saturates at `usize::MAX`; [`Dimensions::checked_cell_count`] tells
    /// whether a table of this shape can exist at all.
    pub const fn symbol_count(&self) -> usize {
        self.alphabet_size.saturating_add(1)
    }

    pub const fn cell_count(&self) -> usize {
        self.num_states.saturating_mul(self.symbol_count())
    }

    /// Number of cells, or `None` if it does not fit in a `usize`.
    pub const fn checked_cell_count(&self) -> Option<usize> {
        match self.alphabet_size.checked_add(1) {
            Some(columns) => self.num_states.checked_mul(columns),
            None => None,
        }
    }

    pub const fn contains_state(&self, state: StateId) -> bool {
        state.index() < self.num_states
    }

    pub const fn contains_symbol(&self, symbol: Symbol) -> bool {
        symbol.index() < self.symbol_count()
    }

    /// Check a state against the bounds.
    pub fn check_state(&self, state: StateId) -> Result<StateId, AutomatonError> {
        if self.contains_state(state) {
            Ok(state)
        } else {
            Err(AutomatonError::StateOutOfRange {
                state,
                num_states: self.num_states,
            })
        }
    }

    /// Check a symbol against the bounds.
    pub fn check_symbol(&self, symbol: Symbol) -> Result<Symbol, AutomatonError> {
        if self.contains_symbol(symbol) {
            Ok(symbol)
        } else {
            Err(AutomatonError::SymbolOutOfRange {
                symbol,
                symbol_count: self.symbol_count(),
            })
        }
    }
}

/// One authored cell: on `symbol`, move from `from` to `to`.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub struct Transition {
    pub from: StateId,
    pub symbol: Symbol,
    pub to: StateId,
}

impl Transition {
    pub fn new(
        from: impl Into<StateId>,
        symbol: impl Into<Symbol>,
        to: impl Into<StateId>,
    ) -> Self {
        Self {
            from: from.into(),
            symbol: symbol.into(),
            to: to.into(),
        }
    }
}

/// Total function `(state, symbol) -> state`.
///
/// Tables are produced by [`crate::builder::TableBuilder`] or deserialized
/// from a [`TableDefinition`]; both paths audit the authored cells, so a
/// built table always has in-range targets and an absorbing trap row.
///
/// # Example
///
/// ```rust
/// use stately::builder::TableBuilder;
/// use stately::core::{Dimensions, StateId, Symbol};
///
/// let table = TableBuilder::new(Dimensions::new(2, 2))
///     .on(StateId::new(1), Symbol::new(2), StateId::new(1))
///     .build()
///     .unwrap();
///
/// assert_eq!(table.next(StateId::new(1), Symbol::new(2)), Ok(StateId::new(1)));
/// // Never authored, so it falls through to trap.
/// assert_eq!(table.next(StateId::new(1), Symbol::new(1)), Ok(StateId::TRAP));
/// assert!(table.next(StateId::new(2), Symbol::new(1)).is_err());
/// ```
#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
#[serde(try_from = "TableDefinition", into = "TableDefinition")]
pub struct TransitionTable {
    dimensions: Dimensions,
    cells: Vec<StateId>,
}

impl TransitionTable {
    /// A table whose every cell is [`StateId::TRAP`].
    ///
    /// # Panics
    ///
    /// Panics if the cells cannot be allocated. Use
    /// [`TransitionTable::try_new`] for dimensions from untrusted input.
    pub fn new(dimensions: Dimensions) -> Self {
        Self {
            dimensions,
            cells: vec![StateId::TRAP; dimensions.cell_count()],
        }
    }

    /// Like [`TransitionTable::new`], but `None` if the cell count
    /// overflows or the allocation fails.
    pub fn try_new(dimensions: Dimensions) -> Option<Self> {
        let cell_count = dimensions.checked_cell_count()?;
        let mut cells = Vec::new();
        cells.try_reserve_exact(cell_count).ok()?;
        cells.resize(cell_count, StateId::TRAP);
        Some(Self { dimensions, cells })
    }

    pub fn dimensions(&self) -> Dimensions {
        self.dimensions
    }

    pub fn num_states(&self) -> usize {
        self.dimensions.num_states
    }

    pub fn alphabet_size(&self) -> usize {
        self.dimensions.alphabet_size
    }

    pub fn symbol_count(&self) -> usize {
        self.dimensions.symbol_count()
    }

    /// Look up the successor of `state` on `symbol`.
    pub fn next(&self, state: StateId, symbol: Symbol) -> Result<StateId, AutomatonError> {
        let row = self.row(state)?;
        let symbol = self.dimensions.check_symbol(symbol)?;
        Ok(row[symbol.index()])
    }

    /// All successors of `state`, indexed by symbol id.
    pub fn row(&self, state: StateId) -> Result<&[StateId], AutomatonError> {
        let state = self.dimensions.check_state(state)?;
        let width = self.dimensions.symbol_count();
        let start = state.index() * width;
        Ok(&self.cells[start..start + width])
    }

    /// Rows in state order.
    pub fn rows(&self) -> impl Iterator<Item = (StateId, &[StateId])> + '_ {
        self.cells
            .chunks(self.dimensions.symbol_count())
            .enumerate()
            .map(|(i, row)| (StateId::new(i), row))
    }

    /// Every cell that does not lead to trap, in row-major order.
    pub fn authored(&self) -> impl Iterator<Item = Transition> + '_ {
        self.rows().flat_map(|(from, row)| {
            row.iter()
                .enumerate()
                .filter(|(_, to)| !to.is_trap())
                .map(move |(symbol, &to)| Transition {
                    from,
                    symbol: Symbol::new(symbol),
                    to,
                })
        })
    }

    pub(crate) fn set(&mut self, transition: Transition) -> Result<(), AutomatonError> {
        let from = self.dimensions.check_state(transition.from)?;
        let symbol = self.dimensions.check_symbol(transition.symbol)?;
        let to = self.dimensions.check_state(transition.to)?;
        let index = from.index() * self.dimensions.symbol_count() + symbol.index();
        self.cells[index] = to;
        Ok(())
    }
}

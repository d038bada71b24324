//! Running parity over a stream of three-field records.
//!
//! Each [`Tally`] is classified by whether `a + b + c` is even or odd, and
//! the machine tracks the parity of the number of odd records seen so far.
//! It is a Moore machine: the state itself is the output.

use crate::builder::TableBuilder;
use crate::core::{Acceptance, AutomatonError, Label, Symbol, SymbolMapper, TransitionTable};
use crate::engine::Automaton;
use serde::{Deserialize, Serialize};
use std::sync::OnceLock;

crate::states! {
    pub enum ParityState {
        Trap,
        /// Nothing seen yet; behaves like `Even`.
        Start,
        Even,
        Odd,
    }
}

crate::symbols! {
    pub enum ParitySymbol {
        Invalid,
        Even,
        Odd,
    }
}

/// One input record.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tally {
    pub a: i32,
    pub b: i32,
    pub c: i32,
}

impl Tally {
    pub const fn new(a: i32, b: i32, c: i32) -> Self {
        Self { a, b, c }
    }

    /// Whether `a + b + c` is odd. Computed per field, so it cannot overflow.
    pub fn is_odd(&self) -> bool {
        (self.a.rem_euclid(2) + self.b.rem_euclid(2) + self.c.rem_euclid(2)) % 2 == 1
    }
}

impl From<(i32, i32, i32)> for Tally {
    fn from((a, b, c): (i32, i32, i32)) -> Self {
        Self::new(a, b, c)
    }
}

#[derive(Clone, Copy, Debug, Default)]
pub struct ParityMapper;

impl SymbolMapper<Tally> for ParityMapper {
    fn map(&self, input: &Tally) -> Symbol {
        if input.is_odd() {
            ParitySymbol::Odd.into()
        } else {
            ParitySymbol::Even.into()
        }
    }
}

pub const START: ParityState = ParityState::Start;

/// The shared parity table.
pub fn table() -> &'static TransitionTable {
    static TABLE: OnceLock<TransitionTable> = OnceLock::new();
    TABLE.get_or_init(|| {
        use ParityState as S;
        use ParitySymbol as Y;

        TableBuilder::for_labels::<ParityState, ParitySymbol>()
            .on(S::Start, Y::Even, S::Even)
            .on(S::Start, Y::Odd, S::Odd)
            .on(S::Even, Y::Even, S::Even)
            .on(S::Even, Y::Odd, S::Odd)
            .on(S::Odd, Y::Even, S::Odd)
            .on(S::Odd, Y::Odd, S::Even)
            .build()
            .expect("parity table should always build")
    })
}

/// Accepts when an even number of odd records has been seen.
pub fn acceptance() -> Acceptance {
    Acceptance::new([ParityState::Start, ParityState::Even])
}

/// A fresh tracker in its start state.
pub fn automaton() -> Automaton<'static, Tally, ParityMapper> {
    Automaton::new(table(), &ParityMapper, START).expect("start state is in the table")
}

/// Parity after each record of `records`, in order.
pub fn running_parity<I>(records: I) -> Result<Vec<ParityState>, AutomatonError>
where
    I: IntoIterator<Item = Tally>,
{
    let mut automaton = automaton();
    records
        .into_iter()
        .map(|tally| {
            let state = automaton.step(&tally)?;
            ParityState::try_from(state).map_err(|state| AutomatonError::StateOutOfRange {
                state,
                num_states: ParityState::count(),
            })
        })
        .collect()
}

//! Acceptor for the empty string or any run of `1`s.
//!
//! Any `0`, or any character other than `0` and `1`, rejects the input
//! for good.

use crate::builder::TableBuilder;
use crate::core::{Acceptance, Symbol, SymbolMapper, TransitionTable};
use crate::engine::Automaton;
use std::sync::OnceLock;

crate::states! {
    /// States of the binary acceptor. `Rejecting` doubles as trap.
    pub enum BinaryState {
        Rejecting,
        Accepting,
    }
}

crate::symbols! {
    pub enum BinarySymbol {
        Invalid,
        Zero,
        One,
    }
}

/// Maps `'0'` and `'1'`; everything else is invalid.
#[derive(Clone, Copy, Debug, Default)]
pub struct BinaryMapper;

impl SymbolMapper<char> for BinaryMapper {
    fn map(&self, input: &char) -> Symbol {
        match input {
            '0' => BinarySymbol::Zero.into(),
            '1' => BinarySymbol::One.into(),
            _ => BinarySymbol::Invalid.into(),
        }
    }
}

pub const START: BinaryState = BinaryState::Accepting;

/// The shared acceptor table.
pub fn table() -> &'static TransitionTable {
    static TABLE: OnceLock<TransitionTable> = OnceLock::new();
    TABLE.get_or_init(|| {
        use BinaryState::*;
        use BinarySymbol::*;

        TableBuilder::for_labels::<BinaryState, BinarySymbol>()
            .on(Accepting, One, Accepting)
            .on(Accepting, Zero, Rejecting)
            .build()
            .expect("binary acceptor table should always build")
    })
}

pub fn acceptance() -> Acceptance {
    Acceptance::new([BinaryState::Accepting])
}

/// A fresh acceptor in its start state.
pub fn automaton() -> Automaton<'static, char, BinaryMapper> {
    Automaton::new(table(), &BinaryMapper, START).expect("start state is in the table")
}

/// Whether `input` is empty or all `1`s.
pub fn is_accepted(input: &str) -> bool {
    let mut automaton = automaton();
    automaton.run(input.chars()).is_ok() && automaton.is_accepting(&acceptance())
}

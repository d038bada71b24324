//! Decimal number literal checker.
//!
//! Accepts an optional sign, digits with at most one decimal point (at
//! least one digit on either side of it), and an optional exponent
//! `e`/`E` followed by an optionally signed integer. `3.`, `-.9` and
//! `-123.456e789` are numbers; `.`, `e3` and `3e` are not.

use crate::builder::TableBuilder;
use crate::core::{Acceptance, Symbol, SymbolMapper, TransitionTable};
use crate::engine::Automaton;
use std::sync::OnceLock;

crate::states! {
    pub enum NumberState {
        Trap,
        Start,
        Sign,
        Integer,
        /// A point read before any digit.
        LeadingPoint,
        Fraction,
        Exponent,
        ExponentSign,
        ExponentDigits,
    }
}

crate::symbols! {
    pub enum NumberSymbol {
        Invalid,
        Digit,
        Exponent,
        Sign,
        Period,
    }
}

#[derive(Clone, Copy, Debug, Default)]
pub struct NumberMapper;

impl SymbolMapper<char> for NumberMapper {
    fn map(&self, input: &char) -> Symbol {
        let symbol = match input {
            '0'..='9' => NumberSymbol::Digit,
            'e' | 'E' => NumberSymbol::Exponent,
            '+' | '-' => NumberSymbol::Sign,
            '.' => NumberSymbol::Period,
            _ => NumberSymbol::Invalid,
        };
        symbol.into()
    }
}

pub const START: NumberState = NumberState::Start;

/// The shared number table.
pub fn table() -> &'static TransitionTable {
    static TABLE: OnceLock<TransitionTable> = OnceLock::new();
    TABLE.get_or_init(|| {
        use NumberState as S;
        use NumberSymbol as Y;

        TableBuilder::for_labels::<NumberState, NumberSymbol>()
            .on(S::Start, Y::Sign, S::Sign)
            .on(S::Start, Y::Digit, S::Integer)
            .on(S::Start, Y::Period, S::LeadingPoint)
            .on(S::Sign, Y::Digit, S::Integer)
            .on(S::Sign, Y::Period, S::LeadingPoint)
            .on(S::Integer, Y::Digit, S::Integer)
            .on(S::Integer, Y::Period, S::Fraction)
            .on(S::Integer, Y::Exponent, S::Exponent)
            .on(S::LeadingPoint, Y::Digit, S::Fraction)
            .on(S::Fraction, Y::Digit, S::Fraction)
            .on(S::Fraction, Y::Exponent, S::Exponent)
            .on(S::Exponent, Y::Sign, S::ExponentSign)
            .on(S::Exponent, Y::Digit, S::ExponentDigits)
            .on(S::ExponentSign, Y::Digit, S::ExponentDigits)
            .on(S::ExponentDigits, Y::Digit, S::ExponentDigits)
            .build()
            .expect("number table should always build")
    })
}

pub fn acceptance() -> Acceptance {
    Acceptance::new([
        NumberState::Integer,
        NumberState::Fraction,
        NumberState::ExponentDigits,
    ])
}

/// A fresh checker in its start state.
pub fn automaton() -> Automaton<'static, char, NumberMapper> {
    Automaton::new(table(), &NumberMapper, START).expect("start state is in the table")
}

/// Whether `input` is a complete number literal.
pub fn is_number(input: &str) -> bool {
    let mut automaton = automaton();
    automaton.run(input.chars()).is_ok() && automaton.is_accepting(&acceptance())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::StateId;

    fn final_state(input: &str) -> NumberState {
        let state = automaton().run(input.chars()).unwrap();
        NumberState::try_from(state).unwrap()
    }

    #[test]
    fn final_states_match_reference_inputs() {
        assert_eq!(final_state("1234567"), NumberState::Integer);
        assert_eq!(final_state("EeEeEeEeE"), NumberState::Trap);
        assert_eq!(final_state("45345e4"), NumberState::ExponentDigits);
        assert_eq!(final_state("+3."), NumberState::Fraction);
        assert_eq!(final_state("3e+"), NumberState::ExponentSign);
        assert_eq!(final_state("0089"), NumberState::Integer);
        assert_eq!(final_state("-0.1"), NumberState::Fraction);
        assert_eq!(final_state("+3.14"), NumberState::Fraction);
        assert_eq!(final_state("-.9"), NumberState::Fraction);
        assert_eq!(final_state("-90E3"), NumberState::ExponentDigits);
        assert_eq!(final_state("-123.456e789"), NumberState::ExponentDigits);
    }

    #[test]
    fn accepts_complete_literals() {
        for input in ["2", "0089", "-0.1", "+3.14", "4.", "-.9", "2e10", "-90E3", "53.5e93"] {
            assert!(is_number(input), "{input} should be a number");
        }
    }

    #[test]
    fn rejects_incomplete_or_malformed_literals() {
        for input in ["", "abc", "1a", "1e", "e3", "99e2.5", "--6", "-+3", "95a54e53", "."] {
            assert!(!is_number(input), "{input} should not be a number");
        }
    }

    #[test]
    fn second_point_traps() {
        let mut automaton = automaton();
        automaton.run("1.2".chars()).unwrap();
        assert_eq!(automaton.step(&'.'), Ok(StateId::TRAP));
    }

    #[test]
    fn state_ids_follow_declaration_order() {
        assert_eq!(StateId::from(NumberState::Start), StateId::new(1));
        assert_eq!(StateId::from(NumberState::ExponentDigits), StateId::new(8));
        assert_eq!(table().num_states(), 9);
        assert_eq!(table().alphabet_size(), 4);
    }
}

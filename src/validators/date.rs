//! `YYYY-MM-DD` date format checker.
//!
//! Accepts `([12]\d{3}-(0[1-9]|1[0-2])-(0[1-9]|[12]\d|3[01]))`. Only the
//! shape is checked: days are not validated against the month, so
//! `1999-02-29` and `2000-04-31` pass.

use crate::builder::TableBuilder;
use crate::core::{Acceptance, Symbol, SymbolMapper, TransitionTable};
use crate::engine::Automaton;
use std::sync::OnceLock;

crate::states! {
    pub enum DateState {
        Trap,
        // [12]
        FirstDigit,
        // \d{3}
        SecondDigit,
        ThirdDigit,
        FourthDigit,
        FirstHyphen,
        // (0[1-9]|1[0-2])
        FirstDigitOfMonth,
        SecondDigitJanToSep,
        SecondDigitOctToDec,
        SecondHyphen,
        // (0[1-9]|[12]\d|3[01])
        FirstDigitOfDay,
        SecondDigitZero,
        SecondDigitOneTwo,
        SecondDigitThree,
        Accept,
    }
}

crate::symbols! {
    pub enum DateSymbol {
        Invalid,
        D0,
        D1,
        D2,
        D3,
        D4,
        D5,
        D6,
        D7,
        D8,
        D9,
        Hyphen,
    }
}

impl DateSymbol {
    pub const DIGITS: [DateSymbol; 10] = [
        Self::D0,
        Self::D1,
        Self::D2,
        Self::D3,
        Self::D4,
        Self::D5,
        Self::D6,
        Self::D7,
        Self::D8,
        Self::D9,
    ];
}

/// Maps ASCII digits and `-`; everything else is invalid.
#[derive(Clone, Copy, Debug, Default)]
pub struct DateMapper;

impl SymbolMapper<char> for DateMapper {
    fn map(&self, input: &char) -> Symbol {
        match input {
            '-' => DateSymbol::Hyphen.into(),
            c => c
                .to_digit(10)
                .map(|d| Symbol::from(DateSymbol::DIGITS[d as usize]))
                .unwrap_or(Symbol::INVALID),
        }
    }
}

pub const START: DateState = DateState::FirstDigit;

/// The shared date table.
pub fn table() -> &'static TransitionTable {
    static TABLE: OnceLock<TransitionTable> = OnceLock::new();
    TABLE.get_or_init(|| {
        use DateState::*;
        use DateSymbol::*;

        let digits = DateSymbol::DIGITS;

        TableBuilder::for_labels::<DateState, DateSymbol>()
            // Year
            .on_each(FirstDigit, [D1, D2], SecondDigit)
            .on_each(SecondDigit, digits, ThirdDigit)
            .on_each(ThirdDigit, digits, FourthDigit)
            .on_each(FourthDigit, digits, FirstHyphen)
            .on(FirstHyphen, Hyphen, FirstDigitOfMonth)
            // Month
            .on(FirstDigitOfMonth, D0, SecondDigitJanToSep)
            .on(FirstDigitOfMonth, D1, SecondDigitOctToDec)
            .on_each(SecondDigitJanToSep, [D1, D2, D3, D4, D5, D6, D7, D8, D9], SecondHyphen)
            .on_each(SecondDigitOctToDec, [D0, D1, D2], SecondHyphen)
            .on(SecondHyphen, Hyphen, FirstDigitOfDay)
            // Day
            .on(FirstDigitOfDay, D0, SecondDigitZero)
            .on_each(FirstDigitOfDay, [D1, D2], SecondDigitOneTwo)
            .on(FirstDigitOfDay, D3, SecondDigitThree)
            .on_each(SecondDigitZero, [D1, D2, D3, D4, D5, D6, D7, D8, D9], Accept)
            .on_each(SecondDigitOneTwo, digits, Accept)
            .on_each(SecondDigitThree, [D0, D1], Accept)
            .build()
            .expect("date table should always build")
    })
}

pub fn acceptance() -> Acceptance {
    Acceptance::new([DateState::Accept])
}

/// A fresh checker in its start state.
pub fn automaton() -> Automaton<'static, char, DateMapper> {
    Automaton::new(table(), &DateMapper, START).expect("start state is in the table")
}

/// Whether `input` is a well-formed `YYYY-MM-DD` date.
pub fn is_valid_date(input: &str) -> bool {
    let mut automaton = automaton();
    automaton.run(input.chars()).is_ok() && automaton.is_accepting(&acceptance())
}

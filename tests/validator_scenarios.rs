//! End-to-end scenarios for the built-in validator configurations.

use stately::core::{StateId, Symbol};
use stately::validators::date::DateState;
use stately::validators::number::NumberState;
use stately::validators::parity::{ParityState, Tally};
use stately::validators::{binary, date, number, parity};
use stately::{load_table, Automaton, Checkpoint};

#[test]
fn date_month_thirteen_traps_at_the_month_digit() {
    let mut automaton = date::automaton();
    let trace = automaton.run_traced("1999-13-01".chars()).unwrap();

    assert_eq!(trace.trapped_at(), Some(6));
    assert_eq!(trace.final_state(), StateId::TRAP);
    assert!(automaton.is_trapped());
}

#[test]
fn date_checker_walks_the_named_states() {
    let mut automaton = date::automaton();
    let trace = automaton.run_traced("2024-10-19".chars()).unwrap();

    let path: Vec<DateState> = trace
        .path()
        .into_iter()
        .map(|s| DateState::try_from(s).unwrap())
        .collect();

    assert_eq!(
        path,
        vec![
            DateState::FirstDigit,
            DateState::SecondDigit,
            DateState::ThirdDigit,
            DateState::FourthDigit,
            DateState::FirstHyphen,
            DateState::FirstDigitOfMonth,
            DateState::SecondDigitOctToDec,
            DateState::SecondHyphen,
            DateState::FirstDigitOfDay,
            DateState::SecondDigitOneTwo,
            DateState::Accept,
        ]
    );
    assert_eq!(trace.trapped_at(), None);
}

#[test]
fn date_checker_reference_inputs() {
    for valid in ["1999-01-01", "1999-09-09", "1999-10-10", "1999-11-21", "1999-12-31"] {
        assert!(date::is_valid_date(valid), "{valid} should be accepted");
    }
    for invalid in ["1999-0-", "0999-01-01", "1999-01-32", "19990101", "1999_01_01", ""] {
        assert!(!date::is_valid_date(invalid), "{invalid} should be rejected");
    }
}

#[test]
fn number_checker_reference_inputs() {
    let cases = [
        ("1234567", NumberState::Integer),
        ("EeEeEeEeE", NumberState::Trap),
        ("45345e4", NumberState::ExponentDigits),
        ("+3.", NumberState::Fraction),
        ("3e+", NumberState::ExponentSign),
        ("0089", NumberState::Integer),
        ("-0.1", NumberState::Fraction),
        ("+3.14", NumberState::Fraction),
        ("-.9", NumberState::Fraction),
        ("-90E3", NumberState::ExponentDigits),
        ("-123.456e789", NumberState::ExponentDigits),
    ];

    for (input, expected) in cases {
        let state = number::automaton().run(input.chars()).unwrap();
        assert_eq!(NumberState::try_from(state), Ok(expected), "input {input}");
    }
}

#[test]
fn binary_acceptor_reference_inputs() {
    let cases = [
        ("111111111", true),
        ("         ", false),
        ("111111110", false),
        ("000000000", false),
        ("", true),
    ];

    for (input, accepted) in cases {
        assert_eq!(binary::is_accepted(input), accepted, "input {input:?}");
    }
}

#[test]
fn parity_tracker_reports_running_parity() {
    use ParityState::{Even, Odd};

    let records = [(1, 2, 2), (1, 9, 7), (1, 9, 8), (1, 2, 9), (1, 2, 8)];
    let states = parity::running_parity(records.map(Tally::from)).unwrap();

    assert_eq!(states, vec![Odd, Even, Even, Even, Odd]);
}

#[test]
fn set_state_allows_replay_from_the_middle() {
    let mut automaton = number::automaton();
    automaton.set_state(NumberState::Fraction).unwrap();

    assert_eq!(
        automaton.run("5e-3".chars()),
        Ok(StateId::from(NumberState::ExponentDigits))
    );
    assert!(automaton.is_accepting(&number::acceptance()));
}

#[test]
fn set_state_out_of_range_keeps_current_state() {
    let mut automaton = binary::automaton();
    automaton.step(&'1').unwrap();

    assert!(automaton.set_state(StateId::new(2)).is_err());
    assert_eq!(automaton.query_state(), StateId::from(binary::BinaryState::Accepting));
}

#[test]
fn one_table_drives_many_threads() {
    let inputs = ["1999-01-01", "1999-13-01", "2000-02-29", "2000-2-29"];

    let results: Vec<bool> = std::thread::scope(|scope| {
        let handles: Vec<_> = inputs
            .iter()
            .map(|input| scope.spawn(move || date::is_valid_date(input)))
            .collect();
        handles.into_iter().map(|h| h.join().unwrap()).collect()
    });

    assert_eq!(results, vec![true, false, true, false]);
}

#[test]
fn automata_on_one_table_are_independent() {
    let mut left = binary::automaton();
    let mut right = binary::automaton();

    left.run("110".chars()).unwrap();
    right.run("11".chars()).unwrap();

    assert!(left.is_trapped());
    assert!(right.is_accepting(&binary::acceptance()));
}

#[test]
fn checkpoint_survives_a_json_roundtrip() {
    let mut automaton = date::automaton();
    automaton.run("2024-1".chars()).unwrap();

    let json = automaton.checkpoint().to_json().unwrap();
    let checkpoint = Checkpoint::from_json(&json).unwrap();

    let mut resumed =
        Automaton::<char, _>::resume(date::table(), &date::DateMapper, &checkpoint).unwrap();
    resumed.run("0-19".chars()).unwrap();
    assert!(resumed.is_accepting(&date::acceptance()));
}

#[test]
fn table_loaded_from_json_drives_an_automaton() {
    let table = load_table(
        r#"{
            "num_states": 2,
            "alphabet_size": 2,
            "transitions": [
                { "from": 1, "symbol": 2, "to": 1 }
            ]
        }"#,
    )
    .unwrap();

    let bit = |c: &char| match c {
        '0' => Symbol::new(1),
        '1' => Symbol::new(2),
        _ => Symbol::INVALID,
    };

    let mut automaton = Automaton::new(&table, &bit, StateId::new(1)).unwrap();
    assert_eq!(automaton.run("111".chars()), Ok(StateId::new(1)));
    assert_eq!(automaton.run("0".chars()), Ok(StateId::TRAP));
}

//! Built-in Validators
//!
//! This example runs the ready-made configurations over a few inputs.
//!
//! Key concepts:
//! - One shared table per configuration, built on first use
//! - Mappers turning characters or records into symbols
//! - Traces showing where an input fell into trap
//!
//! Run with: cargo run --example validators

use stately::validators::parity::Tally;
use stately::validators::{binary, date, number, parity};

fn main() {
    println!("=== Built-in Validators ===\n");

    println!("Dates (YYYY-MM-DD):");
    for input in ["1999-01-01", "1999-13-01", "2000-02-29", "2000-1-01"] {
        let trace = date::automaton()
            .run_traced(input.chars())
            .expect("date mapper only emits known symbols");
        match trace.trapped_at() {
            Some(index) => println!("  {input:<12} rejected at character {index}"),
            None if date::is_valid_date(input) => println!("  {input:<12} accepted"),
            None => println!("  {input:<12} incomplete"),
        }
    }

    println!("\nNumbers:");
    for input in ["-123.456e789", "+3.", "3e+", "EeE"] {
        println!("  {input:<14} {}", number::is_number(input));
    }

    println!("\nBinary (empty or all ones):");
    for input in ["", "1111", "1101"] {
        println!("  {input:?} {}", binary::is_accepted(input));
    }

    println!("\nRunning parity:");
    let records = [(1, 2, 3), (1, 9, 7), (1, 9, 8), (2, 8, 1)].map(Tally::from);
    let states = parity::running_parity(records).expect("parity mapper only emits known symbols");
    for (record, state) in records.iter().zip(states) {
        println!("  {:?} -> {:?}", record, state);
    }

    println!("\n=== Example Complete ===");
}

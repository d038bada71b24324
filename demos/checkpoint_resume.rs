//! Checkpoint and Resume
//!
//! This example pauses an automaton halfway through its input and picks it
//! up again from a serialized checkpoint.
//!
//! Key concepts:
//! - Checkpoints record the table shape, not the table
//! - JSON for readability, bincode for compactness
//! - Resuming against a table of another shape is refused
//!
//! Run with: cargo run --example checkpoint_resume

use stately::validators::{binary, date};
use stately::{Automaton, Checkpoint};

fn main() {
    println!("=== Checkpoint and Resume ===\n");

    let (first, second) = "2024-10-19".split_at(5);

    let mut automaton = date::automaton();
    automaton
        .run(first.chars())
        .expect("date mapper only emits known symbols");
    println!("After {first:?}: state {}", automaton.query_state());

    let checkpoint = automaton.checkpoint();
    let json = checkpoint.to_json().expect("checkpoint serializes");
    let bytes = checkpoint.to_bytes().expect("checkpoint serializes");
    println!("Checkpoint JSON ({} bytes): {json}", json.len());
    println!("Checkpoint binary: {} bytes\n", bytes.len());

    let restored = Checkpoint::from_bytes(&bytes).expect("checkpoint deserializes");
    let mut resumed = Automaton::<char, _>::resume(date::table(), &date::DateMapper, &restored)
        .expect("same table as the checkpoint");
    resumed
        .run(second.chars())
        .expect("date mapper only emits known symbols");
    println!(
        "After {second:?}: state {}, accepted: {}",
        resumed.query_state(),
        resumed.is_accepting(&date::acceptance())
    );

    println!("\nResuming against the binary acceptor table:");
    match Automaton::<char, _>::resume(binary::table(), &binary::BinaryMapper, &restored) {
        Ok(_) => println!("  unexpectedly resumed"),
        Err(e) => println!("  refused: {e}"),
    }

    println!("\n=== Example Complete ===");
}

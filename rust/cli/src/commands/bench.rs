//! Bench command handler for hand evaluation performance.
//!
//! This module provides the `bench` command which performs a quick benchmark
//! of the hand evaluator by classifying 1000 5-card deals from a seeded deck
//! and reporting the execution time.

use crate::error::CliError;
use sharpshot_engine::deck::Deck;
use sharpshot_engine::hand::{evaluate_hand, HAND_SIZE};
use std::io::Write;

/// Handle the bench command.
///
/// Evaluates 1000 5-card deals from a deterministically seeded deck
/// (reshuffling when it runs low) and reports iterations plus elapsed time.
///
/// # Arguments
///
/// * `out` - Output stream for benchmark results
///
/// # Returns
///
/// Returns `Ok(())` on success, or `CliError` on I/O errors.
pub fn handle_bench_command(out: &mut dyn Write) -> Result<(), CliError> {
    let start = std::time::Instant::now();
    let mut cnt = 0u64;
    let mut deck = Deck::with_seed(1);
    deck.shuffle();
    for _ in 0..1000 {
        if deck.remaining() < HAND_SIZE {
            deck.reset();
            deck.shuffle();
        }
        let hand = deck.deal(HAND_SIZE);
        // Result intentionally unused - benchmark only measures performance
        let _ = evaluate_hand(&hand);
        cnt += 1;
    }
    let dur = start.elapsed();
    writeln!(out, "Benchmark: {} evals in {:?}", cnt, dur)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bench_command_succeeds() {
        let mut out = Vec::new();
        let result = handle_bench_command(&mut out);

        assert!(result.is_ok(), "Bench command should succeed");
    }

    #[test]
    fn test_bench_command_reports_1000_iterations() {
        let mut out = Vec::new();
        handle_bench_command(&mut out).unwrap();

        let output = String::from_utf8(out).unwrap();
        assert!(
            output.contains("1000 evals"),
            "Output should report 1000 evaluations"
        );
    }

    #[test]
    fn test_bench_command_includes_timing() {
        let mut out = Vec::new();
        handle_bench_command(&mut out).unwrap();

        let output = String::from_utf8(out).unwrap();
        assert!(
            output.contains("ms") || output.contains("µs") || output.contains("ns") || output.contains("s"),
            "Output should include timing units"
        );
    }
}

//! Command-line argument types for the Sharpshot CLI.
//!
//! Defines the clap derive structures parsed by [`crate::run`]. Keeping the
//! argument surface in one module makes the subcommand set easy to audit and
//! test.

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "sharpshot",
    version,
    about = "Sharpshot card-matching rules engine CLI"
)]
pub struct SharpshotCli {
    #[command(subcommand)]
    pub cmd: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Show the visible window of a shuffled deck
    Deal {
        /// RNG seed for deterministic shuffling
        #[arg(long)]
        seed: Option<u64>,
        /// Build the pair-friendly deck for this bonus round instead
        #[arg(long)]
        bonus_round: Option<u32>,
    },
    /// Evaluate a card selection (e.g. AH KD 10S 4C 2H)
    Eval {
        /// Card tokens; fewer than five shows the mid-selection preview
        #[arg(required = true)]
        cards: Vec<String>,
    },
    /// Synthesize a hand of a named category from a shuffled deck
    Synth {
        /// Category name ("Full House", "straight-flush", ...)
        #[arg(long)]
        category: String,
        /// RNG seed for a reproducible pick
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Simulate complete runs and record them as JSONL
    Sim {
        /// Game mode: classic, blitz, or sharpshooter
        #[arg(long)]
        mode: String,
        /// Number of runs to simulate
        #[arg(long, default_value_t = 1)]
        runs: u64,
        /// Simulated wall-clock budget per run, in seconds
        #[arg(long, default_value_t = 300)]
        seconds: u32,
        /// Base RNG seed (each run uses seed + run_index)
        #[arg(long)]
        seed: Option<u64>,
        /// Path for JSONL run records
        #[arg(long)]
        output: Option<String>,
    },
    /// Aggregate statistics from run history JSONL files
    Stats {
        /// Path to a .jsonl or .jsonl.zst run history
        #[arg(long)]
        input: String,
    },
    /// Print a ChaCha20 sample for determinism checks
    Rng {
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Benchmark hand evaluation
    Bench,
}

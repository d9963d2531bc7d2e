//! # Sharpshot CLI Library
//!
//! This library provides the command-line interface for the Sharpshot rules
//! engine. It exposes subcommands for dealing, evaluating, synthesizing,
//! simulating, and analyzing runs.
//!
//! ## Main Entry Point
//!
//! The primary entry point is the [`run`] function, which parses
//! command-line arguments and executes the appropriate subcommand.
//!
//! ## Example Usage
//!
//! ```
//! use std::io;
//! let args = vec!["sharpshot", "eval", "10H", "JH", "QH", "KH", "AH"];
//! let code = sharpshot_cli::run(args, &mut io::stdout(), &mut io::stderr());
//! assert_eq!(code, 0);
//! ```
//!
//! ## Available Subcommands
//!
//! - `deal`: Show the visible window of a shuffled (or bonus-friendly) deck
//! - `eval`: Evaluate a card selection and print its point breakdown
//! - `synth`: Synthesize a hand of a named category from a shuffled deck
//! - `sim`: Simulate complete runs and record JSONL histories
//! - `stats`: Aggregate statistics from run history files
//! - `rng`: Verify RNG determinism
//! - `bench`: Benchmark hand evaluation performance

use clap::Parser;
use std::io::Write;

pub mod cli;
mod commands;
mod error;
pub mod exit_code;
pub mod formatters;
pub mod io_utils;
pub mod ui;
pub mod validation;

use cli::{Commands, SharpshotCli};

use commands::{
    handle_bench_command, handle_deal_command, handle_eval_command, handle_rng_command,
    handle_sim_command, handle_stats_command, handle_synth_command,
};

pub use error::CliError;

/// Main entry point for the CLI application.
///
/// Parses command-line arguments and dispatches to the appropriate
/// subcommand handler.
///
/// # Arguments
///
/// * `args` - Iterator over command-line arguments (typically `std::env::args()`)
/// * `out` - Output stream for normal output (typically `stdout`)
/// * `err` - Output stream for error messages (typically `stderr`)
///
/// # Returns
///
/// Exit code: `0` for success, `2` for errors
///
/// # Example
///
/// ```
/// use std::io;
/// let args = vec!["sharpshot", "deal", "--seed", "42"];
/// let code = sharpshot_cli::run(args, &mut io::stdout(), &mut io::stderr());
/// assert_eq!(code, 0);
/// ```
pub fn run<I, S>(args: I, out: &mut dyn Write, err: &mut dyn Write) -> i32
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    const COMMANDS: &[&str] = &["deal", "eval", "synth", "sim", "stats", "rng", "bench"];
    let argv: Vec<String> = args.into_iter().map(|s| s.as_ref().to_string()).collect();

    let parsed = SharpshotCli::try_parse_from(&argv);
    match parsed {
        Err(e) => {
            use clap::error::ErrorKind;

            // Help and version should print to stdout and exit 0
            match e.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => {
                    if write!(out, "{}", e).is_err() {
                        return exit_code::ERROR;
                    }
                    exit_code::SUCCESS
                }
                _ => {
                    if writeln!(err, "{}", e).is_err()
                        || writeln!(err, "Sharpshot CLI").is_err()
                        || writeln!(err, "Usage: sharpshot <command> [options]\n").is_err()
                        || writeln!(err, "Commands:").is_err()
                    {
                        return exit_code::ERROR;
                    }
                    for c in COMMANDS {
                        if writeln!(err, "  {}", c).is_err() {
                            return exit_code::ERROR;
                        }
                    }
                    if writeln!(err, "\nFor full help, run: sharpshot --help").is_err() {
                        return exit_code::ERROR;
                    }
                    exit_code::ERROR
                }
            }
        }
        Ok(cli) => {
            let result = match cli.cmd {
                Commands::Deal { seed, bonus_round } => {
                    handle_deal_command(seed, bonus_round, out)
                }
                Commands::Eval { cards } => handle_eval_command(&cards, out),
                Commands::Synth { category, seed } => {
                    handle_synth_command(&category, seed, out)
                }
                Commands::Sim {
                    mode,
                    runs,
                    seconds,
                    seed,
                    output,
                } => handle_sim_command(&mode, runs, seconds, seed, output, out, err),
                Commands::Stats { input } => handle_stats_command(input, out, err),
                Commands::Rng { seed } => handle_rng_command(seed, out),
                Commands::Bench => handle_bench_command(out),
            };
            match result {
                Ok(()) => exit_code::SUCCESS,
                Err(e) => {
                    if writeln!(err, "Error: {}", e).is_err() {
                        return exit_code::ERROR;
                    }
                    exit_code::ERROR
                }
            }
        }
    }
}

//! Deal command handler for deck inspection.
//!
//! This module provides the `deal` command which shuffles a fresh deck and
//! displays its visible window — the cards a player would see at the start
//! of a run. With `--bonus-round N` it builds the pair-friendly bonus deck
//! instead. The command supports optional seeding for deterministic output.

use crate::error::CliError;
use crate::formatters::format_cards;
use sharpshot_engine::deck::{Deck, VISIBLE_WINDOW};
use std::io::Write;

/// Handle the deal command.
///
/// Shuffles a deck (plain or bonus-friendly) and prints the visible window
/// plus the count of face-down cards below it.
///
/// # Arguments
///
/// * `seed` - Optional RNG seed for deterministic shuffling
/// * `bonus_round` - Build the bonus-friendly deck for this bonus round
/// * `out` - Output stream for command results
///
/// # Returns
///
/// Returns `Ok(())` on success, or `CliError` on I/O errors.
pub fn handle_deal_command(
    seed: Option<u64>,
    bonus_round: Option<u32>,
    out: &mut dyn Write,
) -> Result<(), CliError> {
    let seed = seed.unwrap_or_else(rand::random);
    let deck = match bonus_round {
        Some(n) => Deck::bonus_friendly(n, seed),
        None => {
            let mut d = Deck::with_seed(seed);
            d.shuffle();
            d
        }
    };
    let window = deck.visible(VISIBLE_WINDOW);
    writeln!(out, "Seed: {}", seed)?;
    writeln!(out, "Window: {}", format_cards(&window))?;
    writeln!(out, "Face down: {}", deck.remaining() - window.len())?;
    Ok(())
}

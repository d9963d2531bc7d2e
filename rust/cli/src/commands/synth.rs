//! Synth command handler for category-targeted hand generation.
//!
//! Demonstrates the power-up path: given a category name, locate a
//! qualifying 5-card hand inside a shuffled full deck and show that it
//! re-evaluates to the requested category.

use crate::error::CliError;
use crate::formatters::format_cards;
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;
use sharpshot_engine::cards::full_deck;
use sharpshot_engine::hand::{evaluate_hand, Category};
use sharpshot_engine::synth::generate_specific_hand;
use std::io::Write;

/// Handle the synth command.
///
/// # Arguments
///
/// * `category` - Category name ("Full House", "straight-flush", ...)
/// * `seed` - Optional RNG seed for a reproducible pick
/// * `out` - Output stream for the synthesized hand
///
/// # Returns
///
/// Returns `Ok(())` on success, `CliError::InvalidInput` for an unknown
/// category name, or `CliError::Engine` when the pool cannot satisfy it.
pub fn handle_synth_command(
    category: &str,
    seed: Option<u64>,
    out: &mut dyn Write,
) -> Result<(), CliError> {
    let category: Category = category.parse().map_err(CliError::InvalidInput)?;
    let seed = seed.unwrap_or_else(rand::random);
    let mut rng = ChaCha20Rng::seed_from_u64(seed);
    let pool = full_deck();
    match generate_specific_hand(category, &pool, &mut rng) {
        Some(hand) => {
            let hr = evaluate_hand(&hand);
            writeln!(out, "Seed: {}", seed)?;
            writeln!(out, "Hand: {}", format_cards(&hr.cards))?;
            writeln!(out, "Category: {}  Total: {}", hr.category, hr.total_points)?;
            Ok(())
        }
        None => Err(CliError::Engine(format!(
            "no {} available in this pool",
            category
        ))),
    }
}

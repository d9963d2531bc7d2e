//! Eval command handler for hand inspection.
//!
//! Parses card tokens from the command line, runs the hand evaluator, and
//! prints the category with its point breakdown. Fewer or more than five
//! cards is not an error: the evaluator degrades to a high-card preview,
//! matching what a player sees mid-selection.

use crate::error::CliError;
use crate::formatters::format_cards;
use crate::validation::parse_cards;
use sharpshot_engine::hand::{evaluate_hand, HAND_SIZE};
use std::io::Write;

/// Handle the eval command.
///
/// # Arguments
///
/// * `tokens` - Card tokens, e.g. `["AH", "KD", "10S", "4C", "2H"]`
/// * `out` - Output stream for the evaluation report
///
/// # Returns
///
/// Returns `Ok(())` on success, or `CliError::InvalidInput` for unparsable
/// or duplicate tokens.
pub fn handle_eval_command(tokens: &[String], out: &mut dyn Write) -> Result<(), CliError> {
    let cards = parse_cards(tokens).map_err(CliError::InvalidInput)?;
    let hr = evaluate_hand(&cards);
    if cards.len() != HAND_SIZE {
        writeln!(
            out,
            "Preview: {} of {} cards selected",
            cards.len(),
            HAND_SIZE
        )?;
    }
    writeln!(out, "Hand: {}", format_cards(&hr.cards))?;
    writeln!(out, "Category: {}", hr.category)?;
    writeln!(
        out,
        "Base: {}  Value bonus: {}  Total: {}",
        hr.category.base_points(),
        hr.value_bonus,
        hr.total_points
    )?;
    Ok(())
}

//! Simulation command handler for generating run histories.
//!
//! Drives complete game sessions with a trivial draw-the-window policy: each
//! action submits the top of the visible window as a hand, then lets a few
//! simulated seconds pass. Level completions, bonus rounds, and time-outs
//! all flow through the engine's session state machine, so the recorded
//! runs exercise the same transitions a real player would.

use crate::error::CliError;
use crate::ui;
use sharpshot_engine::cards::Card;
use sharpshot_engine::hand::HAND_SIZE;
use sharpshot_engine::logger::{HandEntry, RunLogger, RunRecord};
use sharpshot_engine::session::{GameMode, GameSession, RunPhase};
use std::io::Write;

/// Simulated seconds between player actions.
const SECONDS_PER_ACTION: u32 = 3;

/// Handle the sim command: run complete sessions and record them.
///
/// Each run gets its own seed (`base_seed + run_index`) so histories are
/// reproducible and runs stay independent.
///
/// # Arguments
///
/// * `mode` - Game mode name ("classic", "blitz", "sharpshooter")
/// * `runs` - Number of runs to simulate
/// * `seconds` - Simulated wall-clock budget per run
/// * `seed` - Base RNG seed (random when omitted)
/// * `output` - Path for JSONL run records (written via the engine logger)
/// * `out` - Output stream for normal messages
/// * `err` - Output stream for error messages
///
/// # Returns
///
/// `Ok(())` on success, or `CliError` on failure
pub fn handle_sim_command(
    mode: &str,
    runs: u64,
    seconds: u32,
    seed: Option<u64>,
    output: Option<String>,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> Result<(), CliError> {
    if runs == 0 {
        ui::write_error(err, "runs must be >= 1")?;
        return Err(CliError::InvalidInput("runs must be >= 1".to_string()));
    }
    let mode: GameMode = mode.parse().map_err(CliError::InvalidInput)?;
    let base_seed = seed.unwrap_or_else(rand::random);

    let mut logger = match output {
        Some(path) => RunLogger::create(&path)?,
        None => RunLogger::detached("19700101"),
    };

    for i in 0..runs {
        let mut record = simulate_run(mode, base_seed.wrapping_add(i), seconds);
        record.run_id = logger.next_id();
        logger.write(&record)?;
    }

    writeln!(out, "Simulated: {} runs", runs)?;
    Ok(())
}

/// Play one session to its end (or until the simulated budget runs out) and
/// return its record. The run id is filled in by the caller.
fn simulate_run(mode: GameMode, seed: u64, seconds: u32) -> RunRecord {
    let mut session = GameSession::new(mode, seed);
    let mut hands = Vec::new();
    let mut clock = 0u32;

    while clock < seconds && session.phase() != RunPhase::GameOver {
        match session.phase() {
            RunPhase::Playing | RunPhase::BonusRound => {
                if session.deck().remaining() < HAND_SIZE {
                    // classic runs out of cards; nothing left to submit
                    break;
                }
                let pick: Vec<Card> = session.deck().visible(HAND_SIZE);
                if let Ok(outcome) = session.submit_hand(&pick) {
                    hands.push(HandEntry {
                        category: outcome.result.category,
                        points: outcome.points_awarded,
                        final_stretch: outcome.final_stretch,
                        multiplier: outcome.multiplier,
                    });
                }
            }
            RunPhase::LevelComplete => {
                if session.bonus_pending() {
                    let _ = session.start_bonus_round();
                } else {
                    let _ = session.start_next_level();
                }
            }
            RunPhase::GameOver => break,
        }
        for _ in 0..SECONDS_PER_ACTION {
            clock += 1;
            if session.tick() == RunPhase::GameOver {
                break;
            }
        }
    }

    let final_score = session.finalize();
    RunRecord {
        run_id: String::new(),
        seed: Some(seed),
        mode,
        hands,
        final_score,
        stars: session.stars().to_vec(),
        ts: None,
        meta: None,
    }
}

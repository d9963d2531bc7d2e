//! Scoring rules shared by the game modes.
//!
//! Everything here is a pure function over explicit inputs. Fractional
//! multipliers are applied as integer rationals so awarded points are
//! bit-exact across platforms; the f64 returned by [`streak_multiplier`] is
//! the display value only.

use crate::cards::Card;

/// Final stretch: the last seconds of a timed mode, during which submitted
/// hands score double.
pub const FINAL_STRETCH_SECS: u32 = 10;

/// Classic runs finished within this many seconds earn the flat time bonus.
pub const QUICK_FINISH_SECS: u32 = 60;

/// Flat bonus for a quick Classic finish.
pub const QUICK_FINISH_BONUS: i64 = 1000;

/// Per value point charged for each card left unplayed in Classic mode.
pub const LEFTOVER_PENALTY_RATE: i64 = 10;

/// End-of-run time bonus for the untimed Classic mode: +1000 when the run
/// took at most 60 seconds, otherwise minus one point per second over.
/// Can go negative.
pub fn time_bonus(elapsed_secs: u32) -> i64 {
    if elapsed_secs <= QUICK_FINISH_SECS {
        QUICK_FINISH_BONUS
    } else {
        -i64::from(elapsed_secs - QUICK_FINISH_SECS)
    }
}

/// Penalty for cards never played: ten points per card value. High cards
/// left on the table cost the most.
pub fn leftover_penalty(cards: &[Card]) -> i64 {
    cards
        .iter()
        .map(|c| i64::from(c.value()) * LEFTOVER_PENALTY_RATE)
        .sum()
}

/// True while a timed mode is inside its final stretch (0 < t ≤ 10).
pub fn in_final_stretch(time_remaining: u32) -> bool {
    time_remaining > 0 && time_remaining <= FINAL_STRETCH_SECS
}

/// Streak length → multiplier as numerator/denominator, so point awards stay
/// in integer arithmetic.
fn streak_ratio(streak: u32) -> (i64, i64) {
    match streak {
        0 => (1, 1),
        1 => (6, 5),
        2 => (3, 2),
        _ => (2, 1),
    }
}

/// Display multiplier for a better-hand streak: 0→1×, 1→1.2×, 2→1.5×, ≥3→2×.
pub fn streak_multiplier(streak: u32) -> f64 {
    let (num, den) = streak_ratio(streak);
    num as f64 / den as f64
}

/// Apply the streak multiplier to a point total using exact rational
/// arithmetic (floor division).
pub fn apply_streak_multiplier(points: i64, streak: u32) -> i64 {
    let (num, den) = streak_ratio(streak);
    points * num / den
}

/// Blitz final score, computed once at time-out: accumulated raw points
/// times hands played. The raw total deliberately excludes final-stretch
/// doubling.
pub fn blitz_final_score(raw_score: i64, hands_played: u32) -> i64 {
    raw_score * i64::from(hands_played)
}

/// Classic final score: raw points plus the time bonus minus the penalty
/// for cards left unplayed.
pub fn classic_final_score(raw_score: i64, elapsed_secs: u32, leftover: &[Card]) -> i64 {
    raw_score + time_bonus(elapsed_secs) - leftover_penalty(leftover)
}

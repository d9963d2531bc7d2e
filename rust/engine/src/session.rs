//! Game session state and the transforms that drive it.
//!
//! A [`GameSession`] is owned by the caller; every method is a synchronous,
//! side-effect-free transform of that state. The engine holds no globals and
//! no timers — the caller feeds wall-clock seconds through [`GameSession::tick`]
//! and reads predicates back.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::cards::Card;
use crate::deck::Deck;
use crate::errors::GameError;
use crate::hand::{evaluate_hand, HandResult};
use crate::level::{
    level_goal, level_info, should_trigger_bonus_round, star_rating, LevelInfo, LevelSchedule,
};
use crate::scoring::{
    apply_streak_multiplier, blitz_final_score, classic_final_score, in_final_stretch,
    streak_multiplier,
};

/// Seconds on the clock for a Blitz run.
pub const BLITZ_TIME_SECS: u32 = 120;
/// Seconds on the clock for each Sharp Shooter level.
pub const LEVEL_TIME_SECS: u32 = 90;
/// Seconds on the clock for a bonus round.
pub const BONUS_TIME_SECS: u32 = 30;
/// Hands submitted during a bonus round score at this multiple.
pub const BONUS_REWARD_MULTIPLIER: i64 = 2;

/// The three game modes.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum GameMode {
    /// Untimed; consumed cards are gone for good and the run ends when the
    /// deck cannot yield another hand.
    Classic,
    /// Fixed clock; cards recycle and the final score is raw points times
    /// hands played.
    Blitz,
    /// The level-based Sharp Shooter Challenge; cards recycle, levels have
    /// goals, timers, streaks, and bonus rounds.
    SharpShooter,
}

impl GameMode {
    /// Whether consumed cards return to the deck after scoring.
    pub fn recycles_cards(self) -> bool {
        !matches!(self, GameMode::Classic)
    }

    /// Whether a countdown clock governs the run.
    pub fn is_timed(self) -> bool {
        !matches!(self, GameMode::Classic)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            GameMode::Classic => "classic",
            GameMode::Blitz => "blitz",
            GameMode::SharpShooter => "sharpshooter",
        }
    }
}

impl fmt::Display for GameMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for GameMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "classic" => Ok(GameMode::Classic),
            "blitz" => Ok(GameMode::Blitz),
            "sharpshooter" | "ssc" => Ok(GameMode::SharpShooter),
            other => Err(format!("unknown mode: {}", other)),
        }
    }
}

/// Where a run currently stands. `GameOver` is terminal.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub enum RunPhase {
    Playing,
    LevelComplete,
    BonusRound,
    GameOver,
}

/// What one submission produced.
#[derive(Debug, Clone, PartialEq)]
pub struct SubmissionOutcome {
    pub result: HandResult,
    /// The final-stretch doubling applied to this hand.
    pub final_stretch: bool,
    /// Better-hand streak after this submission.
    pub streak: u32,
    /// Streak multiplier applied (display value; 1.0 outside Sharp Shooter).
    pub multiplier: f64,
    /// Points added to the session score.
    pub points_awarded: i64,
    /// This submission pushed the level score past its goal.
    pub level_cleared: bool,
}

/// One run of the game, owned by the caller.
#[derive(Debug, Clone)]
pub struct GameSession {
    mode: GameMode,
    seed: u64,
    deck: Deck,
    used: Vec<Card>,
    score: i64,
    raw_score: i64,
    level_score: i64,
    hands_played: u32,
    time_remaining: u32,
    time_elapsed: u32,
    level: u32,
    goal: i64,
    schedule: LevelSchedule,
    streak: u32,
    last_strength: Option<u8>,
    phase: RunPhase,
    bonus_pending: bool,
    bonus_rounds_played: u32,
    bonus_hands: u32,
    parked_deck: Option<Deck>,
    stars: Vec<u8>,
    final_score: Option<i64>,
}

impl GameSession {
    pub fn new(mode: GameMode, seed: u64) -> Self {
        Self::with_schedule(mode, seed, LevelSchedule::default())
    }

    pub fn with_schedule(mode: GameMode, seed: u64, schedule: LevelSchedule) -> Self {
        let mut deck = Deck::with_seed(seed);
        deck.shuffle();
        let time_remaining = match mode {
            GameMode::Classic => 0,
            GameMode::Blitz => BLITZ_TIME_SECS,
            GameMode::SharpShooter => LEVEL_TIME_SECS,
        };
        Self {
            mode,
            seed,
            deck,
            used: Vec::new(),
            score: 0,
            raw_score: 0,
            level_score: 0,
            hands_played: 0,
            time_remaining,
            time_elapsed: 0,
            level: 1,
            goal: level_goal(1),
            schedule,
            streak: 0,
            last_strength: None,
            phase: RunPhase::Playing,
            bonus_pending: false,
            bonus_rounds_played: 0,
            bonus_hands: 0,
            parked_deck: None,
            stars: Vec::new(),
            final_score: None,
        }
    }

    pub fn mode(&self) -> GameMode {
        self.mode
    }
    pub fn phase(&self) -> RunPhase {
        self.phase
    }
    pub fn score(&self) -> i64 {
        self.score
    }
    pub fn raw_score(&self) -> i64 {
        self.raw_score
    }
    pub fn level_score(&self) -> i64 {
        self.level_score
    }
    pub fn hands_played(&self) -> u32 {
        self.hands_played
    }
    pub fn time_remaining(&self) -> u32 {
        self.time_remaining
    }
    pub fn time_elapsed(&self) -> u32 {
        self.time_elapsed
    }
    pub fn level(&self) -> u32 {
        self.level
    }
    pub fn goal(&self) -> i64 {
        self.goal
    }
    pub fn streak(&self) -> u32 {
        self.streak
    }
    pub fn deck(&self) -> &Deck {
        &self.deck
    }
    pub fn used_cards(&self) -> &[Card] {
        &self.used
    }
    pub fn bonus_pending(&self) -> bool {
        self.bonus_pending
    }
    pub fn bonus_rounds_played(&self) -> u32 {
        self.bonus_rounds_played
    }
    /// Star rating of each completed level, in order.
    pub fn stars(&self) -> &[u8] {
        &self.stars
    }
    /// Layout info for the current level.
    pub fn level_info(&self) -> LevelInfo {
        level_info(self.level, &self.schedule)
    }

    /// Advance the clock by one wall-clock second (driven by the caller's
    /// timer). Returns the phase after the tick: a timed run whose clock
    /// reaches zero mid-level is over; a bonus round that times out resolves
    /// and hands control back at `LevelComplete`.
    pub fn tick(&mut self) -> RunPhase {
        if self.phase == RunPhase::GameOver {
            return self.phase;
        }
        self.time_elapsed += 1;
        if self.mode.is_timed() && matches!(self.phase, RunPhase::Playing | RunPhase::BonusRound) {
            self.time_remaining = self.time_remaining.saturating_sub(1);
            if self.time_remaining == 0 {
                match self.phase {
                    RunPhase::BonusRound => {
                        // expiry resolves the bonus; the run itself survives
                        let _ = self.resolve_bonus_round();
                    }
                    RunPhase::Playing => {
                        self.phase = RunPhase::GameOver;
                    }
                    _ => {}
                }
            }
        }
        self.phase
    }

    /// Submit a selection of cards as one hand.
    ///
    /// Evaluates the selection, applies final-stretch doubling (timed modes)
    /// and then the streak or bonus-round multiplier, updates scores and the
    /// streak, and recycles or consumes the played cards per mode. The
    /// evaluator's graceful degradation carries through: a non-5-card
    /// selection scores as a high-card preview rather than erroring.
    pub fn submit_hand(&mut self, cards: &[Card]) -> Result<SubmissionOutcome, GameError> {
        match self.phase {
            RunPhase::Playing | RunPhase::BonusRound => {}
            RunPhase::GameOver => return Err(GameError::RunOver),
            RunPhase::LevelComplete => return Err(GameError::LevelNotActive),
        }
        for (i, c) in cards.iter().enumerate() {
            if cards[..i].contains(c) || !self.deck.cards().contains(c) {
                return Err(GameError::CardNotAvailable { id: c.id() });
            }
        }
        for &c in cards {
            let _ = self.deck.take(c);
        }

        let result = evaluate_hand(cards);
        let base = result.total_points;
        let final_stretch = self.mode.is_timed() && in_final_stretch(self.time_remaining);
        let mut awarded = if final_stretch { base * 2 } else { base };

        let mut multiplier = 1.0;
        match self.phase {
            RunPhase::BonusRound => {
                awarded *= BONUS_REWARD_MULTIPLIER;
                self.bonus_hands += 1;
            }
            RunPhase::Playing if self.mode == GameMode::SharpShooter => {
                let strength = result.category.strength();
                match self.last_strength {
                    Some(prev) if strength < prev => self.streak += 1,
                    _ => self.streak = 0,
                }
                self.last_strength = Some(strength);
                multiplier = streak_multiplier(self.streak);
                awarded = apply_streak_multiplier(awarded, self.streak);
            }
            _ => {}
        }

        self.raw_score += base;
        self.score += awarded;
        self.hands_played += 1;
        if self.mode == GameMode::SharpShooter && self.phase == RunPhase::Playing {
            self.level_score += awarded;
        }

        if self.mode.recycles_cards() {
            self.deck.recycle(cards);
        } else {
            self.used.extend_from_slice(cards);
        }

        let mut level_cleared = false;
        if self.mode == GameMode::SharpShooter
            && self.phase == RunPhase::Playing
            && self.level_score >= self.goal
        {
            level_cleared = true;
            self.stars.push(star_rating(self.level_score, self.goal));
            self.bonus_pending = should_trigger_bonus_round(self.level);
            self.phase = RunPhase::LevelComplete;
        }

        Ok(SubmissionOutcome {
            result,
            final_stretch,
            streak: self.streak,
            multiplier,
            points_awarded: awarded,
            level_cleared,
        })
    }

    /// Move from `LevelComplete` into the next numbered level. Any pending
    /// bonus round must run (or be declined via [`Self::skip_bonus_round`])
    /// first.
    pub fn start_next_level(&mut self) -> Result<LevelInfo, GameError> {
        if self.mode != GameMode::SharpShooter {
            return Err(GameError::NotLevelMode);
        }
        if self.phase != RunPhase::LevelComplete {
            return Err(GameError::NoLevelComplete);
        }
        if self.bonus_pending {
            return Err(GameError::BonusPending);
        }
        self.level += 1;
        self.goal = level_goal(self.level);
        self.level_score = 0;
        self.streak = 0;
        self.last_strength = None;
        self.time_remaining = LEVEL_TIME_SECS;
        self.phase = RunPhase::Playing;
        Ok(self.level_info())
    }

    /// Enter the pending bonus round: the main deck is parked and a
    /// bonus-friendly deck (pair-seeded for the first three bonus rounds)
    /// takes its place, with its own clock.
    pub fn start_bonus_round(&mut self) -> Result<(), GameError> {
        if self.mode != GameMode::SharpShooter {
            return Err(GameError::NotLevelMode);
        }
        if self.phase != RunPhase::LevelComplete || !self.bonus_pending {
            return Err(GameError::BonusNotPending);
        }
        let number = self.bonus_rounds_played + 1;
        let bonus_deck = Deck::bonus_friendly(number, self.seed.wrapping_add(u64::from(number)));
        self.parked_deck = Some(std::mem::replace(&mut self.deck, bonus_deck));
        self.time_remaining = BONUS_TIME_SECS;
        self.bonus_hands = 0;
        self.phase = RunPhase::BonusRound;
        Ok(())
    }

    /// Decline a pending bonus round without playing it.
    pub fn skip_bonus_round(&mut self) -> Result<(), GameError> {
        if self.phase != RunPhase::LevelComplete || !self.bonus_pending {
            return Err(GameError::BonusNotPending);
        }
        self.bonus_pending = false;
        Ok(())
    }

    /// End the bonus round (called on clear, or automatically when its clock
    /// expires). Returns whether the round was cleared — at least one hand
    /// submitted before the end. The main deck comes back untouched.
    pub fn resolve_bonus_round(&mut self) -> Result<bool, GameError> {
        if self.phase != RunPhase::BonusRound {
            return Err(GameError::BonusNotActive);
        }
        if let Some(deck) = self.parked_deck.take() {
            self.deck = deck;
        }
        let cleared = self.bonus_hands > 0;
        self.bonus_rounds_played += 1;
        self.bonus_pending = false;
        self.phase = RunPhase::LevelComplete;
        Ok(cleared)
    }

    /// Close the run and compute its final score: Classic combines raw
    /// points, time bonus, and leftover penalty; Blitz multiplies raw points
    /// by hands played; Sharp Shooter keeps the accumulated score.
    /// Idempotent once called.
    pub fn finalize(&mut self) -> i64 {
        if let Some(score) = self.final_score {
            return score;
        }
        let total = match self.mode {
            GameMode::Classic => {
                classic_final_score(self.raw_score, self.time_elapsed, self.deck.cards())
            }
            GameMode::Blitz => blitz_final_score(self.raw_score, self.hands_played),
            GameMode::SharpShooter => self.score,
        };
        self.phase = RunPhase::GameOver;
        self.final_score = Some(total);
        total
    }
}

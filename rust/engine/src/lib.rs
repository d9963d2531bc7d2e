//! # sharpshot-engine: Card-Matching Rules Engine Core
//!
//! A deterministic rules engine for a timed card-matching game scored with
//! poker hand rules. Provides deck lifecycle, five-card hand classification,
//! mode-specific scoring, level progression, and run logging with
//! reproducible RNG so scores are bit-exact across reimplementations.
//!
//! ## Core Modules
//!
//! - [`cards`] - Card representation (Suit, Rank, Card) and deck construction
//! - [`deck`] - Deterministic deck shuffling, recycling, and the bonus-friendly arrangement
//! - [`hand`] - Poker hand classification and point computation
//! - [`synth`] - Category-targeted hand synthesis for power-ups
//! - [`scoring`] - Bonuses, penalties, and streak/final-stretch multipliers
//! - [`level`] - Level goals, phase rotation, bonus cadence, star ratings
//! - [`session`] - Game session state machine and per-submission transforms
//! - [`logger`] - Run record serialization to JSONL
//! - [`errors`] - Error types for session operations
//!
//! ## Quick Start
//!
//! ```rust
//! use sharpshot_engine::cards::{Card, Rank, Suit};
//! use sharpshot_engine::hand::{evaluate_hand, Category};
//!
//! // Evaluate a 5-card selection
//! let cards = [
//!     Card { suit: Suit::Hearts, rank: Rank::Ten },
//!     Card { suit: Suit::Hearts, rank: Rank::Jack },
//!     Card { suit: Suit::Hearts, rank: Rank::Queen },
//!     Card { suit: Suit::Hearts, rank: Rank::King },
//!     Card { suit: Suit::Hearts, rank: Rank::Ace },
//! ];
//!
//! let result = evaluate_hand(&cards);
//! assert_eq!(result.category, Category::RoyalFlush);
//! assert_eq!(result.total_points, 4060);
//! ```
//!
//! ## Deterministic Gameplay
//!
//! All shuffling is reproducible from a caller-supplied seed:
//!
//! ```rust
//! use sharpshot_engine::deck::Deck;
//!
//! // Same seed produces the same shuffle
//! let deck1 = Deck::with_seed(42);
//! let deck2 = Deck::with_seed(42);
//! // deck1 and deck2 will deal identical card orders after shuffling
//! ```
//!
//! ## Session Lifecycle
//!
//! The caller owns the [`session::GameSession`] and drives it one transform
//! at a time — the engine never runs a timer of its own:
//!
//! ```rust
//! use sharpshot_engine::session::{GameMode, GameSession};
//!
//! let mut session = GameSession::new(GameMode::Blitz, 7);
//! let pick: Vec<_> = session.deck().visible(5);
//! let outcome = session.submit_hand(&pick).unwrap();
//! assert_eq!(session.hands_played(), 1);
//! assert_eq!(session.raw_score(), outcome.result.total_points);
//! ```

pub mod cards;
pub mod deck;
pub mod errors;
pub mod hand;
pub mod level;
pub mod logger;
pub mod scoring;
pub mod session;
pub mod synth;

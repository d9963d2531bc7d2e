use std::cmp::Reverse;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::cards::{Card, Suit};

/// Number of cards in a complete hand.
pub const HAND_SIZE: usize = 5;

/// The ten poker hand categories, strongest first.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum Category {
    RoyalFlush,
    StraightFlush,
    FourOfAKind,
    FullHouse,
    Flush,
    Straight,
    ThreeOfAKind,
    TwoPair,
    OnePair,
    HighCard,
}

impl Category {
    pub const ALL: [Category; 10] = [
        Category::RoyalFlush,
        Category::StraightFlush,
        Category::FourOfAKind,
        Category::FullHouse,
        Category::Flush,
        Category::Straight,
        Category::ThreeOfAKind,
        Category::TwoPair,
        Category::OnePair,
        Category::HighCard,
    ];

    /// Base points awarded before the per-card value bonus.
    pub fn base_points(self) -> i64 {
        match self {
            Category::RoyalFlush => 4000,
            Category::StraightFlush => 2400,
            Category::FourOfAKind => 1600,
            Category::FullHouse => 1000,
            Category::Flush => 600,
            Category::Straight => 400,
            Category::ThreeOfAKind => 240,
            Category::TwoPair => 160,
            Category::OnePair => 80,
            Category::HighCard => 20,
        }
    }

    /// Strength rank: 1 = Royal Flush ... 10 = High Card. Lower is stronger.
    pub fn strength(self) -> u8 {
        match self {
            Category::RoyalFlush => 1,
            Category::StraightFlush => 2,
            Category::FourOfAKind => 3,
            Category::FullHouse => 4,
            Category::Flush => 5,
            Category::Straight => 6,
            Category::ThreeOfAKind => 7,
            Category::TwoPair => 8,
            Category::OnePair => 9,
            Category::HighCard => 10,
        }
    }

    /// True when `self` is strictly stronger than `other`.
    pub fn beats(self, other: Category) -> bool {
        self.strength() < other.strength()
    }

    /// Display name ("Royal Flush", "Two Pair", ...).
    pub fn name(self) -> &'static str {
        match self {
            Category::RoyalFlush => "Royal Flush",
            Category::StraightFlush => "Straight Flush",
            Category::FourOfAKind => "Four of a Kind",
            Category::FullHouse => "Full House",
            Category::Flush => "Flush",
            Category::Straight => "Straight",
            Category::ThreeOfAKind => "Three of a Kind",
            Category::TwoPair => "Two Pair",
            Category::OnePair => "One Pair",
            Category::HighCard => "High Card",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Category {
    type Err = String;

    /// Parses a display name, case- and separator-insensitively
    /// ("Royal Flush", "royal-flush", "royalflush").
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key: String = s
            .chars()
            .filter(|c| c.is_ascii_alphanumeric())
            .collect::<String>()
            .to_ascii_lowercase();
        Category::ALL
            .iter()
            .copied()
            .find(|c| {
                key == c
                    .name()
                    .chars()
                    .filter(|c| c.is_ascii_alphanumeric())
                    .collect::<String>()
                    .to_ascii_lowercase()
            })
            .ok_or_else(|| format!("unknown hand category: {}", s))
    }
}

/// The outcome of evaluating one hand. `total_points` is always
/// `category.base_points() + value_bonus`, where `value_bonus` is the sum of
/// the card values. Cards are held in canonical descending order so
/// evaluation is invariant under permutation of the input.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct HandResult {
    pub category: Category,
    pub cards: Vec<Card>,
    pub value_bonus: i64,
    pub total_points: i64,
}

/// Classify a selection of cards and compute its points.
///
/// A complete 5-card hand is classified into exactly one of the ten
/// categories. Any other selection size never panics or errors: it degrades
/// to a High-Card-equivalent result with the same value-bonus formula, so
/// callers can probe partial selections mid-pick without special-casing.
pub fn evaluate_hand(cards: &[Card]) -> HandResult {
    let value_bonus: i64 = cards.iter().map(|c| i64::from(c.value())).sum();
    let mut sorted = cards.to_vec();
    sorted.sort_unstable_by_key(|c| Reverse((c.rank, c.suit)));
    let category = if sorted.len() == HAND_SIZE {
        classify(&sorted)
    } else {
        Category::HighCard
    };
    HandResult {
        category,
        value_bonus,
        total_points: category.base_points() + value_bonus,
        cards: sorted,
    }
}

// A-2-3-4-5, the only straight where the Ace counts low.
const WHEEL_MASK: u16 = (1 << 14) | (1 << 5) | (1 << 4) | (1 << 3) | (1 << 2);
// 10-J-Q-K-A.
const BROADWAY_MASK: u16 = (1 << 14) | (1 << 13) | (1 << 12) | (1 << 11) | (1 << 10);

/// First match wins; the categories are mutually exclusive by construction,
/// so this order (strongest first within each family) is canonical.
fn classify(cards: &[Card]) -> Category {
    let mut rank_counts = [0u8; 15];
    let mut suit_masks = [0u16; 4];
    let mut rank_mask: u16 = 0;
    for c in cards {
        let bit = 1u16 << c.value();
        rank_counts[c.value() as usize] += 1;
        rank_mask |= bit;
        suit_masks[suit_index(c.suit)] |= bit;
    }

    let flush = suit_masks.iter().copied().find(|m| m.count_ones() >= 5);
    if let Some(mask) = flush {
        if mask & BROADWAY_MASK == BROADWAY_MASK {
            return Category::RoyalFlush;
        }
        if straight_high_from_mask(mask).is_some() {
            return Category::StraightFlush;
        }
    }

    let mut shape: Vec<u8> = rank_counts.iter().copied().filter(|&n| n > 0).collect();
    shape.sort_unstable_by(|a, b| b.cmp(a));

    if shape.first() == Some(&4) {
        return Category::FourOfAKind;
    }
    if shape.first() == Some(&3) && shape.get(1) == Some(&2) {
        return Category::FullHouse;
    }
    if flush.is_some() {
        return Category::Flush;
    }
    if straight_high_from_mask(rank_mask).is_some() {
        return Category::Straight;
    }
    if shape.first() == Some(&3) {
        return Category::ThreeOfAKind;
    }
    if shape.first() == Some(&2) && shape.get(1) == Some(&2) {
        return Category::TwoPair;
    }
    if shape.first() == Some(&2) {
        return Category::OnePair;
    }
    Category::HighCard
}

/// Highest rank completing a 5-long run in a rank bitmask, including the
/// wheel (reported as 5-high).
pub(crate) fn straight_high_from_mask(mask: u16) -> Option<u8> {
    for high in (6..=14u8).rev() {
        let window = 0b11111u16 << (high - 4);
        if mask & window == window {
            return Some(high);
        }
    }
    if mask & WHEEL_MASK == WHEEL_MASK {
        return Some(5);
    }
    None
}

pub(crate) fn suit_index(s: Suit) -> usize {
    match s {
        Suit::Clubs => 0,
        Suit::Diamonds => 1,
        Suit::Hearts => 2,
        Suit::Spades => 3,
    }
}

use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;

use crate::cards::{full_deck, Card};

/// Number of cards in a fresh deck.
pub const DECK_SIZE: usize = 52;

/// Size of the visible layout every mode starts with; the bonus-friendly
/// arrangement guarantees its pairs inside this window.
pub const VISIBLE_WINDOW: usize = 10;

/// Bonus rounds 1 through this number get the pair-friendly arrangement;
/// later rounds degrade to a plain shuffle.
pub const BONUS_FRIENDLY_ROUNDS: u32 = 3;

/// A draw pile with a deterministic, seeded shuffle. The last element is the
/// top of the pile. A fresh deck keeps suit-then-rank order until `shuffle`
/// is called explicitly.
#[derive(Debug, Clone)]
pub struct Deck {
    cards: Vec<Card>,
    rng: ChaCha20Rng,
}

impl Deck {
    pub fn with_seed(seed: u64) -> Self {
        let rng = ChaCha20Rng::seed_from_u64(seed);
        // Keep initial order until shuffle is called explicitly
        Self {
            cards: full_deck(),
            rng,
        }
    }

    /// Fisher-Yates shuffle of the current pile. Preserves the exact multiset.
    pub fn shuffle(&mut self) {
        self.cards.shuffle(&mut self.rng);
    }

    /// Deal the top card, or `None` when the pile is empty.
    pub fn deal_card(&mut self) -> Option<Card> {
        self.cards.pop()
    }

    /// Deal up to `n` cards from the top.
    pub fn deal(&mut self, n: usize) -> Vec<Card> {
        (0..n).filter_map(|_| self.deal_card()).collect()
    }

    /// Remove a specific card from anywhere in the pile (a player picking
    /// from the visible layout). Returns `None` if the card is not live.
    pub fn take(&mut self, card: Card) -> Option<Card> {
        let idx = self.cards.iter().position(|c| *c == card)?;
        Some(self.cards.remove(idx))
    }

    /// Return consumed cards to the bottom of the pile (recycle modes).
    pub fn recycle(&mut self, returned: &[Card]) {
        self.cards.splice(0..0, returned.iter().copied());
    }

    /// Restore the full 52-card deck in suit-then-rank order.
    pub fn reset(&mut self) {
        self.cards = full_deck();
    }

    pub fn remaining(&self) -> usize {
        self.cards.len()
    }

    /// The live pile, bottom first.
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// The top `n` cards, top first, without dealing them.
    pub fn visible(&self, n: usize) -> Vec<Card> {
        self.cards.iter().rev().take(n).copied().collect()
    }

    /// Build a shuffled deck whose visible window holds at least two
    /// same-rank pairs, for the first [`BONUS_FRIENDLY_ROUNDS`] bonus rounds.
    /// Later rounds get a plain shuffle. Either way the deck is the full
    /// 52-card multiset.
    pub fn bonus_friendly(bonus_round: u32, seed: u64) -> Self {
        let mut deck = Deck::with_seed(seed);
        deck.shuffle();
        if bonus_round == 0 || bonus_round > BONUS_FRIENDLY_ROUNDS {
            return deck;
        }
        let start = deck.cards.len().saturating_sub(VISIBLE_WINDOW);
        while window_pairs(&deck.cards[start..]) < 2 {
            // Promote a mate of an unpaired window card from below the
            // window, displacing a different unpaired window card.
            let counts = rank_counts(&deck.cards[start..]);
            let keeper = deck.cards[start..]
                .iter()
                .find(|c| counts[c.value() as usize] == 1)
                .copied();
            let Some(keeper) = keeper else { break };
            let Some(mate_idx) = deck.cards[..start]
                .iter()
                .position(|c| c.rank == keeper.rank)
            else {
                break;
            };
            let Some(victim_idx) = deck.cards[start..]
                .iter()
                .position(|c| counts[c.value() as usize] == 1 && c.rank != keeper.rank)
                .map(|i| start + i)
            else {
                break;
            };
            deck.cards.swap(mate_idx, victim_idx);
        }
        deck
    }
}

fn rank_counts(cards: &[Card]) -> [usize; 15] {
    let mut counts = [0usize; 15];
    for c in cards {
        counts[c.value() as usize] += 1;
    }
    counts
}

fn window_pairs(window: &[Card]) -> usize {
    rank_counts(window).iter().map(|&c| c / 2).sum()
}

use rand::seq::SliceRandom;
use rand::Rng;

use crate::cards::Card;
use crate::hand::{evaluate_hand, suit_index, Category, HAND_SIZE};

/// Bound on shuffled-copy search passes. The search is deterministic given
/// the RNG; retries only resolve rare collisions (e.g. a requested Flush
/// landing on five consecutive ranks).
const SEARCH_ATTEMPTS: usize = 16;

/// Locate a 5-card hand of the requested category inside `pool`.
///
/// Searches a shuffled copy of the pool, so the concrete cards vary with the
/// RNG while remaining reproducible for a given seed. Returns `None` — never
/// an error — when the pool cannot satisfy the category; callers must treat
/// that as "effect not applied" and keep whatever resource triggered the
/// call.
///
/// A returned hand always re-evaluates to the requested category via
/// [`evaluate_hand`]; selections that would slip into a stronger category
/// are discarded.
pub fn generate_specific_hand<R: Rng + ?Sized>(
    category: Category,
    pool: &[Card],
    rng: &mut R,
) -> Option<[Card; HAND_SIZE]> {
    if pool.len() < HAND_SIZE {
        return None;
    }
    let mut cards = pool.to_vec();
    for _ in 0..SEARCH_ATTEMPTS {
        cards.shuffle(rng);
        if let Some(hand) = assemble(category, &cards) {
            if evaluate_hand(&hand).category == category {
                return Some(hand);
            }
        }
    }
    None
}

fn assemble(category: Category, cards: &[Card]) -> Option<[Card; HAND_SIZE]> {
    let picked = match category {
        Category::RoyalFlush => suit_groups(cards)
            .iter()
            .find_map(|g| run_of_five(g, 14, 14)),
        Category::StraightFlush => suit_groups(cards)
            .iter()
            .find_map(|g| run_of_five(g, 13, 6).or_else(|| wheel(g))),
        Category::FourOfAKind => {
            let groups = rank_groups(cards);
            let quad = groups.iter().find(|g| g.len() >= 4)?;
            let kicker = groups.iter().find(|g| g[0].rank != quad[0].rank)?;
            let mut hand: Vec<Card> = quad[..4].to_vec();
            hand.push(kicker[0]);
            Some(hand)
        }
        Category::FullHouse => {
            let groups = rank_groups(cards);
            let triple = groups.iter().find(|g| g.len() >= 3)?;
            let pair = groups
                .iter()
                .find(|g| g.len() >= 2 && g[0].rank != triple[0].rank)?;
            let mut hand: Vec<Card> = triple[..3].to_vec();
            hand.extend_from_slice(&pair[..2]);
            Some(hand)
        }
        Category::Flush => suit_groups(cards)
            .iter()
            .find(|g| g.len() >= HAND_SIZE)
            .map(|g| g[..HAND_SIZE].to_vec()),
        Category::Straight => run_of_five(cards, 14, 6).or_else(|| wheel(cards)),
        Category::ThreeOfAKind => {
            let groups = rank_groups(cards);
            let triple = groups.iter().find(|g| g.len() >= 3)?;
            let kickers: Vec<Card> = groups
                .iter()
                .filter(|g| g[0].rank != triple[0].rank)
                .take(2)
                .map(|g| g[0])
                .collect();
            if kickers.len() < 2 {
                return None;
            }
            let mut hand: Vec<Card> = triple[..3].to_vec();
            hand.extend(kickers);
            Some(hand)
        }
        Category::TwoPair => {
            let groups = rank_groups(cards);
            let mut pairs = groups.iter().filter(|g| g.len() >= 2);
            let first = pairs.next()?;
            let second = pairs.next()?;
            let fifth = groups
                .iter()
                .find(|g| g[0].rank != first[0].rank && g[0].rank != second[0].rank)?;
            let mut hand: Vec<Card> = first[..2].to_vec();
            hand.extend_from_slice(&second[..2]);
            hand.push(fifth[0]);
            Some(hand)
        }
        Category::OnePair => {
            let groups = rank_groups(cards);
            let pair = groups.iter().find(|g| g.len() >= 2)?;
            let kickers: Vec<Card> = groups
                .iter()
                .filter(|g| g[0].rank != pair[0].rank)
                .take(3)
                .map(|g| g[0])
                .collect();
            if kickers.len() < 3 {
                return None;
            }
            let mut hand: Vec<Card> = pair[..2].to_vec();
            hand.extend(kickers);
            Some(hand)
        }
        Category::HighCard => {
            // distinct ranks; the round-trip check above rejects the rare
            // shuffle that lands on a straight or flush
            let picks: Vec<Card> = rank_groups(cards)
                .iter()
                .take(HAND_SIZE)
                .map(|g| g[0])
                .collect();
            (picks.len() == HAND_SIZE).then_some(picks)
        }
    }?;
    picked.try_into().ok()
}

/// One group per suit, each preserving the shuffled order.
fn suit_groups(cards: &[Card]) -> [Vec<Card>; 4] {
    let mut groups: [Vec<Card>; 4] = Default::default();
    for &c in cards {
        groups[suit_index(c.suit)].push(c);
    }
    groups
}

/// One group per rank, ordered by first appearance in the shuffled pool.
fn rank_groups(cards: &[Card]) -> Vec<Vec<Card>> {
    let mut groups: Vec<Vec<Card>> = Vec::new();
    for &c in cards {
        match groups.iter_mut().find(|g| g[0].rank == c.rank) {
            Some(g) => g.push(c),
            None => groups.push(vec![c]),
        }
    }
    groups
}

/// Five consecutive values with highs scanned from `top` down to `bottom`,
/// picking the first card of each needed value.
fn run_of_five(cards: &[Card], top: u8, bottom: u8) -> Option<Vec<Card>> {
    let mut mask = 0u16;
    for c in cards {
        mask |= 1 << c.value();
    }
    for high in (bottom..=top).rev() {
        let window = 0b11111u16 << (high - 4);
        if mask & window == window {
            return collect_values(cards, (high - 4..=high).collect());
        }
    }
    None
}

/// The wheel: A-2-3-4-5.
fn wheel(cards: &[Card]) -> Option<Vec<Card>> {
    collect_values(cards, vec![14, 2, 3, 4, 5])
}

fn collect_values(cards: &[Card], values: Vec<u8>) -> Option<Vec<Card>> {
    values
        .into_iter()
        .map(|v| cards.iter().find(|c| c.value() == v).copied())
        .collect()
}

use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;

use sharpshot_engine::cards::{full_deck, Card, Rank as R, Suit as S};
use sharpshot_engine::hand::{evaluate_hand, Category};
use sharpshot_engine::synth::generate_specific_hand;

fn c(s: S, r: R) -> Card {
    Card { suit: s, rank: r }
}

#[test]
fn every_category_round_trips_from_a_full_deck() {
    let pool = full_deck();
    for cat in Category::ALL {
        let mut rng = ChaCha20Rng::seed_from_u64(1);
        let hand = generate_specific_hand(cat, &pool, &mut rng)
            .unwrap_or_else(|| panic!("{} should be satisfiable from a full deck", cat));
        assert_eq!(
            evaluate_hand(&hand).category,
            cat,
            "synthesized hand must re-evaluate to {}",
            cat
        );
    }
}

#[test]
fn synthesis_is_deterministic_for_a_seed() {
    let pool = full_deck();
    let mut a = ChaCha20Rng::seed_from_u64(99);
    let mut b = ChaCha20Rng::seed_from_u64(99);
    let h1 = generate_specific_hand(Category::Flush, &pool, &mut a);
    let h2 = generate_specific_hand(Category::Flush, &pool, &mut b);
    assert_eq!(h1, h2);
}

#[test]
fn unsatisfiable_pool_yields_none_not_panic() {
    // four cards can never make a hand
    let short = &full_deck()[..4];
    let mut rng = ChaCha20Rng::seed_from_u64(5);
    assert_eq!(
        generate_specific_hand(Category::OnePair, short, &mut rng),
        None
    );

    // five distinct-rank, mixed-suit cards hold no flush
    let pool = vec![
        c(S::Clubs, R::Two),
        c(S::Diamonds, R::Nine),
        c(S::Hearts, R::Jack),
        c(S::Spades, R::King),
        c(S::Clubs, R::Six),
    ];
    let mut rng = ChaCha20Rng::seed_from_u64(5);
    assert_eq!(
        generate_specific_hand(Category::Flush, &pool, &mut rng),
        None
    );
    let mut rng = ChaCha20Rng::seed_from_u64(5);
    assert_eq!(
        generate_specific_hand(Category::FourOfAKind, &pool, &mut rng),
        None
    );
}

#[test]
fn straight_flush_request_never_upgrades_to_royal() {
    // the only straights in this suit pool are 9-high..K-high and broadway
    let pool: Vec<Card> = [
        R::Nine,
        R::Ten,
        R::Jack,
        R::Queen,
        R::King,
        R::Ace,
    ]
    .iter()
    .map(|&r| c(S::Hearts, r))
    .collect();
    for seed in 0..8 {
        let mut rng = ChaCha20Rng::seed_from_u64(seed);
        let hand = generate_specific_hand(Category::StraightFlush, &pool, &mut rng)
            .expect("K-high straight flush is available");
        assert_eq!(evaluate_hand(&hand).category, Category::StraightFlush);
    }
}

#[test]
fn wheel_satisfies_a_straight_flush_request() {
    let pool: Vec<Card> = [R::Ace, R::Two, R::Three, R::Four, R::Five]
        .iter()
        .map(|&r| c(S::Spades, r))
        .collect();
    let mut rng = ChaCha20Rng::seed_from_u64(0);
    let hand = generate_specific_hand(Category::StraightFlush, &pool, &mut rng)
        .expect("the wheel is a straight flush");
    assert_eq!(evaluate_hand(&hand).category, Category::StraightFlush);
}

#[test]
fn full_house_needs_a_triple_and_a_pair() {
    let pool = vec![
        c(S::Clubs, R::Seven),
        c(S::Diamonds, R::Seven),
        c(S::Hearts, R::Seven),
        c(S::Clubs, R::Two),
        c(S::Diamonds, R::Two),
        c(S::Spades, R::King),
    ];
    let mut rng = ChaCha20Rng::seed_from_u64(3);
    let hand = generate_specific_hand(Category::FullHouse, &pool, &mut rng).unwrap();
    assert_eq!(evaluate_hand(&hand).category, Category::FullHouse);

    // without the paired deuce there is no full house
    let no_pair = &pool[..4];
    let mut rng = ChaCha20Rng::seed_from_u64(3);
    assert_eq!(
        generate_specific_hand(Category::FullHouse, no_pair, &mut rng),
        None
    );
}

#[test]
fn high_card_synthesis_avoids_accidental_structure() {
    let pool = full_deck();
    for seed in 0..16 {
        let mut rng = ChaCha20Rng::seed_from_u64(seed);
        let hand = generate_specific_hand(Category::HighCard, &pool, &mut rng).unwrap();
        assert_eq!(evaluate_hand(&hand).category, Category::HighCard);
    }
}

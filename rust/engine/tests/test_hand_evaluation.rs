use sharpshot_engine::cards::{Card, Rank as R, Suit as S};
use sharpshot_engine::hand::{evaluate_hand, Category};

fn c(s: S, r: R) -> Card {
    Card { suit: s, rank: r }
}

#[test]
fn detects_royal_flush_with_exact_points() {
    let cards = [
        c(S::Hearts, R::Ten),
        c(S::Hearts, R::Jack),
        c(S::Hearts, R::Queen),
        c(S::Hearts, R::King),
        c(S::Hearts, R::Ace),
    ];
    let hr = evaluate_hand(&cards);
    assert_eq!(hr.category, Category::RoyalFlush);
    assert_eq!(hr.value_bonus, 60);
    assert_eq!(hr.total_points, 4060);
}

#[test]
fn wheel_is_a_straight_flush_not_high_card() {
    let cards = [
        c(S::Spades, R::Ace),
        c(S::Spades, R::Two),
        c(S::Spades, R::Three),
        c(S::Spades, R::Four),
        c(S::Spades, R::Five),
    ];
    let hr = evaluate_hand(&cards);
    assert_eq!(hr.category, Category::StraightFlush);
    assert_eq!(hr.total_points, 2400 + 28);
}

#[test]
fn wheel_straight_with_mixed_suits() {
    let cards = [
        c(S::Spades, R::Ace),
        c(S::Hearts, R::Two),
        c(S::Diamonds, R::Three),
        c(S::Clubs, R::Four),
        c(S::Spades, R::Five),
    ];
    assert_eq!(evaluate_hand(&cards).category, Category::Straight);
}

#[test]
fn broadway_straight_is_not_royal_without_flush() {
    let cards = [
        c(S::Spades, R::Ten),
        c(S::Hearts, R::Jack),
        c(S::Diamonds, R::Queen),
        c(S::Clubs, R::King),
        c(S::Spades, R::Ace),
    ];
    assert_eq!(evaluate_hand(&cards).category, Category::Straight);
}

#[test]
fn classifies_every_count_pattern() {
    let quads = [
        c(S::Clubs, R::Ace),
        c(S::Diamonds, R::Ace),
        c(S::Hearts, R::Ace),
        c(S::Spades, R::Ace),
        c(S::Clubs, R::King),
    ];
    assert_eq!(evaluate_hand(&quads).category, Category::FourOfAKind);

    let full_house = [
        c(S::Clubs, R::King),
        c(S::Diamonds, R::King),
        c(S::Hearts, R::King),
        c(S::Clubs, R::Queen),
        c(S::Diamonds, R::Queen),
    ];
    assert_eq!(evaluate_hand(&full_house).category, Category::FullHouse);

    let trips = [
        c(S::Clubs, R::Queen),
        c(S::Hearts, R::Queen),
        c(S::Diamonds, R::Queen),
        c(S::Spades, R::Two),
        c(S::Clubs, R::Nine),
    ];
    assert_eq!(evaluate_hand(&trips).category, Category::ThreeOfAKind);

    let two_pair = [
        c(S::Clubs, R::Ten),
        c(S::Hearts, R::Ten),
        c(S::Diamonds, R::Four),
        c(S::Spades, R::Four),
        c(S::Clubs, R::Nine),
    ];
    assert_eq!(evaluate_hand(&two_pair).category, Category::TwoPair);

    let one_pair = [
        c(S::Clubs, R::Ten),
        c(S::Hearts, R::Ten),
        c(S::Diamonds, R::Four),
        c(S::Spades, R::Six),
        c(S::Clubs, R::Nine),
    ];
    assert_eq!(evaluate_hand(&one_pair).category, Category::OnePair);

    let high_card = [
        c(S::Clubs, R::Ten),
        c(S::Hearts, R::Two),
        c(S::Diamonds, R::Four),
        c(S::Spades, R::Six),
        c(S::Clubs, R::Nine),
    ];
    assert_eq!(evaluate_hand(&high_card).category, Category::HighCard);
}

#[test]
fn flush_beats_straight_in_priority() {
    let flush = [
        c(S::Hearts, R::Two),
        c(S::Hearts, R::Seven),
        c(S::Hearts, R::Jack),
        c(S::Hearts, R::Queen),
        c(S::Hearts, R::Nine),
    ];
    let hr = evaluate_hand(&flush);
    assert_eq!(hr.category, Category::Flush);
    assert_eq!(hr.total_points, 600 + 2 + 7 + 11 + 12 + 9);
}

#[test]
fn exactly_one_category_per_hand() {
    // exhaustiveness over a varied sample: any 5 cards classify, and the
    // strength ranks of the category table form a strict total order
    let strengths: Vec<u8> = Category::ALL.iter().map(|c| c.strength()).collect();
    let mut sorted = strengths.clone();
    sorted.sort_unstable();
    sorted.dedup();
    assert_eq!(sorted.len(), 10, "strength ranks must be distinct");
    assert_eq!(sorted, (1..=10).collect::<Vec<u8>>());
}

#[test]
fn evaluation_is_permutation_invariant() {
    let mut cards = vec![
        c(S::Clubs, R::King),
        c(S::Diamonds, R::King),
        c(S::Hearts, R::Nine),
        c(S::Clubs, R::Queen),
        c(S::Diamonds, R::Two),
    ];
    let baseline = evaluate_hand(&cards);
    // rotate through several permutations
    for _ in 0..cards.len() {
        cards.rotate_left(1);
        assert_eq!(evaluate_hand(&cards), baseline);
    }
    cards.swap(0, 3);
    cards.swap(1, 4);
    assert_eq!(evaluate_hand(&cards), baseline);
}

#[test]
fn partial_selection_degrades_to_high_card_preview() {
    let three = [
        c(S::Clubs, R::Ace),
        c(S::Diamonds, R::Ace),
        c(S::Hearts, R::Ace),
    ];
    let hr = evaluate_hand(&three);
    assert_eq!(hr.category, Category::HighCard);
    assert_eq!(hr.value_bonus, 42);
    assert_eq!(hr.total_points, 20 + 42);

    let none = evaluate_hand(&[]);
    assert_eq!(none.category, Category::HighCard);
    assert_eq!(none.total_points, 20);
}

#[test]
fn base_points_match_the_score_table() {
    assert_eq!(Category::RoyalFlush.base_points(), 4000);
    assert_eq!(Category::StraightFlush.base_points(), 2400);
    assert_eq!(Category::FourOfAKind.base_points(), 1600);
    assert_eq!(Category::FullHouse.base_points(), 1000);
    assert_eq!(Category::Flush.base_points(), 600);
    assert_eq!(Category::Straight.base_points(), 400);
    assert_eq!(Category::ThreeOfAKind.base_points(), 240);
    assert_eq!(Category::TwoPair.base_points(), 160);
    assert_eq!(Category::OnePair.base_points(), 80);
    assert_eq!(Category::HighCard.base_points(), 20);
}

#[test]
fn category_names_round_trip_through_parsing() {
    for cat in Category::ALL {
        assert_eq!(cat.name().parse::<Category>().unwrap(), cat);
    }
    assert_eq!("royal-flush".parse::<Category>().unwrap(), Category::RoyalFlush);
    assert!("grand slam".parse::<Category>().is_err());
}

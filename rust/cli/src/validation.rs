//! Card token parsing for the eval command.
//!
//! Accepts the compact notation used at the prompt (`AH`, `10s`, `TS`) as
//! well as full card identifiers (`A-hearts`, `10-spades`). Validation
//! returns structured `Result` types with messages the user can act on.

use sharpshot_engine::cards::{Card, Rank, Suit};

/// Parse one card token, case-insensitively.
///
/// Accepted forms:
/// - compact: rank label followed by a suit letter (`AH`, `KD`, `10S`, `Ts`)
/// - identifier: `"{rank}-{suit}"` as produced by `Card::id` (`A-hearts`)
///
/// # Example
///
/// ```rust
/// # use sharpshot_cli::validation::parse_card;
/// use sharpshot_engine::cards::{Rank, Suit};
///
/// let card = parse_card("10h").unwrap();
/// assert_eq!(card.rank, Rank::Ten);
/// assert_eq!(card.suit, Suit::Hearts);
///
/// assert_eq!(parse_card("A-spades").unwrap().rank, Rank::Ace);
/// assert!(parse_card("1X").is_err());
/// ```
pub fn parse_card(token: &str) -> Result<Card, String> {
    let token = token.trim();
    let (rank_part, suit_part) = match token.split_once('-') {
        Some((r, s)) => (r.to_string(), s.to_string()),
        None => {
            let mut chars = token.chars();
            let suit_ch = chars
                .next_back()
                .ok_or_else(|| format!("card token too short: '{}'", token))?;
            let rank_str = chars.as_str();
            if rank_str.is_empty() {
                return Err(format!("card token too short: '{}'", token));
            }
            (rank_str.to_string(), suit_ch.to_string())
        }
    };
    let rank = parse_rank(&rank_part)?;
    let suit = parse_suit(&suit_part)?;
    Ok(Card { suit, rank })
}

/// Parse a whole selection, rejecting duplicate cards.
pub fn parse_cards(tokens: &[String]) -> Result<Vec<Card>, String> {
    if tokens.is_empty() {
        return Err("no cards given".to_string());
    }
    let mut cards = Vec::with_capacity(tokens.len());
    for token in tokens {
        let card = parse_card(token)?;
        if cards.contains(&card) {
            return Err(format!("duplicate card: {}", card.id()));
        }
        cards.push(card);
    }
    Ok(cards)
}

fn parse_rank(s: &str) -> Result<Rank, String> {
    match s.to_ascii_uppercase().as_str() {
        "2" => Ok(Rank::Two),
        "3" => Ok(Rank::Three),
        "4" => Ok(Rank::Four),
        "5" => Ok(Rank::Five),
        "6" => Ok(Rank::Six),
        "7" => Ok(Rank::Seven),
        "8" => Ok(Rank::Eight),
        "9" => Ok(Rank::Nine),
        "10" | "T" => Ok(Rank::Ten),
        "J" => Ok(Rank::Jack),
        "Q" => Ok(Rank::Queen),
        "K" => Ok(Rank::King),
        "A" => Ok(Rank::Ace),
        other => Err(format!("unknown rank: '{}'", other)),
    }
}

fn parse_suit(s: &str) -> Result<Suit, String> {
    match s.to_ascii_lowercase().as_str() {
        "c" | "clubs" => Ok(Suit::Clubs),
        "d" | "diamonds" => Ok(Suit::Diamonds),
        "h" | "hearts" => Ok(Suit::Hearts),
        "s" | "spades" => Ok(Suit::Spades),
        other => Err(format!("unknown suit: '{}'", other)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compact_tokens() {
        assert_eq!(
            parse_card("AH").unwrap(),
            Card {
                suit: Suit::Hearts,
                rank: Rank::Ace
            }
        );
        assert_eq!(parse_card("10s").unwrap().rank, Rank::Ten);
        assert_eq!(parse_card("Td").unwrap().rank, Rank::Ten);
        assert_eq!(parse_card("2c").unwrap().rank, Rank::Two);
    }

    #[test]
    fn test_identifier_tokens_round_trip() {
        for card in sharpshot_engine::cards::full_deck() {
            assert_eq!(parse_card(&card.id()).unwrap(), card);
        }
    }

    #[test]
    fn test_rejects_garbage() {
        assert!(parse_card("").is_err());
        assert!(parse_card("X").is_err());
        assert!(parse_card("11h").is_err());
        assert!(parse_card("Ax").is_err());
        assert!(parse_card("A-clouds").is_err());
    }

    #[test]
    fn test_duplicate_detection() {
        let tokens = vec!["AH".to_string(), "a-hearts".to_string()];
        let err = parse_cards(&tokens).unwrap_err();
        assert!(err.contains("duplicate"));
    }

    #[test]
    fn test_empty_selection_rejected() {
        assert!(parse_cards(&[]).is_err());
    }
}

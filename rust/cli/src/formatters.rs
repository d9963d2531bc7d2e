//! Card and hand formatters for terminal display.
//!
//! Pure functions for formatting game elements for terminal output, with
//! Unicode suit symbols and an ASCII fallback for terminals that can't
//! render them.
//!
//! ## Unicode vs ASCII Fallback
//!
//! On Windows, Unicode support is detected from modern-terminal environment
//! variables (WT_SESSION, TERM_PROGRAM, VSCODE_INJECTION); Unix-like systems
//! are assumed Unicode-capable.
//!
//! - **Unicode mode**: `A♠ 10♥`
//! - **ASCII mode**: `As 10h`

use sharpshot_engine::cards::{Card, Suit};

/// Check if the terminal supports Unicode card symbols.
pub fn supports_unicode() -> bool {
    if cfg!(windows) {
        std::env::var("WT_SESSION").is_ok()
            || std::env::var("TERM_PROGRAM").is_ok()
            || std::env::var("VSCODE_INJECTION").is_ok()
    } else {
        true
    }
}

/// Format a Suit as a string using Unicode symbols with ASCII fallback.
pub fn format_suit(suit: &Suit) -> String {
    if supports_unicode() {
        match suit {
            Suit::Hearts => "♥",
            Suit::Diamonds => "♦",
            Suit::Clubs => "♣",
            Suit::Spades => "♠",
        }
        .to_string()
    } else {
        match suit {
            Suit::Hearts => "h",
            Suit::Diamonds => "d",
            Suit::Clubs => "c",
            Suit::Spades => "s",
        }
        .to_string()
    }
}

/// Format a Card as rank label plus suit symbol, e.g. `A♠` or `10h`.
pub fn format_card(card: &Card) -> String {
    format!("{}{}", card.rank.symbol(), format_suit(&card.suit))
}

/// Format a card list space-separated, e.g. `[A♠ K♠ Q♠ J♠ 10♠]`.
pub fn format_cards(cards: &[Card]) -> String {
    let inner: Vec<String> = cards.iter().map(format_card).collect();
    format!("[{}]", inner.join(" "))
}

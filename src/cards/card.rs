//! Playing card values.
//!
//! A `Card` is created once per deal and keeps its identity, rank and suit
//! for the life of the game. Only the face-up flag changes.
//!
//! ## Usage
//!
//! ```
//! use rust_patience::cards::{Card, CardId, Rank, Suit};
//!
//! let card = Card::new(CardId(7), Rank::Six, Suit::Diamonds);
//! assert_eq!(card.rank.value(), 6);
//! assert_eq!(card.to_string(), "6♦");
//! assert!(!card.face_up);
//! ```

use serde::{Deserialize, Serialize};

/// Unique identifier for a card within one game.
///
/// Ids are sequential from 0 in deck construction order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct CardId(pub u32);

impl CardId {
    /// Create a new card ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for CardId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Card({})", self.0)
    }
}

/// Card rank. Ace is low (value 1), king is 13.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Rank {
    Ace,
    Two,
    Three,
    Four,
    Five,
    Six,
    Seven,
    Eight,
    Nine,
    Ten,
    Jack,
    Queen,
    King,
}

impl Rank {
    /// All ranks in ascending order.
    pub const ALL: [Rank; 13] = [
        Rank::Ace,
        Rank::Two,
        Rank::Three,
        Rank::Four,
        Rank::Five,
        Rank::Six,
        Rank::Seven,
        Rank::Eight,
        Rank::Nine,
        Rank::Ten,
        Rank::Jack,
        Rank::Queen,
        Rank::King,
    ];

    /// Numeric value used for sequence checks (ace = 1).
    #[must_use]
    pub const fn value(self) -> i32 {
        self as i32 + 1
    }

    /// Look up a rank by its numeric value.
    #[must_use]
    pub fn from_value(value: i32) -> Option<Self> {
        usize::try_from(value - 1)
            .ok()
            .and_then(|idx| Self::ALL.get(idx).copied())
    }

    /// Short display symbol ("A", "2", ..., "10", "J", "Q", "K").
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Rank::Ace => "A",
            Rank::Two => "2",
            Rank::Three => "3",
            Rank::Four => "4",
            Rank::Five => "5",
            Rank::Six => "6",
            Rank::Seven => "7",
            Rank::Eight => "8",
            Rank::Nine => "9",
            Rank::Ten => "10",
            Rank::Jack => "J",
            Rank::Queen => "Q",
            Rank::King => "K",
        }
    }

    /// Parse a short rank symbol.
    #[must_use]
    pub fn from_symbol(symbol: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|rank| rank.symbol() == symbol)
    }
}

impl std::fmt::Display for Rank {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.symbol())
    }
}

/// Card suit.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Suit {
    Clubs,
    Diamonds,
    Hearts,
    Spades,
}

impl Suit {
    /// All suits in deck construction order.
    pub const ALL: [Suit; 4] = [Suit::Clubs, Suit::Diamonds, Suit::Hearts, Suit::Spades];

    /// Single-character symbol.
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Suit::Clubs => '♣',
            Suit::Diamonds => '♦',
            Suit::Hearts => '♥',
            Suit::Spades => '♠',
        }
    }
}

impl std::fmt::Display for Suit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// A single playing card.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Card {
    /// Identity, unique within one game.
    pub id: CardId,
    pub rank: Rank,
    pub suit: Suit,
    /// Is the card turned face up?
    pub face_up: bool,
}

impl Card {
    /// Create a face-down card.
    #[must_use]
    pub const fn new(id: CardId, rank: Rank, suit: Suit) -> Self {
        Self {
            id,
            rank,
            suit,
            face_up: false,
        }
    }

    /// Builder: turn the card face up.
    #[must_use]
    pub const fn turned_up(mut self) -> Self {
        self.face_up = true;
        self
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.rank, self.suit)
    }
}

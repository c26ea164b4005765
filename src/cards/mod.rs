//! Card system: card values, piles and deck construction.
//!
//! ## Key Types
//!
//! - `CardId`: Unique identifier assigned at deal time
//! - `Rank` / `Suit`: Closed, fixed symbol sets (ace low)
//! - `Card`: One playing card with a face-up flag
//! - `CardStack`: Ordered pile, last element on top

pub mod card;
pub mod deck;
pub mod stack;

pub use card::{Card, CardId, Rank, Suit};
pub use deck::{build_decks, CARDS_PER_DECK, MAX_DECKS};
pub use stack::CardStack;

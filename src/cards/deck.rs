//! Deck construction.

use super::card::{Card, CardId, Rank, Suit};

/// Cards in one standard deck.
pub const CARDS_PER_DECK: usize = 52;

/// Most decks whose cards still get distinct `u32` ids.
pub const MAX_DECKS: usize = u32::MAX as usize / CARDS_PER_DECK;

/// Build `deck_count` standard decks, all face down.
///
/// Ids run `0..deck_count * 52` in enumeration order: deck, then suit,
/// then rank. Panics if `deck_count` exceeds [`MAX_DECKS`]; `RuleSet`
/// validation rejects such counts first.
#[must_use]
pub fn build_decks(deck_count: usize) -> Vec<Card> {
    assert!(
        deck_count <= MAX_DECKS,
        "At most {} decks supported",
        MAX_DECKS
    );
    let mut cards = Vec::with_capacity(deck_count * CARDS_PER_DECK);
    let mut next_id = 0u32;

    for _ in 0..deck_count {
        for suit in Suit::ALL {
            for rank in Rank::ALL {
                cards.push(Card::new(CardId(next_id), rank, suit));
                next_id += 1;
            }
        }
    }

    cards
}

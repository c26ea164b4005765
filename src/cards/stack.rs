//! Ordered card piles.
//!
//! The last element of a `CardStack` is its top: the exposed card of a
//! tableau column, or the next card to draw from the stock.

use serde::{Deserialize, Serialize};

use super::card::{Card, CardId};

/// An ordered pile of cards (stock or tableau column).
///
/// ## Usage
///
/// ```
/// use rust_patience::cards::{Card, CardId, CardStack, Rank, Suit};
///
/// let mut column = CardStack::new();
/// column.push(Card::new(CardId(0), Rank::Nine, Suit::Hearts));
/// column.push(Card::new(CardId(1), Rank::Eight, Suit::Hearts));
///
/// assert_eq!(column.top().map(|c| c.id), Some(CardId(1)));
/// assert_eq!(column.position(CardId(0)), Some(0));
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CardStack {
    cards: Vec<Card>,
}

impl CardStack {
    /// Create an empty pile.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a pile from cards listed bottom to top.
    #[must_use]
    pub fn from_cards(cards: Vec<Card>) -> Self {
        Self { cards }
    }

    /// Put a card on top.
    pub fn push(&mut self, card: Card) {
        self.cards.push(card);
    }

    /// Take the top card. `None` when the pile is empty.
    pub fn pop(&mut self) -> Option<Card> {
        self.cards.pop()
    }

    /// The top card, if any.
    #[must_use]
    pub fn top(&self) -> Option<&Card> {
        self.cards.last()
    }

    pub(crate) fn top_mut(&mut self) -> Option<&mut Card> {
        self.cards.last_mut()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Card at `row` (0 = bottom).
    #[must_use]
    pub fn get(&self, row: usize) -> Option<&Card> {
        self.cards.get(row)
    }

    /// Row of the card with the given id.
    #[must_use]
    pub fn position(&self, id: CardId) -> Option<usize> {
        self.cards.iter().position(|card| card.id == id)
    }

    /// Remove and return the run from `row` to the top.
    ///
    /// Returns an empty vec when `row` is past the top.
    pub fn split_off(&mut self, row: usize) -> Vec<Card> {
        if row >= self.cards.len() {
            return Vec::new();
        }
        self.cards.split_off(row)
    }

    /// Append a run on top, preserving its order.
    pub fn extend(&mut self, run: impl IntoIterator<Item = Card>) {
        self.cards.extend(run);
    }

    pub fn iter(&self) -> impl Iterator<Item = &Card> + '_ {
        self.cards.iter()
    }

    /// Cards bottom to top.
    #[must_use]
    pub fn as_slice(&self) -> &[Card] {
        &self.cards
    }
}

impl From<Vec<Card>> for CardStack {
    fn from(cards: Vec<Card>) -> Self {
        Self::from_cards(cards)
    }
}

impl<'a> IntoIterator for &'a CardStack {
    type Item = &'a Card;
    type IntoIter = std::slice::Iter<'a, Card>;

    fn into_iter(self) -> Self::IntoIter {
        self.cards.iter()
    }
}

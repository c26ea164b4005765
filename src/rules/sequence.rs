//! Run validation.

use crate::cards::Card;

/// Default step: each card one rank below the previous.
pub const DESCENDING: i32 = -1;

/// Does the run from `row` to the end of `column` form a movable sequence?
///
/// Every card after the one at `row` must share its suit and have a rank
/// value exactly `previous + step`. A run that reaches the end of the column
/// is valid, and a `row` at or past the end is vacuously valid.
///
/// ```
/// use rust_patience::cards::{Card, CardId, Rank, Suit};
/// use rust_patience::rules::{check_sequence, DESCENDING};
///
/// let column = [
///     Card::new(CardId(0), Rank::Seven, Suit::Spades),
///     Card::new(CardId(1), Rank::Six, Suit::Spades),
///     Card::new(CardId(2), Rank::Five, Suit::Spades),
/// ];
/// assert!(check_sequence(&column, 0, DESCENDING));
/// ```
#[must_use]
pub fn check_sequence(column: &[Card], row: usize, step: i32) -> bool {
    let Some(run) = column.get(row..) else {
        return true;
    };
    let Some(first) = run.first() else {
        return true;
    };

    run.windows(2).all(|pair| {
        pair[1].suit == first.suit && pair[1].rank.value() == pair[0].rank.value() + step
    })
}

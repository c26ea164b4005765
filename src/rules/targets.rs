//! Auto-move destination search.
//!
//! Candidates are the other columns in cyclic order starting just right of
//! the source. They are filtered three times, keeping that order:
//!
//! 1. `SameSuit`: top card one rank higher and the same suit
//! 2. `AnySuit`: top card one rank higher
//! 3. `Empty`: no cards
//!
//! The first hit of the highest tier wins. There is no lookahead.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::cards::{Card, CardStack};

/// Column indices in candidate order.
pub type CandidateOrder = SmallVec<[usize; 16]>;

/// Which filter selected the destination.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum TargetTier {
    SameSuit,
    AnySuit,
    Empty,
}

impl TargetTier {
    /// Tiers in priority order.
    pub const ALL: [TargetTier; 3] = [TargetTier::SameSuit, TargetTier::AnySuit, TargetTier::Empty];

    /// Would `pile` accept `moving` under this tier?
    #[must_use]
    pub fn accepts(self, pile: &CardStack, moving: &Card) -> bool {
        match (self, pile.top()) {
            (TargetTier::Empty, top) => top.is_none(),
            (TargetTier::AnySuit, Some(top)) => top.rank.value() == moving.rank.value() + 1,
            (TargetTier::SameSuit, Some(top)) => {
                top.rank.value() == moving.rank.value() + 1 && top.suit == moving.suit
            }
            (_, None) => false,
        }
    }
}

/// `[source+1 .. columns-1, 0 .. source-1]`.
#[must_use]
pub fn candidate_order(source: usize, columns: usize) -> CandidateOrder {
    (1..columns).map(|offset| (source + offset) % columns).collect()
}

/// Pick the destination column for a run headed by `moving`.
#[must_use]
pub fn choose_target(
    tableau: &[CardStack],
    source: usize,
    moving: &Card,
) -> Option<(usize, TargetTier)> {
    let order = candidate_order(source, tableau.len());

    TargetTier::ALL.into_iter().find_map(|tier| {
        order
            .iter()
            .copied()
            .find(|&col| tier.accepts(&tableau[col], moving))
            .map(|col| (col, tier))
    })
}

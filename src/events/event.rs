//! Change notifications.
//!
//! `GameState` never renders. Every mutation is announced with a
//! `GameEvent`, and the renderer treats that stream as its only source of
//! truth. The set of kinds is closed; each carries exactly what is needed
//! to animate the change.

use serde::{Deserialize, Serialize};

use crate::cards::{Card, CardId};

/// A notification emitted by `GameState`.
///
/// Rows and columns are 0-based; row 0 is the bottom of a column.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// A fresh shuffled stock was built. Cards are listed bottom to top.
    CreatedStock { cards: Vec<Card> },

    /// A card left the stock and landed at `(col, row)`.
    DealFromStock { card: Card, col: usize, row: usize },

    /// The top card of a column was turned face up.
    FlipTopCard { card: Card, col: usize, row: usize },

    /// The run starting with `card` at `(col, row)` moved onto `target_col`.
    MoveStack {
        card: Card,
        row: usize,
        col: usize,
        target_col: usize,
    },

    /// An auto-move request was rejected. No pile changed.
    AutoMoveFailed { card: CardId },

    /// The host should redraw every card from current state.
    SafetyRedraw,

    /// A line was appended to the history log.
    HistoryAdded { entry: String },
}

/// Event kind names.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EventKind {
    #[serde(rename = "created stock")]
    CreatedStock,
    #[serde(rename = "deal from stock")]
    DealFromStock,
    #[serde(rename = "flip top card")]
    FlipTopCard,
    #[serde(rename = "move stack")]
    MoveStack,
    #[serde(rename = "autoMove failed")]
    AutoMoveFailed,
    #[serde(rename = "safety redraw")]
    SafetyRedraw,
    #[serde(rename = "history")]
    HistoryAdded,
}

impl EventKind {
    /// Wire name of the kind.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            EventKind::CreatedStock => "created stock",
            EventKind::DealFromStock => "deal from stock",
            EventKind::FlipTopCard => "flip top card",
            EventKind::MoveStack => "move stack",
            EventKind::AutoMoveFailed => "autoMove failed",
            EventKind::SafetyRedraw => "safety redraw",
            EventKind::HistoryAdded => "history",
        }
    }

    /// Does this kind describe a change to the card model?
    #[must_use]
    pub const fn is_card_event(self) -> bool {
        !matches!(self, EventKind::HistoryAdded)
    }
}

impl std::fmt::Display for EventKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Flat `{kind, card?, row?, col?, target_col?}` view of an event.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventRecord {
    pub kind: EventKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub card: Option<CardId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub row: Option<usize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub col: Option<usize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_col: Option<usize>,
}

impl EventRecord {
    fn bare(kind: EventKind) -> Self {
        Self {
            kind,
            card: None,
            row: None,
            col: None,
            target_col: None,
        }
    }
}

impl GameEvent {
    #[must_use]
    pub fn kind(&self) -> EventKind {
        match self {
            GameEvent::CreatedStock { .. } => EventKind::CreatedStock,
            GameEvent::DealFromStock { .. } => EventKind::DealFromStock,
            GameEvent::FlipTopCard { .. } => EventKind::FlipTopCard,
            GameEvent::MoveStack { .. } => EventKind::MoveStack,
            GameEvent::AutoMoveFailed { .. } => EventKind::AutoMoveFailed,
            GameEvent::SafetyRedraw => EventKind::SafetyRedraw,
            GameEvent::HistoryAdded { .. } => EventKind::HistoryAdded,
        }
    }

    /// The card the event is about, if any.
    #[must_use]
    pub fn card_id(&self) -> Option<CardId> {
        match self {
            GameEvent::DealFromStock { card, .. }
            | GameEvent::FlipTopCard { card, .. }
            | GameEvent::MoveStack { card, .. } => Some(card.id),
            GameEvent::AutoMoveFailed { card } => Some(*card),
            GameEvent::CreatedStock { .. }
            | GameEvent::SafetyRedraw
            | GameEvent::HistoryAdded { .. } => None,
        }
    }

    /// Flatten into the wire-shaped record.
    #[must_use]
    pub fn record(&self) -> EventRecord {
        let mut record = EventRecord::bare(self.kind());
        record.card = self.card_id();
        match *self {
            GameEvent::DealFromStock { col, row, .. } | GameEvent::FlipTopCard { col, row, .. } => {
                record.col = Some(col);
                record.row = Some(row);
            }
            GameEvent::MoveStack {
                row,
                col,
                target_col,
                ..
            } => {
                record.row = Some(row);
                record.col = Some(col);
                record.target_col = Some(target_col);
            }
            _ => {}
        }
        record
    }
}

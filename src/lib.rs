//! # rust-patience
//!
//! A deterministic rules engine for Spider-style patience games.
//!
//! ## Design Principles
//!
//! 1. **Reproducible Deals**: A shuffle number is the save/replay key. The
//!    same number always produces the same deal on every platform.
//!
//! 2. **Notify, Don't Render**: `GameState` is the only mutator of the card
//!    model and announces every change as a `GameEvent`. Renderers subscribe
//!    and never poll.
//!
//! 3. **Player Actions Never Error**: Illegal moves and empty-stock draws
//!    are no-ops or `AutoMoveFailed` notifications. Only host mistakes
//!    (bad rulesets, inconsistent layouts) return `EngineError`.
//!
//! ## Example
//!
//! ```
//! use rust_patience::{AutoMoveOutcome, EventQueue, GameState, RuleSet};
//!
//! let mut game = GameState::new(RuleSet::spider());
//! let events = EventQueue::new();
//! game.subscribe(events.listener());
//!
//! game.start_new(1234);
//! let top = *game.column(0).and_then(|c| c.top()).unwrap();
//! let outcome = game.auto_move(top.id);
//! assert!(matches!(
//!     outcome,
//!     AutoMoveOutcome::Moved { .. } | AutoMoveOutcome::NoTarget
//! ));
//!
//! game.use_stock();
//! assert_eq!(game.card_count(), 104);
//! assert!(!events.drain().is_empty());
//! ```
//!
//! ## Modules
//!
//! - `cards`: Card values, piles, deck construction
//! - `core`: Ruleset, RNG, history, game state, snapshots
//! - `rules`: Run predicate and auto-move destination search
//! - `events`: Notifications and listener registration

pub mod cards;
pub mod core;
pub mod events;
pub mod rules;

// Re-export commonly used types
pub use crate::cards::{Card, CardId, CardStack, Rank, Suit};

pub use crate::core::{
    AutoMoveOutcome, EngineError, GameRng, GameState, History, RuleSet, Snapshot,
};

pub use crate::events::{
    EventDispatcher, EventKind, EventQueue, EventRecord, GameEvent, ListenerId,
};

pub use crate::rules::{check_sequence, choose_target, TargetTier, DESCENDING};

//! Core engine types: ruleset, RNG, history, state and snapshots.
//!
//! `GameState` is the only type that mutates cards. Everything else here
//! is configuration or plumbing it relies on.

pub mod config;
pub mod error;
pub mod history;
pub mod rng;
pub mod snapshot;
pub mod state;

pub use config::RuleSet;
pub use error::EngineError;
pub use history::History;
pub use rng::{random_shuffle_number, GameRng, MAX_RANDOM_SHUFFLE_NUMBER};
pub use snapshot::Snapshot;
pub use state::{AutoMoveOutcome, GameState};

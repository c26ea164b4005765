//! Serializable game snapshots.
//!
//! A `Snapshot` captures everything needed to rebuild a `GameState` except
//! its listeners. It encodes to compact bytes with bincode for save files,
//! or to any other serde format.

use serde::{Deserialize, Serialize};

use super::config::RuleSet;
use super::error::EngineError;
use super::history::History;
use crate::cards::CardStack;

/// Captured game state.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    pub rules: RuleSet,
    pub shuffle_number: u64,
    pub stock: CardStack,
    pub tableau: Vec<CardStack>,
    pub history: History,
}

impl Snapshot {
    /// Encode with bincode.
    pub fn to_bytes(&self) -> Result<Vec<u8>, EngineError> {
        bincode::serialize(self).map_err(|e| EngineError::Decode(e.to_string()))
    }

    /// Decode bytes produced by [`Snapshot::to_bytes`].
    ///
    /// The ruleset is re-validated while decoding.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, EngineError> {
        bincode::deserialize(bytes).map_err(|e| EngineError::Decode(e.to_string()))
    }
}

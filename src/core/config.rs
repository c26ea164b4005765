//! Ruleset configuration.
//!
//! A `RuleSet` describes the static shape of a game: how many decks are
//! combined, how many tableau columns there are, and how many cards the
//! opening deal places. It is validated once at construction and is
//! read-only afterwards.
//!
//! ## Usage
//!
//! ```
//! use rust_patience::core::RuleSet;
//!
//! let spider = RuleSet::spider();
//! assert_eq!(spider.columns(), 10);
//! assert_eq!(spider.seed_string(42), "spider_0000000042");
//!
//! let small = RuleSet::new("practice", 1, 7, 0)
//!     .and_then(|rules| rules.with_deal_per_column(3))
//!     .unwrap();
//! assert_eq!(small.initial_deal(), 21);
//!
//! assert!(RuleSet::new("broken", 0, 10, 0).is_err());
//! ```

use serde::{Deserialize, Serialize};

use super::error::EngineError;
use crate::cards::{CARDS_PER_DECK, MAX_DECKS};

/// Static ruleset descriptor.
///
/// Deserializing runs the same validation as [`RuleSet::new`]; a missing
/// field is a deserialization error.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RuleSetFields")]
pub struct RuleSet {
    name: String,
    deck_count: usize,
    columns: usize,
    initial_deal: usize,
}

#[derive(Deserialize)]
struct RuleSetFields {
    name: String,
    deck_count: usize,
    columns: usize,
    initial_deal: usize,
}

impl TryFrom<RuleSetFields> for RuleSet {
    type Error = EngineError;

    fn try_from(fields: RuleSetFields) -> Result<Self, Self::Error> {
        RuleSet::new(fields.name, fields.deck_count, fields.columns, fields.initial_deal)
    }
}

impl RuleSet {
    /// Create a validated ruleset.
    ///
    /// `initial_deal` is the number of cards `start_new` deals from the
    /// stock, round-robin across the columns.
    pub fn new(
        name: impl Into<String>,
        deck_count: usize,
        columns: usize,
        initial_deal: usize,
    ) -> Result<Self, EngineError> {
        let rules = Self {
            name: name.into(),
            deck_count,
            columns,
            initial_deal,
        };
        rules.validate()?;
        Ok(rules)
    }

    /// Two-deck Spider: ten columns, 54 cards in the opening deal.
    #[must_use]
    pub fn spider() -> Self {
        Self {
            name: "spider".to_string(),
            deck_count: 2,
            columns: 10,
            initial_deal: 54,
        }
    }

    /// Replace the opening deal with `per_column` cards in every column.
    pub fn with_deal_per_column(mut self, per_column: usize) -> Result<Self, EngineError> {
        self.initial_deal = per_column.checked_mul(self.columns).ok_or_else(|| {
            EngineError::InvalidRuleSet("initial deal overflows".to_string())
        })?;
        self.validate()?;
        Ok(self)
    }

    fn validate(&self) -> Result<(), EngineError> {
        if self.name.is_empty() {
            return Err(EngineError::InvalidRuleSet("name must not be empty".to_string()));
        }
        if self.deck_count == 0 {
            return Err(EngineError::InvalidRuleSet(
                "deck_count must be positive".to_string(),
            ));
        }
        if self.deck_count > MAX_DECKS {
            return Err(EngineError::InvalidRuleSet(format!(
                "deck_count {} exceeds the limit of {}",
                self.deck_count, MAX_DECKS
            )));
        }
        if self.columns == 0 {
            return Err(EngineError::InvalidRuleSet("columns must be positive".to_string()));
        }
        if self.initial_deal > self.card_count() {
            return Err(EngineError::InvalidRuleSet(format!(
                "initial_deal {} exceeds {} cards",
                self.initial_deal,
                self.card_count()
            )));
        }
        Ok(())
    }

    /// Game name, used as the seed-string prefix.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn deck_count(&self) -> usize {
        self.deck_count
    }

    /// Number of tableau columns.
    #[must_use]
    pub fn columns(&self) -> usize {
        self.columns
    }

    /// Cards dealt from stock when a game starts.
    #[must_use]
    pub fn initial_deal(&self) -> usize {
        self.initial_deal
    }

    /// Total cards in play. Validation caps `deck_count`, so this fits a
    /// `u32` card id.
    #[must_use]
    pub fn card_count(&self) -> usize {
        self.deck_count * CARDS_PER_DECK
    }

    /// Seed string for a shuffle number: `"<name>_"` plus the number
    /// zero-padded to 10 digits.
    #[must_use]
    pub fn seed_string(&self, shuffle_number: u64) -> String {
        format!("{}_{:010}", self.name, shuffle_number)
    }
}

impl Default for RuleSet {
    fn default() -> Self {
        Self::spider()
    }
}

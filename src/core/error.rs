//! Engine errors.
//!
//! Only programming errors in the host surface here: a malformed ruleset, an
//! inconsistent layout, or an undecodable snapshot. Player actions never
//! produce an `EngineError`.

use crate::cards::CardId;

/// Errors raised when building or restoring a game.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum EngineError {
    /// The ruleset descriptor is unusable.
    InvalidRuleSet(String),
    /// A layout does not have one pile per tableau column.
    ColumnCountMismatch { expected: usize, found: usize },
    /// The same card appears in more than one place.
    DuplicateCard(CardId),
    /// Snapshot bytes could not be decoded.
    Decode(String),
}

impl std::fmt::Display for EngineError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidRuleSet(s) => write!(f, "invalid ruleset: {}", s),
            Self::ColumnCountMismatch { expected, found } => {
                write!(f, "expected {} tableau columns, found {}", expected, found)
            }
            Self::DuplicateCard(id) => write!(f, "{} appears more than once", id),
            Self::Decode(s) => write!(f, "snapshot decode failed: {}", s),
        }
    }
}

impl std::error::Error for EngineError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        assert_eq!(
            EngineError::InvalidRuleSet("deck_count must be positive".into()).to_string(),
            "invalid ruleset: deck_count must be positive"
        );
        assert_eq!(
            EngineError::ColumnCountMismatch { expected: 10, found: 9 }.to_string(),
            "expected 10 tableau columns, found 9"
        );
        assert_eq!(
            EngineError::DuplicateCard(CardId(17)).to_string(),
            "Card(17) appears more than once"
        );
    }
}

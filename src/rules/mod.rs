//! Move rules.
//!
//! Pure functions with no access to `GameState`: the run predicate and the
//! auto-move destination search. `GameState` calls them and applies the
//! result.

pub mod sequence;
pub mod targets;

pub use sequence::{check_sequence, DESCENDING};
pub use targets::{candidate_order, choose_target, CandidateOrder, TargetTier};

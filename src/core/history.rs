//! Move history log.
//!
//! An append-only list of human-readable descriptions. The redo stack is
//! kept alongside it but nothing populates it yet: undo and redo are no-ops
//! until the engine records enough to reverse a move.

use im::Vector;
use serde::{Deserialize, Serialize};

/// Append-only history plus the (unused) redo stack.
///
/// Backed by `im::Vector`, so snapshotting a long game shares structure
/// instead of copying every entry.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct History {
    entries: Vector<String>,
    redo: Vector<String>,
}

impl History {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an entry.
    pub fn push(&mut self, entry: impl Into<String>) {
        self.entries.push_back(entry.into());
    }

    /// Entries, oldest first.
    #[must_use]
    pub fn entries(&self) -> &Vector<String> {
        &self.entries
    }

    /// The most recent entry.
    #[must_use]
    pub fn last(&self) -> Option<&String> {
        self.entries.last()
    }

    #[must_use]
    pub fn redo_stack(&self) -> &Vector<String> {
        &self.redo
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Drop every entry and the redo stack.
    pub fn clear(&mut self) {
        self.entries.clear();
        self.redo.clear();
    }
}

//! The check result record consumed by the calling engine.
//!
//! Every entry point in this crate returns a [`CheckOutcome`]. The shape is
//! the engine's de facto contract: a name, a map of change descriptions, a
//! success flag, a human-readable comment, and (for the renderer) the
//! rendered text chunks.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Outcome of a single check or render operation.
///
/// Invariant: `result` is `false` whenever `comment` carries an error
/// message, and `data` is populated only on renderer success.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CheckOutcome {
    /// Identifier for the operation: the target file path for the
    /// containment check, the failing source on a render failure.
    pub name: String,
    /// Change-kind to description. The containment check stores a unified
    /// diff under `"diff"` when it mutated the target.
    pub changes: BTreeMap<String, String>,
    /// Whether the operation succeeded.
    pub result: bool,
    /// Human-readable summary, or the error description on failure.
    pub comment: String,
    /// Rendered text chunks, one per source, in input order.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<Vec<String>>,
}

impl CheckOutcome {
    /// Create a successful outcome with no changes yet.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            changes: BTreeMap::new(),
            result: true,
            comment: String::new(),
            data: None,
        }
    }

    /// Turn this outcome into a failure carrying `comment`.
    ///
    /// Clears `data`: partial render output is never returned to callers.
    pub fn fail(mut self, comment: impl Into<String>) -> Self {
        self.result = false;
        self.comment = comment.into();
        self.data = None;
        self
    }
}

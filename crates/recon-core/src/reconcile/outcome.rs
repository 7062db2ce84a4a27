//! Options and outcome types for reconciliation

use std::fmt;

use recon_store::{DesiredEntry, Record};
use serde::Serialize;

/// Caller-supplied equality override
///
/// Returning `true` for a matched pair means the pair is already equivalent:
/// no update is scheduled and no field is applied. This is a short-circuit to
/// avoid redundant writes, not a correctness check.
pub type Comparator = Box<dyn Fn(&Record, &DesiredEntry) -> bool>;

/// Options for a reconcile call
#[derive(Default)]
pub struct ReconcileOptions {
    /// Optional equality override; absent means every match is updated
    pub comparator: Option<Comparator>,
    /// Delete every existing record whose key never appeared in the input
    pub delete_missing: bool,
}

impl ReconcileOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the equality override
    pub fn comparator<F>(mut self, comparator: F) -> Self
    where
        F: Fn(&Record, &DesiredEntry) -> bool + 'static,
    {
        self.comparator = Some(Box::new(comparator));
        self
    }

    /// Enable the deletion pass for unmatched existing records
    pub fn delete_missing(mut self, delete_missing: bool) -> Self {
        self.delete_missing = delete_missing;
        self
    }
}

impl fmt::Debug for ReconcileOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ReconcileOptions")
            .field("comparator", &self.comparator.is_some())
            .field("delete_missing", &self.delete_missing)
            .finish()
    }
}

/// The partition of records a reconcile call affected
///
/// Deleted records are not part of the outcome; their count is logged and
/// available to the store implementation itself.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ReconcileOutcome {
    /// Records newly persisted, with their assigned identities
    pub created: Vec<Record>,
    /// Records re-persisted with updated field values
    pub updated: Vec<Record>,
}

impl ReconcileOutcome {
    /// Whether the call wrote nothing
    pub fn is_unchanged(&self) -> bool {
        self.created.is_empty() && self.updated.is_empty()
    }
}

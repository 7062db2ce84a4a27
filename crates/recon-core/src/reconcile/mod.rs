//! Bulk reconciliation
//!
//! Given a record type, a store, and a desired-state list, compute and apply
//! the minimal create/update/delete operation set:
//!
//! - [`Reconciler`] — the engine
//! - [`ReconcileOptions`] — comparator and deletion-pass switches
//! - [`ReconcileOutcome`] — the created/updated partition

mod engine;
mod outcome;

pub use engine::Reconciler;
pub use outcome::{Comparator, ReconcileOptions, ReconcileOutcome};

//! Bulk reconciliation engine for record collections
//!
//! This crate provides the two storage-agnostic services of the workspace:
//!
//! - **Reconciler**: synchronize a persisted collection with a desired-state
//!   list using a constant number of bulk storage operations: one full
//!   load, then at most one bulk-create, one bulk-update, and (optionally)
//!   one bulk-delete, regardless of input size
//! - **Dynamic settings**: runtime-overridable configuration resolved
//!   through an ordered chain of sources (store-backed overrides over
//!   static defaults)
//!
//! # Architecture
//!
//! `recon-core` sits above the storage layer and is consumed by whatever
//! hosts the engine:
//!
//! ```text
//!        caller
//!           |
//!      recon-core        (Reconciler, DynamicSettings)
//!           |
//!      recon-store       (RecordType, Record, RecordStore, MemoryStore)
//!           |
//!     storage backend
//! ```
//!
//! # Example
//!
//! ```
//! use recon_core::{ReconcileOptions, Reconciler};
//! use recon_store::{DesiredEntry, MemoryStore, RecordType};
//!
//! let record_type = RecordType::new("products", ["sku", "price"], ["sku"]).unwrap();
//! let mut store = MemoryStore::new();
//!
//! let entries = vec![DesiredEntry::new().field("sku", "A").field("price", 10)];
//! let outcome = Reconciler::new(&mut store)
//!     .reconcile(&record_type, &entries, ReconcileOptions::default())
//!     .unwrap();
//! assert_eq!(outcome.created.len(), 1);
//! ```

pub mod error;
pub mod reconcile;
pub mod settings;

pub use error::{Error, Result};
pub use reconcile::{Comparator, ReconcileOptions, ReconcileOutcome, Reconciler};
pub use settings::{DynamicSettings, SettingSource, StaticDefaults, StoreOverrides};

//! Record data model and storage interface for the record reconciler
//!
//! This crate defines the contracts the reconciliation engine is written
//! against:
//!
//! - **Record types**: collection schemas with designated identifying fields
//! - **Records**: persisted rows with storage-assigned identities
//! - **Desired entries**: caller-supplied target states, with lazy values
//! - **RecordStore**: the bulk load/create/update/delete seam to storage
//! - **MemoryStore**: the in-memory reference implementation
//! - **SingletonStore**: get-or-create for fixed-identity rows
//!
//! Everything above this crate (`recon-core`) is storage-agnostic; external
//! systems adopt the engine by implementing [`RecordStore`] for their own
//! backend.

pub mod entry;
pub mod error;
pub mod memory;
pub mod record;
pub mod record_type;
pub mod singleton;
pub mod store;

pub use entry::{DesiredEntry, FieldValue};
pub use error::{Error, Result};
pub use memory::MemoryStore;
pub use record::{FieldMap, Record, RecordKey};
pub use record_type::RecordType;
pub use singleton::SingletonStore;
pub use store::RecordStore;

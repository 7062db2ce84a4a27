//! The storage interface consumed by the reconciler
//!
//! Implementations are expected to make each bulk operation atomic on its
//! own; nothing here provides atomicity across operations.

use std::collections::BTreeSet;

use crate::{FieldMap, Record, RecordType, Result};

/// Bulk access to one record collection per [`RecordType`]
///
/// The reconciler issues exactly one `load_all` and at most one of each bulk
/// call per reconciliation, so implementations should favor batch efficiency
/// over per-record convenience. All calls are blocking; callers needing
/// bounded execution time impose it at this boundary.
pub trait RecordStore {
    /// Load every record in the collection. A full scan, not a diff.
    fn load_all(&self, record_type: &RecordType) -> Result<Vec<Record>>;

    /// Persist new records from field maps, assigning identities
    ///
    /// Returns the created records in input order. The store enforces
    /// uniqueness of identifying-field values, both within the batch and
    /// against already-persisted records.
    fn bulk_create(&mut self, record_type: &RecordType, rows: Vec<FieldMap>) -> Result<Vec<Record>>;

    /// Re-persist the given records, writing only the named fields
    ///
    /// Records are matched by identity. A record carrying no value for one
    /// of `fields` leaves that field untouched in the store.
    fn bulk_update(
        &mut self,
        record_type: &RecordType,
        records: &[Record],
        fields: &BTreeSet<String>,
    ) -> Result<()>;

    /// Delete the given records by identity, returning how many were removed
    fn bulk_delete(&mut self, record_type: &RecordType, records: &[Record]) -> Result<usize>;
}

//! Get-or-create accessor for fixed-identity records
//!
//! Some collections hold exactly one row, such as process-wide settings or
//! feature flags. Rather than policing the save path, the
//! singleton is a record type whose identifying fields carry fixed values;
//! the store's unique-key constraint guarantees at most one such row exists,
//! and this accessor materializes it on first use.

use crate::{Error, FieldMap, Record, RecordKey, RecordStore, RecordType, Result};

/// Extension methods available on every [`RecordStore`]
pub trait SingletonStore: RecordStore {
    /// Fetch the singleton row for `record_type`, creating it from `seed` if
    /// it does not exist yet
    ///
    /// `seed` must carry the fixed identifying values and becomes the
    /// record's initial state on first creation; afterwards it is only used
    /// to locate the row.
    ///
    /// # Errors
    ///
    /// Returns [`Error::IncompleteKey`] if `seed` lacks an identifying
    /// value, or any storage error from the underlying load/create calls.
    fn get_or_create_singleton(
        &mut self,
        record_type: &RecordType,
        seed: &FieldMap,
    ) -> Result<Record> {
        let key = RecordKey::of_fields(record_type, seed)?;
        for record in self.load_all(record_type)? {
            if record.key(record_type)? == key {
                return Ok(record);
            }
        }

        tracing::debug!(
            collection = record_type.collection(),
            %key,
            "singleton not found, creating from seed"
        );
        let mut created = self.bulk_create(record_type, vec![seed.clone()])?;
        created
            .pop()
            .ok_or_else(|| Error::backend("bulk create returned no record for singleton seed"))
    }
}

impl<S: RecordStore + ?Sized> SingletonStore for S {}

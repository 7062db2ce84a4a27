//! Fault-injecting store wrapper
//!
//! Wraps a [`MemoryStore`] and fails exactly one configured operation,
//! leaving every other operation intact. Used to verify that storage errors
//! propagate unchanged and that a failure in a later apply phase leaves
//! earlier phases persisted.

use std::collections::BTreeSet;

use recon_store::{Error, FieldMap, MemoryStore, Record, RecordStore, RecordType, Result};

/// The operation that should fail
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailPoint {
    LoadAll,
    BulkCreate,
    BulkUpdate,
    BulkDelete,
}

/// A `RecordStore` that fails on one configured operation
pub struct FlakyStore {
    inner: MemoryStore,
    fail_at: Option<FailPoint>,
}

impl FlakyStore {
    pub fn new(inner: MemoryStore) -> Self {
        Self {
            inner,
            fail_at: None,
        }
    }

    /// Configure the operation that will fail
    pub fn fail_on(mut self, point: FailPoint) -> Self {
        self.fail_at = Some(point);
        self
    }

    /// The wrapped store, for post-failure assertions
    pub fn inner(&self) -> &MemoryStore {
        &self.inner
    }

    fn trip(&self, point: FailPoint) -> Result<()> {
        if self.fail_at == Some(point) {
            return Err(Error::backend(format!("injected failure at {:?}", point)));
        }
        Ok(())
    }
}

impl RecordStore for FlakyStore {
    fn load_all(&self, record_type: &RecordType) -> Result<Vec<Record>> {
        self.trip(FailPoint::LoadAll)?;
        self.inner.load_all(record_type)
    }

    fn bulk_create(&mut self, record_type: &RecordType, rows: Vec<FieldMap>) -> Result<Vec<Record>> {
        self.trip(FailPoint::BulkCreate)?;
        self.inner.bulk_create(record_type, rows)
    }

    fn bulk_update(
        &mut self,
        record_type: &RecordType,
        records: &[Record],
        fields: &BTreeSet<String>,
    ) -> Result<()> {
        self.trip(FailPoint::BulkUpdate)?;
        self.inner.bulk_update(record_type, records, fields)
    }

    fn bulk_delete(&mut self, record_type: &RecordType, records: &[Record]) -> Result<usize> {
        self.trip(FailPoint::BulkDelete)?;
        self.inner.bulk_delete(record_type, records)
    }
}

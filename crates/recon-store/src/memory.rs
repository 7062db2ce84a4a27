//! In-memory reference store
//!
//! `MemoryStore` backs the test suites and the settings provider, and serves
//! as the behavioral reference for external [`RecordStore`] implementations:
//! implicit collections, identities assigned on create, the unique-key
//! constraint enforced at create time, and update/delete matched by identity.

use std::collections::{BTreeSet, HashMap};

use uuid::Uuid;

use crate::{Error, FieldMap, Record, RecordKey, RecordStore, RecordType, Result};

/// A `RecordStore` holding everything in process memory
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    collections: HashMap<String, Vec<Record>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of records currently held for `collection`
    pub fn len(&self, collection: &str) -> usize {
        self.collections.get(collection).map_or(0, Vec::len)
    }

    pub fn is_empty(&self, collection: &str) -> bool {
        self.len(collection) == 0
    }
}

impl RecordStore for MemoryStore {
    fn load_all(&self, record_type: &RecordType) -> Result<Vec<Record>> {
        Ok(self
            .collections
            .get(record_type.collection())
            .cloned()
            .unwrap_or_default())
    }

    fn bulk_create(&mut self, record_type: &RecordType, rows: Vec<FieldMap>) -> Result<Vec<Record>> {
        let collection = self
            .collections
            .entry(record_type.collection().to_string())
            .or_default();

        let mut taken: BTreeSet<RecordKey> = BTreeSet::new();
        for record in collection.iter() {
            taken.insert(record.key(record_type)?);
        }

        let mut created = Vec::with_capacity(rows.len());
        for row in rows {
            let key = RecordKey::of_fields(record_type, &row)?;
            if !taken.insert(key.clone()) {
                return Err(Error::UniqueViolation {
                    collection: record_type.collection().to_string(),
                    key: key.to_string(),
                });
            }
            created.push(Record::new(Uuid::new_v4(), row));
        }

        collection.extend(created.iter().cloned());
        Ok(created)
    }

    fn bulk_update(
        &mut self,
        record_type: &RecordType,
        records: &[Record],
        fields: &BTreeSet<String>,
    ) -> Result<()> {
        let collection = self
            .collections
            .entry(record_type.collection().to_string())
            .or_default();

        for record in records {
            let stored = collection
                .iter_mut()
                .find(|candidate| candidate.id() == record.id())
                .ok_or(Error::UnknownRecord {
                    collection: record_type.collection().to_string(),
                    id: record.id(),
                })?;
            for field in fields {
                if let Some(value) = record.get(field) {
                    stored.set(field.clone(), value.clone());
                }
            }
        }
        Ok(())
    }

    fn bulk_delete(&mut self, record_type: &RecordType, records: &[Record]) -> Result<usize> {
        let Some(collection) = self.collections.get_mut(record_type.collection()) else {
            return Ok(0);
        };
        let before = collection.len();
        collection.retain(|stored| !records.iter().any(|record| record.id() == stored.id()));
        Ok(before - collection.len())
    }
}

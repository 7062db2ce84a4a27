//! Store-backed setting overrides
//!
//! Overrides live in a singleton record so they can be changed at runtime
//! through ordinary storage writes and survive process restarts. Reads go
//! through to the store on every access.

use std::collections::BTreeSet;

use recon_store::{FieldMap, RecordStore, RecordType, SingletonStore};
use serde_json::Value;

use super::provider::SettingSource;
use crate::{Error, Result};

/// The store-backed override backend
///
/// Each non-identifying field of the singleton record type is a setting
/// name. A field holding a non-null value overrides; a null or absent field
/// defers to the next source in the chain.
pub struct StoreOverrides<S: RecordStore> {
    store: S,
    record_type: RecordType,
    seed: FieldMap,
}

impl<S: RecordStore> StoreOverrides<S> {
    /// Create the backend over `store`
    ///
    /// `record_type` describes the singleton collection; `seed` carries its
    /// fixed identifying values and the initial state written when the
    /// singleton record is first materialized.
    pub fn new(store: S, record_type: RecordType, seed: FieldMap) -> Self {
        Self {
            store,
            record_type,
            seed,
        }
    }

    /// Write an override, visible to every subsequent read
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownSetting`] if `name` is not a non-identifying
    /// field of the singleton record type, or a storage error from the
    /// write.
    pub fn set(&mut self, name: &str, value: Value) -> Result<()> {
        if !self.is_setting(name) {
            return Err(Error::UnknownSetting {
                name: name.to_string(),
            });
        }

        let mut record = self
            .store
            .get_or_create_singleton(&self.record_type, &self.seed)?;
        record.set(name, value);
        let fields: BTreeSet<String> = [name.to_string()].into();
        self.store
            .bulk_update(&self.record_type, std::slice::from_ref(&record), &fields)?;
        Ok(())
    }

    /// Shared access to the underlying store
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Identifying fields hold the singleton's fixed identity, not settings
    fn is_setting(&self, name: &str) -> bool {
        self.record_type.has_field(name) && !self.record_type.is_key_field(name)
    }
}

impl<S: RecordStore> SettingSource for StoreOverrides<S> {
    fn get(&mut self, name: &str) -> Result<Option<Value>> {
        if !self.is_setting(name) {
            return Ok(None);
        }
        let record = self
            .store
            .get_or_create_singleton(&self.record_type, &self.seed)?;
        Ok(record.get(name).filter(|value| !value.is_null()).cloned())
    }
}

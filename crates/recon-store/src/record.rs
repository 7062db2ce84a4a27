//! Persisted records and identifying keys

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use uuid::Uuid;

use crate::{Error, RecordType, Result};

/// Field values keyed by field name
pub type FieldMap = BTreeMap<String, Value>;

/// An already-persisted record
///
/// The identity is storage-assigned and opaque; reconciliation matches on
/// identifying-field values, never on the identity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    id: Uuid,
    values: FieldMap,
}

impl Record {
    pub fn new(id: Uuid, values: FieldMap) -> Self {
        Self { id, values }
    }

    /// The storage-assigned identity
    pub fn id(&self) -> Uuid {
        self.id
    }

    /// Value of `field`, if the record carries one
    pub fn get(&self, field: &str) -> Option<&Value> {
        self.values.get(field)
    }

    /// Set `field` to `value`, replacing any previous value
    pub fn set(&mut self, field: impl Into<String>, value: Value) {
        self.values.insert(field.into(), value);
    }

    /// All field values
    pub fn values(&self) -> &FieldMap {
        &self.values
    }

    /// The record's identifying key under `record_type`
    ///
    /// # Errors
    ///
    /// Returns [`Error::IncompleteKey`] if the record lacks a value for any
    /// identifying field.
    pub fn key(&self, record_type: &RecordType) -> Result<RecordKey> {
        RecordKey::of_fields(record_type, &self.values)
    }
}

/// Composite natural key: the identifying-field values in key order
///
/// Components are canonicalized to their JSON text so the key is hashable
/// and ordered even though `serde_json::Value` is neither.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RecordKey(Vec<String>);

impl RecordKey {
    /// Build a key from values already in key order
    pub fn from_values<'a>(values: impl IntoIterator<Item = &'a Value>) -> Self {
        Self(values.into_iter().map(Value::to_string).collect())
    }

    /// Extract the key of `fields` under `record_type`
    ///
    /// # Errors
    ///
    /// Returns [`Error::IncompleteKey`] if `fields` has no value for one of
    /// the identifying fields.
    pub fn of_fields(record_type: &RecordType, fields: &FieldMap) -> Result<Self> {
        let mut components = Vec::with_capacity(record_type.key_fields().len());
        for field in record_type.key_fields() {
            let value = fields.get(field).ok_or_else(|| Error::IncompleteKey {
                collection: record_type.collection().to_string(),
                field: field.clone(),
            })?;
            components.push(value.to_string());
        }
        Ok(Self(components))
    }
}

impl fmt::Display for RecordKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({})", self.0.join(", "))
    }
}

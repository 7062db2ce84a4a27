//! Record type schemas
//!
//! A `RecordType` names a storage collection, its fields, and the subset of
//! fields that together form the natural key used for matching.

use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// Schema for one storage collection
///
/// The identifying fields are the composite natural key: every desired entry
/// must carry a value for each of them, and the store enforces their
/// uniqueness across the collection. The storage-assigned record identity is
/// deliberately not part of the schema; matching never uses it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecordType {
    /// Collection identifier in the backing store
    collection: String,
    /// All declared field names, in declaration order
    fields: Vec<String>,
    /// The subset of `fields` forming the natural key, in key order
    key_fields: Vec<String>,
}

impl RecordType {
    /// Create a record type
    ///
    /// # Errors
    ///
    /// Returns an error if `key_fields` is empty or names a field that is
    /// not in `fields`.
    pub fn new<C, F, K>(collection: C, fields: F, key_fields: K) -> Result<Self>
    where
        C: Into<String>,
        F: IntoIterator,
        F::Item: Into<String>,
        K: IntoIterator,
        K::Item: Into<String>,
    {
        let collection = collection.into();
        let fields: Vec<String> = fields.into_iter().map(Into::into).collect();
        let key_fields: Vec<String> = key_fields.into_iter().map(Into::into).collect();

        if key_fields.is_empty() {
            return Err(Error::NoIdentifyingFields { collection });
        }
        for field in &key_fields {
            if !fields.contains(field) {
                return Err(Error::UnknownKeyField {
                    collection,
                    field: field.clone(),
                });
            }
        }

        Ok(Self {
            collection,
            fields,
            key_fields,
        })
    }

    /// The collection identifier
    pub fn collection(&self) -> &str {
        &self.collection
    }

    /// All declared field names
    pub fn fields(&self) -> &[String] {
        &self.fields
    }

    /// The identifying-field names, in key order
    pub fn key_fields(&self) -> &[String] {
        &self.key_fields
    }

    /// Whether `name` is a declared field
    pub fn has_field(&self, name: &str) -> bool {
        self.fields.iter().any(|f| f == name)
    }

    /// Whether `name` is one of the identifying fields
    pub fn is_key_field(&self, name: &str) -> bool {
        self.key_fields.iter().any(|f| f == name)
    }
}

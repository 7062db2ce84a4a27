//! Desired-state entries
//!
//! A [`DesiredEntry`] is one caller-supplied target state for a record. Field
//! values are either literals or zero-argument producers; producers are
//! evaluated only when the entry is applied, so entries like "set updated_at
//! to now()" take their value at apply time rather than at construction.

use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

use serde_json::Value;

use crate::FieldMap;

/// A field value in a desired entry
#[derive(Clone)]
pub enum FieldValue {
    /// A plain value
    Literal(Value),
    /// A producer evaluated when the entry is applied
    Computed(Arc<dyn Fn() -> Value + Send + Sync>),
}

impl FieldValue {
    /// The concrete value: the literal, or the producer's output
    pub fn resolve(&self) -> Value {
        match self {
            Self::Literal(value) => value.clone(),
            Self::Computed(producer) => producer(),
        }
    }

    /// The literal value, if this is not a producer
    pub fn literal(&self) -> Option<&Value> {
        match self {
            Self::Literal(value) => Some(value),
            Self::Computed(_) => None,
        }
    }
}

impl fmt::Debug for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Literal(value) => f.debug_tuple("Literal").field(value).finish(),
            Self::Computed(_) => f.write_str("Computed(..)"),
        }
    }
}

impl From<Value> for FieldValue {
    fn from(value: Value) -> Self {
        Self::Literal(value)
    }
}

/// One target state, keyed by its identifying-field values
///
/// Identifying fields must be supplied as literals. Non-identifying fields
/// may be omitted; an omitted field is left untouched when the entry updates
/// an existing record.
///
/// # Example
///
/// ```
/// use recon_store::DesiredEntry;
/// use serde_json::json;
///
/// let entry = DesiredEntry::new()
///     .field("sku", "A-1")
///     .field("price", 20)
///     .computed("updated_at", || json!("2026-08-07T00:00:00Z"));
/// assert!(entry.get("price").is_some());
/// ```
#[derive(Debug, Clone, Default)]
pub struct DesiredEntry {
    fields: BTreeMap<String, FieldValue>,
}

impl DesiredEntry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a literal field value
    pub fn field(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.fields
            .insert(name.into(), FieldValue::Literal(value.into()));
        self
    }

    /// Add a lazily-produced field value
    pub fn computed<F>(mut self, name: impl Into<String>, producer: F) -> Self
    where
        F: Fn() -> Value + Send + Sync + 'static,
    {
        self.fields
            .insert(name.into(), FieldValue::Computed(Arc::new(producer)));
        self
    }

    /// Value supplied for `name`, if any
    pub fn get(&self, name: &str) -> Option<&FieldValue> {
        self.fields.get(name)
    }

    /// All supplied fields
    pub fn fields(&self) -> &BTreeMap<String, FieldValue> {
        &self.fields
    }

    /// Resolve every field, evaluating producers
    pub fn resolved(&self) -> FieldMap {
        self.fields
            .iter()
            .map(|(name, value)| (name.clone(), value.resolve()))
            .collect()
    }
}

impl From<FieldMap> for DesiredEntry {
    fn from(fields: FieldMap) -> Self {
        Self {
            fields: fields
                .into_iter()
                .map(|(name, value)| (name, FieldValue::Literal(value)))
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[test]
    fn builder_collects_fields() {
        let entry = DesiredEntry::new().field("sku", "A-1").field("price", 10);
        assert_eq!(entry.fields().len(), 2);
        assert_eq!(entry.get("sku").unwrap().literal(), Some(&json!("A-1")));
    }

    #[test]
    fn computed_fields_are_not_evaluated_until_resolved() {
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&calls);
        let entry = DesiredEntry::new().computed("stamp", move || {
            counter.fetch_add(1, Ordering::SeqCst);
            json!("now")
        });

        assert_eq!(calls.load(Ordering::SeqCst), 0);
        assert!(entry.get("stamp").unwrap().literal().is_none());

        let resolved = entry.resolved();
        assert_eq!(resolved.get("stamp"), Some(&json!("now")));
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn from_field_map_keeps_values_literal() {
        let mut map = FieldMap::new();
        map.insert("sku".to_string(), json!("A-1"));
        let entry = DesiredEntry::from(map);
        assert_eq!(entry.get("sku").unwrap().literal(), Some(&json!("A-1")));
    }
}

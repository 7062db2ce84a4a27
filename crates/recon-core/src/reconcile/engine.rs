//! Reconciler implementation
//!
//! The Reconciler synchronizes a record collection with a desired-state
//! list using a bounded number of storage round-trips: one full load, then
//! at most one bulk-create, one bulk-update, and one bulk-delete.

use std::collections::{BTreeMap, BTreeSet, HashMap};

use recon_store::{
    DesiredEntry, FieldMap, FieldValue, Record, RecordKey, RecordStore, RecordType,
};
use serde_json::Value;

use super::outcome::{ReconcileOptions, ReconcileOutcome};
use crate::{Error, Result};

/// Classification of one identifying key during the entry walk
enum Slot {
    /// No existing record matched: create from the accumulated fields
    Create(FieldMap),
    /// An existing record matched and is scheduled for update
    Update(Record),
    /// An existing record matched but the comparator declared it equivalent
    Skipped(Record),
}

/// Engine for reconciling desired state against a record store
///
/// One call performs the full classification and apply cycle:
///
/// - **create**: desired entries whose key matches no existing record
/// - **update**: matched records, unless the comparator skips them
/// - **delete**: optionally, existing records never matched by any entry
///
/// The engine owns no state between calls; every call starts from a fresh
/// full load of the collection. Concurrent calls against the same record
/// type are not coordinated here; callers serialize externally.
pub struct Reconciler<'a, S: RecordStore> {
    store: &'a mut S,
}

impl<'a, S: RecordStore> Reconciler<'a, S> {
    pub fn new(store: &'a mut S) -> Self {
        Self { store }
    }

    /// Reconcile `entries` into the collection described by `record_type`
    ///
    /// Entries are processed in order; if several entries share an
    /// identifying key, each re-applies its fields to the record classified
    /// by the first occurrence, so the last entry wins per field.
    ///
    /// All entries are validated before any storage call: a validation error
    /// leaves the store completely unmodified. The three apply phases are
    /// individually atomic (per the store's own guarantee) but not
    /// transactional across phases; a failure in a later phase leaves
    /// earlier phases persisted.
    ///
    /// # Errors
    ///
    /// Returns an entry-validation error ([`Error::MissingIdentifyingField`],
    /// [`Error::ComputedIdentifyingField`], [`Error::UnknownField`]) or a
    /// storage error propagated unchanged from the store.
    pub fn reconcile(
        &mut self,
        record_type: &RecordType,
        entries: &[DesiredEntry],
        options: ReconcileOptions,
    ) -> Result<ReconcileOutcome> {
        let keys = validate_entries(record_type, entries)?;

        let existing = self.store.load_all(record_type)?;
        tracing::debug!(
            collection = record_type.collection(),
            existing = existing.len(),
            entries = entries.len(),
            "loaded existing records"
        );

        let mut unmatched: BTreeMap<RecordKey, Record> = BTreeMap::new();
        for record in existing {
            let key = record.key(record_type)?;
            unmatched.insert(key, record);
        }

        let mut slots: HashMap<RecordKey, Slot> = HashMap::new();
        let mut order: Vec<RecordKey> = Vec::new();
        let mut write_fields: BTreeSet<String> = BTreeSet::new();

        for (entry, key) in entries.iter().zip(keys) {
            match slots.remove(&key) {
                Some(Slot::Create(mut row)) => {
                    for (name, value) in entry.fields() {
                        row.insert(name.clone(), value.resolve());
                    }
                    slots.insert(key, Slot::Create(row));
                }
                Some(Slot::Update(mut record)) => {
                    apply_update(record_type, &mut record, entry, &mut write_fields);
                    slots.insert(key, Slot::Update(record));
                }
                Some(Slot::Skipped(mut record)) => {
                    // A skipped record is re-examined by each later duplicate
                    // and promoted once the comparator declines an entry.
                    if equivalent(&options, &record, entry) {
                        slots.insert(key, Slot::Skipped(record));
                    } else {
                        apply_update(record_type, &mut record, entry, &mut write_fields);
                        slots.insert(key, Slot::Update(record));
                    }
                }
                None => {
                    let slot = match unmatched.remove(&key) {
                        Some(mut record) => {
                            if equivalent(&options, &record, entry) {
                                Slot::Skipped(record)
                            } else {
                                apply_update(record_type, &mut record, entry, &mut write_fields);
                                Slot::Update(record)
                            }
                        }
                        None => Slot::Create(entry.resolved()),
                    };
                    order.push(key.clone());
                    slots.insert(key, slot);
                }
            }
        }

        let mut rows = Vec::new();
        let mut updated = Vec::new();
        let mut skipped = 0usize;
        for key in &order {
            match slots.remove(key) {
                Some(Slot::Create(row)) => rows.push(row),
                Some(Slot::Update(record)) => updated.push(record),
                Some(Slot::Skipped(_)) => skipped += 1,
                None => {}
            }
        }

        // Apply phases: empty sets issue no call
        let created = if rows.is_empty() {
            Vec::new()
        } else {
            self.store.bulk_create(record_type, rows)?
        };
        if !updated.is_empty() {
            self.store.bulk_update(record_type, &updated, &write_fields)?;
        }
        let deleted = if options.delete_missing && !unmatched.is_empty() {
            let leftovers: Vec<Record> = unmatched.into_values().collect();
            self.store.bulk_delete(record_type, &leftovers)?
        } else {
            0
        };

        tracing::info!(
            collection = record_type.collection(),
            created = created.len(),
            updated = updated.len(),
            skipped,
            deleted,
            "reconciliation applied"
        );

        Ok(ReconcileOutcome { created, updated })
    }
}

/// Check every entry and extract its identifying key
///
/// Runs to completion before any storage access so a failing entry leaves
/// the store untouched, including entries after the failing one.
fn validate_entries(record_type: &RecordType, entries: &[DesiredEntry]) -> Result<Vec<RecordKey>> {
    let mut keys = Vec::with_capacity(entries.len());
    for (index, entry) in entries.iter().enumerate() {
        for name in entry.fields().keys() {
            if !record_type.has_field(name) {
                return Err(Error::UnknownField {
                    collection: record_type.collection().to_string(),
                    field: name.clone(),
                    index,
                });
            }
        }

        let mut components: Vec<&Value> = Vec::with_capacity(record_type.key_fields().len());
        for field in record_type.key_fields() {
            match entry.get(field) {
                None => {
                    return Err(Error::MissingIdentifyingField {
                        collection: record_type.collection().to_string(),
                        field: field.clone(),
                        index,
                    });
                }
                Some(FieldValue::Computed(_)) => {
                    return Err(Error::ComputedIdentifyingField {
                        collection: record_type.collection().to_string(),
                        field: field.clone(),
                        index,
                    });
                }
                Some(FieldValue::Literal(value)) => components.push(value),
            }
        }
        keys.push(RecordKey::from_values(components));
    }
    Ok(keys)
}

fn equivalent(options: &ReconcileOptions, record: &Record, entry: &DesiredEntry) -> bool {
    options
        .comparator
        .as_ref()
        .map_or(false, |comparator| comparator(record, entry))
}

/// Apply the entry's non-identifying fields to a matched record
///
/// Producers are resolved here, at apply time. Identifying fields are never
/// rewritten; their values are equal by construction of the match.
fn apply_update(
    record_type: &RecordType,
    record: &mut Record,
    entry: &DesiredEntry,
    write_fields: &mut BTreeSet<String>,
) {
    for (name, value) in entry.fields() {
        if record_type.is_key_field(name) {
            continue;
        }
        record.set(name.clone(), value.resolve());
        write_fields.insert(name.clone());
    }
}

//! Tests for the in-memory reference store

use std::collections::BTreeSet;

use pretty_assertions::assert_eq;
use recon_store::{Error, FieldMap, MemoryStore, Record, RecordStore, RecordType};
use serde_json::json;
use uuid::Uuid;

fn product_type() -> RecordType {
    RecordType::new("products", ["sku", "name", "price"], ["sku"]).unwrap()
}

fn row(sku: &str, name: &str, price: i64) -> FieldMap {
    let mut map = FieldMap::new();
    map.insert("sku".to_string(), json!(sku));
    map.insert("name".to_string(), json!(name));
    map.insert("price".to_string(), json!(price));
    map
}

#[test]
fn load_all_on_untouched_collection_is_empty() {
    let store = MemoryStore::new();
    let records = store.load_all(&product_type()).unwrap();
    assert!(records.is_empty());
}

#[test]
fn bulk_create_assigns_identities_in_input_order() {
    let mut store = MemoryStore::new();
    let rt = product_type();

    let created = store
        .bulk_create(&rt, vec![row("A", "widget", 10), row("B", "gadget", 5)])
        .unwrap();

    assert_eq!(created.len(), 2);
    assert_eq!(created[0].get("sku"), Some(&json!("A")));
    assert_eq!(created[1].get("sku"), Some(&json!("B")));
    assert_ne!(created[0].id(), created[1].id());

    let loaded = store.load_all(&rt).unwrap();
    assert_eq!(loaded, created);
}

#[test]
fn bulk_create_rejects_duplicate_key_within_batch() {
    let mut store = MemoryStore::new();
    let rt = product_type();

    let err = store
        .bulk_create(&rt, vec![row("A", "widget", 10), row("A", "other", 1)])
        .unwrap_err();
    assert!(matches!(err, Error::UniqueViolation { .. }));
}

#[test]
fn bulk_create_rejects_duplicate_key_against_stored_records() {
    let mut store = MemoryStore::new();
    let rt = product_type();
    store.bulk_create(&rt, vec![row("A", "widget", 10)]).unwrap();

    let err = store
        .bulk_create(&rt, vec![row("A", "again", 2)])
        .unwrap_err();
    assert!(matches!(err, Error::UniqueViolation { .. }));
}

#[test]
fn bulk_update_writes_only_named_fields() {
    let mut store = MemoryStore::new();
    let rt = product_type();
    let mut record = store
        .bulk_create(&rt, vec![row("A", "widget", 10)])
        .unwrap()
        .remove(0);

    // Both fields change on the in-memory record, but only price is written
    record.set("price", json!(20));
    record.set("name", json!("renamed"));
    let fields: BTreeSet<String> = ["price".to_string()].into();
    store.bulk_update(&rt, std::slice::from_ref(&record), &fields).unwrap();

    let stored = store.load_all(&rt).unwrap().remove(0);
    assert_eq!(stored.get("price"), Some(&json!(20)));
    assert_eq!(stored.get("name"), Some(&json!("widget")));
}

#[test]
fn bulk_update_unknown_identity_errors() {
    let mut store = MemoryStore::new();
    let rt = product_type();
    store.bulk_create(&rt, vec![row("A", "widget", 10)]).unwrap();

    let phantom = Record::new(Uuid::new_v4(), row("Z", "phantom", 0));
    let fields: BTreeSet<String> = ["price".to_string()].into();
    let err = store
        .bulk_update(&rt, std::slice::from_ref(&phantom), &fields)
        .unwrap_err();
    assert!(matches!(err, Error::UnknownRecord { .. }));
}

#[test]
fn bulk_delete_returns_removed_count() {
    let mut store = MemoryStore::new();
    let rt = product_type();
    let created = store
        .bulk_create(&rt, vec![row("A", "widget", 10), row("B", "gadget", 5)])
        .unwrap();

    let phantom = Record::new(Uuid::new_v4(), row("Z", "phantom", 0));
    let mut victims = created.clone();
    victims.push(phantom);

    let deleted = store.bulk_delete(&rt, &victims).unwrap();
    assert_eq!(deleted, 2);
    assert!(store.is_empty("products"));
}

#[test]
fn collections_are_independent() {
    let mut store = MemoryStore::new();
    let products = product_type();
    let vendors = RecordType::new("vendors", ["code", "name"], ["code"]).unwrap();

    store
        .bulk_create(&products, vec![row("A", "widget", 10)])
        .unwrap();

    let mut vendor = FieldMap::new();
    vendor.insert("code".to_string(), json!("acme"));
    vendor.insert("name".to_string(), json!("Acme Corp"));
    store.bulk_create(&vendors, vec![vendor]).unwrap();

    assert_eq!(store.len("products"), 1);
    assert_eq!(store.len("vendors"), 1);
    assert_eq!(store.load_all(&products).unwrap().len(), 1);
}

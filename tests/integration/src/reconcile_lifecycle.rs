//! End-to-end reconciliation lifecycle
//!
//! Drives a collection through the full feed cycle an adopting system runs:
//! initial import, partial re-feed, comparator-guarded refresh, and a final
//! authoritative feed with the deletion pass enabled.

use pretty_assertions::assert_eq;
use recon_core::{ReconcileOptions, Reconciler};
use recon_store::{DesiredEntry, MemoryStore, RecordStore};
use recon_test_utils::catalog::product_type;
use serde_json::json;

fn feed_entry(sku: &str, name: &str, price: i64, stock: i64) -> DesiredEntry {
    DesiredEntry::new()
        .field("sku", sku)
        .field("name", name)
        .field("price", price)
        .field("stock", stock)
}

#[test]
fn full_feed_cycle_converges_to_the_last_feed() {
    let rt = product_type();
    let mut store = MemoryStore::new();

    // 1. Initial import: everything is a create
    let initial = vec![
        feed_entry("A", "widget", 10, 100),
        feed_entry("B", "gadget", 5, 40),
        feed_entry("C", "gizmo", 7, 0),
    ];
    let outcome = Reconciler::new(&mut store)
        .reconcile(&rt, &initial, ReconcileOptions::default())
        .unwrap();
    assert_eq!(outcome.created.len(), 3);
    assert!(outcome.updated.is_empty());

    // identities were assigned by the store
    let ids: Vec<_> = outcome.created.iter().map(|r| r.id()).collect();
    assert_eq!(ids.len(), 3);

    // 2. Partial re-feed: price changes only, names untouched
    let price_update = vec![
        DesiredEntry::new().field("sku", "A").field("price", 12),
        DesiredEntry::new().field("sku", "B").field("price", 6),
    ];
    let outcome = Reconciler::new(&mut store)
        .reconcile(&rt, &price_update, ReconcileOptions::default())
        .unwrap();
    assert!(outcome.created.is_empty());
    assert_eq!(outcome.updated.len(), 2);

    let records = store.load_all(&rt).unwrap();
    let a = records.iter().find(|r| r.get("sku") == Some(&json!("A"))).unwrap();
    assert_eq!(a.get("price"), Some(&json!(12)));
    assert_eq!(a.get("name"), Some(&json!("widget")));

    // the updated record keeps the identity assigned at creation
    assert!(ids.contains(&a.id()));

    // 3. Comparator-guarded refresh: identical feed writes nothing
    let identical = vec![
        DesiredEntry::new().field("sku", "A").field("price", 12),
        DesiredEntry::new().field("sku", "B").field("price", 6),
    ];
    let outcome = Reconciler::new(&mut store)
        .reconcile(
            &rt,
            &identical,
            ReconcileOptions::new().comparator(|record, entry| {
                entry.fields().iter().all(|(name, value)| {
                    value
                        .literal()
                        .is_some_and(|literal| record.get(name) == Some(literal))
                })
            }),
        )
        .unwrap();
    assert!(outcome.is_unchanged());

    // 4. Authoritative feed: C is gone from the source, so it is deleted
    let authoritative = vec![
        feed_entry("A", "widget", 12, 90),
        feed_entry("B", "gadget", 6, 35),
    ];
    let outcome = Reconciler::new(&mut store)
        .reconcile(
            &rt,
            &authoritative,
            ReconcileOptions::new().delete_missing(true),
        )
        .unwrap();
    assert!(outcome.created.is_empty());
    assert_eq!(outcome.updated.len(), 2);

    let records = store.load_all(&rt).unwrap();
    assert_eq!(records.len(), 2);
    assert!(records.iter().all(|r| r.get("sku") != Some(&json!("C"))));
}

#[test]
fn reconcile_returns_outcome_backed_by_persisted_state() {
    let rt = product_type();
    let mut store = MemoryStore::new();

    let outcome = Reconciler::new(&mut store)
        .reconcile(
            &rt,
            &[feed_entry("A", "widget", 10, 100)],
            ReconcileOptions::default(),
        )
        .unwrap();

    // the outcome's records carry the same state the store now holds
    let persisted = store.load_all(&rt).unwrap();
    assert_eq!(outcome.created, persisted);
}

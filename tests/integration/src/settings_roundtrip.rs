//! End-to-end settings resolution over a shared store
//!
//! Settings and reconciled records coexist in the same store: the singleton
//! settings row is just another collection, and a reconcile pass against a
//! different record type leaves it alone.

use pretty_assertions::assert_eq;
use recon_core::{
    DynamicSettings, ReconcileOptions, Reconciler, StaticDefaults, StoreOverrides,
};
use recon_store::{DesiredEntry, MemoryStore, SingletonStore};
use recon_test_utils::catalog::{product_type, settings_seed, settings_type};
use serde_json::json;

#[test]
fn overrides_survive_unrelated_reconciliation() {
    let mut store = MemoryStore::new();

    // materialize the settings singleton and flip an override
    store
        .get_or_create_singleton(&settings_type(), &settings_seed())
        .unwrap();

    let mut overrides = StoreOverrides::new(store, settings_type(), settings_seed());
    overrides.set("maintenance", json!(true)).unwrap();

    // reconcile products in the same store (StoreOverrides owns it now, so
    // clone the state back out the way a shared handle would see it)
    let mut working = overrides.store().clone();
    let entries = vec![DesiredEntry::new().field("sku", "A").field("price", 10)];
    Reconciler::new(&mut working)
        .reconcile(&product_type(), &entries, ReconcileOptions::default())
        .unwrap();

    assert_eq!(working.len("products"), 1);
    assert_eq!(working.len("app_settings"), 1);

    // resolution over the post-reconcile store still sees the override
    let mut settings = DynamicSettings::new()
        .with_source(StoreOverrides::new(
            working,
            settings_type(),
            settings_seed(),
        ))
        .with_source(
            StaticDefaults::new()
                .set("maintenance", json!(false))
                .set("banner", json!("welcome")),
        );

    assert_eq!(settings.get("maintenance").unwrap(), json!(true));
    assert_eq!(settings.get("banner").unwrap(), json!("welcome"));
}

#[test]
fn settings_singleton_is_stable_across_accessors() {
    let mut store = MemoryStore::new();
    let first = store
        .get_or_create_singleton(&settings_type(), &settings_seed())
        .unwrap();

    let mut settings = DynamicSettings::new().with_source(StoreOverrides::new(
        store.clone(),
        settings_type(),
        settings_seed(),
    ));
    assert_eq!(settings.get("maintenance").unwrap(), json!(false));

    let second = store
        .get_or_create_singleton(&settings_type(), &settings_seed())
        .unwrap();
    assert_eq!(first.id(), second.id());
}

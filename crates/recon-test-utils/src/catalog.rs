//! Product-catalog fixtures
//!
//! A small, concrete domain shared by every test suite: products keyed by
//! SKU, regional prices keyed by (sku, region), and a singleton settings
//! collection.

use recon_store::{FieldMap, MemoryStore, RecordStore, RecordType};
use serde_json::json;

/// Products keyed by a single identifying field
pub fn product_type() -> RecordType {
    RecordType::new("products", ["sku", "name", "price", "stock"], ["sku"])
        .expect("product_type: fixture schema is valid")
}

/// Regional prices keyed by a composite (sku, region) tuple
pub fn pricing_type() -> RecordType {
    RecordType::new("prices", ["sku", "region", "amount"], ["sku", "region"])
        .expect("pricing_type: fixture schema is valid")
}

/// Singleton settings collection with a fixed "slot" identity
pub fn settings_type() -> RecordType {
    RecordType::new(
        "app_settings",
        ["slot", "maintenance", "banner"],
        ["slot"],
    )
    .expect("settings_type: fixture schema is valid")
}

/// Seed for the settings singleton: fixed identity plus initial values
pub fn settings_seed() -> FieldMap {
    let mut map = FieldMap::new();
    map.insert("slot".to_string(), json!("default"));
    map.insert("maintenance".to_string(), json!(false));
    map
}

/// A full product row
pub fn product_row(sku: &str, name: &str, price: i64) -> FieldMap {
    let mut map = FieldMap::new();
    map.insert("sku".to_string(), json!(sku));
    map.insert("name".to_string(), json!(name));
    map.insert("price".to_string(), json!(price));
    map
}

/// A `MemoryStore` pre-populated with the given product rows
///
/// # Panics
///
/// Panics if the rows violate the fixture schema (duplicate SKUs).
pub fn seeded_products(rows: &[(&str, &str, i64)]) -> MemoryStore {
    let mut store = MemoryStore::new();
    let rows = rows
        .iter()
        .map(|&(sku, name, price)| product_row(sku, name, price))
        .collect();
    store
        .bulk_create(&product_type(), rows)
        .expect("seeded_products: fixture rows are unique");
    store
}

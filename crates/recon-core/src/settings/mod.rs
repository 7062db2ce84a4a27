//! Dynamic settings resolution
//!
//! Process configuration whose values may be overridden at runtime by a
//! persisted singleton record, resolved through one explicit accessor:
//!
//! ```
//! use recon_core::settings::{DynamicSettings, StaticDefaults, StoreOverrides};
//! use recon_store::{FieldMap, MemoryStore, RecordType};
//! use serde_json::json;
//!
//! let record_type =
//!     RecordType::new("app_settings", ["slot", "maintenance"], ["slot"]).unwrap();
//! let mut seed = FieldMap::new();
//! seed.insert("slot".to_string(), json!("default"));
//!
//! let mut settings = DynamicSettings::new()
//!     .with_source(StoreOverrides::new(MemoryStore::new(), record_type, seed))
//!     .with_source(StaticDefaults::new().set("maintenance", json!(false)));
//!
//! assert_eq!(settings.get("maintenance").unwrap(), json!(false));
//! ```

mod defaults;
mod overrides;
mod provider;

pub use defaults::StaticDefaults;
pub use overrides::StoreOverrides;
pub use provider::{DynamicSettings, SettingSource};

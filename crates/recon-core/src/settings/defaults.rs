//! Static default values, optionally loaded from TOML

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use serde_json::Value;

use super::provider::SettingSource;
use crate::Result;

/// The static-defaults backend: a plain name→value map
///
/// Usually the last source in a [`DynamicSettings`] chain, so every setting
/// has a value even before any override exists.
///
/// [`DynamicSettings`]: super::DynamicSettings
#[derive(Debug, Clone, Default)]
pub struct StaticDefaults {
    values: BTreeMap<String, Value>,
}

impl StaticDefaults {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a default value
    pub fn set(mut self, name: impl Into<String>, value: Value) -> Self {
        self.values.insert(name.into(), value);
        self
    }

    /// Load defaults from a TOML document
    ///
    /// Top-level keys become setting names; tables and arrays are carried
    /// over as structured values.
    ///
    /// # Errors
    ///
    /// Returns an error if the document is not valid TOML.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let table: toml::Table = toml::from_str(content)?;
        Ok(Self {
            values: table
                .into_iter()
                .map(|(name, value)| (name, toml_to_json(value)))
                .collect(),
        })
    }

    /// Load defaults from a TOML file
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn from_toml_path(path: &Path) -> Result<Self> {
        Self::from_toml_str(&fs::read_to_string(path)?)
    }

    /// All default values
    pub fn values(&self) -> &BTreeMap<String, Value> {
        &self.values
    }
}

impl SettingSource for StaticDefaults {
    fn get(&mut self, name: &str) -> Result<Option<Value>> {
        Ok(self.values.get(name).cloned())
    }
}

/// Convert a TOML value to its JSON equivalent
///
/// Datetimes have no JSON counterpart and are carried as their string form.
fn toml_to_json(value: toml::Value) -> Value {
    match value {
        toml::Value::String(s) => Value::String(s),
        toml::Value::Integer(i) => Value::from(i),
        toml::Value::Float(f) => Value::from(f),
        toml::Value::Boolean(b) => Value::Bool(b),
        toml::Value::Datetime(dt) => Value::String(dt.to_string()),
        toml::Value::Array(items) => Value::Array(items.into_iter().map(toml_to_json).collect()),
        toml::Value::Table(table) => Value::Object(
            table
                .into_iter()
                .map(|(key, item)| (key, toml_to_json(item)))
                .collect(),
        ),
    }
}

//! Setting sources and the resolving provider

use serde_json::Value;

use crate::{Error, Result};

/// One backend a setting value may come from
///
/// Sources take `&mut self` because store-backed sources read through to
/// storage on every call; a value overridden at runtime is visible on the
/// next access, not cached from the first.
pub trait SettingSource {
    /// The source's value for `name`, or `None` if it has no opinion
    fn get(&mut self, name: &str) -> Result<Option<Value>>;
}

/// Resolves settings through an ordered chain of sources
///
/// Sources are consulted in registration order and the first one holding a
/// value wins, so overrides register before defaults. This is the single
/// accessor through which dynamic configuration is read; nothing else in the
/// workspace resolves settings.
#[derive(Default)]
pub struct DynamicSettings {
    sources: Vec<Box<dyn SettingSource>>,
}

impl DynamicSettings {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a source at the lowest priority so far
    pub fn with_source(mut self, source: impl SettingSource + 'static) -> Self {
        self.sources.push(Box::new(source));
        self
    }

    /// Resolve `name` through the source chain
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownSetting`] if no source holds a value, or any
    /// error a source raises while reading.
    pub fn get(&mut self, name: &str) -> Result<Value> {
        for (layer, source) in self.sources.iter_mut().enumerate() {
            if let Some(value) = source.get(name)? {
                tracing::debug!(name, layer, "setting resolved");
                return Ok(value);
            }
        }
        Err(Error::UnknownSetting {
            name: name.to_string(),
        })
    }
}

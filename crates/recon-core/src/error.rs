//! Error types for recon-core

/// Result type for recon-core operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in recon-core operations
///
/// Entry validation runs before any storage access, so the entry-shaped
/// variants below guarantee the backing store was left untouched.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A desired entry lacks a value for an identifying field
    #[error("Entry {index} for {collection} has no value for identifying field {field}")]
    MissingIdentifyingField {
        collection: String,
        field: String,
        index: usize,
    },

    /// A desired entry supplies an identifying field as a computed value
    ///
    /// Identifying values drive matching, which happens before apply time;
    /// they must be literals.
    #[error("Entry {index} for {collection} supplies identifying field {field} as a computed value")]
    ComputedIdentifyingField {
        collection: String,
        field: String,
        index: usize,
    },

    /// A desired entry names a field the record type does not declare
    #[error("Entry {index} for {collection} names undeclared field {field}")]
    UnknownField {
        collection: String,
        field: String,
        index: usize,
    },

    /// No settings source could resolve the requested name
    #[error("Unknown setting: {name}")]
    UnknownSetting { name: String },

    // Transparent wrappers for underlying crate errors
    /// Storage error from recon-store
    #[error(transparent)]
    Store(#[from] recon_store::Error),

    /// TOML deserialization error
    #[error(transparent)]
    TomlParse(#[from] toml::de::Error),

    /// Standard I/O error
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

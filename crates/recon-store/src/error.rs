//! Error types for recon-store

use uuid::Uuid;

/// Result type for recon-store operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in recon-store operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A record type was declared without identifying fields
    #[error("Record type for {collection} declares no identifying fields")]
    NoIdentifyingFields { collection: String },

    /// An identifying field is not part of the record type's field list
    #[error("Identifying field {field} is not declared on {collection}")]
    UnknownKeyField { collection: String, field: String },

    /// A stored record or incoming row has no value for an identifying field
    #[error("Row in {collection} has no value for identifying field {field}")]
    IncompleteKey { collection: String, field: String },

    /// Two rows share the same identifying-field values
    #[error("Duplicate identifying values {key} in {collection}")]
    UniqueViolation { collection: String, key: String },

    /// An update or delete referenced an identity the store does not hold
    #[error("No record with id {id} in {collection}")]
    UnknownRecord { collection: String, id: Uuid },

    /// Failure reported by a storage backend
    #[error("Storage backend error: {message}")]
    Backend { message: String },
}

impl Error {
    pub fn backend(message: impl Into<String>) -> Self {
        Self::Backend {
            message: message.into(),
        }
    }
}

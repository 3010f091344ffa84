//! Error types for the catalog.

use thiserror::Error;

/// Result type for catalog operations.
pub type Result<T> = std::result::Result<T, Error>;

/// A structural problem found while validating a catalog.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Violation {
    /// The catalog holds no topics
    #[error("catalog is empty")]
    Empty,

    /// Two topics share an id
    #[error("duplicate topic id '{0}'")]
    DuplicateId(String),

    /// A topic has no sections to display
    #[error("topic '{0}' has no sections")]
    NoSections(String),
}

/// Errors that can occur while loading a catalog.
#[derive(Debug, Error)]
pub enum Error {
    /// The catalog breaks a structural invariant
    #[error("Invalid catalog: {0}")]
    InvalidCatalog(#[from] Violation),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

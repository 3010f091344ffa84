//! Error types for the engine.
//!
//! Ranking and progress functions are total and never fail. Errors only
//! come from the edges: configuration, store writes, and session lookups.

use thiserror::Error;

/// Result type for engine operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur around the engine.
#[derive(Debug, Error)]
pub enum Error {
    /// Interaction store error
    #[error("Store error: {0}")]
    Store(#[from] mind_store::Error),

    /// Topic id not present in the catalog
    #[error("Unknown topic: {0}")]
    UnknownTopic(String),

    /// Session cursor points past the catalog
    #[error("Session out of range: topic index {topic_index}")]
    OutOfRange { topic_index: usize },

    /// Invalid configuration
    #[error("Config error: {0}")]
    Config(String),
}

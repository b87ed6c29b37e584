//! Error types for the state container.

use thiserror::Error;

/// Boxed error carried out of a fallible factory.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Main error type for container operations.
#[derive(Debug, Error)]
pub enum QuantumError {
    #[error("factory failed while creating state '{id}': {source}")]
    Factory {
        id: String,
        #[source]
        source: BoxError,
    },

    #[error("state already exists: {0}")]
    DuplicateState(String),

    #[error("unknown base state: {0}")]
    UnknownBaseState(String),

    #[error("no state has been selected")]
    NoCurrentState,

    #[error("container holds no states")]
    Empty,
}

/// Result type for container operations.
pub type Result<T> = std::result::Result<T, QuantumError>;

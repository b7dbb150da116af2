//! Runtime errors

use thiserror::Error;

/// Runtime result type
pub type RuntimeResult<T> = Result<T, RuntimeError>;

/// Errors surfaced by the executor
#[derive(Error, Debug)]
pub enum RuntimeError {
    /// The registry rejected the operation
    #[error("registry error: {0}")]
    Registry(#[from] obscura_registry::RegistryError),

    /// Submission encoding/decoding failed
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

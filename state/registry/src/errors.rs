//! Error types for registry operations
//!
//! Every variant is a rejection reason a client can act on: resubmit with
//! corrected inputs, or wait for a configuration change. A failed
//! operation never leaves a partial write behind.

use thiserror::Error;

/// Registry result type
pub type RegistryResult<T> = Result<T, RegistryError>;

/// Errors that can reject a finalize operation
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RegistryError {
    /// Caller is not an authorized administrator
    #[error("unauthorized: {0} is not an administrator")]
    Unauthorized(String),

    /// A state equality/flag precondition did not hold
    #[error("precondition failed: {0}")]
    PreconditionFailed(String),

    /// Commitment already reserved in the shared uniqueness space
    #[error("commitment already exists: {0}")]
    AlreadyExists(String),

    /// Required mapping entry is absent
    #[error("not found: {0}")]
    NotFound(String),

    /// Mintable supply or pool is empty
    #[error("mint pool exhausted")]
    PoolExhausted,
}

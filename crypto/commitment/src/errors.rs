//! Error types for commitment primitives

use thiserror::Error;

/// Errors that can occur constructing digests and addresses
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CommitmentError {
    #[error("invalid length: expected 32 bytes, got {0}")]
    InvalidLength(usize),

    #[error("invalid hex: {0}")]
    InvalidHex(String),
}

//! Commitment primitives for the Obscura registry
//!
//! Everything the registry knows about a token is a 32-byte digest:
//! token identities are binding, hiding commitments over hashed content,
//! claim tickets are commitments over the claimant, and approval keys are
//! plain structured hashes. This crate owns those derivations so the
//! state machine never touches raw hashing.

pub mod digest;
pub mod errors;
pub mod scheme;

pub use digest::{Address, Digest, Scalar};
pub use errors::CommitmentError;
pub use scheme::{
    approval_key, claim_commitment, commit, hash_bytes, hash_digests, token_commitment,
    ContentData,
};

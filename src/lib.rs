//! Obscura: a hybrid public/private NFT registry
//!
//! This is the root crate that re-exports the Obscura components for
//! integration testing and embedding.
//!
//! ## Crate Organization
//!
//! - `obscura-commitment`: digest, commitment and key-derivation
//!   primitives (blake3-backed)
//! - `obscura-registry`: the core state machine — configuration flags
//!   and settings, commitment uniqueness, the randomized mint pool and
//!   claim ledger, public ownership, delegate/operator approvals and
//!   published content
//! - `obscura-runtime`: the serialized finalize-operation executor with
//!   per-operation receipts
//!
//! Proof generation/verification, consensus ordering and persistence are
//! external collaborators: the registry consumes commitments that arrive
//! with valid proofs and exposes deterministic, atomic state transitions.

pub use obscura_commitment as commitment;
pub use obscura_registry as registry;
pub use obscura_runtime as runtime;

/// Obscura protocol version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Prelude module for convenient imports
pub mod prelude {
    pub use obscura_commitment::{
        approval_key, claim_commitment, commit, token_commitment, Address, ContentData, Digest,
        Scalar,
    };
    pub use obscura_registry::{
        AccessControl, BaseUri, BlockContext, CollectionFlags, RegistryError, RegistryState,
    };
    pub use obscura_runtime::{Executor, FinalizeOp, OpReceipt};
}

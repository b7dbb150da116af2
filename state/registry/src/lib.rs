//! Obscura Registry - the collection's public state machine
//!
//! A hybrid public/private NFT registry: token identities are commitments
//! over private (content, edition) pairs, public custody lives in shared
//! mappings, and a randomized claim workflow hands out pool entries
//! without letting claimants choose. Ownership can move between public
//! custody (recorded here) and private custody (provable only off-ledger;
//! this crate then holds no entry at all).
//!
//! Every public method on [`RegistryState`] is one finalize operation:
//! deterministic, precondition-gated and atomic. Proof verification,
//! consensus ordering and persistence are collaborators of the host, not
//! concerns of this crate.

pub mod access;
pub mod approvals;
pub mod block;
pub mod claims;
pub mod content;
pub mod errors;
pub mod flags;
pub mod ownership;
pub mod pool;
pub mod settings;
pub mod state;
pub mod uniqueness;

pub use access::AccessControl;
pub use approvals::ApprovalRegistry;
pub use block::BlockContext;
pub use claims::ClaimLedger;
pub use content::{ContentRecord, ContentRegistry};
pub use errors::{RegistryError, RegistryResult};
pub use flags::{CollectionFlags, FlagStore, POST_INIT_FLAGS};
pub use ownership::OwnershipRegistry;
pub use pool::MintPool;
pub use settings::{BaseUri, Settings};
pub use state::RegistryState;
pub use uniqueness::CommitmentSet;

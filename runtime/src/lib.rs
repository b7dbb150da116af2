//! Obscura Runtime - serialized execution of finalize operations
//!
//! The hosting ledger totally orders submissions; this crate reproduces
//! that model in-process. [`FinalizeOp`] is the wire shape of one
//! submission's public half, [`Executor`] applies batches of them against
//! a shared [`obscura_registry::RegistryState`] and reports per-operation
//! receipts.

pub mod errors;
pub mod executor;
pub mod ops;

pub use errors::{RuntimeError, RuntimeResult};
pub use executor::{Executor, OpReceipt};
pub use ops::{decode_ops, encode_ops, FinalizeOp};

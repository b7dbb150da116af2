//! Collection status flags
//!
//! A single u32 bitmask gates most operations. Each operation tests a
//! specific `(mask, expected)` pair:
//!
//! | guard                  | mask | expected | meaning                                    |
//! |------------------------|------|----------|--------------------------------------------|
//! | `require_uninitialized`| 1    | 0        | INITIALIZED clear                          |
//! | `require_updatable`    | 9    | 1        | INITIALIZED set, UPLOAD_LOCKED clear       |
//! | `require_claim_open`   | 15   | 3        | INITIALIZED + CLAIM_OPEN, nothing else set |
//!
//! Unknown bits are preserved verbatim: `update_flags` may store any
//! pattern with bit 0 set.

use crate::errors::{RegistryError, RegistryResult};
use bitflags::bitflags;
use serde::{Deserialize, Serialize};

bitflags! {
    /// Named bits of the collection status mask
    #[derive(Clone, Copy, Debug, PartialEq, Eq)]
    pub struct CollectionFlags: u32 {
        /// Collection has been initialized
        const INITIALIZED = 1;
        /// Random claim window is open
        const CLAIM_OPEN = 1 << 1;
        /// Reserved bit, set at initialization
        const RESERVED = 1 << 2;
        /// Settings and pool uploads are frozen
        const UPLOAD_LOCKED = 1 << 3;
    }
}

/// Value written at initialization: INITIALIZED | RESERVED
pub const POST_INIT_FLAGS: u32 = CollectionFlags::INITIALIZED.bits() | CollectionFlags::RESERVED.bits();

/// The stored status mask with its precondition guards
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlagStore {
    bits: u32,
}

impl FlagStore {
    /// All-clear flags (uninitialized collection)
    pub fn new() -> Self {
        Self { bits: 0 }
    }

    /// Raw bits
    pub fn bits(&self) -> u32 {
        self.bits
    }

    /// Overwrite the raw bits
    pub fn set_bits(&mut self, bits: u32) {
        self.bits = bits;
    }

    /// Whether a named flag is set
    pub fn contains(&self, flag: CollectionFlags) -> bool {
        self.bits & flag.bits() == flag.bits()
    }

    /// Generic `(mask, expected)` precondition
    pub fn require(&self, mask: u32, expected: u32) -> RegistryResult<()> {
        if self.bits & mask != expected {
            return Err(RegistryError::PreconditionFailed(format!(
                "flags {:#06b} & {:#06b} != {:#06b}",
                self.bits, mask, expected
            )));
        }
        Ok(())
    }

    /// INITIALIZED must be clear (one-shot initialization guard)
    pub fn require_uninitialized(&self) -> RegistryResult<()> {
        if self.bits & CollectionFlags::INITIALIZED.bits() != 0 {
            return Err(RegistryError::PreconditionFailed(
                "collection already initialized".into(),
            ));
        }
        Ok(())
    }

    /// INITIALIZED set, UPLOAD_LOCKED clear
    pub fn require_updatable(&self) -> RegistryResult<()> {
        let mask = CollectionFlags::INITIALIZED.bits() | CollectionFlags::UPLOAD_LOCKED.bits();
        self.require(mask, CollectionFlags::INITIALIZED.bits())
            .map_err(|_| {
                RegistryError::PreconditionFailed(
                    "collection not initialized or uploads locked".into(),
                )
            })
    }

    /// Bits 0..=3 must equal INITIALIZED | CLAIM_OPEN exactly
    pub fn require_claim_open(&self) -> RegistryResult<()> {
        let expected = CollectionFlags::INITIALIZED.bits() | CollectionFlags::CLAIM_OPEN.bits();
        self.require(0b1111, expected).map_err(|_| {
            RegistryError::PreconditionFailed("claim window is not open".into())
        })
    }
}

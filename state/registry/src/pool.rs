//! Mint pool: unassigned token commitments awaiting random claim
//!
//! A dense arena with swap-remove compaction. Entries are only addressed
//! by random draw, so the index of an entry carries no meaning beyond a
//! single draw and the tail swap keeps the range `0..len` gap-free.

use crate::errors::{RegistryError, RegistryResult};
use obscura_commitment::Digest;
use rand::RngCore;
use serde::{Deserialize, Serialize};

/// Dense pool of not-yet-claimed token commitments
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MintPool {
    entries: Vec<Digest>,
}

impl MintPool {
    /// Create an empty pool
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a commitment at the tail
    pub fn add(&mut self, commitment: Digest) {
        self.entries.push(commitment);
    }

    /// Draw a uniformly random entry and swap-remove it
    ///
    /// The draw takes a 128-bit sample and reduces it mod the live count;
    /// an empty pool is rejected before sampling so the reduction can
    /// never divide by zero.
    pub fn draw(&mut self, rng: &mut impl RngCore) -> RegistryResult<Digest> {
        if self.entries.is_empty() {
            return Err(RegistryError::PoolExhausted);
        }
        let sample = ((rng.next_u64() as u128) << 64) | rng.next_u64() as u128;
        let index = (sample % self.entries.len() as u128) as usize;
        Ok(self.entries.swap_remove(index))
    }

    /// Number of live entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the pool is empty
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Live entries, in arena order
    pub fn entries(&self) -> &[Digest] {
        &self.entries
    }
}

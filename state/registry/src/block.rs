//! Per-block execution context
//!
//! Carries the block height for threshold checks and a ChaCha20 stream
//! seeded from block entropy for the random pool draw. The entropy is
//! whatever the ledger makes available at finalize time; it must never be
//! client-supplied, otherwise a claimant could bias which token they
//! receive.

use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;

/// Execution context shared by every operation finalized in one block
#[derive(Clone, Debug)]
pub struct BlockContext {
    height: u64,
    pub(crate) rng: ChaCha20Rng,
}

impl BlockContext {
    /// Build a context from the block height and 32 bytes of block entropy
    pub fn new(height: u64, entropy: [u8; 32]) -> Self {
        Self {
            height,
            rng: ChaCha20Rng::from_seed(entropy),
        }
    }

    /// Height of the block being finalized
    pub fn height(&self) -> u64 {
        self.height
    }
}

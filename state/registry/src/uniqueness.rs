//! Global commitment uniqueness
//!
//! One shared set covers every operation that introduces a token
//! commitment (minting and private edition updates), so a commitment can
//! never be issued twice even across different paths.

use crate::errors::{RegistryError, RegistryResult};
use obscura_commitment::Digest;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Set of every token commitment ever issued
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommitmentSet {
    used: HashSet<Digest>,
}

impl CommitmentSet {
    /// Create an empty set
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark a commitment used, failing if it ever was before
    pub fn reserve_unique(&mut self, commitment: Digest) -> RegistryResult<()> {
        if self.used.contains(&commitment) {
            return Err(RegistryError::AlreadyExists(commitment.to_hex()));
        }
        self.used.insert(commitment);
        Ok(())
    }

    /// Whether a commitment has been issued
    pub fn contains(&self, commitment: &Digest) -> bool {
        self.used.contains(commitment)
    }

    /// Number of issued commitments
    pub fn len(&self) -> usize {
        self.used.len()
    }

    /// Whether no commitment has been issued yet
    pub fn is_empty(&self) -> bool {
        self.used.is_empty()
    }
}

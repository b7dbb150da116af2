//! Public ownership registry
//!
//! A token commitment is in public custody iff it has an entry here;
//! returning a token to private custody removes the entry entirely rather
//! than writing a placeholder owner.

use crate::errors::{RegistryError, RegistryResult};
use obscura_commitment::{Address, Digest};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Mapping from token commitment to current public owner
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OwnershipRegistry {
    owners: HashMap<Digest, Address>,
}

impl OwnershipRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Current public owner, if the token is in public custody
    pub fn owner_of(&self, commitment: &Digest) -> Option<Address> {
        self.owners.get(commitment).copied()
    }

    /// Whether the token is in public custody
    pub fn is_public(&self, commitment: &Digest) -> bool {
        self.owners.contains_key(commitment)
    }

    /// The token must be publicly held by exactly `claimed`
    ///
    /// Absence is `NotFound`; a different owner is `PreconditionFailed`.
    pub fn require_owner(&self, commitment: &Digest, claimed: &Address) -> RegistryResult<()> {
        let current = self.owner_of(commitment).ok_or_else(|| {
            RegistryError::NotFound(format!("token {} has no public owner", commitment))
        })?;
        if current != *claimed {
            return Err(RegistryError::PreconditionFailed(format!(
                "token {} is not owned by {}",
                commitment, claimed
            )));
        }
        Ok(())
    }

    /// Record `owner` as the public custodian
    pub fn insert(&mut self, commitment: Digest, owner: Address) {
        self.owners.insert(commitment, owner);
    }

    /// Remove the public-custody entry (token goes private)
    pub fn remove(&mut self, commitment: &Digest) {
        self.owners.remove(commitment);
    }

    /// Number of publicly held tokens
    pub fn len(&self) -> usize {
        self.owners.len()
    }

    /// Whether no token is publicly held
    pub fn is_empty(&self) -> bool {
        self.owners.is_empty()
    }
}

//! Claim ledger: one-time tickets bound to assigned tokens
//!
//! A claim slot is "unused" while it holds the zero sentinel (or no entry
//! at all). Assignment writes the drawn token commitment; redemption
//! requires the exact commitment back and resets the slot to the
//! sentinel, so a ticket can never be redeemed twice.

use crate::errors::{RegistryError, RegistryResult};
use obscura_commitment::Digest;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Mapping from claim ticket to assigned token commitment
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClaimLedger {
    claims: HashMap<Digest, Digest>,
}

impl ClaimLedger {
    /// Create an empty ledger
    pub fn new() -> Self {
        Self::default()
    }

    /// Current assignment of a ticket; the zero sentinel means unused
    pub fn assignment(&self, claim: &Digest) -> Digest {
        self.claims.get(claim).copied().unwrap_or(Digest::ZERO)
    }

    /// The ticket must currently be at the sentinel
    pub fn require_unused(&self, claim: &Digest) -> RegistryResult<()> {
        if !self.assignment(claim).is_zero() {
            return Err(RegistryError::PreconditionFailed(format!(
                "claim {} already assigned",
                claim
            )));
        }
        Ok(())
    }

    /// Bind a ticket to a token commitment
    ///
    /// Callers check `require_unused` first; this is a plain write.
    pub fn assign(&mut self, claim: Digest, commitment: Digest) {
        self.claims.insert(claim, commitment);
    }

    /// Redeem a ticket against the asserted commitment
    ///
    /// On mismatch the slot is untouched and the ticket stays redeemable
    /// with the correct commitment.
    pub fn redeem(&mut self, claim: Digest, asserted: Digest) -> RegistryResult<()> {
        let current = self.assignment(&claim);
        if current != asserted {
            return Err(RegistryError::PreconditionFailed(format!(
                "claim {} does not hold commitment {}",
                claim, asserted
            )));
        }
        self.claims.insert(claim, Digest::ZERO);
        Ok(())
    }
}

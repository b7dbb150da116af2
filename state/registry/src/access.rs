//! Administrator access control
//!
//! The authority set is injected at construction instead of being a
//! compiled-in address, so deployments can rotate the key and tests can
//! mint their own admins. A single-admin set gives the usual
//! single-authority model.

use crate::errors::{RegistryError, RegistryResult};
use obscura_commitment::Address;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// The set of identities allowed to run privileged operations
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccessControl {
    admins: HashSet<Address>,
}

impl AccessControl {
    /// Build from any collection of admin identities
    pub fn new(admins: impl IntoIterator<Item = Address>) -> Self {
        Self {
            admins: admins.into_iter().collect(),
        }
    }

    /// Single-administrator set
    pub fn single(admin: Address) -> Self {
        Self::new([admin])
    }

    /// Fail with `Unauthorized` unless `caller` is an admin
    ///
    /// Called before any state read or write, so unauthorized submissions
    /// have zero side effects.
    pub fn require_admin(&self, caller: &Address) -> RegistryResult<()> {
        if !self.admins.contains(caller) {
            return Err(RegistryError::Unauthorized(caller.to_hex()));
        }
        Ok(())
    }

    /// Whether `identity` is an admin
    pub fn is_admin(&self, identity: &Address) -> bool {
        self.admins.contains(identity)
    }

    /// Add an admin identity
    pub fn grant(&mut self, identity: Address) {
        self.admins.insert(identity);
    }

    /// Remove an admin identity
    pub fn revoke(&mut self, identity: &Address) {
        self.admins.remove(identity);
    }
}

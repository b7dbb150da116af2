//! Delegate approvals and operator flags
//!
//! Two mappings keyed by digests: a per-token delegate slot holding the
//! `hash(owner, spender)` of the single authorized delegate, and a
//! blanket operator flag per `hash(approver, spender)` pair covering all
//! of the approver's tokens.

use obscura_commitment::Digest;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Approval state for all tokens
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApprovalRegistry {
    /// token commitment -> approval key of the current delegate
    delegates: HashMap<Digest, Digest>,
    /// approval key -> blanket operator authorization
    operators: HashMap<Digest, bool>,
}

impl ApprovalRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Current delegate approval key for a token, if any
    pub fn delegate_of(&self, commitment: &Digest) -> Option<Digest> {
        self.delegates.get(commitment).copied()
    }

    /// Set the single delegate for a token, replacing any prior one
    pub fn set_delegate(&mut self, commitment: Digest, approval_key: Digest) {
        self.delegates.insert(commitment, approval_key);
    }

    /// Clear a token's delegate; every successful transfer does this
    pub fn clear_delegate(&mut self, commitment: &Digest) {
        self.delegates.remove(commitment);
    }

    /// Blanket operator flag for an approval key (absent means false)
    pub fn is_operator(&self, approval_key: &Digest) -> bool {
        self.operators.get(approval_key).copied().unwrap_or(false)
    }

    /// Set or clear a blanket operator flag
    pub fn set_operator(&mut self, approval_key: Digest, approved: bool) {
        self.operators.insert(approval_key, approved);
    }
}

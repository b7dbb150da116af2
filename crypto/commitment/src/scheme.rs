//! Hash and commitment derivations
//!
//! All derivations are blake3 with a domain-separation prefix. The
//! commitment is keyed by the blinding factor, which makes it hiding;
//! collision resistance of blake3 makes it binding.

use crate::digest::{Address, Digest, Scalar};
use serde::{Deserialize, Serialize};

/// Public token metadata: four 32-byte limbs
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ContentData(pub [Digest; 4]);

impl ContentData {
    /// Hash the four limbs into a single content digest
    pub fn hash(&self) -> Digest {
        hash_digests(b"obscura_content_v1", &self.0)
    }
}

/// Hash arbitrary bytes under a domain prefix
pub fn hash_bytes(domain: &[u8], bytes: &[u8]) -> Digest {
    let mut hasher = blake3::Hasher::new();
    hasher.update(domain);
    hasher.update(bytes);
    Digest::from_bytes(*hasher.finalize().as_bytes())
}

/// Hash a sequence of digests under a domain prefix
pub fn hash_digests(domain: &[u8], digests: &[Digest]) -> Digest {
    let mut hasher = blake3::Hasher::new();
    hasher.update(domain);
    for digest in digests {
        hasher.update(digest.as_bytes());
    }
    Digest::from_bytes(*hasher.finalize().as_bytes())
}

/// Binding, hiding commitment to `value` under `blinding`
///
/// commit(v, r) = blake3_keyed(r, domain || v)
pub fn commit(value: Digest, blinding: Scalar) -> Digest {
    let mut hasher = blake3::Hasher::new_keyed(blinding.as_bytes());
    hasher.update(b"obscura_commit_v1");
    hasher.update(value.as_bytes());
    Digest::from_bytes(*hasher.finalize().as_bytes())
}

/// Token commitment: commit(hash(content), edition)
///
/// Identifies a (content, edition) pair. The same content with a new
/// edition yields an unrelated commitment.
pub fn token_commitment(content: &ContentData, edition: Scalar) -> Digest {
    commit(content.hash(), edition)
}

/// Claim ticket: commit(hash(claimant), blinding)
pub fn claim_commitment(claimant: Address, blinding: Scalar) -> Digest {
    let claimant_hash = hash_bytes(b"obscura_claimant_v1", claimant.as_bytes());
    commit(claimant_hash, blinding)
}

/// Approval key: hash(approver, spender)
///
/// Keys both the per-token delegate mapping and the operator-flag mapping.
pub fn approval_key(approver: Address, spender: Address) -> Digest {
    let mut hasher = blake3::Hasher::new();
    hasher.update(b"obscura_approval_v1");
    hasher.update(approver.as_bytes());
    hasher.update(spender.as_bytes());
    Digest::from_bytes(*hasher.finalize().as_bytes())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn content(seed: u8) -> ContentData {
        ContentData([
            Digest::from_bytes([seed; 32]),
            Digest::from_bytes([seed.wrapping_add(1); 32]),
            Digest::from_bytes([seed.wrapping_add(2); 32]),
            Digest::from_bytes([seed.wrapping_add(3); 32]),
        ])
    }

    #[test]
    fn test_commit_deterministic() {
        let value = Digest::from_bytes([1u8; 32]);
        let blinding = Scalar::from_bytes([2u8; 32]);

        assert_eq!(commit(value, blinding), commit(value, blinding));
    }

    #[test]
    fn test_commit_hiding_under_blinding() {
        let value = Digest::from_bytes([1u8; 32]);

        let c1 = commit(value, Scalar::from_bytes([2u8; 32]));
        let c2 = commit(value, Scalar::from_bytes([3u8; 32]));
        assert_ne!(c1, c2);
    }

    #[test]
    fn test_token_commitment_edition_changes_identity() {
        let data = content(10);

        let c1 = token_commitment(&data, Scalar::from_u64(1));
        let c2 = token_commitment(&data, Scalar::from_u64(2));
        assert_ne!(c1, c2);

        // Different content, same edition
        let c3 = token_commitment(&content(20), Scalar::from_u64(1));
        assert_ne!(c1, c3);
    }

    #[test]
    fn test_approval_key_is_ordered() {
        let a = Address::from_bytes([1u8; 32]);
        let b = Address::from_bytes([2u8; 32]);

        // (approver, spender) is not symmetric
        assert_ne!(approval_key(a, b), approval_key(b, a));
    }

    #[test]
    fn test_claim_commitment_binds_claimant() {
        let blinding = Scalar::from_bytes([9u8; 32]);
        let c1 = claim_commitment(Address::from_bytes([1u8; 32]), blinding);
        let c2 = claim_commitment(Address::from_bytes([2u8; 32]), blinding);
        assert_ne!(c1, c2);
    }

    #[test]
    fn test_domain_separation() {
        let bytes = [5u8; 32];
        assert_ne!(
            hash_bytes(b"obscura_content_v1", &bytes),
            hash_bytes(b"obscura_claimant_v1", &bytes)
        );
    }
}

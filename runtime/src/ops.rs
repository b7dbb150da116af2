//! Finalize-operation submissions
//!
//! One variant per public entry point, carrying exactly the public
//! parameters the finalize side consumes plus the identity the ledger
//! supplies (invoking caller or nominal signer). Private inputs never
//! appear here; the paired transition reduced them to commitments before
//! submission.

use obscura_commitment::{Address, ContentData, Digest, Scalar};
use obscura_registry::BaseUri;
use serde::{Deserialize, Serialize};

/// A finalize operation awaiting execution
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum FinalizeOp {
    InitializeCollection {
        caller: Address,
        max_supply: u128,
        mint_supply: u128,
        base_uri: BaseUri,
    },
    AddToken {
        caller: Address,
        commitment: Digest,
    },
    AddMinter {
        caller: Address,
    },
    UpdateFlags {
        caller: Address,
        flags: u32,
    },
    SetMintBlock {
        caller: Address,
        height: u64,
    },
    UpdateSymbol {
        caller: Address,
        symbol: u128,
    },
    UpdateBaseUri {
        caller: Address,
        base_uri: BaseUri,
    },
    Mint {
        commitment: Digest,
        owner: Address,
    },
    UpdateEditionPrivate {
        commitment: Digest,
    },
    PublishContent {
        commitment: Digest,
        data: ContentData,
        edition: Scalar,
    },
    OpenMint {
        claim: Digest,
    },
    ClaimNft {
        claim: Digest,
        commitment: Digest,
    },
    /// Private-to-private transfer: no public effect, recorded for
    /// submission completeness only
    TransferPrivate,
    TransferPrivToPub {
        commitment: Digest,
        new_owner: Address,
    },
    TransferPublic {
        caller: Address,
        commitment: Digest,
        new_owner: Address,
    },
    TransferPubAsSigner {
        signer: Address,
        commitment: Digest,
        new_owner: Address,
    },
    TransferPubToPriv {
        caller: Address,
        commitment: Digest,
    },
    SetForAllApproval {
        approval_key: Digest,
        approve: bool,
    },
    ApprovePublic {
        owner: Address,
        approval_key: Digest,
        commitment: Digest,
    },
    TransferFromPublic {
        approval_key: Digest,
        from: Address,
        to: Address,
        commitment: Digest,
    },
}

impl FinalizeOp {
    /// Stable operation name for receipts and logs
    pub fn name(&self) -> &'static str {
        match self {
            FinalizeOp::InitializeCollection { .. } => "initialize_collection",
            FinalizeOp::AddToken { .. } => "add_token",
            FinalizeOp::AddMinter { .. } => "add_minter",
            FinalizeOp::UpdateFlags { .. } => "update_flags",
            FinalizeOp::SetMintBlock { .. } => "set_mint_block",
            FinalizeOp::UpdateSymbol { .. } => "update_symbol",
            FinalizeOp::UpdateBaseUri { .. } => "update_base_uri",
            FinalizeOp::Mint { .. } => "mint",
            FinalizeOp::UpdateEditionPrivate { .. } => "update_edition_private",
            FinalizeOp::PublishContent { .. } => "publish_content",
            FinalizeOp::OpenMint { .. } => "open_mint",
            FinalizeOp::ClaimNft { .. } => "claim_nft",
            FinalizeOp::TransferPrivate => "transfer_private",
            FinalizeOp::TransferPrivToPub { .. } => "transfer_priv_to_pub",
            FinalizeOp::TransferPublic { .. } => "transfer_public",
            FinalizeOp::TransferPubAsSigner { .. } => "transfer_pub_as_signer",
            FinalizeOp::TransferPubToPriv { .. } => "transfer_pub_to_priv",
            FinalizeOp::SetForAllApproval { .. } => "set_for_all_approval",
            FinalizeOp::ApprovePublic { .. } => "approve_public",
            FinalizeOp::TransferFromPublic { .. } => "transfer_from_public",
        }
    }
}

/// Encode a batch of operations as a JSON submission
pub fn encode_ops(ops: &[FinalizeOp]) -> Result<String, serde_json::Error> {
    serde_json::to_string(ops)
}

/// Decode a JSON submission into operations
pub fn decode_ops(payload: &str) -> Result<Vec<FinalizeOp>, serde_json::Error> {
    serde_json::from_str(payload)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_op_json_roundtrip() {
        let ops = vec![
            FinalizeOp::Mint {
                commitment: Digest::from_bytes([1u8; 32]),
                owner: Address::from_bytes([2u8; 32]),
            },
            FinalizeOp::TransferPrivate,
            FinalizeOp::OpenMint {
                claim: Digest::from_bytes([3u8; 32]),
            },
        ];

        let payload = encode_ops(&ops).unwrap();
        let decoded = decode_ops(&payload).unwrap();
        assert_eq!(ops, decoded);
    }

    #[test]
    fn test_op_names_are_distinct() {
        let ops = [
            FinalizeOp::TransferPrivate,
            FinalizeOp::AddMinter {
                caller: Address::from_bytes([0u8; 32]),
            },
            FinalizeOp::OpenMint {
                claim: Digest::ZERO,
            },
        ];
        let names: std::collections::HashSet<_> = ops.iter().map(|o| o.name()).collect();
        assert_eq!(names.len(), ops.len());
    }

    #[test]
    fn test_op_tag_is_snake_case() {
        let op = FinalizeOp::UpdateEditionPrivate {
            commitment: Digest::ZERO,
        };
        let json = serde_json::to_string(&op).unwrap();
        assert!(json.contains("\"op\":\"update_edition_private\""));
    }
}

//! Operation executor
//!
//! Applies finalize operations to the registry one at a time under a
//! write lock, reproducing the ledger's serialized execution. A rejected
//! operation leaves the state untouched (the registry checks all
//! preconditions before writing) and yields a receipt carrying the
//! rejection reason; later operations in the same block still run.

use std::sync::Arc;

use parking_lot::RwLock;
use serde::Serialize;
use tracing::{debug, warn};

use obscura_registry::{BlockContext, RegistryState};

use crate::errors::RuntimeResult;
use crate::ops::FinalizeOp;

/// Outcome of one finalize operation
#[derive(Clone, Debug, Serialize)]
pub struct OpReceipt {
    /// Position of the operation within its block
    pub index: usize,
    /// Operation name
    pub op: &'static str,
    /// Whether the operation committed
    pub success: bool,
    /// Rejection reason when it did not
    pub error: Option<String>,
}

/// Serialized executor over a shared registry state
pub struct Executor {
    state: Arc<RwLock<RegistryState>>,
}

impl Executor {
    /// Wrap a fresh registry state
    pub fn new(state: RegistryState) -> Self {
        Self {
            state: Arc::new(RwLock::new(state)),
        }
    }

    /// Wrap an already shared registry state
    pub fn shared(state: Arc<RwLock<RegistryState>>) -> Self {
        Self { state }
    }

    /// Handle to the underlying state
    pub fn state(&self) -> Arc<RwLock<RegistryState>> {
        Arc::clone(&self.state)
    }

    /// Apply a single operation within a block context
    ///
    /// Holds the write lock for exactly one operation, so submissions
    /// racing on the same key resolve in lock order: the loser observes
    /// the updated state and fails its preconditions cleanly.
    pub fn apply(&self, ctx: &mut BlockContext, op: &FinalizeOp) -> RuntimeResult<()> {
        let mut state = self.state.write();
        match op.clone() {
            FinalizeOp::InitializeCollection {
                caller,
                max_supply,
                mint_supply,
                base_uri,
            } => state.initialize_collection(caller, max_supply, mint_supply, base_uri)?,
            FinalizeOp::AddToken { caller, commitment } => state.add_token(caller, commitment)?,
            FinalizeOp::AddMinter { caller } => state.add_minter(caller)?,
            FinalizeOp::UpdateFlags { caller, flags } => state.update_flags(caller, flags)?,
            FinalizeOp::SetMintBlock { caller, height } => state.set_mint_block(caller, height)?,
            FinalizeOp::UpdateSymbol { caller, symbol } => state.update_symbol(caller, symbol)?,
            FinalizeOp::UpdateBaseUri { caller, base_uri } => {
                state.update_base_uri(caller, base_uri)?
            }
            FinalizeOp::Mint { commitment, owner } => state.mint(commitment, owner)?,
            FinalizeOp::UpdateEditionPrivate { commitment } => {
                state.update_edition_private(commitment)?
            }
            FinalizeOp::PublishContent {
                commitment,
                data,
                edition,
            } => state.publish_content(commitment, data, edition)?,
            FinalizeOp::OpenMint { claim } => state.open_mint(claim, ctx)?,
            FinalizeOp::ClaimNft { claim, commitment } => state.claim_nft(claim, commitment)?,
            // Handled entirely by the private record system
            FinalizeOp::TransferPrivate => {}
            FinalizeOp::TransferPrivToPub {
                commitment,
                new_owner,
            } => state.transfer_priv_to_pub(commitment, new_owner)?,
            FinalizeOp::TransferPublic {
                caller,
                commitment,
                new_owner,
            } => state.transfer_public(caller, commitment, new_owner)?,
            FinalizeOp::TransferPubAsSigner {
                signer,
                commitment,
                new_owner,
            } => state.transfer_public_as_signer(signer, commitment, new_owner)?,
            FinalizeOp::TransferPubToPriv { caller, commitment } => {
                state.transfer_pub_to_priv(caller, commitment)?
            }
            FinalizeOp::SetForAllApproval {
                approval_key,
                approve,
            } => state.set_for_all_approval(approval_key, approve)?,
            FinalizeOp::ApprovePublic {
                owner,
                approval_key,
                commitment,
            } => state.approve_public(owner, approval_key, commitment)?,
            FinalizeOp::TransferFromPublic {
                approval_key,
                from,
                to,
                commitment,
            } => state.transfer_from_public(approval_key, from, to, commitment)?,
        }
        Ok(())
    }

    /// Apply a block's worth of operations in order
    ///
    /// `entropy` is the block-scoped randomness seed; every random draw
    /// in the block comes from the stream it opens.
    pub fn apply_block(
        &self,
        height: u64,
        entropy: [u8; 32],
        ops: &[FinalizeOp],
    ) -> Vec<OpReceipt> {
        let mut ctx = BlockContext::new(height, entropy);
        let mut receipts = Vec::with_capacity(ops.len());

        for (index, op) in ops.iter().enumerate() {
            match self.apply(&mut ctx, op) {
                Ok(()) => {
                    debug!("op {} `{}` committed at height {}", index, op.name(), height);
                    receipts.push(OpReceipt {
                        index,
                        op: op.name(),
                        success: true,
                        error: None,
                    });
                }
                Err(e) => {
                    warn!(
                        "op {} `{}` rejected at height {}: {}",
                        index,
                        op.name(),
                        height,
                        e
                    );
                    receipts.push(OpReceipt {
                        index,
                        op: op.name(),
                        success: false,
                        error: Some(e.to_string()),
                    });
                }
            }
        }

        receipts
    }
}

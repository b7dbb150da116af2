//! The registry state machine
//!
//! `RegistryState` owns every public mapping and exposes one method per
//! finalize operation. Each method runs all precondition checks before
//! its first write, so a returned error implies the state is exactly as
//! it was — all-or-nothing semantics without a transaction manager.
//! Operations are expected to be applied one at a time in the ledger's
//! total order; conflicting submissions are resolved by whichever lands
//! first, the loser failing its equality preconditions cleanly.

use crate::access::AccessControl;
use crate::approvals::ApprovalRegistry;
use crate::block::BlockContext;
use crate::claims::ClaimLedger;
use crate::content::ContentRegistry;
use crate::errors::{RegistryError, RegistryResult};
use crate::flags::{FlagStore, POST_INIT_FLAGS};
use crate::ownership::OwnershipRegistry;
use crate::pool::MintPool;
use crate::settings::{BaseUri, Settings};
use crate::uniqueness::CommitmentSet;
use obscura_commitment::{Address, ContentData, Digest, Scalar};
use serde::{Deserialize, Serialize};

/// Complete public state of the collection
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct RegistryState {
    access: AccessControl,
    flags: FlagStore,
    settings: Settings,
    commitments: CommitmentSet,
    pool: MintPool,
    claims: ClaimLedger,
    owners: OwnershipRegistry,
    approvals: ApprovalRegistry,
    contents: ContentRegistry,
}

impl RegistryState {
    /// Fresh, uninitialized collection governed by `access`
    pub fn new(access: AccessControl) -> Self {
        Self {
            access,
            flags: FlagStore::new(),
            settings: Settings::default(),
            commitments: CommitmentSet::new(),
            pool: MintPool::new(),
            claims: ClaimLedger::new(),
            owners: OwnershipRegistry::new(),
            approvals: ApprovalRegistry::new(),
            contents: ContentRegistry::new(),
        }
    }

    // --- collection administration ---

    /// One-shot collection setup
    ///
    /// Sets the supply counters and base URI, forces the mint-block
    /// threshold to zero and writes the post-init flag constant.
    /// Re-invocation fails while INITIALIZED is set.
    pub fn initialize_collection(
        &mut self,
        caller: Address,
        max_supply: u128,
        mint_supply: u128,
        base_uri: BaseUri,
    ) -> RegistryResult<()> {
        self.access.require_admin(&caller)?;
        self.flags.require_uninitialized()?;

        self.settings.initialize(max_supply, mint_supply, base_uri);
        self.flags.set_bits(POST_INIT_FLAGS);
        Ok(())
    }

    /// Add a token commitment to the mint pool, consuming one unit of
    /// mintable supply
    pub fn add_token(&mut self, caller: Address, commitment: Digest) -> RegistryResult<()> {
        self.access.require_admin(&caller)?;
        self.flags.require_updatable()?;

        self.settings.debit_supply()?;
        self.pool.add(commitment);
        Ok(())
    }

    /// Authorize issuing a private minter record
    ///
    /// The record itself is a private output of the paired transition;
    /// the public side only verifies the admin and flag gates.
    pub fn add_minter(&mut self, caller: Address) -> RegistryResult<()> {
        self.access.require_admin(&caller)?;
        self.flags.require_updatable()
    }

    /// Overwrite the status flags; INITIALIZED can never be cleared
    pub fn update_flags(&mut self, caller: Address, new_flags: u32) -> RegistryResult<()> {
        self.access.require_admin(&caller)?;
        self.flags.require_updatable()?;
        if new_flags & 1 != 1 {
            return Err(RegistryError::PreconditionFailed(
                "new flags would clear the initialized bit".into(),
            ));
        }

        self.flags.set_bits(new_flags);
        Ok(())
    }

    /// Set the height threshold before which the claim window stays shut
    pub fn set_mint_block(&mut self, caller: Address, height: u64) -> RegistryResult<()> {
        self.access.require_admin(&caller)?;
        self.flags.require_updatable()?;

        self.settings.set_mint_block(height);
        Ok(())
    }

    /// Overwrite the collection symbol
    pub fn update_symbol(&mut self, caller: Address, symbol: u128) -> RegistryResult<()> {
        self.access.require_admin(&caller)?;
        self.flags.require_updatable()?;

        self.settings.set_symbol(symbol);
        Ok(())
    }

    /// Overwrite the base URI limbs
    pub fn update_base_uri(&mut self, caller: Address, base_uri: BaseUri) -> RegistryResult<()> {
        self.access.require_admin(&caller)?;
        self.flags.require_updatable()?;

        self.settings.set_base_uri(base_uri);
        Ok(())
    }

    // --- issuance ---

    /// Direct mint into public custody
    ///
    /// Uniqueness-gated only; the commitment itself is the proof that the
    /// caller knows the (content, edition) preimage.
    pub fn mint(&mut self, commitment: Digest, owner: Address) -> RegistryResult<()> {
        self.commitments.reserve_unique(commitment)?;
        self.owners.insert(commitment, owner);
        Ok(())
    }

    /// Reserve the commitment of a privately re-editioned token
    ///
    /// Shares the uniqueness space with `mint`, so a new edition can
    /// never collide with an existing token. Ownership stays private and
    /// untouched.
    pub fn update_edition_private(&mut self, commitment: Digest) -> RegistryResult<()> {
        self.commitments.reserve_unique(commitment)
    }

    /// Publish the public (content, edition) payload for a commitment
    ///
    /// Intentionally unconditioned; see the content module notes.
    pub fn publish_content(
        &mut self,
        commitment: Digest,
        data: ContentData,
        edition: Scalar,
    ) -> RegistryResult<()> {
        self.contents.publish(commitment, data, edition);
        Ok(())
    }

    // --- randomized claim workflow ---

    /// Open a claim: bind a fresh ticket to a randomly drawn pool entry
    ///
    /// Requires the claim window flags, the mint-block threshold to have
    /// passed, an unused ticket and a non-empty pool. The draw uses the
    /// block's entropy stream, never claimant input.
    pub fn open_mint(&mut self, claim: Digest, ctx: &mut BlockContext) -> RegistryResult<()> {
        if ctx.height() < self.settings.mint_block() {
            return Err(RegistryError::PreconditionFailed(format!(
                "mint opens at height {}, current {}",
                self.settings.mint_block(),
                ctx.height()
            )));
        }
        self.flags.require_claim_open()?;
        self.claims.require_unused(&claim)?;

        let drawn = self.pool.draw(&mut ctx.rng)?;
        self.claims.assign(claim, drawn);
        Ok(())
    }

    /// Redeem a claim ticket against its assigned commitment
    pub fn claim_nft(&mut self, claim: Digest, commitment: Digest) -> RegistryResult<()> {
        self.claims.redeem(claim, commitment)
    }

    // --- custody transitions ---

    /// private -> public: record the new public owner unconditionally
    pub fn transfer_priv_to_pub(&mut self, commitment: Digest, new_owner: Address) -> RegistryResult<()> {
        self.owners.insert(commitment, new_owner);
        Ok(())
    }

    /// public -> public, authorized by the invoking caller
    pub fn transfer_public(
        &mut self,
        caller: Address,
        commitment: Digest,
        new_owner: Address,
    ) -> RegistryResult<()> {
        self.transfer_owned(caller, commitment, new_owner)
    }

    /// public -> public, authorized by the transaction's nominal signer
    ///
    /// Same precondition and effect as `transfer_public`; only the
    /// identity source differs, which matters when the submission is
    /// routed through another program.
    pub fn transfer_public_as_signer(
        &mut self,
        signer: Address,
        commitment: Digest,
        new_owner: Address,
    ) -> RegistryResult<()> {
        self.transfer_owned(signer, commitment, new_owner)
    }

    fn transfer_owned(
        &mut self,
        authority: Address,
        commitment: Digest,
        new_owner: Address,
    ) -> RegistryResult<()> {
        self.owners.require_owner(&commitment, &authority)?;

        self.approvals.clear_delegate(&commitment);
        self.owners.insert(commitment, new_owner);
        Ok(())
    }

    /// public -> private: remove the public entry entirely
    pub fn transfer_pub_to_priv(&mut self, caller: Address, commitment: Digest) -> RegistryResult<()> {
        self.owners.require_owner(&commitment, &caller)?;

        self.approvals.clear_delegate(&commitment);
        self.owners.remove(&commitment);
        Ok(())
    }

    // --- approvals ---

    /// Set or clear a blanket operator flag
    ///
    /// The key is `hash(approver, spender)` computed by the transition
    /// from its own caller, so no ownership check applies here.
    pub fn set_for_all_approval(&mut self, approval_key: Digest, approved: bool) -> RegistryResult<()> {
        self.approvals.set_operator(approval_key, approved);
        Ok(())
    }

    /// Approve a single delegate for one token
    pub fn approve_public(
        &mut self,
        owner: Address,
        approval_key: Digest,
        commitment: Digest,
    ) -> RegistryResult<()> {
        self.owners.require_owner(&commitment, &owner)?;

        self.approvals.set_delegate(commitment, approval_key);
        Ok(())
    }

    /// Delegated public -> public transfer
    ///
    /// `approval_key` is `hash(owner, caller)`. The caller must be the
    /// token's approved delegate or hold the blanket operator flag, and
    /// the asserted owner must match the current one.
    pub fn transfer_from_public(
        &mut self,
        approval_key: Digest,
        from: Address,
        to: Address,
        commitment: Digest,
    ) -> RegistryResult<()> {
        let delegated = self.approvals.delegate_of(&commitment) == Some(approval_key);
        let operator = self.approvals.is_operator(&approval_key);
        if !delegated && !operator {
            return Err(RegistryError::PreconditionFailed(format!(
                "no delegate approval or operator flag for token {}",
                commitment
            )));
        }
        self.owners.require_owner(&commitment, &from)?;

        self.approvals.clear_delegate(&commitment);
        self.owners.insert(commitment, to);
        Ok(())
    }

    // --- read access ---

    pub fn access(&self) -> &AccessControl {
        &self.access
    }

    pub fn access_mut(&mut self) -> &mut AccessControl {
        &mut self.access
    }

    pub fn flags(&self) -> &FlagStore {
        &self.flags
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn commitments(&self) -> &CommitmentSet {
        &self.commitments
    }

    pub fn pool(&self) -> &MintPool {
        &self.pool
    }

    pub fn claims(&self) -> &ClaimLedger {
        &self.claims
    }

    pub fn owners(&self) -> &OwnershipRegistry {
        &self.owners
    }

    pub fn approvals(&self) -> &ApprovalRegistry {
        &self.approvals
    }

    pub fn contents(&self) -> &ContentRegistry {
        &self.contents
    }
}

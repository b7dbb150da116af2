//! Property-Based Tests for the Obscura registry
//!
//! Uses proptest to generate random inputs and verify the registry's
//! structural invariants hold: permutation draws, exactly-once commitment
//! reservation, approval clearing and single-use claims.

use proptest::prelude::*;

use obscura::prelude::*;
use obscura_registry::{MintPool, RegistryState};
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;

// =============================================================================
// PROPTEST STRATEGIES
// =============================================================================

/// Strategy for generating random 32-byte arrays
fn bytes32() -> impl Strategy<Value = [u8; 32]> {
    prop::array::uniform32(any::<u8>())
}

/// Strategy for a set of distinct digests
fn distinct_digests(max: usize) -> impl Strategy<Value = Vec<Digest>> {
    prop::collection::hash_set(bytes32(), 1..max)
        .prop_map(|set| set.into_iter().map(Digest::from_bytes).collect())
}

fn admin() -> Address {
    Address::from_bytes([0xAD; 32])
}

fn fresh_state() -> RegistryState {
    RegistryState::new(AccessControl::single(admin()))
}

// =============================================================================
// MINT POOL PROPERTIES
// =============================================================================

proptest! {
    /// Property: draining the pool yields every entry exactly once, then
    /// the pool rejects further draws
    #[test]
    fn pool_draws_form_permutation(entries in distinct_digests(64), seed in bytes32()) {
        let mut pool = MintPool::new();
        for entry in &entries {
            pool.add(*entry);
        }

        let mut rng = ChaCha20Rng::from_seed(seed);
        let mut drawn = Vec::new();
        while !pool.is_empty() {
            drawn.push(pool.draw(&mut rng).unwrap());
        }

        prop_assert_eq!(drawn.len(), entries.len());
        let mut expected = entries.clone();
        expected.sort();
        drawn.sort();
        prop_assert_eq!(drawn, expected);
        prop_assert!(pool.draw(&mut rng).is_err());
    }

    /// Property: a draw removes exactly one entry and never duplicates
    /// any survivor
    #[test]
    fn pool_draw_is_swap_remove(entries in distinct_digests(64), seed in bytes32()) {
        let mut pool = MintPool::new();
        for entry in &entries {
            pool.add(*entry);
        }

        let mut rng = ChaCha20Rng::from_seed(seed);
        let drawn = pool.draw(&mut rng).unwrap();

        prop_assert_eq!(pool.len(), entries.len() - 1);
        prop_assert!(!pool.entries().contains(&drawn));
        let mut survivors: Vec<_> = pool.entries().to_vec();
        survivors.sort();
        survivors.dedup();
        prop_assert_eq!(survivors.len(), pool.len());
    }
}

// =============================================================================
// COMMITMENT UNIQUENESS PROPERTIES
// =============================================================================

proptest! {
    /// Property: any interleaving of mints and edition updates reserves a
    /// commitment at most once across both paths
    #[test]
    fn commitments_reserved_exactly_once(
        commitments in distinct_digests(32),
        via_mint in prop::collection::vec(any::<bool>(), 32),
    ) {
        let mut state = fresh_state();

        for (i, c) in commitments.iter().enumerate() {
            let owner = Address::from_bytes([i as u8; 32]);
            if via_mint[i % via_mint.len()] {
                prop_assert!(state.mint(*c, owner).is_ok());
            } else {
                prop_assert!(state.update_edition_private(*c).is_ok());
            }

            // Both reuse paths must now fail
            prop_assert!(state.mint(*c, owner).is_err());
            prop_assert!(state.update_edition_private(*c).is_err());
        }

        prop_assert_eq!(state.commitments().len(), commitments.len());
    }
}

// =============================================================================
// OWNERSHIP AND APPROVAL PROPERTIES
// =============================================================================

proptest! {
    /// Property: every successful transfer clears the delegate approval,
    /// whichever transfer flavor performed it
    #[test]
    fn transfers_clear_delegate(
        token in bytes32(),
        owner_seed in 1u8..=200,
        spender_seed in 201u8..=255,
        flavor in 0u8..3,
    ) {
        let token = Digest::from_bytes(token);
        let owner = Address::from_bytes([owner_seed; 32]);
        let spender = Address::from_bytes([spender_seed; 32]);
        let key = approval_key(owner, spender);

        let mut state = fresh_state();
        state.mint(token, owner).unwrap();
        state.approve_public(owner, key, token).unwrap();
        prop_assert_eq!(state.approvals().delegate_of(&token), Some(key));

        let recipient = Address::from_bytes([7u8; 32]);
        match flavor {
            0 => state.transfer_public(owner, token, recipient).unwrap(),
            1 => state.transfer_public_as_signer(owner, token, recipient).unwrap(),
            _ => state.transfer_from_public(key, owner, recipient, token).unwrap(),
        }

        prop_assert_eq!(state.approvals().delegate_of(&token), None);
    }

    /// Property: a claim ticket redeems at most once; a wrong assertion
    /// never consumes it
    #[test]
    fn claim_tickets_are_single_use(
        entries in distinct_digests(16),
        ticket in bytes32(),
        wrong in bytes32(),
        seed in bytes32(),
        entropy in bytes32(),
    ) {
        let ticket = claim_commitment(
            Address::from_bytes(ticket),
            Scalar::from_bytes(seed),
        );
        let wrong = Digest::from_bytes(wrong);

        let mut state = fresh_state();
        state.initialize_collection(admin(), entries.len() as u128, 0, BaseUri::default()).unwrap();
        for entry in &entries {
            state.add_token(admin(), *entry).unwrap();
        }
        state.update_flags(admin(), 3).unwrap();

        let mut ctx = BlockContext::new(1, entropy);
        state.open_mint(ticket, &mut ctx).unwrap();
        let assigned = state.claims().assignment(&ticket);
        prop_assert!(entries.contains(&assigned));

        if wrong != assigned {
            prop_assert!(state.claim_nft(ticket, wrong).is_err());
            prop_assert_eq!(state.claims().assignment(&ticket), assigned);
        }

        prop_assert!(state.claim_nft(ticket, assigned).is_ok());
        prop_assert!(state.claim_nft(ticket, assigned).is_err());
    }
}

// =============================================================================
// ADMIN GATE PROPERTIES
// =============================================================================

proptest! {
    /// Property: a non-admin caller is rejected by every privileged
    /// operation and the state stays bit-for-bit identical
    #[test]
    fn non_admin_calls_have_zero_side_effects(caller in bytes32()) {
        let caller = Address::from_bytes(caller);
        prop_assume!(caller != admin());

        let mut state = fresh_state();
        state.initialize_collection(admin(), 10, 5, BaseUri::default()).unwrap();
        let before = serde_json::to_string(&state).unwrap();

        prop_assert!(state.initialize_collection(caller, 1, 1, BaseUri::default()).is_err());
        prop_assert!(state.add_token(caller, Digest::from_bytes([1u8; 32])).is_err());
        prop_assert!(state.add_minter(caller).is_err());
        prop_assert!(state.update_flags(caller, 3).is_err());
        prop_assert!(state.set_mint_block(caller, 5).is_err());
        prop_assert!(state.update_symbol(caller, 5).is_err());
        prop_assert!(state.update_base_uri(caller, BaseUri([1, 1, 1, 1])).is_err());

        let after = serde_json::to_string(&state).unwrap();
        prop_assert_eq!(before, after);
    }
}

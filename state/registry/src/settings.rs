//! Collection-wide scalar settings

use crate::errors::{RegistryError, RegistryResult};
use serde::{Deserialize, Serialize};

/// Base token URI split into four u128 limbs
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BaseUri(pub [u128; 4]);

/// Scalar settings of the collection
///
/// Populated once by `initialize_collection`; individual slots are
/// overwritten by the dedicated admin operations afterwards.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    /// Tokens that may still be added to the mint pool; counts down to zero
    remaining_supply: u128,
    /// Collection symbol slot; initialized from the mint-supply parameter
    /// and overwritten by `update_symbol`
    symbol: u128,
    /// Base URI limbs
    base_uri: BaseUri,
    /// Block height at which the claim window may open
    mint_block: u64,
}

impl Settings {
    /// Populate all slots at collection initialization
    pub fn initialize(&mut self, max_supply: u128, mint_supply: u128, base_uri: BaseUri) {
        self.remaining_supply = max_supply;
        self.symbol = mint_supply;
        self.base_uri = base_uri;
        self.mint_block = 0;
    }

    /// Consume one unit of mintable supply
    ///
    /// The counter is unsigned; an empty counter is a typed rejection,
    /// never an underflow.
    pub fn debit_supply(&mut self) -> RegistryResult<()> {
        if self.remaining_supply == 0 {
            return Err(RegistryError::PoolExhausted);
        }
        self.remaining_supply -= 1;
        Ok(())
    }

    pub fn remaining_supply(&self) -> u128 {
        self.remaining_supply
    }

    pub fn symbol(&self) -> u128 {
        self.symbol
    }

    pub fn set_symbol(&mut self, symbol: u128) {
        self.symbol = symbol;
    }

    pub fn base_uri(&self) -> BaseUri {
        self.base_uri
    }

    pub fn set_base_uri(&mut self, base_uri: BaseUri) {
        self.base_uri = base_uri;
    }

    pub fn mint_block(&self) -> u64 {
        self.mint_block
    }

    pub fn set_mint_block(&mut self, height: u64) {
        self.mint_block = height;
    }
}

use soroban_fixed_point_math::SorobanFixedPoint;
use soroban_sdk::{panic_with_error, Env};

use crate::{
    constants::BPS_DENOMINATOR, dependencies::StrategyClient, errors::VaultChefError, storage,
    types::VaultInfo,
};

/// Fetch the underlying backing a vault's shares
///
/// Reads the strategy live until the vault is panicked, then the chef's custody.
pub fn total_underlying(e: &Env, vault_id: u32, vault: &VaultInfo) -> i128 {
    if vault.is_panicked() {
        storage::get_custody(e, vault_id)
    } else {
        StrategyClient::new(e, &vault.strategy).total_managed_underlying()
    }
}

/// The exchange rate inputs of a vault, captured once per operation
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Snapshot {
    pub total_underlying: i128,
    pub total_shares: i128,
}

impl Snapshot {
    pub fn load(e: &Env, vault_id: u32, vault: &VaultInfo) -> Self {
        Snapshot {
            total_underlying: total_underlying(e, vault_id, vault),
            total_shares: storage::get_supply(e, vault_id),
        }
    }

    /// Shares minted for `amount` underlying, rounded down
    ///
    /// ### Panics
    /// If shares exist but nothing backs them
    pub fn shares_for_underlying(&self, e: &Env, amount: i128) -> i128 {
        if self.total_shares == 0 {
            return amount;
        }
        if self.total_underlying <= 0 {
            panic_with_error!(e, VaultChefError::InvalidExchangeRate);
        }
        amount.fixed_mul_floor(e, &self.total_shares, &self.total_underlying)
    }

    /// Underlying paid for `shares`, rounded down
    pub fn underlying_for_shares(&self, e: &Env, shares: i128) -> i128 {
        if self.total_shares == 0 {
            return 0;
        }
        shares.fixed_mul_floor(e, &self.total_underlying, &self.total_shares)
    }

    /// Shares minted to the fee recipient out of a harvest of `yield_amount`
    ///
    /// The fee is taken by dilution: the minted shares are worth the fee portion of the
    /// yield at the post-harvest exchange rate.
    pub fn fee_shares(&self, e: &Env, yield_amount: i128, performance_fee_bps: u32) -> i128 {
        let fee_underlying =
            yield_amount.fixed_mul_floor(e, &(performance_fee_bps as i128), &BPS_DENOMINATOR);
        if self.total_shares == 0 || fee_underlying == 0 {
            return 0;
        }
        fee_underlying.fixed_mul_floor(
            e,
            &self.total_shares,
            &(self.total_underlying + yield_amount),
        )
    }
}

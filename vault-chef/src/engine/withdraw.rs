use sep_41_token::TokenClient;
use soroban_sdk::{panic_with_error, Address, Env};

use crate::{
    access::require_whitelisted,
    dependencies::StrategyClient,
    engine::math::Snapshot,
    errors::VaultChefError,
    events::VaultChefEvents,
    ledger,
    registry::require_vault,
    storage,
    types::VaultInfo,
};

/// Redeem `shares` of `from` and pay the underlying to `to`, returning the amount paid
///
/// Withdrawals are allowed in every vault status.
///
/// ### Arguments
/// * `spender` - The account executing the withdrawal, `from` or an operator it approved
/// * `from` - The share holder
/// * `vault_id` - The vault
/// * `shares` - The amount of shares to redeem
/// * `min_underlying` - The least amount of underlying the withdrawal may pay
/// * `to` - The recipient of the underlying
///
/// ### Panics
/// If `from` holds fewer than `shares`, `spender` is not approved, the holder tries to
/// redirect the proceeds itself, or less than `min_underlying` is paid
pub fn execute_withdraw_shares_to(
    e: &Env,
    spender: &Address,
    from: &Address,
    vault_id: u32,
    shares: i128,
    min_underlying: i128,
    to: &Address,
) -> i128 {
    require_whitelisted(e, spender);
    let vault = require_vault(e, vault_id);
    withdraw(e, spender, from, vault_id, &vault, shares, min_underlying, to)
}

/// Redeem enough shares of `user` to withdraw `amount` underlying, rounded in favor of the vault
pub fn execute_withdraw(e: &Env, user: &Address, vault_id: u32, amount: i128) -> i128 {
    require_whitelisted(e, user);
    let vault = require_vault(e, vault_id);
    if amount < 0 {
        panic_with_error!(e, VaultChefError::InvalidAmount);
    }

    let snapshot = Snapshot::load(e, vault_id, &vault);
    // nothing left to redeem against, `emergency_withdraw` still burns the shares
    let shares = if snapshot.total_underlying <= 0 {
        0
    } else {
        snapshot.shares_for_underlying(e, amount)
    };
    withdraw(e, user, user, vault_id, &vault, shares, 0, user)
}

/// Redeem every share `user` holds, with no slippage bound
pub fn execute_emergency_withdraw(e: &Env, user: &Address, vault_id: u32) -> i128 {
    require_whitelisted(e, user);
    let vault = require_vault(e, vault_id);

    let shares = storage::get_balance(e, vault_id, user);
    withdraw(e, user, user, vault_id, &vault, shares, 0, user)
}

#[allow(clippy::too_many_arguments)]
fn withdraw(
    e: &Env,
    spender: &Address,
    from: &Address,
    vault_id: u32,
    vault: &VaultInfo,
    shares: i128,
    min_underlying: i128,
    to: &Address,
) -> i128 {
    if shares < 0 {
        panic_with_error!(e, VaultChefError::InvalidAmount);
    }
    if shares == 0 {
        panic_with_error!(e, VaultChefError::ZeroShares);
    }
    if storage::get_balance(e, vault_id, from) < shares {
        panic_with_error!(e, VaultChefError::InsufficientShares);
    }
    if spender != from {
        ledger::require_operator(e, from, spender);
    } else if to != from {
        panic_with_error!(e, VaultChefError::PhishingGuard);
    }

    let underlying = Snapshot::load(e, vault_id, vault).underlying_for_shares(e, shares);
    ledger::burn(e, vault_id, from, shares);

    let token = TokenClient::new(e, &vault.underlying);
    let chef = e.current_contract_address();
    let actual = if vault.is_panicked() {
        let custody = storage::get_custody(e, vault_id);
        storage::set_custody(e, vault_id, custody - underlying);
        let reserved = storage::get_reserved(e, &vault.underlying);
        storage::set_reserved(e, &vault.underlying, reserved - underlying);
        underlying
    } else if underlying > 0 {
        let balance_before = token.balance(&chef);
        StrategyClient::new(e, &vault.strategy).withdraw_to_vault(&underlying);
        let received = token.balance(&chef) - balance_before;
        received.clamp(0, underlying)
    } else {
        0
    };

    if actual < min_underlying {
        panic_with_error!(e, VaultChefError::SlippageExceeded);
    }
    if actual > 0 {
        token.transfer(&chef, to, &actual);
    }

    VaultChefEvents::withdraw(e, vault_id, spender.clone(), to.clone(), shares, actual);
    actual
}

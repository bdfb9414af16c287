use sep_41_token::TokenClient;
use soroban_sdk::{panic_with_error, Address, Env};

use crate::{
    access::require_owner, dependencies::StrategyClient, errors::VaultChefError,
    events::VaultChefEvents, registry::require_vault, storage,
};

/// Recover tokens sitting in the chef that no panicked vault has a claim on
///
/// ### Panics
/// If `amount` is not positive or would dip into panic custody
pub fn execute_rescue_tokens(e: &Env, token: &Address, to: &Address, amount: i128) {
    require_owner(e);
    if amount <= 0 {
        panic_with_error!(e, VaultChefError::InvalidAmount);
    }

    let client = TokenClient::new(e, token);
    let free = client.balance(&e.current_contract_address()) - storage::get_reserved(e, token);
    if amount > free {
        panic_with_error!(e, VaultChefError::UnsafeRescue);
    }

    client.transfer(&e.current_contract_address(), to, &amount);
    VaultChefEvents::tokens_rescued(e, token.clone(), to.clone(), amount);
}

/// Recover foreign tokens stuck in a vault's strategy
///
/// ### Panics
/// If `token` is the vault's underlying or the strategy's managed total moves
pub fn execute_rescue_vault_tokens(
    e: &Env,
    vault_id: u32,
    token: &Address,
    to: &Address,
    amount: i128,
) {
    require_owner(e);
    let vault = require_vault(e, vault_id);
    if *token == vault.underlying {
        panic_with_error!(e, VaultChefError::UnsafeRescue);
    }

    let strategy = StrategyClient::new(e, &vault.strategy);
    let managed_before = strategy.total_managed_underlying();
    strategy.rescue_foreign_tokens(token, to, &amount);
    if strategy.total_managed_underlying() != managed_before {
        panic_with_error!(e, VaultChefError::UnsafeRescue);
    }

    VaultChefEvents::vault_tokens_rescued(e, vault_id, token.clone(), to.clone(), amount);
}

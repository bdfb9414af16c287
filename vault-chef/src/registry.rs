use sep_41_token::TokenClient;
use soroban_sdk::{log, panic_with_error, Address, Env};

use crate::{
    access::require_owner,
    constants::MAX_PERFORMANCE_FEE_BPS,
    dependencies::StrategyClient,
    errors::VaultChefError,
    events::VaultChefEvents,
    storage,
    types::{VaultInfo, VaultStatus},
};

/// Load a vault record
///
/// ### Panics
/// If `vault_id` was never assigned
pub fn require_vault(e: &Env, vault_id: u32) -> VaultInfo {
    if vault_id >= storage::get_vault_count(e) {
        panic_with_error!(e, VaultChefError::VaultNotFound);
    }
    storage::get_vault(e, vault_id)
}

/// Load a vault record that accepts deposits and harvests
pub fn require_active_vault(e: &Env, vault_id: u32) -> VaultInfo {
    let vault = require_vault(e, vault_id);
    match vault.status {
        VaultStatus::Active => vault,
        VaultStatus::Paused => panic_with_error!(e, VaultChefError::VaultPaused),
        VaultStatus::Panicked => panic_with_error!(e, VaultChefError::VaultPanicked),
    }
}

fn require_valid_fee(e: &Env, performance_fee_bps: u32) {
    if performance_fee_bps > MAX_PERFORMANCE_FEE_BPS {
        panic_with_error!(e, VaultChefError::InvalidFee);
    }
}

pub fn execute_add_vault(e: &Env, strategy: &Address, performance_fee_bps: u32) -> u32 {
    require_owner(e);
    require_valid_fee(e, performance_fee_bps);
    if storage::get_strategy_vault(e, strategy).is_some() {
        panic_with_error!(e, VaultChefError::StrategyAlreadyLinked);
    }

    let underlying = StrategyClient::new(e, strategy).underlying_token();
    let vault_id = storage::get_vault_count(e);
    let vault = VaultInfo {
        underlying,
        last_harvest_timestamp: 0,
        strategy: strategy.clone(),
        performance_fee_bps,
        status: VaultStatus::Active,
    };
    storage::set_vault(e, vault_id, &vault);
    storage::set_strategy_vault(e, strategy, vault_id);
    storage::set_vault_count(e, vault_id + 1);

    VaultChefEvents::vault_added(e, vault_id, strategy.clone(), performance_fee_bps);
    vault_id
}

pub fn execute_set_vault(e: &Env, vault_id: u32, performance_fee_bps: u32) {
    require_owner(e);
    let mut vault = require_vault(e, vault_id);
    require_valid_fee(e, performance_fee_bps);

    vault.performance_fee_bps = performance_fee_bps;
    storage::set_vault(e, vault_id, &vault);
    VaultChefEvents::vault_fee_set(e, vault_id, performance_fee_bps);
}

pub fn execute_pause_vault(e: &Env, vault_id: u32, pause: bool) {
    require_owner(e);
    let mut vault = require_vault(e, vault_id);

    if vault.is_paused() == pause {
        panic_with_error!(e, VaultChefError::NoOpPauseState);
    }
    if vault.is_panicked() {
        panic_with_error!(e, VaultChefError::VaultPanicked);
    }

    vault.status = if pause {
        VaultStatus::Paused
    } else {
        VaultStatus::Active
    };
    storage::set_vault(e, vault_id, &vault);
    VaultChefEvents::vault_paused(e, vault_id, pause);
}

/// Pull every unit out of the vault's strategy into the chef's custody. Terminal.
pub fn execute_panic_vault(e: &Env, vault_id: u32) -> i128 {
    require_owner(e);
    let mut vault = require_vault(e, vault_id);
    if vault.is_panicked() {
        panic_with_error!(e, VaultChefError::AlreadyPanicked);
    }

    vault.status = VaultStatus::Panicked;
    storage::set_vault(e, vault_id, &vault);

    let token = TokenClient::new(e, &vault.underlying);
    let chef = e.current_contract_address();
    let balance_before = token.balance(&chef);
    StrategyClient::new(e, &vault.strategy).panic_to_vault();
    let recovered = token.balance(&chef) - balance_before;
    if recovered < 0 {
        panic_with_error!(e, VaultChefError::InvalidAmount);
    }

    storage::set_custody(e, vault_id, recovered);
    let reserved = storage::get_reserved(e, &vault.underlying);
    storage::set_reserved(e, &vault.underlying, reserved + recovered);

    log!(e, "vault panicked", vault_id, recovered);
    VaultChefEvents::vault_panicked(e, vault_id, recovered);
    recovered
}

/********** Queries **********/

pub fn is_valid_vault(e: &Env, vault_id: u32) -> bool {
    vault_id < storage::get_vault_count(e)
}

pub fn strategy_exists(e: &Env, strategy: &Address) -> bool {
    storage::get_strategy_vault(e, strategy).is_some()
}

use soroban_sdk::{panic_with_error, Address, Env, Vec};

use crate::{
    access::require_whitelisted, errors::VaultChefError, events::VaultChefEvents,
    registry::require_vault, storage,
};

/// Mint `amount` shares of vault `vault_id` to `account`
///
/// ### Panics
/// If `amount` is not positive
pub fn mint(e: &Env, vault_id: u32, account: &Address, amount: i128) {
    if amount <= 0 {
        panic_with_error!(e, VaultChefError::ZeroAmount);
    }
    let balance = storage::get_balance(e, vault_id, account);
    storage::set_balance(e, vault_id, account, balance + amount);
    let supply = storage::get_supply(e, vault_id);
    storage::set_supply(e, vault_id, supply + amount);
}

/// Burn `amount` shares of vault `vault_id` from `account`
///
/// ### Panics
/// If `amount` is not positive or exceeds the account's balance
pub fn burn(e: &Env, vault_id: u32, account: &Address, amount: i128) {
    if amount <= 0 {
        panic_with_error!(e, VaultChefError::ZeroAmount);
    }
    let balance = storage::get_balance(e, vault_id, account);
    if balance < amount {
        panic_with_error!(e, VaultChefError::InsufficientShares);
    }
    storage::set_balance(e, vault_id, account, balance - amount);
    let supply = storage::get_supply(e, vault_id);
    storage::set_supply(e, vault_id, supply - amount);
}

/// Move shares between accounts. Supply is unchanged.
pub fn transfer(e: &Env, vault_id: u32, from: &Address, to: &Address, amount: i128) {
    burn(e, vault_id, from, amount);
    mint(e, vault_id, to, amount);
}

/// Checks `operator` may act on `owner`'s shares
pub fn require_operator(e: &Env, owner: &Address, operator: &Address) {
    if owner != operator && !storage::is_approved(e, owner, operator) {
        panic_with_error!(e, VaultChefError::NotApproved);
    }
}

/********** Share Transfers **********/

pub fn execute_transfer_shares(
    e: &Env,
    spender: &Address,
    from: &Address,
    to: &Address,
    vault_id: u32,
    amount: i128,
) {
    require_whitelisted(e, spender);
    require_vault(e, vault_id);
    require_operator(e, from, spender);

    transfer(e, vault_id, from, to, amount);
    VaultChefEvents::transfer_single(e, spender.clone(), from.clone(), to.clone(), vault_id, amount);
}

pub fn execute_batch_transfer_shares(
    e: &Env,
    from: &Address,
    to: &Address,
    vault_ids: &Vec<u32>,
    amounts: &Vec<i128>,
) {
    require_whitelisted(e, from);
    if vault_ids.len() != amounts.len() {
        panic_with_error!(e, VaultChefError::LengthMismatch);
    }

    for (vault_id, amount) in vault_ids.iter().zip(amounts.iter()) {
        require_vault(e, vault_id);
        transfer(e, vault_id, from, to, amount);
    }
    VaultChefEvents::transfer_batch(
        e,
        from.clone(),
        from.clone(),
        to.clone(),
        vault_ids.clone(),
        amounts.clone(),
    );
}

pub fn execute_set_approval_for_all(e: &Env, owner: &Address, operator: &Address, approved: bool) {
    require_whitelisted(e, owner);

    storage::set_approved(e, owner, operator, approved);
    VaultChefEvents::approval_for_all(e, owner.clone(), operator.clone(), approved);
}

use soroban_sdk::{panic_with_error, Address, Env, Vec};

use crate::{errors::VaultChefError, events::VaultChefEvents, storage};

/// Panics with `NotWhitelisted` unless `account` is on the whitelist
pub fn require_whitelisted(e: &Env, account: &Address) {
    if !storage::is_whitelisted(e, account) {
        panic_with_error!(e, VaultChefError::NotWhitelisted);
    }
}

/// Loads the owner and requires its authorization
///
/// ### Panics
/// If ownership was renounced or the owner did not authorize the call
pub fn require_owner(e: &Env) -> Address {
    match storage::get_owner(e) {
        Some(owner) => {
            owner.require_auth();
            owner
        }
        None => panic_with_error!(e, VaultChefError::Unauthorized),
    }
}

/// Checks `caller` may harvest under the configured policy
pub fn require_harvester(e: &Env, caller: &Address) {
    require_whitelisted(e, caller);
    if storage::get_harvest_owner_only(e) && storage::get_owner(e).as_ref() != Some(caller) {
        panic_with_error!(e, VaultChefError::Unauthorized);
    }
}

pub fn execute_initialize(e: &Env, owner: &Address) {
    storage::set_owner(e, owner);
    storage::set_fee_recipient(e, owner);
    storage::set_harvest_owner_only(e, false);
    storage::set_vault_count(e, 0);
}

/********** Ownership **********/

pub fn execute_set_pending_owner(e: &Env, candidate: &Address) {
    require_owner(e);

    let previous = storage::get_pending_owner(e);
    storage::set_pending_owner(e, candidate);
    VaultChefEvents::pending_owner(e, previous, candidate.clone());
}

pub fn execute_complete_ownership_transfer(e: &Env) {
    let pending = match storage::get_pending_owner(e) {
        Some(pending) => pending,
        None => panic_with_error!(e, VaultChefError::Unauthorized),
    };
    pending.require_auth();

    let previous = match storage::get_owner(e) {
        Some(owner) => owner,
        None => panic_with_error!(e, VaultChefError::Unauthorized),
    };
    storage::set_owner(e, &pending);
    storage::del_pending_owner(e);
    VaultChefEvents::owner_transfer(e, previous, Some(pending));
}

pub fn execute_renounce_ownership(e: &Env) {
    let owner = require_owner(e);

    // a stale candidate must not be able to claim ownership afterwards
    storage::del_pending_owner(e);
    storage::del_owner(e);
    VaultChefEvents::owner_transfer(e, owner, None);
}

/********** Whitelist & Delegation **********/

pub fn execute_set_whitelisted(e: &Env, account: &Address, whitelisted: bool) {
    require_owner(e);

    storage::set_whitelisted(e, account, whitelisted);
    VaultChefEvents::whitelist_set(e, account.clone(), whitelisted);
}

pub fn execute_add_multiple_to_whitelist(e: &Env, accounts: &Vec<Address>) {
    require_owner(e);

    for account in accounts.iter() {
        storage::set_whitelisted(e, &account, true);
        VaultChefEvents::whitelist_set(e, account, true);
    }
}

pub fn execute_set_pull_depositor(e: &Env, account: &Address, enabled: bool) {
    require_owner(e);

    storage::set_pull_depositor(e, account, enabled);
    VaultChefEvents::pull_depositor_set(e, account.clone(), enabled);
}

/********** Fee & Harvest Policy **********/

pub fn execute_set_fee_recipient(e: &Env, recipient: &Address) {
    require_owner(e);

    storage::set_fee_recipient(e, recipient);
    VaultChefEvents::fee_recipient_set(e, recipient.clone());
}

pub fn execute_set_harvest_policy(e: &Env, owner_only: bool) {
    require_owner(e);

    storage::set_harvest_owner_only(e, owner_only);
    VaultChefEvents::harvest_policy_set(e, owner_only);
}

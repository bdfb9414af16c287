use soroban_sdk::{
    contracttype, unwrap::UnwrapOptimized, Address, Env, IntoVal, Symbol, TryFromVal, Val,
};

use crate::types::VaultInfo;

/********** Ledger Thresholds **********/

const ONE_DAY_LEDGERS: u32 = 17280; // assumes 5s a ledger
const LEDGER_THRESHOLD_INSTANCE: u32 = ONE_DAY_LEDGERS * 30; // ~ 30 days
const LEDGER_BUMP_INSTANCE: u32 = LEDGER_THRESHOLD_INSTANCE + ONE_DAY_LEDGERS; // ~ 31 days
const LEDGER_THRESHOLD_SHARED: u32 = ONE_DAY_LEDGERS * 45; // ~ 45 days
const LEDGER_BUMP_SHARED: u32 = LEDGER_THRESHOLD_SHARED + ONE_DAY_LEDGERS; // ~ 46 days
const LEDGER_THRESHOLD_USER: u32 = ONE_DAY_LEDGERS * 100; // ~ 100 days
const LEDGER_BUMP_USER: u32 = LEDGER_THRESHOLD_USER + 20 * ONE_DAY_LEDGERS; // ~ 120 days

/********** Storage Types **********/

const OWNER_KEY: &str = "Owner";
const PENDING_OWNER_KEY: &str = "PendOwner";
const FEE_RECIPIENT_KEY: &str = "FeeRecip";
const HARVEST_OWNER_ONLY_KEY: &str = "HarvestOwn";
const VAULT_COUNT_KEY: &str = "VaultCount";

#[derive(Clone)]
#[contracttype]
pub struct BalanceKey {
    pub vault_id: u32,
    pub account: Address,
}

#[derive(Clone)]
#[contracttype]
pub struct ApprovalKey {
    pub owner: Address,
    pub operator: Address,
}

#[derive(Clone)]
#[contracttype]
pub enum VaultChefDataKey {
    // Vault record by id
    Vault(u32),
    // Strategy address to the vault id it backs
    StrategyVault(Address),
    // Share balance of an account in a vault
    Balance(BalanceKey),
    // Total shares of a vault
    Supply(u32),
    // Underlying held by the chef for a panicked vault
    Custody(u32),
    // Sum of custody across vaults for an underlying token
    Reserved(Address),
    Whitelisted(Address),
    PullDepositor(Address),
    Approval(ApprovalKey),
}

/********** Storage **********/

/// Bump the instance rent for the contract
pub fn extend_instance(e: &Env) {
    e.storage()
        .instance()
        .extend_ttl(LEDGER_THRESHOLD_INSTANCE, LEDGER_BUMP_INSTANCE);
}

/// Fetch an entry in persistent storage that has a default value if it doesn't exist
fn get_persistent_default<K: IntoVal<Env, Val>, V: TryFromVal<Env, Val>, F: FnOnce() -> V>(
    e: &Env,
    key: &K,
    default: F,
    bump_threshold: u32,
    bump_amount: u32,
) -> V {
    if let Some(result) = e.storage().persistent().get::<K, V>(key) {
        e.storage()
            .persistent()
            .extend_ttl(key, bump_threshold, bump_amount);
        result
    } else {
        default()
    }
}

fn set_persistent<K: IntoVal<Env, Val>, V: IntoVal<Env, Val>>(
    e: &Env,
    key: &K,
    value: &V,
    bump_threshold: u32,
    bump_amount: u32,
) {
    e.storage().persistent().set::<K, V>(key, value);
    e.storage()
        .persistent()
        .extend_ttl(key, bump_threshold, bump_amount);
}

/********** Owner **********/

/// Fetch the current owner, `None` once ownership has been renounced
pub fn get_owner(e: &Env) -> Option<Address> {
    e.storage().instance().get(&Symbol::new(e, OWNER_KEY))
}

/// Set a new owner
///
/// ### Arguments
/// * `owner` - The Address for the owner
pub fn set_owner(e: &Env, owner: &Address) {
    e.storage()
        .instance()
        .set::<Symbol, Address>(&Symbol::new(e, OWNER_KEY), owner);
}

/// Remove the owner permanently
pub fn del_owner(e: &Env) {
    e.storage().instance().remove(&Symbol::new(e, OWNER_KEY));
}

/// Fetch the pending owner, if a transfer has been started
pub fn get_pending_owner(e: &Env) -> Option<Address> {
    e.storage().instance().get(&Symbol::new(e, PENDING_OWNER_KEY))
}

/// Set a new pending owner
///
/// ### Arguments
/// * `pending_owner` - The Address allowed to complete the transfer
pub fn set_pending_owner(e: &Env, pending_owner: &Address) {
    e.storage()
        .instance()
        .set::<Symbol, Address>(&Symbol::new(e, PENDING_OWNER_KEY), pending_owner);
}

pub fn del_pending_owner(e: &Env) {
    e.storage()
        .instance()
        .remove(&Symbol::new(e, PENDING_OWNER_KEY));
}

/********** Fee Recipient **********/

/// Fetch the address receiving performance fee shares
///
/// ### Panics
/// If the fee recipient was never set
pub fn get_fee_recipient(e: &Env) -> Address {
    e.storage()
        .instance()
        .get(&Symbol::new(e, FEE_RECIPIENT_KEY))
        .unwrap_optimized()
}

pub fn set_fee_recipient(e: &Env, recipient: &Address) {
    e.storage()
        .instance()
        .set::<Symbol, Address>(&Symbol::new(e, FEE_RECIPIENT_KEY), recipient);
}

/********** Harvest Policy **********/

/// Whether harvests are restricted to the owner
pub fn get_harvest_owner_only(e: &Env) -> bool {
    e.storage()
        .instance()
        .get(&Symbol::new(e, HARVEST_OWNER_ONLY_KEY))
        .unwrap_or(false)
}

pub fn set_harvest_owner_only(e: &Env, owner_only: bool) {
    e.storage()
        .instance()
        .set::<Symbol, bool>(&Symbol::new(e, HARVEST_OWNER_ONLY_KEY), &owner_only);
}

/********** Whitelist **********/

pub fn is_whitelisted(e: &Env, account: &Address) -> bool {
    let key = VaultChefDataKey::Whitelisted(account.clone());
    get_persistent_default(e, &key, || false, LEDGER_THRESHOLD_USER, LEDGER_BUMP_USER)
}

/// Add or remove an account from the whitelist
///
/// ### Arguments
/// * `account` - The account
/// * `whitelisted` - The new membership
pub fn set_whitelisted(e: &Env, account: &Address, whitelisted: bool) {
    let key = VaultChefDataKey::Whitelisted(account.clone());
    if whitelisted {
        set_persistent(e, &key, &true, LEDGER_THRESHOLD_USER, LEDGER_BUMP_USER);
    } else {
        e.storage().persistent().remove(&key);
    }
}

/********** Pull Depositors **********/

pub fn is_pull_depositor(e: &Env, account: &Address) -> bool {
    let key = VaultChefDataKey::PullDepositor(account.clone());
    get_persistent_default(e, &key, || false, LEDGER_THRESHOLD_SHARED, LEDGER_BUMP_SHARED)
}

pub fn set_pull_depositor(e: &Env, account: &Address, enabled: bool) {
    let key = VaultChefDataKey::PullDepositor(account.clone());
    if enabled {
        set_persistent(e, &key, &true, LEDGER_THRESHOLD_SHARED, LEDGER_BUMP_SHARED);
    } else {
        e.storage().persistent().remove(&key);
    }
}

/********** Vaults **********/

/// Fetch the number of vaults ever added
pub fn get_vault_count(e: &Env) -> u32 {
    e.storage()
        .instance()
        .get::<Symbol, u32>(&Symbol::new(e, VAULT_COUNT_KEY))
        .unwrap_or(0)
}

pub fn set_vault_count(e: &Env, count: u32) {
    e.storage()
        .instance()
        .set::<Symbol, u32>(&Symbol::new(e, VAULT_COUNT_KEY), &count);
}

/// Fetch a vault record by id
///
/// ### Arguments
/// * `vault_id` - The id of the vault
///
/// ### Panics
/// If the vault does not exist
pub fn get_vault(e: &Env, vault_id: u32) -> VaultInfo {
    let key = VaultChefDataKey::Vault(vault_id);
    e.storage()
        .persistent()
        .extend_ttl(&key, LEDGER_THRESHOLD_SHARED, LEDGER_BUMP_SHARED);
    e.storage()
        .persistent()
        .get::<VaultChefDataKey, VaultInfo>(&key)
        .unwrap_optimized()
}

/// Set a vault record
///
/// ### Arguments
/// * `vault_id` - The id of the vault
/// * `vault` - The vault record
pub fn set_vault(e: &Env, vault_id: u32, vault: &VaultInfo) {
    let key = VaultChefDataKey::Vault(vault_id);
    set_persistent(e, &key, vault, LEDGER_THRESHOLD_SHARED, LEDGER_BUMP_SHARED);
}

/// Fetch the vault id a strategy backs, if any
///
/// ### Arguments
/// * `strategy` - The strategy address
pub fn get_strategy_vault(e: &Env, strategy: &Address) -> Option<u32> {
    let key = VaultChefDataKey::StrategyVault(strategy.clone());
    let vault_id = e.storage().persistent().get::<VaultChefDataKey, u32>(&key);
    if vault_id.is_some() {
        e.storage()
            .persistent()
            .extend_ttl(&key, LEDGER_THRESHOLD_SHARED, LEDGER_BUMP_SHARED);
    }
    vault_id
}

pub fn set_strategy_vault(e: &Env, strategy: &Address, vault_id: u32) {
    let key = VaultChefDataKey::StrategyVault(strategy.clone());
    set_persistent(e, &key, &vault_id, LEDGER_THRESHOLD_SHARED, LEDGER_BUMP_SHARED);
}

/********** Panic Custody **********/

/// Fetch the underlying the chef holds on behalf of a panicked vault
pub fn get_custody(e: &Env, vault_id: u32) -> i128 {
    let key = VaultChefDataKey::Custody(vault_id);
    get_persistent_default(e, &key, || 0, LEDGER_THRESHOLD_SHARED, LEDGER_BUMP_SHARED)
}

pub fn set_custody(e: &Env, vault_id: u32, amount: i128) {
    let key = VaultChefDataKey::Custody(vault_id);
    set_persistent(e, &key, &amount, LEDGER_THRESHOLD_SHARED, LEDGER_BUMP_SHARED);
}

/// Fetch the amount of `token` the chef holds in custody across all vaults
pub fn get_reserved(e: &Env, token: &Address) -> i128 {
    let key = VaultChefDataKey::Reserved(token.clone());
    get_persistent_default(e, &key, || 0, LEDGER_THRESHOLD_SHARED, LEDGER_BUMP_SHARED)
}

pub fn set_reserved(e: &Env, token: &Address, amount: i128) {
    let key = VaultChefDataKey::Reserved(token.clone());
    set_persistent(e, &key, &amount, LEDGER_THRESHOLD_SHARED, LEDGER_BUMP_SHARED);
}

/********** Shares **********/

/// Fetch an account's share balance in a vault
///
/// ### Arguments
/// * `vault_id` - The id of the vault
/// * `account` - The share holder
pub fn get_balance(e: &Env, vault_id: u32, account: &Address) -> i128 {
    let key = VaultChefDataKey::Balance(BalanceKey {
        vault_id,
        account: account.clone(),
    });
    get_persistent_default(e, &key, || 0, LEDGER_THRESHOLD_USER, LEDGER_BUMP_USER)
}

pub fn set_balance(e: &Env, vault_id: u32, account: &Address, amount: i128) {
    let key = VaultChefDataKey::Balance(BalanceKey {
        vault_id,
        account: account.clone(),
    });
    set_persistent(e, &key, &amount, LEDGER_THRESHOLD_USER, LEDGER_BUMP_USER);
}

/// Fetch the total shares issued by a vault
pub fn get_supply(e: &Env, vault_id: u32) -> i128 {
    let key = VaultChefDataKey::Supply(vault_id);
    get_persistent_default(e, &key, || 0, LEDGER_THRESHOLD_SHARED, LEDGER_BUMP_SHARED)
}

pub fn set_supply(e: &Env, vault_id: u32, supply: i128) {
    let key = VaultChefDataKey::Supply(vault_id);
    set_persistent(e, &key, &supply, LEDGER_THRESHOLD_SHARED, LEDGER_BUMP_SHARED);
}

/********** Approvals **********/

pub fn is_approved(e: &Env, owner: &Address, operator: &Address) -> bool {
    let key = VaultChefDataKey::Approval(ApprovalKey {
        owner: owner.clone(),
        operator: operator.clone(),
    });
    get_persistent_default(e, &key, || false, LEDGER_THRESHOLD_USER, LEDGER_BUMP_USER)
}

/// Grant or revoke an operator over all of an owner's shares
///
/// ### Arguments
/// * `owner` - The share holder
/// * `operator` - The account allowed to move the owner's shares
/// * `approved` - The new approval state
pub fn set_approved(e: &Env, owner: &Address, operator: &Address, approved: bool) {
    let key = VaultChefDataKey::Approval(ApprovalKey {
        owner: owner.clone(),
        operator: operator.clone(),
    });
    if approved {
        set_persistent(e, &key, &true, LEDGER_THRESHOLD_USER, LEDGER_BUMP_USER);
    } else {
        e.storage().persistent().remove(&key);
    }
}

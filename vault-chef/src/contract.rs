use soroban_sdk::{contract, contractclient, contractimpl, Address, BytesN, Env, Vec};

use crate::{
    access, engine,
    engine::Snapshot,
    events::VaultChefEvents,
    ledger, registry, storage,
    types::VaultInfo,
};

#[contract]
pub struct VaultChefContract;

#[contractclient(name = "VaultChefClient")]
pub trait VaultChef {
    /********** Ownership **********/

    /// Fetch the owner, `None` once ownership has been renounced
    fn owner(e: Env) -> Option<Address>;

    /// Fetch the address allowed to complete an ownership transfer, if any
    fn pending_owner(e: Env) -> Option<Address>;

    /// (Owner only) Start an ownership transfer. The candidate must accept it with
    /// `complete_ownership_transfer` to take effect.
    ///
    /// ### Arguments
    /// * `candidate` - The address that may take over ownership
    ///
    /// ### Panics
    /// If the caller is not the owner
    fn set_pending_owner(e: Env, candidate: Address);

    /// (Pending owner only) Accept ownership
    ///
    /// ### Panics
    /// If there is no pending owner or it did not authorize the call
    fn complete_ownership_transfer(e: Env);

    /// (Owner only) Give up ownership for good. Every owner gated function is disabled
    /// afterwards.
    ///
    /// ### Panics
    /// If the caller is not the owner
    fn renounce_ownership(e: Env);

    /********** Access **********/

    /// (Owner only) Add or remove an account from the whitelist
    ///
    /// ### Arguments
    /// * `account` - The account
    /// * `whitelisted` - Whether the account may use the chef
    fn set_whitelisted(e: Env, account: Address, whitelisted: bool);

    /// (Owner only) Whitelist a batch of accounts
    fn add_multiple_to_whitelist(e: Env, accounts: Vec<Address>);

    fn is_whitelisted(e: Env, account: Address) -> bool;

    /// (Owner only) Allow or disallow an account to deposit by having the chef pull funds
    /// through an allowance
    ///
    /// ### Arguments
    /// * `account` - The depositor, usually a zap contract
    /// * `enabled` - Whether pull deposits are allowed
    fn set_pull_depositor(e: Env, account: Address, enabled: bool);

    fn can_do_pull_deposits(e: Env, account: Address) -> bool;

    /// (Owner only) Set the address performance fee shares are minted to
    fn set_fee_recipient(e: Env, recipient: Address);

    fn fee_recipient(e: Env) -> Address;

    /// (Owner only) Restrict harvests to the owner, or open them to any whitelisted account
    fn set_harvest_policy(e: Env, owner_only: bool);

    /// Whether harvests are restricted to the owner
    fn harvest_policy(e: Env) -> bool;

    /********** Vault Registry **********/

    /// (Owner only) Add a vault wrapping `strategy`
    ///
    /// ### Arguments
    /// * `strategy` - The strategy contract, not linked to any other vault
    /// * `performance_fee_bps` - The fee on harvested yield, at most 1000
    ///
    /// ### Returns
    /// The id of the new vault
    ///
    /// ### Panics
    /// If the fee is too high or the strategy already backs a vault
    fn add_vault(e: Env, strategy: Address, performance_fee_bps: u32) -> u32;

    /// (Owner only) Update a vault's performance fee
    ///
    /// ### Panics
    /// If the vault does not exist or the fee is too high
    fn set_vault(e: Env, vault_id: u32, performance_fee_bps: u32);

    /// (Owner only) Pause or unpause deposits and harvests for a vault. Withdrawals are
    /// never blocked.
    ///
    /// ### Panics
    /// If the vault is already in the requested state or is panicked
    fn pause_vault(e: Env, vault_id: u32, pause: bool);

    /// (Owner only) Pull all funds out of a vault's strategy and hold them in the chef.
    /// The vault stays panicked forever and only allows withdrawals.
    ///
    /// ### Returns
    /// The amount of underlying recovered
    ///
    /// ### Panics
    /// If the vault does not exist or is already panicked
    fn panic_vault(e: Env, vault_id: u32) -> i128;

    /// Fetch a vault record
    ///
    /// ### Panics
    /// If the vault does not exist
    fn vault_info(e: Env, vault_id: u32) -> VaultInfo;

    /// Fetch the number of vaults
    fn pool_length(e: Env) -> u32;

    fn is_valid_vault(e: Env, vault_id: u32) -> bool;

    fn strategy_exists(e: Env, strategy: Address) -> bool;

    /// Fetch the id of the vault a strategy backs, if any
    fn strategy_vault_id(e: Env, strategy: Address) -> Option<u32>;

    /********** Shares **********/

    /// Fetch an account's shares in a vault
    fn balance(e: Env, account: Address, vault_id: u32) -> i128;

    /// Fetch the total shares issued by a vault
    fn total_supply(e: Env, vault_id: u32) -> i128;

    /// Transfer shares of a vault
    ///
    /// ### Panics
    /// If `from` is not whitelisted or holds too few shares
    fn transfer_shares(e: Env, from: Address, to: Address, vault_id: u32, amount: i128);

    /// Transfer shares of a vault on behalf of `from` as an approved operator
    ///
    /// ### Panics
    /// If `spender` is not whitelisted or not approved by `from`
    fn transfer_shares_from(
        e: Env,
        spender: Address,
        from: Address,
        to: Address,
        vault_id: u32,
        amount: i128,
    );

    /// Transfer shares of several vaults at once
    ///
    /// ### Panics
    /// If `vault_ids` and `amounts` differ in length
    fn batch_transfer_shares(
        e: Env,
        from: Address,
        to: Address,
        vault_ids: Vec<u32>,
        amounts: Vec<i128>,
    );

    /// Approve or revoke `operator` over all of `owner`'s shares
    fn set_approval_for_all(e: Env, owner: Address, operator: Address, approved: bool);

    fn is_approved_for_all(e: Env, owner: Address, operator: Address) -> bool;

    /********** Accounting **********/

    /// Fetch the underlying backing a vault's shares
    fn total_underlying(e: Env, vault_id: u32) -> i128;

    /// Fetch the underlying an account's shares are worth
    fn underlying_balance(e: Env, account: Address, vault_id: u32) -> i128;

    /// Fetch the shares a deposit of `amount` would mint now
    fn preview_deposit(e: Env, vault_id: u32, amount: i128) -> i128;

    /// Fetch the underlying redeeming `shares` would pay now, before strategy fees
    fn preview_withdraw(e: Env, vault_id: u32, shares: i128) -> i128;

    /// Deposit underlying into a vault
    ///
    /// ### Arguments
    /// * `user` - The depositor
    /// * `vault_id` - The vault
    /// * `amount` - The amount of underlying
    fn deposit(e: Env, user: Address, vault_id: u32, amount: i128);

    /// Deposit underlying into a vault with a slippage bound
    ///
    /// ### Arguments
    /// * `user` - The depositor supplying the funds
    /// * `principal` - The whitelisted account credited with the shares. Anyone but `user`
    ///   requires a pull deposit.
    /// * `vault_id` - The vault
    /// * `amount` - The amount of underlying
    /// * `pull` - Have the chef pull the funds from `user` through an allowance, pull depositors only
    /// * `min_shares` - The least amount of shares to mint
    ///
    /// ### Returns
    /// The shares minted
    ///
    /// ### Panics
    /// If the vault is not active, the deposit is unsafe, `user` may not deposit for
    /// `principal`, or too few shares would be minted
    fn deposit_underlying(
        e: Env,
        user: Address,
        principal: Address,
        vault_id: u32,
        amount: i128,
        pull: bool,
        min_shares: i128,
    ) -> i128;

    /// Mint an exact amount of shares by depositing what they cost
    ///
    /// ### Returns
    /// The underlying deposited
    ///
    /// ### Panics
    /// If the cost exceeds `max_underlying`
    fn deposit_shares(
        e: Env,
        user: Address,
        vault_id: u32,
        shares: i128,
        max_underlying: i128,
    ) -> i128;

    /// Withdraw an amount of underlying from a vault
    ///
    /// ### Panics
    /// If the amount rounds to zero shares, including when nothing backs the vault's shares
    fn withdraw(e: Env, user: Address, vault_id: u32, amount: i128);

    /// Redeem shares with a slippage bound
    ///
    /// ### Returns
    /// The underlying paid
    fn withdraw_shares(
        e: Env,
        user: Address,
        vault_id: u32,
        shares: i128,
        min_underlying: i128,
    ) -> i128;

    /// Redeem shares of `from` and send the underlying to `to`. Only an operator `from`
    /// approved may send the proceeds somewhere other than `from`.
    ///
    /// ### Arguments
    /// * `spender` - The account executing the withdrawal
    /// * `from` - The share holder
    /// * `vault_id` - The vault
    /// * `shares` - The shares to redeem
    /// * `min_underlying` - The least amount of underlying to pay
    /// * `to` - The recipient
    ///
    /// ### Returns
    /// The underlying paid
    fn withdraw_shares_to(
        e: Env,
        spender: Address,
        from: Address,
        vault_id: u32,
        shares: i128,
        min_underlying: i128,
        to: Address,
    ) -> i128;

    /// Redeem every share the user holds in a vault
    fn emergency_withdraw(e: Env, user: Address, vault_id: u32);

    /// Harvest a vault and mint the performance fee
    ///
    /// ### Returns
    /// The yield harvested
    ///
    /// ### Panics
    /// If the caller may not harvest or the vault is not active
    fn harvest(e: Env, caller: Address, vault_id: u32) -> i128;

    /********** Rescue **********/

    /// (Owner only) Recover tokens held by the chef that are not in panic custody
    fn rescue_tokens(e: Env, token: Address, to: Address, amount: i128);

    /// (Owner only) Recover foreign tokens stuck in a vault's strategy
    ///
    /// ### Panics
    /// If `token` is the vault's underlying or the strategy touches its managed funds
    fn rescue_vault_tokens(e: Env, vault_id: u32, token: Address, to: Address, amount: i128);

    /// (Owner only) Update the contract's wasm
    ///
    /// ### Arguments
    /// * `wasm_hash` - The hash of the new wasm to install
    fn upgrade_wasm(e: Env, wasm_hash: BytesN<32>);
}

#[contractimpl]
impl VaultChefContract {
    /// Constructor for initializing the contract when deployed
    pub fn __constructor(e: Env, owner: Address) {
        access::execute_initialize(&e, &owner);
    }
}

#[contractimpl]
impl VaultChef for VaultChefContract {
    fn owner(e: Env) -> Option<Address> {
        storage::get_owner(&e)
    }

    fn pending_owner(e: Env) -> Option<Address> {
        storage::get_pending_owner(&e)
    }

    fn set_pending_owner(e: Env, candidate: Address) {
        storage::extend_instance(&e);
        access::execute_set_pending_owner(&e, &candidate);
    }

    fn complete_ownership_transfer(e: Env) {
        storage::extend_instance(&e);
        access::execute_complete_ownership_transfer(&e);
    }

    fn renounce_ownership(e: Env) {
        storage::extend_instance(&e);
        access::execute_renounce_ownership(&e);
    }

    fn set_whitelisted(e: Env, account: Address, whitelisted: bool) {
        storage::extend_instance(&e);
        access::execute_set_whitelisted(&e, &account, whitelisted);
    }

    fn add_multiple_to_whitelist(e: Env, accounts: Vec<Address>) {
        storage::extend_instance(&e);
        access::execute_add_multiple_to_whitelist(&e, &accounts);
    }

    fn is_whitelisted(e: Env, account: Address) -> bool {
        storage::is_whitelisted(&e, &account)
    }

    fn set_pull_depositor(e: Env, account: Address, enabled: bool) {
        storage::extend_instance(&e);
        access::execute_set_pull_depositor(&e, &account, enabled);
    }

    fn can_do_pull_deposits(e: Env, account: Address) -> bool {
        storage::is_pull_depositor(&e, &account)
    }

    fn set_fee_recipient(e: Env, recipient: Address) {
        storage::extend_instance(&e);
        access::execute_set_fee_recipient(&e, &recipient);
    }

    fn fee_recipient(e: Env) -> Address {
        storage::get_fee_recipient(&e)
    }

    fn set_harvest_policy(e: Env, owner_only: bool) {
        storage::extend_instance(&e);
        access::execute_set_harvest_policy(&e, owner_only);
    }

    fn harvest_policy(e: Env) -> bool {
        storage::get_harvest_owner_only(&e)
    }

    fn add_vault(e: Env, strategy: Address, performance_fee_bps: u32) -> u32 {
        storage::extend_instance(&e);
        registry::execute_add_vault(&e, &strategy, performance_fee_bps)
    }

    fn set_vault(e: Env, vault_id: u32, performance_fee_bps: u32) {
        storage::extend_instance(&e);
        registry::execute_set_vault(&e, vault_id, performance_fee_bps);
    }

    fn pause_vault(e: Env, vault_id: u32, pause: bool) {
        storage::extend_instance(&e);
        registry::execute_pause_vault(&e, vault_id, pause);
    }

    fn panic_vault(e: Env, vault_id: u32) -> i128 {
        storage::extend_instance(&e);
        registry::execute_panic_vault(&e, vault_id)
    }

    fn vault_info(e: Env, vault_id: u32) -> VaultInfo {
        registry::require_vault(&e, vault_id)
    }

    fn pool_length(e: Env) -> u32 {
        storage::get_vault_count(&e)
    }

    fn is_valid_vault(e: Env, vault_id: u32) -> bool {
        registry::is_valid_vault(&e, vault_id)
    }

    fn strategy_exists(e: Env, strategy: Address) -> bool {
        registry::strategy_exists(&e, &strategy)
    }

    fn strategy_vault_id(e: Env, strategy: Address) -> Option<u32> {
        storage::get_strategy_vault(&e, &strategy)
    }

    fn balance(e: Env, account: Address, vault_id: u32) -> i128 {
        storage::get_balance(&e, vault_id, &account)
    }

    fn total_supply(e: Env, vault_id: u32) -> i128 {
        storage::get_supply(&e, vault_id)
    }

    fn transfer_shares(e: Env, from: Address, to: Address, vault_id: u32, amount: i128) {
        storage::extend_instance(&e);
        from.require_auth();

        ledger::execute_transfer_shares(&e, &from, &from, &to, vault_id, amount);
    }

    fn transfer_shares_from(
        e: Env,
        spender: Address,
        from: Address,
        to: Address,
        vault_id: u32,
        amount: i128,
    ) {
        storage::extend_instance(&e);
        spender.require_auth();

        ledger::execute_transfer_shares(&e, &spender, &from, &to, vault_id, amount);
    }

    fn batch_transfer_shares(
        e: Env,
        from: Address,
        to: Address,
        vault_ids: Vec<u32>,
        amounts: Vec<i128>,
    ) {
        storage::extend_instance(&e);
        from.require_auth();

        ledger::execute_batch_transfer_shares(&e, &from, &to, &vault_ids, &amounts);
    }

    fn set_approval_for_all(e: Env, owner: Address, operator: Address, approved: bool) {
        storage::extend_instance(&e);
        owner.require_auth();

        ledger::execute_set_approval_for_all(&e, &owner, &operator, approved);
    }

    fn is_approved_for_all(e: Env, owner: Address, operator: Address) -> bool {
        storage::is_approved(&e, &owner, &operator)
    }

    fn total_underlying(e: Env, vault_id: u32) -> i128 {
        let vault = registry::require_vault(&e, vault_id);
        engine::total_underlying(&e, vault_id, &vault)
    }

    fn underlying_balance(e: Env, account: Address, vault_id: u32) -> i128 {
        let vault = registry::require_vault(&e, vault_id);
        let shares = storage::get_balance(&e, vault_id, &account);
        Snapshot::load(&e, vault_id, &vault).underlying_for_shares(&e, shares)
    }

    fn preview_deposit(e: Env, vault_id: u32, amount: i128) -> i128 {
        let vault = registry::require_vault(&e, vault_id);
        Snapshot::load(&e, vault_id, &vault).shares_for_underlying(&e, amount)
    }

    fn preview_withdraw(e: Env, vault_id: u32, shares: i128) -> i128 {
        let vault = registry::require_vault(&e, vault_id);
        Snapshot::load(&e, vault_id, &vault).underlying_for_shares(&e, shares)
    }

    fn deposit(e: Env, user: Address, vault_id: u32, amount: i128) {
        storage::extend_instance(&e);
        user.require_auth();

        engine::execute_deposit_underlying(&e, &user, &user, vault_id, amount, false, 0);
    }

    fn deposit_underlying(
        e: Env,
        user: Address,
        principal: Address,
        vault_id: u32,
        amount: i128,
        pull: bool,
        min_shares: i128,
    ) -> i128 {
        storage::extend_instance(&e);
        user.require_auth();

        engine::execute_deposit_underlying(&e, &user, &principal, vault_id, amount, pull, min_shares)
    }

    fn deposit_shares(
        e: Env,
        user: Address,
        vault_id: u32,
        shares: i128,
        max_underlying: i128,
    ) -> i128 {
        storage::extend_instance(&e);
        user.require_auth();

        engine::execute_deposit_shares(&e, &user, vault_id, shares, max_underlying)
    }

    fn withdraw(e: Env, user: Address, vault_id: u32, amount: i128) {
        storage::extend_instance(&e);
        user.require_auth();

        engine::execute_withdraw(&e, &user, vault_id, amount);
    }

    fn withdraw_shares(
        e: Env,
        user: Address,
        vault_id: u32,
        shares: i128,
        min_underlying: i128,
    ) -> i128 {
        storage::extend_instance(&e);
        user.require_auth();

        engine::execute_withdraw_shares_to(&e, &user, &user, vault_id, shares, min_underlying, &user)
    }

    fn withdraw_shares_to(
        e: Env,
        spender: Address,
        from: Address,
        vault_id: u32,
        shares: i128,
        min_underlying: i128,
        to: Address,
    ) -> i128 {
        storage::extend_instance(&e);
        spender.require_auth();

        engine::execute_withdraw_shares_to(&e, &spender, &from, vault_id, shares, min_underlying, &to)
    }

    fn emergency_withdraw(e: Env, user: Address, vault_id: u32) {
        storage::extend_instance(&e);
        user.require_auth();

        engine::execute_emergency_withdraw(&e, &user, vault_id);
    }

    fn harvest(e: Env, caller: Address, vault_id: u32) -> i128 {
        storage::extend_instance(&e);
        caller.require_auth();

        engine::execute_harvest(&e, &caller, vault_id)
    }

    fn rescue_tokens(e: Env, token: Address, to: Address, amount: i128) {
        storage::extend_instance(&e);
        engine::execute_rescue_tokens(&e, &token, &to, amount);
    }

    fn rescue_vault_tokens(e: Env, vault_id: u32, token: Address, to: Address, amount: i128) {
        storage::extend_instance(&e);
        engine::execute_rescue_vault_tokens(&e, vault_id, &token, &to, amount);
    }

    fn upgrade_wasm(e: Env, wasm_hash: BytesN<32>) {
        storage::extend_instance(&e);
        let owner = access::require_owner(&e);

        e.deployer().update_current_contract_wasm(wasm_hash.clone());
        VaultChefEvents::upgrade_wasm(&e, owner, wasm_hash);
    }
}

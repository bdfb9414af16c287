use soroban_sdk::{Address, BytesN, Env, Symbol, Vec};

pub struct VaultChefEvents {}

impl VaultChefEvents {
    /********** Ownership **********/

    /// Emitted when an ownership transfer is started
    ///
    /// - topics - `["pending_owner"]`
    /// - data - `[previous: Option<Address>, candidate: Address]`
    ///
    /// ### Arguments
    /// * previous - The pending owner being replaced, if any
    /// * candidate - The address that may complete the transfer
    pub fn pending_owner(e: &Env, previous: Option<Address>, candidate: Address) {
        let topics = (Symbol::new(e, "pending_owner"),);
        e.events().publish(topics, (previous, candidate));
    }

    /// Emitted when ownership changes hands or is renounced
    ///
    /// - topics - `["owner_transfer"]`
    /// - data - `[previous: Address, new_owner: Option<Address>]`
    ///
    /// ### Arguments
    /// * previous - The outgoing owner
    /// * new_owner - The incoming owner, `None` when renounced
    pub fn owner_transfer(e: &Env, previous: Address, new_owner: Option<Address>) {
        let topics = (Symbol::new(e, "owner_transfer"),);
        e.events().publish(topics, (previous, new_owner));
    }

    /// Emitted when an account is added to or removed from the whitelist
    ///
    /// - topics - `["whitelist_set", account: Address]`
    /// - data - `whitelisted: bool`
    pub fn whitelist_set(e: &Env, account: Address, whitelisted: bool) {
        let topics = (Symbol::new(e, "whitelist_set"), account);
        e.events().publish(topics, whitelisted);
    }

    /// Emitted when an account's pull-deposit permission changes
    ///
    /// - topics - `["pull_depositor_set"]`
    /// - data - `[account: Address, enabled: bool]`
    pub fn pull_depositor_set(e: &Env, account: Address, enabled: bool) {
        let topics = (Symbol::new(e, "pull_depositor_set"),);
        e.events().publish(topics, (account, enabled));
    }

    /// - topics - `["fee_recipient_set"]`
    /// - data - `recipient: Address`
    pub fn fee_recipient_set(e: &Env, recipient: Address) {
        let topics = (Symbol::new(e, "fee_recipient_set"),);
        e.events().publish(topics, recipient);
    }

    /// - topics - `["harvest_policy_set"]`
    /// - data - `owner_only: bool`
    pub fn harvest_policy_set(e: &Env, owner_only: bool) {
        let topics = (Symbol::new(e, "harvest_policy_set"),);
        e.events().publish(topics, owner_only);
    }

    /********** Vault Registry **********/

    /// Emitted when a vault is added
    ///
    /// - topics - `["vault_added"]`
    /// - data - `[vault_id: u32, strategy: Address, performance_fee_bps: u32]`
    pub fn vault_added(e: &Env, vault_id: u32, strategy: Address, performance_fee_bps: u32) {
        let topics = (Symbol::new(e, "vault_added"),);
        e.events()
            .publish(topics, (vault_id, strategy, performance_fee_bps));
    }

    /// Emitted when a vault's performance fee is changed
    ///
    /// - topics - `["vault_fee_set"]`
    /// - data - `[vault_id: u32, performance_fee_bps: u32]`
    pub fn vault_fee_set(e: &Env, vault_id: u32, performance_fee_bps: u32) {
        let topics = (Symbol::new(e, "vault_fee_set"),);
        e.events().publish(topics, (vault_id, performance_fee_bps));
    }

    /// Emitted when a vault is paused or unpaused
    ///
    /// - topics - `["vault_paused"]`
    /// - data - `[vault_id: u32, paused: bool]`
    pub fn vault_paused(e: &Env, vault_id: u32, paused: bool) {
        let topics = (Symbol::new(e, "vault_paused"),);
        e.events().publish(topics, (vault_id, paused));
    }

    /// Emitted when a vault is panicked
    ///
    /// - topics - `["vault_panicked"]`
    /// - data - `[vault_id: u32, recovered: i128]`
    ///
    /// ### Arguments
    /// * vault_id - The vault
    /// * recovered - Underlying moved from the strategy into the chef's custody
    pub fn vault_panicked(e: &Env, vault_id: u32, recovered: i128) {
        let topics = (Symbol::new(e, "vault_panicked"),);
        e.events().publish(topics, (vault_id, recovered));
    }

    /********** Accounting **********/

    /// Emitted when underlying is deposited into a vault
    ///
    /// - topics - `["deposit"]`
    /// - data - `[vault_id: u32, account: Address, shares: i128, underlying: i128]`
    ///
    /// ### Arguments
    /// * vault_id - The vault
    /// * account - The account credited with the minted shares
    /// * shares - The amount of shares minted
    /// * underlying - The amount of underlying deposited
    pub fn deposit(e: &Env, vault_id: u32, account: Address, shares: i128, underlying: i128) {
        let topics = (Symbol::new(e, "deposit"),);
        e.events()
            .publish(topics, (vault_id, account, shares, underlying));
    }

    /// Emitted when shares are redeemed for underlying
    ///
    /// - topics - `["withdraw"]`
    /// - data - `[vault_id: u32, account: Address, recipient: Address, shares: i128, underlying: i128]`
    ///
    /// ### Arguments
    /// * vault_id - The vault
    /// * account - The account that executed the withdrawal
    /// * recipient - The address that received the underlying
    /// * shares - The amount of shares burned
    /// * underlying - The underlying actually paid out
    pub fn withdraw(
        e: &Env,
        vault_id: u32,
        account: Address,
        recipient: Address,
        shares: i128,
        underlying: i128,
    ) {
        let topics = (Symbol::new(e, "withdraw"),);
        e.events()
            .publish(topics, (vault_id, account, recipient, shares, underlying));
    }

    /// Emitted when a vault is harvested
    ///
    /// - topics - `["vault_harvest"]`
    /// - data - `[vault_id: u32, yield_amount: i128]`
    pub fn vault_harvest(e: &Env, vault_id: u32, yield_amount: i128) {
        let topics = (Symbol::new(e, "vault_harvest"),);
        e.events().publish(topics, (vault_id, yield_amount));
    }

    /********** Shares **********/

    /// - topics - `["transfer_single", operator: Address]`
    /// - data - `[from: Address, to: Address, vault_id: u32, amount: i128]`
    pub fn transfer_single(
        e: &Env,
        operator: Address,
        from: Address,
        to: Address,
        vault_id: u32,
        amount: i128,
    ) {
        let topics = (Symbol::new(e, "transfer_single"), operator);
        e.events().publish(topics, (from, to, vault_id, amount));
    }

    /// - topics - `["transfer_batch", operator: Address]`
    /// - data - `[from: Address, to: Address, vault_ids: Vec<u32>, amounts: Vec<i128>]`
    pub fn transfer_batch(
        e: &Env,
        operator: Address,
        from: Address,
        to: Address,
        vault_ids: Vec<u32>,
        amounts: Vec<i128>,
    ) {
        let topics = (Symbol::new(e, "transfer_batch"), operator);
        e.events().publish(topics, (from, to, vault_ids, amounts));
    }

    /// - topics - `["approval_for_all"]`
    /// - data - `[owner: Address, operator: Address, approved: bool]`
    pub fn approval_for_all(e: &Env, owner: Address, operator: Address, approved: bool) {
        let topics = (Symbol::new(e, "approval_for_all"),);
        e.events().publish(topics, (owner, operator, approved));
    }

    /********** Rescue **********/

    /// Emitted when tokens stuck in the chef are recovered
    ///
    /// - topics - `["tokens_rescued"]`
    /// - data - `[token: Address, to: Address, amount: i128]`
    pub fn tokens_rescued(e: &Env, token: Address, to: Address, amount: i128) {
        let topics = (Symbol::new(e, "tokens_rescued"),);
        e.events().publish(topics, (token, to, amount));
    }

    /// Emitted when foreign tokens stuck in a vault's strategy are recovered
    ///
    /// - topics - `["vault_tokens_rescued"]`
    /// - data - `[vault_id: u32, token: Address, to: Address, amount: i128]`
    pub fn vault_tokens_rescued(e: &Env, vault_id: u32, token: Address, to: Address, amount: i128) {
        let topics = (Symbol::new(e, "vault_tokens_rescued"),);
        e.events().publish(topics, (vault_id, token, to, amount));
    }

    /// - topics - `["upgrade_wasm"]`
    /// - data - `[owner: Address, wasm_hash: BytesN<32>]`
    pub fn upgrade_wasm(e: &Env, owner: Address, wasm_hash: BytesN<32>) {
        let topics = (Symbol::new(e, "upgrade_wasm"),);
        e.events().publish(topics, (owner, wasm_hash));
    }
}

use sep_41_token::TokenClient;
use soroban_sdk::{contract, contractimpl, Address, Env, Symbol};
use vault_chef::VaultChefClient;

const CHEF_KEY: &str = "Chef";

/// A router that deposits on behalf of users through the chef's pull path and redeems
/// their shares as an approved operator
#[contract]
pub struct ZapContract;

#[contractimpl]
impl ZapContract {
    pub fn __constructor(e: Env, chef: Address) {
        e.storage()
            .instance()
            .set::<Symbol, Address>(&Symbol::new(&e, CHEF_KEY), &chef);
    }

    /// Take `amount` of the vault's underlying from `user` and deposit it with `user` as
    /// the principal
    pub fn zap_in(e: Env, user: Address, vault_id: u32, amount: i128, min_shares: i128) -> i128 {
        user.require_auth();
        let chef = load_chef(&e);
        let zap = e.current_contract_address();

        let token = TokenClient::new(&e, &chef.vault_info(&vault_id).underlying);
        token.transfer(&user, &zap, &amount);
        token.approve(&zap, &chef.address, &amount, &(e.ledger().sequence() + 1));

        chef.deposit_underlying(&zap, &user, &vault_id, &amount, &true, &min_shares)
    }

    /// Redeem `shares` of `user` and send the underlying to `user`. `user` must have
    /// approved the zap as an operator.
    pub fn zap_out(e: Env, user: Address, vault_id: u32, shares: i128, min_underlying: i128) -> i128 {
        user.require_auth();
        let chef = load_chef(&e);

        chef.withdraw_shares_to(
            &e.current_contract_address(),
            &user,
            &vault_id,
            &shares,
            &min_underlying,
            &user,
        )
    }
}

fn load_chef(e: &Env) -> VaultChefClient<'_> {
    let chef: Address = e
        .storage()
        .instance()
        .get(&Symbol::new(e, CHEF_KEY))
        .unwrap();
    VaultChefClient::new(e, &chef)
}

use sep_41_token::TokenClient;
use soroban_sdk::{contract, contractclient, contractimpl, panic_with_error, Address, Env};

use crate::{errors::MockStrategyError, events::MockStrategyEvents, storage};

/// A strategy that holds the chef's funds without deploying them. Yield, withdrawal
/// fees and misbehavior are scripted through the setters.
#[contract]
pub struct MockStrategyContract;

#[contractclient(name = "MockStrategyClient")]
pub trait MockStrategy {
    /// Fetch the token the strategy manages
    fn underlying_token(e: Env) -> Address;

    /// Fetch the underlying managed for the chef
    fn total_managed_underlying(e: Env) -> i128;

    /// (Chef only) Account for funds the chef already transferred in
    fn deposit_from_vault(e: Env, amount: i128);

    /// (Chef only) Return `amount` to the chef, less the withdrawal fee
    ///
    /// ### Returns
    /// The amount sent to the chef
    fn withdraw_to_vault(e: Env, amount: i128) -> i128;

    /// (Chef only) Realize the scripted yield
    fn harvest(e: Env) -> i128;

    /// (Chef only) Send every token held back to the chef
    fn panic_to_vault(e: Env) -> i128;

    /// (Chef only) Send a token the strategy does not manage to `to`. In malicious mode
    /// the strategy also sends its managed underlying along.
    fn rescue_foreign_tokens(e: Env, token: Address, to: Address, amount: i128);

    /// Script the yield realized by the next harvest. The tokens must already be held by
    /// the strategy.
    fn set_next_harvest(e: Env, amount: i128);

    /// Set the fee kept on withdrawals, in basis points
    fn set_withdraw_fee(e: Env, fee_bps: u32);

    fn set_malicious_mode(e: Env, malicious: bool);
}

#[contractimpl]
impl MockStrategyContract {
    pub fn __constructor(e: Env, chef: Address, token: Address) {
        storage::set_chef(&e, &chef);
        storage::set_token(&e, &token);
    }
}

fn require_chef(e: &Env) -> Address {
    let chef = storage::get_chef(e);
    chef.require_auth();
    chef
}

#[contractimpl]
impl MockStrategy for MockStrategyContract {
    fn underlying_token(e: Env) -> Address {
        storage::get_token(&e)
    }

    fn total_managed_underlying(e: Env) -> i128 {
        storage::get_managed(&e)
    }

    fn deposit_from_vault(e: Env, amount: i128) {
        storage::extend_instance(&e);
        require_chef(&e);
        if amount <= 0 {
            panic_with_error!(&e, MockStrategyError::InvalidAmount);
        }

        storage::set_managed(&e, storage::get_managed(&e) + amount);
    }

    fn withdraw_to_vault(e: Env, amount: i128) -> i128 {
        storage::extend_instance(&e);
        let chef = require_chef(&e);
        let managed = storage::get_managed(&e);
        if amount <= 0 {
            panic_with_error!(&e, MockStrategyError::InvalidAmount);
        }
        if amount > managed {
            panic_with_error!(&e, MockStrategyError::InsufficientManaged);
        }

        let fee = amount * storage::get_withdraw_fee(&e) as i128 / 10_000;
        let sent = amount - fee;
        storage::set_managed(&e, managed - amount);
        TokenClient::new(&e, &storage::get_token(&e)).transfer(
            &e.current_contract_address(),
            &chef,
            &sent,
        );
        sent
    }

    fn harvest(e: Env) -> i128 {
        storage::extend_instance(&e);
        require_chef(&e);

        let yield_amount = storage::get_next_harvest(&e);
        storage::set_next_harvest(&e, 0);
        storage::set_managed(&e, storage::get_managed(&e) + yield_amount);
        MockStrategyEvents::harvest(&e, yield_amount);
        yield_amount
    }

    fn panic_to_vault(e: Env) -> i128 {
        storage::extend_instance(&e);
        let chef = require_chef(&e);

        let token = TokenClient::new(&e, &storage::get_token(&e));
        let balance = token.balance(&e.current_contract_address());
        if balance > 0 {
            token.transfer(&e.current_contract_address(), &chef, &balance);
        }
        storage::set_managed(&e, 0);
        MockStrategyEvents::panic(&e, chef, balance);
        balance
    }

    fn rescue_foreign_tokens(e: Env, token: Address, to: Address, amount: i128) {
        storage::extend_instance(&e);
        require_chef(&e);

        TokenClient::new(&e, &token).transfer(&e.current_contract_address(), &to, &amount);
        if storage::get_malicious(&e) {
            let managed = storage::get_managed(&e);
            let stolen = managed.min(amount);
            if stolen > 0 {
                TokenClient::new(&e, &storage::get_token(&e)).transfer(
                    &e.current_contract_address(),
                    &to,
                    &stolen,
                );
                storage::set_managed(&e, managed - stolen);
            }
        }
    }

    fn set_next_harvest(e: Env, amount: i128) {
        storage::set_next_harvest(&e, amount);
    }

    fn set_withdraw_fee(e: Env, fee_bps: u32) {
        storage::set_withdraw_fee(&e, fee_bps);
    }

    fn set_malicious_mode(e: Env, malicious: bool) {
        storage::set_malicious(&e, malicious);
    }
}

use sep_41_token::TokenClient;
use soroban_sdk::{panic_with_error, Address, Env};

use crate::{
    access::require_whitelisted,
    constants::MAX_TOTAL_UNDERLYING,
    dependencies::StrategyClient,
    engine::math::Snapshot,
    errors::VaultChefError,
    events::VaultChefEvents,
    ledger,
    registry::require_active_vault,
    storage,
    types::VaultInfo,
};

/// Deposit `amount` of the vault's underlying and credit `principal`, returning the shares minted
///
/// ### Arguments
/// * `depositor` - The account supplying the funds
/// * `principal` - The account credited with the shares
/// * `vault_id` - The vault
/// * `amount` - The amount of underlying to deposit
/// * `pull` - Pull the funds from `depositor` through an allowance granted to the chef
/// * `min_shares` - The least amount of shares the deposit may mint
///
/// ### Panics
/// If the vault is not active, the amount is unsafe, the depositor may not deposit for
/// `principal`, or fewer than `min_shares` would be minted
pub fn execute_deposit_underlying(
    e: &Env,
    depositor: &Address,
    principal: &Address,
    vault_id: u32,
    amount: i128,
    pull: bool,
    min_shares: i128,
) -> i128 {
    require_whitelisted(e, depositor);
    if principal != depositor {
        require_whitelisted(e, principal);
    }
    let vault = require_active_vault(e, vault_id);
    let snapshot = Snapshot::load(e, vault_id, &vault);
    deposit(
        e, depositor, principal, vault_id, &vault, &snapshot, amount, pull, min_shares,
    )
}

/// Deposit however much underlying `shares` costs for `user`, returning the underlying paid
///
/// ### Panics
/// If the vault is not active or the cost exceeds `max_underlying`
pub fn execute_deposit_shares(
    e: &Env,
    user: &Address,
    vault_id: u32,
    shares: i128,
    max_underlying: i128,
) -> i128 {
    require_whitelisted(e, user);
    let vault = require_active_vault(e, vault_id);
    let snapshot = Snapshot::load(e, vault_id, &vault);

    let amount = if snapshot.total_shares == 0 {
        shares
    } else {
        snapshot.underlying_for_shares(e, shares)
    };
    if amount > max_underlying {
        panic_with_error!(e, VaultChefError::SlippageExceeded);
    }

    deposit(e, user, user, vault_id, &vault, &snapshot, amount, false, 0);
    amount
}

#[allow(clippy::too_many_arguments)]
fn deposit(
    e: &Env,
    depositor: &Address,
    principal: &Address,
    vault_id: u32,
    vault: &VaultInfo,
    snapshot: &Snapshot,
    amount: i128,
    pull: bool,
    min_shares: i128,
) -> i128 {
    if amount < 0 {
        panic_with_error!(e, VaultChefError::InvalidAmount);
    }
    if amount == 0 {
        panic_with_error!(e, VaultChefError::ZeroShares);
    }
    if amount > MAX_TOTAL_UNDERLYING - snapshot.total_underlying {
        panic_with_error!(e, VaultChefError::UnsafeAmount);
    }
    if pull && !storage::is_pull_depositor(e, depositor) {
        panic_with_error!(e, VaultChefError::Unauthorized);
    }
    // crediting someone else is only possible through a pull deposit
    if principal != depositor && !pull {
        panic_with_error!(e, VaultChefError::Unauthorized);
    }

    let shares = snapshot.shares_for_underlying(e, amount);
    if shares == 0 {
        panic_with_error!(e, VaultChefError::ZeroShares);
    }
    if shares < min_shares {
        panic_with_error!(e, VaultChefError::SlippageExceeded);
    }

    ledger::mint(e, vault_id, principal, shares);

    let chef = e.current_contract_address();
    let token = TokenClient::new(e, &vault.underlying);
    if pull {
        token.transfer_from(&chef, depositor, &chef, &amount);
    } else {
        token.transfer(depositor, &chef, &amount);
    }
    token.transfer(&chef, &vault.strategy, &amount);
    StrategyClient::new(e, &vault.strategy).deposit_from_vault(&amount);

    VaultChefEvents::deposit(e, vault_id, principal.clone(), shares, amount);
    shares
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        registry::{execute_add_vault, execute_pause_vault},
        testutils::{create_token, create_vault_chef},
    };
    use mock_strategy::MockStrategyContract;
    use soroban_sdk::{testutils::Address as _, token::StellarAssetClient};

    struct Setup {
        chef: Address,
        token: Address,
        strategy: Address,
        samwise: Address,
    }

    fn setup(e: &Env) -> Setup {
        e.mock_all_auths_allowing_non_root_auth();
        let owner = Address::generate(e);
        let samwise = Address::generate(e);
        let chef = create_vault_chef(e, &owner);
        let token = create_token(e, &owner);
        let strategy = e.register(MockStrategyContract {}, (chef.clone(), token.clone()));
        StellarAssetClient::new(e, &token).mint(&samwise, &10i128.pow(35));

        e.as_contract(&chef, || {
            execute_add_vault(e, &strategy, 500);
            storage::set_whitelisted(e, &samwise, true);
        });
        Setup {
            chef,
            token,
            strategy,
            samwise,
        }
    }

    #[test]
    fn test_deposit_moves_funds_to_strategy() {
        let e = Env::default();
        let s = setup(&e);

        e.as_contract(&s.chef, || {
            let shares =
                execute_deposit_underlying(&e, &s.samwise, &s.samwise, 0, 1_000_0000000, false, 0);
            assert_eq!(shares, 1_000_0000000);
            assert_eq!(storage::get_balance(&e, 0, &s.samwise), 1_000_0000000);
            assert_eq!(storage::get_supply(&e, 0), 1_000_0000000);
        });
        let token = TokenClient::new(&e, &s.token);
        assert_eq!(token.balance(&s.strategy), 1_000_0000000);
        assert_eq!(token.balance(&s.chef), 0);
    }

    #[test]
    fn test_deposit_shares_charges_current_price() {
        let e = Env::default();
        let s = setup(&e);

        e.as_contract(&s.chef, || {
            let paid = execute_deposit_shares(&e, &s.samwise, 0, 1_000, 1_000);
            assert_eq!(paid, 1_000);
            let paid = execute_deposit_shares(&e, &s.samwise, 0, 500, 500);
            assert_eq!(paid, 500);
            assert_eq!(storage::get_balance(&e, 0, &s.samwise), 1_500);
        });
    }

    #[test]
    #[should_panic(expected = "Error(Contract, #122)")]
    fn test_deposit_shares_over_max() {
        let e = Env::default();
        let s = setup(&e);

        e.as_contract(&s.chef, || {
            execute_deposit_shares(&e, &s.samwise, 0, 1_000, 999);
        });
    }

    #[test]
    #[should_panic(expected = "Error(Contract, #122)")]
    fn test_deposit_below_min_shares() {
        let e = Env::default();
        let s = setup(&e);

        e.as_contract(&s.chef, || {
            execute_deposit_underlying(&e, &s.samwise, &s.samwise, 0, 1_000, false, 1_001);
        });
    }

    #[test]
    #[should_panic(expected = "Error(Contract, #120)")]
    fn test_deposit_zero() {
        let e = Env::default();
        let s = setup(&e);

        e.as_contract(&s.chef, || {
            execute_deposit_underlying(&e, &s.samwise, &s.samwise, 0, 0, false, 0);
        });
    }

    #[test]
    #[should_panic(expected = "Error(Contract, #125)")]
    fn test_deposit_negative() {
        let e = Env::default();
        let s = setup(&e);

        e.as_contract(&s.chef, || {
            execute_deposit_underlying(&e, &s.samwise, &s.samwise, 0, -1, false, 0);
        });
    }

    #[test]
    fn test_deposit_up_to_ceiling() {
        let e = Env::default();
        let s = setup(&e);

        e.as_contract(&s.chef, || {
            execute_deposit_underlying(
                &e,
                &s.samwise,
                &s.samwise,
                0,
                MAX_TOTAL_UNDERLYING,
                false,
                0,
            );
            assert_eq!(storage::get_supply(&e, 0), MAX_TOTAL_UNDERLYING);
        });
    }

    #[test]
    #[should_panic(expected = "Error(Contract, #123)")]
    fn test_deposit_over_ceiling() {
        let e = Env::default();
        let s = setup(&e);

        e.as_contract(&s.chef, || {
            execute_deposit_underlying(
                &e,
                &s.samwise,
                &s.samwise,
                0,
                MAX_TOTAL_UNDERLYING + 1,
                false,
                0,
            );
        });
    }

    #[test]
    #[should_panic(expected = "Error(Contract, #101)")]
    fn test_pull_deposit_requires_pull_depositor() {
        let e = Env::default();
        let s = setup(&e);

        e.as_contract(&s.chef, || {
            execute_deposit_underlying(&e, &s.samwise, &s.samwise, 0, 1_000, true, 0);
        });
    }

    #[test]
    #[should_panic(expected = "Error(Contract, #111)")]
    fn test_deposit_paused_vault() {
        let e = Env::default();
        let s = setup(&e);

        e.as_contract(&s.chef, || {
            execute_pause_vault(&e, 0, true);
            execute_deposit_underlying(&e, &s.samwise, &s.samwise, 0, 1_000, false, 0);
        });
    }

    #[test]
    #[should_panic(expected = "Error(Contract, #100)")]
    fn test_deposit_not_whitelisted() {
        let e = Env::default();
        let s = setup(&e);
        let frodo = Address::generate(&e);

        e.as_contract(&s.chef, || {
            execute_deposit_underlying(&e, &frodo, &frodo, 0, 1_000, false, 0);
        });
    }

    #[test]
    fn test_pull_deposit_credits_principal() {
        let e = Env::default();
        let s = setup(&e);
        let frodo = Address::generate(&e);
        let token = TokenClient::new(&e, &s.token);
        token.approve(&s.samwise, &s.chef, &1_000, &(e.ledger().sequence() + 10));

        e.as_contract(&s.chef, || {
            storage::set_pull_depositor(&e, &s.samwise, true);
            storage::set_whitelisted(&e, &frodo, true);
            let shares =
                execute_deposit_underlying(&e, &s.samwise, &frodo, 0, 1_000, true, 1_000);
            assert_eq!(shares, 1_000);
            assert_eq!(storage::get_balance(&e, 0, &frodo), 1_000);
            assert_eq!(storage::get_balance(&e, 0, &s.samwise), 0);
        });
        assert_eq!(token.allowance(&s.samwise, &s.chef), 0);
        assert_eq!(token.balance(&s.strategy), 1_000);
    }

    #[test]
    #[should_panic(expected = "Error(Contract, #100)")]
    fn test_pull_deposit_principal_not_whitelisted() {
        let e = Env::default();
        let s = setup(&e);
        let frodo = Address::generate(&e);
        let token = TokenClient::new(&e, &s.token);
        token.approve(&s.samwise, &s.chef, &1_000, &(e.ledger().sequence() + 10));

        e.as_contract(&s.chef, || {
            storage::set_pull_depositor(&e, &s.samwise, true);
            execute_deposit_underlying(&e, &s.samwise, &frodo, 0, 1_000, true, 0);
        });
    }

    #[test]
    #[should_panic(expected = "Error(Contract, #101)")]
    fn test_direct_deposit_cannot_credit_others() {
        let e = Env::default();
        let s = setup(&e);
        let frodo = Address::generate(&e);

        e.as_contract(&s.chef, || {
            storage::set_pull_depositor(&e, &s.samwise, true);
            storage::set_whitelisted(&e, &frodo, true);
            execute_deposit_underlying(&e, &s.samwise, &frodo, 0, 1_000, false, 0);
        });
    }
}

use soroban_sdk::{log, Address, Env};

use crate::{
    access::require_harvester, dependencies::StrategyClient, engine::math::Snapshot,
    events::VaultChefEvents, ledger, registry::require_active_vault, storage,
};

/// Harvest a vault's strategy and take the performance fee by minting shares
///
/// ### Arguments
/// * `caller` - The account triggering the harvest
/// * `vault_id` - The vault
///
/// ### Panics
/// If the caller may not harvest or the vault is not active
pub fn execute_harvest(e: &Env, caller: &Address, vault_id: u32) -> i128 {
    require_harvester(e, caller);
    let mut vault = require_active_vault(e, vault_id);

    let snapshot = Snapshot::load(e, vault_id, &vault);
    let yield_amount = StrategyClient::new(e, &vault.strategy).harvest();
    vault.last_harvest_timestamp = e.ledger().timestamp();

    if yield_amount <= 0 {
        storage::set_vault(e, vault_id, &vault);
        VaultChefEvents::vault_harvest(e, vault_id, 0);
        return 0;
    }

    let fee_shares = snapshot.fee_shares(e, yield_amount, vault.performance_fee_bps);
    if fee_shares > 0 {
        let recipient = storage::get_fee_recipient(e);
        ledger::mint(e, vault_id, &recipient, fee_shares);
        log!(e, "performance fee", vault_id, fee_shares);
    }
    storage::set_vault(e, vault_id, &vault);

    VaultChefEvents::vault_harvest(e, vault_id, yield_amount);
    yield_amount
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        engine::{
            deposit::execute_deposit_underlying, math::total_underlying,
            withdraw::execute_emergency_withdraw,
        },
        registry::{execute_add_vault, execute_pause_vault, require_vault},
        testutils::{create_token, create_vault_chef},
    };
    use mock_strategy::{MockStrategyClient, MockStrategyContract};
    use soroban_sdk::{
        testutils::{Address as _, Ledger},
        token::StellarAssetClient,
    };

    const ONE: i128 = 1_000_000_000_000_000_000;

    struct Setup {
        chef: Address,
        owner: Address,
        token: Address,
        strategy: Address,
        samwise: Address,
    }

    fn setup(e: &Env, performance_fee_bps: u32) -> Setup {
        e.mock_all_auths_allowing_non_root_auth();
        let owner = Address::generate(e);
        let samwise = Address::generate(e);
        let chef = create_vault_chef(e, &owner);
        let token = create_token(e, &owner);
        let strategy = e.register(MockStrategyContract {}, (chef.clone(), token.clone()));
        StellarAssetClient::new(e, &token).mint(&samwise, &ONE);

        e.as_contract(&chef, || {
            execute_add_vault(e, &strategy, performance_fee_bps);
            storage::set_whitelisted(e, &owner, true);
            storage::set_whitelisted(e, &samwise, true);
            execute_deposit_underlying(e, &samwise, &samwise, 0, ONE, false, 0);
        });
        Setup {
            chef,
            owner,
            token,
            strategy,
            samwise,
        }
    }

    fn queue_yield(e: &Env, s: &Setup, amount: i128) {
        StellarAssetClient::new(e, &s.token).mint(&s.strategy, &amount);
        MockStrategyClient::new(e, &s.strategy).set_next_harvest(&amount);
    }

    #[test]
    fn test_harvest_mints_fee_shares() {
        let e = Env::default();
        let s = setup(&e, 500);
        queue_yield(&e, &s, ONE / 10);
        e.ledger().set_timestamp(12345);

        e.as_contract(&s.chef, || {
            let harvested = execute_harvest(&e, &s.samwise, 0);
            assert_eq!(harvested, ONE / 10);
            assert_eq!(storage::get_balance(&e, 0, &s.owner), 4545454545454545);
            assert_eq!(storage::get_supply(&e, 0), ONE + 4545454545454545);
            assert_eq!(require_vault(&e, 0).last_harvest_timestamp, 12345);

            let paid = execute_emergency_withdraw(&e, &s.samwise, 0);
            assert_eq!(paid, 1095022624434389140);
            let vault = require_vault(&e, 0);
            assert_eq!(total_underlying(&e, 0, &vault), 4977375565610860);
        });
    }

    #[test]
    fn test_second_harvest_uses_new_fee() {
        let e = Env::default();
        let s = setup(&e, 500);
        queue_yield(&e, &s, ONE / 10);

        e.as_contract(&s.chef, || {
            execute_harvest(&e, &s.samwise, 0);
        });
        queue_yield(&e, &s, ONE / 10);
        e.as_contract(&s.chef, || {
            crate::registry::execute_set_vault(&e, 0, 100);
            execute_harvest(&e, &s.samwise, 0);
            assert_eq!(
                storage::get_balance(&e, 0, &s.owner),
                4545454545454545 + 837121212121212
            );
        });
    }

    #[test]
    fn test_harvest_without_yield() {
        let e = Env::default();
        let s = setup(&e, 500);
        e.ledger().set_timestamp(500);

        e.as_contract(&s.chef, || {
            assert_eq!(execute_harvest(&e, &s.samwise, 0), 0);
            assert_eq!(storage::get_balance(&e, 0, &s.owner), 0);
            assert_eq!(require_vault(&e, 0).last_harvest_timestamp, 500);
        });
    }

    #[test]
    #[should_panic(expected = "Error(Contract, #111)")]
    fn test_harvest_paused_vault() {
        let e = Env::default();
        let s = setup(&e, 500);

        e.as_contract(&s.chef, || {
            execute_pause_vault(&e, 0, true);
            execute_harvest(&e, &s.samwise, 0);
        });
    }

    #[test]
    #[should_panic(expected = "Error(Contract, #100)")]
    fn test_harvest_not_whitelisted() {
        let e = Env::default();
        let s = setup(&e, 500);

        e.as_contract(&s.chef, || {
            execute_harvest(&e, &Address::generate(&e), 0);
        });
    }
}

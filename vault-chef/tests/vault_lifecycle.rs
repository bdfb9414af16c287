//! Vault lifecycle integration tests
//!
//! Pausing, panicking into custody, rescue protection and exits under every status.

use mock_strategy::{MockStrategyClient, MockStrategyContract};
use soroban_sdk::{
    testutils::Address as _,
    token::{Client as TokenClient, StellarAssetClient},
    vec, Address, Env,
};
use vault_chef::{VaultChefClient, VaultChefContract, VaultStatus};

const ONE: i128 = 1_000_000_000_000_000_000;

struct Setup<'a> {
    env: Env,
    alice: Address,
    bob: Address,
    token: Address,
    strategy: MockStrategyClient<'a>,
    chef: VaultChefClient<'a>,
}

fn setup<'a>() -> Setup<'a> {
    let env = Env::default();
    env.cost_estimate().budget().reset_unlimited();
    env.mock_all_auths();

    let owner = Address::generate(&env);
    let alice = Address::generate(&env);
    let bob = Address::generate(&env);

    let token = env.register_stellar_asset_contract_v2(owner.clone()).address();
    let chef_address = env.register(VaultChefContract, (owner.clone(),));
    let chef = VaultChefClient::new(&env, &chef_address);
    let strategy_address = env.register(MockStrategyContract, (chef_address.clone(), token.clone()));
    let strategy = MockStrategyClient::new(&env, &strategy_address);

    chef.add_multiple_to_whitelist(&vec![&env, owner.clone(), alice.clone(), bob.clone()]);
    chef.add_vault(&strategy_address, &1000);

    let token_admin = StellarAssetClient::new(&env, &token);
    token_admin.mint(&alice, &(10 * ONE));
    token_admin.mint(&bob, &(10 * ONE));

    Setup {
        env,
        alice,
        bob,
        token,
        strategy,
        chef,
    }
}

// ================================
// Pause
// ================================

#[test]
fn test_pause_blocks_deposits_not_withdrawals() {
    let s = setup();
    s.chef.deposit(&s.alice, &0, &ONE);

    s.chef.pause_vault(&0, &true);
    assert_eq!(s.chef.vault_info(&0).status, VaultStatus::Paused);
    assert!(s.chef.try_deposit(&s.bob, &0, &ONE).is_err());
    assert!(s.chef.try_harvest(&s.bob, &0).is_err());

    s.chef.withdraw_shares(&s.alice, &0, &(ONE / 2), &(ONE / 2));
    assert_eq!(s.chef.balance(&s.alice, &0), ONE / 2);

    s.chef.pause_vault(&0, &false);
    s.chef.deposit(&s.bob, &0, &ONE);
    assert_eq!(s.chef.total_supply(&0), ONE + ONE / 2);
}

#[test]
#[should_panic(expected = "Error(Contract, #113)")]
fn test_pause_twice() {
    let s = setup();
    s.chef.pause_vault(&0, &true);
    s.chef.pause_vault(&0, &true);
}

#[test]
#[should_panic(expected = "Error(Contract, #110)")]
fn test_nonexistent_vault() {
    let s = setup();
    s.chef.deposit(&s.alice, &7, &ONE);
}

#[test]
#[should_panic(expected = "Error(Contract, #110)")]
fn test_pause_nonexistent_vault() {
    let s = setup();
    s.chef.pause_vault(&1, &true);
}

// ================================
// Panic
// ================================

#[test]
fn test_panic_moves_funds_to_custody() {
    let s = setup();
    let token = TokenClient::new(&s.env, &s.token);
    s.chef.deposit(&s.alice, &0, &ONE);
    s.chef.deposit(&s.bob, &0, &(3 * ONE));

    let recovered = s.chef.panic_vault(&0);
    assert_eq!(recovered, 4 * ONE);
    assert_eq!(s.chef.vault_info(&0).status, VaultStatus::Panicked);
    assert_eq!(token.balance(&s.chef.address), 4 * ONE);
    assert_eq!(token.balance(&s.strategy.address), 0);
    assert_eq!(s.chef.total_underlying(&0), 4 * ONE);

    s.chef.withdraw_shares(&s.alice, &0, &ONE, &ONE);
    s.chef.emergency_withdraw(&s.bob, &0);
    assert_eq!(token.balance(&s.alice), 10 * ONE);
    assert_eq!(token.balance(&s.bob), 10 * ONE);
    assert_eq!(s.chef.total_underlying(&0), 0);
    assert_eq!(token.balance(&s.chef.address), 0);
}

#[test]
fn test_panic_after_pause() {
    let s = setup();
    s.chef.deposit(&s.alice, &0, &ONE);
    s.chef.pause_vault(&0, &true);

    s.chef.panic_vault(&0);
    assert_eq!(s.chef.vault_info(&0).status, VaultStatus::Panicked);
    assert!(s.chef.try_pause_vault(&0, &false).is_err());
    assert!(s.chef.try_deposit(&s.alice, &0, &ONE).is_err());
    s.chef.emergency_withdraw(&s.alice, &0);
}

#[test]
#[should_panic(expected = "Error(Contract, #114)")]
fn test_panic_twice() {
    let s = setup();
    s.chef.panic_vault(&0);
    s.chef.panic_vault(&0);
}

#[test]
#[should_panic(expected = "Error(Contract, #112)")]
fn test_deposit_into_panicked_vault() {
    let s = setup();
    s.chef.panic_vault(&0);
    s.chef.deposit(&s.alice, &0, &ONE);
}

// ================================
// Rescue
// ================================

#[test]
fn test_rescue_only_free_balance() {
    let s = setup();
    let token = TokenClient::new(&s.env, &s.token);
    let treasury = Address::generate(&s.env);
    s.chef.deposit(&s.alice, &0, &ONE);
    s.chef.panic_vault(&0);
    // someone sends tokens to the chef by mistake
    StellarAssetClient::new(&s.env, &s.token).mint(&s.chef.address, &500);

    assert!(s
        .chef
        .try_rescue_tokens(&s.token, &treasury, &501)
        .is_err());
    s.chef.rescue_tokens(&s.token, &treasury, &500);
    assert_eq!(token.balance(&treasury), 500);

    s.chef.emergency_withdraw(&s.alice, &0);
    assert_eq!(token.balance(&s.alice), 10 * ONE);
}

#[test]
fn test_rescue_foreign_tokens_from_strategy() {
    let s = setup();
    let treasury = Address::generate(&s.env);
    let airdrop = s.env.register_stellar_asset_contract_v2(treasury.clone()).address();
    StellarAssetClient::new(&s.env, &airdrop).mint(&s.strategy.address, &1_000);
    s.chef.deposit(&s.alice, &0, &ONE);

    s.chef.rescue_vault_tokens(&0, &airdrop, &treasury, &1_000);
    assert_eq!(TokenClient::new(&s.env, &airdrop).balance(&treasury), 1_000);
    assert_eq!(s.chef.total_underlying(&0), ONE);
}

#[test]
#[should_panic(expected = "Error(Contract, #132)")]
fn test_rescue_vault_underlying() {
    let s = setup();
    let treasury = Address::generate(&s.env);
    s.chef.deposit(&s.alice, &0, &ONE);

    s.chef.rescue_vault_tokens(&0, &s.token, &treasury, &1);
}

#[test]
#[should_panic(expected = "Error(Contract, #132)")]
fn test_rescue_detects_malicious_strategy() {
    let s = setup();
    let treasury = Address::generate(&s.env);
    let airdrop = s.env.register_stellar_asset_contract_v2(treasury.clone()).address();
    StellarAssetClient::new(&s.env, &airdrop).mint(&s.strategy.address, &1_000);
    s.chef.deposit(&s.alice, &0, &ONE);
    s.strategy.set_malicious_mode(&true);

    s.chef.rescue_vault_tokens(&0, &airdrop, &treasury, &1_000);
}

// ================================
// Exits
// ================================

#[test]
fn test_everyone_can_exit_after_large_harvests() {
    let s = setup();
    s.chef.deposit(&s.alice, &0, &1);
    s.chef.deposit(&s.bob, &0, &ONE);

    for _ in 0..3 {
        let yield_amount = 10i128.pow(33);
        StellarAssetClient::new(&s.env, &s.token).mint(&s.strategy.address, &yield_amount);
        s.strategy.set_next_harvest(&yield_amount);
        s.chef.harvest(&s.alice, &0);
    }

    let fee_recipient = s.chef.fee_recipient();
    for account in [s.alice.clone(), s.bob.clone(), fee_recipient] {
        if s.chef.balance(&account, &0) > 0 {
            s.chef.emergency_withdraw(&account, &0);
        }
    }
    assert_eq!(s.chef.total_supply(&0), 0);
    assert_eq!(s.chef.total_underlying(&0), 0);
}

use soroban_sdk::{unwrap::UnwrapOptimized, Address, Env, Symbol};

const ONE_DAY_LEDGERS: u32 = 17280; // assumes 5s a ledger
const LEDGER_THRESHOLD_INSTANCE: u32 = ONE_DAY_LEDGERS * 30; // ~ 30 days
const LEDGER_BUMP_INSTANCE: u32 = LEDGER_THRESHOLD_INSTANCE + ONE_DAY_LEDGERS; // ~ 31 days

const CHEF_KEY: &str = "Chef";
const TOKEN_KEY: &str = "Token";
const MANAGED_KEY: &str = "Managed";
const NEXT_HARVEST_KEY: &str = "NextHarv";
const WITHDRAW_FEE_KEY: &str = "WdrFee";
const MALICIOUS_KEY: &str = "Malicious";

pub fn extend_instance(e: &Env) {
    e.storage()
        .instance()
        .extend_ttl(LEDGER_THRESHOLD_INSTANCE, LEDGER_BUMP_INSTANCE);
}

pub fn get_chef(e: &Env) -> Address {
    e.storage()
        .instance()
        .get(&Symbol::new(e, CHEF_KEY))
        .unwrap_optimized()
}

pub fn set_chef(e: &Env, chef: &Address) {
    e.storage()
        .instance()
        .set::<Symbol, Address>(&Symbol::new(e, CHEF_KEY), chef);
}

pub fn get_token(e: &Env) -> Address {
    e.storage()
        .instance()
        .get(&Symbol::new(e, TOKEN_KEY))
        .unwrap_optimized()
}

pub fn set_token(e: &Env, token: &Address) {
    e.storage()
        .instance()
        .set::<Symbol, Address>(&Symbol::new(e, TOKEN_KEY), token);
}

/// Underlying accounted as managed for the chef. Tokens sent to the strategy
/// outside of a deposit or harvest are not part of it.
pub fn get_managed(e: &Env) -> i128 {
    e.storage()
        .instance()
        .get(&Symbol::new(e, MANAGED_KEY))
        .unwrap_or(0)
}

pub fn set_managed(e: &Env, amount: i128) {
    e.storage()
        .instance()
        .set::<Symbol, i128>(&Symbol::new(e, MANAGED_KEY), &amount);
}

pub fn get_next_harvest(e: &Env) -> i128 {
    e.storage()
        .instance()
        .get(&Symbol::new(e, NEXT_HARVEST_KEY))
        .unwrap_or(0)
}

pub fn set_next_harvest(e: &Env, amount: i128) {
    e.storage()
        .instance()
        .set::<Symbol, i128>(&Symbol::new(e, NEXT_HARVEST_KEY), &amount);
}

pub fn get_withdraw_fee(e: &Env) -> u32 {
    e.storage()
        .instance()
        .get(&Symbol::new(e, WITHDRAW_FEE_KEY))
        .unwrap_or(0)
}

pub fn set_withdraw_fee(e: &Env, fee_bps: u32) {
    e.storage()
        .instance()
        .set::<Symbol, u32>(&Symbol::new(e, WITHDRAW_FEE_KEY), &fee_bps);
}

pub fn get_malicious(e: &Env) -> bool {
    e.storage()
        .instance()
        .get(&Symbol::new(e, MALICIOUS_KEY))
        .unwrap_or(false)
}

pub fn set_malicious(e: &Env, malicious: bool) {
    e.storage()
        .instance()
        .set::<Symbol, bool>(&Symbol::new(e, MALICIOUS_KEY), &malicious);
}

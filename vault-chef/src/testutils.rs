#![cfg(any(test, feature = "testutils"))]

use crate::VaultChefContract;
use soroban_sdk::{Address, Env};

/// Deploy a vault chef owned by `owner`
pub fn create_vault_chef(e: &Env, owner: &Address) -> Address {
    e.register(VaultChefContract {}, (owner.clone(),))
}

/// Deploy a Stellar asset contract administered by `admin`
pub fn create_token(e: &Env, admin: &Address) -> Address {
    e.register_stellar_asset_contract_v2(admin.clone()).address()
}

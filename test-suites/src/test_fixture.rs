use mock_strategy::{MockStrategyClient, MockStrategyContract};
use sep_41_token::testutils::MockTokenClient;
use soroban_sdk::testutils::{Address as _, Ledger};
use soroban_sdk::{vec as svec, Address, Env};
use vault_chef::{storage, VaultChefClient, VaultChefContract};

use crate::zap::{ZapContract, ZapContractClient};

pub struct TestFixture<'a> {
    pub env: Env,
    pub owner: Address,
    pub users: Vec<Address>,
    pub chef: VaultChefClient<'a>,
    pub token: MockTokenClient<'a>,
    pub strategies: Vec<MockStrategyClient<'a>>,
    pub zap: ZapContractClient<'a>,
}

impl TestFixture<'_> {
    pub fn create<'a>() -> TestFixture<'a> {
        let e = Env::default();
        e.cost_estimate().budget().reset_unlimited();
        e.mock_all_auths();

        let owner = Address::generate(&e);
        let token_id = e.register_stellar_asset_contract_v2(owner.clone()).address();
        let token_client = MockTokenClient::new(&e, &token_id);

        let chef_id = e.register(VaultChefContract {}, (owner.clone(),));
        let chef_client = VaultChefClient::new(&e, &chef_id);

        let zap_id = e.register(ZapContract {}, (chef_id.clone(),));
        let zap_client = ZapContractClient::new(&e, &zap_id);

        chef_client.add_multiple_to_whitelist(&svec![&e, owner.clone(), zap_id.clone()]);
        chef_client.set_pull_depositor(&zap_id, &true);

        TestFixture {
            env: e,
            owner,
            users: vec![],
            chef: chef_client,
            token: token_client,
            strategies: vec![],
            zap: zap_client,
        }
    }

    /// Register a fresh strategy and a vault on top of it
    pub fn create_vault(&mut self, performance_fee_bps: u32) -> u32 {
        let strategy_id = self.env.register(
            MockStrategyContract {},
            (self.chef.address.clone(), self.token.address.clone()),
        );
        let vault_id = self.chef.add_vault(&strategy_id, &performance_fee_bps);
        self.strategies
            .push(MockStrategyClient::new(&self.env, &strategy_id));
        vault_id
    }

    /// Create a whitelisted user holding `balance` of the underlying
    pub fn create_user(&mut self, balance: i128) -> Address {
        let user = Address::generate(&self.env);
        self.chef.set_whitelisted(&user, &true);
        if balance > 0 {
            self.token.mint(&user, &balance);
        }
        self.users.push(user.clone());
        user
    }

    /// Fund a vault's strategy so its next harvest reports `amount` of yield
    pub fn queue_yield(&self, vault_id: u32, amount: i128) {
        let strategy = &self.strategies[vault_id as usize];
        self.token.mint(&strategy.address, &amount);
        strategy.set_next_harvest(&amount);
    }

    pub fn read_custody(&self, vault_id: u32) -> i128 {
        self.env
            .as_contract(&self.chef.address, || storage::get_custody(&self.env, vault_id))
    }

    pub fn read_reserved(&self) -> i128 {
        self.env.as_contract(&self.chef.address, || {
            storage::get_reserved(&self.env, &self.token.address)
        })
    }

    /// Sum of the share balances of every known holder
    pub fn sum_of_balances(&self, vault_id: u32) -> i128 {
        let mut total = 0;
        for user in self.users.iter() {
            total += self.chef.balance(user, &vault_id);
        }
        let recipient = self.chef.fee_recipient();
        if !self.users.contains(&recipient) {
            total += self.chef.balance(&recipient, &vault_id);
        }
        total
    }

    /********** Chain Helpers ***********/

    pub fn jump(&self, time: u64) {
        let timestamp = self.env.ledger().timestamp().saturating_add(time);
        self.env.ledger().set_timestamp(timestamp);
    }

    pub fn jump_with_sequence(&self, time: u64) {
        let blocks = (time / 5) as u32;
        self.jump(time);
        let sequence = self.env.ledger().sequence().saturating_add(blocks);
        self.env.ledger().set_sequence_number(sequence);
    }
}

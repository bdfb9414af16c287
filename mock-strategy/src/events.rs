use soroban_sdk::{Address, Env, Symbol};

pub struct MockStrategyEvents {}

impl MockStrategyEvents {
    /// - topics - `["strategy_harvest"]`
    /// - data - `yield_amount: i128`
    pub fn harvest(e: &Env, yield_amount: i128) {
        let topics = (Symbol::new(e, "strategy_harvest"),);
        e.events().publish(topics, yield_amount);
    }

    /// Emitted when every managed unit is returned to the chef
    ///
    /// - topics - `["strategy_panic"]`
    /// - data - `[chef: Address, amount: i128]`
    pub fn panic(e: &Env, chef: Address, amount: i128) {
        let topics = (Symbol::new(e, "strategy_panic"),);
        e.events().publish(topics, (chef, amount));
    }
}

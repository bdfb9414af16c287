use soroban_sdk::{contractclient, Address, Env};

/// Interface every strategy linked to a vault must expose.
///
/// The chef is the only caller a strategy should accept for the mutating
/// entry points. Funds always move between the chef and the strategy; the
/// strategy never pays users directly.
#[contractclient(name = "Client")]
pub trait StrategyInterface {
    /// Returns the asset the strategy manages
    fn underlying_token(e: Env) -> Address;

    /// Returns the amount of underlying currently managed, including accrued yield
    fn total_managed_underlying(e: Env) -> i128;

    /// Notifies the strategy that `amount` underlying was transferred to it by the chef
    fn deposit_from_vault(e: Env, amount: i128);

    /// Sends up to `amount` underlying back to the chef and returns what was sent.
    /// A strategy with an exit fee may return less than requested.
    fn withdraw_to_vault(e: Env, amount: i128) -> i128;

    /// Realizes pending yield into the managed balance and returns the amount gained
    fn harvest(e: Env) -> i128;

    /// Exits every position and sends all underlying back to the chef
    fn panic_to_vault(e: Env) -> i128;

    /// Sends a token other than the underlying that is stuck in the strategy to `to`
    fn rescue_foreign_tokens(e: Env, token: Address, to: Address, amount: i128);
}

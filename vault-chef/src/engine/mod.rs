pub mod deposit;
pub mod harvest;
pub mod math;
pub mod rescue;
pub mod withdraw;

pub use deposit::{execute_deposit_shares, execute_deposit_underlying};
pub use harvest::execute_harvest;
pub use math::{total_underlying, Snapshot};
pub use rescue::{execute_rescue_tokens, execute_rescue_vault_tokens};
pub use withdraw::{execute_emergency_withdraw, execute_withdraw, execute_withdraw_shares_to};

use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum MockStrategyError {
    InsufficientManaged = 1,
    InvalidAmount = 2,
}

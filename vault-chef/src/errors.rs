use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum VaultChefError {
    // Access
    NotWhitelisted = 100,
    Unauthorized = 101,

    // Vault registry
    VaultNotFound = 110,
    VaultPaused = 111,
    VaultPanicked = 112,
    NoOpPauseState = 113,
    AlreadyPanicked = 114,
    StrategyAlreadyLinked = 115,
    InvalidFee = 116,

    // Amounts and conversion
    ZeroShares = 120,
    InsufficientShares = 121,
    SlippageExceeded = 122,
    UnsafeAmount = 123,
    ZeroAmount = 124,
    InvalidAmount = 125,
    InvalidExchangeRate = 126,
    LengthMismatch = 127,

    // Routing and rescue
    PhishingGuard = 130,
    NotApproved = 131,
    UnsafeRescue = 132,
}

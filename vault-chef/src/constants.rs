// Fee precision
pub const BPS_DENOMINATOR: i128 = 10_000;
pub const MAX_PERFORMANCE_FEE_BPS: u32 = 1_000; // 10%

// Deposits may not push a vault's managed underlying past this. Keeps every
// share/underlying product inside i128 once divided back down.
pub const MAX_TOTAL_UNDERLYING: i128 = 10_000_000_000_000_000_000_000_000_000_000_000; // 1e34

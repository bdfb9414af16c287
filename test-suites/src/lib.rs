pub mod setup;
pub mod test_fixture;
pub mod zap;

pub const ONE: i128 = 1_000_000_000_000_000_000;

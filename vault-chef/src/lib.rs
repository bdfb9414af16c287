#![no_std]

mod constants;
mod errors;
pub mod storage;
mod contract;
mod access;
mod registry;
mod ledger;
mod engine;
mod dependencies;
mod events;
mod types;
pub mod testutils;

pub use constants::*;
pub use contract::*;
pub use dependencies::{StrategyClient, StrategyInterface};
pub use errors::VaultChefError;
pub use types::*;

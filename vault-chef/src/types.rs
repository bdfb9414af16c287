use soroban_sdk::{contracttype, Address};

#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[repr(u32)]
pub enum VaultStatus {
    Active = 0,
    Paused = 1,
    /// Terminal. Funds were pulled out of the strategy into the chef's custody.
    Panicked = 2,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct VaultInfo {
    pub underlying: Address,        // Asset deposited into the vault
    pub last_harvest_timestamp: u64, // Ledger timestamp of the last harvest, 0 if never harvested
    pub strategy: Address,          // Strategy contract managing the funds
    pub performance_fee_bps: u32,   // Fee on harvested yield, in basis points (max 1000)
    pub status: VaultStatus,
}

impl VaultInfo {
    pub fn is_active(&self) -> bool {
        self.status == VaultStatus::Active
    }

    pub fn is_paused(&self) -> bool {
        self.status != VaultStatus::Active
    }

    pub fn is_panicked(&self) -> bool {
        self.status == VaultStatus::Panicked
    }
}

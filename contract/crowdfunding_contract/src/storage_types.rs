use soroban_sdk::{contracterror, contracttype, Address};

// Instance storage keys
#[derive(Clone)]
#[contracttype]
pub enum DataKey {
    Campaign,
    TotalFunds,
    NextContributionId,
    Withdrawn,
}

// Persistent storage keys
#[derive(Clone)]
#[contracttype]
pub enum PersistentKey {
    Contribution(Address),
}

pub type ContributionId = u64;

/// Immutable campaign parameters, fixed at `initialize`.
#[derive(Clone, Debug, PartialEq)]
#[contracttype]
pub struct Campaign {
    pub owner: Address,
    pub token: Address,      // Asset held in custody
    pub goal: i128,          // Smallest token unit
    pub deadline: u64,       // Ledger timestamp, inclusive
    pub created_at: u64,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[contracttype]
pub enum CampaignStatus {
    Funding,
    Succeeded,
    Failed,
    Withdrawn,
}

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum CrowdfundingError {
    AlreadyInitialized = 1,
    NotInitialized = 2,
    InvalidParameters = 3,
    DeadlinePassed = 4,
    ZeroValue = 5,
    Unauthorized = 6,
    DeadlineNotReached = 7,
    GoalNotReached = 8,
    GoalReached = 9,
    AlreadyWithdrawn = 10,
    NothingToRefund = 11,
    Overflow = 12,
    NothingToSweep = 13,
}

// Ledgers are ~5s apart, 17280 per day
pub const TTL_INSTANCE: u32 = 17280 * 30; // 30 days
pub const TTL_PERSISTENT: u32 = 17280 * 90; // 90 days
pub const TTL_THRESHOLD: u32 = 17280 * 7; // bump once fewer than 7 days remain

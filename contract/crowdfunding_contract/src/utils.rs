use soroban_sdk::Env;

use crate::storage_types::CrowdfundingError;

/// Get current timestamp
pub fn get_current_timestamp(env: &Env) -> u64 {
    env.ledger().timestamp()
}

/// Check if timestamp is in the past
pub fn is_past(env: &Env, timestamp: u64) -> bool {
    env.ledger().timestamp() > timestamp
}

/// Check if timestamp is in the future
pub fn is_future(env: &Env, timestamp: u64) -> bool {
    env.ledger().timestamp() < timestamp
}

/// Validate campaign parameters at creation time
pub fn validate_campaign(env: &Env, goal: i128, deadline: u64) -> Result<(), CrowdfundingError> {
    if goal <= 0 || !is_future(env, deadline) {
        return Err(CrowdfundingError::InvalidParameters);
    }
    Ok(())
}

/// Validate a contribution amount is positive
pub fn validate_amount(amount: i128) -> Result<(), CrowdfundingError> {
    if amount <= 0 {
        return Err(CrowdfundingError::ZeroValue);
    }
    Ok(())
}

pub fn checked_add(a: i128, b: i128) -> Result<i128, CrowdfundingError> {
    a.checked_add(b).ok_or(CrowdfundingError::Overflow)
}

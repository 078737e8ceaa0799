use soroban_sdk::{Address, Env};

use crate::storage_types::*;

pub fn extend_instance(env: &Env) {
    env.storage().instance().extend_ttl(TTL_THRESHOLD, TTL_INSTANCE);
}

fn extend_persistent(env: &Env, key: &PersistentKey) {
    env.storage()
        .persistent()
        .extend_ttl(key, TTL_THRESHOLD, TTL_PERSISTENT);
}

pub fn has_campaign(env: &Env) -> bool {
    env.storage().instance().has(&DataKey::Campaign)
}

pub fn read_campaign(env: &Env) -> Result<Campaign, CrowdfundingError> {
    env.storage()
        .instance()
        .get(&DataKey::Campaign)
        .ok_or(CrowdfundingError::NotInitialized)
}

pub fn write_campaign(env: &Env, campaign: &Campaign) {
    env.storage().instance().set(&DataKey::Campaign, campaign);
    extend_instance(env);
}

pub fn read_total_funds(env: &Env) -> i128 {
    env.storage()
        .instance()
        .get(&DataKey::TotalFunds)
        .unwrap_or(0)
}

pub fn write_total_funds(env: &Env, total: i128) {
    env.storage().instance().set(&DataKey::TotalFunds, &total);
    extend_instance(env);
}

pub fn read_contribution(env: &Env, contributor: &Address) -> i128 {
    env.storage()
        .persistent()
        .get(&PersistentKey::Contribution(contributor.clone()))
        .unwrap_or(0)
}

pub fn write_contribution(env: &Env, contributor: &Address, amount: i128) {
    let key = PersistentKey::Contribution(contributor.clone());
    if amount == 0 {
        env.storage().persistent().remove(&key);
        return;
    }
    env.storage().persistent().set(&key, &amount);
    extend_persistent(env, &key);
}

/// Hands out the next contribution id and advances the counter.
pub fn take_contribution_id(env: &Env) -> Result<ContributionId, CrowdfundingError> {
    let id: ContributionId = env
        .storage()
        .instance()
        .get(&DataKey::NextContributionId)
        .unwrap_or(1);
    let next = id.checked_add(1).ok_or(CrowdfundingError::Overflow)?;
    env.storage().instance().set(&DataKey::NextContributionId, &next);
    Ok(id)
}

pub fn is_withdrawn(env: &Env) -> bool {
    env.storage()
        .instance()
        .get(&DataKey::Withdrawn)
        .unwrap_or(false)
}

pub fn set_withdrawn(env: &Env) {
    env.storage().instance().set(&DataKey::Withdrawn, &true);
    extend_instance(env);
}

#![no_std]

mod custody;
mod events;
mod storage;
mod storage_types;
mod utils;


use soroban_sdk::{contract, contractimpl, log, Address, Env};

pub use storage_types::{Campaign, CampaignStatus, ContributionId, CrowdfundingError};
use utils::*;

#[contract]
pub struct CrowdfundingContract;

#[contractimpl]
impl CrowdfundingContract {
    /// Create the campaign. Owner, goal and deadline are fixed from here on.
    pub fn initialize(
        env: Env,
        owner: Address,
        token: Address,
        goal: i128,
        deadline: u64,
    ) -> Result<(), CrowdfundingError> {
        if storage::has_campaign(&env) {
            return Err(CrowdfundingError::AlreadyInitialized);
        }

        owner.require_auth();
        validate_campaign(&env, goal, deadline)?;

        let campaign = Campaign {
            owner: owner.clone(),
            token: token.clone(),
            goal,
            deadline,
            created_at: get_current_timestamp(&env),
        };

        storage::write_campaign(&env, &campaign);
        storage::write_total_funds(&env, 0);

        log!(&env, "campaign created", goal, deadline);

        events::emit_campaign_created(
            &env,
            events::CampaignCreatedEvent {
                owner,
                token,
                goal,
                deadline,
            },
        );

        Ok(())
    }

    /// Contribute `amount` of the campaign token. Accepted up to and
    /// including the deadline. Returns the contribution id.
    pub fn contribute(
        env: Env,
        caller: Address,
        amount: i128,
    ) -> Result<ContributionId, CrowdfundingError> {
        caller.require_auth();
        validate_amount(amount)?;

        let campaign = storage::read_campaign(&env)?;
        if is_past(&env, campaign.deadline) {
            return Err(CrowdfundingError::DeadlinePassed);
        }

        let contributed = checked_add(storage::read_contribution(&env, &caller), amount)?;
        let total_funds = checked_add(storage::read_total_funds(&env), amount)?;
        let contribution_id = storage::take_contribution_id(&env)?;

        custody::deposit(&env, &campaign, &caller, amount);

        storage::write_contribution(&env, &caller, contributed);
        storage::write_total_funds(&env, total_funds);

        log!(&env, "contribution accepted", contribution_id, amount, total_funds);

        events::emit_contributed(
            &env,
            events::ContributedEvent {
                contribution_id,
                contributor: caller,
                amount,
                total_funds,
            },
        );

        Ok(contribution_id)
    }

    /// Owner collects the custodied funds once the deadline has passed
    /// and the goal was met.
    pub fn withdraw(env: Env, caller: Address) -> Result<i128, CrowdfundingError> {
        caller.require_auth();

        let campaign = storage::read_campaign(&env)?;
        if caller != campaign.owner {
            return Err(CrowdfundingError::Unauthorized);
        }
        if storage::is_withdrawn(&env) {
            return Err(CrowdfundingError::AlreadyWithdrawn);
        }
        if !is_past(&env, campaign.deadline) {
            return Err(CrowdfundingError::DeadlineNotReached);
        }
        if storage::read_total_funds(&env) < campaign.goal {
            return Err(CrowdfundingError::GoalNotReached);
        }

        let amount = custody::custodied_balance(&env, &campaign);
        storage::set_withdrawn(&env);
        custody::release(&env, &campaign, &campaign.owner, amount);

        log!(&env, "funds withdrawn", amount);

        events::emit_withdrawn(
            &env,
            events::WithdrawnEvent {
                owner: campaign.owner,
                amount,
            },
        );

        Ok(amount)
    }

    /// Owner recovers tokens that reached the contract outside `contribute`.
    /// Only the balance above what contributors are owed is moved.
    pub fn sweep_excess(env: Env, caller: Address) -> Result<i128, CrowdfundingError> {
        caller.require_auth();

        let campaign = storage::read_campaign(&env)?;
        if caller != campaign.owner {
            return Err(CrowdfundingError::Unauthorized);
        }

        // Once withdrawn, nothing left in custody backs a contribution
        let owed = if storage::is_withdrawn(&env) {
            0
        } else {
            storage::read_total_funds(&env)
        };
        let excess = custody::custodied_balance(&env, &campaign) - owed;
        if excess <= 0 {
            return Err(CrowdfundingError::NothingToSweep);
        }

        custody::release(&env, &campaign, &campaign.owner, excess);

        log!(&env, "excess swept", excess);

        events::emit_swept(
            &env,
            events::SweptEvent {
                owner: campaign.owner,
                amount: excess,
            },
        );

        Ok(excess)
    }

    /// Contributor takes back their contribution after a campaign that
    /// missed its goal.
    pub fn refund(env: Env, caller: Address) -> Result<i128, CrowdfundingError> {
        caller.require_auth();

        let campaign = storage::read_campaign(&env)?;
        if !is_past(&env, campaign.deadline) {
            return Err(CrowdfundingError::DeadlineNotReached);
        }

        let total_funds = storage::read_total_funds(&env);
        if total_funds >= campaign.goal {
            return Err(CrowdfundingError::GoalReached);
        }

        let amount = storage::read_contribution(&env, &caller);
        if amount == 0 {
            return Err(CrowdfundingError::NothingToRefund);
        }

        // amount is part of total_funds, so this cannot go negative
        let total_funds = total_funds - amount;
        storage::write_contribution(&env, &caller, 0);
        storage::write_total_funds(&env, total_funds);
        custody::release(&env, &campaign, &caller, amount);

        log!(&env, "contribution refunded", amount, total_funds);

        events::emit_refunded(
            &env,
            events::RefundedEvent {
                contributor: caller,
                amount,
                total_funds,
            },
        );

        Ok(amount)
    }

    /// View functions
    pub fn get_campaign(env: Env) -> Result<Campaign, CrowdfundingError> {
        storage::read_campaign(&env)
    }

    pub fn owner(env: Env) -> Result<Address, CrowdfundingError> {
        Ok(storage::read_campaign(&env)?.owner)
    }

    pub fn token(env: Env) -> Result<Address, CrowdfundingError> {
        Ok(storage::read_campaign(&env)?.token)
    }

    pub fn goal(env: Env) -> Result<i128, CrowdfundingError> {
        Ok(storage::read_campaign(&env)?.goal)
    }

    pub fn deadline(env: Env) -> Result<u64, CrowdfundingError> {
        Ok(storage::read_campaign(&env)?.deadline)
    }

    pub fn total_funds(env: Env) -> i128 {
        storage::read_total_funds(&env)
    }

    /// Amount recorded against `contributor`, zero if they never contributed.
    pub fn contributions(env: Env, contributor: Address) -> i128 {
        storage::read_contribution(&env, &contributor)
    }

    /// Token balance held by the contract. Matches `total_funds` until the
    /// owner withdraws, unless tokens were sent to the contract directly;
    /// that surplus is never refunded and only leaves through `sweep_excess`.
    pub fn get_contract_balance(env: Env) -> Result<i128, CrowdfundingError> {
        let campaign = storage::read_campaign(&env)?;
        Ok(custody::custodied_balance(&env, &campaign))
    }

    pub fn is_goal_reached(env: Env) -> Result<bool, CrowdfundingError> {
        let campaign = storage::read_campaign(&env)?;
        Ok(storage::read_total_funds(&env) >= campaign.goal)
    }

    pub fn status(env: Env) -> Result<CampaignStatus, CrowdfundingError> {
        let campaign = storage::read_campaign(&env)?;

        let status = if storage::is_withdrawn(&env) {
            CampaignStatus::Withdrawn
        } else if !is_past(&env, campaign.deadline) {
            CampaignStatus::Funding
        } else if storage::read_total_funds(&env) >= campaign.goal {
            CampaignStatus::Succeeded
        } else {
            CampaignStatus::Failed
        };

        Ok(status)
    }
}

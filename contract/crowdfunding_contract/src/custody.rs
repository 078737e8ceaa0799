use soroban_sdk::{token, Address, Env};

use crate::storage_types::Campaign;

/// Move `amount` from the contributor into the contract's custody
pub fn deposit(env: &Env, campaign: &Campaign, from: &Address, amount: i128) {
    let token_client = token::TokenClient::new(env, &campaign.token);
    token_client.transfer(from, &env.current_contract_address(), &amount);
}

/// Pay `amount` out of custody to `to`
pub fn release(env: &Env, campaign: &Campaign, to: &Address, amount: i128) {
    if amount <= 0 {
        return;
    }

    let token_client = token::TokenClient::new(env, &campaign.token);
    token_client.transfer(&env.current_contract_address(), to, &amount);
}

/// Balance the contract currently holds in the campaign token
pub fn custodied_balance(env: &Env, campaign: &Campaign) -> i128 {
    let token_client = token::TokenClient::new(env, &campaign.token);
    token_client.balance(&env.current_contract_address())
}

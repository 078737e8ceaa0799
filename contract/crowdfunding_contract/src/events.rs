use soroban_sdk::{contracttype, Address, Env, Symbol};

#[contracttype]
#[derive(Clone)]
pub struct CampaignCreatedEvent {
    pub owner: Address,
    pub token: Address,
    pub goal: i128,
    pub deadline: u64,
}

#[contracttype]
#[derive(Clone)]
pub struct ContributedEvent {
    pub contribution_id: u64,
    pub contributor: Address,
    pub amount: i128,
    pub total_funds: i128,
}

#[contracttype]
#[derive(Clone)]
pub struct WithdrawnEvent {
    pub owner: Address,
    pub amount: i128,
}

#[contracttype]
#[derive(Clone)]
pub struct RefundedEvent {
    pub contributor: Address,
    pub amount: i128,
    pub total_funds: i128,
}

pub fn emit_campaign_created(env: &Env, event: CampaignCreatedEvent) {
    env.events().publish(
        (Symbol::new(env, "campaign_created"),),
        event,
    );
}

pub fn emit_contributed(env: &Env, event: ContributedEvent) {
    env.events().publish(
        (Symbol::new(env, "contributed"), event.contributor.clone()),
        event,
    );
}

pub fn emit_withdrawn(env: &Env, event: WithdrawnEvent) {
    env.events().publish(
        (Symbol::new(env, "withdrawn"),),
        event,
    );
}

pub fn emit_refunded(env: &Env, event: RefundedEvent) {
    env.events().publish(
        (Symbol::new(env, "refunded"), event.contributor.clone()),
        event,
    );
}

#[contracttype]
#[derive(Clone)]
pub struct SweptEvent {
    pub owner: Address,
    pub amount: i128,
}

pub fn emit_swept(env: &Env, event: SweptEvent) {
    env.events().publish(
        (Symbol::new(env, "swept"),),
        event,
    );
}

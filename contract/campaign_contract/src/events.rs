use soroban_sdk::{contractevent, Address, BytesN, Env};

#[contractevent(topics = ["campaign_initialized"])]
#[derive(Clone)]
pub struct CampaignInitializedEvent {
    #[topic]
    pub owner: Address,
    pub reward_token: Address,
    pub total_reward_amount: i128,
    pub end_time: u64,
    pub max_winners: u32,
}

#[contractevent(topics = ["campaign_funded"])]
#[derive(Clone)]
pub struct CampaignFundedEvent {
    #[topic]
    pub funder: Address,
    pub amount: i128,
}

#[contractevent(topics = ["participant_joined"])]
#[derive(Clone)]
pub struct ParticipantJoinedEvent {
    #[topic]
    pub participant: Address,
    pub position: u32,
}

#[contractevent(topics = ["campaign_closed"])]
#[derive(Clone)]
pub struct CampaignClosedEvent {
    pub participant_count: u32,
    pub request_id: Option<u64>,
}

#[contractevent(topics = ["winners_selected"])]
#[derive(Clone)]
pub struct WinnersSelectedEvent {
    pub request_id: Option<u64>,
    pub winner_count: u32,
    pub entitlement: i128,
}

#[contractevent(topics = ["reward_claimed"])]
#[derive(Clone)]
pub struct RewardClaimedEvent {
    #[topic]
    pub winner: Address,
    pub amount: i128,
}

#[contractevent(topics = ["randomness_config_updated"])]
#[derive(Clone)]
pub struct RandomnessConfigUpdatedEvent {
    pub key_hash: BytesN<32>,
    pub subscription_id: u64,
}

pub fn emit_campaign_initialized(env: &Env, event: CampaignInitializedEvent) {
    event.publish(env);
}

pub fn emit_campaign_funded(env: &Env, event: CampaignFundedEvent) {
    event.publish(env);
}

pub fn emit_participant_joined(env: &Env, event: ParticipantJoinedEvent) {
    event.publish(env);
}

pub fn emit_campaign_closed(env: &Env, event: CampaignClosedEvent) {
    event.publish(env);
}

pub fn emit_winners_selected(env: &Env, event: WinnersSelectedEvent) {
    event.publish(env);
}

pub fn emit_reward_claimed(env: &Env, event: RewardClaimedEvent) {
    event.publish(env);
}

pub fn emit_randomness_config_updated(env: &Env, event: RandomnessConfigUpdatedEvent) {
    event.publish(env);
}

#![no_std]

mod custody;
mod events;
pub mod ledger;
mod oracle;
pub mod registry;
pub mod selection;
mod storage_types;


use core::cmp::min;

use soroban_sdk::{contract, contractimpl, log, Address, BytesN, Env, Vec};

pub use oracle::{RandomnessOracle, RandomnessOracleClient};
pub use storage_types::*;

#[contract]
pub struct CampaignContract;

#[contractimpl]
impl CampaignContract {
    /// Create the campaign in the `Created` state.
    ///
    /// `oracle` is the only address allowed to deliver randomness; `key_hash`
    /// and `subscription_id` are forwarded with every randomness request.
    pub fn initialize(
        env: Env,
        owner: Address,
        reward_token: Address,
        total_reward_amount: i128,
        end_time: u64,
        max_winners: u32,
        oracle: Address,
        key_hash: BytesN<32>,
        subscription_id: u64,
    ) -> Result<(), Error> {
        if env.storage().instance().has(&DataKey::Campaign) {
            return Err(Error::AlreadyInitialized);
        }
        owner.require_auth();

        if total_reward_amount <= 0 || max_winners == 0 || end_time <= env.ledger().timestamp() {
            return Err(Error::InvalidParameters);
        }

        let campaign = Campaign {
            owner: owner.clone(),
            reward_token: reward_token.clone(),
            total_reward_amount,
            end_time,
            max_winners,
            randomness: RandomnessConfig {
                oracle,
                key_hash,
                subscription_id,
            },
            state: CampaignState::Created,
            request_id: None,
        };
        write_campaign(&env, &campaign);

        events::emit_campaign_initialized(
            &env,
            events::CampaignInitializedEvent {
                owner,
                reward_token,
                total_reward_amount,
                end_time,
                max_winners,
            },
        );
        Ok(())
    }

    /// Pull the reward pool from the owner. The owner must have approved the
    /// campaign for `total_reward_amount` on the reward token beforehand.
    pub fn fund_campaign(env: Env, funder: Address) -> Result<(), Error> {
        funder.require_auth();
        let mut campaign = read_campaign(&env)?;
        if funder != campaign.owner {
            return Err(Error::Unauthorized);
        }
        if campaign.state != CampaignState::Created {
            return Err(Error::AlreadyFunded);
        }

        custody::pull_funds(
            &env,
            &campaign.reward_token,
            &funder,
            campaign.total_reward_amount,
        )?;

        campaign.state = CampaignState::Funded;
        write_campaign(&env, &campaign);
        log!(&env, "campaign funded", campaign.total_reward_amount);

        events::emit_campaign_funded(
            &env,
            events::CampaignFundedEvent {
                funder,
                amount: campaign.total_reward_amount,
            },
        );
        Ok(())
    }

    /// Register `participant`. Each address joins at most once, and only
    /// after funding and strictly before `end_time`.
    pub fn join_campaign(env: Env, participant: Address) -> Result<(), Error> {
        participant.require_auth();
        let mut campaign = read_campaign(&env)?;
        if !accepts_participants(&campaign) || env.ledger().timestamp() >= campaign.end_time {
            return Err(Error::CampaignNotOpen);
        }

        let position = registry::add(&env, &participant)?;

        if campaign.state == CampaignState::Funded {
            campaign.state = CampaignState::Open;
            write_campaign(&env, &campaign);
        } else {
            extend_instance(&env);
        }

        events::emit_participant_joined(
            &env,
            events::ParticipantJoinedEvent {
                participant,
                position,
            },
        );
        Ok(())
    }

    /// End registration once `end_time` has passed and ask the oracle for
    /// randomness. With nobody registered the campaign goes straight to
    /// `WinnersSelected` with an empty winner set.
    pub fn close_campaign(env: Env, caller: Address) -> Result<(), Error> {
        caller.require_auth();
        let mut campaign = read_campaign(&env)?;
        if caller != campaign.owner {
            return Err(Error::Unauthorized);
        }
        if !accepts_participants(&campaign) {
            return Err(Error::CampaignNotOpen);
        }
        if env.ledger().timestamp() < campaign.end_time {
            return Err(Error::TooEarly);
        }

        let participant_count = registry::count(&env);
        if participant_count == 0 {
            let winners = Vec::new(&env);
            let entitlement = ledger::finalize(&env, &winners, campaign.total_reward_amount);
            campaign.state = CampaignState::WinnersSelected;
            write_campaign(&env, &campaign);
            log!(&env, "campaign closed without participants");

            events::emit_campaign_closed(
                &env,
                events::CampaignClosedEvent {
                    participant_count,
                    request_id: None,
                },
            );
            events::emit_winners_selected(
                &env,
                events::WinnersSelectedEvent {
                    request_id: None,
                    winner_count: 0,
                    entitlement,
                },
            );
            return Ok(());
        }

        let num_words = min(campaign.max_winners, participant_count);
        let request_id = oracle::request_random_words(&env, &campaign.randomness, num_words)?;

        campaign.request_id = Some(request_id);
        campaign.state = CampaignState::Closed;
        write_campaign(&env, &campaign);
        log!(&env, "randomness requested", request_id, num_words);

        events::emit_campaign_closed(
            &env,
            events::CampaignClosedEvent {
                participant_count,
                request_id: Some(request_id),
            },
        );
        Ok(())
    }

    /// Oracle callback. Rejected without side effects unless it comes from
    /// the configured oracle and answers the pending request.
    pub fn fulfill_random_words(
        env: Env,
        oracle: Address,
        request_id: u64,
        random_words: Vec<u64>,
    ) -> Result<(), Error> {
        oracle.require_auth();
        let mut campaign = read_campaign(&env)?;
        if oracle != campaign.randomness.oracle {
            return Err(Error::Unauthorized);
        }
        if campaign.state != CampaignState::Closed || campaign.request_id != Some(request_id) {
            return Err(Error::UnknownRequest);
        }

        let picked = selection::select_indices(
            &env,
            registry::count(&env),
            &random_words,
            campaign.max_winners,
        )?;
        let mut winners = Vec::new(&env);
        for index in picked.iter() {
            let winner = registry::get(&env, index).ok_or(Error::MissingParticipant)?;
            winners.push_back(winner);
        }
        let entitlement = ledger::finalize(&env, &winners, campaign.total_reward_amount);

        campaign.state = CampaignState::WinnersSelected;
        write_campaign(&env, &campaign);
        log!(&env, "winners selected", winners.len(), entitlement);

        events::emit_winners_selected(
            &env,
            events::WinnersSelectedEvent {
                request_id: Some(request_id),
                winner_count: winners.len(),
                entitlement,
            },
        );
        Ok(())
    }

    /// Withdraw the caller's entitlement. Succeeds once per winner.
    pub fn claim_reward(env: Env, winner: Address) -> Result<i128, Error> {
        winner.require_auth();
        let campaign = read_campaign(&env)?;
        if campaign.state != CampaignState::WinnersSelected {
            return Err(Error::WinnersNotSelected);
        }

        let amount = ledger::claim(&env, &winner, |amount| {
            custody::pay_out(&env, &campaign.reward_token, &winner, amount)
        })?;
        extend_instance(&env);

        events::emit_reward_claimed(
            &env,
            events::RewardClaimedEvent {
                winner,
                amount,
            },
        );
        Ok(amount)
    }

    /// Change the oracle key hash and subscription used for the draw.
    /// Only possible until the campaign is closed.
    pub fn update_randomness_config(
        env: Env,
        caller: Address,
        key_hash: BytesN<32>,
        subscription_id: u64,
    ) -> Result<(), Error> {
        caller.require_auth();
        let mut campaign = read_campaign(&env)?;
        if caller != campaign.owner {
            return Err(Error::Unauthorized);
        }
        if campaign.state != CampaignState::Created && !accepts_participants(&campaign) {
            return Err(Error::CampaignNotOpen);
        }

        campaign.randomness.key_hash = key_hash.clone();
        campaign.randomness.subscription_id = subscription_id;
        write_campaign(&env, &campaign);

        events::emit_randomness_config_updated(
            &env,
            events::RandomnessConfigUpdatedEvent {
                key_hash,
                subscription_id,
            },
        );
        Ok(())
    }

    /// View functions
    pub fn get_campaign(env: Env) -> Result<Campaign, Error> {
        read_campaign(&env)
    }

    pub fn get_state(env: Env) -> Result<CampaignState, Error> {
        Ok(read_campaign(&env)?.state)
    }

    pub fn get_request_id(env: Env) -> Option<u64> {
        read_campaign(&env).ok().and_then(|campaign| campaign.request_id)
    }

    pub fn get_participants(env: Env) -> Vec<Address> {
        registry::all(&env)
    }

    /// Up to `limit` participants in join order, starting at position `start`.
    pub fn get_participants_page(env: Env, start: u32, limit: u32) -> Vec<Address> {
        registry::page(&env, start, limit)
    }

    pub fn participant_count(env: Env) -> u32 {
        registry::count(&env)
    }

    pub fn has_joined(env: Env, participant: Address) -> bool {
        registry::contains(&env, &participant)
    }

    pub fn get_winners(env: Env) -> Vec<Address> {
        ledger::winners(&env)
    }

    pub fn is_winner(env: Env, participant: Address) -> bool {
        ledger::get_claim(&env, &participant).is_some()
    }

    pub fn get_claim(env: Env, winner: Address) -> Option<ClaimRecord> {
        ledger::get_claim(&env, &winner)
    }

    pub fn has_claimed(env: Env, winner: Address) -> bool {
        ledger::get_claim(&env, &winner).map_or(false, |record| record.claimed)
    }

    pub fn entitlement(env: Env) -> i128 {
        ledger::entitlement(&env)
    }

    pub fn total_claimed(env: Env) -> i128 {
        ledger::total_claimed(&env)
    }

    /// Funded amount minus everything already claimed; zero before funding.
    pub fn balance_remaining(env: Env) -> Result<i128, Error> {
        let campaign = read_campaign(&env)?;
        let custody = match campaign.state {
            CampaignState::Created => 0,
            _ => campaign.total_reward_amount,
        };
        Ok(ledger::balance_remaining(&env, custody))
    }
}

// Helper functions
fn extend_instance(env: &Env) {
    env.storage()
        .instance()
        .extend_ttl(TTL_INSTANCE, TTL_INSTANCE);
}

fn read_campaign(env: &Env) -> Result<Campaign, Error> {
    env.storage()
        .instance()
        .get(&DataKey::Campaign)
        .ok_or(Error::NotInitialized)
}

fn write_campaign(env: &Env, campaign: &Campaign) {
    env.storage().instance().set(&DataKey::Campaign, campaign);
    extend_instance(env);
}

fn accepts_participants(campaign: &Campaign) -> bool {
    matches!(
        campaign.state,
        CampaignState::Funded | CampaignState::Open
    )
}

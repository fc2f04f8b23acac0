use soroban_sdk::{Address, Env, Vec};

use crate::storage_types::{DataKey, Error, PersistentKey, TTL_PERSISTENT};

/// Append `participant` to the join-ordered list. Returns its zero-based position.
///
/// Each participant occupies its own `Participant(position)` entry, so a join
/// writes a fixed number of bytes however many addresses came before it.
pub fn add(env: &Env, participant: &Address) -> Result<u32, Error> {
    if contains(env, participant) {
        return Err(Error::AlreadyJoined);
    }

    let position = count(env);
    let joined_key = PersistentKey::Joined(participant.clone());
    let slot_key = PersistentKey::Participant(position);
    env.storage().persistent().set(&joined_key, &true);
    env.storage().persistent().set(&slot_key, participant);
    env.storage()
        .instance()
        .set(&DataKey::ParticipantCount, &(position + 1));
    extend(env, &joined_key);
    extend(env, &slot_key);

    Ok(position)
}

pub fn contains(env: &Env, participant: &Address) -> bool {
    env.storage()
        .persistent()
        .has(&PersistentKey::Joined(participant.clone()))
}

pub fn count(env: &Env) -> u32 {
    env.storage()
        .instance()
        .get(&DataKey::ParticipantCount)
        .unwrap_or(0)
}

/// Participant at join position `index`.
pub fn get(env: &Env, index: u32) -> Option<Address> {
    env.storage()
        .persistent()
        .get(&PersistentKey::Participant(index))
}

/// Up to `limit` participants in join order, starting at position `start`.
pub fn page(env: &Env, start: u32, limit: u32) -> Vec<Address> {
    let mut participants = Vec::new(env);
    let end = start.saturating_add(limit).min(count(env));
    for index in start..end {
        if let Some(participant) = get(env, index) {
            participants.push_back(participant);
        }
    }
    participants
}

/// Participants in join order.
pub fn all(env: &Env) -> Vec<Address> {
    page(env, 0, count(env))
}

fn extend(env: &Env, key: &PersistentKey) {
    env.storage()
        .persistent()
        .extend_ttl(key, TTL_PERSISTENT, TTL_PERSISTENT);
}

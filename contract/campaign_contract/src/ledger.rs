use soroban_sdk::{Address, Env, Vec};

use crate::storage_types::{ClaimRecord, DataKey, Error, PersistentKey, TTL_PERSISTENT};

/// Record the winner set and split `total_reward` evenly between them.
///
/// The integer-division remainder is not assigned to anyone and stays in
/// custody. Returns the per-winner entitlement (zero with no winners).
pub fn finalize(env: &Env, winners: &Vec<Address>, total_reward: i128) -> i128 {
    let entitlement = if winners.is_empty() {
        0
    } else {
        total_reward / winners.len() as i128
    };

    for winner in winners.iter() {
        let key = PersistentKey::Claim(winner.clone());
        let record = ClaimRecord {
            winner,
            entitlement,
            claimed: false,
        };
        env.storage().persistent().set(&key, &record);
        extend(env, &key);
    }

    env.storage().persistent().set(&PersistentKey::Winners, winners);
    extend(env, &PersistentKey::Winners);
    env.storage().instance().set(&DataKey::Entitlement, &entitlement);
    env.storage().instance().set(&DataKey::TotalClaimed, &0i128);

    entitlement
}

/// Mark `winner`'s record claimed, then hand the entitlement to `pay`.
///
/// The claimed flag is written before `pay` runs, so a payout that re-enters
/// `claim` for the same winner sees `AlreadyClaimed`.
pub fn claim<F>(env: &Env, winner: &Address, pay: F) -> Result<i128, Error>
where
    F: FnOnce(i128) -> Result<(), Error>,
{
    let key = PersistentKey::Claim(winner.clone());
    let mut record: ClaimRecord = env
        .storage()
        .persistent()
        .get(&key)
        .ok_or(Error::NotAWinner)?;
    if record.claimed {
        return Err(Error::AlreadyClaimed);
    }

    record.claimed = true;
    env.storage().persistent().set(&key, &record);
    extend(env, &key);

    let claimed_total = total_claimed(env) + record.entitlement;
    env.storage()
        .instance()
        .set(&DataKey::TotalClaimed, &claimed_total);

    pay(record.entitlement)?;
    Ok(record.entitlement)
}

pub fn get_claim(env: &Env, winner: &Address) -> Option<ClaimRecord> {
    env.storage()
        .persistent()
        .get(&PersistentKey::Claim(winner.clone()))
}

pub fn winners(env: &Env) -> Vec<Address> {
    env.storage()
        .persistent()
        .get(&PersistentKey::Winners)
        .unwrap_or_else(|| Vec::new(env))
}

pub fn entitlement(env: &Env) -> i128 {
    env.storage()
        .instance()
        .get(&DataKey::Entitlement)
        .unwrap_or(0)
}

pub fn total_claimed(env: &Env) -> i128 {
    env.storage()
        .instance()
        .get(&DataKey::TotalClaimed)
        .unwrap_or(0)
}

/// Tokens still held for this campaign: `custody` minus everything paid out.
pub fn balance_remaining(env: &Env, custody: i128) -> i128 {
    custody - total_claimed(env)
}

fn extend(env: &Env, key: &PersistentKey) {
    env.storage()
        .persistent()
        .extend_ttl(key, TTL_PERSISTENT, TTL_PERSISTENT);
}

use core::cmp::min;

use soroban_sdk::{Address, Env, Map, Vec};

use crate::storage_types::Error;

/// Pick `min(max_winners, participant_count)` distinct join positions.
///
/// Draw `i` uses `random_words[i] mod N`; an index that is already taken is
/// resolved by stepping forward `(index + 1) mod N` until a free slot is found.
/// When the oracle delivered fewer words than draws, the missing words are
/// derived from the delivered ones with [`derive_word`]. The result depends
/// only on the inputs.
pub fn select_indices(
    env: &Env,
    participant_count: u32,
    random_words: &Vec<u64>,
    max_winners: u32,
) -> Result<Vec<u32>, Error> {
    let mut picked = Vec::new(env);
    let n = participant_count;
    let draws = min(max_winners, n);
    if draws == 0 {
        return Ok(picked);
    }
    if random_words.is_empty() {
        return Err(Error::InsufficientRandomness);
    }

    let mut taken: Map<u32, bool> = Map::new(env);
    for draw in 0..draws {
        let word = word_for_draw(random_words, draw);
        let mut index = (word % n as u64) as u32;
        // fewer than n slots are taken before each draw, so the scan ends
        while taken.contains_key(index) {
            index = (index + 1) % n;
        }
        taken.set(index, true);
        picked.push_back(index);
    }

    Ok(picked)
}

/// [`select_indices`] applied to an in-memory participant list.
pub fn select_winners(
    env: &Env,
    participants: &Vec<Address>,
    random_words: &Vec<u64>,
    max_winners: u32,
) -> Result<Vec<Address>, Error> {
    let picked = select_indices(env, participants.len(), random_words, max_winners)?;
    let mut winners = Vec::new(env);
    for index in picked.iter() {
        winners.push_back(participants.get_unchecked(index));
    }
    Ok(winners)
}

fn word_for_draw(random_words: &Vec<u64>, draw: u32) -> u64 {
    let delivered = random_words.len();
    let word = random_words.get_unchecked(draw % delivered);
    if draw < delivered {
        word
    } else {
        derive_word(word, draw / delivered)
    }
}

/// Stretch one oracle word into another for reuse round `round` (splitmix64 finalizer).
pub fn derive_word(word: u64, round: u32) -> u64 {
    let mut z = word ^ (round as u64).wrapping_mul(0x9E37_79B9_7F4A_7C15);
    z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
    z ^ (z >> 31)
}

use soroban_sdk::{contractclient, BytesN, Env};

use crate::storage_types::{Error, RandomnessConfig};

/// Interface of the randomness oracle adapter. The adapter answers later by
/// invoking `fulfill_random_words` on the campaign with the returned id.
#[contractclient(name = "RandomnessOracleClient")]
pub trait RandomnessOracle {
    fn request_random_words(
        env: Env,
        key_hash: BytesN<32>,
        subscription_id: u64,
        num_words: u32,
    ) -> u64;
}

pub fn request_random_words(
    env: &Env,
    config: &RandomnessConfig,
    num_words: u32,
) -> Result<u64, Error> {
    let client = RandomnessOracleClient::new(env, &config.oracle);
    match client.try_request_random_words(&config.key_hash, &config.subscription_id, &num_words) {
        Ok(Ok(request_id)) => Ok(request_id),
        _ => Err(Error::OracleRequestFailed),
    }
}

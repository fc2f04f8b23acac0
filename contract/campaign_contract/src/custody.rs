use soroban_sdk::{token, Address, Env};

use crate::storage_types::Error;

/// Pull `amount` from `funder` into the contract using the allowance the
/// funder granted it.
pub fn pull_funds(
    env: &Env,
    reward_token: &Address,
    funder: &Address,
    amount: i128,
) -> Result<(), Error> {
    let contract = env.current_contract_address();
    let token_client = token::Client::new(env, reward_token);
    match token_client.try_transfer_from(&contract, funder, &contract, &amount) {
        Ok(Ok(())) => Ok(()),
        _ => Err(Error::TransferFailed),
    }
}

/// Push `amount` out of custody to `recipient`.
pub fn pay_out(
    env: &Env,
    reward_token: &Address,
    recipient: &Address,
    amount: i128,
) -> Result<(), Error> {
    if amount <= 0 {
        return Ok(());
    }

    let token_client = token::Client::new(env, reward_token);
    match token_client.try_transfer(&env.current_contract_address(), recipient, &amount) {
        Ok(Ok(())) => Ok(()),
        _ => Err(Error::TransferFailed),
    }
}

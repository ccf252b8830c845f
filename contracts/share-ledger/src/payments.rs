use crate::storage::{get_fee_divisor, get_payment_token, get_registry};
use shared::errors::Error;
use shared::fees::admin_fee;
use shared::interfaces::RegistryClient;
use soroban_sdk::{token::TokenClient, Address, Env};

/// Take the protocol fee out of `value` paid by `payer` and forward it to the
/// registry. Returns what is left for the counterparty.
///
/// A failure on the registry side traps, which reverts the whole trade.
pub fn skim_fee(env: &Env, payer: &Address, value: i128) -> Result<i128, Error> {
    let fee = admin_fee(value, get_fee_divisor(env)?)?;

    if fee > 0 {
        let registry = get_registry(env)?;
        pay(env, payer, &registry, fee)?;
        RegistryClient::new(env, &registry).receive_fee(&env.current_contract_address(), &fee);
    }

    Ok(value - fee)
}

/// Move `amount` of the payment token. Zero amounts are skipped.
pub fn pay(env: &Env, from: &Address, to: &Address, amount: i128) -> Result<(), Error> {
    if amount > 0 {
        TokenClient::new(env, &get_payment_token(env)?).transfer(from, to, &amount);
    }
    Ok(())
}

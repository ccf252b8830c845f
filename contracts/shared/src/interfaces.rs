//! Cross-contract surfaces between the registry and the ledgers it deploys.
//! Each contract implements its side; the other side only sees the client.

use crate::errors::Error;
use soroban_sdk::{contractclient, Address, Env, String, Vec};

#[contractclient(name = "RegistryClient")]
pub trait RegistryInterface {
    /// Credit a protocol fee that `ledger` has already transferred to the registry.
    fn receive_fee(env: Env, ledger: Address, amount: i128) -> Result<(), Error>;
}

#[contractclient(name = "LedgerClient")]
pub trait LedgerInterface {
    fn initialize(
        env: Env,
        registry: Address,
        owner: Address,
        name: String,
        symbol: String,
        fee_divisor: u32,
        payment_token: Address,
        holders: Vec<Address>,
        shares: Vec<i128>,
    ) -> Result<(), Error>;

    fn name(env: Env) -> String;

    fn symbol(env: Env) -> String;

    fn registry(env: Env) -> Result<Address, Error>;
}

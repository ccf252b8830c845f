use shared::errors::Error;
use soroban_sdk::{contracttype, Address, BytesN, Env, String};

/// Storage keys for the registry
#[derive(Clone)]
#[contracttype]
pub enum DataKey {
    /// Only account allowed to change fees and withdraw them
    FeeSetter,
    /// Divisor handed to every new ledger
    AdminFee,
    /// Fees credited and not yet withdrawn
    FeeBalance,
    PaymentToken,
    /// Uploaded Wasm that `create_ledger` deploys
    LedgerWasm,
    /// Ledger address by (name, symbol)
    Ledger(String, String),
    /// Ledger address by creation order
    LedgerAt(u32),
    LedgerCount,
    /// Membership flag for fee crediting
    Registered(Address),
}

pub fn is_initialized(env: &Env) -> bool {
    env.storage().instance().has(&DataKey::FeeSetter)
}

pub fn set_fee_setter(env: &Env, setter: &Address) {
    env.storage().instance().set(&DataKey::FeeSetter, setter);
}

pub fn get_fee_setter(env: &Env) -> Result<Address, Error> {
    env.storage()
        .instance()
        .get(&DataKey::FeeSetter)
        .ok_or(Error::NotInitialized)
}

pub fn set_admin_fee(env: &Env, divisor: u32) {
    env.storage().instance().set(&DataKey::AdminFee, &divisor);
}

pub fn get_admin_fee(env: &Env) -> Result<u32, Error> {
    env.storage()
        .instance()
        .get(&DataKey::AdminFee)
        .ok_or(Error::NotInitialized)
}

pub fn get_fee_balance(env: &Env) -> i128 {
    env.storage()
        .instance()
        .get(&DataKey::FeeBalance)
        .unwrap_or(0)
}

pub fn set_fee_balance(env: &Env, balance: i128) {
    env.storage().instance().set(&DataKey::FeeBalance, &balance);
}

pub fn set_payment_token(env: &Env, token: &Address) {
    env.storage().instance().set(&DataKey::PaymentToken, token);
}

pub fn get_payment_token(env: &Env) -> Result<Address, Error> {
    env.storage()
        .instance()
        .get(&DataKey::PaymentToken)
        .ok_or(Error::NotInitialized)
}

pub fn set_ledger_wasm(env: &Env, wasm_hash: &BytesN<32>) {
    env.storage().instance().set(&DataKey::LedgerWasm, wasm_hash);
}

pub fn get_ledger_wasm(env: &Env) -> Result<BytesN<32>, Error> {
    env.storage()
        .instance()
        .get(&DataKey::LedgerWasm)
        .ok_or(Error::NotInitialized)
}

// ==================== Ledger book ====================

pub fn get_ledger_count(env: &Env) -> u32 {
    env.storage()
        .instance()
        .get(&DataKey::LedgerCount)
        .unwrap_or(0)
}

pub fn find_ledger(env: &Env, name: &String, symbol: &String) -> Option<Address> {
    env.storage()
        .persistent()
        .get(&DataKey::Ledger(name.clone(), symbol.clone()))
}

pub fn get_ledger_at(env: &Env, index: u32) -> Option<Address> {
    env.storage().persistent().get(&DataKey::LedgerAt(index))
}

pub fn is_registered(env: &Env, ledger: &Address) -> bool {
    env.storage()
        .persistent()
        .has(&DataKey::Registered(ledger.clone()))
}

/// Record `ledger` under its name and symbol and append it to the
/// creation-ordered list.
pub fn record_ledger(env: &Env, name: &String, symbol: &String, ledger: &Address) -> u32 {
    let index = get_ledger_count(env);

    env.storage()
        .persistent()
        .set(&DataKey::Ledger(name.clone(), symbol.clone()), ledger);
    env.storage()
        .persistent()
        .set(&DataKey::LedgerAt(index), ledger);
    env.storage()
        .persistent()
        .set(&DataKey::Registered(ledger.clone()), &true);
    env.storage()
        .instance()
        .set(&DataKey::LedgerCount, &(index + 1));

    index
}

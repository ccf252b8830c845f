use shared::errors::Error;
use shared::types::{AllowanceValue, DilutionSale, HolderRecord, HolderSlot, Listing, SaleState};
use soroban_sdk::{contracttype, Address, Env, Vec};

/// Storage keys for the share ledger
#[derive(Clone)]
#[contracttype]
pub enum DataKey {
    /// Genesis issuance done
    Initialized,
    /// Registry that deployed this ledger and receives fees
    Registry,
    /// Account allowed to run dilution rounds
    Owner,
    /// Token used for every payment
    PaymentToken,
    /// Protocol fee divisor captured at construction
    FeeDivisor,
    TotalSupply,
    /// Authorised shares, sold or not
    TotalShares,
    SaleState,
    DilutionSale,
    /// Settlement rounding remainder carried into the next round
    SettlementCarry,
    GenesisHolders,
    /// Genesis membership flag keyed by address
    Genesis(Address),
    Balance(Address),
    Holder(Address),
    /// Enumerated holder arena: slot by position
    HolderSlot(u32),
    /// Enumerated holder arena: position by address (occupied slots only)
    HolderIndex(Address),
    HolderCount,
    Listing(Address),
    Allowance(Address, Address),
}

// ==================== Configuration ====================

pub fn is_initialized(env: &Env) -> bool {
    env.storage()
        .instance()
        .get(&DataKey::Initialized)
        .unwrap_or(false)
}

pub fn set_initialized(env: &Env) {
    env.storage().instance().set(&DataKey::Initialized, &true);
}

pub fn require_initialized(env: &Env) -> Result<(), Error> {
    if !is_initialized(env) {
        return Err(Error::NotInitialized);
    }
    Ok(())
}

pub fn set_registry(env: &Env, registry: &Address) {
    env.storage().instance().set(&DataKey::Registry, registry);
}

pub fn get_registry(env: &Env) -> Result<Address, Error> {
    env.storage()
        .instance()
        .get(&DataKey::Registry)
        .ok_or(Error::NotInitialized)
}

pub fn set_owner(env: &Env, owner: &Address) {
    env.storage().instance().set(&DataKey::Owner, owner);
}

pub fn get_owner(env: &Env) -> Result<Address, Error> {
    env.storage()
        .instance()
        .get(&DataKey::Owner)
        .ok_or(Error::NotInitialized)
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

pub fn set_fee_divisor(env: &Env, divisor: u32) {
    env.storage().instance().set(&DataKey::FeeDivisor, &divisor);
}

pub fn get_fee_divisor(env: &Env) -> Result<u32, Error> {
    env.storage()
        .instance()
        .get(&DataKey::FeeDivisor)
        .ok_or(Error::NotInitialized)
}

// ==================== Supply ====================

pub fn get_total_supply(env: &Env) -> i128 {
    env.storage()
        .instance()
        .get(&DataKey::TotalSupply)
        .unwrap_or(0)
}

pub fn set_total_supply(env: &Env, supply: i128) {
    env.storage().instance().set(&DataKey::TotalSupply, &supply);
}

pub fn get_total_shares(env: &Env) -> i128 {
    env.storage()
        .instance()
        .get(&DataKey::TotalShares)
        .unwrap_or(0)
}

pub fn set_total_shares(env: &Env, shares: i128) {
    env.storage().instance().set(&DataKey::TotalShares, &shares);
}

// ==================== Dilution ====================

pub fn get_sale_state(env: &Env) -> SaleState {
    env.storage()
        .instance()
        .get(&DataKey::SaleState)
        .unwrap_or(SaleState::Idle)
}

pub fn set_sale_state(env: &Env, state: SaleState) {
    env.storage().instance().set(&DataKey::SaleState, &state);
}

pub fn get_dilution_sale(env: &Env) -> DilutionSale {
    env.storage()
        .instance()
        .get(&DataKey::DilutionSale)
        .unwrap_or_default()
}

pub fn set_dilution_sale(env: &Env, sale: &DilutionSale) {
    env.storage().instance().set(&DataKey::DilutionSale, sale);
}

pub fn get_settlement_carry(env: &Env) -> i128 {
    env.storage()
        .instance()
        .get(&DataKey::SettlementCarry)
        .unwrap_or(0)
}

pub fn set_settlement_carry(env: &Env, carry: i128) {
    env.storage().instance().set(&DataKey::SettlementCarry, &carry);
}

// ==================== Genesis holders ====================

pub fn get_genesis_holders(env: &Env) -> Vec<Address> {
    env.storage()
        .instance()
        .get(&DataKey::GenesisHolders)
        .unwrap_or_else(|| Vec::new(env))
}

pub fn set_genesis_holders(env: &Env, holders: &Vec<Address>) {
    env.storage().instance().set(&DataKey::GenesisHolders, holders);
}

pub fn is_genesis_holder(env: &Env, holder: &Address) -> bool {
    env.storage()
        .persistent()
        .has(&DataKey::Genesis(holder.clone()))
}

pub fn mark_genesis_holder(env: &Env, holder: &Address) {
    env.storage()
        .persistent()
        .set(&DataKey::Genesis(holder.clone()), &true);
}

// ==================== Balances and holder records ====================

pub fn read_balance(env: &Env, holder: &Address) -> i128 {
    env.storage()
        .persistent()
        .get(&DataKey::Balance(holder.clone()))
        .unwrap_or(0)
}

pub fn write_balance(env: &Env, holder: &Address, balance: i128) {
    let key = DataKey::Balance(holder.clone());
    if balance == 0 {
        env.storage().persistent().remove(&key);
    } else {
        env.storage().persistent().set(&key, &balance);
    }
}

pub fn read_holder(env: &Env, holder: &Address) -> HolderRecord {
    env.storage()
        .persistent()
        .get(&DataKey::Holder(holder.clone()))
        .unwrap_or_default()
}

pub fn write_holder(env: &Env, holder: &Address, record: &HolderRecord) {
    env.storage()
        .persistent()
        .set(&DataKey::Holder(holder.clone()), record);
}

// ==================== Holder arena ====================

pub fn get_holder_count(env: &Env) -> u32 {
    env.storage()
        .instance()
        .get(&DataKey::HolderCount)
        .unwrap_or(0)
}

pub fn set_holder_count(env: &Env, count: u32) {
    env.storage().instance().set(&DataKey::HolderCount, &count);
}

pub fn read_slot(env: &Env, index: u32) -> Option<HolderSlot> {
    env.storage().persistent().get(&DataKey::HolderSlot(index))
}

pub fn write_slot(env: &Env, index: u32, slot: &HolderSlot) {
    env.storage()
        .persistent()
        .set(&DataKey::HolderSlot(index), slot);
}

pub fn read_slot_index(env: &Env, holder: &Address) -> Option<u32> {
    env.storage()
        .persistent()
        .get(&DataKey::HolderIndex(holder.clone()))
}

pub fn write_slot_index(env: &Env, holder: &Address, index: u32) {
    env.storage()
        .persistent()
        .set(&DataKey::HolderIndex(holder.clone()), &index);
}

pub fn remove_slot_index(env: &Env, holder: &Address) {
    env.storage()
        .persistent()
        .remove(&DataKey::HolderIndex(holder.clone()));
}

// ==================== Listings ====================

pub fn read_listing(env: &Env, seller: &Address) -> Listing {
    env.storage()
        .persistent()
        .get(&DataKey::Listing(seller.clone()))
        .unwrap_or_default()
}

pub fn write_listing(env: &Env, seller: &Address, listing: &Listing) {
    env.storage()
        .persistent()
        .set(&DataKey::Listing(seller.clone()), listing);
}

pub fn remove_listing(env: &Env, seller: &Address) {
    env.storage()
        .persistent()
        .remove(&DataKey::Listing(seller.clone()));
}

// ==================== Allowances ====================

pub fn read_allowance(env: &Env, from: &Address, spender: &Address) -> AllowanceValue {
    let key = DataKey::Allowance(from.clone(), spender.clone());
    match env.storage().temporary().get::<_, AllowanceValue>(&key) {
        Some(allowance) if allowance.expiration_ledger >= env.ledger().sequence() => allowance,
        _ => AllowanceValue {
            amount: 0,
            expiration_ledger: 0,
        },
    }
}

pub fn write_allowance(
    env: &Env,
    from: &Address,
    spender: &Address,
    amount: i128,
    expiration_ledger: u32,
) -> Result<(), Error> {
    let sequence = env.ledger().sequence();
    if amount > 0 && expiration_ledger < sequence {
        return Err(Error::InvalidExpiration);
    }

    let key = DataKey::Allowance(from.clone(), spender.clone());
    let allowance = AllowanceValue {
        amount,
        expiration_ledger,
    };
    env.storage().temporary().set(&key, &allowance);

    if amount > 0 {
        let live_for = expiration_ledger - sequence;
        env.storage().temporary().extend_ttl(&key, live_for, live_for);
    }
    Ok(())
}

#![no_std]

use shared::{
    errors::Error,
    events::{
        ADMIN_FEE_SET, FEES_WITHDRAWN, FEE_RECEIVED, FEE_SETTER_SET, LEDGER_CREATED,
        LEDGER_REGISTERED, REGISTRY_INITIALIZED,
    },
    interfaces::LedgerClient,
};
use soroban_sdk::{
    contract, contractimpl, log, token::TokenClient, Address, BytesN, Env, String, Vec,
};

mod storage;
mod validation;


use storage::*;
use validation::validate_genesis;

/// Factory and fee sink for share ledgers.
#[contract]
pub struct EquityRegistry;

#[contractimpl]
impl EquityRegistry {
    /// Initialize the registry
    ///
    /// # Arguments
    /// * `fee_setter` - Account that manages fees and receives withdrawals
    /// * `admin_fee` - Fee divisor handed to new ledgers (200 = 0.5%)
    /// * `payment_token` - Token every ledger trades in
    /// * `ledger_wasm` - Hash of the uploaded share ledger Wasm
    pub fn initialize(
        env: Env,
        fee_setter: Address,
        admin_fee: u32,
        payment_token: Address,
        ledger_wasm: BytesN<32>,
    ) -> Result<(), Error> {
        if is_initialized(&env) {
            return Err(Error::AlreadyInitialized);
        }
        fee_setter.require_auth();

        if admin_fee == 0 {
            return Err(Error::InvalidFeeDivisor);
        }

        set_fee_setter(&env, &fee_setter);
        set_admin_fee(&env, admin_fee);
        set_payment_token(&env, &payment_token);
        set_ledger_wasm(&env, &ledger_wasm);
        set_fee_balance(&env, 0);

        env.events()
            .publish((REGISTRY_INITIALIZED,), (fee_setter, admin_fee));
        Ok(())
    }

    /// Deploy a new share ledger for an organisation and record it.
    ///
    /// The ledger is constructed with the current fee divisor, this registry
    /// as its fee sink and `creator` as its owner.
    ///
    /// # Errors
    /// * `EmptyHolders`, `EmptyShares`, `LengthMismatch` - Bad genesis lists
    /// * `BlankName`, `BlankSymbol` - Missing metadata
    /// * `DuplicateNameSymbol` - A ledger already uses this name and symbol
    pub fn create_ledger(
        env: Env,
        creator: Address,
        name: String,
        symbol: String,
        holders: Vec<Address>,
        shares: Vec<i128>,
    ) -> Result<Address, Error> {
        let admin_fee = get_admin_fee(&env)?;
        creator.require_auth();

        validate_genesis(&name, &symbol, &holders, &shares)?;
        if find_ledger(&env, &name, &symbol).is_some() {
            return Err(Error::DuplicateNameSymbol);
        }

        let salt = Self::ledger_salt(&env, get_ledger_count(&env));
        let ledger = env
            .deployer()
            .with_current_contract(salt)
            .deploy(get_ledger_wasm(&env)?);

        Self::launch_ledger(
            &env, &ledger, &creator, &name, &symbol, &holders, &shares, admin_fee,
        )?;
        Ok(ledger)
    }

    /// Adopt a ledger deployed outside `create_ledger` that was initialised
    /// against this registry (fee setter only).
    pub fn register_ledger(env: Env, caller: Address, ledger: Address) -> Result<u32, Error> {
        Self::require_fee_setter(&env, &caller)?;

        let client = LedgerClient::new(&env, &ledger);
        if client.registry() != env.current_contract_address() {
            return Err(Error::ForeignLedger);
        }

        let name = client.name();
        let symbol = client.symbol();
        if is_registered(&env, &ledger) || find_ledger(&env, &name, &symbol).is_some() {
            return Err(Error::DuplicateNameSymbol);
        }

        let index = record_ledger(&env, &name, &symbol, &ledger);
        env.events()
            .publish((LEDGER_REGISTERED,), (ledger, index));
        Ok(index)
    }

    /// Credit a fee a recorded ledger has already transferred here.
    pub fn receive_fee(env: Env, ledger: Address, amount: i128) -> Result<(), Error> {
        ledger.require_auth();

        if !is_registered(&env, &ledger) {
            return Err(Error::NotRegistered);
        }
        if amount <= 0 {
            return Err(Error::InvalidAmount);
        }

        let credited = get_fee_balance(&env)
            .checked_add(amount)
            .ok_or(Error::Overflow)?;
        let held = TokenClient::new(&env, &get_payment_token(&env)?)
            .balance(&env.current_contract_address());
        if held < credited {
            return Err(Error::FeeNotReceived);
        }

        set_fee_balance(&env, credited);
        env.events().publish((FEE_RECEIVED,), (ledger, amount));
        Ok(())
    }

    /// Change the divisor handed to ledgers created from now on.
    pub fn set_admin_fee(env: Env, caller: Address, admin_fee: u32) -> Result<(), Error> {
        Self::require_fee_setter(&env, &caller)?;

        if admin_fee == 0 {
            return Err(Error::InvalidFeeDivisor);
        }
        if admin_fee == get_admin_fee(&env)? {
            return Err(Error::NoChange);
        }

        storage::set_admin_fee(&env, admin_fee);
        env.events().publish((ADMIN_FEE_SET,), admin_fee);
        Ok(())
    }

    pub fn set_fee_setter(env: Env, caller: Address, new_setter: Address) -> Result<(), Error> {
        Self::require_fee_setter(&env, &caller)?;

        if new_setter == caller {
            return Err(Error::NoChange);
        }

        storage::set_fee_setter(&env, &new_setter);
        env.events()
            .publish((FEE_SETTER_SET,), (caller, new_setter));
        Ok(())
    }

    /// Pay every credited fee out to the fee setter. Returns the amount paid.
    pub fn withdraw(env: Env, caller: Address) -> Result<i128, Error> {
        Self::require_fee_setter(&env, &caller)?;

        let amount = get_fee_balance(&env);
        if amount == 0 {
            return Err(Error::NothingToWithdraw);
        }

        set_fee_balance(&env, 0);
        TokenClient::new(&env, &get_payment_token(&env)?).transfer(
            &env.current_contract_address(),
            &caller,
            &amount,
        );

        log!(&env, "fees withdrawn", amount);
        env.events().publish((FEES_WITHDRAWN,), (caller, amount));
        Ok(amount)
    }

    // ==================== Queries ====================

    pub fn lookup(env: Env, name: String, symbol: String) -> Option<Address> {
        find_ledger(&env, &name, &symbol)
    }

    pub fn count(env: Env) -> u32 {
        get_ledger_count(&env)
    }

    pub fn ledger_at(env: Env, index: u32) -> Option<Address> {
        get_ledger_at(&env, index)
    }

    pub fn admin_fee(env: Env) -> Result<u32, Error> {
        get_admin_fee(&env)
    }

    pub fn fee_setter(env: Env) -> Result<Address, Error> {
        get_fee_setter(&env)
    }

    pub fn fee_balance(env: Env) -> i128 {
        get_fee_balance(&env)
    }

    pub fn payment_token(env: Env) -> Result<Address, Error> {
        get_payment_token(&env)
    }
}

impl EquityRegistry {
    fn require_fee_setter(env: &Env, caller: &Address) -> Result<(), Error> {
        caller.require_auth();
        if *caller != get_fee_setter(env)? {
            return Err(Error::Unauthorized);
        }
        Ok(())
    }

    /// Run genesis on a freshly deployed ledger and record it.
    #[allow(clippy::too_many_arguments)]
    fn launch_ledger(
        env: &Env,
        ledger: &Address,
        creator: &Address,
        name: &String,
        symbol: &String,
        holders: &Vec<Address>,
        shares: &Vec<i128>,
        admin_fee: u32,
    ) -> Result<u32, Error> {
        LedgerClient::new(env, ledger).initialize(
            &env.current_contract_address(),
            creator,
            name,
            symbol,
            &admin_fee,
            &get_payment_token(env)?,
            holders,
            shares,
        );

        let index = record_ledger(env, name, symbol, ledger);
        env.events()
            .publish((LEDGER_CREATED,), (ledger.clone(), creator.clone(), index));
        Ok(index)
    }

    fn ledger_salt(env: &Env, index: u32) -> BytesN<32> {
        let mut salt = [0u8; 32];
        salt[28..].copy_from_slice(&index.to_be_bytes());
        BytesN::from_array(env, &salt)
    }
}

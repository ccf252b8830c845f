#![no_std]

use shared::{
    constants::SHARE_DECIMALS,
    errors::Error,
    events::LEDGER_INITIALIZED,
    math::equity_fraction,
    types::{DilutionSale, HolderInfo, LedgerStatus, Listing, SaleState},
};
use soroban_sdk::{contract, contractimpl, Address, Env, String, Vec};
use soroban_token_sdk::{metadata::TokenMetadata, TokenUtils};

mod balances;
mod dilution;
mod market;
mod payments;
mod storage;


use storage::*;

/// Share register of a single organisation, issued as a fungible token.
#[contract]
pub struct ShareLedger;

#[contractimpl]
impl ShareLedger {
    /// Construct the ledger and perform genesis issuance.
    ///
    /// Called once by the registry right after deployment. Mints `shares[i]`
    /// to `holders[i]`, then freezes each genesis holder's equity fraction as
    /// their weight for dilution settlement.
    ///
    /// # Arguments
    /// * `registry` - Registry that receives protocol fees
    /// * `owner` - Account allowed to start and settle dilution rounds
    /// * `fee_divisor` - Protocol fee divisor, fixed for the ledger's lifetime
    /// * `payment_token` - Token every purchase is paid in
    #[allow(clippy::too_many_arguments)]
    pub fn initialize(
        env: Env,
        registry: Address,
        owner: Address,
        name: String,
        symbol: String,
        fee_divisor: u32,
        payment_token: Address,
        holders: Vec<Address>,
        shares: Vec<i128>,
    ) -> Result<(), Error> {
        if is_initialized(&env) {
            return Err(Error::AlreadyInitialized);
        }
        registry.require_auth();

        if fee_divisor == 0 {
            return Err(Error::InvalidFeeDivisor);
        }
        if holders.is_empty() {
            return Err(Error::EmptyHolders);
        }
        if shares.is_empty() {
            return Err(Error::EmptyShares);
        }
        if holders.len() != shares.len() {
            return Err(Error::LengthMismatch);
        }
        if name.len() == 0 {
            return Err(Error::BlankName);
        }
        if symbol.len() == 0 {
            return Err(Error::BlankSymbol);
        }

        set_registry(&env, &registry);
        set_owner(&env, &owner);
        set_fee_divisor(&env, fee_divisor);
        set_payment_token(&env, &payment_token);
        TokenUtils::new(&env).metadata().set_metadata(&TokenMetadata {
            decimal: SHARE_DECIMALS,
            name,
            symbol,
        });

        for (holder, amount) in holders.iter().zip(shares.iter()) {
            if amount <= 0 {
                return Err(Error::ZeroShares);
            }
            if is_genesis_holder(&env, &holder) {
                return Err(Error::DuplicateHolder);
            }
            mark_genesis_holder(&env, &holder);
            balances::mint(&env, &holder, amount)?;
        }

        let supply = get_total_supply(&env);
        for holder in holders.iter() {
            let mut record = read_holder(&env, &holder);
            record.initial_equity = equity_fraction(&env, record.shares, supply)?;
            write_holder(&env, &holder, &record);
        }

        set_genesis_holders(&env, &holders);
        set_total_shares(&env, supply);
        set_sale_state(&env, SaleState::Idle);
        set_initialized(&env);

        env.events()
            .publish((LEDGER_INITIALIZED,), (registry, owner, supply));
        Ok(())
    }

    // ==================== Dilution Sale ====================

    /// Authorise `new_shares` more shares and open them for sale at
    /// `price_per_share` (owner only).
    pub fn start_dilution_sale(
        env: Env,
        new_shares: i128,
        price_per_share: i128,
    ) -> Result<(), Error> {
        dilution::start(&env, new_shares, price_per_share)
    }

    /// Buy `quantity` newly issued shares, paying exactly
    /// `quantity * price / SCALE` as `value`.
    ///
    /// # Errors
    /// * `GenesisHolderExcluded` - Genesis holders never buy dilution shares
    /// * `NoActiveSale` - No round is accepting purchases
    /// * `InsufficientSupply` - More than the unsold remainder requested
    /// * `ValueMismatch` - `value` is not the exact price
    pub fn buy_dilution_shares(
        env: Env,
        buyer: Address,
        quantity: i128,
        value: i128,
    ) -> Result<(), Error> {
        dilution::buy(&env, &buyer, quantity, value)
    }

    /// Distribute the sold-out round's proceeds to genesis holders and close
    /// it (owner only). Returns the amount paid out.
    pub fn end_dilution_sale(env: Env) -> Result<i128, Error> {
        dilution::settle(&env)
    }

    // ==================== Peer-to-Peer Market ====================

    pub fn start_listing(
        env: Env,
        seller: Address,
        quantity: i128,
        price_per_share: i128,
    ) -> Result<(), Error> {
        market::start_listing(&env, &seller, quantity, price_per_share)
    }

    pub fn alter_listing(
        env: Env,
        caller: Address,
        seller: Address,
        quantity: i128,
        price_per_share: i128,
    ) -> Result<(), Error> {
        market::alter_listing(&env, &caller, &seller, quantity, price_per_share)
    }

    /// Buy `quantity` shares from `seller`'s listing. The seller receives
    /// `value` minus the protocol fee.
    pub fn buy_shares_from(
        env: Env,
        buyer: Address,
        seller: Address,
        quantity: i128,
        value: i128,
    ) -> Result<(), Error> {
        market::buy_from(&env, &buyer, &seller, quantity, value)
    }

    // ==================== Share Token ====================

    pub fn transfer(env: Env, from: Address, to: Address, amount: i128) -> Result<(), Error> {
        from.require_auth();
        balances::move_shares(&env, &from, &to, amount)
    }

    pub fn transfer_from(
        env: Env,
        spender: Address,
        from: Address,
        to: Address,
        amount: i128,
    ) -> Result<(), Error> {
        spender.require_auth();

        if amount < 0 {
            return Err(Error::InvalidAmount);
        }
        let allowance = read_allowance(&env, &from, &spender);
        if allowance.amount < amount {
            return Err(Error::InsufficientAllowance);
        }
        if amount > 0 {
            write_allowance(
                &env,
                &from,
                &spender,
                allowance.amount - amount,
                allowance.expiration_ledger,
            )?;
        }

        balances::move_shares(&env, &from, &to, amount)
    }

    pub fn approve(
        env: Env,
        from: Address,
        spender: Address,
        amount: i128,
        expiration_ledger: u32,
    ) -> Result<(), Error> {
        from.require_auth();

        if amount < 0 {
            return Err(Error::InvalidAmount);
        }
        write_allowance(&env, &from, &spender, amount, expiration_ledger)?;

        TokenUtils::new(&env)
            .events()
            .approve(from, spender, amount, expiration_ledger);
        Ok(())
    }

    pub fn allowance(env: Env, from: Address, spender: Address) -> i128 {
        read_allowance(&env, &from, &spender).amount
    }

    pub fn balance(env: Env, id: Address) -> i128 {
        read_balance(&env, &id)
    }

    pub fn decimals(env: Env) -> u32 {
        TokenUtils::new(&env).metadata().get_metadata().decimal
    }

    pub fn name(env: Env) -> String {
        TokenUtils::new(&env).metadata().get_metadata().name
    }

    pub fn symbol(env: Env) -> String {
        TokenUtils::new(&env).metadata().get_metadata().symbol
    }

    pub fn total_supply(env: Env) -> i128 {
        get_total_supply(&env)
    }

    /// Authorised shares, including any unsold in an open round.
    pub fn total_shares(env: Env) -> i128 {
        get_total_shares(&env)
    }

    // ==================== Queries ====================

    pub fn status(env: Env) -> LedgerStatus {
        LedgerStatus {
            sale_state: get_sale_state(&env),
            initialized: is_initialized(&env),
        }
    }

    pub fn admin_fee(env: Env) -> Result<u32, Error> {
        get_fee_divisor(&env)
    }

    pub fn registry(env: Env) -> Result<Address, Error> {
        get_registry(&env)
    }

    pub fn owner(env: Env) -> Result<Address, Error> {
        get_owner(&env)
    }

    pub fn payment_token(env: Env) -> Result<Address, Error> {
        get_payment_token(&env)
    }

    pub fn holder_info(env: Env, holder: Address) -> Result<HolderInfo, Error> {
        balances::holder_info(&env, &holder)
    }

    /// Holder in arena slot `index`; `None` once that holder's balance hit zero.
    pub fn holder(env: Env, index: u32) -> Option<Address> {
        balances::holder_at(&env, index)
    }

    /// Number of arena slots ever assigned, vacated ones included.
    pub fn holder_count(env: Env) -> u32 {
        get_holder_count(&env)
    }

    pub fn genesis_holders(env: Env) -> Vec<Address> {
        get_genesis_holders(&env)
    }

    pub fn is_genesis_holder(env: Env, holder: Address) -> bool {
        storage::is_genesis_holder(&env, &holder)
    }

    pub fn dilution_sale(env: Env) -> DilutionSale {
        get_dilution_sale(&env)
    }

    pub fn listing(env: Env, seller: Address) -> Listing {
        read_listing(&env, &seller)
    }
}

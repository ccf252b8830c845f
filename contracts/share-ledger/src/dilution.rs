//! Primary issuance rounds.
//!
//! A round moves `Idle -> DilutionOpen -> SoldOutPendingSettlement -> Idle`.
//! Selling the last authorised share stops purchases but leaves the round
//! active; only settlement pays the genesis holders and returns to `Idle`.

use crate::balances::mint;
use crate::payments::{pay, skim_fee};
use crate::storage::*;
use shared::errors::Error;
use shared::events::{
    DILUTION_PAYOUT, DILUTION_PURCHASE, DILUTION_SETTLED, DILUTION_SOLD_OUT, DILUTION_STARTED,
};
use shared::math::{pro_rata, trade_value};
use shared::types::{DilutionSale, SaleState};
use soroban_sdk::{log, Address, Env};

pub fn start(env: &Env, new_shares: i128, price_per_share: i128) -> Result<(), Error> {
    require_initialized(env)?;
    get_owner(env)?.require_auth();

    if get_sale_state(env) != SaleState::Idle || get_dilution_sale(env).active {
        return Err(Error::SaleAlreadyOpen);
    }
    if new_shares <= 0 {
        return Err(Error::ZeroShares);
    }
    if price_per_share <= 0 {
        return Err(Error::ZeroPrice);
    }

    let total_shares = get_total_shares(env)
        .checked_add(new_shares)
        .ok_or(Error::Overflow)?;
    set_total_shares(env, total_shares);

    set_dilution_sale(
        env,
        &DilutionSale {
            active: true,
            share_price: price_per_share,
            shares_remaining: new_shares,
            proceeds: 0,
        },
    );
    set_sale_state(env, SaleState::DilutionOpen);

    env.events()
        .publish((DILUTION_STARTED,), (new_shares, price_per_share));
    Ok(())
}

pub fn buy(env: &Env, buyer: &Address, quantity: i128, value: i128) -> Result<(), Error> {
    buyer.require_auth();

    if is_genesis_holder(env, buyer) {
        return Err(Error::GenesisHolderExcluded);
    }
    if get_sale_state(env) != SaleState::DilutionOpen {
        return Err(Error::NoActiveSale);
    }
    if quantity <= 0 {
        return Err(Error::ZeroQuantity);
    }

    let mut sale = get_dilution_sale(env);
    if quantity > sale.shares_remaining {
        return Err(Error::InsufficientSupply);
    }
    if value != trade_value(env, quantity, sale.share_price)? {
        return Err(Error::ValueMismatch);
    }

    let net = skim_fee(env, buyer, value)?;
    pay(env, buyer, &env.current_contract_address(), net)?;
    mint(env, buyer, quantity)?;

    sale.shares_remaining -= quantity;
    sale.proceeds = sale.proceeds.checked_add(net).ok_or(Error::Overflow)?;
    let sold_out = sale.shares_remaining == 0;
    set_dilution_sale(env, &sale);

    env.events()
        .publish((DILUTION_PURCHASE,), (buyer.clone(), quantity, value));

    if sold_out {
        set_sale_state(env, SaleState::SoldOutPendingSettlement);
        env.events().publish((DILUTION_SOLD_OUT,), sale.proceeds);
    }
    Ok(())
}

/// Pay the round's net proceeds to the genesis holders, weighted by their
/// frozen initial equity, and close the round.
///
/// Either every payout lands or the call reverts. Truncation dust stays in
/// the contract and is added to the next round's pool.
pub fn settle(env: &Env) -> Result<i128, Error> {
    require_initialized(env)?;
    get_owner(env)?.require_auth();

    let sale = get_dilution_sale(env);
    if !sale.active {
        return Err(Error::NoCurrentSale);
    }
    if get_total_shares(env) != get_total_supply(env) {
        return Err(Error::SharesStillOutstanding);
    }

    let pool = sale
        .proceeds
        .checked_add(get_settlement_carry(env))
        .ok_or(Error::Overflow)?;
    let ledger = env.current_contract_address();

    let mut distributed: i128 = 0;
    for holder in get_genesis_holders(env).iter() {
        let weight = read_holder(env, &holder).initial_equity;
        let payout = pro_rata(env, pool, weight)?;
        if payout == 0 {
            continue;
        }

        pay(env, &ledger, &holder, payout)?;
        distributed += payout;
        env.events().publish((DILUTION_PAYOUT,), (holder, payout));
    }

    let carry = pool - distributed;
    log!(env, "dilution settled", pool, distributed, carry);

    set_settlement_carry(env, carry);
    set_dilution_sale(env, &DilutionSale::default());
    set_sale_state(env, SaleState::Idle);

    env.events()
        .publish((DILUTION_SETTLED,), (pool, distributed));
    Ok(distributed)
}

//! Secondary resale between holders, one open listing per seller.
//!
//! Settlement moves the seller's shares directly through
//! [`move_shares`](crate::balances::move_shares); listings never touch the
//! allowance table.

use crate::balances::move_shares;
use crate::payments::{pay, skim_fee};
use crate::storage::*;
use shared::errors::Error;
use shared::events::{LISTING_ALTERED, LISTING_CLOSED, LISTING_CREATED, LISTING_PURCHASE};
use shared::math::trade_value;
use shared::types::Listing;
use soroban_sdk::{Address, Env};

pub fn start_listing(
    env: &Env,
    seller: &Address,
    quantity: i128,
    price_per_share: i128,
) -> Result<(), Error> {
    seller.require_auth();

    if !read_listing(env, seller).is_empty() {
        return Err(Error::SellerAlreadyListed);
    }
    if quantity <= 0 {
        return Err(Error::ZeroQuantity);
    }
    if price_per_share <= 0 {
        return Err(Error::ZeroPrice);
    }
    if quantity > read_balance(env, seller) {
        return Err(Error::InsufficientBalance);
    }

    write_listing(
        env,
        seller,
        &Listing {
            share_price: price_per_share,
            shares_for_sale: quantity,
        },
    );

    env.events()
        .publish((LISTING_CREATED,), (seller.clone(), quantity, price_per_share));
    Ok(())
}

/// Reprice or resize a listing; a quantity of zero withdraws it.
pub fn alter_listing(
    env: &Env,
    caller: &Address,
    seller: &Address,
    quantity: i128,
    price_per_share: i128,
) -> Result<(), Error> {
    caller.require_auth();

    if caller != seller {
        return Err(Error::CallerNotSeller);
    }
    if read_listing(env, seller).is_empty() {
        return Err(Error::NoExistingListing);
    }
    if quantity < 0 {
        return Err(Error::InvalidAmount);
    }

    if quantity == 0 {
        close_listing(env, seller);
        return Ok(());
    }

    if quantity > read_balance(env, seller) {
        return Err(Error::InsufficientBalance);
    }
    if price_per_share <= 0 {
        return Err(Error::ZeroPrice);
    }

    write_listing(
        env,
        seller,
        &Listing {
            share_price: price_per_share,
            shares_for_sale: quantity,
        },
    );

    env.events()
        .publish((LISTING_ALTERED,), (seller.clone(), quantity, price_per_share));
    Ok(())
}

pub fn buy_from(
    env: &Env,
    buyer: &Address,
    seller: &Address,
    quantity: i128,
    value: i128,
) -> Result<(), Error> {
    buyer.require_auth();

    if quantity <= 0 {
        return Err(Error::ZeroQuantity);
    }

    let mut listing = read_listing(env, seller);
    if quantity > listing.shares_for_sale {
        return Err(Error::ListingInsufficient);
    }
    if value != trade_value(env, quantity, listing.share_price)? {
        return Err(Error::ValueMismatch);
    }

    let net = skim_fee(env, buyer, value)?;
    pay(env, buyer, seller, net)?;
    move_shares(env, seller, buyer, quantity)?;

    env.events().publish(
        (LISTING_PURCHASE,),
        (seller.clone(), buyer.clone(), quantity, value),
    );

    listing.shares_for_sale -= quantity;
    if listing.shares_for_sale == 0 {
        close_listing(env, seller);
    } else {
        write_listing(env, seller, &listing);
    }
    Ok(())
}

fn close_listing(env: &Env, seller: &Address) {
    remove_listing(env, seller);
    env.events().publish((LISTING_CLOSED,), seller.clone());
}

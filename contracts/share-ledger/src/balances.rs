//! Balance mutation and the post-mutation synchronizer.
//!
//! Every balance change in the ledger goes through [`mint`] or [`move_shares`],
//! and both finish by running [`sync_holder`] for each address they touched.
//! The holder arena is append-only: a holder that drops to zero vacates its
//! slot, and one that comes back later is given a fresh slot at the end.

use crate::storage::*;
use shared::errors::Error;
use shared::events::{HOLDER_ADDED, HOLDER_REMOVED};
use shared::math::equity_fraction;
use shared::types::{HolderInfo, HolderSlot};
use soroban_sdk::{Address, Env};
use soroban_token_sdk::TokenUtils;

/// Create `amount` new shares for `to`.
pub fn mint(env: &Env, to: &Address, amount: i128) -> Result<(), Error> {
    if amount <= 0 {
        return Err(Error::InvalidAmount);
    }

    let previous = read_balance(env, to);
    let balance = previous.checked_add(amount).ok_or(Error::Overflow)?;
    let supply = get_total_supply(env)
        .checked_add(amount)
        .ok_or(Error::Overflow)?;

    write_balance(env, to, balance);
    set_total_supply(env, supply);
    sync_holder(env, to, previous);

    TokenUtils::new(env)
        .events()
        .mint(env.current_contract_address(), to.clone(), amount);
    Ok(())
}

/// Move `amount` existing shares from `from` to `to`.
///
/// This is the only way shares change hands: plain transfers, allowance
/// spends and listing settlement all end up here.
pub fn move_shares(env: &Env, from: &Address, to: &Address, amount: i128) -> Result<(), Error> {
    if amount < 0 {
        return Err(Error::InvalidAmount);
    }

    let from_previous = read_balance(env, from);
    if from_previous < amount {
        return Err(Error::InsufficientBalance);
    }

    if from != to {
        let to_previous = read_balance(env, to);
        let to_balance = to_previous.checked_add(amount).ok_or(Error::Overflow)?;

        write_balance(env, from, from_previous - amount);
        write_balance(env, to, to_balance);

        sync_holder(env, from, from_previous);
        sync_holder(env, to, to_previous);
    }

    TokenUtils::new(env)
        .events()
        .transfer(from.clone(), to.clone(), amount);
    Ok(())
}

/// Bring `holder`'s record and arena slot in line with its current balance.
pub fn sync_holder(env: &Env, holder: &Address, previous: i128) {
    let balance = read_balance(env, holder);

    let mut record = read_holder(env, holder);
    record.shares = balance;
    write_holder(env, holder, &record);

    if previous == 0 && balance > 0 {
        occupy_slot(env, holder);
    } else if previous > 0 && balance == 0 {
        vacate_slot(env, holder);
    }
}

fn occupy_slot(env: &Env, holder: &Address) {
    let index = get_holder_count(env);
    write_slot(
        env,
        index,
        &HolderSlot {
            holder: holder.clone(),
            occupied: true,
        },
    );
    write_slot_index(env, holder, index);
    set_holder_count(env, index + 1);

    env.events().publish((HOLDER_ADDED,), (holder.clone(), index));
}

fn vacate_slot(env: &Env, holder: &Address) {
    let Some(index) = read_slot_index(env, holder) else {
        return;
    };

    if let Some(mut slot) = read_slot(env, index) {
        slot.occupied = false;
        write_slot(env, index, &slot);
    }
    remove_slot_index(env, holder);

    env.events().publish((HOLDER_REMOVED,), (holder.clone(), index));
}

/// The holder occupying slot `index`, or `None` for a vacated or unassigned slot.
pub fn holder_at(env: &Env, index: u32) -> Option<Address> {
    read_slot(env, index)
        .filter(|slot| slot.occupied)
        .map(|slot| slot.holder)
}

/// Holder record with equity projected over the current supply.
pub fn holder_info(env: &Env, holder: &Address) -> Result<HolderInfo, Error> {
    let record = read_holder(env, holder);
    let equity = equity_fraction(env, record.shares, get_total_supply(env))?;
    Ok(HolderInfo {
        shares: record.shares,
        equity,
        initial_equity: record.initial_equity,
    })
}

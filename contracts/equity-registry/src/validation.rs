use shared::errors::Error;
use soroban_sdk::{Address, String, Vec};

/// Reject genesis arguments that could never produce a ledger. Checks run in
/// a fixed order so callers always see the same error for the same input.
pub fn validate_genesis(
    name: &String,
    symbol: &String,
    holders: &Vec<Address>,
    shares: &Vec<i128>,
) -> Result<(), Error> {
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
    if shares.iter().any(|amount| amount <= 0) {
        return Err(Error::ZeroShares);
    }
    Ok(())
}

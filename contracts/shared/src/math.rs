use crate::constants::SCALE;
use crate::errors::Error;
use soroban_sdk::{Env, I256};

/// `a * b / c`, truncating. The product is taken in 256 bits so two scaled
/// amounts never overflow before the division; only a quotient outside
/// `i128` is reported as `Overflow`.
pub fn mul_div(env: &Env, a: i128, b: i128, c: i128) -> Result<i128, Error> {
    if c == 0 {
        return Err(Error::InvalidAmount);
    }
    I256::from_i128(env, a)
        .mul(&I256::from_i128(env, b))
        .div(&I256::from_i128(env, c))
        .to_i128()
        .ok_or(Error::Overflow)
}

/// Payment due for `quantity` shares at `price_per_share` (both scaled).
pub fn trade_value(env: &Env, quantity: i128, price_per_share: i128) -> Result<i128, Error> {
    mul_div(env, quantity, price_per_share, SCALE)
}

/// A balance as a scaled fraction of supply. Zero supply yields zero.
pub fn equity_fraction(env: &Env, balance: i128, total_supply: i128) -> Result<i128, Error> {
    if total_supply == 0 {
        return Ok(0);
    }
    mul_div(env, balance, SCALE, total_supply)
}

/// The part of `amount` owed to a holder with scaled weight `weight`.
pub fn pro_rata(env: &Env, amount: i128, weight: i128) -> Result<i128, Error> {
    mul_div(env, amount, weight, SCALE)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trade_value() {
        let env = Env::default();
        assert_eq!(trade_value(&env, 10 * SCALE, 10 * SCALE), Ok(100 * SCALE));
        assert_eq!(trade_value(&env, 5 * SCALE, SCALE), Ok(5 * SCALE));
        assert_eq!(trade_value(&env, 20 * SCALE, 10 * SCALE), Ok(200 * SCALE));
    }

    #[test]
    fn test_equity_fraction() {
        let env = Env::default();
        assert_eq!(equity_fraction(&env, 30 * SCALE, 30 * SCALE), Ok(SCALE));
        assert_eq!(equity_fraction(&env, 10 * SCALE, 40 * SCALE), Ok(SCALE / 4));
        assert_eq!(equity_fraction(&env, 10, 0), Ok(0));
    }

    #[test]
    fn test_large_share_counts() {
        let env = Env::default();
        assert_eq!(
            equity_fraction(&env, 3_000 * SCALE, 5_000 * SCALE),
            Ok(600_000_000_000_000_000)
        );
        assert_eq!(
            equity_fraction(&env, 1_000_000_000 * SCALE, 1_000_000_000 * SCALE),
            Ok(SCALE)
        );
        assert_eq!(
            trade_value(&env, 1_000_000 * SCALE, 1_000 * SCALE),
            Ok(1_000_000_000 * SCALE)
        );
        assert_eq!(pro_rata(&env, 3_000 * SCALE, SCALE / 3), Ok(1_000 * SCALE - 1_000));
    }

    #[test]
    fn test_pro_rata() {
        let env = Env::default();
        assert_eq!(pro_rata(&env, 50 * SCALE, SCALE / 2), Ok(25 * SCALE));
    }

    #[test]
    fn test_overflow_reported() {
        let env = Env::default();
        assert_eq!(mul_div(&env, i128::MAX, 2, 1), Err(Error::Overflow));
        assert_eq!(mul_div(&env, i128::MAX, i128::MAX, i128::MAX), Ok(i128::MAX));
    }
}

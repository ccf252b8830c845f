use crate::errors::Error;

/// Protocol fee skimmed from a payment: `amount / divisor`, truncating.
///
/// The divisor is not a percentage; a divisor of 200 is a 0.5% fee.
pub fn admin_fee(amount: i128, divisor: u32) -> Result<i128, Error> {
    if divisor == 0 {
        return Err(Error::InvalidFeeDivisor);
    }
    if amount < 0 {
        return Err(Error::InvalidAmount);
    }
    Ok(amount / divisor as i128)
}

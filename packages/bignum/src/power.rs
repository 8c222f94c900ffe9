use crate::{BigInt, BigIntError};

/// Raise `base` to `exponent` by repeated squaring.
///
/// Uses one squaring per bit of `exponent` plus one multiplication per set bit.
///
/// # Example
///
/// ```
/// use bignum::{power, BigInt};
///
/// let two = BigInt::from(2u32);
/// assert_eq!(power(&two, 10).to_string(), "1024");
/// assert_eq!(power(&two, 0).to_string(), "1");
/// ```
pub fn power(base: &BigInt, mut exponent: u64) -> BigInt {
    let mut result = BigInt::one();
    let mut base = base.clone();
    while exponent > 0 {
        if exponent & 1 == 1 {
            result.multiply_in_place(&base);
        }
        exponent >>= 1;
        if exponent > 0 {
            base = base.multiply(&base);
        }
    }
    log::debug!("power result has {} digits", result.digit_count());
    result
}

/// Like [`power`], for callers holding a signed exponent.
pub fn try_power(base: &BigInt, exponent: i64) -> Result<BigInt, BigIntError> {
    let exponent = u64::try_from(exponent).map_err(|_| BigIntError::NegativeExponent(exponent))?;
    Ok(power(base, exponent))
}

use crate::{BigInt, BigIntError};

/// Compute factorial of n (n!) as BigInt for arbitrary precision.
///
/// # Example
///
/// ```
/// use bignum::factorial;
///
/// assert_eq!(factorial(0).to_string(), "1");
/// assert_eq!(factorial(5).to_string(), "120");
/// ```
pub fn factorial(n: u64) -> BigInt {
    let mut result = BigInt::one();
    for i in (1..=n).rev() {
        result.multiply_in_place(&BigInt::from(i));
    }
    log::debug!("{}! has {} digits", n, result.digit_count());
    result
}

/// Like [`factorial`], for callers holding a signed integer.
pub fn try_factorial(n: i64) -> Result<BigInt, BigIntError> {
    let n = u64::try_from(n).map_err(|_| BigIntError::NegativeIndex(n))?;
    Ok(factorial(n))
}

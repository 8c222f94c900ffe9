use std::cmp::Ordering;
use std::fmt;
use std::ops;
use std::str::FromStr;

use crate::digits::{self, digit_at};
use crate::error::BigIntError;

/// A non-negative big integer represented as a vector of decimal digits
/// (least significant first).
///
/// The digit vector is always canonical: never empty, and no zero at the most
/// significant end except for the value zero itself.
///
/// # Example
///
/// ```
/// use bignum::BigInt;
///
/// let a: BigInt = "999".parse().unwrap();
/// let b = BigInt::from(1u32);
/// assert_eq!((&a + &b).to_string(), "1000");
/// assert_eq!(a.multiply(&a).to_string(), "998001");
/// assert!(b.subtract(&a).is_err());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct BigInt {
    digits: Vec<u8>,
}

impl BigInt {
    /// Create a BigInt representing zero.
    pub fn zero() -> Self {
        BigInt { digits: vec![0] }
    }

    /// Create a BigInt representing one.
    pub fn one() -> Self {
        BigInt { digits: vec![1] }
    }

    /// Create a BigInt from a native unsigned integer.
    pub fn from_native(n: u64) -> Self {
        BigInt {
            digits: digits::from_native(n as u128),
        }
    }

    /// Parse a string of ASCII decimal digits, most significant first.
    ///
    /// Signs, whitespace and every other non-digit character are rejected.
    /// Leading zeros are allowed and dropped.
    ///
    /// # Example
    ///
    /// ```
    /// use bignum::{BigInt, BigIntError};
    ///
    /// let n = BigInt::from_decimal_str("12345678901234567890").unwrap();
    /// assert_eq!(n.digit_count(), 20);
    /// assert_eq!(BigInt::from_decimal_str(""), Err(BigIntError::EmptyInput));
    /// assert!(BigInt::from_decimal_str("12 3").is_err());
    /// ```
    pub fn from_decimal_str(s: &str) -> Result<Self, BigIntError> {
        Ok(BigInt {
            digits: digits::parse(s)?,
        })
    }

    /// Decimal representation, most significant digit first.
    pub fn to_decimal_string(&self) -> String {
        digits::render(&self.digits)
    }

    /// Number of decimal digits (1 for zero).
    pub fn digit_count(&self) -> usize {
        self.digits.len()
    }

    pub fn is_zero(&self) -> bool {
        self.digits == [0]
    }

    /// `self + rhs` as a new value.
    pub fn add(&self, rhs: &BigInt) -> BigInt {
        let mut sum = self.clone();
        sum.add_in_place(rhs);
        sum
    }

    /// `self += rhs`.
    pub fn add_in_place(&mut self, rhs: &BigInt) {
        let lhs = &mut self.digits;
        let longest = lhs.len().max(rhs.digits.len());
        lhs.reserve(longest + 1 - lhs.len());
        lhs.resize(longest, 0);

        let mut carry = 0u8;
        let mut i = 0;
        while i < rhs.digits.len() || carry > 0 {
            if i == lhs.len() {
                lhs.push(carry);
                break;
            }
            let sum = lhs[i] + digit_at(&rhs.digits, i) + carry;
            lhs[i] = sum % 10;
            carry = sum / 10;
            i += 1;
        }
        debug_assert!(digits::is_canonical(lhs));
    }

    /// `self - rhs` as a new value.
    ///
    /// Fails with [`BigIntError::SubtractionUnderflow`] when `rhs > self`.
    pub fn subtract(&self, rhs: &BigInt) -> Result<BigInt, BigIntError> {
        let mut difference = self.clone();
        difference.subtract_in_place(rhs)?;
        Ok(difference)
    }

    /// `self -= rhs`.
    ///
    /// On underflow the receiver is left unchanged.
    pub fn subtract_in_place(&mut self, rhs: &BigInt) -> Result<(), BigIntError> {
        if *self < *rhs {
            return Err(BigIntError::SubtractionUnderflow);
        }

        let lhs = &mut self.digits;
        let mut borrow = 0i8;
        let mut i = 0;
        while i < rhs.digits.len() || borrow > 0 {
            let mut diff = lhs[i] as i8 - digit_at(&rhs.digits, i) as i8 - borrow;
            if diff < 0 {
                diff += 10;
                borrow = 1;
            } else {
                borrow = 0;
            }
            lhs[i] = diff as u8;
            i += 1;
        }
        digits::trim(lhs);
        Ok(())
    }

    /// `self * rhs` as a new value, by long multiplication.
    pub fn multiply(&self, rhs: &BigInt) -> BigInt {
        let a = &self.digits;
        let b = &rhs.digits;
        let mut product = vec![0u8; a.len() + b.len()];

        for (i, &b_digit) in b.iter().enumerate() {
            let mut carry = 0u32;
            let mut j = 0;
            while j < a.len() || carry > 0 {
                let acc = product[i + j] as u32 + digit_at(a, j) as u32 * b_digit as u32 + carry;
                product[i + j] = (acc % 10) as u8;
                carry = acc / 10;
                j += 1;
            }
        }

        digits::trim(&mut product);
        log::trace!(
            "multiplied {} x {} digits into {} digits",
            a.len(),
            b.len(),
            product.len()
        );
        BigInt { digits: product }
    }

    /// `self *= rhs`.
    pub fn multiply_in_place(&mut self, rhs: &BigInt) {
        *self = self.multiply(rhs);
    }
}

impl Default for BigInt {
    fn default() -> Self {
        BigInt::zero()
    }
}

macro_rules! impl_from_unsigned {
    ($($u:ty),*) => {
        $(
        impl From<$u> for BigInt {
            fn from(n: $u) -> Self {
                BigInt { digits: digits::from_native(n as u128) }
            }
        }
        )*
    };
}

impl_from_unsigned!(u8, u16, u32, u64, u128, usize);

impl FromStr for BigInt {
    type Err = BigIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        BigInt::from_decimal_str(s)
    }
}

impl fmt::Display for BigInt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad_integral(true, "", &self.to_decimal_string())
    }
}

impl Ord for BigInt {
    fn cmp(&self, other: &Self) -> Ordering {
        digits::compare(&self.digits, &other.digits)
    }
}

impl PartialOrd for BigInt {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl ops::Add for BigInt {
    type Output = BigInt;

    fn add(mut self, other: BigInt) -> BigInt {
        self.add_in_place(&other);
        self
    }
}

impl ops::Add<&BigInt> for BigInt {
    type Output = BigInt;

    fn add(mut self, other: &BigInt) -> BigInt {
        self.add_in_place(other);
        self
    }
}

impl ops::Add for &BigInt {
    type Output = BigInt;

    fn add(self, other: &BigInt) -> BigInt {
        BigInt::add(self, other)
    }
}

impl ops::AddAssign<&BigInt> for BigInt {
    fn add_assign(&mut self, other: &BigInt) {
        self.add_in_place(other);
    }
}

impl ops::AddAssign for BigInt {
    fn add_assign(&mut self, other: BigInt) {
        self.add_in_place(&other);
    }
}

impl ops::Mul for BigInt {
    type Output = BigInt;

    fn mul(self, other: BigInt) -> BigInt {
        self.multiply(&other)
    }
}

impl ops::Mul<&BigInt> for BigInt {
    type Output = BigInt;

    fn mul(self, other: &BigInt) -> BigInt {
        self.multiply(other)
    }
}

impl ops::Mul for &BigInt {
    type Output = BigInt;

    fn mul(self, other: &BigInt) -> BigInt {
        self.multiply(other)
    }
}

impl ops::MulAssign<&BigInt> for BigInt {
    fn mul_assign(&mut self, other: &BigInt) {
        self.multiply_in_place(other);
    }
}

impl ops::MulAssign for BigInt {
    fn mul_assign(&mut self, other: BigInt) {
        self.multiply_in_place(&other);
    }
}

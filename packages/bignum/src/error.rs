use thiserror::Error;

/// Errors surfaced by [`BigInt`](crate::BigInt) construction, subtraction and
/// the signed entry points of the numeric algorithms.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum BigIntError {
    /// A decimal string with no characters at all.
    #[error("cannot parse a BigInt from an empty string")]
    EmptyInput,

    /// A decimal string containing something other than `0`..=`9`.
    #[error("invalid digit {found:?} at position {position}")]
    InvalidDigit { found: char, position: usize },

    /// `a - b` where `a < b`; the result would be negative.
    #[error("subtraction underflow: subtrahend is greater than minuend")]
    SubtractionUnderflow,

    #[error("negative exponent {0} is not supported")]
    NegativeExponent(i64),

    #[error("negative index {0} is not supported")]
    NegativeIndex(i64),
}

impl BigIntError {
    /// True for both kinds of malformed decimal input.
    pub fn is_invalid_digit_input(&self) -> bool {
        matches!(self, BigIntError::EmptyInput | BigIntError::InvalidDigit { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        let err = BigIntError::InvalidDigit { found: 'x', position: 3 };
        assert_eq!(err.to_string(), "invalid digit 'x' at position 3");
        assert_eq!(
            BigIntError::NegativeExponent(-2).to_string(),
            "negative exponent -2 is not supported"
        );
    }

    #[test]
    fn test_invalid_digit_input_class() {
        assert!(BigIntError::EmptyInput.is_invalid_digit_input());
        assert!(BigIntError::InvalidDigit { found: '-', position: 0 }.is_invalid_digit_input());
        assert!(!BigIntError::SubtractionUnderflow.is_invalid_digit_input());
        assert!(!BigIntError::NegativeIndex(-1).is_invalid_digit_input());
    }
}

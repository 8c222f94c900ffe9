//! Storage helpers for decimal digit vectors.
//!
//! A digit vector holds one value in `0..=9` per element, least significant
//! first. A canonical vector is never empty and has no zero at its most
//! significant end unless it is exactly `[0]`.

use std::cmp::Ordering;

use crate::error::BigIntError;

/// Digits of a native unsigned integer, least significant first.
///
/// Zero yields exactly `[0]`; every other value yields no leading zero.
pub(crate) fn from_native(mut n: u128) -> Vec<u8> {
    let mut digits = Vec::new();
    loop {
        digits.push((n % 10) as u8);
        n /= 10;
        if n == 0 {
            break;
        }
    }
    digits
}

/// Parse a most-significant-first decimal string into a canonical vector.
///
/// Leading zeros are accepted and trimmed away.
pub(crate) fn parse(s: &str) -> Result<Vec<u8>, BigIntError> {
    if s.is_empty() {
        return Err(BigIntError::EmptyInput);
    }
    let mut digits = Vec::with_capacity(s.len());
    for (position, found) in s.chars().enumerate() {
        match found.to_digit(10) {
            Some(d) => digits.push(d as u8),
            None => return Err(BigIntError::InvalidDigit { found, position }),
        }
    }
    digits.reverse();
    trim(&mut digits);
    Ok(digits)
}

/// Render digits most significant first.
pub(crate) fn render(digits: &[u8]) -> String {
    digits.iter().rev().map(|&d| char::from(b'0' + d)).collect()
}

/// Digit at `index`, or 0 past the end.
#[inline]
pub(crate) fn digit_at(digits: &[u8], index: usize) -> u8 {
    digits.get(index).copied().unwrap_or(0)
}

/// Strip most-significant zeros, keeping at least one digit.
pub(crate) fn trim(digits: &mut Vec<u8>) {
    while digits.len() > 1 && digits.last() == Some(&0) {
        digits.pop();
    }
    if digits.is_empty() {
        digits.push(0);
    }
}

/// Numeric comparison of two canonical vectors.
pub(crate) fn compare(a: &[u8], b: &[u8]) -> Ordering {
    a.len()
        .cmp(&b.len())
        .then_with(|| a.iter().rev().cmp(b.iter().rev()))
}

pub(crate) fn is_canonical(digits: &[u8]) -> bool {
    match digits {
        [] => false,
        [d] => *d <= 9,
        [.., last] => *last != 0 && digits.iter().all(|&d| d <= 9),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_native() {
        assert_eq!(from_native(0), vec![0]);
        assert_eq!(from_native(7), vec![7]);
        assert_eq!(from_native(12345), vec![5, 4, 3, 2, 1]);
        assert_eq!(from_native(1000), vec![0, 0, 0, 1]);
    }

    #[test]
    fn test_parse() {
        assert_eq!(parse("12345"), Ok(vec![5, 4, 3, 2, 1]));
        assert_eq!(parse("0"), Ok(vec![0]));
        assert_eq!(parse("000"), Ok(vec![0]));
        assert_eq!(parse("007"), Ok(vec![7]));
    }

    #[test]
    fn test_parse_rejects_bad_input() {
        assert_eq!(parse(""), Err(BigIntError::EmptyInput));
        assert_eq!(
            parse("12a4"),
            Err(BigIntError::InvalidDigit { found: 'a', position: 2 })
        );
        assert_eq!(
            parse("-5"),
            Err(BigIntError::InvalidDigit { found: '-', position: 0 })
        );
        assert_eq!(
            parse(" 5"),
            Err(BigIntError::InvalidDigit { found: ' ', position: 0 })
        );
        // Non-ASCII decimal digits are not accepted either.
        assert_eq!(
            parse("1٣"),
            Err(BigIntError::InvalidDigit { found: '٣', position: 1 })
        );
    }

    #[test]
    fn test_render() {
        assert_eq!(render(&[5, 4, 3, 2, 1]), "12345");
        assert_eq!(render(&[0]), "0");
    }

    #[test]
    fn test_trim() {
        let mut digits = vec![1, 0, 0];
        trim(&mut digits);
        assert_eq!(digits, vec![1]);

        let mut digits = vec![0, 0, 0];
        trim(&mut digits);
        assert_eq!(digits, vec![0]);

        let mut digits = Vec::new();
        trim(&mut digits);
        assert_eq!(digits, vec![0]);
    }

    #[test]
    fn test_compare() {
        assert_eq!(compare(&[9], &[0, 1]), Ordering::Less);
        assert_eq!(compare(&[1, 2], &[2, 1]), Ordering::Greater);
        assert_eq!(compare(&[3, 2, 1], &[3, 2, 1]), Ordering::Equal);
        assert_eq!(compare(&[0], &[0]), Ordering::Equal);
    }

    #[test]
    fn test_is_canonical() {
        assert!(is_canonical(&[0]));
        assert!(is_canonical(&[0, 1]));
        assert!(!is_canonical(&[]));
        assert!(!is_canonical(&[1, 0]));
        assert!(!is_canonical(&[10]));
    }
}

use crate::{BigInt, BigIntError};

/// Returns the nth Fibonacci number (0-indexed: fib(0) = 0, fib(1) = 1, fib(2) = 1, ...).
///
/// Advances a pair two steps at a time, so it needs about n/2 iterations of
/// two additions each.
///
/// # Example
///
/// ```
/// use bignum::fibonacci;
///
/// assert_eq!(fibonacci(0).to_string(), "0");
/// assert_eq!(fibonacci(10).to_string(), "55");
/// ```
pub fn fibonacci(n: u64) -> BigInt {
    let mut pair = [BigInt::zero(), BigInt::one()];
    let mut remaining = n;
    while remaining > 1 {
        let [f0, f1] = &mut pair;
        f0.add_in_place(f1);
        f1.add_in_place(f0);
        remaining -= 2;
    }
    let [f0, f1] = pair;
    let result = if remaining == 0 { f0 } else { f1 };
    log::debug!("fib({}) has {} digits", n, result.digit_count());
    result
}

/// Like [`fibonacci`], for callers holding a signed index.
pub fn try_fibonacci(n: i64) -> Result<BigInt, BigIntError> {
    let n = u64::try_from(n).map_err(|_| BigIntError::NegativeIndex(n))?;
    Ok(fibonacci(n))
}

/// Iterator that generates Fibonacci numbers as BigInt (arbitrary precision),
/// starting from fib(0) = 0.
///
/// # Example
///
/// ```
/// use bignum::FibonacciSeq;
///
/// let fibs: Vec<String> = FibonacciSeq::new().take(10).map(|b| b.to_string()).collect();
/// assert_eq!(fibs, vec!["0", "1", "1", "2", "3", "5", "8", "13", "21", "34"]);
/// ```
pub struct FibonacciSeq {
    curr: BigInt,
    next: BigInt,
}

impl FibonacciSeq {
    pub fn new() -> Self {
        FibonacciSeq {
            curr: BigInt::zero(),
            next: BigInt::one(),
        }
    }
}

impl Default for FibonacciSeq {
    fn default() -> Self {
        Self::new()
    }
}

impl Iterator for FibonacciSeq {
    type Item = BigInt;

    fn next(&mut self) -> Option<Self::Item> {
        let new_next = &self.curr + &self.next;
        let curr = std::mem::replace(&mut self.curr, std::mem::replace(&mut self.next, new_next));
        Some(curr)
    }
}

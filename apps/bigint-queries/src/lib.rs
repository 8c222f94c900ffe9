//! Query driver: reads unsigned integers from a text stream, runs the numeric
//! algorithms from `bignum`, and writes one decimal result per line.

use std::io::{self, BufRead, Write};

use bignum::{power, try_factorial, try_fibonacci, try_power, BigInt, BigIntError};
use thiserror::Error;

/// Printed when the difference query receives a first number smaller than the second.
pub const ORDER_PROMPT: &str = "The first number should be greater or equal than the second number!";

/// Default cap on the length of a decimal token read from input.
pub const DEFAULT_MAX_DIGITS: usize = 100_000;

/// Default cap on factorial arguments, exponents and Fibonacci indices.
pub const DEFAULT_MAX_INDEX: u64 = 10_000;

#[derive(Debug, Error)]
pub enum QueryError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("unexpected end of input while reading {expected}")]
    UnexpectedEof { expected: &'static str },

    #[error("{token:?} is not an integer")]
    InvalidNumber { token: String },

    #[error("token exceeds the limit of {max} characters")]
    InputTooLong { max: usize },

    #[error("{value} exceeds the limit of {max}")]
    IndexTooLarge { value: u64, max: u64 },

    #[error("base^{exponent} would have about {estimate} digits, more than the limit of {max}")]
    ResultTooLarge { exponent: u64, estimate: u64, max: usize },

    #[error(transparent)]
    Arithmetic(#[from] BigIntError),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Config {
    /// Longest decimal token accepted from input.
    pub max_digits: usize,
    /// Largest factorial argument, exponent or Fibonacci index.
    pub max_index: u64,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            max_digits: DEFAULT_MAX_DIGITS,
            max_index: DEFAULT_MAX_INDEX,
        }
    }
}

impl Config {
    fn check_len(&self, token: &str) -> Result<(), QueryError> {
        if token.len() > self.max_digits {
            return Err(QueryError::InputTooLong { max: self.max_digits });
        }
        Ok(())
    }

    /// Reject factorial arguments, exponents and indices above `max_index`.
    pub fn check_index(&self, value: u64) -> Result<u64, QueryError> {
        if value > self.max_index {
            return Err(QueryError::IndexTooLarge {
                value,
                max: self.max_index,
            });
        }
        Ok(value)
    }

    /// Parse a decimal token into a BigInt, enforcing `max_digits`.
    pub fn parse_big(&self, token: &str) -> Result<BigInt, QueryError> {
        self.check_len(token)?;
        Ok(token.parse::<BigInt>()?)
    }

    /// Parse a native integer token: ASCII digits with an optional leading `-`.
    ///
    /// Negative values parse fine here and are rejected later by the
    /// algorithm that receives them. Non-negative values must not exceed
    /// `max_index`.
    pub fn parse_native(&self, token: &str) -> Result<i64, QueryError> {
        self.check_len(token)?;
        let invalid = || QueryError::InvalidNumber {
            token: token.to_string(),
        };

        let magnitude = token.strip_prefix('-').unwrap_or(token);
        if magnitude.is_empty() || !magnitude.bytes().all(|b| b.is_ascii_digit()) {
            return Err(invalid());
        }
        let value = token.parse::<i64>().map_err(|_| invalid())?;
        if value == 0 && token.starts_with('-') {
            return Err(invalid());
        }
        if let Ok(index) = u64::try_from(value) {
            self.check_index(index)?;
        }
        Ok(value)
    }

    /// `base^exponent`, refusing work whose result would exceed `max_digits`.
    pub fn power(&self, base: &BigInt, exponent: u64) -> Result<BigInt, QueryError> {
        self.check_index(exponent)?;
        let estimate = (base.digit_count() as u64).saturating_mul(exponent);
        if !base.is_zero() && estimate > self.max_digits as u64 {
            return Err(QueryError::ResultTooLarge {
                exponent,
                estimate,
                max: self.max_digits,
            });
        }
        Ok(power(base, exponent))
    }
}

/// Whitespace-delimited tokens pulled lazily from a `BufRead`.
///
/// A token longer than the configured limit is rejected as soon as the limit
/// is crossed, before the rest of it is read.
pub struct Tokens<R> {
    reader: R,
    max_len: usize,
}

impl<R: BufRead> Tokens<R> {
    pub fn new(reader: R) -> Self {
        Tokens::with_limit(reader, DEFAULT_MAX_DIGITS)
    }

    pub fn with_limit(reader: R, max_len: usize) -> Self {
        Tokens { reader, max_len }
    }

    /// Next token, or `None` at end of input.
    pub fn next_token(&mut self) -> Result<Option<String>, QueryError> {
        let max_len = self.max_len;
        let mut token = Vec::new();
        loop {
            let buf = self.reader.fill_buf()?;
            if buf.is_empty() {
                break;
            }
            let mut used = 0;
            let mut complete = false;
            for &byte in buf {
                used += 1;
                if byte.is_ascii_whitespace() {
                    if !token.is_empty() {
                        complete = true;
                        break;
                    }
                } else if token.len() == max_len {
                    return Err(QueryError::InputTooLong { max: max_len });
                } else {
                    token.push(byte);
                }
            }
            self.reader.consume(used);
            if complete {
                break;
            }
        }

        if token.is_empty() {
            return Ok(None);
        }
        match String::from_utf8(token) {
            Ok(token) => Ok(Some(token)),
            Err(err) => Err(QueryError::InvalidNumber {
                token: String::from_utf8_lossy(err.as_bytes()).into_owned(),
            }),
        }
    }

    fn expect_token(&mut self, expected: &'static str) -> Result<String, QueryError> {
        self.next_token()?
            .ok_or(QueryError::UnexpectedEof { expected })
    }
}

/// Runs the fixed sequence of queries against `input`, writing results to `output`:
///
/// 1. `n` → n!
/// 2. `n` → 2^n
/// 3. `a b` → 2^a + 2^b
/// 4. `a b` → 2^a - 2^b, re-reading the pair while `a < b`
/// 5. `n` → fib(n)
///
/// # Example
///
/// ```
/// use bigint_queries::{run_script, Config};
///
/// let mut out = Vec::new();
/// run_script("5 10 5 3 10 3 10".as_bytes(), &mut out, &Config::default()).unwrap();
/// assert_eq!(String::from_utf8(out).unwrap(), "120\n1024\n40\n1016\n55\n");
/// ```
pub fn run_script<R: BufRead, W: Write>(
    input: R,
    mut output: W,
    config: &Config,
) -> Result<(), QueryError> {
    let mut tokens = Tokens::with_limit(input, config.max_digits);
    let two = BigInt::from(2u32);

    let n = read_native(&mut tokens, config, "factorial argument")?;
    writeln!(output, "{}", try_factorial(n)?)?;

    let e = read_native(&mut tokens, config, "exponent")?;
    writeln!(output, "{}", try_power(&two, e)?)?;

    let a = read_native(&mut tokens, config, "first exponent of the sum")?;
    let b = read_native(&mut tokens, config, "second exponent of the sum")?;
    writeln!(output, "{}", try_power(&two, a)? + try_power(&two, b)?)?;

    let (mut a, mut b) = read_pair(&mut tokens, config)?;
    while a < b {
        log::info!("rejected difference exponents {} < {}", a, b);
        writeln!(output, "{}", ORDER_PROMPT)?;
        output.flush()?;
        (a, b) = read_pair(&mut tokens, config)?;
    }
    writeln!(output, "{}", try_power(&two, a)?.subtract(&try_power(&two, b)?)?)?;

    let n = read_native(&mut tokens, config, "Fibonacci index")?;
    writeln!(output, "{}", try_fibonacci(n)?)?;

    output.flush()?;
    Ok(())
}

fn read_native<R: BufRead>(
    tokens: &mut Tokens<R>,
    config: &Config,
    expected: &'static str,
) -> Result<i64, QueryError> {
    let token = tokens.expect_token(expected)?;
    let value = config.parse_native(&token)?;
    log::debug!("read {} = {}", expected, value);
    Ok(value)
}

fn read_pair<R: BufRead>(tokens: &mut Tokens<R>, config: &Config) -> Result<(i64, i64), QueryError> {
    let a = read_native(tokens, config, "first exponent of the difference")?;
    let b = read_native(tokens, config, "second exponent of the difference")?;
    Ok((a, b))
}

/// One arithmetic operation on two decimal operands.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BinaryOp {
    Add,
    Sub,
    Mul,
}

/// Parse both operands under `config` and apply `op`.
pub fn evaluate(op: BinaryOp, lhs: &str, rhs: &str, config: &Config) -> Result<BigInt, QueryError> {
    let lhs = config.parse_big(lhs)?;
    let rhs = config.parse_big(rhs)?;
    let result = match op {
        BinaryOp::Add => lhs.add(&rhs),
        BinaryOp::Sub => lhs.subtract(&rhs)?,
        BinaryOp::Mul => lhs.multiply(&rhs),
    };
    Ok(result)
}

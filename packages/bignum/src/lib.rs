//! Arbitrary-precision non-negative integers stored as decimal digits, with
//! factorial, exponentiation and Fibonacci built on top.

pub mod bigint;
mod digits;
pub mod error;
pub mod factorial;
pub mod fibonacci;
pub mod power;

pub use bigint::BigInt;
pub use error::BigIntError;
pub use factorial::{factorial, try_factorial};
pub use fibonacci::{FibonacciSeq, fibonacci, try_fibonacci};
pub use power::{power, try_power};

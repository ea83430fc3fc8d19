//! Integer helpers behind the arithmetic operations.

use thiserror::Error;

/// `F(186)` is the last Fibonacci number that fits in a `u128`.
pub const MAX_FIBONACCI_TERMS: usize = 187;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum MathError {
    #[error("Result exceeds the supported integer range")]
    Overflow,
}

/// First `n` Fibonacci numbers, starting `0, 1, 1, 2, ...`.
pub fn fibonacci(n: usize) -> Result<Vec<u128>, MathError> {
    if n > MAX_FIBONACCI_TERMS {
        return Err(MathError::Overflow);
    }

    let mut sequence: Vec<u128> = Vec::with_capacity(n);
    for i in 0..n {
        let term = match i {
            0 => 0,
            1 => 1,
            _ => sequence[i - 1]
                .checked_add(sequence[i - 2])
                .ok_or(MathError::Overflow)?,
        };
        sequence.push(term);
    }

    Ok(sequence)
}

/// Trial division primality test.
pub fn is_prime(n: i64) -> bool {
    if n < 2 {
        return false;
    }

    let n = n as u64;
    let mut i = 2u64;
    while i * i <= n {
        if n % i == 0 {
            return false;
        }
        i += 1;
    }
    true
}

pub fn gcd(a: u64, b: u64) -> u64 {
    let (mut a, mut b) = (a, b);
    while b != 0 {
        (a, b) = (b, a % b);
    }
    a
}

pub fn lcm(a: u64, b: u64) -> Result<u64, MathError> {
    if a == 0 || b == 0 {
        return Ok(0);
    }
    (a / gcd(a, b)).checked_mul(b).ok_or(MathError::Overflow)
}

/// GCD of `first` and every value in `rest`.
pub fn gcd_all(first: u64, rest: &[u64]) -> u64 {
    rest.iter().copied().fold(first, gcd)
}

/// LCM of `first` and every value in `rest`.
pub fn lcm_all(first: u64, rest: &[u64]) -> Result<u64, MathError> {
    rest.iter().copied().try_fold(first, lcm)
}

//! Mathematical utility functions
//!
//! Analytic helpers that sit beside the arithmetic operations but are never
//! recorded in a calculator's history.

use std::cmp::Ordering;

use crate::engine::OperationOutcome;
use crate::error::CalcError;
use crate::numeric::CalcNumeric;

/// Largest input whose factorial fits in a `u64`
pub const MAX_FACTORIAL_INPUT: i64 = 20;

/// Compute `n!`
///
/// # Errors
/// - `InvalidInput` for negative `n`
/// - `Overflow` for `n > 20` ([`MAX_FACTORIAL_INPUT`]); the product no longer
///   fits in 64 bits
///
/// # Examples
/// ```
/// use calc_ledger::engine::factorial;
///
/// assert_eq!(factorial(0), Ok(1));
/// assert_eq!(factorial(5), Ok(120));
/// assert!(factorial(-1).is_err());
/// assert!(factorial(21).is_err());
/// ```
pub fn factorial(n: i64) -> OperationOutcome<u64> {
    if n < 0 {
        return Err(CalcError::InvalidInput);
    }
    (2..=n as u64).try_fold(1_u64, |acc, k| acc.checked_mul(k).ok_or(CalcError::Overflow))
}

/// Primality test by trial division with `6k ± 1` candidates up to `√n`
///
/// Values `<= 1` are never prime.
pub fn is_prime(n: i64) -> bool {
    if n <= 1 {
        return false;
    }
    if n <= 3 {
        return true;
    }
    if n % 2 == 0 || n % 3 == 0 {
        return false;
    }

    let mut i = 5_i64;
    // i <= n / i avoids squaring past i64::MAX
    while i <= n / i {
        if n % i == 0 || n % (i + 2) == 0 {
            return false;
        }
        i += 6;
    }
    true
}

/// First `length` Fibonacci numbers, starting `0, 1, 1, 2, ...`
///
/// Returns an empty sequence for `length <= 0`.
///
/// # Errors
/// Returns `Overflow` if the sequence runs past `u64::MAX` (`length > 94`).
pub fn fibonacci_sequence(length: i64) -> OperationOutcome<Vec<u64>> {
    if length <= 0 {
        return Ok(Vec::new());
    }
    let length = usize::try_from(length).map_err(|_| CalcError::Overflow)?;

    let mut sequence: Vec<u64> = Vec::new();
    let (mut current, mut next) = (Some(0_u64), Some(1_u64));
    for _ in 0..length {
        let value = current.ok_or(CalcError::Overflow)?;
        sequence.push(value);
        let following = next.and_then(|n| value.checked_add(n));
        current = next;
        next = following;
    }
    Ok(sequence)
}

/// Median of `numbers`
///
/// Sorts a copy; the caller's slice is left untouched. For an even count the
/// two middle values are averaged.
///
/// # Errors
/// - `InvalidInput` if `numbers` is empty or contains a NaN
/// - `Overflow` if averaging the middle values overflows an integer type
pub fn median<T: CalcNumeric>(numbers: &[T]) -> OperationOutcome<T> {
    // NaN is the only value not comparable with itself
    if numbers.is_empty() || numbers.iter().any(|x| x.partial_cmp(x).is_none()) {
        return Err(CalcError::InvalidInput);
    }

    let mut sorted = numbers.to_vec();
    sorted.sort_by(|a, b| a.partial_cmp(b).unwrap_or(Ordering::Equal));

    let mid = sorted.len() / 2;
    if sorted.len() % 2 == 1 {
        return Ok(sorted[mid]);
    }

    let two = T::one() + T::one();
    let sum = sorted[mid - 1]
        .checked_sum(sorted[mid])
        .ok_or(CalcError::Overflow)?;
    Ok(sum / two)
}

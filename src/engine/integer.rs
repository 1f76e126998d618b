//! Integer-only operations
//!
//! Euclidean `gcd` and `lcm` for the signed primitive integers. Both work on
//! absolute values, so the sign of the inputs never affects the result.

use crate::engine::{multiply, OperationOutcome};
use crate::error::CalcError;
use crate::numeric::CalcInteger;

/// Absolute value that reports `T::MIN` as an overflow instead of wrapping
fn checked_abs<T: CalcInteger>(x: T) -> OperationOutcome<T> {
    if x < T::zero() {
        T::zero().checked_difference(x).ok_or(CalcError::Overflow)
    } else {
        Ok(x)
    }
}

/// Greatest common divisor of `|a|` and `|b|`
///
/// `gcd(0, 0)` is defined as `0`; `gcd(x, 0)` is `|x|`.
///
/// # Errors
/// Returns `Overflow` only when the result would be `|T::MIN|`.
///
/// # Examples
/// ```
/// use calc_ledger::engine::gcd;
///
/// assert_eq!(gcd(48_i64, 18), Ok(6));
/// assert_eq!(gcd(-48_i64, 18), Ok(6));
/// assert_eq!(gcd(0_i64, 0), Ok(0));
/// ```
pub fn gcd<T: CalcInteger>(a: T, b: T) -> OperationOutcome<T> {
    // Run Euclid on the signed values; remainders shrink toward zero, so
    // only the final value needs its sign removed.
    let (mut a, mut b) = (a, b);
    while !b.is_zero() {
        let remainder = a.checked_remainder(b).unwrap_or_else(T::zero);
        a = b;
        b = remainder;
    }
    checked_abs(a)
}

/// Least common multiple, `|a * b| / gcd(a, b)`
///
/// # Errors
/// - `InvalidInput` when both inputs are zero (the gcd is zero)
/// - `Overflow` when the multiple does not fit in `T`
///
/// # Examples
/// ```
/// use calc_ledger::engine::lcm;
/// use calc_ledger::CalcError;
///
/// assert_eq!(lcm(12_i64, 8), Ok(24));
/// assert_eq!(lcm(0_i64, 5), Ok(0));
/// assert_eq!(lcm(0_i64, 0), Err(CalcError::InvalidInput));
/// ```
pub fn lcm<T: CalcInteger>(a: T, b: T) -> OperationOutcome<T> {
    let divisor = gcd(a, b)?;
    if divisor.is_zero() {
        return Err(CalcError::InvalidInput);
    }
    // Divide first so the intermediate product stays as small as possible.
    let reduced = checked_abs(a)? / divisor;
    multiply(reduced, checked_abs(b)?)
}

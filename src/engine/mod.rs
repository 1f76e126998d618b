//! Operation Engine
//!
//! Stateless arithmetic and analytic functions. Every function here is pure:
//! it returns an unrounded result or a [`CalcError`] and never touches
//! shared state. Rounding and history recording happen one layer up, in
//! [`Calculator`](crate::Calculator).
//!
//! The operation set is closed, so dispatch is a single `match` over
//! [`OperationKind`] in [`evaluate_binary`] and [`evaluate_unary`].

pub mod integer;
pub mod math_utils;

use serde::{Deserialize, Serialize};

use crate::error::CalcError;
use crate::numeric::CalcNumeric;

pub use integer::{gcd, lcm};
pub use math_utils::{factorial, fibonacci_sequence, is_prime, median};

/// Result of one engine operation: `Ok` on success, `Err` with the reason
/// otherwise.
pub type OperationOutcome<T = f64> = Result<T, CalcError>;

/// Number of operands an operation takes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Arity {
    /// One operand (square, square root)
    Unary,
    /// Two operands (add, divide, power, ...)
    Binary,
    /// A non-empty sequence of operands (average)
    Variadic,
}

/// Operations the calculator can perform and record in its history
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum OperationKind {
    Add,
    Subtract,
    Multiply,
    Divide,
    Power,
    Square,
    SquareRoot,
    Average,
    Modulo,
}

impl OperationKind {
    /// All operation kinds, in declaration order
    pub const ALL: [OperationKind; 9] = [
        OperationKind::Add,
        OperationKind::Subtract,
        OperationKind::Multiply,
        OperationKind::Divide,
        OperationKind::Power,
        OperationKind::Square,
        OperationKind::SquareRoot,
        OperationKind::Average,
        OperationKind::Modulo,
    ];

    /// Get a human-readable name for the operation
    pub fn name(&self) -> &'static str {
        match self {
            OperationKind::Add => "Addition",
            OperationKind::Subtract => "Subtraction",
            OperationKind::Multiply => "Multiplication",
            OperationKind::Divide => "Division",
            OperationKind::Power => "Power",
            OperationKind::Square => "Square",
            OperationKind::SquareRoot => "Square Root",
            OperationKind::Average => "Average",
            OperationKind::Modulo => "Modulo",
        }
    }

    /// Number of operands the operation expects
    pub fn arity(&self) -> Arity {
        match self {
            OperationKind::Square | OperationKind::SquareRoot => Arity::Unary,
            OperationKind::Average => Arity::Variadic,
            OperationKind::Add
            | OperationKind::Subtract
            | OperationKind::Multiply
            | OperationKind::Divide
            | OperationKind::Power
            | OperationKind::Modulo => Arity::Binary,
        }
    }
}

impl std::fmt::Display for OperationKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Evaluate a two-operand operation
///
/// # Errors
/// - `InvalidInput` if `kind` is not a binary operation
/// - whatever the underlying operation reports
///
/// # Examples
/// ```
/// use calc_ledger::engine::{evaluate_binary, OperationKind};
/// use calc_ledger::CalcError;
///
/// assert_eq!(evaluate_binary(OperationKind::Add, 10.0, 5.0), Ok(15.0));
/// assert_eq!(
///     evaluate_binary(OperationKind::Divide, 10.0, 0.0),
///     Err(CalcError::DivisionByZero)
/// );
/// assert_eq!(
///     evaluate_binary(OperationKind::SquareRoot, 1.0, 2.0),
///     Err(CalcError::InvalidInput)
/// );
/// ```
pub fn evaluate_binary<T: CalcNumeric>(kind: OperationKind, a: T, b: T) -> OperationOutcome<T> {
    match kind {
        OperationKind::Add => add(a, b),
        OperationKind::Subtract => subtract(a, b),
        OperationKind::Multiply => multiply(a, b),
        OperationKind::Divide => divide(a, b),
        OperationKind::Power => power(a, b),
        OperationKind::Modulo => modulo(a, b),
        OperationKind::Square | OperationKind::SquareRoot | OperationKind::Average => {
            log::debug!("{} is not a binary operation", kind);
            Err(CalcError::InvalidInput)
        }
    }
}

/// Evaluate a single-operand operation
///
/// # Errors
/// - `InvalidInput` if `kind` is not a unary operation
/// - whatever the underlying operation reports
pub fn evaluate_unary<T: CalcNumeric>(kind: OperationKind, x: T) -> OperationOutcome<T> {
    match kind {
        OperationKind::Square => square(x),
        OperationKind::SquareRoot => square_root(x),
        _ => {
            log::debug!("{} is not a unary operation", kind);
            Err(CalcError::InvalidInput)
        }
    }
}

/// `a + b`. Never fails for floats; integers report `Overflow`.
pub fn add<T: CalcNumeric>(a: T, b: T) -> OperationOutcome<T> {
    a.checked_sum(b).ok_or(CalcError::Overflow)
}

/// `a - b`. Never fails for floats; integers report `Overflow`.
pub fn subtract<T: CalcNumeric>(a: T, b: T) -> OperationOutcome<T> {
    a.checked_difference(b).ok_or(CalcError::Overflow)
}

/// `a * b`. Never fails for floats; integers report `Overflow`.
pub fn multiply<T: CalcNumeric>(a: T, b: T) -> OperationOutcome<T> {
    a.checked_product(b).ok_or(CalcError::Overflow)
}

/// `a / b`, failing with `DivisionByZero` when `b == 0`.
pub fn divide<T: CalcNumeric>(a: T, b: T) -> OperationOutcome<T> {
    if b.is_zero() {
        return Err(CalcError::DivisionByZero);
    }
    a.checked_quotient(b).ok_or(CalcError::Overflow)
}

/// `a % b`, failing with `DivisionByZero` when `b == 0`.
pub fn modulo<T: CalcNumeric>(a: T, b: T) -> OperationOutcome<T> {
    if b.is_zero() {
        return Err(CalcError::DivisionByZero);
    }
    a.checked_remainder(b).ok_or(CalcError::Overflow)
}

/// `base ^ exponent`, failing with `Overflow` when the result is outside
/// the finite range of `T`.
///
/// Negative and fractional exponents follow the standard power function;
/// a domain error such as `(-8) ^ (1/3)` yields NaN rather than a failure.
pub fn power<T: CalcNumeric>(base: T, exponent: T) -> OperationOutcome<T> {
    base.checked_power(exponent).ok_or(CalcError::Overflow)
}

/// `x * x`
pub fn square<T: CalcNumeric>(x: T) -> OperationOutcome<T> {
    x.checked_product(x).ok_or(CalcError::Overflow)
}

/// Non-negative square root, failing with `NegativeRoot` when `x < 0`.
pub fn square_root<T: CalcNumeric>(x: T) -> OperationOutcome<T> {
    if x < T::zero() {
        return Err(CalcError::NegativeRoot);
    }
    Ok(x.square_root())
}

/// Arithmetic mean of `numbers`, failing with `InvalidInput` when empty.
///
/// This is the raw computation; [`Calculator::average`](crate::Calculator::average)
/// additionally rounds and records the result.
pub fn average<T: CalcNumeric>(numbers: &[T]) -> OperationOutcome<T> {
    if numbers.is_empty() {
        return Err(CalcError::InvalidInput);
    }
    let sum = numbers
        .iter()
        .try_fold(T::zero(), |acc, &n| acc.checked_sum(n))
        .ok_or(CalcError::Overflow)?;
    let count = <T as num_traits::NumCast>::from(numbers.len()).ok_or(CalcError::Overflow)?;
    divide(sum, count)
}

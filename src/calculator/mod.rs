//! Calculator
//!
//! Wraps every engine call with the same policy: on success the result is
//! rounded to the configured precision and, if history is enabled, recorded
//! in the ledger. Failures are returned untouched and leave the calculator
//! unchanged, so every operation is atomic.

pub mod config;

use std::collections::BTreeMap;

use crate::engine::{self, OperationKind, OperationOutcome};
use crate::error::CalcError;
use crate::history::{Clock, HistoryEntry, HistoryFullPolicy, HistoryLedger, SystemClock};
use crate::numeric::{CalcInteger, CalcNumeric};

pub use config::{CalculatorConfig, DEFAULT_PRECISION, MAX_PRECISION};

/// Round `value` to `precision` decimal places: `round(value × 10^p) / 10^p`
///
/// # Examples
/// ```
/// use calc_ledger::calculator::round_to_precision;
///
/// assert_eq!(round_to_precision(3.14159, 2), 3.14);
/// assert_eq!(round_to_precision(2.5, 0), 3.0);
/// ```
pub fn round_to_precision<T: CalcNumeric>(value: T, precision: u32) -> T {
    value.round_to_precision(precision)
}

/// A named calculator with a bounded operation history
///
/// `T` is the number type (`f64` unless stated otherwise) and `C` the clock
/// used to timestamp history entries.
///
/// A calculator assumes exclusive access; share one between threads by
/// wrapping it in a `Mutex`.
///
/// # Examples
/// ```
/// use calc_ledger::{Calculator, CalcError, OperationKind};
///
/// let mut calc = Calculator::new("T", 4).unwrap();
/// assert_eq!(calc.perform_binary(OperationKind::Add, 10.0, 5.0), Ok(15.0));
/// assert_eq!(
///     calc.perform_binary(OperationKind::Divide, 10.0, 0.0),
///     Err(CalcError::DivisionByZero)
/// );
/// assert_eq!(calc.history_size(), 1);
/// ```
#[derive(Debug, Clone)]
pub struct Calculator<T = f64, C = SystemClock> {
    name: String,
    precision: u32,
    history_enabled: bool,
    when_full: HistoryFullPolicy,
    ledger: HistoryLedger<T>,
    clock: C,
}

/// Calculator specialised to 64-bit integers
pub type IntegerCalculator<C = SystemClock> = Calculator<i64, C>;

impl<T: CalcNumeric> Calculator<T, SystemClock> {
    /// Create a calculator with default settings besides name and precision
    ///
    /// # Errors
    /// Returns `InvalidInput` if `name` is blank or `precision` exceeds
    /// [`MAX_PRECISION`].
    pub fn new(name: impl Into<String>, precision: u32) -> Result<Self, CalcError> {
        Self::from_config(&CalculatorConfig::new(name, precision))
    }

    /// Create a calculator from a full configuration
    pub fn from_config(config: &CalculatorConfig) -> Result<Self, CalcError> {
        Self::with_clock(config, SystemClock)
    }
}

impl IntegerCalculator<SystemClock> {
    /// Integer calculator; precision is fixed at zero
    pub fn integer(name: impl Into<String>) -> Result<Self, CalcError> {
        Self::new(name, 0)
    }
}

impl<T: CalcNumeric, C: Clock> Calculator<T, C> {
    /// Create a calculator that timestamps history entries with `clock`
    pub fn with_clock(config: &CalculatorConfig, clock: C) -> Result<Self, CalcError> {
        config.validate()?;
        log::info!(
            "Created calculator '{}' (precision {}, history capacity {})",
            config.name,
            config.precision,
            config.history_capacity
        );
        Ok(Self {
            name: config.name.clone(),
            precision: config.precision,
            history_enabled: config.history_enabled,
            when_full: config.when_full,
            ledger: HistoryLedger::new(config.history_capacity),
            clock,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn precision(&self) -> u32 {
        self.precision
    }

    pub fn history_enabled(&self) -> bool {
        self.history_enabled
    }

    /// Enable or disable recording. Only affects future operations.
    pub fn set_history_enabled(&mut self, enabled: bool) {
        self.history_enabled = enabled;
    }

    pub fn history_full_policy(&self) -> HistoryFullPolicy {
        self.when_full
    }

    pub fn history(&self) -> &HistoryLedger<T> {
        &self.ledger
    }

    pub fn history_size(&self) -> usize {
        self.ledger.len()
    }

    /// Recorded entries, oldest first
    pub fn history_entries(&self) -> &[HistoryEntry<T>] {
        self.ledger.entries()
    }

    /// Number of recorded operations per kind
    pub fn history_summary(&self) -> BTreeMap<OperationKind, usize> {
        self.ledger.summary()
    }

    pub fn clear_history(&mut self) {
        log::info!(
            "Clearing {} history entries of '{}'",
            self.ledger.len(),
            self.name
        );
        self.ledger.clear();
    }

    /// Round `value` to this calculator's precision
    pub fn round(&self, value: T) -> T {
        round_to_precision(value, self.precision)
    }

    /// Perform a two-operand operation, then round and record the result
    pub fn perform_binary(&mut self, kind: OperationKind, a: T, b: T) -> OperationOutcome<T> {
        let outcome = engine::evaluate_binary(kind, a, b);
        self.complete(kind, outcome, || vec![a, b])
    }

    /// Perform a single-operand operation, then round and record the result
    pub fn perform_unary(&mut self, kind: OperationKind, a: T) -> OperationOutcome<T> {
        let outcome = engine::evaluate_unary(kind, a);
        self.complete(kind, outcome, || vec![a])
    }

    pub fn add(&mut self, a: T, b: T) -> OperationOutcome<T> {
        self.perform_binary(OperationKind::Add, a, b)
    }

    pub fn subtract(&mut self, a: T, b: T) -> OperationOutcome<T> {
        self.perform_binary(OperationKind::Subtract, a, b)
    }

    pub fn multiply(&mut self, a: T, b: T) -> OperationOutcome<T> {
        self.perform_binary(OperationKind::Multiply, a, b)
    }

    pub fn divide(&mut self, a: T, b: T) -> OperationOutcome<T> {
        self.perform_binary(OperationKind::Divide, a, b)
    }

    pub fn power(&mut self, base: T, exponent: T) -> OperationOutcome<T> {
        self.perform_binary(OperationKind::Power, base, exponent)
    }

    pub fn modulo(&mut self, a: T, b: T) -> OperationOutcome<T> {
        self.perform_binary(OperationKind::Modulo, a, b)
    }

    pub fn square(&mut self, x: T) -> OperationOutcome<T> {
        self.perform_unary(OperationKind::Square, x)
    }

    pub fn square_root(&mut self, x: T) -> OperationOutcome<T> {
        self.perform_unary(OperationKind::SquareRoot, x)
    }

    /// Average of `numbers`, rounded and recorded with every number as an
    /// operand. See [`engine::average`] for the raw computation.
    pub fn average(&mut self, numbers: &[T]) -> OperationOutcome<T> {
        let outcome = engine::average(numbers);
        self.complete(OperationKind::Average, outcome, || numbers.to_vec())
    }

    /// Apply `func` to a non-empty slice. The result is neither rounded nor
    /// recorded.
    ///
    /// # Errors
    /// Returns `InvalidInput` if `numbers` is empty.
    pub fn apply_function<F>(&self, numbers: &[T], func: F) -> OperationOutcome<T>
    where
        F: FnOnce(&[T]) -> T,
    {
        if numbers.is_empty() {
            return Err(CalcError::InvalidInput);
        }
        Ok(func(numbers))
    }

    fn complete<F>(
        &mut self,
        kind: OperationKind,
        outcome: OperationOutcome<T>,
        operands: F,
    ) -> OperationOutcome<T>
    where
        F: FnOnce() -> Vec<T>,
    {
        let raw = match outcome {
            Ok(value) => value,
            Err(err) => {
                log::debug!("{} failed: {}", kind, err);
                return Err(err);
            }
        };
        let result = self.round(raw);
        log::debug!("{} = {} (raw {})", kind, result, raw);

        if !self.history_enabled {
            return Ok(result);
        }

        let entry = HistoryEntry::new(kind, operands(), result, self.clock.now());
        match self.when_full {
            HistoryFullPolicy::Drop => {
                self.ledger.append(entry);
            }
            HistoryFullPolicy::Reject => {
                if let Err(err) = self.ledger.try_append(entry) {
                    log::warn!("Rejecting {}: history of '{}' is full", kind, self.name);
                    return Err(err);
                }
            }
        }
        Ok(result)
    }
}

impl<T: CalcInteger, C: Clock> Calculator<T, C> {
    /// Greatest common divisor. Not recorded in the history.
    pub fn gcd(&self, a: T, b: T) -> OperationOutcome<T> {
        engine::gcd(a, b)
    }

    /// Least common multiple. Not recorded in the history.
    pub fn lcm(&self, a: T, b: T) -> OperationOutcome<T> {
        engine::lcm(a, b)
    }
}

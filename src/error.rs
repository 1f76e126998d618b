//! Calculator error taxonomy
//!
//! Every engine operation reports failure through [`CalcError`]. The set is
//! closed and every variant is recoverable: nothing in the engine panics or
//! aborts the process on bad input.

/// Reasons an operation (or a calculator construction) can fail
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, thiserror::Error)]
pub enum CalcError {
    /// Missing or malformed arguments (empty name, empty collection,
    /// negative factorial input, operation of the wrong arity, ...)
    #[error("Invalid input")]
    InvalidInput,

    /// Divisor is exactly zero
    #[error("Division by zero")]
    DivisionByZero,

    /// Square root requested of a negative number
    #[error("Cannot calculate square root of negative number")]
    NegativeRoot,

    /// Result is outside the representable range of the numeric type
    #[error("Numeric overflow")]
    Overflow,

    /// The history ledger is at capacity and the calculator is configured
    /// to reject operations it cannot record
    #[error("History is full")]
    HistoryFull,
}

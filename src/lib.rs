//! # calc-ledger
//!
//! A small calculation engine with a bounded operation history.
//!
//! - [`engine`]: pure arithmetic and analytic functions returning an
//!   [`OperationOutcome`]
//! - [`history`]: the fixed-capacity [`HistoryLedger`] of successful operations
//! - [`calculator`]: [`Calculator`], which rounds engine results to a
//!   configured precision and records them
//!
//! ```
//! use calc_ledger::{Calculator, OperationKind};
//!
//! let mut calc = Calculator::<f64>::new("Demo", 4).unwrap();
//! assert_eq!(calc.perform_unary(OperationKind::SquareRoot, 16.0), Ok(4.0));
//! assert_eq!(calc.average(&[1.0, 2.0, 3.0, 4.0, 5.0]), Ok(3.0));
//! assert_eq!(calc.history_size(), 2);
//! ```

pub mod calculator;
pub mod engine;
pub mod error;
pub mod history;
pub mod numeric;

pub use calculator::{Calculator, CalculatorConfig, IntegerCalculator};
pub use engine::{OperationKind, OperationOutcome};
pub use error::CalcError;
pub use history::{HistoryEntry, HistoryFullPolicy, HistoryLedger};

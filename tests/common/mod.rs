#![allow(dead_code)]

use calc_ledger::history::FixedClock;
use calc_ledger::{Calculator, CalculatorConfig};
use chrono::{DateTime, TimeZone, Utc};

pub mod helpers;

/// Instant every test calculator stamps its history entries with
pub fn fixed_instant() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 6, 1, 8, 0, 0).unwrap()
}

/// Calculator with a fixed clock and the given name/precision
pub fn test_calculator(name: &str, precision: u32) -> Calculator<f64, FixedClock> {
    calculator_with_config(&CalculatorConfig::new(name, precision))
}

/// Calculator with a fixed clock and a custom config
pub fn calculator_with_config(config: &CalculatorConfig) -> Calculator<f64, FixedClock> {
    Calculator::with_clock(config, FixedClock(fixed_instant())).unwrap()
}

/// Integer calculator with a fixed clock
pub fn integer_calculator() -> Calculator<i64, FixedClock> {
    Calculator::with_clock(
        &CalculatorConfig::new("Integer Calculator", 0),
        FixedClock(fixed_instant()),
    )
    .unwrap()
}

#![allow(dead_code)]

//! Helper functions for common test assertions

use calc_ledger::{CalcError, HistoryEntry, OperationKind, OperationOutcome};

pub fn assert_approx_eq(actual: f64, expected: f64, tolerance: f64, context: &str) {
    assert!(
        (actual - expected).abs() <= tolerance,
        "{}: expected {} within {}, got {}",
        context,
        expected,
        tolerance,
        actual
    );
}

pub fn assert_failure<T: std::fmt::Debug>(
    outcome: OperationOutcome<T>,
    expected: CalcError,
    context: &str,
) {
    match outcome {
        Err(err) => assert_eq!(err, expected, "{}: wrong error kind", context),
        Ok(value) => panic!("{}: expected {:?}, got Ok({:?})", context, expected, value),
    }
}

pub fn assert_entry<T: Copy + PartialEq + std::fmt::Debug>(
    entry: &HistoryEntry<T>,
    operation: OperationKind,
    operands: &[T],
    result: T,
) {
    assert_eq!(entry.operation(), operation, "operation of {:?}", entry);
    assert_eq!(entry.operands(), operands, "operands of {:?}", entry);
    assert_eq!(entry.result(), result, "result of {:?}", entry);
}

/// Primality of every `n` in `0..=limit` by sieve of Eratosthenes
pub fn sieve(limit: usize) -> Vec<bool> {
    let mut is_prime = vec![true; limit + 1];
    is_prime[0] = false;
    if limit >= 1 {
        is_prime[1] = false;
    }
    let mut i = 2;
    while i * i <= limit {
        if is_prime[i] {
            let mut multiple = i * i;
            while multiple <= limit {
                is_prime[multiple] = false;
                multiple += i;
            }
        }
        i += 1;
    }
    is_prime
}

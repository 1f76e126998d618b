//! History Ledger
//!
//! A bounded, ordered record of successfully executed operations. Insertion
//! order is chronological order. Once the ledger holds `capacity` entries it
//! stops accepting new ones: this is not a sliding window, nothing is ever
//! evicted except by [`HistoryLedger::clear`].

pub mod clock;

use std::collections::BTreeMap;
use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::engine::OperationKind;
use crate::error::CalcError;

pub use clock::{Clock, FixedClock, SystemClock};

/// Capacity of a ledger created without an explicit one
pub const DEFAULT_HISTORY_CAPACITY: usize = 100;

/// What a calculator does with a successful result once its ledger is full
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HistoryFullPolicy {
    /// Return the result and silently skip recording it
    #[default]
    Drop,
    /// Fail the operation with [`CalcError::HistoryFull`]
    Reject,
}

/// One recorded operation. Never mutated after creation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HistoryEntry<T = f64> {
    operation: OperationKind,
    operands: Vec<T>,
    result: T,
    recorded_at: DateTime<Utc>,
}

impl<T: Copy> HistoryEntry<T> {
    pub fn new(
        operation: OperationKind,
        operands: Vec<T>,
        result: T,
        recorded_at: DateTime<Utc>,
    ) -> Self {
        Self {
            operation,
            operands,
            result,
            recorded_at,
        }
    }

    pub fn operation(&self) -> OperationKind {
        self.operation
    }

    /// Operands in call order: one for unary operations, two for binary
    /// ones, every input for an average.
    pub fn operands(&self) -> &[T] {
        &self.operands
    }

    pub fn result(&self) -> T {
        self.result
    }

    pub fn recorded_at(&self) -> DateTime<Utc> {
        self.recorded_at
    }
}

impl<T: fmt::Display> fmt::Display for HistoryEntry<T> {
    /// `Addition: [10, 5] = 15`
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: [", self.operation.name())?;
        for (i, operand) in self.operands.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{operand}")?;
        }
        write!(f, "] = {}", self.result)
    }
}

/// Fixed-capacity, append-only (until cleared) log of history entries
#[derive(Debug, Clone)]
pub struct HistoryLedger<T = f64> {
    entries: Vec<HistoryEntry<T>>,
    capacity: usize,
}

impl<T: Copy> HistoryLedger<T> {
    pub fn new(capacity: usize) -> Self {
        Self {
            entries: Vec::new(),
            capacity,
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.entries.len() >= self.capacity
    }

    pub fn remaining(&self) -> usize {
        self.capacity.saturating_sub(self.entries.len())
    }

    /// Append `entry` if there is room.
    ///
    /// Returns `false` and drops the entry when the ledger is full; no error
    /// is raised. Use [`try_append`](Self::try_append) when retention must be
    /// guaranteed.
    pub fn append(&mut self, entry: HistoryEntry<T>) -> bool {
        if self.is_full() {
            log::warn!(
                "History full ({} entries), dropping {} entry",
                self.capacity,
                entry.operation
            );
            return false;
        }
        log::trace!("Recording {} entry #{}", entry.operation, self.entries.len() + 1);
        self.entries.push(entry);
        true
    }

    /// Append `entry`, failing with [`CalcError::HistoryFull`] when there is
    /// no room. The ledger is unchanged on failure.
    pub fn try_append(&mut self, entry: HistoryEntry<T>) -> Result<(), CalcError> {
        if self.is_full() {
            return Err(CalcError::HistoryFull);
        }
        self.entries.push(entry);
        Ok(())
    }

    /// Remove every entry. Capacity is unaffected.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Entries oldest first
    pub fn entries(&self) -> &[HistoryEntry<T>] {
        &self.entries
    }

    pub fn iter(&self) -> std::slice::Iter<'_, HistoryEntry<T>> {
        self.entries.iter()
    }

    /// Number of recorded entries per operation kind
    pub fn summary(&self) -> BTreeMap<OperationKind, usize> {
        let mut summary = BTreeMap::new();
        for entry in &self.entries {
            *summary.entry(entry.operation).or_insert(0) += 1;
        }
        summary
    }
}

impl<T: Copy> Default for HistoryLedger<T> {
    fn default() -> Self {
        Self::new(DEFAULT_HISTORY_CAPACITY)
    }
}

impl<'a, T: Copy> IntoIterator for &'a HistoryLedger<T> {
    type Item = &'a HistoryEntry<T>;
    type IntoIter = std::slice::Iter<'a, HistoryEntry<T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn entry(result: f64) -> HistoryEntry {
        let at = Utc.with_ymd_and_hms(2024, 1, 1, 12, 0, 0).unwrap();
        HistoryEntry::new(OperationKind::Add, vec![result, 0.0], result, at)
    }

    #[test]
    fn ledger_stops_accepting_at_capacity() {
        let mut ledger = HistoryLedger::new(2);
        assert!(ledger.append(entry(1.0)));
        assert!(ledger.append(entry(2.0)));
        assert!(ledger.is_full());
        assert!(!ledger.append(entry(3.0)));
        assert_eq!(ledger.len(), 2);
        // Oldest entries are kept, the newest is the one dropped
        let results: Vec<f64> = ledger.iter().map(|e| e.result()).collect();
        assert_eq!(results, vec![1.0, 2.0]);
    }

    #[test]
    fn try_append_reports_full_ledger() {
        let mut ledger = HistoryLedger::new(1);
        assert_eq!(ledger.try_append(entry(1.0)), Ok(()));
        assert_eq!(ledger.try_append(entry(2.0)), Err(CalcError::HistoryFull));
        assert_eq!(ledger.len(), 1);
    }

    #[test]
    fn clear_keeps_capacity() {
        let mut ledger = HistoryLedger::new(3);
        for i in 0..5 {
            ledger.append(entry(i as f64));
        }
        ledger.clear();
        assert!(ledger.is_empty());
        assert_eq!(ledger.capacity(), 3);
        assert_eq!(ledger.remaining(), 3);
        for i in 0..5 {
            ledger.append(entry(i as f64));
        }
        assert_eq!(ledger.len(), 3);
    }

    #[test]
    fn entries_view_is_restartable() {
        let mut ledger = HistoryLedger::default();
        ledger.append(entry(1.0));
        ledger.append(entry(2.0));
        let first: Vec<f64> = ledger.iter().map(|e| e.result()).collect();
        let second: Vec<f64> = (&ledger).into_iter().map(|e| e.result()).collect();
        assert_eq!(first, second);
        assert_eq!(ledger.capacity(), DEFAULT_HISTORY_CAPACITY);
    }

    #[test]
    fn entry_display() {
        assert_eq!(entry(10.5).to_string(), "Addition: [10.5, 0] = 10.5");
    }

    #[test]
    fn entry_serializes_timestamp_as_rfc3339() {
        let json = serde_json::to_value(entry(1.0)).unwrap();
        assert_eq!(json["operation"], "add");
        assert_eq!(json["recorded_at"], "2024-01-01T12:00:00Z");
        assert_eq!(json["operands"], serde_json::json!([1.0, 0.0]));
    }
}

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use valuator_core::valuation::ValuationMethod;

/// Oldest entries are dropped once the log grows past this size.
pub const MAX_HISTORY_ENTRIES: usize = 50;

/// One completed calculation: the method, when it ran, its headline
/// valuation, and the full input/result payloads as free-form JSON.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalculationRecord {
    pub method: ValuationMethod,
    pub timestamp: DateTime<Utc>,
    pub valuation: Decimal,
    pub inputs: serde_json::Value,
    pub result: serde_json::Value,
}

impl CalculationRecord {
    /// Creates a record stamped with the current time.
    pub fn new(
        method: ValuationMethod,
        valuation: Decimal,
        inputs: serde_json::Value,
        result: serde_json::Value,
    ) -> Self {
        CalculationRecord {
            method,
            timestamp: Utc::now(),
            valuation,
            inputs,
            result,
        }
    }
}

/// Append-only, capped calculation log.
///
/// The log is owned by the caller (typically a UI session); the valuation
/// engine itself never touches it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalculationHistory {
    records: Vec<CalculationRecord>,
}

impl CalculationHistory {
    pub fn new() -> Self {
        CalculationHistory::default()
    }

    /// Appends a record, dropping the oldest entries beyond the cap.
    pub fn append(&mut self, record: CalculationRecord) {
        self.records.push(record);
        if self.records.len() > MAX_HISTORY_ENTRIES {
            let overflow = self.records.len() - MAX_HISTORY_ENTRIES;
            self.records.drain(..overflow);
        }
    }

    /// All retained records, oldest first.
    pub fn records(&self) -> &[CalculationRecord] {
        &self.records
    }

    /// The most recent record, if any.
    pub fn latest(&self) -> Option<&CalculationRecord> {
        self.records.last()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn clear(&mut self) {
        self.records.clear();
    }
}

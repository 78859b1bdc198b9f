//! Property-based tests for the calculation history log.
//!
//! These tests verify the capped-log invariants across arbitrary append
//! counts, using the `proptest` crate for random test case generation.

use proptest::prelude::*;
use rust_decimal::Decimal;
use serde_json::json;

use valuator_core::valuation::ValuationMethod;
use valuator_export::history::{CalculationHistory, CalculationRecord, MAX_HISTORY_ENTRIES};

fn record(sequence: u64) -> CalculationRecord {
    CalculationRecord::new(
        ValuationMethod::Dcf,
        Decimal::from(sequence),
        json!({"sequence": sequence}),
        json!({"valuation": sequence}),
    )
}

proptest! {
    /// The log never grows past the cap, no matter how many records are
    /// appended.
    #[test]
    fn prop_history_length_never_exceeds_cap(count in 0usize..200) {
        let mut history = CalculationHistory::new();
        for i in 0..count {
            history.append(record(i as u64));
        }

        prop_assert_eq!(history.len(), count.min(MAX_HISTORY_ENTRIES));
        prop_assert!(history.len() <= MAX_HISTORY_ENTRIES);
    }

    /// Overflow drops the oldest entries: after any number of appends the
    /// retained records are exactly the most recent ones, still in
    /// insertion order.
    #[test]
    fn prop_history_retains_latest_records_in_order(count in 1usize..200) {
        let mut history = CalculationHistory::new();
        for i in 0..count {
            history.append(record(i as u64));
        }

        let first_retained = count.saturating_sub(MAX_HISTORY_ENTRIES);
        for (offset, retained) in history.records().iter().enumerate() {
            prop_assert_eq!(
                retained.valuation,
                Decimal::from((first_retained + offset) as u64)
            );
        }
        prop_assert_eq!(
            history.latest().unwrap().valuation,
            Decimal::from((count - 1) as u64)
        );
    }
}

//! Unit tests for the market multiples calculator and sector benchmarks.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use super::*;

fn input(metric_value: Decimal, multiple: Decimal) -> MultiplesInput {
    MultiplesInput {
        metric_value,
        multiple,
        metric_type: MetricType::Revenue.as_str().to_string(),
    }
}

#[test]
fn valuation_is_exactly_metric_times_multiple() {
    let result = calculate_multiples(&input(dec!(2000000), dec!(6.5))).unwrap();
    assert_eq!(result.valuation, dec!(13000000));
    assert_eq!(result.metric, dec!(2000000));
    assert_eq!(result.multiple, dec!(6.5));
    assert_eq!(result.metric_type, "Revenue");
}

#[test]
fn zero_metric_values_to_zero_for_any_multiple() {
    for multiple in [dec!(0.5), dec!(6.5), dec!(25.6)] {
        let result = calculate_multiples(&input(Decimal::ZERO, multiple)).unwrap();
        assert_eq!(result.valuation, Decimal::ZERO);
    }
}

#[test]
fn negative_metric_is_rejected() {
    let err = calculate_multiples(&input(dec!(-100), dec!(5))).unwrap_err();
    assert!(err.to_string().contains("cannot be negative"));
}

#[test]
fn non_positive_multiple_is_rejected() {
    assert!(calculate_multiples(&input(dec!(100), Decimal::ZERO)).is_err());
    assert!(calculate_multiples(&input(dec!(100), dec!(-2))).is_err());
}

#[test]
fn free_label_metric_type_is_echoed() {
    let result = calculate_multiples(&MultiplesInput {
        metric_value: dec!(500000),
        multiple: dec!(4),
        metric_type: "ARR".to_string(),
    })
    .unwrap();
    assert_eq!(result.metric_type, "ARR");
}

#[test]
fn sector_benchmark_lookup() {
    assert_eq!(
        sector_benchmark("SaaS", MetricType::Revenue),
        Some(dec!(8.2))
    );
    assert_eq!(
        sector_benchmark("SaaS", MetricType::Ebitda),
        Some(dec!(18.5))
    );
    assert_eq!(sector_benchmark("Spacetech", MetricType::Revenue), None);
}

#[test]
fn known_sectors_cover_the_benchmark_table() {
    let sectors = known_sectors();
    assert_eq!(sectors.len(), 15);
    assert!(sectors.contains(&"Technology"));
    assert!(sectors.contains(&"Real Estate"));
}

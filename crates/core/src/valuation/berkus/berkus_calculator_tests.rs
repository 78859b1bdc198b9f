//! Unit tests for the Berkus calculator.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use std::collections::HashMap;

use super::*;

fn uniform_scores(score: i32) -> HashMap<BerkusCriterion, i32> {
    BerkusCriterion::ALL.iter().map(|c| (*c, score)).collect()
}

#[test]
fn all_top_scores_reach_max_possible() {
    let result = calculate_berkus(&BerkusInput {
        criteria_scores: uniform_scores(5),
    })
    .unwrap();

    assert_eq!(result.valuation, dec!(2500000));
    assert_eq!(result.max_possible, dec!(2500000));
    assert_eq!(result.valuation, result.max_possible);
}

#[test]
fn all_zero_scores_value_to_zero() {
    let result = calculate_berkus(&BerkusInput {
        criteria_scores: uniform_scores(0),
    })
    .unwrap();

    assert_eq!(result.valuation, Decimal::ZERO);
    assert_eq!(result.max_possible, dec!(2500000));
}

#[test]
fn each_criterion_contributes_independently() {
    let mut scores = uniform_scores(0);
    scores.insert(BerkusCriterion::Prototype, 3);

    let result = calculate_berkus(&BerkusInput {
        criteria_scores: scores,
    })
    .unwrap();

    // 3/5 * 500 000 = 300 000, and nothing else contributes.
    assert_eq!(result.valuation, dec!(300000));
    let prototype = &result.breakdown[&BerkusCriterion::Prototype];
    assert_eq!(prototype.score, 3);
    assert_eq!(prototype.value, dec!(300000));
    assert_eq!(prototype.name, "Prototype (Reduces Technology Risk)");
}

#[test]
fn breakdown_covers_all_five_criteria() {
    let result = calculate_berkus(&BerkusInput {
        criteria_scores: uniform_scores(2),
    })
    .unwrap();

    assert_eq!(result.breakdown.len(), 5);
    let summed: Decimal = result.breakdown.values().map(|v| v.value).sum();
    assert_eq!(summed, result.valuation);
}

#[test]
fn missing_criterion_is_rejected() {
    for missing in BerkusCriterion::ALL {
        let mut scores = uniform_scores(4);
        scores.remove(&missing);

        let err = calculate_berkus(&BerkusInput {
            criteria_scores: scores,
        })
        .unwrap_err();
        assert!(err
            .to_string()
            .contains(&format!("Missing required criterion: {}", missing)));
    }
}

#[test]
fn out_of_range_scores_are_rejected() {
    let mut high = uniform_scores(3);
    high.insert(BerkusCriterion::Team, 6);
    assert!(calculate_berkus(&BerkusInput {
        criteria_scores: high
    })
    .is_err());

    let mut low = uniform_scores(3);
    low.insert(BerkusCriterion::Team, -1);
    assert!(calculate_berkus(&BerkusInput {
        criteria_scores: low
    })
    .is_err());
}

#[test]
fn boundary_scores_are_valid() {
    let mut scores = uniform_scores(0);
    scores.insert(BerkusCriterion::Concept, 5);
    assert!(calculate_berkus(&BerkusInput {
        criteria_scores: scores
    })
    .is_ok());
}

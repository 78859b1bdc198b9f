//! Unit tests for the scorecard calculator.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use std::collections::HashMap;

use super::*;

fn uniform_scores(score: i32) -> HashMap<ScorecardCriterion, i32> {
    ScorecardCriterion::ALL.iter().map(|c| (*c, score)).collect()
}

fn input(base: Decimal, scores: HashMap<ScorecardCriterion, i32>) -> ScorecardInput {
    ScorecardInput {
        base_valuation: base,
        criteria_scores: scores,
        criteria_weights: None,
    }
}

#[test]
fn all_top_scores_yield_adjustment_factor_of_one_point_five() {
    let result = calculate_scorecard(&input(dec!(1000000), uniform_scores(5))).unwrap();
    assert_eq!(result.adjustment_factor, dec!(1.5));
    assert_eq!(result.valuation, dec!(1500000));
}

#[test]
fn all_zero_scores_yield_adjustment_factor_of_one_half() {
    let result = calculate_scorecard(&input(dec!(1000000), uniform_scores(0))).unwrap();
    assert_eq!(result.adjustment_factor, dec!(0.5));
    assert_eq!(result.valuation, dec!(500000));
}

#[test]
fn score_three_maps_to_factor_one_point_one() {
    // Known formula/documentation discrepancy: 0.5 + 3/5 = 1.1, so score 3
    // is NOT a neutral 1.0x. True neutrality sits at score 2.5. The formula
    // is kept as-is for compatibility.
    let result = calculate_scorecard(&input(dec!(1000000), uniform_scores(3))).unwrap();
    for analysis in result.criteria_analysis.values() {
        assert_eq!(analysis.factor, dec!(1.1));
    }
    assert_eq!(result.adjustment_factor, dec!(1.1));
}

#[test]
fn per_criterion_contribution_is_weight_times_factor() {
    let mut scores = uniform_scores(3);
    scores.insert(ScorecardCriterion::Team, 5);

    let result = calculate_scorecard(&input(dec!(2000000), scores)).unwrap();
    let team = &result.criteria_analysis[&ScorecardCriterion::Team];
    assert_eq!(team.score, 5);
    assert_eq!(team.weight, dec!(0.25));
    assert_eq!(team.factor, dec!(1.5));
    assert_eq!(team.contribution, dec!(0.375));

    let summed: Decimal = result
        .criteria_analysis
        .values()
        .map(|a| a.contribution)
        .sum();
    assert_eq!(summed, result.adjustment_factor);
}

#[test]
fn missing_criterion_is_rejected() {
    let mut scores = uniform_scores(4);
    scores.remove(&ScorecardCriterion::Legal);

    let err = calculate_scorecard(&input(dec!(1000000), scores)).unwrap_err();
    assert!(err.to_string().contains("Missing required criterion: legal"));
}

#[test]
fn out_of_range_scores_are_rejected() {
    let mut high = uniform_scores(3);
    high.insert(ScorecardCriterion::Product, 6);
    assert!(calculate_scorecard(&input(dec!(1000000), high)).is_err());

    let mut low = uniform_scores(3);
    low.insert(ScorecardCriterion::Product, -1);
    assert!(calculate_scorecard(&input(dec!(1000000), low)).is_err());
}

#[test]
fn non_positive_base_valuation_is_rejected() {
    assert!(calculate_scorecard(&input(Decimal::ZERO, uniform_scores(3))).is_err());
    assert!(calculate_scorecard(&input(dec!(-5), uniform_scores(3))).is_err());
}

#[test]
fn weights_are_renormalized_proportionally() {
    let scores = uniform_scores(4);

    // Default weights, scaled by 2: must behave identically after
    // renormalization.
    let doubled: HashMap<ScorecardCriterion, Decimal> = ScorecardCriterion::ALL
        .iter()
        .map(|c| (*c, c.default_weight() * dec!(2)))
        .collect();

    let with_default = calculate_scorecard(&input(dec!(1000000), scores.clone())).unwrap();
    let with_doubled = calculate_scorecard(&ScorecardInput {
        base_valuation: dec!(1000000),
        criteria_scores: scores,
        criteria_weights: Some(doubled),
    })
    .unwrap();

    assert_eq!(with_default.adjustment_factor, with_doubled.adjustment_factor);
    assert_eq!(with_default.valuation, with_doubled.valuation);
}

#[test]
fn criterion_absent_from_custom_weights_contributes_zero() {
    let mut weights = HashMap::new();
    weights.insert(ScorecardCriterion::Team, dec!(0.6));
    weights.insert(ScorecardCriterion::Product, dec!(0.4));

    let result = calculate_scorecard(&ScorecardInput {
        base_valuation: dec!(1000000),
        criteria_scores: uniform_scores(5),
        criteria_weights: Some(weights),
    })
    .unwrap();

    assert_eq!(
        result.criteria_analysis[&ScorecardCriterion::Market].weight,
        Decimal::ZERO
    );
    assert_eq!(result.adjustment_factor, dec!(1.5));
}

#[test]
fn negative_custom_weight_is_rejected() {
    let mut weights: HashMap<ScorecardCriterion, Decimal> = ScorecardCriterion::ALL
        .iter()
        .map(|c| (*c, c.default_weight()))
        .collect();
    weights.insert(ScorecardCriterion::Legal, dec!(-0.1));

    let result = calculate_scorecard(&ScorecardInput {
        base_valuation: dec!(1000000),
        criteria_scores: uniform_scores(3),
        criteria_weights: Some(weights),
    });
    assert!(result.is_err());
}

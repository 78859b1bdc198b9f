use log::debug;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use std::collections::HashMap;

use crate::errors::{Result, ValidationError};
use crate::validation::{ensure_positive, ensure_score_in_range};

use super::{
    ScorecardCriterion, ScorecardCriterionAnalysis, ScorecardInput, ScorecardValuation,
};

/// Calculates a scorecard valuation against a comparable-company base.
///
/// Each score maps to a factor of `0.5 + score / 5` (score 0 halves the
/// weight's contribution, score 5 multiplies it by 1.5; the factor is 1.1
/// at score 3, not 1.0). The weighted factor sum becomes the overall
/// adjustment applied to the base valuation.
pub fn calculate_scorecard(input: &ScorecardInput) -> Result<ScorecardValuation> {
    ensure_positive(input.base_valuation, "Base valuation")?;

    for criterion in ScorecardCriterion::ALL {
        let score = *input
            .criteria_scores
            .get(&criterion)
            .ok_or_else(|| ValidationError::MissingCriterion(criterion.as_str().to_string()))?;
        ensure_score_in_range(criterion.as_str(), score)?;
    }

    let weights = resolve_weights(input.criteria_weights.as_ref())?;

    debug!(
        "Calculating scorecard valuation on base {} over {} criteria",
        input.base_valuation,
        ScorecardCriterion::ALL.len()
    );

    let mut adjustment_factor = Decimal::ZERO;
    let mut criteria_analysis = HashMap::with_capacity(ScorecardCriterion::ALL.len());

    for criterion in ScorecardCriterion::ALL {
        let score = input.criteria_scores.get(&criterion).copied().unwrap_or(0);
        let weight = weights.get(&criterion).copied().unwrap_or(Decimal::ZERO);
        let factor = dec!(0.5) + Decimal::from(score) / dec!(5);
        let contribution = weight * factor;
        adjustment_factor += contribution;

        criteria_analysis.insert(
            criterion,
            ScorecardCriterionAnalysis {
                score,
                weight,
                factor,
                contribution,
            },
        );
    }

    Ok(ScorecardValuation {
        valuation: input.base_valuation * adjustment_factor,
        base_valuation: input.base_valuation,
        adjustment_factor,
        criteria_analysis,
    })
}

/// Resolves the weight set: caller-supplied weights renormalized to sum 1,
/// or the default weights when none are supplied. A criterion absent from a
/// custom weight map gets weight zero.
fn resolve_weights(
    custom: Option<&HashMap<ScorecardCriterion, Decimal>>,
) -> Result<HashMap<ScorecardCriterion, Decimal>> {
    let mut weights: HashMap<ScorecardCriterion, Decimal> = match custom {
        Some(supplied) => supplied.clone(),
        None => ScorecardCriterion::ALL
            .iter()
            .map(|c| (*c, c.default_weight()))
            .collect(),
    };

    for (criterion, weight) in &weights {
        if *weight < Decimal::ZERO {
            return Err(ValidationError::InvalidInput(format!(
                "Weight for {} cannot be negative",
                criterion
            ))
            .into());
        }
    }

    let total: Decimal = weights.values().copied().sum();
    if total <= Decimal::ZERO {
        return Err(ValidationError::InvalidInput(
            "Criteria weights must sum to a positive value".to_string(),
        )
        .into());
    }

    if total != Decimal::ONE {
        for weight in weights.values_mut() {
            *weight /= total;
        }
    }

    Ok(weights)
}

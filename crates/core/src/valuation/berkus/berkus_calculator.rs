use log::debug;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use std::collections::HashMap;

use crate::constants::BERKUS_MAX_VALUE_PER_CRITERION;
use crate::errors::{Result, ValidationError};
use crate::validation::ensure_score_in_range;

use super::{BerkusCriterion, BerkusCriterionValue, BerkusInput, BerkusValuation};

/// Calculates a Berkus valuation for a pre-revenue startup.
///
/// Each criterion independently contributes `score / 5 * 500 000`; there is
/// no weighting across criteria. The maximum achievable valuation is
/// 2 500 000.
pub fn calculate_berkus(input: &BerkusInput) -> Result<BerkusValuation> {
    for criterion in BerkusCriterion::ALL {
        let score = *input
            .criteria_scores
            .get(&criterion)
            .ok_or_else(|| ValidationError::MissingCriterion(criterion.as_str().to_string()))?;
        ensure_score_in_range(criterion.as_str(), score)?;
    }

    debug!(
        "Calculating Berkus valuation over {} criteria",
        BerkusCriterion::ALL.len()
    );

    let mut valuation = Decimal::ZERO;
    let mut breakdown = HashMap::with_capacity(BerkusCriterion::ALL.len());

    for criterion in BerkusCriterion::ALL {
        let score = input.criteria_scores.get(&criterion).copied().unwrap_or(0);
        let value = Decimal::from(score) / dec!(5) * BERKUS_MAX_VALUE_PER_CRITERION;
        valuation += value;

        breakdown.insert(
            criterion,
            BerkusCriterionValue {
                name: criterion.display_name().to_string(),
                score,
                value,
            },
        );
    }

    let max_possible =
        Decimal::from(BerkusCriterion::ALL.len() as i64) * BERKUS_MAX_VALUE_PER_CRITERION;

    Ok(BerkusValuation {
        valuation,
        max_possible,
        breakdown,
    })
}

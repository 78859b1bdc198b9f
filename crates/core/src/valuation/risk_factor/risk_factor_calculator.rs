use log::debug;
use rust_decimal::Decimal;
use std::collections::HashMap;

use crate::constants::{RISK_ADJUSTMENT_STEP, RISK_TOTAL_ADJUSTMENT_CAP};
use crate::errors::Result;
use crate::validation::{ensure_positive, ensure_rating_in_range};

use super::{RiskFactorAdjustment, RiskFactorInput, RiskFactorValuation};

/// Calculates a risk factor summation valuation.
///
/// Each rating step moves the valuation by 6.25% (±12.5% at the extremes).
/// The per-factor adjustments are summed first and the sum is then clamped
/// to ±50%; with more than four factors at an extreme rating the clamp, not
/// the per-factor step, is the binding constraint.
pub fn calculate_risk_factor(input: &RiskFactorInput) -> Result<RiskFactorValuation> {
    ensure_positive(input.base_valuation, "Base valuation")?;

    for (factor, rating) in &input.risk_factors {
        ensure_rating_in_range(factor.as_str(), *rating)?;
    }

    debug!(
        "Calculating risk factor valuation on base {} over {} rated factors",
        input.base_valuation,
        input.risk_factors.len()
    );

    let mut total_adjustment = Decimal::ZERO;
    let mut risk_analysis = HashMap::with_capacity(input.risk_factors.len());

    for (factor, rating) in &input.risk_factors {
        let adjustment = Decimal::from(*rating) * RISK_ADJUSTMENT_STEP;
        total_adjustment += adjustment;

        risk_analysis.insert(
            *factor,
            RiskFactorAdjustment {
                name: factor.display_name().to_string(),
                rating: *rating,
                adjustment,
            },
        );
    }

    // Clamp after summation; order matters for the ±50% ceiling.
    let total_adjustment =
        total_adjustment.clamp(-RISK_TOTAL_ADJUSTMENT_CAP, RISK_TOTAL_ADJUSTMENT_CAP);

    Ok(RiskFactorValuation {
        valuation: input.base_valuation * (Decimal::ONE + total_adjustment),
        base_valuation: input.base_valuation,
        total_adjustment,
        risk_analysis,
    })
}

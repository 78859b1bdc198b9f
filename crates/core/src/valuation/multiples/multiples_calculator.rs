use log::debug;
use rust_decimal::Decimal;

use crate::errors::Result;
use crate::validation::{ensure_non_negative, ensure_positive};

use super::{MultiplesInput, MultiplesValuation};

/// Calculates a market multiples valuation: `metric_value * multiple`.
///
/// A zero metric is valid (pre-revenue company) and values to zero
/// regardless of the multiple.
pub fn calculate_multiples(input: &MultiplesInput) -> Result<MultiplesValuation> {
    ensure_non_negative(input.metric_value, "Financial metric")?;
    ensure_positive(input.multiple, "Multiple")?;

    debug!(
        "Calculating {} multiples valuation: {} x {}",
        input.metric_type, input.metric_value, input.multiple
    );

    let valuation: Decimal = input.metric_value * input.multiple;

    Ok(MultiplesValuation {
        valuation,
        metric: input.metric_value,
        multiple: input.multiple,
        metric_type: input.metric_type.clone(),
    })
}

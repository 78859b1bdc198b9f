use log::debug;
use rust_decimal::Decimal;
use rust_decimal::MathematicalOps;

use crate::errors::{Result, ValidationError};
use crate::utils::safe_divide;
use crate::validation::{ensure_non_negative, ensure_positive};

use super::{VcMethodInput, VcMethodValuation};

/// Calculates a venture capital method valuation.
///
/// The expected exit value (`revenue * exit multiple`) is discounted back at
/// the investor's required return. When an investment amount is supplied,
/// the ownership stake and pre/post-money valuations are derived from the
/// present value.
pub fn calculate_vc_method(input: &VcMethodInput) -> Result<VcMethodValuation> {
    ensure_positive(input.expected_revenue, "Expected revenue")?;
    ensure_positive(input.exit_multiple, "Exit multiple")?;
    ensure_positive(input.required_return, "Required return")?;
    if input.years_to_exit == 0 {
        return Err(
            ValidationError::InvalidInput("Years to exit must be positive".to_string()).into(),
        );
    }
    if let Some(investment) = input.investment_needed {
        ensure_non_negative(investment, "Investment amount")?;
    }

    debug!(
        "Calculating VC method valuation: exit in {} years at required return {}",
        input.years_to_exit, input.required_return
    );

    let exit_value = input.expected_revenue * input.exit_multiple;
    let present_value =
        exit_value / (Decimal::ONE + input.required_return).powi(input.years_to_exit as i64);

    let (expected_return_multiple, annualized_return) = if present_value > Decimal::ZERO {
        let return_multiple = exit_value / present_value;
        let exponent = Decimal::ONE / Decimal::from(input.years_to_exit);
        (return_multiple, return_multiple.powd(exponent) - Decimal::ONE)
    } else {
        (Decimal::ZERO, Decimal::ZERO)
    };

    let mut result = VcMethodValuation {
        exit_value,
        present_value,
        expected_return_multiple,
        annualized_return,
        ownership_percentage: None,
        pre_money_valuation: None,
        post_money_valuation: None,
        investment_needed: None,
    };

    if let Some(investment) = input.investment_needed {
        result.ownership_percentage =
            Some(safe_divide(investment, present_value, Decimal::ZERO));
        result.pre_money_valuation = Some(present_value - investment);
        result.post_money_valuation = Some(present_value);
        result.investment_needed = Some(investment);
    }

    Ok(result)
}

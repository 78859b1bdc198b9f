use log::debug;
use rust_decimal::Decimal;
use rust_decimal::MathematicalOps;

use crate::constants::MAX_TERMINAL_GROWTH;
use crate::errors::{Result, ValidationError};

use super::{DcfInput, DcfValuation};

/// Calculates a discounted cash flow valuation.
///
/// Each projected cash flow is discounted at `(1 + discount_rate)^year`
/// (year is 1-based). The terminal value applies the Gordon-growth formula
/// to the last projected flow and is discounted back over the full
/// projection horizon.
pub fn calculate_dcf(input: &DcfInput) -> Result<DcfValuation> {
    validate_dcf_inputs(input)?;

    debug!(
        "Calculating DCF valuation over {} years at discount rate {}",
        input.cash_flows.len(),
        input.discount_rate
    );

    let discount_base = Decimal::ONE + input.discount_rate;

    let mut operating_value = Decimal::ZERO;
    let mut discounted_flows = Vec::with_capacity(input.cash_flows.len());
    for (index, cash_flow) in input.cash_flows.iter().enumerate() {
        let year = (index + 1) as i64;
        let discounted = cash_flow / discount_base.powi(year);
        operating_value += discounted;
        discounted_flows.push(discounted);
    }

    let last_cash_flow = *input
        .cash_flows
        .last()
        .ok_or_else(|| ValidationError::InvalidInput("Cash flows are required".to_string()))?;

    let horizon = input.cash_flows.len() as i64;
    let terminal_cf = last_cash_flow * (Decimal::ONE + input.terminal_growth);
    let terminal_value = terminal_cf / (input.discount_rate - input.terminal_growth);
    let terminal_pv = terminal_value / discount_base.powi(horizon);

    Ok(DcfValuation {
        valuation: operating_value + terminal_pv,
        operating_value,
        terminal_pv,
        discounted_flows,
        discount_rate: input.discount_rate,
        terminal_growth: input.terminal_growth,
    })
}

fn validate_dcf_inputs(input: &DcfInput) -> Result<()> {
    if input.cash_flows.is_empty() {
        return Err(ValidationError::InvalidInput("Cash flows are required".to_string()).into());
    }

    if input.cash_flows.iter().any(|cf| *cf < Decimal::ZERO) {
        return Err(
            ValidationError::InvalidInput("Cash flows cannot be negative".to_string()).into(),
        );
    }

    if input.discount_rate <= Decimal::ZERO {
        return Err(
            ValidationError::InvalidInput("Discount rate must be positive".to_string()).into(),
        );
    }

    // The terminal-value denominator is `discount_rate - terminal_growth`;
    // this check keeps it strictly positive.
    if input.discount_rate <= input.terminal_growth {
        return Err(ValidationError::InvalidInput(
            "Discount rate must be higher than terminal growth rate".to_string(),
        )
        .into());
    }

    if input.terminal_growth < Decimal::ZERO {
        return Err(ValidationError::InvalidInput(
            "Terminal growth rate cannot be negative".to_string(),
        )
        .into());
    }

    if input.terminal_growth > MAX_TERMINAL_GROWTH {
        return Err(ValidationError::OutOfRange(
            "Terminal growth rate seems unrealistically high (>10%)".to_string(),
        )
        .into());
    }

    Ok(())
}

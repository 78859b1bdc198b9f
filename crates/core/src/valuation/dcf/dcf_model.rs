use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Inputs for a discounted cash flow valuation.
///
/// `cash_flows` holds one projected amount per year, ordered from year 1.
/// Rates are fractional (0.12 = 12%).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DcfInput {
    pub cash_flows: Vec<Decimal>,
    pub discount_rate: Decimal,
    pub terminal_growth: Decimal,
}

/// Result of a DCF valuation.
///
/// `valuation` is always `operating_value + terminal_pv`. The per-year
/// `discounted_flows` sequence is carried for display and export.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DcfValuation {
    pub valuation: Decimal,
    pub operating_value: Decimal,
    pub terminal_pv: Decimal,
    pub discounted_flows: Vec<Decimal>,
    pub discount_rate: Decimal,
    pub terminal_growth: Decimal,
}

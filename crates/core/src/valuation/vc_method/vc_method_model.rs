use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Inputs for a venture capital method valuation.
///
/// `investment_needed` is optional; when present the result additionally
/// carries ownership and pre/post-money figures.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VcMethodInput {
    pub expected_revenue: Decimal,
    pub exit_multiple: Decimal,
    pub required_return: Decimal,
    pub years_to_exit: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub investment_needed: Option<Decimal>,
}

/// Result of a venture capital method valuation.
///
/// The investment-related fields are only populated when
/// `investment_needed` was supplied.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VcMethodValuation {
    pub exit_value: Decimal,
    pub present_value: Decimal,
    pub expected_return_multiple: Decimal,
    pub annualized_return: Decimal,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ownership_percentage: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pre_money_valuation: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub post_money_valuation: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub investment_needed: Option<Decimal>,
}

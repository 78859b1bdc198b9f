use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// Qualitative criteria scored by the scorecard method.
///
/// The full set is required on every call; there is no partial-credit
/// convention.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScorecardCriterion {
    Team,
    Product,
    Market,
    Competition,
    Financial,
    Legal,
}

impl ScorecardCriterion {
    pub const ALL: [ScorecardCriterion; 6] = [
        ScorecardCriterion::Team,
        ScorecardCriterion::Product,
        ScorecardCriterion::Market,
        ScorecardCriterion::Competition,
        ScorecardCriterion::Financial,
        ScorecardCriterion::Legal,
    ];

    pub const fn as_str(&self) -> &'static str {
        match self {
            ScorecardCriterion::Team => "team",
            ScorecardCriterion::Product => "product",
            ScorecardCriterion::Market => "market",
            ScorecardCriterion::Competition => "competition",
            ScorecardCriterion::Financial => "financial",
            ScorecardCriterion::Legal => "legal",
        }
    }

    pub const fn display_name(&self) -> &'static str {
        match self {
            ScorecardCriterion::Team => "Management Team Quality",
            ScorecardCriterion::Product => "Product/Technology",
            ScorecardCriterion::Market => "Market Opportunity",
            ScorecardCriterion::Competition => "Competitive Advantage",
            ScorecardCriterion::Financial => "Financial Performance",
            ScorecardCriterion::Legal => "Legal/IP Protection",
        }
    }

    /// Standard weight applied when the caller supplies none.
    pub const fn default_weight(&self) -> Decimal {
        match self {
            ScorecardCriterion::Team => dec!(0.25),
            ScorecardCriterion::Product => dec!(0.20),
            ScorecardCriterion::Market => dec!(0.20),
            ScorecardCriterion::Competition => dec!(0.15),
            ScorecardCriterion::Financial => dec!(0.10),
            ScorecardCriterion::Legal => dec!(0.10),
        }
    }
}

impl fmt::Display for ScorecardCriterion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Inputs for a scorecard valuation.
///
/// `criteria_weights` is optional; when omitted the default weight set is
/// used. Supplied weights are renormalized proportionally whenever they do
/// not sum to 1.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScorecardInput {
    pub base_valuation: Decimal,
    pub criteria_scores: HashMap<ScorecardCriterion, i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub criteria_weights: Option<HashMap<ScorecardCriterion, Decimal>>,
}

/// Per-criterion contribution to the scorecard adjustment.
///
/// `factor` maps the 0-5 score onto 0.5x-1.5x; `contribution` is
/// `weight * factor`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScorecardCriterionAnalysis {
    pub score: i32,
    pub weight: Decimal,
    pub factor: Decimal,
    pub contribution: Decimal,
}

/// Result of a scorecard valuation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScorecardValuation {
    pub valuation: Decimal,
    pub base_valuation: Decimal,
    pub adjustment_factor: Decimal,
    pub criteria_analysis: HashMap<ScorecardCriterion, ScorecardCriterionAnalysis>,
}

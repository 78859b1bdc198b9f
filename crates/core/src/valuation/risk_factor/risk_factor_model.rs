use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// The twelve standard risk factor summation categories.
///
/// Callers may rate any subset; an unrated category contributes no
/// adjustment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RiskFactorCategory {
    Management,
    Stage,
    Legislation,
    Manufacturing,
    Sales,
    Funding,
    Competition,
    Technology,
    Litigation,
    International,
    Reputation,
    Exit,
}

impl RiskFactorCategory {
    pub const ALL: [RiskFactorCategory; 12] = [
        RiskFactorCategory::Management,
        RiskFactorCategory::Stage,
        RiskFactorCategory::Legislation,
        RiskFactorCategory::Manufacturing,
        RiskFactorCategory::Sales,
        RiskFactorCategory::Funding,
        RiskFactorCategory::Competition,
        RiskFactorCategory::Technology,
        RiskFactorCategory::Litigation,
        RiskFactorCategory::International,
        RiskFactorCategory::Reputation,
        RiskFactorCategory::Exit,
    ];

    pub const fn as_str(&self) -> &'static str {
        match self {
            RiskFactorCategory::Management => "management",
            RiskFactorCategory::Stage => "stage",
            RiskFactorCategory::Legislation => "legislation",
            RiskFactorCategory::Manufacturing => "manufacturing",
            RiskFactorCategory::Sales => "sales",
            RiskFactorCategory::Funding => "funding",
            RiskFactorCategory::Competition => "competition",
            RiskFactorCategory::Technology => "technology",
            RiskFactorCategory::Litigation => "litigation",
            RiskFactorCategory::International => "international",
            RiskFactorCategory::Reputation => "reputation",
            RiskFactorCategory::Exit => "exit",
        }
    }

    pub const fn display_name(&self) -> &'static str {
        match self {
            RiskFactorCategory::Management => "Management Team Risk",
            RiskFactorCategory::Stage => "Development Stage Risk",
            RiskFactorCategory::Legislation => "Legislative/Political Risk",
            RiskFactorCategory::Manufacturing => "Manufacturing Risk",
            RiskFactorCategory::Sales => "Sales/Marketing Risk",
            RiskFactorCategory::Funding => "Funding/Capital Risk",
            RiskFactorCategory::Competition => "Competition Risk",
            RiskFactorCategory::Technology => "Technology Risk",
            RiskFactorCategory::Litigation => "Litigation Risk",
            RiskFactorCategory::International => "International Risk",
            RiskFactorCategory::Reputation => "Reputation Risk",
            RiskFactorCategory::Exit => "Exit Strategy Risk",
        }
    }
}

impl fmt::Display for RiskFactorCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Inputs for a risk factor summation valuation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RiskFactorInput {
    pub base_valuation: Decimal,
    pub risk_factors: HashMap<RiskFactorCategory, i32>,
}

/// Per-factor adjustment detail; `adjustment` is pre-clamp.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RiskFactorAdjustment {
    pub name: String,
    pub rating: i32,
    pub adjustment: Decimal,
}

/// Result of a risk factor summation valuation.
///
/// `total_adjustment` is the post-clamp figure actually applied to the
/// base valuation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RiskFactorValuation {
    pub valuation: Decimal,
    pub base_valuation: Decimal,
    pub total_adjustment: Decimal,
    pub risk_analysis: HashMap<RiskFactorCategory, RiskFactorAdjustment>,
}

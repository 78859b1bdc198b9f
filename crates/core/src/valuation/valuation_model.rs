use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifies one of the six supported valuation methods.
///
/// History records and exporters key on this enum; the string forms are
/// stable and must not change between releases.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ValuationMethod {
    Dcf,
    MarketMultiples,
    Scorecard,
    Berkus,
    RiskFactorSummation,
    VcMethod,
}

impl ValuationMethod {
    pub const ALL: [ValuationMethod; 6] = [
        ValuationMethod::Dcf,
        ValuationMethod::MarketMultiples,
        ValuationMethod::Scorecard,
        ValuationMethod::Berkus,
        ValuationMethod::RiskFactorSummation,
        ValuationMethod::VcMethod,
    ];

    /// Short identifier used in history records and export rows.
    pub const fn as_str(&self) -> &'static str {
        match self {
            ValuationMethod::Dcf => "DCF",
            ValuationMethod::MarketMultiples => "Market Multiples",
            ValuationMethod::Scorecard => "Scorecard",
            ValuationMethod::Berkus => "Berkus",
            ValuationMethod::RiskFactorSummation => "Risk Factor Summation",
            ValuationMethod::VcMethod => "VC Method",
        }
    }

    /// Full human-readable method name for report headings.
    pub const fn display_name(&self) -> &'static str {
        match self {
            ValuationMethod::Dcf => "Discounted Cash Flow",
            ValuationMethod::MarketMultiples => "Market Multiples",
            ValuationMethod::Scorecard => "Scorecard Method",
            ValuationMethod::Berkus => "Berkus Method",
            ValuationMethod::RiskFactorSummation => "Risk Factor Summation",
            ValuationMethod::VcMethod => "Venture Capital Method",
        }
    }
}

impl fmt::Display for ValuationMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Financial metric the multiple is applied to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MetricType {
    Revenue,
    #[serde(rename = "EBITDA")]
    Ebitda,
}

impl MetricType {
    pub const fn as_str(&self) -> &'static str {
        match self {
            MetricType::Revenue => "Revenue",
            MetricType::Ebitda => "EBITDA",
        }
    }
}

impl fmt::Display for MetricType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Inputs for a market multiples valuation.
///
/// `metric_type` is a free label; `MetricType::as_str()` supplies the
/// conventional "Revenue"/"EBITDA" values used by the sector benchmarks.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MultiplesInput {
    pub metric_value: Decimal,
    pub multiple: Decimal,
    pub metric_type: String,
}

/// Result of a market multiples valuation, echoing its inputs for display.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MultiplesValuation {
    pub valuation: Decimal,
    pub metric: Decimal,
    pub multiple: Decimal,
    pub metric_type: String,
}

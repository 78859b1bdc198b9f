use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::Serialize;
use std::fmt;

use valuator_core::utils::summary_stats;

use crate::errors::{ExportError, Result};
use crate::history::CalculationRecord;

/// Supported serialization formats for calculation history.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Csv,
    Json,
    Xml,
    Txt,
}

impl ExportFormat {
    pub const ALL: [ExportFormat; 4] = [
        ExportFormat::Csv,
        ExportFormat::Json,
        ExportFormat::Xml,
        ExportFormat::Txt,
    ];

    /// File extension without the dot.
    pub const fn extension(&self) -> &'static str {
        match self {
            ExportFormat::Csv => "csv",
            ExportFormat::Json => "json",
            ExportFormat::Xml => "xml",
            ExportFormat::Txt => "txt",
        }
    }

    /// Parses a format from a file extension or format label.
    pub fn parse(value: &str) -> Result<Self> {
        match value.to_ascii_lowercase().as_str() {
            "csv" => Ok(ExportFormat::Csv),
            "json" => Ok(ExportFormat::Json),
            "xml" => Ok(ExportFormat::Xml),
            "txt" | "text" => Ok(ExportFormat::Txt),
            other => Err(ExportError::UnsupportedFormat(other.to_string())),
        }
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

/// Top-level JSON export document.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportEnvelope<'a> {
    pub export_timestamp: DateTime<Utc>,
    pub total_calculations: usize,
    pub calculations: &'a [CalculationRecord],
    pub summary: ExportSummary,
}

/// Aggregate view over the exported records.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportSummary {
    pub methods_used: Vec<String>,
    pub date_range: DateRange,
    pub valuation_range: ValuationRange,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DateRange {
    pub earliest: Option<DateTime<Utc>>,
    pub latest: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ValuationRange {
    pub min: Decimal,
    pub max: Decimal,
    pub average: Decimal,
}

/// Builds the summary block for a set of records.
pub fn build_summary(records: &[CalculationRecord]) -> ExportSummary {
    let mut methods_used: Vec<String> = Vec::new();
    for record in records {
        let name = record.method.as_str().to_string();
        if !methods_used.contains(&name) {
            methods_used.push(name);
        }
    }

    let valuations: Vec<Decimal> = records.iter().map(|r| r.valuation).collect();
    let stats = summary_stats(&valuations);

    ExportSummary {
        methods_used,
        date_range: DateRange {
            earliest: records.iter().map(|r| r.timestamp).min(),
            latest: records.iter().map(|r| r.timestamp).max(),
        },
        valuation_range: ValuationRange {
            min: stats.min,
            max: stats.max,
            average: stats.mean,
        },
    }
}

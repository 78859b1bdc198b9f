use chrono::Utc;

use valuator_core::utils::format_currency;

use crate::errors::Result;
use crate::history::CalculationRecord;

use super::build_summary;

/// Serializes history records as a human-readable plain-text report.
pub fn export_txt(records: &[CalculationRecord]) -> Result<Vec<u8>> {
    let mut report = String::new();

    report.push_str("STARTUP VALUATION CALCULATOR - CALCULATION EXPORT\n");
    report.push_str("=================================================\n");
    report.push_str(&format!("Generated: {}\n", Utc::now().to_rfc3339()));
    report.push_str(&format!("Total calculations: {}\n\n", records.len()));

    for (index, record) in records.iter().enumerate() {
        report.push_str(&format!(
            "{}. {}\n",
            index + 1,
            record.method.display_name()
        ));
        report.push_str(&format!("   Date: {}\n", record.timestamp.to_rfc3339()));
        report.push_str(&format!(
            "   Valuation: {}\n\n",
            format_currency(record.valuation, 2)
        ));
    }

    if !records.is_empty() {
        let summary = build_summary(records);
        report.push_str("SUMMARY\n");
        report.push_str("-------\n");
        report.push_str(&format!(
            "Methods used: {}\n",
            summary.methods_used.join(", ")
        ));
        report.push_str(&format!(
            "Lowest valuation:  {}\n",
            format_currency(summary.valuation_range.min, 2)
        ));
        report.push_str(&format!(
            "Highest valuation: {}\n",
            format_currency(summary.valuation_range.max, 2)
        ));
        report.push_str(&format!(
            "Average valuation: {}\n",
            format_currency(summary.valuation_range.average, 2)
        ));
    }

    Ok(report.into_bytes())
}

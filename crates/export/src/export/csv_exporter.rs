use crate::errors::{ExportError, Result};
use crate::history::CalculationRecord;

/// Serializes history records as CSV with one row per calculation.
///
/// The `inputs` and `result` columns carry the full JSON payloads so no
/// method-specific detail is lost in the flat format.
pub fn export_csv(records: &[CalculationRecord]) -> Result<Vec<u8>> {
    let mut writer = csv::Writer::from_writer(Vec::new());

    writer.write_record(["timestamp", "method", "valuation", "inputs", "result"])?;
    for record in records {
        writer.write_record([
            record.timestamp.to_rfc3339(),
            record.method.as_str().to_string(),
            record.valuation.normalize().to_string(),
            record.inputs.to_string(),
            record.result.to_string(),
        ])?;
    }

    writer
        .into_inner()
        .map_err(|e| ExportError::Io(e.into_error()))
}

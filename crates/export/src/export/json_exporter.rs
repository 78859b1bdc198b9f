use chrono::Utc;

use crate::errors::Result;
use crate::history::CalculationRecord;

use super::{build_summary, ExportEnvelope};

/// Serializes history records as a pretty-printed JSON document with an
/// aggregate summary block.
pub fn export_json(records: &[CalculationRecord]) -> Result<Vec<u8>> {
    let envelope = ExportEnvelope {
        export_timestamp: Utc::now(),
        total_calculations: records.len(),
        calculations: records,
        summary: build_summary(records),
    };

    Ok(serde_json::to_vec_pretty(&envelope)?)
}

use log::debug;

use crate::errors::Result;
use crate::history::CalculationRecord;

use super::csv_exporter::export_csv;
use super::json_exporter::export_json;
use super::text_exporter::export_txt;
use super::xml_exporter::export_xml;
use super::ExportFormat;

/// Serializes calculation history into any supported format.
pub trait ExportServiceTrait: Send + Sync {
    /// Renders `records` in `format`, returning the document bytes.
    fn export(&self, records: &[CalculationRecord], format: ExportFormat) -> Result<Vec<u8>>;
}

/// Stateless export dispatcher.
#[derive(Debug, Clone, Copy, Default)]
pub struct ExportService;

impl ExportService {
    pub fn new() -> Self {
        ExportService
    }
}

impl ExportServiceTrait for ExportService {
    fn export(&self, records: &[CalculationRecord], format: ExportFormat) -> Result<Vec<u8>> {
        debug!(
            "Exporting {} calculation records as {}",
            records.len(),
            format
        );

        match format {
            ExportFormat::Csv => export_csv(records),
            ExportFormat::Json => export_json(records),
            ExportFormat::Xml => export_xml(records),
            ExportFormat::Txt => export_txt(records),
        }
    }
}

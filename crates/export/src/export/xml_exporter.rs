//! XML serialization for history records.
//!
//! The document is written by hand: the schema is flat and fixed, and no
//! XML crate is in the dependency tree.

use chrono::Utc;

use crate::errors::Result;
use crate::history::CalculationRecord;

/// Serializes history records as an XML document.
pub fn export_xml(records: &[CalculationRecord]) -> Result<Vec<u8>> {
    let mut doc = String::from("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n");

    doc.push_str(&format!(
        "<valuationExport exportTimestamp=\"{}\" totalCalculations=\"{}\">\n",
        escape_xml(&Utc::now().to_rfc3339()),
        records.len()
    ));

    for record in records {
        doc.push_str(&format!(
            "  <calculation method=\"{}\" timestamp=\"{}\">\n",
            escape_xml(record.method.as_str()),
            escape_xml(&record.timestamp.to_rfc3339())
        ));
        doc.push_str(&format!(
            "    <valuation>{}</valuation>\n",
            record.valuation.normalize()
        ));
        doc.push_str(&format!(
            "    <inputs>{}</inputs>\n",
            escape_xml(&record.inputs.to_string())
        ));
        doc.push_str(&format!(
            "    <result>{}</result>\n",
            escape_xml(&record.result.to_string())
        ));
        doc.push_str("  </calculation>\n");
    }

    doc.push_str("</valuationExport>\n");
    Ok(doc.into_bytes())
}

/// Escapes the five XML-reserved characters.
fn escape_xml(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&apos;"),
            other => escaped.push(other),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escaping_covers_reserved_characters() {
        assert_eq!(
            escape_xml(r#"<a & "b">'c'"#),
            "&lt;a &amp; &quot;b&quot;&gt;&apos;c&apos;"
        );
        assert_eq!(escape_xml("plain"), "plain");
    }
}

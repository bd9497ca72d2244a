//! Ledger Exporter
//!
//! Tabular text export of journey records for spreadsheet analysis.

use std::io::Write;
use std::path::Path;

use crate::logic::journey::JourneyRecord;

pub const CSV_HEADER: &str =
    "Batch_ID,Food_Name,Stage,Temperature,Humidity,CO2_Level,Gas_Reading,Freshness_Status,Timestamp,record_marker";

/// Render records as CSV, header first, one line per record
pub fn to_csv<'a>(records: impl IntoIterator<Item = &'a JourneyRecord>) -> String {
    let mut csv = String::from(CSV_HEADER);
    csv.push('\n');

    for record in records {
        csv.push_str(&format!(
            "{},{},{},{},{},{},{},{},{},{}\n",
            escape(&record.batch_id),
            escape(&record.food_name),
            record.stage.as_str(),
            format_number(record.temperature),
            format_number(record.humidity),
            format_number(record.co2_level),
            format_number(record.gas_reading),
            record.freshness_status.as_str(),
            record.timestamp_string(),
            record.record_marker,
        ));
    }

    csv
}

/// Export records to a CSV file, returning how many were written
pub fn write_csv(records: &[JourneyRecord], destination: &Path) -> std::io::Result<usize> {
    let mut file = std::fs::File::create(destination)?;
    file.write_all(to_csv(records).as_bytes())?;
    file.flush()?;

    log::info!("Exported {} ledger records to {}", records.len(), destination.display());
    Ok(records.len())
}

/// Quote a text field only when it needs it
fn escape(field: &str) -> String {
    if field.contains(|c: char| matches!(c, ',' | '"' | '\n' | '\r')) {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}

/// Shortest form, but whole numbers keep one decimal ("60.0")
fn format_number(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{:.1}", value)
    } else {
        format!("{}", value)
    }
}

//! External tabular representation of keystroke records
//!
//! Converts completed records into the human-readable rows consumed by
//! the reporting side: fixed 3-decimal second values with a unit suffix,
//! and an explicit sentinel where a record has no predecessor. Purely
//! functional; exporting the same records twice yields identical rows.

use crate::engine::KeystrokeRecord;
use serde::{Deserialize, Serialize};

/// Column header matching the exported row order.
pub const CSV_HEADER: &str = "Key,PressTime,HoldTime,InterKeyTime,ReleaseToPressTime";

/// Sentinel for intervals without a predecessor event.
pub const NO_PREDECESSOR: &str = "--- (first key)";

/// One formatted row of the exported table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExportedRecord {
    pub key: String,
    pub press_time: String,
    pub hold_time: String,
    pub inter_key_time: String,
    pub release_to_press_time: String,
}

fn format_secs(value: f64) -> String {
    format!("{:.3} sec", value)
}

fn format_interval(value: Option<f64>) -> String {
    value.map(format_secs).unwrap_or_else(|| NO_PREDECESSOR.to_string())
}

/// Convert records to exported rows, preserving order and length.
///
/// Callers are expected to pass completed records; a record that somehow
/// lacks a hold time renders an empty `HoldTime` field rather than a
/// fabricated duration.
pub fn export(records: &[KeystrokeRecord]) -> Vec<ExportedRecord> {
    records
        .iter()
        .map(|record| ExportedRecord {
            key: record.key.identifier(),
            press_time: format_secs(record.press_time),
            hold_time: record.hold_time.map(format_secs).unwrap_or_default(),
            inter_key_time: format_interval(record.inter_press_time),
            release_to_press_time: format_interval(record.release_to_press_time),
        })
        .collect()
}

fn csv_field(value: &str) -> String {
    if value.contains(',') || value.contains('"') {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_string()
    }
}

/// Render exported rows as a CSV table with the fixed column order
/// `Key, PressTime, HoldTime, InterKeyTime, ReleaseToPressTime`.
pub fn to_csv(rows: &[ExportedRecord]) -> String {
    let mut csv = String::from(CSV_HEADER);
    csv.push('\n');
    for row in rows {
        csv.push_str(&format!(
            "{},{},{},{},{}\n",
            csv_field(&row.key),
            csv_field(&row.press_time),
            csv_field(&row.hold_time),
            csv_field(&row.inter_key_time),
            csv_field(&row.release_to_press_time),
        ));
    }
    csv
}

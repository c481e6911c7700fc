//! Session report and export functionality

use crate::engine::KeystrokeRecord;
use crate::export::{self, ExportedRecord};
use crate::stats::SessionStats;
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::fs::File;
use std::io::{self, Write};
use std::path::Path;
use thiserror::Error;

/// Error type for report export operations.
#[derive(Debug, Error)]
pub enum ReportError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
    #[error("serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Complete session report: metadata, summary statistics, and the
/// formatted keystroke table.
#[derive(Debug, Clone, Serialize)]
pub struct SessionReport {
    pub metadata: ReportMetadata,
    pub stats: SessionStats,
    pub records: Vec<ExportedRecord>,
}

/// Report metadata
#[derive(Debug, Clone, Serialize)]
pub struct ReportMetadata {
    /// Report generation timestamp
    pub generated_at: String,
    /// Application version
    pub version: String,
    /// Session duration in seconds
    pub duration_secs: f64,
}

impl SessionReport {
    /// Build a report from completed records and the session duration.
    pub fn new(records: &[KeystrokeRecord], duration_secs: f64) -> Self {
        let now: DateTime<Utc> = Utc::now();
        Self {
            metadata: ReportMetadata {
                generated_at: now.to_rfc3339(),
                version: env!("CARGO_PKG_VERSION").to_string(),
                duration_secs,
            },
            stats: SessionStats::from_records(records),
            records: export::export(records),
        }
    }

    /// Render the report as pretty-printed JSON.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Write the JSON report to a file.
    pub fn export_json(&self, path: &Path) -> Result<(), ReportError> {
        let json = self.to_json()?;
        let mut file = File::create(path)?;
        file.write_all(json.as_bytes())?;
        Ok(())
    }

    /// Render the keystroke table as CSV.
    pub fn to_csv(&self) -> String {
        export::to_csv(&self.records)
    }

    /// Write the CSV table to a file.
    pub fn export_csv(&self, path: &Path) -> Result<(), ReportError> {
        let mut file = File::create(path)?;
        file.write_all(self.to_csv().as_bytes())?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::keyboard::Key;

    fn sample_records() -> Vec<KeystrokeRecord> {
        vec![
            KeystrokeRecord {
                key: Key::Char('a'),
                press_time: 0.0,
                hold_time: Some(0.15),
                inter_press_time: None,
                release_to_press_time: None,
            },
            KeystrokeRecord {
                key: Key::Char('b'),
                press_time: 0.05,
                hold_time: Some(0.20),
                inter_press_time: Some(0.05),
                release_to_press_time: Some(0.02),
            },
        ]
    }

    #[test]
    fn report_carries_metadata_and_stats() {
        let report = SessionReport::new(&sample_records(), 1.5);
        assert!(!report.metadata.generated_at.is_empty());
        assert!(!report.metadata.version.is_empty());
        assert_eq!(report.metadata.duration_secs, 1.5);
        assert_eq!(report.stats.keystrokes, 2);
        assert_eq!(report.records.len(), 2);
    }

    #[test]
    fn json_roundtrip_contains_sections() {
        let report = SessionReport::new(&sample_records(), 1.5);
        let json = report.to_json().expect("JSON serialization failed");
        assert!(json.contains("\"metadata\""));
        assert!(json.contains("\"stats\""));
        assert!(json.contains("\"records\""));
        assert!(json.contains("\"hold_time\""));
    }

    #[test]
    fn csv_table_uses_fixed_header() {
        let report = SessionReport::new(&sample_records(), 1.5);
        let csv = report.to_csv();
        assert!(csv.starts_with("Key,PressTime,HoldTime,InterKeyTime,ReleaseToPressTime"));
        assert_eq!(csv.lines().count(), 3);
    }

    #[test]
    fn file_exports_write_both_formats() {
        let report = SessionReport::new(&sample_records(), 1.5);
        let dir = std::env::temp_dir();
        let csv_path = dir.join(format!("keyprint-test-{}.csv", std::process::id()));
        let json_path = dir.join(format!("keyprint-test-{}.json", std::process::id()));

        report.export_csv(&csv_path).expect("CSV export failed");
        report.export_json(&json_path).expect("JSON export failed");

        let csv = std::fs::read_to_string(&csv_path).expect("read csv");
        assert!(csv.contains("0.150 sec"));
        let json = std::fs::read_to_string(&json_path).expect("read json");
        assert!(json.contains("\"keystrokes\": 2"));

        let _ = std::fs::remove_file(&csv_path);
        let _ = std::fs::remove_file(&json_path);
    }
}

//! Descriptive statistics over completed keystroke records
//!
//! Summarizes the three interval features (hold time, inter-press time,
//! release-to-press time) plus per-key press counts for the session
//! report and terminal summary.

use crate::engine::KeystrokeRecord;
use serde::Serialize;
use std::collections::HashMap;

/// Summary of one numeric feature across a session.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct FeatureStats {
    /// Number of records carrying this feature
    pub count: usize,
    pub mean: f64,
    pub std_dev: f64,
    pub min: f64,
    pub max: f64,
}

impl FeatureStats {
    /// Compute stats over the given values; empty input yields zeros.
    pub fn from_values(values: &[f64]) -> Self {
        if values.is_empty() {
            return Self::default();
        }

        let count = values.len();
        let mean = values.iter().sum::<f64>() / count as f64;
        let variance = values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / count as f64;
        let min = values.iter().copied().fold(f64::INFINITY, f64::min);
        let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);

        Self {
            count,
            mean,
            std_dev: variance.sqrt(),
            min,
            max,
        }
    }
}

/// Session-level summary statistics.
#[derive(Debug, Clone, Default, Serialize)]
pub struct SessionStats {
    /// Number of completed keystrokes
    pub keystrokes: usize,
    /// Number of distinct keys seen
    pub distinct_keys: usize,
    /// Press counts per key, most frequent first
    pub key_counts: Vec<(String, usize)>,
    pub hold_time: FeatureStats,
    pub inter_press_time: FeatureStats,
    pub release_to_press_time: FeatureStats,
}

impl SessionStats {
    /// Summarize a sequence of completed records.
    pub fn from_records(records: &[KeystrokeRecord]) -> Self {
        let mut counts: HashMap<String, usize> = HashMap::new();
        for record in records {
            *counts.entry(record.key.identifier()).or_default() += 1;
        }
        let distinct_keys = counts.len();

        let mut key_counts: Vec<(String, usize)> = counts.into_iter().collect();
        // Most frequent first; ties in key order for a stable report
        key_counts.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));

        let hold: Vec<f64> = records.iter().filter_map(|r| r.hold_time).collect();
        let inter_press: Vec<f64> = records.iter().filter_map(|r| r.inter_press_time).collect();
        let release_to_press: Vec<f64> = records
            .iter()
            .filter_map(|r| r.release_to_press_time)
            .collect();

        Self {
            keystrokes: records.len(),
            distinct_keys,
            key_counts,
            hold_time: FeatureStats::from_values(&hold),
            inter_press_time: FeatureStats::from_values(&inter_press),
            release_to_press_time: FeatureStats::from_values(&release_to_press),
        }
    }
}

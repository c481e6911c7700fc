//! Keyprint - keystroke dynamics capture and timing correlation
//!
//! Captures raw key press/release events and correlates them into
//! completed keystroke records with derived timing features (hold time,
//! inter-press time, release-to-press time), the raw material of a
//! behavioral typing fingerprint. Completed records feed a tabular
//! export, summary statistics, and a session report.

pub mod config;
pub mod engine;
pub mod export;
pub mod keyboard;
pub mod report;
pub mod stats;

pub use config::Config;
pub use engine::{KeystrokeRecord, RecordStore, Session};
pub use export::{export, ExportedRecord};
pub use keyboard::{Key, KeyTransition, KeyboardListener, NamedKey, RawKeyEvent};
pub use report::SessionReport;
pub use stats::{FeatureStats, SessionStats};

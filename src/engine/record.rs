//! Completed and pending keystroke records

use crate::keyboard::Key;
use serde::{Deserialize, Serialize};

/// A single keystroke with derived timing features.
///
/// A record is created when its key is pressed, with `hold_time` unset.
/// The matching release completes it exactly once; afterwards it is
/// immutable. Records keep strict press order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KeystrokeRecord {
    /// The key that was pressed
    pub key: Key,
    /// Press instant relative to session start, in seconds
    pub press_time: f64,
    /// Press-to-release duration; `None` while the key is still held
    pub hold_time: Option<f64>,
    /// Interval since the previous press of any key; `None` for the
    /// first press of the session
    pub inter_press_time: Option<f64>,
    /// Interval from the most recent release of any key to this press;
    /// `None` when no release has occurred yet
    pub release_to_press_time: Option<f64>,
}

impl KeystrokeRecord {
    /// Whether the matching release has been seen.
    pub fn is_complete(&self) -> bool {
        self.hold_time.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_completeness_follows_hold_time() {
        let mut record = KeystrokeRecord {
            key: Key::Char('a'),
            press_time: 0.0,
            hold_time: None,
            inter_press_time: None,
            release_to_press_time: None,
        };
        assert!(!record.is_complete());

        record.hold_time = Some(0.12);
        assert!(record.is_complete());
    }
}

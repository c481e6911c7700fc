//! Raw keyboard transition events

use super::Key;

/// Type of key transition
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyTransition {
    /// Key was pressed down
    Press,
    /// Key was released
    Release,
}

/// A raw key transition event with a monotonic timestamp.
///
/// Timestamps are in seconds relative to the capture epoch (listener
/// creation). Events are ephemeral: the correlation engine consumes them
/// and they are not retained.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RawKeyEvent {
    /// The normalized key identity
    pub key: Key,
    /// Type of transition (press/release)
    pub transition: KeyTransition,
    /// When the event occurred, in seconds since the capture epoch
    pub timestamp: f64,
}

impl RawKeyEvent {
    pub fn new(key: Key, transition: KeyTransition, timestamp: f64) -> Self {
        Self {
            key,
            transition,
            timestamp,
        }
    }

    /// Shorthand for a press event.
    pub fn press(key: Key, timestamp: f64) -> Self {
        Self::new(key, KeyTransition::Press, timestamp)
    }

    /// Shorthand for a release event.
    pub fn release(key: Key, timestamp: f64) -> Self {
        Self::new(key, KeyTransition::Release, timestamp)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn press_shorthand_sets_transition() {
        let event = RawKeyEvent::press(Key::Char('a'), 0.5);
        assert_eq!(event.transition, KeyTransition::Press);
        assert_eq!(event.key, Key::Char('a'));
        assert_eq!(event.timestamp, 0.5);
    }

    #[test]
    fn release_shorthand_sets_transition() {
        let event = RawKeyEvent::release(Key::Char('a'), 1.0);
        assert_eq!(event.transition, KeyTransition::Release);
    }
}

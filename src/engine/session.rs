//! Keystroke correlation session
//!
//! Consumes an ordered stream of raw press/release events and derives
//! completed keystroke records. Overlapping presses (rollover) are paired
//! correctly: each open press remembers the index of its own pending
//! record, so a release completes exactly that record in O(1).
//!
//! A session is single-writer by construction. The capture side feeds
//! events through a channel and one caller drains them into the session;
//! the session itself never blocks or suspends.

use super::{KeystrokeRecord, RecordStore};
use crate::keyboard::{Key, KeyTransition, NamedKey, RawKeyEvent};
use log::{debug, trace};
use std::collections::HashMap;

/// Default terminator: releasing Escape ends the capture session.
pub const DEFAULT_TERMINATOR: Key = Key::Named(NamedKey::Escape);

/// An unmatched press awaiting its release.
#[derive(Debug, Clone, Copy)]
struct OpenPress {
    /// Timestamp of the press, for the hold-time computation
    pressed_at: f64,
    /// Index of the pending record in the store
    record_index: usize,
}

/// One in-progress capture run.
///
/// Created at session start, mutated only through [`Session::on_press`] and
/// [`Session::on_release`], and consumed by [`Session::finish`]. A finished
/// session cannot be reused; a new run needs a fresh `Session`.
pub struct Session {
    start_time: f64,
    last_press_time: Option<f64>,
    last_release_time: Option<f64>,
    open_presses: HashMap<Key, OpenPress>,
    store: RecordStore,
    terminator: Key,
}

impl Session {
    /// Start a session at the given monotonic timestamp, with the default
    /// terminator key.
    pub fn new(start_time: f64) -> Self {
        Self::with_terminator(start_time, DEFAULT_TERMINATOR)
    }

    /// Start a session with an explicit terminator key.
    pub fn with_terminator(start_time: f64, terminator: Key) -> Self {
        Self {
            start_time,
            last_press_time: None,
            last_release_time: None,
            open_presses: HashMap::new(),
            store: RecordStore::new(),
            terminator,
        }
    }

    /// The key whose release ends this session.
    pub fn terminator(&self) -> Key {
        self.terminator
    }

    /// Whether releasing this key ends the session.
    pub fn is_terminator(&self, key: &Key) -> bool {
        *key == self.terminator
    }

    /// Handle a press event.
    ///
    /// Appends a pending record with the derived inter-press and
    /// release-to-press intervals and registers the open press. A repeat
    /// press of a key that is already open (auto-repeat under some capture
    /// backends) is suppressed: one logical press until release.
    pub fn on_press(&mut self, key: Key, timestamp: f64) {
        if self.open_presses.contains_key(&key) {
            debug!("repeat press of '{}' while held, suppressed", key);
            return;
        }

        let inter_press_time = self.last_press_time.map(|t| timestamp - t);
        let release_to_press_time = self.last_release_time.map(|t| timestamp - t);

        let record = KeystrokeRecord {
            key,
            press_time: timestamp - self.start_time,
            hold_time: None,
            inter_press_time,
            release_to_press_time,
        };
        trace!("press '{}' at {:.3}", key, record.press_time);

        let record_index = self.store.append(record);
        self.open_presses.insert(
            key,
            OpenPress {
                pressed_at: timestamp,
                record_index,
            },
        );
        self.last_press_time = Some(timestamp);
    }

    /// Handle a release event.
    ///
    /// Completes the pending record for this key if one is open; a release
    /// with no matching press is tolerated and ignored. The last-release
    /// timestamp updates either way. Returns `false` when the released key
    /// is the terminator, signalling the caller to stop pulling events.
    pub fn on_release(&mut self, key: Key, timestamp: f64) -> bool {
        if let Some(open) = self.open_presses.remove(&key) {
            let hold_time = timestamp - open.pressed_at;
            trace!("release '{}' after {:.3}s", key, hold_time);
            self.store.complete(open.record_index, hold_time);
        } else {
            debug!("release of '{}' without matching press, ignored", key);
        }

        self.last_release_time = Some(timestamp);
        !self.is_terminator(&key)
    }

    /// Dispatch a raw event. Returns `false` when the session should end.
    pub fn process(&mut self, event: &RawKeyEvent) -> bool {
        match event.transition {
            KeyTransition::Press => {
                self.on_press(event.key, event.timestamp);
                true
            }
            KeyTransition::Release => self.on_release(event.key, event.timestamp),
        }
    }

    /// All records so far in press order, including pending ones.
    pub fn records(&self) -> &[KeystrokeRecord] {
        self.store.all()
    }

    /// Completed records so far, in press order.
    pub fn completed(&self) -> impl Iterator<Item = &KeystrokeRecord> {
        self.store.completed()
    }

    /// End the session and yield its completed records in press order.
    ///
    /// Keys still held at this point never received a release and are
    /// dropped; consuming `self` makes the session unusable afterwards.
    pub fn finish(self) -> Vec<KeystrokeRecord> {
        if !self.open_presses.is_empty() {
            debug!(
                "{} key(s) still held at session end, dropping their records",
                self.open_presses.len()
            );
        }
        self.store.into_completed()
    }
}

//! Polling keyboard listener
//!
//! Diffs the pressed-key set reported by `device_query` between polls and
//! emits press/release transitions into an mpsc channel. A polling backend
//! never delivers auto-repeat presses: a held key stays in the pressed set
//! until it is released.

use super::{Key, RawKeyEvent};
use device_query::{DeviceQuery, DeviceState};
use std::sync::mpsc;
use std::time::Instant;

/// Keyboard listener that polls for key state changes.
pub struct KeyboardListener {
    device_state: DeviceState,
    last_keys: Vec<device_query::Keycode>,
    epoch: Instant,
    event_tx: mpsc::Sender<RawKeyEvent>,
}

impl KeyboardListener {
    /// Create a new keyboard listener. The capture epoch (timestamp zero)
    /// is the moment of creation.
    pub fn new(event_tx: mpsc::Sender<RawKeyEvent>) -> Self {
        Self {
            device_state: DeviceState::new(),
            last_keys: Vec::new(),
            epoch: Instant::now(),
            event_tx,
        }
    }

    /// Poll for keyboard state changes.
    /// Returns the number of events generated.
    pub fn poll(&mut self) -> usize {
        let now = self.epoch.elapsed().as_secs_f64();
        let current_keys = self.device_state.get_keys();
        let mut event_count = 0;

        // Check for new key presses
        for key in &current_keys {
            if !self.last_keys.contains(key) {
                let event = RawKeyEvent::press(Key::from(*key), now);
                let _ = self.event_tx.send(event);
                event_count += 1;
            }
        }

        // Check for key releases
        for key in &self.last_keys {
            if !current_keys.contains(key) {
                let event = RawKeyEvent::release(Key::from(*key), now);
                let _ = self.event_tx.send(event);
                event_count += 1;
            }
        }

        self.last_keys = current_keys;
        event_count
    }

    /// Seconds elapsed since the capture epoch.
    pub fn elapsed_secs(&self) -> f64 {
        self.epoch.elapsed().as_secs_f64()
    }
}

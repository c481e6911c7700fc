//! Append-only keystroke record store
//!
//! Records are appended in press order and never reordered or removed.
//! The only mutation after append is completing a record's hold time,
//! which happens at most once per record.

use super::KeystrokeRecord;
use log::warn;

/// Insertion-ordered store of keystroke records.
#[derive(Debug, Default)]
pub struct RecordStore {
    records: Vec<KeystrokeRecord>,
}

impl RecordStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a record, returning its index for later completion.
    pub fn append(&mut self, record: KeystrokeRecord) -> usize {
        self.records.push(record);
        self.records.len() - 1
    }

    /// Complete the record at `index` with the measured hold time.
    ///
    /// Returns `false` without mutating anything if the index is out of
    /// range or the record was already completed.
    pub fn complete(&mut self, index: usize, hold_time: f64) -> bool {
        match self.records.get_mut(index) {
            Some(record) if record.hold_time.is_none() => {
                record.hold_time = Some(hold_time);
                true
            }
            Some(record) => {
                warn!(
                    "record {} for key '{}' already completed, ignoring",
                    index, record.key
                );
                false
            }
            None => {
                warn!("completion for unknown record index {}", index);
                false
            }
        }
    }

    /// All records in press order, including pending ones.
    pub fn all(&self) -> &[KeystrokeRecord] {
        &self.records
    }

    /// Records whose release has been seen, in press order.
    pub fn completed(&self) -> impl Iterator<Item = &KeystrokeRecord> {
        self.records.iter().filter(|r| r.is_complete())
    }

    /// Consume the store, keeping only completed records. Keys still held
    /// when the session ends carry no valid hold duration and are dropped.
    pub fn into_completed(self) -> Vec<KeystrokeRecord> {
        self.records
            .into_iter()
            .filter(KeystrokeRecord::is_complete)
            .collect()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::keyboard::Key;

    fn pending(key: char, press_time: f64) -> KeystrokeRecord {
        KeystrokeRecord {
            key: Key::Char(key),
            press_time,
            hold_time: None,
            inter_press_time: None,
            release_to_press_time: None,
        }
    }

    #[test]
    fn append_returns_sequential_indices() {
        let mut store = RecordStore::new();
        assert_eq!(store.append(pending('a', 0.0)), 0);
        assert_eq!(store.append(pending('b', 0.1)), 1);
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn complete_sets_hold_time_once() {
        let mut store = RecordStore::new();
        let idx = store.append(pending('a', 0.0));

        assert!(store.complete(idx, 0.12));
        assert_eq!(store.all()[idx].hold_time, Some(0.12));

        // Second completion is rejected and leaves the first value intact
        assert!(!store.complete(idx, 0.99));
        assert_eq!(store.all()[idx].hold_time, Some(0.12));
    }

    #[test]
    fn complete_out_of_range_is_rejected() {
        let mut store = RecordStore::new();
        assert!(!store.complete(5, 0.1));
    }

    #[test]
    fn completed_filters_pending_records() {
        let mut store = RecordStore::new();
        let a = store.append(pending('a', 0.0));
        store.append(pending('b', 0.1));
        store.complete(a, 0.05);

        let completed: Vec<_> = store.completed().collect();
        assert_eq!(completed.len(), 1);
        assert_eq!(completed[0].key, Key::Char('a'));

        // all() still exposes the pending record
        assert_eq!(store.all().len(), 2);
    }

    #[test]
    fn into_completed_preserves_press_order() {
        let mut store = RecordStore::new();
        let a = store.append(pending('a', 0.0));
        let b = store.append(pending('b', 0.1));
        let c = store.append(pending('c', 0.2));

        // Complete out of press order
        store.complete(c, 0.03);
        store.complete(a, 0.30);
        store.complete(b, 0.20);

        let records = store.into_completed();
        let keys: Vec<_> = records.iter().map(|r| r.key).collect();
        assert_eq!(keys, vec![Key::Char('a'), Key::Char('b'), Key::Char('c')]);
    }
}

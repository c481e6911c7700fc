//! Keystroke event correlation engine

mod record;
mod session;
mod store;

pub use record::KeystrokeRecord;
pub use session::{Session, DEFAULT_TERMINATOR};
pub use store::RecordStore;

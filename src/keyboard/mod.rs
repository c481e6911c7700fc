//! Keyboard event capture and key identity

mod event;
mod key;
mod listener;

pub use event::{KeyTransition, RawKeyEvent};
pub use key::{Key, NamedKey};
pub use listener::KeyboardListener;

//! Key identity model
//!
//! Keys are normalized into a closed variant before they reach the
//! correlation engine: printable keys carry their character, everything
//! else maps to a named key with a stable lowercase identifier. The
//! engine never parses platform-specific key representations.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A normalized key identity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Key {
    /// A key with a printable representation
    Char(char),
    /// A key without a printable representation
    Named(NamedKey),
}

/// Keys without a printable representation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NamedKey {
    Escape,
    Tab,
    Enter,
    Backspace,
    Space,
    CapsLock,
    LeftShift,
    RightShift,
    LeftCtrl,
    RightCtrl,
    LeftAlt,
    RightAlt,
    LeftMeta,
    RightMeta,
    Up,
    Down,
    Left,
    Right,
    Home,
    End,
    PageUp,
    PageDown,
    Insert,
    Delete,
    F1,
    F2,
    F3,
    F4,
    F5,
    F6,
    F7,
    F8,
    F9,
    F10,
    F11,
    F12,
    /// Any key the capture backend could not classify
    Unknown,
}

impl NamedKey {
    /// Stable identifier used in exported tables and logs.
    pub fn identifier(&self) -> &'static str {
        match self {
            NamedKey::Escape => "esc",
            NamedKey::Tab => "tab",
            NamedKey::Enter => "enter",
            NamedKey::Backspace => "backspace",
            NamedKey::Space => "space",
            NamedKey::CapsLock => "caps_lock",
            NamedKey::LeftShift => "shift",
            NamedKey::RightShift => "shift_r",
            NamedKey::LeftCtrl => "ctrl_l",
            NamedKey::RightCtrl => "ctrl_r",
            NamedKey::LeftAlt => "alt_l",
            NamedKey::RightAlt => "alt_r",
            NamedKey::LeftMeta => "cmd",
            NamedKey::RightMeta => "cmd_r",
            NamedKey::Up => "up",
            NamedKey::Down => "down",
            NamedKey::Left => "left",
            NamedKey::Right => "right",
            NamedKey::Home => "home",
            NamedKey::End => "end",
            NamedKey::PageUp => "page_up",
            NamedKey::PageDown => "page_down",
            NamedKey::Insert => "insert",
            NamedKey::Delete => "delete",
            NamedKey::F1 => "f1",
            NamedKey::F2 => "f2",
            NamedKey::F3 => "f3",
            NamedKey::F4 => "f4",
            NamedKey::F5 => "f5",
            NamedKey::F6 => "f6",
            NamedKey::F7 => "f7",
            NamedKey::F8 => "f8",
            NamedKey::F9 => "f9",
            NamedKey::F10 => "f10",
            NamedKey::F11 => "f11",
            NamedKey::F12 => "f12",
            NamedKey::Unknown => "unknown",
        }
    }
}

impl Key {
    /// Stable identifier used in exported tables and logs.
    pub fn identifier(&self) -> String {
        match self {
            Key::Char(c) => c.to_string(),
            Key::Named(n) => n.identifier().to_string(),
        }
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Key::Char(c) => write!(f, "{}", c),
            Key::Named(n) => write!(f, "{}", n.identifier()),
        }
    }
}

impl From<device_query::Keycode> for Key {
    fn from(keycode: device_query::Keycode) -> Self {
        use device_query::Keycode as DK;
        match keycode {
            DK::A => Key::Char('a'),
            DK::B => Key::Char('b'),
            DK::C => Key::Char('c'),
            DK::D => Key::Char('d'),
            DK::E => Key::Char('e'),
            DK::F => Key::Char('f'),
            DK::G => Key::Char('g'),
            DK::H => Key::Char('h'),
            DK::I => Key::Char('i'),
            DK::J => Key::Char('j'),
            DK::K => Key::Char('k'),
            DK::L => Key::Char('l'),
            DK::M => Key::Char('m'),
            DK::N => Key::Char('n'),
            DK::O => Key::Char('o'),
            DK::P => Key::Char('p'),
            DK::Q => Key::Char('q'),
            DK::R => Key::Char('r'),
            DK::S => Key::Char('s'),
            DK::T => Key::Char('t'),
            DK::U => Key::Char('u'),
            DK::V => Key::Char('v'),
            DK::W => Key::Char('w'),
            DK::X => Key::Char('x'),
            DK::Y => Key::Char('y'),
            DK::Z => Key::Char('z'),
            DK::Key0 | DK::Numpad0 => Key::Char('0'),
            DK::Key1 | DK::Numpad1 => Key::Char('1'),
            DK::Key2 | DK::Numpad2 => Key::Char('2'),
            DK::Key3 | DK::Numpad3 => Key::Char('3'),
            DK::Key4 | DK::Numpad4 => Key::Char('4'),
            DK::Key5 | DK::Numpad5 => Key::Char('5'),
            DK::Key6 | DK::Numpad6 => Key::Char('6'),
            DK::Key7 | DK::Numpad7 => Key::Char('7'),
            DK::Key8 | DK::Numpad8 => Key::Char('8'),
            DK::Key9 | DK::Numpad9 => Key::Char('9'),
            DK::Grave => Key::Char('`'),
            DK::Minus | DK::NumpadSubtract => Key::Char('-'),
            DK::Equal => Key::Char('='),
            DK::LeftBracket => Key::Char('['),
            DK::RightBracket => Key::Char(']'),
            DK::BackSlash => Key::Char('\\'),
            DK::Semicolon => Key::Char(';'),
            DK::Apostrophe => Key::Char('\''),
            DK::Comma => Key::Char(','),
            DK::Dot => Key::Char('.'),
            DK::Slash | DK::NumpadDivide => Key::Char('/'),
            DK::NumpadAdd => Key::Char('+'),
            DK::NumpadMultiply => Key::Char('*'),
            DK::Escape => Key::Named(NamedKey::Escape),
            DK::Tab => Key::Named(NamedKey::Tab),
            DK::Enter => Key::Named(NamedKey::Enter),
            DK::Backspace => Key::Named(NamedKey::Backspace),
            DK::Space => Key::Named(NamedKey::Space),
            DK::CapsLock => Key::Named(NamedKey::CapsLock),
            DK::LShift => Key::Named(NamedKey::LeftShift),
            DK::RShift => Key::Named(NamedKey::RightShift),
            DK::LControl => Key::Named(NamedKey::LeftCtrl),
            DK::RControl => Key::Named(NamedKey::RightCtrl),
            DK::LAlt => Key::Named(NamedKey::LeftAlt),
            DK::RAlt => Key::Named(NamedKey::RightAlt),
            DK::LMeta => Key::Named(NamedKey::LeftMeta),
            DK::RMeta => Key::Named(NamedKey::RightMeta),
            DK::Up => Key::Named(NamedKey::Up),
            DK::Down => Key::Named(NamedKey::Down),
            DK::Left => Key::Named(NamedKey::Left),
            DK::Right => Key::Named(NamedKey::Right),
            DK::Home => Key::Named(NamedKey::Home),
            DK::End => Key::Named(NamedKey::End),
            DK::PageUp => Key::Named(NamedKey::PageUp),
            DK::PageDown => Key::Named(NamedKey::PageDown),
            DK::Insert => Key::Named(NamedKey::Insert),
            DK::Delete => Key::Named(NamedKey::Delete),
            DK::F1 => Key::Named(NamedKey::F1),
            DK::F2 => Key::Named(NamedKey::F2),
            DK::F3 => Key::Named(NamedKey::F3),
            DK::F4 => Key::Named(NamedKey::F4),
            DK::F5 => Key::Named(NamedKey::F5),
            DK::F6 => Key::Named(NamedKey::F6),
            DK::F7 => Key::Named(NamedKey::F7),
            DK::F8 => Key::Named(NamedKey::F8),
            DK::F9 => Key::Named(NamedKey::F9),
            DK::F10 => Key::Named(NamedKey::F10),
            DK::F11 => Key::Named(NamedKey::F11),
            DK::F12 => Key::Named(NamedKey::F12),
            // Fallback for any unmapped keys
            _ => Key::Named(NamedKey::Unknown),
        }
    }
}

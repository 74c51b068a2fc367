//! Physical key identifiers.
//!
//! Names follow the conventional game-engine spelling (`F9`, `RightShift`,
//! `Alpha1`, `UpArrow`, `Keypad0`) so binding files stay readable. Parsing is
//! case-insensitive; `Display` always yields the canonical spelling.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use strum::{Display, EnumIter, EnumString, IntoStaticStr};

/// A discrete keyboard key.
///
/// `Key::None` is the "no key" sentinel used for an absent modifier and for
/// the placeholder trigger returned by a failed parse. It is never held.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord,
    Display, EnumString, EnumIter, IntoStaticStr,
)]
#[strum(ascii_case_insensitive)]
pub enum Key {
    #[default]
    None,

    // ========================================================================
    // Editing / whitespace
    // ========================================================================
    Backspace,
    Tab,
    Clear,
    Return,
    Pause,
    Escape,
    Space,
    Delete,
    Insert,

    // ========================================================================
    // Punctuation
    // ========================================================================
    Quote,
    Comma,
    Minus,
    Period,
    Slash,
    Semicolon,
    Equals,
    LeftBracket,
    Backslash,
    RightBracket,
    BackQuote,

    // ========================================================================
    // Digit row
    // ========================================================================
    Alpha0,
    Alpha1,
    Alpha2,
    Alpha3,
    Alpha4,
    Alpha5,
    Alpha6,
    Alpha7,
    Alpha8,
    Alpha9,

    // ========================================================================
    // Letters
    // ========================================================================
    A,
    B,
    C,
    D,
    E,
    F,
    G,
    H,
    I,
    J,
    K,
    L,
    M,
    N,
    O,
    P,
    Q,
    R,
    S,
    T,
    U,
    V,
    W,
    X,
    Y,
    Z,

    // ========================================================================
    // Keypad
    // ========================================================================
    Keypad0,
    Keypad1,
    Keypad2,
    Keypad3,
    Keypad4,
    Keypad5,
    Keypad6,
    Keypad7,
    Keypad8,
    Keypad9,
    KeypadPeriod,
    KeypadDivide,
    KeypadMultiply,
    KeypadMinus,
    KeypadPlus,
    KeypadEnter,
    KeypadEquals,

    // ========================================================================
    // Navigation
    // ========================================================================
    UpArrow,
    DownArrow,
    RightArrow,
    LeftArrow,
    Home,
    End,
    PageUp,
    PageDown,

    // ========================================================================
    // Function keys
    // ========================================================================
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
    F13,
    F14,
    F15,

    // ========================================================================
    // Locks
    // ========================================================================
    Numlock,
    CapsLock,
    ScrollLock,

    // ========================================================================
    // Modifiers
    // ========================================================================
    RightShift,
    LeftShift,
    RightControl,
    LeftControl,
    RightAlt,
    LeftAlt,
    LeftCommand,
    RightCommand,

    // ========================================================================
    // System
    // ========================================================================
    Menu,
    Print,
}

impl Key {
    /// True for the `None` sentinel.
    pub fn is_none(self) -> bool {
        self == Key::None
    }

    /// Canonical name, as written to binding files.
    pub fn name(self) -> &'static str {
        self.into()
    }
}

impl Serialize for Key {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name())
    }
}

impl<'de> Deserialize<'de> for Key {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let name = String::deserialize(deserializer)?;
        name.trim()
            .parse()
            .map_err(|_| serde::de::Error::custom(format!("unknown key name: {name:?}")))
    }
}

//! Bevy keyboard adapter.

use bevy::input::ButtonInput;
use bevy::input::keyboard::KeyCode;
use tickbind_types::{Key, KeyState};

/// Bevy's physical key for a tickbind [`Key`]. `Key::None` has none.
pub fn key_code(key: Key) -> Option<KeyCode> {
    use KeyCode as K;
    let code = match key {
        Key::None => return None,

        Key::Backspace => K::Backspace,
        Key::Tab => K::Tab,
        Key::Clear => K::NumpadClear,
        Key::Return => K::Enter,
        Key::Pause => K::Pause,
        Key::Escape => K::Escape,
        Key::Space => K::Space,
        Key::Delete => K::Delete,
        Key::Insert => K::Insert,

        Key::Quote => K::Quote,
        Key::Comma => K::Comma,
        Key::Minus => K::Minus,
        Key::Period => K::Period,
        Key::Slash => K::Slash,
        Key::Semicolon => K::Semicolon,
        Key::Equals => K::Equal,
        Key::LeftBracket => K::BracketLeft,
        Key::Backslash => K::Backslash,
        Key::RightBracket => K::BracketRight,
        Key::BackQuote => K::Backquote,

        Key::Alpha0 => K::Digit0,
        Key::Alpha1 => K::Digit1,
        Key::Alpha2 => K::Digit2,
        Key::Alpha3 => K::Digit3,
        Key::Alpha4 => K::Digit4,
        Key::Alpha5 => K::Digit5,
        Key::Alpha6 => K::Digit6,
        Key::Alpha7 => K::Digit7,
        Key::Alpha8 => K::Digit8,
        Key::Alpha9 => K::Digit9,

        Key::A => K::KeyA,
        Key::B => K::KeyB,
        Key::C => K::KeyC,
        Key::D => K::KeyD,
        Key::E => K::KeyE,
        Key::F => K::KeyF,
        Key::G => K::KeyG,
        Key::H => K::KeyH,
        Key::I => K::KeyI,
        Key::J => K::KeyJ,
        Key::K => K::KeyK,
        Key::L => K::KeyL,
        Key::M => K::KeyM,
        Key::N => K::KeyN,
        Key::O => K::KeyO,
        Key::P => K::KeyP,
        Key::Q => K::KeyQ,
        Key::R => K::KeyR,
        Key::S => K::KeyS,
        Key::T => K::KeyT,
        Key::U => K::KeyU,
        Key::V => K::KeyV,
        Key::W => K::KeyW,
        Key::X => K::KeyX,
        Key::Y => K::KeyY,
        Key::Z => K::KeyZ,

        Key::Keypad0 => K::Numpad0,
        Key::Keypad1 => K::Numpad1,
        Key::Keypad2 => K::Numpad2,
        Key::Keypad3 => K::Numpad3,
        Key::Keypad4 => K::Numpad4,
        Key::Keypad5 => K::Numpad5,
        Key::Keypad6 => K::Numpad6,
        Key::Keypad7 => K::Numpad7,
        Key::Keypad8 => K::Numpad8,
        Key::Keypad9 => K::Numpad9,
        Key::KeypadPeriod => K::NumpadDecimal,
        Key::KeypadDivide => K::NumpadDivide,
        Key::KeypadMultiply => K::NumpadMultiply,
        Key::KeypadMinus => K::NumpadSubtract,
        Key::KeypadPlus => K::NumpadAdd,
        Key::KeypadEnter => K::NumpadEnter,
        Key::KeypadEquals => K::NumpadEqual,

        Key::UpArrow => K::ArrowUp,
        Key::DownArrow => K::ArrowDown,
        Key::RightArrow => K::ArrowRight,
        Key::LeftArrow => K::ArrowLeft,
        Key::Home => K::Home,
        Key::End => K::End,
        Key::PageUp => K::PageUp,
        Key::PageDown => K::PageDown,

        Key::F1 => K::F1,
        Key::F2 => K::F2,
        Key::F3 => K::F3,
        Key::F4 => K::F4,
        Key::F5 => K::F5,
        Key::F6 => K::F6,
        Key::F7 => K::F7,
        Key::F8 => K::F8,
        Key::F9 => K::F9,
        Key::F10 => K::F10,
        Key::F11 => K::F11,
        Key::F12 => K::F12,
        Key::F13 => K::F13,
        Key::F14 => K::F14,
        Key::F15 => K::F15,

        Key::Numlock => K::NumLock,
        Key::CapsLock => K::CapsLock,
        Key::ScrollLock => K::ScrollLock,

        Key::RightShift => K::ShiftRight,
        Key::LeftShift => K::ShiftLeft,
        Key::RightControl => K::ControlRight,
        Key::LeftControl => K::ControlLeft,
        Key::RightAlt => K::AltRight,
        Key::LeftAlt => K::AltLeft,
        Key::LeftCommand => K::SuperLeft,
        Key::RightCommand => K::SuperRight,

        Key::Menu => K::ContextMenu,
        Key::Print => K::PrintScreen,
    };
    Some(code)
}

/// [`KeyState`] over Bevy's `ButtonInput<KeyCode>` for the current frame.
#[derive(Clone, Copy)]
pub struct BevyKeys<'a>(pub &'a ButtonInput<KeyCode>);

impl KeyState for BevyKeys<'_> {
    fn is_held(&self, key: Key) -> bool {
        key_code(key).is_some_and(|code| self.0.pressed(code))
    }

    fn is_pressed_this_tick(&self, key: Key) -> bool {
        key_code(key).is_some_and(|code| self.0.just_pressed(code))
    }

    fn any_held(&self) -> bool {
        self.0.get_pressed().next().is_some()
    }

    fn any_pressed_this_tick(&self) -> bool {
        self.0.get_just_pressed().next().is_some()
    }
}

//! The host's view of the keyboard for one tick.

use std::collections::HashSet;

use crate::key::Key;

/// Live keyboard state as seen by the current tick.
///
/// Hosts implement this over their own input layer. `is_pressed_this_tick`
/// must be true only on the tick a key went from released to pressed.
pub trait KeyState {
    /// Is the key currently held down?
    fn is_held(&self, key: Key) -> bool;

    /// Did the key go down during this tick?
    fn is_pressed_this_tick(&self, key: Key) -> bool;

    /// Fast path: is any key held at all? Hosts that can't tell return true.
    fn any_held(&self) -> bool {
        true
    }

    /// Fast path: did any key go down this tick? Hosts that can't tell return true.
    fn any_pressed_this_tick(&self) -> bool {
        true
    }
}

impl<S: KeyState + ?Sized> KeyState for &S {
    fn is_held(&self, key: Key) -> bool {
        (**self).is_held(key)
    }

    fn is_pressed_this_tick(&self, key: Key) -> bool {
        (**self).is_pressed_this_tick(key)
    }

    fn any_held(&self) -> bool {
        (**self).any_held()
    }

    fn any_pressed_this_tick(&self) -> bool {
        (**self).any_pressed_this_tick()
    }
}

/// An owned key-state snapshot.
///
/// Mirrors the usual button-input bookkeeping: `press` marks a key held and,
/// if it was not already held, pressed this tick; `end_tick` forgets the
/// per-tick edges but keeps holds.
#[derive(Clone, Debug, Default)]
pub struct KeySnapshot {
    held: HashSet<Key>,
    pressed: HashSet<Key>,
}

impl KeySnapshot {
    /// Create a snapshot with nothing held.
    pub fn new() -> Self {
        Self::default()
    }

    /// Press a key. Pressing an already-held key does not produce a new edge.
    pub fn press(&mut self, key: Key) {
        if key.is_none() {
            return;
        }
        if self.held.insert(key) {
            self.pressed.insert(key);
        }
    }

    /// Release a key.
    pub fn release(&mut self, key: Key) {
        self.held.remove(&key);
        self.pressed.remove(&key);
    }

    /// Release everything.
    pub fn release_all(&mut self) {
        self.held.clear();
        self.pressed.clear();
    }

    /// Close out the tick: edges are cleared, holds persist.
    pub fn end_tick(&mut self) {
        self.pressed.clear();
    }
}

impl KeyState for KeySnapshot {
    fn is_held(&self, key: Key) -> bool {
        self.held.contains(&key)
    }

    fn is_pressed_this_tick(&self, key: Key) -> bool {
        self.pressed.contains(&key)
    }

    fn any_held(&self) -> bool {
        !self.held.is_empty()
    }

    fn any_pressed_this_tick(&self) -> bool {
        !self.pressed.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_press_sets_edge_once() {
        let mut keys = KeySnapshot::new();
        keys.press(Key::A);
        assert!(keys.is_held(Key::A));
        assert!(keys.is_pressed_this_tick(Key::A));

        keys.end_tick();
        keys.press(Key::A); // still held, no new edge
        assert!(keys.is_held(Key::A));
        assert!(!keys.is_pressed_this_tick(Key::A));
        assert!(!keys.any_pressed_this_tick());
        assert!(keys.any_held());
    }

    #[test]
    fn test_release_then_press_is_new_edge() {
        let mut keys = KeySnapshot::new();
        keys.press(Key::Space);
        keys.end_tick();
        keys.release(Key::Space);
        assert!(!keys.any_held());

        keys.press(Key::Space);
        assert!(keys.is_pressed_this_tick(Key::Space));
    }

    #[test]
    fn test_none_is_never_held() {
        let mut keys = KeySnapshot::new();
        keys.press(Key::None);
        assert!(!keys.is_held(Key::None));
        assert!(!keys.any_held());
    }
}

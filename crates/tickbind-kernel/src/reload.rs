//! Reload controller.
//!
//! A reload is requested either by pressing the reload key or by an explicit
//! [`ReloadController::request_reload`] call. Either way it is serviced at the
//! start of the next frame tick, and that tick's one-shot scan is skipped.

use tickbind_types::{Key, KeyState};
use tracing::debug;

/// Where the controller is in the reload cycle.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ReloadState {
    #[default]
    Idle,
    /// Only ever observed between `begin` and `finish` within one tick.
    Reloading,
}

#[derive(Clone, Debug)]
pub struct ReloadController {
    reload_key: Key,
    state: ReloadState,
    pending: bool,
}

impl Default for ReloadController {
    fn default() -> Self {
        Self::new(Self::DEFAULT_KEY)
    }
}

impl ReloadController {
    pub const DEFAULT_KEY: Key = Key::F11;

    pub fn new(reload_key: Key) -> Self {
        Self {
            reload_key,
            state: ReloadState::Idle,
            pending: false,
        }
    }

    pub fn reload_key(&self) -> Key {
        self.reload_key
    }

    pub fn state(&self) -> ReloadState {
        self.state
    }

    pub fn is_pending(&self) -> bool {
        self.pending
    }

    /// Ask for a reload on the next frame tick.
    pub fn request_reload(&mut self) {
        self.pending = true;
    }

    /// Enter `Reloading` if a request is pending or the reload key went down
    /// this tick. Consumes the pending request.
    pub fn begin(&mut self, keys: &impl KeyState) -> bool {
        let by_key = !self.reload_key.is_none() && keys.is_pressed_this_tick(self.reload_key);
        if !(self.pending || by_key) {
            return false;
        }
        debug!(
            "Reload started ({})",
            if by_key { "reload key" } else { "request" }
        );
        self.pending = false;
        self.state = ReloadState::Reloading;
        true
    }

    pub fn finish(&mut self) {
        self.state = ReloadState::Idle;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tickbind_types::KeySnapshot;

    #[test]
    fn test_reload_key_edge() {
        let mut reload = ReloadController::default();
        assert_eq!(reload.reload_key(), Key::F11);

        let mut keys = KeySnapshot::new();
        assert!(!reload.begin(&keys));

        keys.press(Key::F11);
        assert!(reload.begin(&keys));
        assert_eq!(reload.state(), ReloadState::Reloading);
        reload.finish();
        assert_eq!(reload.state(), ReloadState::Idle);

        // Holding the key does not reload again.
        keys.end_tick();
        assert!(!reload.begin(&keys));
    }

    #[test]
    fn test_request_consumed_once() {
        let mut reload = ReloadController::new(Key::F5);
        let keys = KeySnapshot::new();

        reload.request_reload();
        assert!(reload.is_pending());
        assert!(reload.begin(&keys));
        reload.finish();
        assert!(!reload.is_pending());
        assert!(!reload.begin(&keys));
    }

    #[test]
    fn test_none_key_only_reloads_on_request() {
        let mut reload = ReloadController::new(Key::None);
        let mut keys = KeySnapshot::new();
        keys.press(Key::F11);
        assert!(!reload.begin(&keys));
    }
}

//! The owning context: registry, config, dispatch engine, reload controller.
//!
//! Hosts build one [`Kernel`] and drive it from their two loops:
//! [`Kernel::frame_tick`] once per rendered frame and [`Kernel::fixed_tick`]
//! once per fixed simulation step.

use tickbind_types::{Key, KeyState};
use tracing::{error, info};

use crate::config::{BindingConfig, ConfigError};
use crate::dispatch::DispatchEngine;
use crate::registry::ActionRegistry;
use crate::reload::ReloadController;

/// What happened on a frame tick.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FrameOutcome {
    /// The one-shot scan ran and executed this many actions.
    Dispatched(usize),
    /// Bindings were reloaded; the scan was skipped.
    Reloaded,
    /// A reload was attempted and failed; previous bindings stay live.
    ReloadFailed,
}

#[derive(Debug)]
pub struct Kernel {
    registry: ActionRegistry,
    config: BindingConfig,
    engine: DispatchEngine,
    reload: ReloadController,
}

impl Kernel {
    /// A kernel over `config`, with the discovered catalog and nothing registered yet.
    pub fn new(config: BindingConfig, reload_key: Key) -> Self {
        Self::with_registry(config, reload_key, ActionRegistry::new())
    }

    pub fn with_registry(config: BindingConfig, reload_key: Key, registry: ActionRegistry) -> Self {
        Self {
            registry,
            config,
            engine: DispatchEngine::new(),
            reload: ReloadController::new(reload_key),
        }
    }

    pub fn registry(&self) -> &ActionRegistry {
        &self.registry
    }

    /// Register extra actions here before `startup`, or call `reload_now` after.
    pub fn registry_mut(&mut self) -> &mut ActionRegistry {
        &mut self.registry
    }

    pub fn config(&self) -> &BindingConfig {
        &self.config
    }

    pub fn config_mut(&mut self) -> &mut BindingConfig {
        &mut self.config
    }

    pub fn engine(&self) -> &DispatchEngine {
        &self.engine
    }

    pub fn reload(&self) -> &ReloadController {
        &self.reload
    }

    /// Register built-ins, load (or create) the config, build the live maps.
    ///
    /// On a corrupt file the error is returned and the live maps stay empty;
    /// the file is not overwritten.
    pub fn startup(&mut self) -> Result<(), ConfigError> {
        let registered = self.registry.register_all_builtin();
        info!("Registered {} built-in actions", registered);
        self.config.load_or_create()?;
        self.rebuild();
        Ok(())
    }

    fn rebuild(&mut self) {
        self.engine.rebuild(self.config.table(), &self.registry);
    }

    /// Re-read the config and rebuild immediately. On error the live maps are kept.
    pub fn reload_now(&mut self) -> Result<(), ConfigError> {
        self.config.load()?;
        self.rebuild();
        Ok(())
    }

    /// Service a pending reload on the next frame tick.
    pub fn request_reload(&mut self) {
        self.reload.request_reload();
    }

    /// Frame tick: reload if asked to, otherwise run the one-shot scan.
    pub fn frame_tick(&mut self, keys: &impl KeyState) -> FrameOutcome {
        if self.reload.begin(keys) {
            let outcome = match self.reload_now() {
                Ok(()) => {
                    info!("Reloaded bindings from {:?}", self.config.path());
                    FrameOutcome::Reloaded
                }
                Err(e) => {
                    error!("Failed to reload bindings: {}", e);
                    FrameOutcome::ReloadFailed
                }
            };
            self.reload.finish();
            return outcome;
        }

        if !keys.any_pressed_this_tick() {
            return FrameOutcome::Dispatched(0);
        }
        FrameOutcome::Dispatched(self.engine.on_frame_tick(keys))
    }

    /// Fixed tick: run the repeating scan.
    pub fn fixed_tick(&self, keys: &impl KeyState) -> usize {
        if !keys.any_held() {
            return 0;
        }
        self.engine.on_fixed_tick(keys)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::binding::BindingTable;
    use tickbind_types::{KeySnapshot, Trigger};

    fn kernel_in(dir: &std::path::Path) -> Kernel {
        Kernel::new(BindingConfig::new("Input", dir), Key::F11)
    }

    #[test]
    fn test_startup_creates_sample() {
        let dir = tempfile::tempdir().unwrap();
        let mut kernel = kernel_in(dir.path());
        kernel.startup().unwrap();

        assert!(kernel.config().exists());
        assert!(kernel.registry().contains("NoopAction"));
        assert_eq!(
            kernel.engine().bound_actions(&Trigger::new(Key::F9)),
            vec!["NoopAction"]
        );
    }

    #[test]
    fn test_startup_corrupt_file_leaves_it_alone() {
        let dir = tempfile::tempdir().unwrap();
        let mut kernel = kernel_in(dir.path());
        let path = kernel.config().path();
        std::fs::write(&path, "not ron at all (").unwrap();

        assert!(kernel.startup().is_err());
        assert!(kernel.engine().is_empty());
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "not ron at all (");
    }

    #[test]
    fn test_reload_skips_frame_scan() {
        let dir = tempfile::tempdir().unwrap();
        let mut kernel = kernel_in(dir.path());
        kernel.startup().unwrap();

        let mut keys = KeySnapshot::new();
        keys.press(Key::F9);
        keys.press(Key::F11);
        assert_eq!(kernel.frame_tick(&keys), FrameOutcome::Reloaded);

        keys.end_tick();
        assert_eq!(kernel.frame_tick(&keys), FrameOutcome::Dispatched(0));
    }

    #[test]
    fn test_requested_reload_failure_keeps_maps() {
        let dir = tempfile::tempdir().unwrap();
        let mut kernel = kernel_in(dir.path());
        kernel.startup().unwrap();

        std::fs::write(kernel.config().path(), "(oneShot: [").unwrap();
        kernel.request_reload();
        let keys = KeySnapshot::new();
        assert_eq!(kernel.frame_tick(&keys), FrameOutcome::ReloadFailed);
        assert_eq!(kernel.config().table(), &BindingTable::sample());
        assert_eq!(
            kernel.engine().bound_actions(&Trigger::new(Key::F9)),
            vec!["NoopAction"]
        );
    }

    #[test]
    fn test_fixed_tick_idle_keyboard() {
        let dir = tempfile::tempdir().unwrap();
        let mut kernel = kernel_in(dir.path());
        kernel.startup().unwrap();
        assert_eq!(kernel.fixed_tick(&KeySnapshot::new()), 0);
    }
}

//! Bevy host for tickbind.
//!
//! Add [`TickbindPlugin`] next to `DefaultPlugins` (it needs Bevy's keyboard
//! input and fixed-timestep time) and register actions on the [`Bindings`]
//! resource before the first update.

pub mod keys;
pub mod plugin;
pub mod settings;

pub use keys::{BevyKeys, key_code};
pub use plugin::{Bindings, BindingsReloaded, ReloadBindings, TickbindPlugin, TickbindSystems};
pub use settings::HostSettings;

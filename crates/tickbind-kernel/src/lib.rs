//! # tickbind-kernel
//!
//! Binds key triggers to named actions and runs them once per tick.
//!
//! The pieces, bottom up:
//! - [`action`]: the `Action` capability and how instances are built
//! - [`catalog`] / [`registry`]: name → factory, explicit first, then by
//!   qualified path for anything declared with [`declare_action!`]
//! - [`binding`] / [`config`]: the persisted trigger → action-name table
//! - [`dispatch`]: live maps and the frame (edge) and fixed (level) scans
//! - [`reload`] / [`kernel`]: the reload protocol and the owning context
//!
//! ```ignore
//! let config = BindingConfig::new("Input", config_dir);
//! let mut kernel = Kernel::new(config, Key::F11);
//! kernel.startup()?;
//! // each frame:
//! kernel.frame_tick(&keys);
//! // each fixed step:
//! kernel.fixed_tick(&keys);
//! ```

pub mod action;
pub mod actions;
pub mod binding;
pub mod catalog;
pub mod config;
pub mod dispatch;
pub mod kernel;
pub mod registry;
pub mod reload;

#[doc(hidden)]
pub use inventory;

pub use action::{Action, ActionFactory, ActionType};
pub use actions::NoopAction;
pub use binding::{BindingEntry, BindingTable};
pub use catalog::{ActionCatalog, ActionDecl, CatalogEntry};
pub use config::{BindingConfig, ConfigError, ConfigFormat, LoadedCallback};
pub use dispatch::{DispatchEngine, LiveDispatchMap};
pub use kernel::{FrameOutcome, Kernel};
pub use registry::{ActionEntry, ActionRegistry, RegisterError};
pub use reload::{ReloadController, ReloadState};

pub use tickbind_types::{Key, KeySnapshot, KeyState, Trigger};

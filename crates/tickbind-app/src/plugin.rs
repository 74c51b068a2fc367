//! Bevy plugin: drives the kernel from `Update` and `FixedUpdate`.
//!
//! ```text
//! Startup      startup_bindings   register built-ins, load or create config
//! Update       frame_dispatch     ReloadBindings → reload | one-shot scan
//!                                  └─ BindingsReloaded { ok }
//! FixedUpdate  fixed_dispatch     repeating scan
//! ```

use bevy::input::ButtonInput;
use bevy::input::keyboard::KeyCode;
use bevy::prelude::*;
use tickbind_kernel::{FrameOutcome, Kernel};
use tracing::{error, info};

use crate::keys::BevyKeys;
use crate::settings::HostSettings;

/// Ask for the bindings to be re-read on the next frame.
#[derive(Message, Debug, Clone, Copy, Default)]
pub struct ReloadBindings;

/// Written after every reload attempt.
#[derive(Message, Debug, Clone, Copy, PartialEq, Eq)]
pub struct BindingsReloaded {
    pub ok: bool,
}

/// The kernel as a resource. Register actions on it before the first update.
#[derive(Resource, Debug, Deref, DerefMut)]
pub struct Bindings(pub Kernel);

#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub enum TickbindSystems {
    /// Frame tick (reload or one-shot scan), in `Update`.
    Frame,
    /// Repeating scan, in `FixedUpdate`.
    Fixed,
}

#[derive(Default)]
pub struct TickbindPlugin {
    pub settings: HostSettings,
}

impl TickbindPlugin {
    pub fn new(settings: HostSettings) -> Self {
        Self { settings }
    }
}

impl Plugin for TickbindPlugin {
    fn build(&self, app: &mut App) {
        let settings = &self.settings;
        let kernel = Kernel::new(settings.binding_config(), settings.reload_key);

        app.add_message::<ReloadBindings>()
            .add_message::<BindingsReloaded>()
            .insert_resource(Time::<Fixed>::from_hz(settings.fixed_hz))
            .insert_resource(Bindings(kernel));

        app.add_systems(Startup, startup_bindings)
            .add_systems(Update, frame_dispatch.in_set(TickbindSystems::Frame))
            .add_systems(FixedUpdate, fixed_dispatch.in_set(TickbindSystems::Fixed));
    }
}

/// Load bindings once. A corrupt file is logged and left alone; the app runs unbound.
pub fn startup_bindings(mut bindings: ResMut<Bindings>) {
    match bindings.startup() {
        Ok(()) => info!("Bindings loaded from {:?}", bindings.config().path()),
        Err(e) => error!(
            "Failed to load bindings from {:?}, continuing without: {}",
            bindings.config().path(),
            e
        ),
    }
}

pub fn frame_dispatch(
    mut bindings: ResMut<Bindings>,
    keys: Res<ButtonInput<KeyCode>>,
    mut requests: MessageReader<ReloadBindings>,
    mut reloaded: MessageWriter<BindingsReloaded>,
) {
    if requests.read().count() > 0 {
        bindings.request_reload();
    }
    match bindings.frame_tick(&BevyKeys(&keys)) {
        FrameOutcome::Reloaded => {
            reloaded.write(BindingsReloaded { ok: true });
        }
        FrameOutcome::ReloadFailed => {
            reloaded.write(BindingsReloaded { ok: false });
        }
        FrameOutcome::Dispatched(_) => {}
    }
}

pub fn fixed_dispatch(bindings: Res<Bindings>, keys: Res<ButtonInput<KeyCode>>) {
    bindings.fixed_tick(&BevyKeys(&keys));
}

//! tickbind - key bindings dispatched per tick.
//!
//! Opens a window, loads `<config-dir>/Input.ron` (writing a sample on first
//! run) and dispatches bound actions. Press the reload key (F11) after
//! editing the file.

use std::path::PathBuf;

use anyhow::Context;
use bevy::prelude::*;
use clap::Parser;
use tickbind_app::{HostSettings, TickbindPlugin};
use tickbind_kernel::{Action, ActionType, ConfigFormat, Key};
use tracing::info;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser, Debug)]
#[command(version, about = "Key bindings dispatched per tick")]
struct Args {
    /// Directory holding the bindings file
    #[arg(long, env = "TICKBIND_CONFIG_DIR")]
    config_dir: Option<PathBuf>,

    /// Bindings file stem
    #[arg(long, default_value = HostSettings::DEFAULT_NAME)]
    config_name: String,

    /// Bindings file format (ron or json)
    #[arg(long, default_value = "ron")]
    format: ConfigFormat,

    /// Key that reloads the bindings file
    #[arg(long, env = "TICKBIND_RELOAD_KEY", default_value = "F11")]
    reload_key: Key,

    /// Fixed-tick rate for repeating bindings
    #[arg(long, env = "TICKBIND_FIXED_HZ", default_value_t = HostSettings::DEFAULT_FIXED_HZ)]
    fixed_hz: f64,
}

impl Args {
    fn into_settings(self) -> HostSettings {
        HostSettings {
            config_dir: self.config_dir.unwrap_or_else(HostSettings::default_config_dir),
            config_name: self.config_name,
            format: self.format,
            reload_key: self.reload_key,
            fixed_hz: self.fixed_hz,
        }
    }
}

/// Logs a line. Bind it by path, e.g. `tickbind::Announce`.
struct Announce {
    id: String,
}

impl Action for Announce {
    fn id(&self) -> &str {
        &self.id
    }

    fn execute(&self) {
        info!("{} fired", self.id);
    }
}

impl ActionType for Announce {
    fn construct(id: &str) -> Self {
        Self { id: id.to_string() }
    }
}

tickbind_kernel::declare_action!(Announce);

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "tickbind=debug,tickbind_kernel=debug,tickbind_app=debug,warn".into());

    // Optional file log next to stderr
    let _guard = match std::env::var("TICKBIND_LOG_DIR") {
        Ok(log_dir) => {
            std::fs::create_dir_all(&log_dir)
                .with_context(|| format!("creating log dir {log_dir}"))?;
            let file_appender = tracing_appender::rolling::never(&log_dir, "tickbind.log");
            let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);
            tracing_subscriber::registry()
                .with(filter)
                .with(fmt::layer().with_writer(non_blocking).with_ansi(false))
                .with(fmt::layer().with_writer(std::io::stderr))
                .init();
            info!("Logging to {}/tickbind.log", log_dir);
            Some(guard)
        }
        Err(_) => {
            tracing_subscriber::registry()
                .with(filter)
                .with(fmt::layer().with_writer(std::io::stderr))
                .init();
            None
        }
    };

    let settings = args.into_settings();
    info!(
        "Starting tickbind: bindings at {:?}, reload key {}, fixed tick {} Hz",
        settings.binding_config().path(),
        settings.reload_key,
        settings.fixed_hz
    );

    App::new()
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: "tickbind".into(),
                resolution: (640, 360).into(),
                ..default()
            }),
            ..default()
        }))
        .add_plugins(TickbindPlugin::new(settings))
        .run();

    Ok(())
}

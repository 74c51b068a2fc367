//! Host settings.

use std::path::PathBuf;

use tickbind_kernel::{BindingConfig, ConfigFormat, Key, ReloadController};

/// How the host finds its bindings and paces its ticks.
#[derive(Clone, Debug)]
pub struct HostSettings {
    pub config_dir: PathBuf,
    /// File stem of the bindings file, e.g. `Input` for `Input.ron`.
    pub config_name: String,
    pub format: ConfigFormat,
    pub reload_key: Key,
    /// Fixed-tick rate in Hz.
    pub fixed_hz: f64,
}

impl HostSettings {
    pub const DEFAULT_NAME: &'static str = "Input";
    pub const DEFAULT_FIXED_HZ: f64 = 20.0;

    /// `$XDG_CONFIG_HOME/tickbind` or platform equivalent, falling back to `.`.
    pub fn default_config_dir() -> PathBuf {
        dirs::config_dir()
            .map(|dir| dir.join("tickbind"))
            .unwrap_or_else(|| PathBuf::from("."))
    }

    pub fn with_config_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.config_dir = dir.into();
        self
    }

    pub fn binding_config(&self) -> BindingConfig {
        BindingConfig::new(self.config_name.clone(), self.config_dir.clone())
            .with_format(self.format)
    }
}

impl Default for HostSettings {
    fn default() -> Self {
        Self {
            config_dir: Self::default_config_dir(),
            config_name: Self::DEFAULT_NAME.to_string(),
            format: ConfigFormat::default(),
            reload_key: ReloadController::DEFAULT_KEY,
            fixed_hz: Self::DEFAULT_FIXED_HZ,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = HostSettings::default().with_config_dir("/tmp/tb");
        assert_eq!(settings.reload_key, Key::F11);
        assert_eq!(settings.fixed_hz, 20.0);
        assert_eq!(
            settings.binding_config().path(),
            PathBuf::from("/tmp/tb/Input.ron")
        );
    }
}

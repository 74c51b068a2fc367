//! Persisted binding configuration.
//!
//! One file per configuration at `<dir>/<name>.<ext>`, RON by default, JSON
//! optionally. Both encodings share the same logical shape:
//!
//! ```ron
//! (
//!     oneShot: [
//!         (trigger: (key: "F9"), actions: ["NoopAction"]),
//!     ],
//!     repeating: [
//!         (trigger: (key: "F10", modifier: "RightShift"), actions: ["NoopAction", "NoopAction"]),
//!     ],
//! )
//! ```
//!
//! A failed read or decode leaves the in-memory table untouched and surfaces
//! the error; callers decide whether to regenerate defaults or abort.

use std::path::{Path, PathBuf};

use strum::{Display, EnumString};
use tracing::{debug, info};

use crate::binding::BindingTable;

/// Error type for config operations.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("IO error on {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("RON parse error: {0}")]
    Ron(#[from] ron::error::SpannedError),

    #[error("RON encode error: {0}")]
    RonEncode(#[from] ron::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// On-disk encoding.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Display, EnumString)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum ConfigFormat {
    #[default]
    Ron,
    Json,
}

impl ConfigFormat {
    pub fn extension(self) -> &'static str {
        match self {
            ConfigFormat::Ron => "ron",
            ConfigFormat::Json => "json",
        }
    }

    /// Pretty (indented) encoding.
    pub fn encode(self, table: &BindingTable) -> Result<String, ConfigError> {
        Ok(match self {
            ConfigFormat::Ron => ron::ser::to_string_pretty(table, ron::ser::PrettyConfig::default())?,
            ConfigFormat::Json => serde_json::to_string_pretty(table)?,
        })
    }

    pub fn decode(self, text: &str) -> Result<BindingTable, ConfigError> {
        Ok(match self {
            ConfigFormat::Ron => ron::from_str(text)?,
            ConfigFormat::Json => serde_json::from_str(text)?,
        })
    }
}

/// Observer fired after every successful load or default generation.
pub type LoadedCallback = Box<dyn FnMut(&BindingTable) + Send + Sync>;

/// A named binding table backed by a file.
pub struct BindingConfig {
    name: String,
    dir: PathBuf,
    format: ConfigFormat,
    table: BindingTable,
    on_loaded: Vec<LoadedCallback>,
}

impl std::fmt::Debug for BindingConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BindingConfig")
            .field("path", &self.path())
            .field("table", &self.table)
            .field("observers", &self.on_loaded.len())
            .finish()
    }
}

impl BindingConfig {
    /// Config `name` stored in `dir`. Nothing is read until `load`.
    pub fn new(name: impl Into<String>, dir: impl Into<PathBuf>) -> Self {
        Self {
            name: name.into(),
            dir: dir.into(),
            format: ConfigFormat::default(),
            table: BindingTable::default(),
            on_loaded: Vec::new(),
        }
    }

    pub fn with_format(mut self, format: ConfigFormat) -> Self {
        self.format = format;
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn format(&self) -> ConfigFormat {
        self.format
    }

    /// `<dir>/<name>.<ext>`
    pub fn path(&self) -> PathBuf {
        self.dir
            .join(format!("{}.{}", self.name, self.format.extension()))
    }

    pub fn exists(&self) -> bool {
        self.path().is_file()
    }

    /// The in-memory table.
    pub fn table(&self) -> &BindingTable {
        &self.table
    }

    /// Replace the in-memory table. Not persisted until `save`.
    pub fn set_table(&mut self, table: BindingTable) {
        self.table = table;
    }

    /// Register an observer for the loaded notification.
    pub fn on_loaded(&mut self, callback: impl FnMut(&BindingTable) + Send + Sync + 'static) {
        self.on_loaded.push(Box::new(callback));
    }

    fn notify_loaded(&mut self) {
        for callback in &mut self.on_loaded {
            callback(&self.table);
        }
    }

    /// Install the sample table, write it out, then notify.
    pub fn generate_default(&mut self) -> Result<(), ConfigError> {
        info!("Generating default bindings at {:?}", self.path());
        self.table = BindingTable::sample();
        self.save()?;
        self.notify_loaded();
        Ok(())
    }

    /// Read and decode the file, replace the in-memory table wholesale, notify.
    pub fn load(&mut self) -> Result<(), ConfigError> {
        let path = self.path();
        let text = std::fs::read_to_string(&path).map_err(|source| ConfigError::Io {
            path: path.clone(),
            source,
        })?;
        let table = self.format.decode(&text)?;
        debug!(
            "Loaded {} one-shot and {} repeating bindings from {:?}",
            table.one_shot.len(),
            table.repeating.len(),
            path
        );
        self.table = table;
        self.notify_loaded();
        Ok(())
    }

    /// Write the in-memory table, overwriting any existing file.
    pub fn save(&self) -> Result<(), ConfigError> {
        let path = self.path();
        let text = self.format.encode(&self.table)?;
        std::fs::create_dir_all(&self.dir).map_err(|source| ConfigError::Io {
            path: self.dir.clone(),
            source,
        })?;
        std::fs::write(&path, text).map_err(|source| ConfigError::Io { path, source })
    }

    /// Startup entry point: generate defaults if the file is missing, load otherwise.
    pub fn load_or_create(&mut self) -> Result<(), ConfigError> {
        if self.exists() {
            self.load()
        } else {
            self.generate_default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use tickbind_types::{Key, Trigger};

    fn counter(config: &mut BindingConfig) -> Arc<AtomicUsize> {
        let fired = Arc::new(AtomicUsize::new(0));
        let seen = fired.clone();
        config.on_loaded(move |_| {
            seen.fetch_add(1, Ordering::SeqCst);
        });
        fired
    }

    #[test]
    fn test_path() {
        let config = BindingConfig::new("Input", "/tmp/tb");
        assert_eq!(config.path(), PathBuf::from("/tmp/tb/Input.ron"));

        let config = config.with_format(ConfigFormat::Json);
        assert_eq!(config.path(), PathBuf::from("/tmp/tb/Input.json"));
    }

    #[test]
    fn test_format_from_str() {
        assert_eq!("RON".parse::<ConfigFormat>().unwrap(), ConfigFormat::Ron);
        assert_eq!("json".parse::<ConfigFormat>().unwrap(), ConfigFormat::Json);
        assert_eq!(ConfigFormat::Json.to_string(), "json");
    }

    #[test]
    fn test_load_or_create_generates_default() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = BindingConfig::new("Input", dir.path());
        let fired = counter(&mut config);

        assert!(!config.exists());
        config.load_or_create().unwrap();
        assert!(config.exists());
        assert_eq!(config.table(), &BindingTable::sample());
        assert_eq!(fired.load(Ordering::SeqCst), 1);

        // A second config over the same file loads what was written.
        let mut reread = BindingConfig::new("Input", dir.path());
        reread.load_or_create().unwrap();
        assert_eq!(reread.table(), &BindingTable::sample());
    }

    #[test]
    fn test_save_is_indented_and_overwrites() {
        let dir = tempfile::tempdir().unwrap();
        for format in [ConfigFormat::Ron, ConfigFormat::Json] {
            let mut config = BindingConfig::new("Input", dir.path()).with_format(format);
            config.set_table(BindingTable::sample());
            config.save().unwrap();

            let mut smaller = BindingTable::new();
            smaller.bind_one_shot(Trigger::new(Key::A), ["NoopAction"]);
            config.set_table(smaller.clone());
            config.save().unwrap();

            let text = std::fs::read_to_string(config.path()).unwrap();
            assert!(text.lines().count() > 1, "{format} output should be indented");

            config.set_table(BindingTable::new());
            config.load().unwrap();
            assert_eq!(config.table(), &smaller);
        }
    }

    #[test]
    fn test_load_missing_file_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = BindingConfig::new("Nope", dir.path());
        let fired = counter(&mut config);
        assert!(matches!(config.load(), Err(ConfigError::Io { .. })));
        assert_eq!(fired.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_corrupt_file_keeps_table() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = BindingConfig::new("Input", dir.path());
        config.load_or_create().unwrap();
        let fired = counter(&mut config);

        std::fs::write(config.path(), "(oneShot: [ (trigger: ").unwrap();
        assert!(matches!(config.load(), Err(ConfigError::Ron(_))));
        assert_eq!(config.table(), &BindingTable::sample());
        assert_eq!(fired.load(Ordering::SeqCst), 0);

        std::fs::write(config.path(), r#"(oneShot: [(trigger: (key: "Hyper"), actions: [])])"#).unwrap();
        assert!(config.load().is_err(), "unknown key names are decode errors");
        assert_eq!(config.table(), &BindingTable::sample());
    }

    #[test]
    fn test_load_reads_hand_written_json() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = BindingConfig::new("Input", dir.path()).with_format(ConfigFormat::Json);
        std::fs::write(
            config.path(),
            r#"{
                "oneShot": [
                    { "trigger": { "key": "f9" }, "actions": ["NoopAction"] },
                    { "trigger": { "key": "A", "modifier": "None" }, "actions": [] }
                ],
                "repeating": []
            }"#,
        )
        .unwrap();
        config.load().unwrap();
        assert_eq!(config.table().one_shot[0].trigger, Trigger::new(Key::F9));
        assert_eq!(config.table().one_shot[1].trigger, Trigger::new(Key::A));
    }
}

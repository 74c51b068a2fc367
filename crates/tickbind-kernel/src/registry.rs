//! Action registry — name → factory, with the catalog as fallback.
//!
//! Resolution order in [`ActionRegistry::create`]:
//! 1. explicitly registered short names (`NoopAction`)
//! 2. the [`ActionCatalog`], by fully qualified path
//!
//! Registration is write-once per name: a second registration under the same
//! name is rejected and the first one stays.

use std::collections::HashMap;
use std::sync::Arc;

use thiserror::Error;
use tracing::{debug, info};

use crate::action::{Action, ActionFactory, ActionType, construct_boxed, short_type_name};
use crate::catalog::ActionCatalog;

/// Why a registration was refused.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RegisterError {
    /// Empty, contains whitespace, or uses a character reserved by binding text (`+`, `,`).
    #[error("invalid action name {0:?}")]
    InvalidName(String),

    /// Another action is already registered under this name.
    #[error("action {0:?} is already registered")]
    Duplicate(String),
}

/// A candidate for registration: a name plus a way to build instances.
#[derive(Clone)]
pub struct ActionEntry {
    name: String,
    factory: ActionFactory,
}

impl std::fmt::Debug for ActionEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ActionEntry").field("name", &self.name).finish()
    }
}

impl ActionEntry {
    /// Register with a custom factory, e.g. a closure that captures shared state.
    pub fn new(
        name: impl Into<String>,
        factory: impl Fn(&str) -> Box<dyn Action> + Send + Sync + 'static,
    ) -> Self {
        Self {
            name: name.into(),
            factory: Arc::new(factory),
        }
    }

    /// Register a type under its short type name.
    pub fn of<T: ActionType>() -> Self {
        Self::named::<T>(short_type_name::<T>())
    }

    /// Register a type under an explicit name.
    pub fn named<T: ActionType>(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            factory: Arc::new(construct_boxed::<T>),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

fn validate_name(name: &str) -> bool {
    !name.is_empty() && !name.chars().any(|c| c.is_whitespace() || c == '+' || c == ',')
}

/// Name → action factory.
pub struct ActionRegistry {
    entries: HashMap<String, ActionFactory>,
    catalog: ActionCatalog,
}

impl Default for ActionRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for ActionRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ActionRegistry")
            .field("entries", &self.names())
            .field("catalog", &self.catalog)
            .finish()
    }
}

impl ActionRegistry {
    /// Empty registry backed by the discovered catalog.
    pub fn new() -> Self {
        Self::with_catalog(ActionCatalog::discover())
    }

    /// Empty registry backed by the given catalog.
    pub fn with_catalog(catalog: ActionCatalog) -> Self {
        Self {
            entries: HashMap::new(),
            catalog,
        }
    }

    /// Add an action under its name. Refuses invalid names and duplicates.
    pub fn register(&mut self, entry: ActionEntry) -> Result<(), RegisterError> {
        if !validate_name(&entry.name) {
            debug!("Failed to register action: {:?} is not a valid action name", entry.name);
            return Err(RegisterError::InvalidName(entry.name));
        }
        if self.entries.contains_key(&entry.name) {
            debug!("Failed to register action: {}", entry.name);
            return Err(RegisterError::Duplicate(entry.name));
        }
        info!("Registered action: {}", entry.name);
        self.entries.insert(entry.name, entry.factory);
        Ok(())
    }

    /// Register every catalog type under its short name.
    ///
    /// Short-name collisions keep the first type (in qualified-path order);
    /// the others stay reachable through their qualified path.
    pub fn register_all_builtin(&mut self) -> usize {
        let candidates: Vec<ActionEntry> = self
            .catalog
            .iter()
            .map(|(_, entry)| ActionEntry {
                name: entry.name.clone(),
                factory: entry.factory.clone(),
            })
            .collect();

        candidates
            .into_iter()
            .filter(|entry| self.register(entry.clone()).is_ok())
            .count()
    }

    /// Build a fresh instance for `name`, or `None` if nothing resolves it.
    pub fn create(&self, name: &str) -> Option<Box<dyn Action>> {
        if let Some(factory) = self.entries.get(name) {
            return Some(factory(name));
        }
        self.catalog.resolve(name)
    }

    /// Is `name` explicitly registered? (Catalog-only types are not counted.)
    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    /// Registered names, sorted.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.entries.keys().map(|s| s.as_str()).collect();
        names.sort_unstable();
        names
    }

    pub fn catalog(&self) -> &ActionCatalog {
        &self.catalog
    }

    pub fn catalog_mut(&mut self) -> &mut ActionCatalog {
        &mut self.catalog
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

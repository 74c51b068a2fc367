//! Action catalog: the dynamic-resolution tier behind the registry.
//!
//! Every type declared with [`declare_action!`](crate::declare_action) submits
//! an [`ActionDecl`] at link time. At startup the catalog collects those
//! declarations (plus the kernel's own built-ins) keyed by their fully
//! qualified path, e.g. `tickbind_kernel::actions::NoopAction`.
//!
//! The registry consults the catalog only when a name is not explicitly
//! registered, so late-bound or third-party actions stay addressable by their
//! qualified path without pre-registration. No reflection involved: a type is
//! reachable only if it was declared.

use std::collections::BTreeMap;
use std::sync::Arc;

use tracing::debug;

use crate::action::{Action, ActionFactory};

/// A link-time action declaration.
pub struct ActionDecl {
    /// Short name, used for registry registration (`NoopAction`).
    pub name: &'static str,
    /// Fully qualified path, used for catalog lookup.
    pub qualified_name: &'static str,
    /// Constructor.
    pub construct: fn(&str) -> Box<dyn Action>,
}

inventory::collect!(ActionDecl);

/// Declare an [`ActionType`](crate::action::ActionType) so that it is
/// discovered by [`ActionCatalog::discover`].
///
/// ```ignore
/// struct Jump(String);
/// impl Action for Jump { /* ... */ }
/// impl ActionType for Jump { /* ... */ }
/// tickbind_kernel::declare_action!(Jump);
/// ```
#[macro_export]
macro_rules! declare_action {
    ($ty:ident) => {
        $crate::inventory::submit! {
            $crate::catalog::ActionDecl {
                name: stringify!($ty),
                qualified_name: concat!(module_path!(), "::", stringify!($ty)),
                construct: $crate::action::construct_boxed::<$ty>,
            }
        }
    };
}

/// One resolvable type in the catalog.
#[derive(Clone)]
pub struct CatalogEntry {
    /// Short name (`NoopAction`).
    pub name: String,
    /// Builds an instance.
    pub factory: ActionFactory,
}

/// Qualified path → constructor map.
#[derive(Clone, Default)]
pub struct ActionCatalog {
    entries: BTreeMap<String, CatalogEntry>,
}

impl std::fmt::Debug for ActionCatalog {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ActionCatalog")
            .field("entries", &self.entries.keys().collect::<Vec<_>>())
            .finish()
    }
}

impl ActionCatalog {
    /// An empty catalog. Nothing resolves dynamically.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Collect the kernel's built-ins and every `declare_action!` in the binary.
    pub fn discover() -> Self {
        let mut catalog = Self::empty();
        let declared = crate::actions::BUILTINS
            .iter()
            .chain(inventory::iter::<ActionDecl>);
        for decl in declared {
            catalog.insert_decl(decl);
        }
        debug!("Discovered {} action types", catalog.len());
        catalog
    }

    /// Add a link-time declaration.
    pub fn insert_decl(&mut self, decl: &ActionDecl) -> bool {
        let construct = decl.construct;
        self.insert(decl.qualified_name, decl.name, Arc::new(construct))
    }

    /// Add a type under its qualified path. The first insertion wins.
    pub fn insert(
        &mut self,
        qualified_name: impl Into<String>,
        name: impl Into<String>,
        factory: ActionFactory,
    ) -> bool {
        let qualified_name = qualified_name.into();
        if self.entries.contains_key(&qualified_name) {
            debug!("Action type {} already in catalog", qualified_name);
            return false;
        }
        self.entries.insert(
            qualified_name,
            CatalogEntry {
                name: name.into(),
                factory,
            },
        );
        true
    }

    /// Construct the type at `qualified_name`, giving the instance that id.
    pub fn resolve(&self, qualified_name: &str) -> Option<Box<dyn Action>> {
        self.entries
            .get(qualified_name)
            .map(|entry| (entry.factory)(qualified_name))
    }

    pub fn contains(&self, qualified_name: &str) -> bool {
        self.entries.contains_key(qualified_name)
    }

    /// All entries, ordered by qualified path.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &CatalogEntry)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

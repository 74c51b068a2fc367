//! The action capability.
//!
//! An action is a named unit of behavior invoked by dispatch. The kernel never
//! matches on concrete action types; it resolves them by name through the
//! [`ActionRegistry`](crate::registry::ActionRegistry) and calls `execute`.

use std::sync::Arc;

/// A constructed, executable action.
///
/// Actions are fire-and-forget: `execute` takes no input and returns nothing.
/// Actions that need state use interior mutability.
pub trait Action: Send + Sync {
    /// The name this instance was created from. Stable for its lifetime.
    fn id(&self) -> &str;

    /// Run the action. Must not block; a blocking action stalls the tick.
    fn execute(&self);
}

impl std::fmt::Debug for dyn Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("Action").field(&self.id()).finish()
    }
}

/// An action type that can be constructed from just its id.
///
/// Implement this to make a type registrable with [`ActionEntry::of`] or
/// discoverable with [`declare_action!`](crate::declare_action).
pub trait ActionType: Action + Sized + 'static {
    fn construct(id: &str) -> Self;
}

/// Builds a fresh action instance for the given id.
pub type ActionFactory = Arc<dyn Fn(&str) -> Box<dyn Action> + Send + Sync>;

/// Boxed constructor for an [`ActionType`]; usable as a plain `fn` pointer.
pub fn construct_boxed<T: ActionType>(id: &str) -> Box<dyn Action> {
    Box::new(T::construct(id))
}

/// Short (unqualified) type name: `tickbind_kernel::actions::NoopAction` → `NoopAction`.
pub(crate) fn short_type_name<T: ?Sized>() -> &'static str {
    let full = std::any::type_name::<T>();
    let base = full.split('<').next().unwrap_or(full);
    base.rsplit("::").next().unwrap_or(base)
}

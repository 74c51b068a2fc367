//! Built-in actions.

use tracing::debug;

use crate::action::{Action, ActionType, construct_boxed};
use crate::catalog::ActionDecl;

/// Built-ins are listed here rather than submitted through `inventory`, so
/// they are present even when the linker drops this object file.
pub(crate) static BUILTINS: &[ActionDecl] = &[ActionDecl {
    name: "NoopAction",
    qualified_name: "tickbind_kernel::actions::NoopAction",
    construct: construct_boxed::<NoopAction>,
}];

/// Does nothing. Sample content for the default binding table.
#[derive(Debug, Clone)]
pub struct NoopAction {
    id: String,
}

impl NoopAction {
    pub const NAME: &'static str = "NoopAction";
}

impl Action for NoopAction {
    fn id(&self) -> &str {
        &self.id
    }

    fn execute(&self) {
        debug!("{}: this does nothing", self.id);
    }
}

impl ActionType for NoopAction {
    fn construct(id: &str) -> Self {
        Self { id: id.to_string() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_qualified_name_matches_module() {
        assert_eq!(BUILTINS[0].qualified_name, std::any::type_name::<NoopAction>());
        assert_eq!(BUILTINS[0].name, NoopAction::NAME);
    }
}

//! The persisted trigger → action-name table.

use serde::{Deserialize, Serialize};
use tickbind_types::{Key, Trigger};

use crate::actions::NoopAction;

/// One trigger bound to an ordered list of action names.
///
/// Names may repeat; each occurrence becomes its own action instance and
/// actions fire in the listed order.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BindingEntry {
    pub trigger: Trigger,
    #[serde(default)]
    pub actions: Vec<String>,
}

impl BindingEntry {
    pub fn new<I, S>(trigger: Trigger, actions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            trigger,
            actions: actions.into_iter().map(Into::into).collect(),
        }
    }
}

/// The complete binding configuration.
///
/// `one_shot` entries fire once per key press (frame tick, edge-triggered);
/// `repeating` entries fire every fixed tick while held (level-triggered).
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BindingTable {
    #[serde(default)]
    pub one_shot: Vec<BindingEntry>,
    #[serde(default)]
    pub repeating: Vec<BindingEntry>,
}

impl BindingTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// The out-of-box table: `F9` fires `NoopAction` once, `F10+RightShift`
    /// fires it twice per fixed tick while held.
    pub fn sample() -> Self {
        let mut table = Self::new();
        table.bind_one_shot(Trigger::new(Key::F9), [NoopAction::NAME]);
        table.bind_repeating(
            Trigger::with_modifier(Key::F10, Key::RightShift),
            [NoopAction::NAME, NoopAction::NAME],
        );
        table
    }

    /// Append a one-shot entry.
    pub fn bind_one_shot<I, S>(&mut self, trigger: Trigger, actions: I) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.one_shot.push(BindingEntry::new(trigger, actions));
        self
    }

    /// Append a repeating entry.
    pub fn bind_repeating<I, S>(&mut self, trigger: Trigger, actions: I) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.repeating.push(BindingEntry::new(trigger, actions));
        self
    }

    pub fn is_empty(&self) -> bool {
        self.one_shot.is_empty() && self.repeating.is_empty()
    }
}

//! Trigger — a key plus an optional modifier.
//!
//! Two detection modes:
//! - [`Trigger::is_down`] is edge-triggered (fires on the tick the main key goes down)
//! - [`Trigger::is_pressed`] is level-triggered (fires every tick it is held)
//!
//! In both cases the modifier only has to be held; its own edge is irrelevant.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::TriggerParseError;
use crate::key::Key;
use crate::state::KeyState;

/// An input combination: main key + modifier (`Key::None` = no modifier).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Trigger {
    key: Key,
    #[serde(default, skip_serializing_if = "no_modifier")]
    modifier: Key,
}

fn no_modifier(key: &Key) -> bool {
    key.is_none()
}

impl Trigger {
    /// Returned by a failed [`Trigger::parse`]. Never fires.
    pub const PLACEHOLDER: Trigger = Trigger {
        key: Key::None,
        modifier: Key::None,
    };

    /// A bare key with no modifier.
    pub const fn new(key: Key) -> Self {
        Self {
            key,
            modifier: Key::None,
        }
    }

    /// A key that only fires while `modifier` is held.
    pub const fn with_modifier(key: Key, modifier: Key) -> Self {
        Self { key, modifier }
    }

    pub fn key(&self) -> Key {
        self.key
    }

    pub fn modifier(&self) -> Key {
        self.modifier
    }

    fn modifier_held(&self, keys: &impl KeyState) -> bool {
        self.modifier.is_none() || keys.is_held(self.modifier)
    }

    /// Level-triggered: true every tick the main key is held (and the modifier, if any).
    pub fn is_pressed(&self, keys: &impl KeyState) -> bool {
        keys.is_held(self.key) && self.modifier_held(keys)
    }

    /// Edge-triggered: true only on the tick the main key goes down (modifier held).
    pub fn is_down(&self, keys: &impl KeyState) -> bool {
        keys.is_pressed_this_tick(self.key) && self.modifier_held(keys)
    }

    /// Lenient parse for config-facing code.
    ///
    /// On failure the error is logged with the offending text and the
    /// placeholder trigger is returned alongside `false`.
    pub fn parse(text: &str) -> (Trigger, bool) {
        match text.parse() {
            Ok(trigger) => (trigger, true),
            Err(e) => {
                tracing::error!("Failed to parse trigger {:?}: {}", text, e);
                (Trigger::PLACEHOLDER, false)
            }
        }
    }
}

impl From<Key> for Trigger {
    fn from(key: Key) -> Self {
        Trigger::new(key)
    }
}

impl fmt::Display for Trigger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.modifier.is_none() {
            write!(f, "{}", self.key)
        } else {
            write!(f, "{}+{}", self.key, self.modifier)
        }
    }
}

fn parse_key(token: &str) -> Result<Key, TriggerParseError> {
    token
        .trim()
        .parse()
        .map_err(|_| TriggerParseError::UnknownKey {
            token: token.to_string(),
        })
}

impl FromStr for Trigger {
    type Err = TriggerParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let tokens: Vec<&str> = s.split('+').collect();
        match tokens.as_slice() {
            [key] => Ok(Trigger::new(parse_key(key)?)),
            [key, modifier] => Ok(Trigger::with_modifier(parse_key(key)?, parse_key(modifier)?)),
            _ => Err(TriggerParseError::TokenCount {
                input: s.to_string(),
                count: tokens.len(),
            }),
        }
    }
}

//! Shared input types for tickbind.
//!
//! This crate is the leaf of the workspace: key identifiers, the trigger
//! value type, and the key-state query that hosts implement. It has **no
//! internal tickbind dependencies**.
//!
//! |------------------|----------------------------------------------|
//! | Type             | Purpose                                      |
//! |------------------|----------------------------------------------|
//! | [`Key`]          | Physical key identifier (+ `None` sentinel)  |
//! | [`Trigger`]      | Key + optional modifier, edge/level checks   |
//! | [`KeyState`]     | Host's "held" / "pressed this tick" query    |
//! | [`KeySnapshot`]  | Owned `KeyState` for tests and simple hosts  |
//! |------------------|----------------------------------------------|

pub mod error;
pub mod key;
pub mod state;
pub mod trigger;

pub use error::TriggerParseError;
pub use key::Key;
pub use state::{KeySnapshot, KeyState};
pub use trigger::Trigger;

//! Error types for trigger text parsing.

use thiserror::Error;

/// Why a trigger string could not be parsed.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TriggerParseError {
    /// The text did not split into one or two `+`-separated tokens.
    #[error("expected `Key` or `Key+Modifier`, got {count} tokens in {input:?}")]
    TokenCount { input: String, count: usize },

    /// A token did not name a known key.
    #[error("unknown key {token:?}")]
    UnknownKey { token: String },
}

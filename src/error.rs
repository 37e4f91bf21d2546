//! Error types for brickwork.
//!
//! Every error here surfaces exactly once to the caller of the triggering
//! operation; nothing is retried. Degradable conditions (missing class
//! tokens) are absorbed with a diagnostic instead of reaching this enum.

use thiserror::Error;

/// Errors surfaced by the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BrickError {
    /// A theme key in the partial configuration is not a brick identifier.
    ///
    /// Raised at configuration-resolution time; the offending config is
    /// rejected rather than silently stored.
    #[error("unknown theme key '{key}' is not a brick identifier")]
    UnknownThemeKey { key: String },

    /// The navigation module could not parse a link target.
    ///
    /// Fatal to that click's handling: no navigation call is made.
    #[error("cannot resolve link target '{href}'")]
    InvalidLinkTarget { href: String },
}

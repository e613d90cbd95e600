//! ID types for the draft assistant.

use crate::error::DraftError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Type-safe wrapper for player IDs.
///
/// Player IDs are the string slugs used by the seed data (e.g. `"qb-allen"`),
/// wrapped so they cannot be confused with names or team abbreviations.
///
/// # Examples
///
/// ```rust
/// use ffl_draft::PlayerId;
///
/// let id = PlayerId::new("rb-barkley");
/// assert_eq!(id.as_str(), "rb-barkley");
/// assert_eq!(id.to_string(), "rb-barkley");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PlayerId(pub String);

impl PlayerId {
    /// Create a new PlayerId from anything string-like.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Get the underlying string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for PlayerId {
    type Err = DraftError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(Self(s.to_string()))
    }
}

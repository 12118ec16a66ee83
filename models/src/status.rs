//! Editorial lifecycle for blog posts and case studies.
//!
//! The backend accepts any status on create/update; the documented flow is
//! `draft -> published -> archived` with both later stages able to fall back
//! to `draft`. The client never blocks an off-path change, it only reports it.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Lifecycle stage of a content item.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntityStatus {
    #[default]
    Draft,
    Published,
    Archived,
}

/// Error returned when parsing an unknown status string.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown status `{0}` (expected draft, published or archived)")]
pub struct ParseStatusError(pub String);

impl EntityStatus {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Draft => "draft",
            Self::Published => "published",
            Self::Archived => "archived",
        }
    }

    /// Whether `self -> next` is one of the documented lifecycle moves.
    /// Staying in the same stage always counts as documented.
    #[must_use]
    pub fn is_documented_transition(self, next: Self) -> bool {
        matches!(
            (self, next),
            (Self::Draft, Self::Draft | Self::Published)
                | (Self::Published, _)
                | (Self::Archived, Self::Archived | Self::Draft)
        )
    }
}

impl fmt::Display for EntityStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EntityStatus {
    type Err = ParseStatusError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "draft" => Ok(Self::Draft),
            "published" => Ok(Self::Published),
            "archived" => Ok(Self::Archived),
            _ => Err(ParseStatusError(s.to_owned())),
        }
    }
}

#[cfg(test)]
#[path = "status_test.rs"]
mod tests;

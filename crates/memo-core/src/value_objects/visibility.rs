//! Memo visibility tier

use serde::{Deserialize, Serialize};
use std::fmt;

/// Who may see a memo, from most to least restrictive.
///
/// `Private` is creator-only, `Protected` is visible to any authenticated
/// user, `Public` is visible to anyone including anonymous requesters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Visibility {
    #[default]
    Private,
    Protected,
    Public,
}

impl Visibility {
    /// Canonical wire string (matches the stored representation)
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Private => "PRIVATE",
            Self::Protected => "PROTECTED",
            Self::Public => "PUBLIC",
        }
    }
}

impl fmt::Display for Visibility {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error when parsing a visibility tier from string
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid visibility: {0}")]
pub struct VisibilityParseError(pub String);

impl std::str::FromStr for Visibility {
    type Err = VisibilityParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "PRIVATE" => Ok(Self::Private),
            "PROTECTED" => Ok(Self::Protected),
            "PUBLIC" => Ok(Self::Public),
            other => Err(VisibilityParseError(other.to_string())),
        }
    }
}

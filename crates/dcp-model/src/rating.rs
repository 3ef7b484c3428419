//! Rating vocabularies used by the data inventory step
//!
//! The wizard stores ratings as plain strings. They stay strings inside the
//! payload types so that an unexpected value degrades one field instead of
//! invalidating the whole step; these enums interpret them on demand.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Four-point sensitivity / business impact scale
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Rating {
    /// No sensitivity or impact
    None,
    /// Low
    Low,
    /// Medium
    Medium,
    /// High
    High,
}

impl Rating {
    /// All ratings, lowest first
    pub const ALL: [Rating; 4] = [Rating::None, Rating::Low, Rating::Medium, Rating::High];

    /// Interpret a stored rating string (case-insensitive, trimmed)
    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "none" => Some(Rating::None),
            "low" => Some(Rating::Low),
            "medium" => Some(Rating::Medium),
            "high" => Some(Rating::High),
            _ => None,
        }
    }

    /// Wire form as written by the wizard
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Rating::None => "none",
            Rating::Low => "low",
            Rating::Medium => "medium",
            Rating::High => "high",
        }
    }

    /// Capitalized label for prompts and documents
    #[inline]
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            Rating::None => "None",
            Rating::Low => "Low",
            Rating::Medium => "Medium",
            Rating::High => "High",
        }
    }
}

impl fmt::Display for Rating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Yes/no answer as stored by the wizard
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum YesNo {
    /// Yes
    Yes,
    /// No
    No,
}

impl YesNo {
    /// Interpret a stored answer; anything but `yes` counts as no
    #[must_use]
    pub fn parse(value: &str) -> Self {
        if value.trim().eq_ignore_ascii_case("yes") {
            YesNo::Yes
        } else {
            YesNo::No
        }
    }

    /// Whether the answer was yes
    #[inline]
    #[must_use]
    pub fn is_yes(self) -> bool {
        matches!(self, YesNo::Yes)
    }
}

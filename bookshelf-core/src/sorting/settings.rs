//! Behaviour switches for the sort engine
//!
//! Defaults reproduce the established list behaviour: ratings compare as
//! text and the most recently added directive is the primary key.

use crate::error::SortParseError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// How the rating column is compared.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RatingComparison {
    /// Compare the rendered rating text, so `"10"` sorts before `"2"`.
    #[default]
    Text,
    /// Compare rating values numerically; unrated books sort last.
    Numeric,
}

/// Which directive acts as the primary key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PassOrder {
    /// Passes run in directive order; the last directive dominates.
    #[default]
    LastDominates,
    /// Passes run in reverse; the first directive dominates.
    FirstDominates,
}

/// Tunables for [`SortEngine`](super::SortEngine).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SortSettings {
    /// Rating comparison mode.
    pub rating_comparison: RatingComparison,
    /// Directive precedence.
    pub pass_order: PassOrder,
}

impl RatingComparison {
    /// Identifier used in config files and env overrides.
    pub const fn as_str(self) -> &'static str {
        match self {
            RatingComparison::Text => "text",
            RatingComparison::Numeric => "numeric",
        }
    }
}

impl PassOrder {
    /// Identifier used in config files and env overrides.
    pub const fn as_str(self) -> &'static str {
        match self {
            PassOrder::LastDominates => "last_dominates",
            PassOrder::FirstDominates => "first_dominates",
        }
    }
}

impl fmt::Display for RatingComparison {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for PassOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RatingComparison {
    type Err = SortParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" | "string" | "lexicographic" => Ok(RatingComparison::Text),
            "numeric" | "number" => Ok(RatingComparison::Numeric),
            _ => Err(SortParseError::InvalidSetting {
                setting: "rating_comparison",
                value: s.to_string(),
            }),
        }
    }
}

impl FromStr for PassOrder {
    type Err = SortParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().replace('-', "_").as_str() {
            "last_dominates" | "last" => Ok(PassOrder::LastDominates),
            "first_dominates" | "first" => Ok(PassOrder::FirstDominates),
            _ => Err(SortParseError::InvalidSetting {
                setting: "pass_order",
                value: s.to_string(),
            }),
        }
    }
}

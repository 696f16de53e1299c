//! Directive store
//!
//! A `DirectiveSequence` is the ordered list of active sort directives, at
//! most one per attribute. It only changes through [`toggle`], which cycles a
//! single attribute through absent -> ascending -> descending -> absent and
//! leaves every other directive where it was.

use super::attribute::AttributeName;
use super::indicator::DirectionLookup;
use crate::error::SortParseError;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

/// Sort direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    /// Smallest first
    Ascending,
    /// Largest first
    Descending,
}

impl SortDirection {
    /// `+1` for ascending, `-1` for descending.
    pub const fn sign(self) -> i8 {
        match self {
            SortDirection::Ascending => 1,
            SortDirection::Descending => -1,
        }
    }

    /// Orient a base (ascending) comparison result by multiplying it with
    /// [`sign`](Self::sign).
    #[inline]
    pub fn apply(self, ordering: Ordering) -> Ordering {
        (ordering as i8 * self.sign()).cmp(&0)
    }

    /// Lowercase name.
    pub const fn as_str(self) -> &'static str {
        match self {
            SortDirection::Ascending => "ascending",
            SortDirection::Descending => "descending",
        }
    }
}

impl fmt::Display for SortDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortDirection {
    type Err = SortParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "asc" | "ascending" => Ok(SortDirection::Ascending),
            "desc" | "descending" => Ok(SortDirection::Descending),
            _ => Err(SortParseError::UnknownDirection(s.to_string())),
        }
    }
}

/// One entry of a directive sequence.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SortDirective {
    /// Attribute the directive sorts on.
    pub attribute: AttributeName,
    /// Requested direction.
    pub direction: SortDirection,
}

impl SortDirective {
    /// Build a directive.
    pub fn new(
        attribute: impl Into<AttributeName>,
        direction: SortDirection,
    ) -> Self {
        Self {
            attribute: attribute.into(),
            direction,
        }
    }

    /// Ascending directive on `attribute`.
    pub fn ascending(attribute: impl Into<AttributeName>) -> Self {
        Self::new(attribute, SortDirection::Ascending)
    }

    /// Descending directive on `attribute`.
    pub fn descending(attribute: impl Into<AttributeName>) -> Self {
        Self::new(attribute, SortDirection::Descending)
    }
}

/// Ordered, insertion-significant list of sort directives.
///
/// Values built through [`toggle`] never hold two directives for the same
/// attribute. Sequences built directly from a `Vec` are taken as given.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DirectiveSequence(Vec<SortDirective>);

impl DirectiveSequence {
    /// An empty sequence.
    pub fn new() -> Self {
        Self(Vec::new())
    }

    /// Directives in application order.
    pub fn as_slice(&self) -> &[SortDirective] {
        &self.0
    }

    /// Iterate directives in application order.
    pub fn iter(&self) -> std::slice::Iter<'_, SortDirective> {
        self.0.iter()
    }

    /// Number of directives.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether no directive is active.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Index of the first directive on `attribute`.
    pub fn position(&self, attribute: &AttributeName) -> Option<usize> {
        self.0
            .iter()
            .position(|directive| &directive.attribute == attribute)
    }

    /// Compute the sequence that results from toggling `attribute`.
    ///
    /// - absent: append `{attribute, Ascending}`
    /// - ascending: same position, now `Descending`
    /// - descending: removed
    pub fn toggled(&self, attribute: impl Into<AttributeName>) -> Self {
        let attribute = attribute.into();
        let mut next = self.0.clone();

        match self.position(&attribute) {
            None => {
                tracing::debug!(
                    attribute = %attribute,
                    "sort directive absent -> ascending"
                );
                next.push(SortDirective::ascending(attribute));
            }
            Some(index) => match self.0[index].direction {
                SortDirection::Ascending => {
                    tracing::debug!(
                        attribute = %attribute,
                        position = index,
                        "sort directive ascending -> descending"
                    );
                    next[index].direction = SortDirection::Descending;
                }
                SortDirection::Descending => {
                    tracing::debug!(
                        attribute = %attribute,
                        position = index,
                        "sort directive descending -> absent"
                    );
                    next.remove(index);
                }
            },
        }

        Self(next)
    }

    /// Attribute -> direction lookup for indicator rendering.
    ///
    /// Folds front to back, so a later duplicate entry wins.
    pub fn direction_of(&self) -> DirectionLookup {
        self.0
            .iter()
            .fold(DirectionLookup::default(), |mut lookup, directive| {
                lookup.insert(directive.attribute.clone(), directive.direction);
                lookup
            })
    }
}

impl From<Vec<SortDirective>> for DirectiveSequence {
    fn from(directives: Vec<SortDirective>) -> Self {
        Self(directives)
    }
}

impl FromIterator<SortDirective> for DirectiveSequence {
    fn from_iter<I: IntoIterator<Item = SortDirective>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a DirectiveSequence {
    type Item = &'a SortDirective;
    type IntoIter = std::slice::Iter<'a, SortDirective>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// Pure toggle transition: returns the next sequence, leaving `sequence`
/// untouched.
pub fn toggle(
    sequence: &DirectiveSequence,
    attribute: impl Into<AttributeName>,
) -> DirectiveSequence {
    sequence.toggled(attribute)
}

/// Attribute -> direction lookup for `sequence`.
pub fn direction_of(sequence: &DirectiveSequence) -> DirectionLookup {
    sequence.direction_of()
}

/// Caller-owned sort state for one list view.
///
/// Starts empty and changes only through [`SortState::toggle`]; drop it when
/// the view goes away.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SortState {
    directives: DirectiveSequence,
}

impl SortState {
    /// Empty state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current directives.
    pub fn directives(&self) -> &DirectiveSequence {
        &self.directives
    }

    /// Toggle `attribute` and return its new direction (`None` once removed).
    pub fn toggle(
        &mut self,
        attribute: impl Into<AttributeName>,
    ) -> Option<SortDirection> {
        let attribute = attribute.into();
        self.directives = self.directives.toggled(attribute.clone());
        self.directives
            .position(&attribute)
            .map(|index| self.directives.as_slice()[index].direction)
    }

    /// Drop every directive.
    pub fn clear(&mut self) {
        self.directives = DirectiveSequence::new();
    }

    /// Attribute -> direction lookup for the current directives.
    pub fn direction_of(&self) -> DirectionLookup {
        self.directives.direction_of()
    }
}

//! Direction lookup and column indicators

use super::attribute::{AttributeName, SortAttribute};
use super::directive::SortDirection;
use std::collections::HashMap;

/// Attribute -> active direction. Absence means no directive applies.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DirectionLookup {
    entries: HashMap<AttributeName, SortDirection>,
}

impl DirectionLookup {
    pub(crate) fn insert(
        &mut self,
        attribute: AttributeName,
        direction: SortDirection,
    ) {
        self.entries.insert(attribute, direction);
    }

    /// Direction for an arbitrary attribute name.
    pub fn get(&self, attribute: &AttributeName) -> Option<SortDirection> {
        self.entries.get(attribute).copied()
    }

    /// Direction for one of the sortable attributes.
    pub fn direction(&self, attribute: SortAttribute) -> Option<SortDirection> {
        self.get(&AttributeName::Known(attribute))
    }

    /// Indicator to draw next to the `attribute` column header.
    pub fn indicator(&self, attribute: SortAttribute) -> SortIndicator {
        SortIndicator::from(self.direction(attribute))
    }

    /// Number of attributes with an active directive.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no attribute has an active directive.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate `(attribute, direction)` pairs in no particular order.
    pub fn iter(
        &self,
    ) -> impl Iterator<Item = (&AttributeName, SortDirection)> + '_ {
        self.entries
            .iter()
            .map(|(attribute, direction)| (attribute, *direction))
    }
}

/// Header indicator for a column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortIndicator {
    /// Column is not sorted
    #[default]
    None,
    /// Up arrow
    Ascending,
    /// Down arrow
    Descending,
}

impl SortIndicator {
    /// Glyph for text renderers; empty when the column is not sorted.
    pub const fn glyph(self) -> &'static str {
        match self {
            SortIndicator::None => "",
            SortIndicator::Ascending => "▲",
            SortIndicator::Descending => "▼",
        }
    }
}

impl From<Option<SortDirection>> for SortIndicator {
    fn from(direction: Option<SortDirection>) -> Self {
        match direction {
            None => SortIndicator::None,
            Some(SortDirection::Ascending) => SortIndicator::Ascending,
            Some(SortDirection::Descending) => SortIndicator::Descending,
        }
    }
}

/// Ordered items plus the lookup a renderer needs for its headers.
#[derive(Debug, Clone, PartialEq)]
pub struct SortedView<T> {
    /// Items in display order.
    pub items: Vec<T>,
    /// Active direction per attribute.
    pub directions: DirectionLookup,
}

impl<T> SortedView<T> {
    /// Indicator for the `attribute` column header.
    pub fn indicator(&self, attribute: SortAttribute) -> SortIndicator {
        self.directions.indicator(attribute)
    }
}

//! Sortable attribute vocabulary
//!
//! `SortAttribute` is the closed set the comparators know about.
//! `AttributeName` is what callers hand to the directive store: any string is
//! accepted, and names outside the closed set are carried along verbatim.
//! Matching is exact, so `"Title"` and `" title "` are not `title`.

use crate::error::SortParseError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Book attributes that can be sorted on.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum SortAttribute {
    /// Book title
    Title,
    /// Author full name
    Author,
    /// Predefined shelf name
    Shelf,
    /// Genre display name
    Genre,
    /// Rating, compared as text by default
    Rating,
}

impl SortAttribute {
    /// Every sortable attribute in column order.
    pub const ALL: [SortAttribute; 5] = [
        SortAttribute::Title,
        SortAttribute::Author,
        SortAttribute::Shelf,
        SortAttribute::Genre,
        SortAttribute::Rating,
    ];

    /// Stable identifier used in directives and on the command line.
    pub const fn id(self) -> &'static str {
        match self {
            SortAttribute::Title => "title",
            SortAttribute::Author => "author",
            SortAttribute::Shelf => "shelf",
            SortAttribute::Genre => "genre",
            SortAttribute::Rating => "rating",
        }
    }

    /// Column header label.
    pub const fn label(self) -> &'static str {
        match self {
            SortAttribute::Title => "Title",
            SortAttribute::Author => "Author",
            SortAttribute::Shelf => "Shelf",
            SortAttribute::Genre => "Genre",
            SortAttribute::Rating => "Rating",
        }
    }
}

impl fmt::Display for SortAttribute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for SortAttribute {
    type Err = SortParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SortAttribute::ALL
            .into_iter()
            .find(|attribute| attribute.id() == s)
            .ok_or_else(|| SortParseError::UnknownAttribute(s.to_string()))
    }
}

/// Attribute name as held by a sort directive.
///
/// Built from any string without failing. Names that are not part of the
/// closed attribute set stay `Unrecognized` and sort with the title
/// comparator.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum AttributeName {
    /// One of the sortable attributes.
    Known(SortAttribute),
    /// Any other name, kept verbatim.
    Unrecognized(String),
}

impl AttributeName {
    /// Parse a raw name, never failing.
    pub fn parse(raw: &str) -> Self {
        match raw.parse::<SortAttribute>() {
            Ok(attribute) => AttributeName::Known(attribute),
            Err(_) => AttributeName::Unrecognized(raw.to_string()),
        }
    }

    /// The sortable attribute, if the name is part of the closed set.
    pub fn known(&self) -> Option<SortAttribute> {
        match self {
            AttributeName::Known(attribute) => Some(*attribute),
            AttributeName::Unrecognized(_) => None,
        }
    }

    /// Raw identifier.
    pub fn as_str(&self) -> &str {
        match self {
            AttributeName::Known(attribute) => attribute.id(),
            AttributeName::Unrecognized(raw) => raw,
        }
    }

    /// Attribute whose comparator sorts this name. Unrecognized names use
    /// the title comparator.
    pub fn comparator_attribute(&self) -> SortAttribute {
        self.known().unwrap_or(SortAttribute::Title)
    }
}

impl fmt::Display for AttributeName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<SortAttribute> for AttributeName {
    fn from(attribute: SortAttribute) -> Self {
        AttributeName::Known(attribute)
    }
}

impl From<&str> for AttributeName {
    fn from(raw: &str) -> Self {
        AttributeName::parse(raw)
    }
}

impl From<String> for AttributeName {
    fn from(raw: String) -> Self {
        match raw.parse::<SortAttribute>() {
            Ok(attribute) => AttributeName::Known(attribute),
            Err(_) => AttributeName::Unrecognized(raw),
        }
    }
}

impl From<AttributeName> for String {
    fn from(name: AttributeName) -> Self {
        match name {
            AttributeName::Known(attribute) => attribute.id().to_string(),
            AttributeName::Unrecognized(raw) => raw,
        }
    }
}

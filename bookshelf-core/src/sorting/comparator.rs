//! Comparator dispatch
//!
//! Every sortable attribute maps to one [`KeyRule`] through an exhaustive
//! match, so adding an attribute without a comparator fails to compile.
//! Attribute names outside the closed set resolve to the title rule.

use super::attribute::{AttributeName, SortAttribute};
use super::directive::{SortDirection, SortDirective};
use super::keys::{NumericKey, SortKey, TextKey};
use super::settings::{RatingComparison, SortSettings};
use bookshelf_model::{Book, Rating};
use std::borrow::Cow;
use std::cmp::Ordering;

/// Records the sort engine can order.
pub trait SortableRecord {
    /// Text used when comparing on `attribute`. Absent values are `""`.
    fn sort_text(&self, attribute: SortAttribute) -> Cow<'_, str>;

    /// Rating as a number, for numeric rating comparison.
    fn numeric_rating(&self) -> Option<f32> {
        None
    }
}

impl SortableRecord for Book {
    fn sort_text(&self, attribute: SortAttribute) -> Cow<'_, str> {
        match attribute {
            SortAttribute::Title => Cow::Borrowed(self.title.as_str()),
            SortAttribute::Author => Cow::Borrowed(self.author_name()),
            SortAttribute::Shelf => Cow::Borrowed(self.shelf_name()),
            SortAttribute::Genre => self
                .genre
                .map(|genre| Cow::Borrowed(genre.api_name()))
                .unwrap_or(Cow::Borrowed("")),
            SortAttribute::Rating => self
                .rating
                .map(|rating| Cow::Owned(rating.to_string()))
                .unwrap_or(Cow::Borrowed("")),
        }
    }

    fn numeric_rating(&self) -> Option<f32> {
        self.rating.map(Rating::value)
    }
}

/// How keys are extracted for one attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyRule {
    /// Collated text of the attribute.
    Text(SortAttribute),
    /// Numeric rating, unrated last.
    NumericRating,
}

impl KeyRule {
    /// Rule for a sortable attribute.
    pub const fn for_attribute(
        attribute: SortAttribute,
        rating: RatingComparison,
    ) -> Self {
        match attribute {
            SortAttribute::Title => KeyRule::Text(SortAttribute::Title),
            SortAttribute::Author => KeyRule::Text(SortAttribute::Author),
            SortAttribute::Shelf => KeyRule::Text(SortAttribute::Shelf),
            SortAttribute::Genre => KeyRule::Text(SortAttribute::Genre),
            SortAttribute::Rating => match rating {
                RatingComparison::Text => KeyRule::Text(SortAttribute::Rating),
                RatingComparison::Numeric => KeyRule::NumericRating,
            },
        }
    }

    /// Rule for an arbitrary attribute name, falling back to title.
    pub fn for_name(name: &AttributeName, settings: &SortSettings) -> Self {
        if let AttributeName::Unrecognized(raw) = name {
            tracing::debug!(
                attribute = %raw,
                "no comparator for attribute, falling back to title"
            );
        }
        Self::for_attribute(
            name.comparator_attribute(),
            settings.rating_comparison,
        )
    }

    /// Compare two records under this rule.
    pub fn compare<T: SortableRecord>(
        self,
        a: &T,
        b: &T,
        direction: SortDirection,
    ) -> Ordering {
        match self {
            KeyRule::Text(attribute) => TextKey::new(a.sort_text(attribute))
                .compare_with_order(
                    &TextKey::new(b.sort_text(attribute)),
                    direction,
                ),
            KeyRule::NumericRating => NumericKey::new(a.numeric_rating())
                .compare_with_order(
                    &NumericKey::new(b.numeric_rating()),
                    direction,
                ),
        }
    }
}

/// Comparator for a single directive, oriented by its direction.
pub fn comparator_for<T: SortableRecord>(
    directive: &SortDirective,
    settings: &SortSettings,
) -> impl Fn(&T, &T) -> Ordering + use<T> {
    let rule = KeyRule::for_name(&directive.attribute, settings);
    let direction = directive.direction;
    move |a: &T, b: &T| rule.compare(a, b, direction)
}

//! Sort key types for comparing books
//!
//! These types wrap the values extracted from a record for one pass and
//! decide how missing data orders.

use super::collation::collate;
use super::directive::SortDirection;
use ordered_float::OrderedFloat;
use std::borrow::Cow;
use std::cmp::Ordering;

/// Keys that can be compared for sorting.
pub trait SortKey: Ord {
    /// Create a key representing missing data.
    fn missing() -> Self;

    /// Check if this key represents missing data.
    fn is_missing(&self) -> bool;

    /// Compare two keys in the requested direction.
    #[inline]
    fn compare_with_order(&self, other: &Self, direction: SortDirection) -> Ordering {
        direction.apply(self.cmp(other))
    }
}

/// Text key ordered by [`collate`]. Missing text is the empty string, so it
/// takes part in ordering like any other value.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct TextKey<'a>(Cow<'a, str>);

impl<'a> TextKey<'a> {
    /// Wrap borrowed or owned text.
    pub fn new(value: impl Into<Cow<'a, str>>) -> Self {
        TextKey(value.into())
    }
}

impl Ord for TextKey<'_> {
    fn cmp(&self, other: &Self) -> Ordering {
        collate(&self.0, &other.0)
    }
}

impl PartialOrd for TextKey<'_> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl SortKey for TextKey<'_> {
    fn missing() -> Self {
        TextKey(Cow::Borrowed(""))
    }

    fn is_missing(&self) -> bool {
        self.0.is_empty()
    }
}

/// Float key for numeric rating comparison.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NumericKey(Option<OrderedFloat<f32>>);

impl NumericKey {
    /// Wrap a rating; `None` is missing.
    pub fn new(value: Option<f32>) -> Self {
        NumericKey(value.map(OrderedFloat))
    }
}

impl Ord for NumericKey {
    fn cmp(&self, other: &Self) -> Ordering {
        match (&self.0, &other.0) {
            (Some(a), Some(b)) => a.cmp(b),
            (Some(_), None) => Ordering::Less, // Items with values come first
            (None, Some(_)) => Ordering::Greater,
            (None, None) => Ordering::Equal,
        }
    }
}

impl PartialOrd for NumericKey {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl SortKey for NumericKey {
    fn missing() -> Self {
        NumericKey(None)
    }

    fn is_missing(&self) -> bool {
        self.0.is_none()
    }

    // Missing values stay last in both directions.
    fn compare_with_order(&self, other: &Self, direction: SortDirection) -> Ordering {
        match (self.is_missing(), other.is_missing()) {
            (true, true) => Ordering::Equal,
            (true, false) => Ordering::Greater,
            (false, true) => Ordering::Less,
            (false, false) => direction.apply(self.cmp(other)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_numeric_values_sort_last_either_way() {
        let present = NumericKey::new(Some(4.0));
        let missing = NumericKey::missing();
        assert_eq!(
            present.compare_with_order(&missing, SortDirection::Ascending),
            Ordering::Less
        );
        assert_eq!(
            present.compare_with_order(&missing, SortDirection::Descending),
            Ordering::Less
        );
    }

    #[test]
    fn missing_text_is_empty_and_sorts_first() {
        let missing = TextKey::missing();
        assert!(missing.is_missing());
        assert!(missing < TextKey::new("a"));
        assert_eq!(
            missing.compare_with_order(&TextKey::new("a"), SortDirection::Descending),
            Ordering::Greater
        );
    }

    #[test]
    fn numeric_ordering() {
        let low = NumericKey::new(Some(2.0));
        let high = NumericKey::new(Some(10.0));
        assert!(low < high);
        assert_eq!(
            low.compare_with_order(&high, SortDirection::Descending),
            Ordering::Greater
        );
    }
}

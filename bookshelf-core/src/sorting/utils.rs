//! Utility functions for sorting operations

/// Clone `items` into a new vector following `indices`.
///
/// Each index in `indices` names the element of `items` that belongs at that
/// position of the output.
pub fn gather_by_indices<T: Clone>(items: &[T], indices: &[usize]) -> Vec<T> {
    debug_assert_eq!(
        items.len(),
        indices.len(),
        "Indices length must match items length"
    );

    indices
        .iter()
        .map(|&idx| {
            debug_assert!(idx < items.len(), "Index out of bounds");
            items[idx].clone()
        })
        .collect()
}

/// Check if a slice is already sorted according to a comparison function
pub fn is_sorted_by<T, F>(items: &[T], mut compare: F) -> bool
where
    F: FnMut(&T, &T) -> std::cmp::Ordering,
{
    items.windows(2).all(|w| {
        matches!(
            compare(&w[0], &w[1]),
            std::cmp::Ordering::Less | std::cmp::Ordering::Equal
        )
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gathers_in_index_order() {
        let items = vec!["a", "b", "c"];
        assert_eq!(gather_by_indices(&items, &[2, 0, 1]), vec!["c", "a", "b"]);
    }

    #[test]
    fn detects_sorted_slices() {
        assert!(is_sorted_by(&[1, 2, 2, 5], |a, b| a.cmp(b)));
        assert!(!is_sorted_by(&[3, 1], |a, b| a.cmp(b)));
        assert!(is_sorted_by::<i32, _>(&[], |a, b| a.cmp(b)));
    }
}

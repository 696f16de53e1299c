//! Multi-pass sort engine
//!
//! Directives are applied as successive stable sorts over a permutation of
//! the input. With the default [`PassOrder::LastDominates`] the passes run in
//! directive order, so the directive applied last is the primary key and the
//! earlier ones only break its ties. The input slice is never reordered.

use super::comparator::{KeyRule, SortableRecord};
use super::directive::{DirectiveSequence, SortDirection, SortDirective};
use super::indicator::SortedView;
use super::keys::{NumericKey, SortKey, TextKey};
use super::settings::{PassOrder, SortSettings};
use super::utils::{gather_by_indices, is_sorted_by};

/// Applies directive sequences to record lists.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SortEngine {
    settings: SortSettings,
}

impl SortEngine {
    /// Engine with explicit settings.
    pub fn new(settings: SortSettings) -> Self {
        Self { settings }
    }

    /// Active settings.
    pub fn settings(&self) -> &SortSettings {
        &self.settings
    }

    /// Return a sorted copy of `entities`.
    pub fn sort<T>(&self, entities: &[T], directives: &DirectiveSequence) -> Vec<T>
    where
        T: SortableRecord + Clone,
    {
        let order = self.order(entities, directives);
        gather_by_indices(entities, &order)
    }

    /// Sorted copy plus the direction lookup for header indicators.
    pub fn view<T>(
        &self,
        entities: &[T],
        directives: &DirectiveSequence,
    ) -> SortedView<T>
    where
        T: SortableRecord + Clone,
    {
        SortedView {
            items: self.sort(entities, directives),
            directions: directives.direction_of(),
        }
    }

    /// Display order as indices into `entities`.
    ///
    /// Useful when the records are expensive to clone; `sort` is this
    /// permutation applied to a copy.
    pub fn order<T>(&self, entities: &[T], directives: &DirectiveSequence) -> Vec<usize>
    where
        T: SortableRecord,
    {
        let mut order: Vec<usize> = (0..entities.len()).collect();
        if entities.len() < 2 || directives.is_empty() {
            return order;
        }

        let mut passes: Vec<&SortDirective> = directives.iter().collect();
        if self.settings.pass_order == PassOrder::FirstDominates {
            passes.reverse();
        }

        for directive in &passes {
            let rule = KeyRule::for_name(&directive.attribute, &self.settings);
            tracing::trace!(
                attribute = %directive.attribute,
                direction = %directive.direction,
                ?rule,
                "applying sort pass"
            );
            apply_pass(entities, &mut order, rule, directive.direction);
        }

        tracing::debug!(
            items = entities.len(),
            passes = passes.len(),
            pass_order = %self.settings.pass_order,
            "sorted records"
        );
        order
    }
}

/// Sort `entities` with the default settings.
pub fn sort<T>(entities: &[T], directives: &DirectiveSequence) -> Vec<T>
where
    T: SortableRecord + Clone,
{
    SortEngine::default().sort(entities, directives)
}

fn apply_pass<T: SortableRecord>(
    entities: &[T],
    order: &mut [usize],
    rule: KeyRule,
    direction: SortDirection,
) {
    // Keys are extracted once per pass, indexed by original position.
    match rule {
        KeyRule::Text(attribute) => {
            let keys: Vec<TextKey<'_>> = entities
                .iter()
                .map(|entity| TextKey::new(entity.sort_text(attribute)))
                .collect();
            stable_pass(order, &keys, direction);
        }
        KeyRule::NumericRating => {
            let keys: Vec<NumericKey> = entities
                .iter()
                .map(|entity| NumericKey::new(entity.numeric_rating()))
                .collect();
            stable_pass(order, &keys, direction);
        }
    }
}

fn stable_pass<K: SortKey>(order: &mut [usize], keys: &[K], direction: SortDirection) {
    let compare =
        |a: &usize, b: &usize| keys[*a].compare_with_order(&keys[*b], direction);
    if is_sorted_by(order, compare) {
        return;
    }
    // `sort_by` is stable: ties keep the order left by the previous pass.
    order.sort_by(compare);
}

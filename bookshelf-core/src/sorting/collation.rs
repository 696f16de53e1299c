//! Default string collation
//!
//! Approximates a root-locale comparison in three levels:
//!
//! 1. primary: base letters, with accents and case removed (`"é"` == `"E"`),
//! 2. secondary: accents, unaccented before accented (`"cote"` < `"coté"`),
//! 3. tertiary: case, lowercase before uppercase (`"dune"` < `"Dune"`).
//!
//! Raw code points settle anything left. Digits are ordinary characters, so
//! `"10"` < `"2"`.

use std::cmp::Ordering;
use unicode_normalization::UnicodeNormalization;
use unicode_normalization::char::is_combining_mark;

/// Compare two strings for display ordering.
pub fn collate(a: &str, b: &str) -> Ordering {
    primary(a, b)
        .then_with(|| secondary(a, b))
        .then_with(|| case_level(a, b))
        .then_with(|| a.cmp(b))
}

fn base_letters(s: &str) -> impl Iterator<Item = char> + '_ {
    s.nfd()
        .flat_map(char::to_lowercase)
        .filter(|c| !is_combining_mark(*c))
}

fn primary(a: &str, b: &str) -> Ordering {
    base_letters(a).cmp(base_letters(b))
}

/// Combining marks attached to each base character, in order.
fn accents(s: &str) -> Vec<Vec<char>> {
    let mut clusters: Vec<Vec<char>> = Vec::new();
    for c in s.nfd() {
        match clusters.last_mut() {
            Some(marks) if is_combining_mark(c) => marks.push(c),
            _ if is_combining_mark(c) => clusters.push(vec![c]),
            _ => clusters.push(Vec::new()),
        }
    }
    clusters
}

// Earliest base character whose accents differ decides.
fn secondary(a: &str, b: &str) -> Ordering {
    accents(a).cmp(&accents(b))
}

// Only reached on a primary and secondary tie: first position where case
// differs decides.
fn case_level(a: &str, b: &str) -> Ordering {
    a.nfd()
        .zip(b.nfd())
        .find_map(|(x, y)| match (x.is_lowercase(), y.is_lowercase()) {
            _ if x == y => None,
            (true, false) => Some(Ordering::Less),
            (false, true) => Some(Ordering::Greater),
            _ => None,
        })
        .unwrap_or(Ordering::Equal)
}

//! Sorting module for multi-key, toggleable book ordering
//!
//! This module provides:
//! - The closed set of sortable attributes and tolerant attribute names
//! - The directive store and its toggle transition
//! - Sort key extraction and comparator dispatch
//! - The multi-pass sort engine and indicator lookup

pub mod attribute;
pub mod collation;
pub mod comparator;
pub mod directive;
pub mod engine;
pub mod indicator;
pub mod keys;
pub mod settings;
pub mod utils;

#[cfg(test)]
mod tests;

pub use attribute::*;
pub use comparator::*;
pub use directive::*;
pub use engine::*;
pub use indicator::*;
pub use settings::*;

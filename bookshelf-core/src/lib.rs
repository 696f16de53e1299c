//! Core library for bookshelf.
//!
//! Holds the toggleable multi-key sort machinery used by every presentation
//! layer that lists books:
//! - a directive store (`toggle`, `direction_of`, `SortState`)
//! - a sort engine that applies directives as successive stable passes
//! - the per-attribute direction lookup used to render sort indicators

pub mod error;
pub mod sorting;

pub use bookshelf_model as model;
pub use error::SortParseError;
pub use sorting::{
    AttributeName, DirectionLookup, DirectiveSequence, PassOrder,
    RatingComparison, SortAttribute, SortDirection, SortDirective,
    SortEngine, SortIndicator, SortSettings, SortState, SortableRecord,
    SortedView, comparator_for, direction_of, sort, toggle,
};

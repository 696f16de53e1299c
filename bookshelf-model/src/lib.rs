//! Core data model definitions shared across bookshelf crates.
#![allow(missing_docs)]

pub mod book;
pub mod error;
pub mod genre;
pub mod rating;

pub use book::{Author, Book, PredefinedShelf};
pub use error::{ModelError, Result as ModelResult};
pub use genre::Genre;
pub use rating::Rating;

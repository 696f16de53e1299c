use crate::genre::Genre;
use crate::rating::Rating;

/// A book's author as shown to the reader.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct Author {
    pub full_name: String,
}

impl Author {
    pub fn new(full_name: impl Into<String>) -> Self {
        Self {
            full_name: full_name.into(),
        }
    }
}

/// One of the built-in shelves a book can sit on (to read, reading, read...).
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct PredefinedShelf {
    pub shelf_name: String,
}

impl PredefinedShelf {
    pub fn new(shelf_name: impl Into<String>) -> Self {
        Self {
            shelf_name: shelf_name.into(),
        }
    }
}

/// A tracked book.
///
/// Nested values are optional because upstream data is not always complete;
/// consumers are expected to degrade gracefully when they are absent.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase", default))]
pub struct Book {
    pub title: String,
    pub author: Option<Author>,
    pub predefined_shelf: Option<PredefinedShelf>,
    #[cfg_attr(feature = "serde", serde(rename = "bookGenre"))]
    pub genre: Option<Genre>,
    pub rating: Option<Rating>,
}

impl Book {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Self::default()
        }
    }

    pub fn with_author(mut self, full_name: impl Into<String>) -> Self {
        self.author = Some(Author::new(full_name));
        self
    }

    pub fn with_shelf(mut self, shelf_name: impl Into<String>) -> Self {
        self.predefined_shelf = Some(PredefinedShelf::new(shelf_name));
        self
    }

    pub fn with_genre(mut self, genre: Genre) -> Self {
        self.genre = Some(genre);
        self
    }

    pub fn with_rating(mut self, rating: Rating) -> Self {
        self.rating = Some(rating);
        self
    }

    /// Author full name, or `""` when the author is unknown.
    pub fn author_name(&self) -> &str {
        self.author
            .as_ref()
            .map(|author| author.full_name.as_str())
            .unwrap_or("")
    }

    /// Shelf name, or `""` when the book is not on a predefined shelf.
    pub fn shelf_name(&self) -> &str {
        self.predefined_shelf
            .as_ref()
            .map(|shelf| shelf.shelf_name.as_str())
            .unwrap_or("")
    }
}

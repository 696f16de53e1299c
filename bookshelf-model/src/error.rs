use std::fmt::{self, Display};

/// Errors produced by model constructors and validation routines.
#[derive(Debug, Clone, PartialEq)]
pub enum ModelError {
    /// Ratings must be finite numbers.
    InvalidRating(f32),
    /// A genre name did not match any known genre.
    UnknownGenre(String),
}

impl Display for ModelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ModelError::InvalidRating(value) => {
                write!(f, "invalid rating: {value}")
            }
            ModelError::UnknownGenre(name) => {
                write!(f, "unknown genre: {name}")
            }
        }
    }
}

impl std::error::Error for ModelError {}

/// Result alias for model operations.
pub type Result<T> = std::result::Result<T, ModelError>;

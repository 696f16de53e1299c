use std::fmt;

use crate::error::{ModelError, Result};

/// A reader-supplied rating.
///
/// Only finite values are representable. The `Display` form is the shortest
/// decimal rendering (`2`, `10`, `3.5`), which is also what text-based rating
/// comparison operates on.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "f32", into = "f32"))]
pub struct Rating(f32);

impl Rating {
    pub fn new(value: f32) -> Result<Self> {
        if value.is_finite() {
            Ok(Rating(value))
        } else {
            Err(ModelError::InvalidRating(value))
        }
    }

    pub fn value(self) -> f32 {
        self.0
    }
}

impl TryFrom<f32> for Rating {
    type Error = ModelError;

    fn try_from(value: f32) -> Result<Self> {
        Rating::new(value)
    }
}

impl From<Rating> for f32 {
    fn from(rating: Rating) -> Self {
        rating.0
    }
}

impl fmt::Display for Rating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

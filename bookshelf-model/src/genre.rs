use std::fmt;
use std::str::FromStr;

use crate::error::ModelError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "SCREAMING_SNAKE_CASE"))]
pub enum Genre {
    Adventure,
    Biography,
    Business,
    Classic,
    Comic,
    Cookbook,
    Fantasy,
    Fiction,
    History,
    Horror,
    Memoir,
    Mystery,
    Nonfiction,
    Poetry,
    Romance,
    ScienceFiction,
    SelfHelp,
    Thriller,
}

impl Genre {
    pub fn all() -> &'static [Genre] {
        use Genre::*;
        &[
            Adventure,
            Biography,
            Business,
            Classic,
            Comic,
            Cookbook,
            Fantasy,
            Fiction,
            History,
            Horror,
            Memoir,
            Mystery,
            Nonfiction,
            Poetry,
            Romance,
            ScienceFiction,
            SelfHelp,
            Thriller,
        ]
    }

    // Genre sorting compares this text. Keep display names in the same
    // relative order as the SCREAMING_SNAKE_CASE serde tags.
    pub fn api_name(&self) -> &'static str {
        match self {
            Genre::Adventure => "Adventure",
            Genre::Biography => "Biography",
            Genre::Business => "Business",
            Genre::Classic => "Classic",
            Genre::Comic => "Comic",
            Genre::Cookbook => "Cookbook",
            Genre::Fantasy => "Fantasy",
            Genre::Fiction => "Fiction",
            Genre::History => "History",
            Genre::Horror => "Horror",
            Genre::Memoir => "Memoir",
            Genre::Mystery => "Mystery",
            Genre::Nonfiction => "Nonfiction",
            Genre::Poetry => "Poetry",
            Genre::Romance => "Romance",
            Genre::ScienceFiction => "Science Fiction",
            Genre::SelfHelp => "Self Help",
            Genre::Thriller => "Thriller",
        }
    }
}

impl fmt::Display for Genre {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.api_name())
    }
}

impl FromStr for Genre {
    type Err = ModelError;

    /// Accepts the display name or the wire name, ignoring case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().replace('_', " ");
        Genre::all()
            .iter()
            .copied()
            .find(|genre| genre.api_name().eq_ignore_ascii_case(&wanted))
            .ok_or_else(|| ModelError::UnknownGenre(s.to_string()))
    }
}

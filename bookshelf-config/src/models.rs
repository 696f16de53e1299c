use bookshelf_core::SortSettings;
use serde::{Deserialize, Serialize};

/// Top-level bookshelf settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct BookshelfConfig {
    /// How book lists are sorted. Defaults keep the long-standing list
    /// behaviour: ratings compare as text and the most recently clicked
    /// column is the primary key.
    pub sorting: SortSettings,
}

//! Shared configuration library for bookshelf.
//!
//! Centralizes where sort settings come from (env, TOML/JSON files,
//! defaults) so every front end resolves them the same way.

pub mod loader;
pub mod models;
pub mod util;

pub use loader::{ConfigLoad, ConfigLoader, ConfigSource, error::ConfigLoadError};
pub use models::BookshelfConfig;

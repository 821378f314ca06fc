//! Content loaders for reading game data from files.
//!
//! Each loader parses one RON/TOML file into game-core types. Every loader
//! also has an `embedded()` constructor that parses the copy of the default
//! data compiled into the binary.

pub mod config;
pub mod factory;
pub mod gates;
pub mod items;
pub mod skills;

pub use config::ConfigLoader;
pub use factory::{Content, ContentFactory};
pub use gates::GateLoader;
pub use items::ItemLoader;
pub use skills::SkillLoader;

use std::path::Path;

/// Common result type for loaders.
pub type LoadResult<T> = anyhow::Result<T>;

/// Helper function to read file contents.
pub(crate) fn read_file(path: &Path) -> LoadResult<String> {
    std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("Failed to read file {}: {}", path.display(), e))
}

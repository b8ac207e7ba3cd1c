//! Content loaders for reading combat data from files.
//!
//! Each loader turns one RON or TOML file into core types. [`ContentFactory`]
//! knows the file layout of a data directory and assembles a
//! [`crate::ContentBundle`].

pub mod cards;
pub mod config;
pub mod encounters;
pub mod enemies;
pub mod factory;
pub mod relics;

pub use cards::CardLoader;
pub use config::{ConfigLoader, SynergyLoader};
pub use encounters::EncounterLoader;
pub use enemies::EnemyLoader;
pub use factory::ContentFactory;
pub use relics::RelicLoader;

use std::path::Path;

/// Common result type for loaders.
pub type LoadResult<T> = anyhow::Result<T>;

/// Helper function to read file contents.
pub(crate) fn read_file(path: &Path) -> LoadResult<String> {
    std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("Failed to read file {}: {}", path.display(), e))
}

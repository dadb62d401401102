//! Content loaders for reading game data from files.
//!
//! - [`ItemLoader`]: RON item catalogs
//! - [`RosterLoader`]: RON enemy rosters
//! - [`ConfigLoader`]: TOML game configuration

pub mod config;
pub mod item;
pub mod roster;

pub use config::ConfigLoader;
pub use item::ItemLoader;
pub use roster::RosterLoader;

use std::path::Path;

/// Common result type for loaders.
pub type LoadResult<T> = anyhow::Result<T>;

/// Helper function to read file contents.
pub(crate) fn read_file(path: &Path) -> LoadResult<String> {
    std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("Failed to read file {}: {}", path.display(), e))
}

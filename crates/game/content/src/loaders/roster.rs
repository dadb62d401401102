//! Enemy roster loader.

use std::path::Path;

use game_core::Character;

use crate::loaders::{LoadResult, read_file};
use crate::roster::EnemySpec;

/// Loader for enemy rosters from RON files.
///
/// RON format: `[(name: "Bob", race: Human), ...]`
pub struct RosterLoader;

impl RosterLoader {
    pub fn load(path: &Path) -> LoadResult<Vec<EnemySpec>> {
        let content = read_file(path)?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> LoadResult<Vec<EnemySpec>> {
        ron::from_str(content).map_err(|e| anyhow::anyhow!("Failed to parse roster RON: {}", e))
    }

    /// Load a roster and build every enemy at full health.
    pub fn load_enemies(path: &Path) -> LoadResult<Vec<Character>> {
        Ok(Self::load(path)?.iter().map(EnemySpec::build).collect())
    }
}

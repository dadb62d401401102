//! Session configuration.
use std::env;
use std::path::{Path, PathBuf};

use game_content::ConfigLoader;
use game_core::{GameConfig, Race};

use crate::error::Result;

/// Everything needed to start a [`Session`](crate::Session).
#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    pub game: GameConfig,
    pub player_name: String,
    pub player_race: Race,
    /// Seed for every random draw; `None` seeds from the wall clock.
    pub seed: Option<u64>,
    /// RON item catalog to scatter instead of the starter loot.
    pub items_path: Option<PathBuf>,
    /// RON enemy roster to use instead of the default one.
    pub roster_path: Option<PathBuf>,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            game: GameConfig::default(),
            player_name: "Hero".to_string(),
            player_race: Race::Human,
            seed: None,
            items_path: None,
            roster_path: None,
        }
    }
}

impl RuntimeConfig {
    /// Construct configuration from process environment variables.
    ///
    /// Environment variables:
    /// - `GRID_QUEST_PLAYER` - Player name (default: Hero)
    /// - `GRID_QUEST_RACE` - Player race (default: human)
    /// - `GRID_QUEST_SEED` - Random seed (default: wall clock)
    /// - `GRID_QUEST_ITEMS` - RON item catalog (default: starter loot)
    /// - `GRID_QUEST_ROSTER` - RON enemy roster (default: one enemy per race)
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Ok(name) = env::var("GRID_QUEST_PLAYER") {
            config.player_name = name;
        }
        if let Some(race) = read_env::<Race>("GRID_QUEST_RACE") {
            config.player_race = race;
        }
        config.seed = read_env::<u64>("GRID_QUEST_SEED");
        config.items_path = env::var("GRID_QUEST_ITEMS").ok().map(PathBuf::from);
        config.roster_path = env::var("GRID_QUEST_ROSTER").ok().map(PathBuf::from);

        config
    }

    /// Replaces the game tunables with those read from a TOML file.
    pub fn with_config_file(mut self, path: &Path) -> Result<Self> {
        self.game = ConfigLoader::load(path)?;
        Ok(self)
    }

    pub fn with_player(mut self, name: impl Into<String>, race: Race) -> Self {
        self.player_name = name.into();
        self.player_race = race;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_board(mut self, width: usize, height: usize) -> Self {
        self.game = self.game.with_board(width, height);
        self
    }
}

fn read_env<T: std::str::FromStr>(key: &str) -> Option<T> {
    env::var(key).ok().and_then(|value| value.parse().ok())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_file_replaces_game_tunables() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("game.toml");
        std::fs::write(&path, "board_width = 5\nboard_height = 4\n").unwrap();

        let config = RuntimeConfig::default()
            .with_player("Grom", Race::Orc)
            .with_config_file(&path)
            .unwrap();

        assert_eq!((config.game.board_width, config.game.board_height), (5, 4));
        assert_eq!(config.game.gold_per_kill, GameConfig::DEFAULT_GOLD_PER_KILL);
        assert_eq!(config.player_race, Race::Orc);
    }

    #[test]
    fn missing_config_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let result = RuntimeConfig::default().with_config_file(&dir.path().join("none.toml"));
        assert!(result.is_err());
    }
}

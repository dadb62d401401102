//! Game configuration loader.

use std::path::Path;

use game_core::GameConfig;

use crate::loaders::{LoadResult, read_file};

/// Loader for game configuration from TOML files.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load config data from a TOML file.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the TOML file containing GameConfig
    ///
    /// # Returns
    ///
    /// Returns a GameConfig. Missing keys keep their defaults.
    pub fn load(path: &Path) -> LoadResult<GameConfig> {
        let content = read_file(path)?;
        Self::parse(&content)
    }

    /// Parse a GameConfig from TOML text.
    pub fn parse(content: &str) -> LoadResult<GameConfig> {
        let config: GameConfig = toml::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse config TOML: {}", e))?;

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn loads_config_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("game.toml");
        std::fs::write(
            &path,
            "board_width = 8\nboard_height = 6\nday_length = 3\ngold_per_kill = 50\n",
        )
        .unwrap();

        let config = ConfigLoader::load(&path).unwrap();

        assert_eq!(
            config,
            GameConfig::new()
                .with_board(8, 6)
                .with_day_length(3)
                .with_gold_per_kill(50)
        );
    }

    #[test]
    fn missing_keys_fall_back_to_defaults() {
        let config = ConfigLoader::parse("gold_per_kill = 5").unwrap();
        assert_eq!(config.board_width, GameConfig::DEFAULT_BOARD_SIZE);
        assert_eq!(config.day_length, GameConfig::DEFAULT_DAY_LENGTH);
        assert_eq!(config.gold_per_kill, 5);
    }

    #[test]
    fn rejects_malformed_toml() {
        let err = ConfigLoader::parse("board_width = \"wide\"").unwrap_err();
        assert!(err.to_string().contains("Failed to parse config TOML"));
    }
}

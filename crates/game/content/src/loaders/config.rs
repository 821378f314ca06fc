//! Game configuration loader.

use std::path::Path;

use game_core::GameConfig;

use crate::loaders::{LoadResult, read_file};

const EMBEDDED: &str = include_str!("../../data/config.toml");

/// Loader for game configuration from TOML files.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load config data from a TOML file.
    ///
    /// Keys missing from the file keep their built-in values.
    pub fn load(path: &Path) -> LoadResult<GameConfig> {
        let content = read_file(path)?;
        Self::parse(&content)
    }

    /// Parse the configuration shipped with the crate.
    pub fn embedded() -> LoadResult<GameConfig> {
        Self::parse(EMBEDDED)
    }

    fn parse(content: &str) -> LoadResult<GameConfig> {
        let config: GameConfig = toml::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse config TOML: {}", e))?;

        let stones = &config.boss_stones;
        if stones.min == 0 {
            anyhow::bail!("Boss stone range must grant at least one stone");
        }
        if stones.min > stones.max {
            anyhow::bail!(
                "Boss stone range is inverted ({} > {})",
                stones.min,
                stones.max
            );
        }
        if config.dodge.floor > config.dodge.ceiling {
            anyhow::bail!(
                "Dodge floor {} exceeds ceiling {}",
                config.dodge.floor,
                config.dodge.ceiling
            );
        }
        Ok(config)
    }
}

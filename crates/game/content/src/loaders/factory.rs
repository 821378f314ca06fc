//! Content factory for building the full content bundle from data files.

use std::path::{Path, PathBuf};

use game_core::{GameConfig, ItemStack, Player, Rules, SkillCatalog};
use tracing::{debug, info};

use crate::gates::GateCatalog;
use crate::loaders::{ConfigLoader, GateLoader, ItemLoader, LoadResult, SkillLoader};

/// Content factory that loads all game content from a data directory.
///
/// # Directory Structure
///
/// ```text
/// data_dir/
/// ├── config.toml
/// ├── skills.ron
/// ├── items.ron
/// └── gates.ron
/// ```
///
/// Any file that is absent falls back to the copy embedded in the crate.
/// A file that exists but fails to parse is an error.
pub struct ContentFactory {
    data_dir: Option<PathBuf>,
}

impl ContentFactory {
    /// Creates a new content factory pointing to a data directory.
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: Some(data_dir.into()),
        }
    }

    /// A factory that only uses embedded content.
    pub fn embedded() -> Self {
        Self { data_dir: None }
    }

    pub fn load_config(&self) -> LoadResult<GameConfig> {
        match self.existing("config.toml") {
            Some(path) => ConfigLoader::load(&path),
            None => ConfigLoader::embedded(),
        }
    }

    pub fn load_skills(&self) -> LoadResult<SkillCatalog> {
        match self.existing("skills.ron") {
            Some(path) => SkillLoader::load(&path),
            None => SkillLoader::embedded(),
        }
    }

    pub fn load_items(&self) -> LoadResult<Vec<ItemStack>> {
        match self.existing("items.ron") {
            Some(path) => ItemLoader::load(&path),
            None => ItemLoader::embedded(),
        }
    }

    pub fn load_gates(&self) -> LoadResult<GateCatalog> {
        match self.existing("gates.ron") {
            Some(path) => GateLoader::load(&path),
            None => GateLoader::embedded(),
        }
    }

    /// Load every content file.
    pub fn load(&self) -> LoadResult<Content> {
        let content = Content {
            config: self.load_config()?,
            skills: self.load_skills()?,
            starter_items: self.load_items()?,
            gates: self.load_gates()?,
        };
        info!(
            target: "content",
            dir = ?self.data_dir,
            skills = content.skills.len(),
            gates = content.gates.gates.len(),
            "content loaded"
        );
        Ok(content)
    }

    /// Returns the data directory path, if any.
    pub fn data_dir(&self) -> Option<&Path> {
        self.data_dir.as_deref()
    }

    fn existing(&self, file: &str) -> Option<PathBuf> {
        let path = self.data_dir.as_ref()?.join(file);
        if path.is_file() {
            Some(path)
        } else {
            debug!(target: "content", path = %path.display(), "file absent, using embedded copy");
            None
        }
    }
}

/// All static content a session needs.
#[derive(Clone, Debug)]
pub struct Content {
    pub config: GameConfig,
    pub skills: SkillCatalog,
    pub starter_items: Vec<ItemStack>,
    pub gates: GateCatalog,
}

impl Content {
    /// Rule set for [`game_core::run_encounter`].
    pub fn rules(&self) -> Rules {
        Rules::new(self.config.clone(), self.skills.clone())
    }

    /// A fresh level 1 character carrying the configured satchel.
    pub fn new_player(&self, name: impl Into<String>) -> Player {
        Player::new(name).with_inventory(ItemLoader::satchel(self.starter_items.clone()))
    }
}

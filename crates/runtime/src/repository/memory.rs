//! In-memory SaveRepository implementation for tests and local runs.

use std::collections::BTreeMap;
use std::sync::RwLock;

use game_core::Player;

use super::{RepositoryError, Result, SaveRepository, slot_key};

/// In-memory implementation of SaveRepository.
///
/// Mirrors the file repository: effects are dropped on save.
#[derive(Default)]
pub struct MemorySaveRepository {
    saves: RwLock<BTreeMap<String, Player>>,
}

impl MemorySaveRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SaveRepository for MemorySaveRepository {
    fn save(&self, player: &Player) -> Result<()> {
        let key = slot_key(&player.entity.name)?;
        let mut stored = player.clone();
        stored.entity.clear_effects();

        let mut saves = self
            .saves
            .write()
            .map_err(|_| RepositoryError::LockPoisoned)?;
        saves.insert(key, stored);
        Ok(())
    }

    fn load(&self, name: &str) -> Result<Option<Player>> {
        let key = slot_key(name)?;
        let saves = self
            .saves
            .read()
            .map_err(|_| RepositoryError::LockPoisoned)?;
        Ok(saves.get(&key).cloned())
    }

    fn delete(&self, name: &str) -> Result<bool> {
        let key = slot_key(name)?;
        let mut saves = self
            .saves
            .write()
            .map_err(|_| RepositoryError::LockPoisoned)?;
        Ok(saves.remove(&key).is_some())
    }

    fn list(&self) -> Result<Vec<String>> {
        let saves = self
            .saves
            .read()
            .map_err(|_| RepositoryError::LockPoisoned)?;
        Ok(saves.keys().cloned().collect())
    }
}

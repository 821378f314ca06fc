//! File-based SaveRepository implementation.

use std::fs;
use std::path::{Path, PathBuf};

use game_core::Player;

use super::{RepositoryError, Result, SaveRepository, slot_key};

/// Stores each character as pretty-printed JSON in `save_<key>.json`.
///
/// Writes go to a temp file first and are moved into place with an atomic
/// rename, so a crash never leaves a half-written save behind.
pub struct FileSaveRepository {
    base_dir: PathBuf,
}

impl FileSaveRepository {
    /// Create a new file-based save repository, creating `base_dir` if needed.
    pub fn new(base_dir: impl AsRef<Path>) -> Result<Self> {
        let base_dir = base_dir.as_ref().to_path_buf();
        fs::create_dir_all(&base_dir)?;
        Ok(Self { base_dir })
    }

    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    fn save_path(&self, name: &str) -> Result<PathBuf> {
        Ok(self.base_dir.join(format!("save_{}.json", slot_key(name)?)))
    }
}

impl SaveRepository for FileSaveRepository {
    fn save(&self, player: &Player) -> Result<()> {
        let path = self.save_path(&player.entity.name)?;
        let temp_path = path.with_extension("json.tmp");

        let json = serde_json::to_string_pretty(player)
            .map_err(|e| RepositoryError::Json(e.to_string()))?;
        fs::write(&temp_path, json)?;
        fs::rename(&temp_path, &path)?;

        tracing::info!(target: "repository", path = %path.display(), "saved");
        Ok(())
    }

    fn load(&self, name: &str) -> Result<Option<Player>> {
        let path = self.save_path(name)?;
        if !path.exists() {
            return Ok(None);
        }

        let json = fs::read_to_string(&path)?;
        let player: Player =
            serde_json::from_str(&json).map_err(|e| RepositoryError::Json(e.to_string()))?;

        tracing::info!(
            target: "repository",
            name = %player.entity.name,
            level = player.level,
            "loaded"
        );
        Ok(Some(player))
    }

    fn delete(&self, name: &str) -> Result<bool> {
        let path = self.save_path(name)?;
        if !path.exists() {
            return Ok(false);
        }
        fs::remove_file(&path)?;
        tracing::info!(target: "repository", path = %path.display(), "deleted");
        Ok(true)
    }

    fn list(&self) -> Result<Vec<String>> {
        let mut slots = Vec::new();

        for entry in fs::read_dir(&self.base_dir)? {
            let path = entry?.path();

            if let Some(filename) = path.file_name().and_then(|s| s.to_str())
                && let Some(slot) = filename
                    .strip_prefix("save_")
                    .and_then(|s| s.strip_suffix(".json"))
            {
                slots.push(slot.to_string());
            }
        }

        slots.sort();
        Ok(slots)
    }
}

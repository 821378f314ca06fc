//! Repository contract for saving and loading characters.

use game_core::Player;

use super::Result;

/// Persistence for player characters, one slot per character name.
///
/// Slot keys are derived from the character name by [`slot_key`]; callers
/// pass either the display name or a key returned by [`SaveRepository::list`].
/// Active effects are never persisted.
pub trait SaveRepository {
    /// Write the character, replacing any previous save in its slot.
    fn save(&self, player: &Player) -> Result<()>;

    /// Load a character. `Ok(None)` if the slot is empty.
    fn load(&self, name: &str) -> Result<Option<Player>>;

    /// Remove a slot. Returns whether anything was deleted.
    fn delete(&self, name: &str) -> Result<bool>;

    /// All slot keys, sorted.
    fn list(&self) -> Result<Vec<String>>;

    fn exists(&self, name: &str) -> Result<bool> {
        Ok(self.list()?.contains(&slot_key(name)?))
    }
}

/// Normalise a character name into a slot key.
///
/// Keys are lowercase. Characters outside `[a-z0-9_-]` become `_`, so a key
/// is always a safe file-name fragment.
pub fn slot_key(name: &str) -> Result<String> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err(super::RepositoryError::InvalidName(name.to_string()));
    }
    Ok(trimmed
        .chars()
        .map(|c| {
            let c = c.to_ascii_lowercase();
            if c.is_ascii_alphanumeric() || c == '-' || c == '_' {
                c
            } else {
                '_'
            }
        })
        .collect())
}

//! Skill unlock catalog loader.

use std::collections::HashSet;
use std::path::Path;

use game_core::{SkillCatalog, SkillUnlock};

use crate::loaders::{LoadResult, read_file};

const EMBEDDED: &str = include_str!("../../data/skills.ron");

/// Loader for the skill unlock catalog from RON files.
///
/// The file is a list of `(level, skill)` entries; order does not matter.
pub struct SkillLoader;

impl SkillLoader {
    pub fn load(path: &Path) -> LoadResult<SkillCatalog> {
        let content = read_file(path)?;
        Self::parse(&content)
    }

    pub fn embedded() -> LoadResult<SkillCatalog> {
        Self::parse(EMBEDDED)
    }

    fn parse(content: &str) -> LoadResult<SkillCatalog> {
        let unlocks: Vec<SkillUnlock> = ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse skills RON: {}", e))?;

        let mut seen = HashSet::new();
        for unlock in &unlocks {
            if !seen.insert(unlock.skill.id) {
                anyhow::bail!("Skill '{}' is unlocked more than once", unlock.skill.id);
            }
        }

        Ok(SkillCatalog::new(unlocks))
    }
}

//! Starting satchel loader.

use std::path::Path;

use game_core::{InventoryState, ItemStack};

use crate::loaders::{LoadResult, read_file};

const EMBEDDED: &str = include_str!("../../data/items.ron");

/// Loader for item stacks from RON files.
pub struct ItemLoader;

impl ItemLoader {
    /// Load item stacks from a RON file.
    pub fn load(path: &Path) -> LoadResult<Vec<ItemStack>> {
        let content = read_file(path)?;
        Self::parse(&content)
    }

    pub fn embedded() -> LoadResult<Vec<ItemStack>> {
        Self::parse(EMBEDDED)
    }

    /// Fold loaded stacks into a satchel; stacks sharing an id merge.
    pub fn satchel(stacks: Vec<ItemStack>) -> InventoryState {
        InventoryState::new(stacks)
    }

    fn parse(content: &str) -> LoadResult<Vec<ItemStack>> {
        let items: Vec<ItemStack> = ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse items RON: {}", e))?;
        Ok(items)
    }
}

//! Memory Gate catalog loader.

use std::collections::HashSet;
use std::path::Path;

use crate::gates::GateCatalog;
use crate::loaders::{LoadResult, read_file};

const EMBEDDED: &str = include_str!("../../data/gates.ron");

/// Loader for gate ranks and enemy templates from RON files.
pub struct GateLoader;

impl GateLoader {
    pub fn load(path: &Path) -> LoadResult<GateCatalog> {
        let content = read_file(path)?;
        Self::parse(&content)
    }

    pub fn embedded() -> LoadResult<GateCatalog> {
        Self::parse(EMBEDDED)
    }

    fn parse(content: &str) -> LoadResult<GateCatalog> {
        let catalog: GateCatalog = ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse gates RON: {}", e))?;

        if catalog.gates.is_empty() {
            anyhow::bail!("Gate catalog defines no gates");
        }
        let mut ranks = HashSet::new();
        for gate in &catalog.gates {
            if gate.multiplier == 0 {
                anyhow::bail!("Gate {} has a zero multiplier", gate.rank);
            }
            if !ranks.insert(gate.rank) {
                anyhow::bail!("Gate {} is defined more than once", gate.rank);
            }
        }

        Ok(catalog)
    }
}

//! Relic effect table loader.

use std::collections::HashMap;
use std::path::Path;

use lexicon_core::{RelicEffectEntry, RelicId};
use serde::{Deserialize, Serialize};

use crate::loaders::{LoadResult, read_file};

/// Relic effect table structure for RON files.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RelicTable {
    pub relics: Vec<RelicEffectEntry>,
}

/// Loader for the relic effect table from RON files.
pub struct RelicLoader;

impl RelicLoader {
    /// Load relic effects keyed by relic id. Later entries replace earlier
    /// ones with the same id.
    pub fn load(path: &Path) -> LoadResult<HashMap<RelicId, RelicEffectEntry>> {
        let content = read_file(path)?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> LoadResult<HashMap<RelicId, RelicEffectEntry>> {
        let table: RelicTable = ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse relic table RON: {}", e))?;

        Ok(table
            .relics
            .into_iter()
            .map(|entry| (entry.id.clone(), entry))
            .collect())
    }
}

//! Named encounter loader.

use std::collections::BTreeMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::loaders::{LoadResult, read_file};

/// Encounter table structure for RON files: encounter name to enemy ids.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EncounterTable {
    pub encounters: BTreeMap<String, Vec<String>>,
}

/// Loader for named encounters from RON files.
pub struct EncounterLoader;

impl EncounterLoader {
    pub fn load(path: &Path) -> LoadResult<BTreeMap<String, Vec<String>>> {
        let content = read_file(path)?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> LoadResult<BTreeMap<String, Vec<String>>> {
        let table: EncounterTable = ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse encounter table RON: {}", e))?;
        Ok(table.encounters)
    }
}

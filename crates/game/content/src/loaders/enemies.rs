//! Enemy roster loader.

use std::collections::BTreeMap;
use std::path::Path;

use lexicon_core::EnemyData;
use serde::{Deserialize, Serialize};

use crate::loaders::{LoadResult, read_file};

/// Enemy roster structure for RON files.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EnemyRoster {
    pub enemies: Vec<EnemyData>,
}

/// Loader for the enemy roster from RON files.
pub struct EnemyLoader;

impl EnemyLoader {
    /// Load the roster keyed by enemy id.
    ///
    /// Every definition is validated here so a broken enemy is reported when
    /// content loads rather than when a combat starts.
    pub fn load(path: &Path) -> LoadResult<BTreeMap<String, EnemyData>> {
        let content = read_file(path)?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> LoadResult<BTreeMap<String, EnemyData>> {
        let roster: EnemyRoster = ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse enemy roster RON: {}", e))?;

        let mut enemies = BTreeMap::new();
        for enemy in roster.enemies {
            enemy
                .validate()
                .map_err(|e| anyhow::anyhow!("Invalid enemy '{}': {}", enemy.id, e))?;
            if enemies.contains_key(&enemy.id) {
                anyhow::bail!("Duplicate enemy '{}' in roster", enemy.id);
            }
            enemies.insert(enemy.id.clone(), enemy);
        }
        Ok(enemies)
    }
}

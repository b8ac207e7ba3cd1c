//! Card pool loader.

use std::collections::BTreeSet;
use std::path::Path;

use lexicon_core::CardData;
use serde::{Deserialize, Serialize};

use crate::loaders::{LoadResult, read_file};

/// Card pool structure for RON files.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CardCatalog {
    pub cards: Vec<CardData>,
}

/// Loader for the card pool from RON files.
pub struct CardLoader;

impl CardLoader {
    /// Load the card pool from a RON file.
    ///
    /// Word ids must be unique across the pool.
    pub fn load(path: &Path) -> LoadResult<Vec<CardData>> {
        let content = read_file(path)?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> LoadResult<Vec<CardData>> {
        let catalog: CardCatalog = ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse card catalog RON: {}", e))?;

        let mut seen = BTreeSet::new();
        for card in &catalog.cards {
            if !seen.insert(&card.word_id) {
                anyhow::bail!("Duplicate card '{}' in card catalog", card.word_id);
            }
        }
        Ok(catalog.cards)
    }
}

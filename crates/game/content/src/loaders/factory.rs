//! Content factory for building a [`ContentBundle`] from data files.

use std::path::{Path, PathBuf};

use lexicon_core::{CardData, CombatConfig, SynergyConfig};
use tracing::{debug, info, warn};

use crate::ContentBundle;
use crate::loaders::{
    CardLoader, ConfigLoader, EncounterLoader, EnemyLoader, LoadResult, RelicLoader,
    SynergyLoader,
};

/// Content factory that loads all combat content from a data directory.
///
/// # Directory Structure
///
/// ```text
/// data_dir/
/// ├── config.toml      (optional)
/// ├── synergy.toml     (optional)
/// ├── cards.ron
/// ├── enemies.ron
/// ├── encounters.ron   (optional)
/// └── relics.ron       (optional)
/// ```
pub struct ContentFactory {
    data_dir: PathBuf,
}

impl ContentFactory {
    /// Creates a new content factory pointing to a data directory.
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    /// Load the card pool from `cards.ron`.
    pub fn load_cards(&self) -> LoadResult<Vec<CardData>> {
        CardLoader::load(&self.data_dir.join("cards.ron"))
    }

    /// Load combat configuration from `config.toml`.
    pub fn load_config(&self) -> LoadResult<CombatConfig> {
        ConfigLoader::load(&self.data_dir.join("config.toml"))
    }

    /// Load combat configuration, falling back to defaults when the file is
    /// missing or malformed.
    pub fn load_config_or_default(&self) -> CombatConfig {
        self.optional("config.toml", ConfigLoader::load)
            .unwrap_or_default()
    }

    /// Load synergy tuning from `synergy.toml`.
    pub fn load_synergy(&self) -> LoadResult<SynergyConfig> {
        SynergyLoader::load(&self.data_dir.join("synergy.toml"))
    }

    /// Loads every content file into a bundle.
    ///
    /// Cards and enemies are required. Optional files that are missing or
    /// malformed fall back to defaults with a warning.
    pub fn bundle(&self) -> LoadResult<ContentBundle> {
        let cards = self.load_cards()?;
        let enemies = EnemyLoader::load(&self.data_dir.join("enemies.ron"))?;
        let encounters = self
            .optional("encounters.ron", EncounterLoader::load)
            .unwrap_or_default();
        let relics = self
            .optional("relics.ron", RelicLoader::load)
            .unwrap_or_default();
        let synergy = self.optional("synergy.toml", SynergyLoader::load);
        let config = self.load_config_or_default();

        info!(
            target: "lexicon::content",
            dir = %self.data_dir.display(),
            cards = cards.len(),
            enemies = enemies.len(),
            encounters = encounters.len(),
            relics = relics.len(),
            "content loaded"
        );

        Ok(ContentBundle::new(cards)
            .with_enemies(enemies.into_values())
            .with_encounters(encounters)
            .with_relics(relics.into_values())
            .with_config(config)
            .with_synergy(synergy))
    }

    /// Returns the data directory path.
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    fn optional<T>(&self, file: &str, load: impl FnOnce(&Path) -> LoadResult<T>) -> Option<T> {
        let path = self.data_dir.join(file);
        if !path.exists() {
            debug!(target: "lexicon::content", file, "optional content file absent");
            return None;
        }
        match load(&path) {
            Ok(value) => Some(value),
            Err(error) => {
                warn!(
                    target: "lexicon::content",
                    file,
                    %error,
                    "ignoring malformed content file, using defaults"
                );
                None
            }
        }
    }
}

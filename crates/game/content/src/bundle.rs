//! In-memory content implementing the core's content oracle.

use std::collections::{BTreeMap, HashMap};

use lexicon_core::{
    CardData, CombatConfig, ContentOracle, EnemyData, RelicEffectEntry, RelicId, SynergyConfig,
};
use tracing::warn;

/// Everything a combat reads from static data.
#[derive(Clone, Debug, Default)]
pub struct ContentBundle {
    cards: Vec<CardData>,
    enemies: BTreeMap<String, EnemyData>,
    encounters: BTreeMap<String, Vec<String>>,
    relics: HashMap<RelicId, RelicEffectEntry>,
    config: CombatConfig,
    synergy: Option<SynergyConfig>,
}

impl ContentBundle {
    pub fn new(cards: Vec<CardData>) -> Self {
        Self {
            cards,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_enemies(mut self, enemies: impl IntoIterator<Item = EnemyData>) -> Self {
        self.enemies
            .extend(enemies.into_iter().map(|e| (e.id.clone(), e)));
        self
    }

    #[must_use]
    pub fn with_encounters(mut self, encounters: BTreeMap<String, Vec<String>>) -> Self {
        self.encounters = encounters;
        self
    }

    #[must_use]
    pub fn with_relics(mut self, relics: impl IntoIterator<Item = RelicEffectEntry>) -> Self {
        self.relics
            .extend(relics.into_iter().map(|r| (r.id.clone(), r)));
        self
    }

    #[must_use]
    pub fn with_config(mut self, config: CombatConfig) -> Self {
        self.config = config;
        self
    }

    /// `None` leaves the core on its built-in synergy tuning.
    #[must_use]
    pub fn with_synergy(mut self, synergy: Option<SynergyConfig>) -> Self {
        self.synergy = synergy;
        self
    }

    pub fn cards(&self) -> &[CardData] {
        &self.cards
    }

    pub fn config(&self) -> &CombatConfig {
        &self.config
    }

    pub fn enemy(&self, id: &str) -> Option<&EnemyData> {
        self.enemies.get(id)
    }

    pub fn encounter_names(&self) -> impl Iterator<Item = &str> {
        self.encounters.keys().map(String::as_str)
    }

    /// Enemies of a named encounter, in listed order.
    ///
    /// Unknown enemy ids are skipped with a warning; an unknown encounter
    /// yields `None`.
    pub fn encounter(&self, name: &str) -> Option<Vec<EnemyData>> {
        let ids = self.encounters.get(name)?;
        let enemies = ids
            .iter()
            .filter_map(|id| {
                let enemy = self.enemies.get(id).cloned();
                if enemy.is_none() {
                    warn!(
                        target: "lexicon::content",
                        encounter = name,
                        enemy = %id,
                        "encounter references an unknown enemy"
                    );
                }
                enemy
            })
            .collect();
        Some(enemies)
    }
}

impl ContentOracle for ContentBundle {
    fn card_pool(&self) -> Vec<CardData> {
        self.cards.clone()
    }

    fn combat_config(&self) -> CombatConfig {
        self.config.clone()
    }

    fn synergy_config(&self) -> Option<SynergyConfig> {
        self.synergy.clone()
    }

    fn relic_effect(&self, id: &RelicId) -> Option<RelicEffectEntry> {
        self.relics.get(id).cloned()
    }
}

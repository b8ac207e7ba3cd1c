use crate::config::CombatConfig;
use crate::relic::{RelicEffectEntry, RelicId};
use crate::state::CardData;
use crate::synergy::SynergyConfig;

/// Static content collaborator: card pool, tuning, relic definitions.
pub trait ContentOracle: Send + Sync {
    /// Every card the player brings into combat. Word ids must be unique.
    fn card_pool(&self) -> Vec<CardData>;

    fn combat_config(&self) -> CombatConfig {
        CombatConfig::default()
    }

    /// Synergy tuning; `None` falls back to [`SynergyConfig::default`].
    fn synergy_config(&self) -> Option<SynergyConfig> {
        None
    }

    fn relic_effect(&self, id: &RelicId) -> Option<RelicEffectEntry>;
}

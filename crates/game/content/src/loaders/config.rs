//! Combat and synergy configuration loaders.

use std::path::Path;

use lexicon_core::{CombatConfig, SynergyConfig};

use crate::loaders::{LoadResult, read_file};

/// Loader for combat configuration from TOML files.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load combat config from a TOML file. Missing keys keep their defaults.
    pub fn load(path: &Path) -> LoadResult<CombatConfig> {
        let content = read_file(path)?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> LoadResult<CombatConfig> {
        toml::from_str(content).map_err(|e| anyhow::anyhow!("Failed to parse config TOML: {}", e))
    }
}

/// Loader for synergy tuning from TOML files.
pub struct SynergyLoader;

impl SynergyLoader {
    /// Load synergy tuning from a TOML file. Each table may be partial.
    pub fn load(path: &Path) -> LoadResult<SynergyConfig> {
        let content = read_file(path)?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> LoadResult<SynergyConfig> {
        toml::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse synergy TOML: {}", e))
    }
}

#[cfg(test)]
mod tests {
    use lexicon_core::{EffectClass, GamePhase, ProficiencyLevel, TierPair};

    use super::*;

    #[test]
    fn partial_config_keeps_defaults() {
        let config = ConfigLoader::parse("hand_size = 6\ngame_phase = \"Tutorial\"\n").unwrap();
        assert_eq!(config.hand_size, 6);
        assert_eq!(config.game_phase, GamePhase::Tutorial);
        assert_eq!(config.max_energy, CombatConfig::DEFAULT_MAX_ENERGY);
    }

    #[test]
    fn partial_synergy_tables_merge_with_defaults() {
        let synergy = SynergyLoader::parse(
            r#"
            [dimension_chain]
            second_card_bonus = 0.25
            apply_to_effects = ["Damage", "Block"]

            [element_resonance]
            life_heal = { tier2 = 3, tier3 = 5 }

            [knowledge_resonance]
            high_level = "Proficient"
            "#,
        )
        .unwrap();

        assert_eq!(synergy.dimension_chain.second_card_bonus, 0.25);
        assert_eq!(synergy.dimension_chain.third_card_bonus, 0.4);
        assert_eq!(
            synergy.dimension_chain.apply_to_effects,
            vec![EffectClass::Damage, EffectClass::Block]
        );
        assert_eq!(synergy.element_resonance.life_heal, TierPair::new(3, 5));
        assert_eq!(synergy.element_resonance.mind_draw, TierPair::new(1, 2));
        assert_eq!(
            synergy.knowledge_resonance.high_level,
            ProficiencyLevel::Proficient
        );
        assert_eq!(synergy.resource_mediator.max_tokens_per_tag, 2);
    }
}

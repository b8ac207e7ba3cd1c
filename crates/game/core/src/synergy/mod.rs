//! Per-turn synergy subsystems that scale card values.
//!
//! All four subsystems reset at the start of every player turn:
//!
//! - [`ResourcePool`]: tag tokens produced by one card and consumed by later ones
//! - [`DimensionChain`]: repeated dimensions and dimension coverage
//! - [`ElementResonance`]: element counts crossing tier 2 and tier 3
//! - [`KnowledgeResonance`]: proficiency contrast and insight tokens
mod dimension;
mod element;
mod knowledge;
mod resource;

pub use dimension::{CoverageReward, DimensionChain};
pub use element::{ElementResonance, ResonanceEffect, ResonanceTiers, ResonanceTrigger};
pub use knowledge::{InsightReward, KnowledgeResonance};
pub use resource::ResourcePool;

use crate::env::ProficiencyLevel;
use crate::state::{EffectClass, Element};

/// Tuning for all synergy subsystems. Missing sections use defaults.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct SynergyConfig {
    pub resource_mediator: ResourceMediatorConfig,
    pub dimension_chain: DimensionChainConfig,
    pub element_resonance: ElementResonanceConfig,
    pub knowledge_resonance: KnowledgeResonanceConfig,
}

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct ResourceMediatorConfig {
    pub bonus_per_token: f32,
    pub max_tokens_per_tag: u32,
    pub max_total_bonus: f32,
    /// Empty means [`EffectClass::DEFAULT_BONUS_TARGETS`].
    pub apply_to_effects: Vec<EffectClass>,
}

impl Default for ResourceMediatorConfig {
    fn default() -> Self {
        Self {
            bonus_per_token: 0.1,
            max_tokens_per_tag: 2,
            max_total_bonus: 0.3,
            apply_to_effects: Vec::new(),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct DimensionChainConfig {
    pub second_card_bonus: f32,
    pub third_card_bonus: f32,
    /// Distinct dimensions needed for the one-card coverage draw.
    pub coverage_draw_at: u32,
    /// Distinct dimensions needed for the draw-and-energy coverage reward.
    pub coverage_draw_and_energy_at: u32,
    pub apply_to_effects: Vec<EffectClass>,
}

impl Default for DimensionChainConfig {
    fn default() -> Self {
        Self {
            second_card_bonus: 0.2,
            third_card_bonus: 0.4,
            coverage_draw_at: 3,
            coverage_draw_and_energy_at: 4,
            apply_to_effects: Vec::new(),
        }
    }
}

/// Totals reached at tier 2 and tier 3.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TierPair {
    pub tier2: u32,
    pub tier3: u32,
}

impl TierPair {
    pub const fn new(tier2: u32, tier3: u32) -> Self {
        Self { tier2, tier3 }
    }

    /// Amount granted on reaching `tier`; tier 3 grants only the increment.
    pub const fn increment(self, tier: u8) -> u32 {
        match tier {
            2 => self.tier2,
            3 => self.tier3.saturating_sub(self.tier2),
            _ => 0,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct ElementResonanceConfig {
    pub life_heal: TierPair,
    pub force_attack_bonus: TierPair,
    pub mind_draw: TierPair,
    pub matter_block: TierPair,
    pub abstract_cost_reduction: TierPair,
}

impl ElementResonanceConfig {
    pub fn tiers(&self, element: Element) -> TierPair {
        match element {
            Element::Life => self.life_heal,
            Element::Force => self.force_attack_bonus,
            Element::Mind => self.mind_draw,
            Element::Matter => self.matter_block,
            Element::Abstract => self.abstract_cost_reduction,
        }
    }
}

impl Default for ElementResonanceConfig {
    fn default() -> Self {
        Self {
            life_heal: TierPair::new(2, 4),
            force_attack_bonus: TierPair::new(2, 4),
            mind_draw: TierPair::new(1, 2),
            matter_block: TierPair::new(3, 6),
            abstract_cost_reduction: TierPair::new(1, 2),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct KnowledgeResonanceConfig {
    pub insight_threshold: u32,
    pub insight_reward_damage: u32,
    pub insight_reward_block: u32,
    pub insight_reward_draw: u32,
    /// Bonus for a low-proficiency card played right after a high one.
    pub low_level_bonus: f32,
    /// Lowest level that counts as "high".
    pub high_level: ProficiencyLevel,
    pub apply_to_effects: Vec<EffectClass>,
}

impl Default for KnowledgeResonanceConfig {
    fn default() -> Self {
        Self {
            insight_threshold: 3,
            insight_reward_damage: 3,
            insight_reward_block: 3,
            insight_reward_draw: 1,
            low_level_bonus: 0.3,
            high_level: ProficiencyLevel::Remembered,
            apply_to_effects: Vec::new(),
        }
    }
}

/// Mutable synergy trackers for the current player turn.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SynergyState {
    pub resource: ResourcePool,
    pub dimension: DimensionChain,
    pub element: ElementResonance,
    pub knowledge: KnowledgeResonance,
}

impl SynergyState {
    pub fn reset_turn(&mut self) {
        *self = Self::default();
    }
}

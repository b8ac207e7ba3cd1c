//! Effect value pipeline.
//!
//! Every card effect's magnitude is computed through the stages of
//! [`PipelineStage`], in declaration order. The order is load-bearing for
//! balance and must not be rearranged.

use tracing::trace;

use crate::config::CombatConfig;
use crate::relic::FlatBonus;
use crate::state::{CardEffect, EffectClass, EnemyData, Element, Stance};
use crate::synergy::SynergyConfig;

/// Stages applied to each effect value, in order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::EnumIter)]
pub enum PipelineStage {
    /// `round(value × card multiplier)`.
    Base,
    ResourceMediator,
    DimensionChain,
    KnowledgeResonance,
    /// Relic lexicon bonus.
    Lexicon,
    /// Relic flat bonuses.
    Flat,
    Stance,
    /// Weakness ×1.5, resistance ×0.5 against the target.
    Element,
    /// Force-resonance accumulator, reported separately.
    AttackBonus,
}

/// Rounds half to even, matching the engine's integer conversions everywhere.
pub fn round_value(value: f32) -> i32 {
    value.round_ties_even() as i32
}

/// Per-card inputs, computed once before the card's effects resolve.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CardModifiers {
    pub multiplier: f32,
    pub resource_bonus: f32,
    pub dimension_bonus: f32,
    pub knowledge_bonus: f32,
    pub lexicon_bonus: f32,
    pub flat: FlatBonus,
    pub stance: Stance,
    pub element: Option<Element>,
    pub attack_bonus: u32,
}

impl CardModifiers {
    /// Modifiers that leave values untouched apart from `multiplier`.
    pub fn neutral(multiplier: f32) -> Self {
        Self {
            multiplier,
            resource_bonus: 0.0,
            dimension_bonus: 0.0,
            knowledge_bonus: 0.0,
            lexicon_bonus: 0.0,
            flat: FlatBonus::default(),
            stance: Stance::None,
            element: None,
            attack_bonus: 0,
        }
    }
}

/// Pipeline output. Damage-class effects deal `scaled + attack_bonus`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct EffectValue {
    pub scaled: i32,
    pub attack_bonus: i32,
}

impl EffectValue {
    pub fn total(self) -> i32 {
        self.scaled + self.attack_bonus
    }

    /// Total clamped to zero, for application.
    pub fn amount(self) -> u32 {
        self.total().max(0) as u32
    }
}

fn apply_bonus(value: i32, bonus: f32, whitelist: &[EffectClass], class: EffectClass) -> i32 {
    if bonus == 0.0 || !class.allowed_by(whitelist) {
        return value;
    }
    round_value(value as f32 * (1.0 + bonus))
}

/// Weakness/resistance against `target`. Inapplicable without a card element.
pub fn element_modifier(value: i32, element: Option<Element>, target: &EnemyData) -> i32 {
    let Some(element) = element else {
        return value;
    };
    if target.weakness == Some(element) {
        round_value(value as f32 * CombatConfig::WEAKNESS_MULTIPLIER)
    } else if target.resistance == Some(element) {
        round_value(value as f32 * CombatConfig::RESISTANCE_MULTIPLIER)
    } else {
        value
    }
}

/// Stance multiplier for effects the stance cares about.
pub fn stance_modifier(value: i32, stance: Stance, class: EffectClass) -> i32 {
    let boosted = match stance {
        Stance::Offensive => matches!(class, EffectClass::Damage | EffectClass::DamageAll),
        Stance::Defensive => class == EffectClass::Block,
        _ => false,
    };
    if boosted {
        round_value(value as f32 * CombatConfig::STANCE_MULTIPLIER)
    } else {
        value
    }
}

/// Runs the full pipeline for one effect.
///
/// `target` is the enemy the card was aimed at, if any; the element stage is
/// skipped without one.
pub fn compute(
    effect: &CardEffect,
    mods: &CardModifiers,
    config: &SynergyConfig,
    target: Option<&EnemyData>,
) -> EffectValue {
    let class = effect.kind.class();

    let mut value = round_value(effect.value as f32 * mods.multiplier);
    value = apply_bonus(
        value,
        mods.resource_bonus,
        &config.resource_mediator.apply_to_effects,
        class,
    );
    value = apply_bonus(
        value,
        mods.dimension_bonus,
        &config.dimension_chain.apply_to_effects,
        class,
    );
    value = apply_bonus(
        value,
        mods.knowledge_bonus,
        &config.knowledge_resonance.apply_to_effects,
        class,
    );
    value = apply_bonus(value, mods.lexicon_bonus, &[], class);

    value += mods.flat.for_class(class);

    value = stance_modifier(value, mods.stance, class);

    if effect.kind.is_damage()
        && let Some(target) = target
    {
        value = element_modifier(value, mods.element, target);
    }

    let attack_bonus = if effect.kind.is_damage() {
        mods.attack_bonus as i32
    } else {
        0
    };

    trace!(
        target: "lexicon::combat",
        kind = %effect.kind,
        base = effect.value,
        scaled = value,
        attack_bonus,
        "effect value computed"
    );

    EffectValue {
        scaled: value,
        attack_bonus,
    }
}

/// Damage for one enemy hit by a DamageAll effect.
///
/// The element matchup is applied again per enemy on top of the pipeline
/// value, then the attack bonus is added.
pub fn damage_all_hit(value: EffectValue, element: Option<Element>, enemy: &EnemyData) -> u32 {
    let hit = element_modifier(value.scaled, element, enemy) + value.attack_bonus;
    hit.max(0) as u32
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{EffectKind, EnemyAction, EnemyIntent};

    fn enemy() -> EnemyData {
        EnemyData::new("slime", 20, vec![EnemyAction::new(EnemyIntent::Attack, 5, 1)])
            .with_weakness(Element::Force)
            .with_resistance(Element::Mind)
    }

    fn damage(value: i32) -> CardEffect {
        CardEffect::new(EffectKind::Damage, value)
    }

    #[test]
    fn weakness_scales_damage() {
        let mut mods = CardModifiers::neutral(1.0);
        mods.element = Some(Element::Force);
        let out = compute(&damage(8), &mods, &SynergyConfig::default(), Some(&enemy()));
        assert_eq!(out.total(), 12);
    }

    #[test]
    fn resistance_halves_damage_with_even_rounding() {
        let mut mods = CardModifiers::neutral(1.0);
        mods.element = Some(Element::Mind);
        let out = compute(&damage(5), &mods, &SynergyConfig::default(), Some(&enemy()));
        assert_eq!(out.total(), 2);
    }

    #[test]
    fn element_needs_a_target() {
        let mut mods = CardModifiers::neutral(1.0);
        mods.element = Some(Element::Force);
        let out = compute(&damage(8), &mods, &SynergyConfig::default(), None);
        assert_eq!(out.total(), 8);
    }

    #[test]
    fn wrong_answer_multiplier_halves() {
        let mods = CardModifiers::neutral(0.5);
        let out = compute(&damage(10), &mods, &SynergyConfig::default(), None);
        assert_eq!(out.total(), 5);
    }

    #[test]
    fn stages_apply_in_order() {
        // 10 → ×1.2 chain = 12 → +3 flat = 15 → ×1.5 offensive = 22.5 → 22
        // → ×1.5 weakness = 33 → +2 attack bonus.
        let mut mods = CardModifiers::neutral(1.0);
        mods.dimension_bonus = 0.2;
        mods.flat.damage = 3;
        mods.stance = Stance::Offensive;
        mods.element = Some(Element::Force);
        mods.attack_bonus = 2;
        let out = compute(&damage(10), &mods, &SynergyConfig::default(), Some(&enemy()));
        assert_eq!(
            out,
            EffectValue {
                scaled: 33,
                attack_bonus: 2
            }
        );
    }

    #[test]
    fn whitelist_gates_bonuses() {
        let mut config = SynergyConfig::default();
        config.resource_mediator.apply_to_effects = vec![EffectClass::Block];
        let mut mods = CardModifiers::neutral(1.0);
        mods.resource_bonus = 0.3;
        let out = compute(&damage(10), &mods, &config, None);
        assert_eq!(out.total(), 10);
        let block = compute(&CardEffect::new(EffectKind::Block, 10), &mods, &config, None);
        assert_eq!(block.total(), 13);
    }

    #[test]
    fn attack_bonus_only_on_damage() {
        let mut mods = CardModifiers::neutral(1.0);
        mods.attack_bonus = 4;
        let heal = compute(
            &CardEffect::new(EffectKind::Heal, 3),
            &mods,
            &SynergyConfig::default(),
            None,
        );
        assert_eq!(heal.total(), 3);
    }

    #[test]
    fn defensive_boosts_block_only() {
        let mut mods = CardModifiers::neutral(1.0);
        mods.stance = Stance::Defensive;
        let config = SynergyConfig::default();
        let block = compute(&CardEffect::new(EffectKind::Block, 6), &mods, &config, None);
        assert_eq!(block.total(), 9);
        assert_eq!(compute(&damage(5), &mods, &config, None).total(), 5);
    }

    #[test]
    fn damage_all_reapplies_element_per_enemy() {
        let value = EffectValue {
            scaled: 12,
            attack_bonus: 1,
        };
        assert_eq!(damage_all_hit(value, Some(Element::Force), &enemy()), 19);
    }
}

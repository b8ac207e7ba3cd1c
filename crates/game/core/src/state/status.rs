//! Status effect system for combat entities.
//!
//! Each entity holds at most one effect per [`StatusKind`]; re-applying a kind
//! stacks its value and keeps the longer duration. Durations count whole
//! turns and tick down during turn-end processing.

use arrayvec::ArrayVec;

use crate::combat::round_value;
use crate::config::CombatConfig;

#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    strum::Display,
    strum::EnumIter,
    strum::EnumCount,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum StatusKind {
    // ========================================================================
    // Elemental (interact with each other)
    // ========================================================================
    /// Loses `value` hp at turn start.
    Burning,
    /// Skips the next action.
    Frozen,
    Wet,
    Oiled,

    // ========================================================================
    // Afflictions
    // ========================================================================
    /// Loses `value` hp at turn start.
    Poisoned,
    Bleeding,

    // ========================================================================
    // Buffs
    // ========================================================================
    /// Adds `value` to outgoing damage.
    Strength,
    /// Adds `value` to block gained.
    Dexterity,
    /// Heals `value` hp at turn start.
    Regeneration,
    /// Grants `value` extra energy at the next turn start, then is consumed.
    /// Its duration does not tick.
    Energized,
}

impl StatusKind {
    pub const fn is_positive(self) -> bool {
        matches!(
            self,
            Self::Strength | Self::Dexterity | Self::Regeneration | Self::Energized
        )
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StatusEffect {
    pub kind: StatusKind,
    pub value: i32,
    /// Remaining turns; the effect is removed when this reaches zero.
    pub duration: i32,
}

/// Result of two statuses meeting on the same entity.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum StatusInteraction {
    /// Burning + Oiled: both consumed, the holder takes `damage`.
    Explosion { damage: u32 },
    /// Wet + Frozen: Wet consumed, Frozen lasts one turn longer.
    DeepFreeze,
    /// Burning + Frozen: both consumed.
    Quenched,
    /// Poisoned + Bleeding: poison value grows by half.
    Festering,
}

/// Active status effects on an entity, kept sorted by kind.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StatusEffects {
    effects: ArrayVec<StatusEffect, { CombatConfig::MAX_STATUS_EFFECTS }>,
}

impl StatusEffects {
    pub fn empty() -> Self {
        Self {
            effects: ArrayVec::new(),
        }
    }

    pub fn get(&self, kind: StatusKind) -> Option<&StatusEffect> {
        self.effects.iter().find(|e| e.kind == kind)
    }

    pub fn has(&self, kind: StatusKind) -> bool {
        self.get(kind).is_some()
    }

    /// Value of `kind`, or zero when absent.
    pub fn value(&self, kind: StatusKind) -> i32 {
        self.get(kind).map_or(0, |e| e.value)
    }

    /// Adds or stacks an effect. Stacking sums values and keeps the longer
    /// duration.
    pub fn apply(&mut self, kind: StatusKind, value: i32, duration: i32) {
        if let Some(existing) = self.effects.iter_mut().find(|e| e.kind == kind) {
            existing.value += value;
            existing.duration = existing.duration.max(duration);
            return;
        }

        if self.effects.is_full() {
            return;
        }
        let position = self
            .effects
            .iter()
            .position(|e| e.kind > kind)
            .unwrap_or(self.effects.len());
        self.effects.insert(
            position,
            StatusEffect {
                kind,
                value,
                duration,
            },
        );
    }

    pub fn remove(&mut self, kind: StatusKind) -> Option<StatusEffect> {
        let index = self.effects.iter().position(|e| e.kind == kind)?;
        Some(self.effects.remove(index))
    }

    /// Decrements every duration and drops effects that reach zero.
    pub fn tick_durations(&mut self) {
        for effect in self.effects.iter_mut() {
            if effect.kind != StatusKind::Energized {
                effect.duration -= 1;
            }
        }
        self.effects
            .retain(|e| e.kind == StatusKind::Energized || e.duration > 0);
    }

    /// Resolves pairwise interactions in a fixed order.
    ///
    /// Enemies run this after every application; the caller deals
    /// explosion damage.
    pub fn resolve_interactions(&mut self) -> Vec<StatusInteraction> {
        let mut fired = Vec::new();

        if self.has(StatusKind::Burning) && self.has(StatusKind::Oiled) {
            self.remove(StatusKind::Burning);
            self.remove(StatusKind::Oiled);
            fired.push(StatusInteraction::Explosion {
                damage: CombatConfig::EXPLOSION_DAMAGE,
            });
        }

        if self.has(StatusKind::Wet) && self.has(StatusKind::Frozen) {
            self.remove(StatusKind::Wet);
            if let Some(frozen) = self.effects.iter_mut().find(|e| e.kind == StatusKind::Frozen) {
                frozen.duration += 1;
            }
            fired.push(StatusInteraction::DeepFreeze);
        }

        if self.has(StatusKind::Burning) && self.has(StatusKind::Frozen) {
            self.remove(StatusKind::Burning);
            self.remove(StatusKind::Frozen);
            fired.push(StatusInteraction::Quenched);
        }

        if self.has(StatusKind::Poisoned) && self.has(StatusKind::Bleeding) {
            if let Some(poison) = self
                .effects
                .iter_mut()
                .find(|e| e.kind == StatusKind::Poisoned)
            {
                poison.value = round_value(poison.value as f32 * CombatConfig::FESTER_MULTIPLIER);
            }
            fired.push(StatusInteraction::Festering);
        }

        fired
    }

    pub fn iter(&self) -> impl Iterator<Item = &StatusEffect> {
        self.effects.iter()
    }

    pub fn len(&self) -> usize {
        self.effects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.effects.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stacking_sums_value_and_keeps_longer_duration() {
        let mut statuses = StatusEffects::empty();
        statuses.apply(StatusKind::Poisoned, 3, 2);
        statuses.apply(StatusKind::Poisoned, 2, 4);
        statuses.apply(StatusKind::Poisoned, 1, 1);
        let poison = statuses.get(StatusKind::Poisoned).copied();
        assert_eq!(
            poison,
            Some(StatusEffect {
                kind: StatusKind::Poisoned,
                value: 6,
                duration: 4
            })
        );
        assert_eq!(statuses.len(), 1);
    }

    #[test]
    fn expired_effects_are_dropped() {
        let mut statuses = StatusEffects::empty();
        statuses.apply(StatusKind::Wet, 0, 1);
        statuses.apply(StatusKind::Strength, 2, 3);
        statuses.tick_durations();
        assert!(!statuses.has(StatusKind::Wet));
        assert_eq!(statuses.get(StatusKind::Strength).map(|e| e.duration), Some(2));
    }

    #[test]
    fn effects_stay_sorted_by_kind() {
        let mut statuses = StatusEffects::empty();
        statuses.apply(StatusKind::Regeneration, 1, 2);
        statuses.apply(StatusKind::Burning, 1, 2);
        statuses.apply(StatusKind::Poisoned, 1, 2);
        let kinds: Vec<_> = statuses.iter().map(|e| e.kind).collect();
        assert_eq!(
            kinds,
            vec![
                StatusKind::Burning,
                StatusKind::Poisoned,
                StatusKind::Regeneration
            ]
        );
    }

    #[test]
    fn burning_and_oil_explode() {
        let mut statuses = StatusEffects::empty();
        statuses.apply(StatusKind::Oiled, 1, 3);
        statuses.apply(StatusKind::Burning, 4, 3);
        let fired = statuses.resolve_interactions();
        assert_eq!(fired, vec![StatusInteraction::Explosion { damage: 20 }]);
        assert!(statuses.is_empty());
    }

    #[test]
    fn wet_extends_frozen() {
        let mut statuses = StatusEffects::empty();
        statuses.apply(StatusKind::Frozen, 1, 1);
        statuses.apply(StatusKind::Wet, 1, 2);
        statuses.resolve_interactions();
        assert!(!statuses.has(StatusKind::Wet));
        assert_eq!(statuses.get(StatusKind::Frozen).map(|e| e.duration), Some(2));
    }

    #[test]
    fn burning_thaws_frozen() {
        let mut statuses = StatusEffects::empty();
        statuses.apply(StatusKind::Frozen, 1, 1);
        statuses.apply(StatusKind::Burning, 3, 2);
        assert_eq!(
            statuses.resolve_interactions(),
            vec![StatusInteraction::Quenched]
        );
        assert!(statuses.is_empty());
    }

    #[test]
    fn bleeding_worsens_poison() {
        let mut statuses = StatusEffects::empty();
        statuses.apply(StatusKind::Poisoned, 4, 3);
        statuses.apply(StatusKind::Bleeding, 1, 3);
        statuses.resolve_interactions();
        assert_eq!(statuses.value(StatusKind::Poisoned), 6);
    }

    #[test]
    fn festering_rounds_half_to_even() {
        let mut odd = StatusEffects::empty();
        odd.apply(StatusKind::Poisoned, 5, 3);
        odd.apply(StatusKind::Bleeding, 1, 3);
        odd.resolve_interactions();
        assert_eq!(odd.value(StatusKind::Poisoned), 8);

        let mut tie = StatusEffects::empty();
        tie.apply(StatusKind::Poisoned, 3, 3);
        tie.apply(StatusKind::Bleeding, 1, 3);
        tie.resolve_interactions();
        assert_eq!(tie.value(StatusKind::Poisoned), 4);
    }
}

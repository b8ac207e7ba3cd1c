//! Hit points, block, stance and statuses shared by the player and enemies.

use super::{StatusEffect, StatusEffects, StatusInteraction, StatusKind};

/// Temporary combat posture of the player. Enemies always stay in `None`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, strum::Display, strum::EnumIter)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Stance {
    #[default]
    None,
    /// Damage ×1.5; enemy attacks ×1.25.
    Offensive,
    /// Block ×1.5; only half of the block decays at turn end.
    Defensive,
    /// Longer quiz time limit.
    Focused,
    /// Two random cards are discarded at turn end.
    Frenzy,
}

/// How an incoming hit was split between block and hit points.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DamageReport {
    pub absorbed: u32,
    pub hp_lost: u32,
}

/// Status ticks resolved at the start of an entity's turn.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TurnStartTicks {
    pub damage: u32,
    pub healed: u32,
}

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CombatEntity {
    hp: u32,
    max_hp: u32,
    block: u32,
    stance: Stance,
    statuses: StatusEffects,
}

impl CombatEntity {
    pub fn new(max_hp: u32) -> Self {
        Self {
            hp: max_hp,
            max_hp,
            block: 0,
            stance: Stance::None,
            statuses: StatusEffects::empty(),
        }
    }

    pub fn hp(&self) -> u32 {
        self.hp
    }

    pub fn max_hp(&self) -> u32 {
        self.max_hp
    }

    pub fn block(&self) -> u32 {
        self.block
    }

    pub fn stance(&self) -> Stance {
        self.stance
    }

    pub fn statuses(&self) -> &StatusEffects {
        &self.statuses
    }

    pub fn is_alive(&self) -> bool {
        self.hp > 0
    }

    /// Block absorbs first; the remainder comes off hit points.
    pub fn take_damage(&mut self, amount: u32) -> DamageReport {
        let absorbed = amount.min(self.block);
        self.block -= absorbed;
        let hp_lost = (amount - absorbed).min(self.hp);
        self.hp -= hp_lost;
        DamageReport { absorbed, hp_lost }
    }

    /// Heals up to max hp; returns the amount actually restored.
    pub fn heal(&mut self, amount: u32) -> u32 {
        let healed = amount.min(self.max_hp - self.hp);
        self.hp += healed;
        healed
    }

    /// Sets hit points directly, clamped to `0..=max_hp`.
    pub fn set_hp(&mut self, hp: u32) {
        self.hp = hp.min(self.max_hp);
    }

    pub fn add_block(&mut self, amount: u32) {
        self.block = self.block.saturating_add(amount);
    }

    /// Removes all block; returns how much was removed.
    pub fn strip_block(&mut self) -> u32 {
        core::mem::take(&mut self.block)
    }

    /// Changes stance; returns true when it actually changed.
    pub fn set_stance(&mut self, stance: Stance) -> bool {
        if self.stance == stance {
            return false;
        }
        self.stance = stance;
        true
    }

    pub fn apply_status(&mut self, kind: StatusKind, value: i32, duration: i32) {
        self.statuses.apply(kind, value, duration);
    }

    /// Resolves status interactions on this entity.
    ///
    /// Explosion damage is dealt here, through block.
    pub fn resolve_interactions(&mut self) -> Vec<StatusInteraction> {
        let fired = self.statuses.resolve_interactions();
        for interaction in &fired {
            if let StatusInteraction::Explosion { damage } = interaction {
                self.take_damage(*damage);
            }
        }
        fired
    }

    pub fn remove_status(&mut self, kind: StatusKind) -> Option<StatusEffect> {
        self.statuses.remove(kind)
    }

    /// Consumes Frozen; returns true when the entity must skip its action.
    pub fn consume_frozen(&mut self) -> bool {
        self.statuses.remove(StatusKind::Frozen).is_some()
    }

    /// Burn and poison damage, then regeneration.
    pub fn process_turn_start(&mut self) -> TurnStartTicks {
        let mut ticks = TurnStartTicks::default();
        for kind in [StatusKind::Burning, StatusKind::Poisoned] {
            let value = self.statuses.value(kind);
            if value > 0 {
                ticks.damage += self.take_damage(value as u32).hp_lost;
            }
        }
        let regen = self.statuses.value(StatusKind::Regeneration);
        if regen > 0 && self.is_alive() {
            ticks.healed = self.heal(regen as u32);
        }
        ticks
    }

    /// Ticks status durations and decays block (halved under Defensive).
    pub fn process_turn_end(&mut self) {
        self.statuses.tick_durations();
        self.block = match self.stance {
            Stance::Defensive => self.block / 2,
            _ => 0,
        };
    }
}

//! Combat state value types: cards, piles, entities, statuses and enemies.
mod card;
mod enemy;
mod entity;
mod piles;
mod status;

pub use card::{
    CardData, CardEffect, CardRef, CardType, Dimension, EffectClass, EffectKind, Element, WordId,
    WordInfo,
};
pub use enemy::{EnemyAction, EnemyData, EnemyId, EnemyInstance, EnemyIntent, EnemySpecial};
pub use entity::{CombatEntity, DamageReport, Stance, TurnStartTicks};
pub use piles::{PileKind, Piles};
pub use status::{StatusEffect, StatusEffects, StatusInteraction, StatusKind};

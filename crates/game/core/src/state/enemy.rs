//! Enemy definitions and their in-combat instances.

use std::collections::VecDeque;
use std::sync::Arc;

use super::{CardData, CombatEntity, Element, StatusKind};
use crate::error::SetupError;

/// Position of an enemy in the encounter, stable for the whole combat.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(transparent)
)]
pub struct EnemyId(pub u32);

impl core::fmt::Display for EnemyId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "enemy#{}", self.0)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::EnumIter)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum EnemyIntent {
    Attack,
    Defend,
    /// Gains Strength.
    Buff,
    /// Applies the action's status to the player.
    Debuff,
    AttackDebuff,
    Special,
}

impl EnemyIntent {
    pub const fn is_attack(self) -> bool {
        matches!(self, Self::Attack | Self::AttackDebuff)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EnemyAction {
    pub intent: EnemyIntent,
    pub value: i32,
    #[cfg_attr(feature = "serde", serde(default))]
    pub status: Option<StatusKind>,
    #[cfg_attr(feature = "serde", serde(default = "default_status_duration"))]
    pub status_duration: i32,
    #[cfg_attr(feature = "serde", serde(default = "default_weight"))]
    pub weight: u32,
}

#[cfg(feature = "serde")]
fn default_status_duration() -> i32 {
    2
}

#[cfg(feature = "serde")]
fn default_weight() -> u32 {
    1
}

impl EnemyAction {
    pub fn new(intent: EnemyIntent, value: i32, weight: u32) -> Self {
        Self {
            intent,
            value,
            status: None,
            status_duration: 2,
            weight,
        }
    }

    #[must_use]
    pub fn with_status(mut self, status: StatusKind, duration: i32) -> Self {
        self.status = Some(status);
        self.status_duration = duration;
        self
    }
}

/// Behaviour layered on top of the weighted action table.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum EnemySpecial {
    /// Shuffles a copy of `card` into the player's discard pile every
    /// `every_turns` enemy turns, starting with the first.
    InjectJunk { card: CardData, every_turns: u32 },
    /// Attack-class intents hit twice.
    DoubleStrike,
    /// Skips its first `turns` actions, gaining `growth` Strength each time.
    Sleeper { turns: u32, growth: i32 },
}

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EnemyData {
    pub id: String,
    pub name: String,
    pub max_hp: u32,
    #[cfg_attr(feature = "serde", serde(default))]
    pub element: Option<Element>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub weakness: Option<Element>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub resistance: Option<Element>,
    pub actions: Vec<EnemyAction>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub special: Option<EnemySpecial>,
}

impl EnemyData {
    pub fn new(id: impl Into<String>, max_hp: u32, actions: Vec<EnemyAction>) -> Self {
        let id = id.into();
        Self {
            name: id.clone(),
            id,
            max_hp,
            element: None,
            weakness: None,
            resistance: None,
            actions,
            special: None,
        }
    }

    #[must_use]
    pub fn with_weakness(mut self, element: Element) -> Self {
        self.weakness = Some(element);
        self
    }

    #[must_use]
    pub fn with_resistance(mut self, element: Element) -> Self {
        self.resistance = Some(element);
        self
    }

    #[must_use]
    pub fn with_special(mut self, special: EnemySpecial) -> Self {
        self.special = Some(special);
        self
    }

    pub fn total_weight(&self) -> u32 {
        self.actions.iter().map(|a| a.weight).sum()
    }

    pub fn validate(&self) -> Result<(), SetupError> {
        if self.max_hp == 0 {
            return Err(SetupError::EnemyWithoutHp(self.id.clone()));
        }
        if self.actions.is_empty() {
            return Err(SetupError::EnemyWithoutActions(self.id.clone()));
        }
        if self.total_weight() == 0 {
            return Err(SetupError::EnemyWithoutWeight(self.id.clone()));
        }
        Ok(())
    }
}

/// An enemy inside a running combat.
#[derive(Clone, Debug)]
pub struct EnemyInstance {
    id: EnemyId,
    data: Arc<EnemyData>,
    pub(crate) entity: CombatEntity,
    /// Upcoming action indices; the front is the current intent.
    intents: VecDeque<usize>,
    pub(crate) sleep_remaining: u32,
    pub(crate) turns_taken: u32,
}

impl EnemyInstance {
    pub fn new(id: EnemyId, data: Arc<EnemyData>) -> Self {
        let sleep_remaining = match data.special {
            Some(EnemySpecial::Sleeper { turns, .. }) => turns,
            _ => 0,
        };
        Self {
            id,
            entity: CombatEntity::new(data.max_hp),
            data,
            intents: VecDeque::new(),
            sleep_remaining,
            turns_taken: 0,
        }
    }

    pub fn id(&self) -> EnemyId {
        self.id
    }

    pub fn data(&self) -> &EnemyData {
        &self.data
    }

    pub fn entity(&self) -> &CombatEntity {
        &self.entity
    }

    pub fn is_alive(&self) -> bool {
        self.entity.is_alive()
    }

    pub fn is_asleep(&self) -> bool {
        self.sleep_remaining > 0
    }

    /// The action this enemy will take on its next turn.
    pub fn current_action(&self) -> Option<&EnemyAction> {
        self.intents.front().and_then(|&i| self.data.actions.get(i))
    }

    /// Current and previewed actions, in order.
    pub fn upcoming_actions(&self) -> impl Iterator<Item = &EnemyAction> {
        self.intents
            .iter()
            .filter_map(|&i| self.data.actions.get(i))
    }

    pub(crate) fn push_intent(&mut self, action_index: usize) {
        self.intents.push_back(action_index);
    }

    pub(crate) fn pop_intent(&mut self) -> Option<usize> {
        self.intents.pop_front()
    }

    pub(crate) fn queued_intents(&self) -> usize {
        self.intents.len()
    }
}

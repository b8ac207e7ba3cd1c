//! Card definitions. One card exists per vocabulary word.

use std::sync::Arc;

use super::StatusKind;

/// Stable identifier of a vocabulary word, and therefore of its card.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(transparent)
)]
pub struct WordId(pub String);

impl WordId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl core::fmt::Display for WordId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for WordId {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::EnumIter)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CardType {
    Attack,
    Skill,
    Power,
    Tactical,
}

/// Gameplay role of a card; drives chain bonuses and coverage rewards.
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
pub enum Dimension {
    Strike,
    Guard,
    Boost,
    Warp,
}

impl Dimension {
    pub const fn index(self) -> usize {
        self as usize
    }
}

/// Semantic element of the underlying word.
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
pub enum Element {
    Life,
    Force,
    Mind,
    Matter,
    Abstract,
}

impl Element {
    pub const fn index(self) -> usize {
        self as usize
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum EffectKind {
    /// Damage to the chosen (or first living) enemy.
    Damage,
    /// Damage to every living enemy.
    DamageAll,
    Block,
    Heal,
    DrawCard,
    GainEnergy,
    /// Positive kinds land on the player; negative kinds on the target.
    ApplyStatus(StatusKind),
    /// Marker: the card goes to the exhaust pile after play.
    Exhaust,
}

impl EffectKind {
    pub const fn class(self) -> EffectClass {
        match self {
            Self::Damage => EffectClass::Damage,
            Self::DamageAll => EffectClass::DamageAll,
            Self::Block => EffectClass::Block,
            Self::Heal => EffectClass::Heal,
            Self::DrawCard => EffectClass::DrawCard,
            Self::GainEnergy => EffectClass::GainEnergy,
            Self::ApplyStatus(_) => EffectClass::ApplyStatus,
            Self::Exhaust => EffectClass::Exhaust,
        }
    }

    pub const fn is_damage(self) -> bool {
        matches!(self, Self::Damage | Self::DamageAll)
    }
}

/// Payload-free view of [`EffectKind`], used by bonus whitelists.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::EnumIter)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum EffectClass {
    Damage,
    DamageAll,
    Block,
    Heal,
    DrawCard,
    GainEnergy,
    ApplyStatus,
    Exhaust,
}

impl EffectClass {
    /// Effects percentage bonuses scale when a whitelist is left empty.
    pub const DEFAULT_BONUS_TARGETS: [EffectClass; 4] =
        [Self::Damage, Self::DamageAll, Self::Block, Self::Heal];

    /// Whitelist test; an empty list means [`Self::DEFAULT_BONUS_TARGETS`].
    pub fn allowed_by(self, whitelist: &[EffectClass]) -> bool {
        if whitelist.is_empty() {
            Self::DEFAULT_BONUS_TARGETS.contains(&self)
        } else {
            whitelist.contains(&self)
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CardEffect {
    pub kind: EffectKind,
    pub value: i32,
    /// Turns a status lasts; ignored by other kinds.
    #[cfg_attr(feature = "serde", serde(default))]
    pub duration: i32,
}

impl CardEffect {
    pub const fn new(kind: EffectKind, value: i32) -> Self {
        Self {
            kind,
            value,
            duration: 0,
        }
    }

    pub const fn status(kind: StatusKind, value: i32, duration: i32) -> Self {
        Self {
            kind: EffectKind::ApplyStatus(kind),
            value,
            duration,
        }
    }
}

/// Word metadata attached to a card. Junk cards carry none.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WordInfo {
    pub english: String,
    pub element: Element,
}

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CardData {
    pub word_id: WordId,
    pub card_type: CardType,
    pub energy_cost: u32,
    pub dimension: Dimension,
    pub effects: Vec<CardEffect>,
    /// Resource tags this card produces after resolving.
    #[cfg_attr(feature = "serde", serde(default))]
    pub produces: Vec<String>,
    /// Resource tags this card consumes for a bonus before resolving.
    #[cfg_attr(feature = "serde", serde(default))]
    pub consumes: Vec<String>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub word: Option<WordInfo>,
}

/// Shared handle to an immutable card definition.
pub type CardRef = Arc<CardData>;

impl CardData {
    pub fn new(
        word_id: impl Into<String>,
        card_type: CardType,
        energy_cost: u32,
        dimension: Dimension,
    ) -> Self {
        Self {
            word_id: WordId::new(word_id),
            card_type,
            energy_cost,
            dimension,
            effects: Vec::new(),
            produces: Vec::new(),
            consumes: Vec::new(),
            word: None,
        }
    }

    #[must_use]
    pub fn with_effect(mut self, kind: EffectKind, value: i32) -> Self {
        self.effects.push(CardEffect::new(kind, value));
        self
    }

    #[must_use]
    pub fn with_status(mut self, kind: StatusKind, value: i32, duration: i32) -> Self {
        self.effects.push(CardEffect::status(kind, value, duration));
        self
    }

    #[must_use]
    pub fn with_word(mut self, english: impl Into<String>, element: Element) -> Self {
        self.word = Some(WordInfo {
            english: english.into(),
            element,
        });
        self
    }

    #[must_use]
    pub fn producing(mut self, tag: impl Into<String>) -> Self {
        self.produces.push(tag.into());
        self
    }

    #[must_use]
    pub fn consuming(mut self, tag: impl Into<String>) -> Self {
        self.consumes.push(tag.into());
        self
    }

    pub fn element(&self) -> Option<Element> {
        self.word.as_ref().map(|w| w.element)
    }

    /// Cards without word metadata (junk) never prompt a quiz.
    pub fn is_word_card(&self) -> bool {
        self.word.is_some()
    }

    pub fn exhausts(&self) -> bool {
        self.effects.iter().any(|e| e.kind == EffectKind::Exhaust)
    }

    pub fn has_effect(&self, class: EffectClass) -> bool {
        self.effects.iter().any(|e| e.kind.class() == class)
    }
}

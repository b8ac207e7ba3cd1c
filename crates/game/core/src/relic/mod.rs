//! Relic definitions and the hook registry that applies them in combat.
//!
//! A relic is an opaque id owned by the inventory. The content table maps an
//! id to at most one [`RelicEffectEntry`]; the [`RelicRegistry`] holds the
//! entries active for one combat together with their use latches.
mod registry;

pub use registry::{CorrectAnswerBonus, FlatBonus, RelicLatch, RelicRegistry, RelicTrigger};

use crate::state::Dimension;

#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(transparent)
)]
pub struct RelicId(pub String);

impl RelicId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl core::fmt::Display for RelicId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for RelicId {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumIter,
    strum::EnumCount,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum RelicEffectKind {
    /// The first card played in combat returns to hand (once per combat).
    ReturnFirstCard,
    /// Adds a rest-site option; inert in combat.
    RestSiteOption,
    /// Lethal damage leaves the player at `int_value` hp (once per combat).
    SurviveOnce,
    /// Reveals `int_value` upcoming enemy intents.
    PreviewEnemyActions,
    /// Block left after an enemy hit reflects `float_value` of itself.
    OverblockReflect,
    /// A wrong answer counts as correct with probability `float_value`.
    MistakeConvert,
    /// Adds `int_value` seconds to every quiz.
    QuizTimeBonus,
    /// Grants `int_value` block at combat start.
    StartBlock,
    /// The first Attack card of combat deals `int_value` more damage.
    FirstAttackBonus,
    DimensionBlockBonus,
    DimensionDamageBonus,
    /// Heals `int_value` on every correct answer.
    HealOnCorrect,
    /// The first card of `dimension` each turn costs `int_value` less.
    FirstDimensionCostReduction,
    /// Each end-of-turn discard deals `int_value` damage with probability `float_value`.
    DamageOnDiscard,
    /// Grants `int_value` block at the start of every player turn.
    BlockPerTurn,
    /// Quizzes reveal the first letter of the answer.
    QuizHintFirstLetter,
    /// Playing a `dimension` card draws `int_value` more (once per turn).
    DimensionDrawOncePerTurn,
    /// A correct answer strips the target's block with probability `float_value`.
    RemoveEnemyBlockOnCorrect,
}

impl RelicEffectKind {
    /// Kinds whose latch resets at the start of every player turn.
    pub const fn is_turn_scoped(self) -> bool {
        matches!(
            self,
            Self::FirstDimensionCostReduction | Self::BlockPerTurn | Self::DimensionDrawOncePerTurn
        )
    }

    /// Kinds whose latch holds for the whole combat.
    pub const fn is_combat_scoped(self) -> bool {
        matches!(
            self,
            Self::ReturnFirstCard | Self::SurviveOnce | Self::FirstAttackBonus
        )
    }
}

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RelicEffectEntry {
    pub id: RelicId,
    #[cfg_attr(feature = "serde", serde(alias = "type"))]
    pub kind: RelicEffectKind,
    /// Dimension gate; `None` matches every card.
    #[cfg_attr(feature = "serde", serde(default))]
    pub dimension: Option<Dimension>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub int_value: i32,
    #[cfg_attr(feature = "serde", serde(default))]
    pub float_value: f32,
    /// Fractional bonus on matching-dimension card values, independent of kind.
    #[cfg_attr(feature = "serde", serde(default))]
    pub lexicon_bonus: f32,
}

impl RelicEffectEntry {
    pub fn new(id: impl Into<String>, kind: RelicEffectKind) -> Self {
        Self {
            id: RelicId::new(id),
            kind,
            dimension: None,
            int_value: 0,
            float_value: 0.0,
            lexicon_bonus: 0.0,
        }
    }

    #[must_use]
    pub fn with_int(mut self, value: i32) -> Self {
        self.int_value = value;
        self
    }

    #[must_use]
    pub fn with_float(mut self, value: f32) -> Self {
        self.float_value = value;
        self
    }

    #[must_use]
    pub fn with_dimension(mut self, dimension: Dimension) -> Self {
        self.dimension = Some(dimension);
        self
    }

    #[must_use]
    pub fn with_lexicon_bonus(mut self, bonus: f32) -> Self {
        self.lexicon_bonus = bonus;
        self
    }

    pub fn matches_dimension(&self, dimension: Dimension) -> bool {
        self.dimension.is_none_or(|d| d == dimension)
    }

    /// `int_value` clamped to zero.
    pub fn amount(&self) -> u32 {
        self.int_value.max(0) as u32
    }
}

/// Quiz assistance surfaced on a quiz request.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct QuizAssist {
    pub extra_seconds: u32,
    pub first_letter_hint: bool,
}

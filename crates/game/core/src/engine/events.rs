//! Observation-only notifications emitted by a combat session.

use crate::relic::RelicTrigger;
use crate::state::{Element, EnemyId, Stance, StatusInteraction, WordId};
use crate::synergy::ResonanceEffect;

/// Lifecycle phase of a combat session.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, strum::Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CombatPhase {
    #[default]
    NotInCombat,
    PlayerTurn,
    /// Suspended on a quiz; only the matching answer can resume play.
    AnsweringQuiz,
    EnemyTurn,
    Victory,
    Defeat,
}

impl CombatPhase {
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Victory | Self::Defeat)
    }

    pub const fn is_active(self) -> bool {
        matches!(self, Self::PlayerTurn | Self::AnsweringQuiz | Self::EnemyTurn)
    }
}

/// One choice offered by a knowledge-resonance insight reward.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum InsightOption {
    Damage(u32),
    Block(u32),
    Draw(u32),
}

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CombatEvent {
    StateChanged(CombatPhase),
    TurnStarted {
        turn: u32,
    },
    TurnEnded {
        turn: u32,
    },
    CardDrawn {
        card: WordId,
    },
    CardPlayed {
        card: WordId,
    },
    /// A wrong answer voided the card; its energy is still spent.
    CardFizzled {
        card: WordId,
    },
    QuizRequested {
        card: WordId,
    },
    EnemyDamaged {
        enemy: EnemyId,
        amount: u32,
    },
    EnemyDefeated {
        enemy: EnemyId,
    },
    PlayerDamaged {
        amount: u32,
    },
    StanceChanged(Stance),
    StatusInteraction {
        enemy: EnemyId,
        interaction: StatusInteraction,
    },
    ResonanceTriggered {
        element: Element,
        tier: u8,
        effect: ResonanceEffect,
    },
    CoverageRewarded {
        draw: u32,
        energy: u32,
    },
    RelicTriggered(RelicTrigger),
    JunkInjected {
        enemy: EnemyId,
        card: WordId,
    },
    InsightRewardAvailable {
        options: Vec<InsightOption>,
    },
    CombatEnded {
        victory: bool,
    },
}

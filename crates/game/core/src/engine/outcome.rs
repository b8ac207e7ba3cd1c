//! Values returned by session operations.

use crate::config::GamePhase;
use crate::env::{ProficiencyLevel, QuizMode};
use crate::relic::QuizAssist;
use crate::state::{EnemyId, WordId};

/// Why a player action left the session untouched.
#[derive(Clone, Debug, PartialEq, Eq, Hash, strum::Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum RejectReason {
    /// The session is not in the phase this action needs.
    WrongPhase,
    NotInHand,
    InsufficientEnergy { cost: u32, available: u32 },
    /// The ticket does not belong to the pending quiz.
    StaleTicket,
}

/// Outcome of playing a card or answering its quiz.
#[derive(Debug)]
pub enum PlayOutcome {
    Resolved,
    /// The card fizzled after a wrong answer.
    Fizzled,
    /// The session is suspended until this ticket is answered.
    AwaitingQuiz(QuizTicket),
    Rejected(RejectReason),
}

impl PlayOutcome {
    pub fn is_rejected(&self) -> bool {
        matches!(self, Self::Rejected(_))
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TurnOutcome {
    /// Enemies acted and the next player turn began.
    NextTurn { turn: u32 },
    /// The combat ended during the turn transition.
    Ended { victory: bool },
    Rejected(RejectReason),
}

/// What the quiz presenter needs to show.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct QuizRequest {
    pub word_id: WordId,
    pub english: Option<String>,
    pub level: ProficiencyLevel,
    pub mode: QuizMode,
    pub game_phase: GamePhase,
    pub assist: QuizAssist,
}

/// Single-use handle for resuming a suspended card play.
///
/// Not `Clone`: a quiz can be answered exactly once.
#[derive(Debug, PartialEq, Eq)]
pub struct QuizTicket {
    pub(crate) id: u64,
    request: QuizRequest,
}

impl QuizTicket {
    pub(crate) fn new(id: u64, request: QuizRequest) -> Self {
        Self { id, request }
    }

    pub fn request(&self) -> &QuizRequest {
        &self.request
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct QuizAnswer {
    pub is_correct: bool,
    /// Answer quality in `0..=5`, forwarded to the learning store.
    pub quality: u8,
}

impl QuizAnswer {
    pub const MAX_QUALITY: u8 = 5;

    pub const fn correct(quality: u8) -> Self {
        Self {
            is_correct: true,
            quality,
        }
    }

    pub const fn incorrect(quality: u8) -> Self {
        Self {
            is_correct: false,
            quality,
        }
    }

    /// A timeout counts as a wrong answer of the lowest quality.
    pub const fn timed_out() -> Self {
        Self::incorrect(0)
    }
}

/// Report available once a combat has ended.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CombatSummary {
    pub victory: bool,
    pub turns: u32,
    pub cards_played: u32,
    pub correct_answers: u32,
    pub wrong_answers: u32,
    pub experience: u32,
    pub player_hp: u32,
}

/// Pending continuation of a suspended card play.
#[derive(Clone, Debug)]
pub(crate) struct PendingQuiz {
    pub ticket_id: u64,
    pub card: WordId,
    pub target: Option<EnemyId>,
    pub reserved_cost: u32,
    pub level: ProficiencyLevel,
    pub mode: QuizMode,
}

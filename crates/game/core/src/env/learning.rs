//! Learning-progress oracle and the proficiency tables combat reads from it.

use crate::state::WordId;

/// How well the learner knows a word. Ordered from weakest to strongest.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
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
pub enum ProficiencyLevel {
    Locked,
    #[default]
    New,
    Known,
    Familiar,
    Remembered,
    Proficient,
    Mastered,
    Internalized,
}

impl ProficiencyLevel {
    /// Multiplier applied to card effects after a correct answer (or no quiz).
    pub const fn effect_multiplier(self) -> f32 {
        match self {
            Self::Locked | Self::New | Self::Known => 1.0,
            Self::Familiar | Self::Remembered => 1.1,
            Self::Proficient | Self::Mastered => 1.2,
            Self::Internalized => 1.3,
        }
    }

    /// Probability that playing a card of this word requires a quiz.
    pub const fn quiz_chance(self) -> f32 {
        match self {
            Self::Locked | Self::New => 1.0,
            Self::Known => 0.8,
            Self::Familiar => 0.6,
            Self::Remembered => 0.4,
            Self::Proficient => 0.2,
            Self::Mastered => 0.1,
            Self::Internalized => 0.0,
        }
    }

    /// Picks the quiz format for this level; `roll` is uniform in `[0, 1)`.
    pub fn quiz_mode(self, roll: f32) -> QuizMode {
        match self {
            Self::Known => QuizMode::RecognitionMedium,
            Self::Familiar if roll > 0.2 => QuizMode::RecognitionMedium,
            Self::Familiar => QuizMode::ListeningEasy,
            Self::Remembered if roll > 0.5 => QuizMode::ListeningEasy,
            Self::Remembered => QuizMode::ListeningMedium,
            Self::Proficient if roll > 0.1 => QuizMode::ListeningMedium,
            Self::Proficient => QuizMode::SpellingEasy,
            Self::Mastered if roll > 0.3 => QuizMode::SpellingEasy,
            Self::Mastered => QuizMode::SpellingMedium,
            Self::Locked | Self::New | Self::Internalized => QuizMode::RecognitionEasy,
        }
    }
}

/// Family a quiz mode belongs to; determines experience and pacing.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum QuizFamily {
    Recognition,
    Listening,
    Spelling,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::EnumIter)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum QuizMode {
    RecognitionEasy,
    RecognitionMedium,
    RecognitionHard,
    ListeningEasy,
    ListeningMedium,
    ListeningHard,
    SpellingEasy,
    SpellingMedium,
    SpellingHard,
}

impl QuizMode {
    pub const fn family(self) -> QuizFamily {
        match self {
            Self::RecognitionEasy | Self::RecognitionMedium | Self::RecognitionHard => {
                QuizFamily::Recognition
            }
            Self::ListeningEasy | Self::ListeningMedium | Self::ListeningHard => {
                QuizFamily::Listening
            }
            Self::SpellingEasy | Self::SpellingMedium | Self::SpellingHard => QuizFamily::Spelling,
        }
    }

    /// Experience awarded for a correct answer in this mode.
    pub const fn experience(self) -> u32 {
        match self.family() {
            QuizFamily::Recognition => 1,
            QuizFamily::Listening => 2,
            QuizFamily::Spelling => 3,
        }
    }

    /// Answer time limit in seconds before phase scaling and assists.
    pub const fn base_seconds(self) -> u32 {
        match self {
            Self::RecognitionEasy | Self::RecognitionMedium => 5,
            Self::RecognitionHard | Self::ListeningEasy | Self::ListeningMedium => 6,
            Self::ListeningHard => 7,
            Self::SpellingEasy => 8,
            Self::SpellingMedium => 10,
            Self::SpellingHard => 12,
        }
    }
}

/// Learning-progress collaborator.
///
/// The store owns proficiency records and their scheduling; combat only reads
/// levels and reports answers. Methods take `&self`, so implementations use
/// interior mutability.
pub trait LearningOracle: Send + Sync {
    /// Returns the current level for `word`, or `None` when no record exists.
    fn level(&self, word: &WordId) -> Option<ProficiencyLevel>;

    /// Creates a record at `default_level` when none exists; returns the level.
    fn ensure_progress(&self, word: &WordId, default_level: ProficiencyLevel)
    -> ProficiencyLevel;

    /// Records a quiz answer. `quality` is in `0..=5`.
    fn update_progress(&self, word: &WordId, is_correct: bool, quality: u8);

    /// Aggregate answer notification (session statistics, streaks).
    fn on_answer_result(&self, _is_correct: bool) {}

    fn effect_multiplier(&self, level: ProficiencyLevel) -> f32 {
        level.effect_multiplier()
    }

    fn quiz_chance(&self, level: ProficiencyLevel) -> f32 {
        level.quiz_chance()
    }

    fn quiz_mode(&self, level: ProficiencyLevel, roll: f32) -> QuizMode {
        level.quiz_mode(roll)
    }
}

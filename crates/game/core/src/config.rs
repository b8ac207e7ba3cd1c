/// Progression band of the learner, derived from days played.
///
/// The band softens wrong-answer penalties and stretches quiz time limits.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, strum::Display, strum::EnumIter,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum GamePhase {
    Tutorial,
    Beginner,
    #[default]
    Normal,
}

impl GamePhase {
    pub const TUTORIAL_MAX_DAYS: u32 = 2;
    pub const BEGINNER_MAX_DAYS: u32 = 4;

    /// Classifies a learner by the number of days they have played.
    pub const fn from_days_played(days: u32) -> Self {
        if days <= Self::TUTORIAL_MAX_DAYS {
            Self::Tutorial
        } else if days <= Self::BEGINNER_MAX_DAYS {
            Self::Beginner
        } else {
            Self::Normal
        }
    }
}

/// Combat configuration constants and tunable parameters.
///
/// Tunables are read once from the content oracle at combat start.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct CombatConfig {
    pub player_max_hp: u32,
    /// Energy granted at the start of every player turn.
    pub max_energy: u32,
    /// Cards drawn at the start of every player turn.
    pub hand_size: u32,
    pub game_phase: GamePhase,
}

impl CombatConfig {
    // ===== compile-time constants used as type parameters =====
    pub const MAX_STATUS_EFFECTS: usize = 10;
    pub const MAX_ENEMIES: usize = 8;

    // ===== stance triggers =====
    pub const OFFENSIVE_ATTACK_STREAK: u32 = 3;
    pub const DEFENSIVE_SKILL_STREAK: u32 = 2;
    pub const FRENZY_CARDS_PER_TURN: u32 = 5;
    pub const FOCUSED_CORRECT_ANSWERS: u32 = 3;

    // ===== stance effects =====
    pub const STANCE_MULTIPLIER: f32 = 1.5;
    pub const OFFENSIVE_ENEMY_ATTACK_MULTIPLIER: f32 = 1.25;
    pub const FRENZY_RANDOM_DISCARDS: usize = 2;
    pub const FOCUSED_EXTRA_QUIZ_SECONDS: u32 = 5;

    // ===== element matchup =====
    pub const WEAKNESS_MULTIPLIER: f32 = 1.5;
    pub const RESISTANCE_MULTIPLIER: f32 = 0.5;

    // ===== status interactions =====
    pub const EXPLOSION_DAMAGE: u32 = 20;
    pub const FESTER_MULTIPLIER: f32 = 1.5;
    /// Duration used for effectively permanent statuses such as Strength.
    pub const PERMANENT_DURATION: i32 = 999;

    // ===== runtime-tunable defaults =====
    pub const DEFAULT_PLAYER_MAX_HP: u32 = 80;
    pub const DEFAULT_MAX_ENERGY: u32 = 3;
    pub const DEFAULT_HAND_SIZE: u32 = 5;

    pub fn new() -> Self {
        Self {
            player_max_hp: Self::DEFAULT_PLAYER_MAX_HP,
            max_energy: Self::DEFAULT_MAX_ENERGY,
            hand_size: Self::DEFAULT_HAND_SIZE,
            game_phase: GamePhase::default(),
        }
    }

    #[must_use]
    pub fn with_game_phase(mut self, game_phase: GamePhase) -> Self {
        self.game_phase = game_phase;
        self
    }
}

impl Default for CombatConfig {
    fn default() -> Self {
        Self::new()
    }
}

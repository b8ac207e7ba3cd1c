//! Common error infrastructure for lexicon-core.
//!
//! Gameplay rejections (unaffordable card, wrong phase, stale quiz ticket) are
//! ordinary outcomes and live in [`crate::engine::RejectReason`]. The types
//! here cover misconfiguration that prevents a combat from starting at all.

/// Severity level of an error, used for categorization and recovery strategies.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ErrorSeverity {
    /// Temporary condition; the same request may succeed later.
    Recoverable,

    /// Invalid input that should not be retried without changes.
    Validation,

    /// Unexpected state inconsistency. These indicate bugs.
    Internal,

    /// Content or wiring is broken; the combat cannot run.
    Fatal,
}

impl ErrorSeverity {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Recoverable => "recoverable",
            Self::Validation => "validation",
            Self::Internal => "internal",
            Self::Fatal => "fatal",
        }
    }

    pub const fn is_recoverable(&self) -> bool {
        matches!(self, Self::Recoverable)
    }

    pub const fn is_internal(&self) -> bool {
        matches!(self, Self::Internal | Self::Fatal)
    }
}

/// Common trait for all lexicon-core errors.
pub trait GameError: core::fmt::Display + core::fmt::Debug {
    fn severity(&self) -> ErrorSeverity;

    /// Static identifier for this error variant, used in logs and tests.
    fn error_code(&self) -> &'static str {
        core::any::type_name::<Self>()
    }
}

/// Reasons a combat refuses to start.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum SetupError {
    #[error("a combat is already in progress")]
    AlreadyInCombat,

    #[error("combat requires at least one enemy")]
    NoEnemies,

    #[error("combat supports at most {max} enemies, got {count}")]
    TooManyEnemies { count: usize, max: usize },

    #[error("the card pool is empty")]
    EmptyCardPool,

    #[error("card pool contains word `{0}` more than once")]
    DuplicateCard(String),

    #[error("enemy `{0}` has zero max hp")]
    EnemyWithoutHp(String),

    #[error("enemy `{0}` has no actions")]
    EnemyWithoutActions(String),

    #[error("enemy `{0}` has zero total action weight")]
    EnemyWithoutWeight(String),
}

impl GameError for SetupError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::AlreadyInCombat => ErrorSeverity::Recoverable,
            Self::NoEnemies | Self::TooManyEnemies { .. } => ErrorSeverity::Validation,
            Self::EmptyCardPool
            | Self::DuplicateCard(_)
            | Self::EnemyWithoutHp(_)
            | Self::EnemyWithoutActions(_)
            | Self::EnemyWithoutWeight(_) => ErrorSeverity::Fatal,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::AlreadyInCombat => "SETUP_ALREADY_IN_COMBAT",
            Self::NoEnemies => "SETUP_NO_ENEMIES",
            Self::TooManyEnemies { .. } => "SETUP_TOO_MANY_ENEMIES",
            Self::EmptyCardPool => "SETUP_EMPTY_CARD_POOL",
            Self::DuplicateCard(_) => "SETUP_DUPLICATE_CARD",
            Self::EnemyWithoutHp(_) => "SETUP_ENEMY_WITHOUT_HP",
            Self::EnemyWithoutActions(_) => "SETUP_ENEMY_WITHOUT_ACTIONS",
            Self::EnemyWithoutWeight(_) => "SETUP_ENEMY_WITHOUT_WEIGHT",
        }
    }
}

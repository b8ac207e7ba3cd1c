//! Deterministic combat rules for the vocabulary card battler.
//!
//! `lexicon-core` defines the canonical rules (cards, piles, statuses, synergy
//! bonuses, relic hooks, enemy intents) and exposes a synchronous state
//! machine, [`engine::CombatSession`], that both the async runtime and offline
//! tools drive. The core never performs I/O: learning progress, content and
//! relic ownership arrive through the oracle traits bundled in
//! [`env::CombatEnv`], and every random roll goes through an
//! [`env::RngOracle`] so whole combats replay from a seed.
pub mod ai;
pub mod combat;
pub mod config;
pub mod engine;
pub mod env;
pub mod error;
pub mod relic;
pub mod state;
pub mod synergy;

pub use combat::{CardModifiers, EffectValue, PipelineStage, PlayStreaks};
pub use config::{CombatConfig, GamePhase};
pub use engine::{
    CombatEvent, CombatPhase, CombatSession, CombatSummary, InsightOption, PlayOutcome,
    QuizAnswer, QuizAssist, QuizRequest, QuizTicket, RejectReason, TurnOutcome,
};
pub use env::{
    CombatEnv, ContentOracle, Dice, InventoryOracle, LearningOracle, PcgRng, ProficiencyLevel,
    QuizFamily, QuizMode, RngOracle, RngState, SequenceRng,
};
pub use error::{ErrorSeverity, GameError, SetupError};
pub use relic::{RelicEffectEntry, RelicEffectKind, RelicId, RelicRegistry};
pub use state::{
    CardData, CardEffect, CardRef, CardType, CombatEntity, DamageReport, Dimension, EffectClass,
    EffectKind, Element, EnemyAction, EnemyData, EnemyId, EnemyInstance, EnemyIntent,
    EnemySpecial, Piles, Stance, StatusEffect, StatusEffects, StatusInteraction, StatusKind,
    WordId, WordInfo,
};
pub use synergy::{
    DimensionChainConfig, ElementResonanceConfig, KnowledgeResonanceConfig,
    ResourceMediatorConfig, SynergyConfig, SynergyState, TierPair,
};

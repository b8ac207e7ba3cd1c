//! Runtime adapters for the combat collaborators.
//!
//! These implementations expose `lexicon-core` oracle traits and bundle them
//! into an [`OracleManager`] so the driver can build a [`CombatEnv`] for
//! every session call. Content is immutable at runtime; learning progress
//! lives behind the learning adapter's own lock.
mod inventory;
mod learning;

use std::sync::Arc;

use lexicon_content::ContentBundle;
use lexicon_core::{CombatEnv, PcgRng};

pub use inventory::StaticInventory;
pub use learning::{InMemoryLearning, WordProgress};

/// Manages all oracle implementations and provides unified access
#[derive(Clone)]
pub struct OracleManager {
    pub(crate) content: Arc<ContentBundle>,
    pub(crate) learning: Arc<InMemoryLearning>,
    pub(crate) inventory: Arc<StaticInventory>,
    pub(crate) rng: PcgRng,
}

impl OracleManager {
    /// Creates a new oracle manager
    pub fn new(
        content: Arc<ContentBundle>,
        learning: Arc<InMemoryLearning>,
        inventory: Arc<StaticInventory>,
    ) -> Self {
        Self {
            content,
            learning,
            inventory,
            rng: PcgRng, // PcgRng is stateless
        }
    }

    /// Borrows every collaborator as a [`CombatEnv`] for lexicon-core
    pub fn as_env(&self) -> CombatEnv<'_> {
        CombatEnv::new(
            self.content.as_ref(),
            self.learning.as_ref(),
            self.inventory.as_ref(),
            &self.rng,
        )
    }

    pub fn content(&self) -> &ContentBundle {
        &self.content
    }

    pub fn learning(&self) -> &InMemoryLearning {
        &self.learning
    }
}

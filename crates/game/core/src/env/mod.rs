//! Traits describing read-only (or externally owned) data required by the
//! combat engine.
//!
//! Collaborators are grouped into a [`CombatEnv`] that is passed to every
//! session call instead of being stored, so the session stays a plain value
//! and the caller decides how the collaborators are shared.
mod content;
mod inventory;
mod learning;
mod rng;

pub use content::ContentOracle;
pub use inventory::InventoryOracle;
pub use learning::{LearningOracle, ProficiencyLevel, QuizFamily, QuizMode};
pub use rng::{Dice, PcgRng, RngOracle, RngState, SequenceRng, compute_seed};

/// Aggregates the collaborators a combat session consults.
#[derive(Clone, Copy)]
pub struct CombatEnv<'a> {
    content: &'a dyn ContentOracle,
    learning: &'a dyn LearningOracle,
    inventory: &'a dyn InventoryOracle,
    rng: &'a dyn RngOracle,
}

impl<'a> CombatEnv<'a> {
    pub fn new(
        content: &'a dyn ContentOracle,
        learning: &'a dyn LearningOracle,
        inventory: &'a dyn InventoryOracle,
        rng: &'a dyn RngOracle,
    ) -> Self {
        Self {
            content,
            learning,
            inventory,
            rng,
        }
    }

    pub fn content(&self) -> &'a dyn ContentOracle {
        self.content
    }

    pub fn learning(&self) -> &'a dyn LearningOracle {
        self.learning
    }

    pub fn inventory(&self) -> &'a dyn InventoryOracle {
        self.inventory
    }

    pub fn rng(&self) -> &'a dyn RngOracle {
        self.rng
    }
}

impl core::fmt::Debug for CombatEnv<'_> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("CombatEnv").finish_non_exhaustive()
    }
}

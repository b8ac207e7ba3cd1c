//! Combat math: the effect value pipeline, stance streaks and answer penalties.
pub mod penalty;
pub mod pipeline;
mod streaks;

pub use penalty::wrong_answer_multiplier;
pub use pipeline::{
    CardModifiers, EffectValue, PipelineStage, compute, damage_all_hit, element_modifier,
    round_value,
};
pub use streaks::PlayStreaks;

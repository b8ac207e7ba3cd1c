use crate::config::GamePhase;
use crate::env::ProficiencyLevel;

/// Effect multiplier for a card resolved after a wrong answer.
///
/// Early phases are lenient. In the normal phase the penalty softens as the
/// word is better known; zero means the card fizzles.
pub fn wrong_answer_multiplier(phase: GamePhase, level: ProficiencyLevel) -> f32 {
    match phase {
        GamePhase::Tutorial => 1.0,
        GamePhase::Beginner => 0.7,
        GamePhase::Normal => match level {
            ProficiencyLevel::New => 0.0,
            ProficiencyLevel::Known => 0.5,
            ProficiencyLevel::Familiar => 0.7,
            _ => 0.8,
        },
    }
}

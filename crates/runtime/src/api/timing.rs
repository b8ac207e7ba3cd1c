//! Answer time limits for quiz requests.

use std::time::Duration;

use lexicon_core::{GamePhase, QuizRequest};

/// Time the learner gets to answer `request`.
///
/// The mode's base time is stretched for early learners, then assist seconds
/// from stance and relics are added on top.
pub fn quiz_time_limit(request: &QuizRequest) -> Duration {
    let base = request.mode.base_seconds() as f32;
    let scaled = match request.game_phase {
        GamePhase::Tutorial => base * 2.0,
        GamePhase::Beginner => base * 1.5,
        GamePhase::Normal => base,
    };
    Duration::from_secs_f32(scaled + request.assist.extra_seconds as f32)
}

#[cfg(test)]
mod tests {
    use lexicon_core::{ProficiencyLevel, QuizAssist, QuizMode, WordId};

    use super::*;

    fn request(mode: QuizMode, game_phase: GamePhase, extra_seconds: u32) -> QuizRequest {
        QuizRequest {
            word_id: WordId::new("ember"),
            english: Some("ember".into()),
            level: ProficiencyLevel::New,
            mode,
            game_phase,
            assist: QuizAssist {
                extra_seconds,
                first_letter_hint: false,
            },
        }
    }

    #[test]
    fn early_phases_stretch_the_limit() {
        let mode = QuizMode::RecognitionEasy;
        assert_eq!(
            quiz_time_limit(&request(mode, GamePhase::Normal, 0)),
            Duration::from_secs(5)
        );
        assert_eq!(
            quiz_time_limit(&request(mode, GamePhase::Beginner, 0)),
            Duration::from_millis(7500)
        );
        assert_eq!(
            quiz_time_limit(&request(mode, GamePhase::Tutorial, 0)),
            Duration::from_secs(10)
        );
    }

    #[test]
    fn assist_seconds_are_not_scaled() {
        let limit = quiz_time_limit(&request(QuizMode::SpellingHard, GamePhase::Tutorial, 5));
        assert_eq!(limit, Duration::from_secs(29));
    }
}

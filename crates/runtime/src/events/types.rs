use std::time::Duration;

use serde::{Deserialize, Serialize};

use lexicon_core::{QuizAnswer, QuizRequest, WordId};

/// Quiz lifecycle as seen by the driver.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum QuizEvent {
    /// A quiz was handed to the provider.
    Presented {
        request: QuizRequest,
        limit: Duration,
    },
    Answered {
        word: WordId,
        answer: QuizAnswer,
    },
    /// The provider did not answer within the limit.
    TimedOut { word: WordId },
}

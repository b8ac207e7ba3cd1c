//! Simulated learner answering quizzes at a fixed accuracy.
use std::sync::Mutex;
use std::time::Duration;

use async_trait::async_trait;
use lexicon_core::{QuizAnswer, QuizRequest};
use lexicon_runtime::{QuizProvider, Result};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

pub struct SimulatedLearner {
    accuracy: f64,
    rng: Mutex<StdRng>,
}

impl SimulatedLearner {
    pub fn new(accuracy: f64, seed: u64) -> Self {
        Self {
            accuracy: accuracy.clamp(0.0, 1.0),
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
        }
    }
}

#[async_trait]
impl QuizProvider for SimulatedLearner {
    async fn answer(&self, request: &QuizRequest, _limit: Duration) -> Result<QuizAnswer> {
        let Ok(mut rng) = self.rng.lock() else {
            return Ok(QuizAnswer::timed_out());
        };
        // A first-letter hint makes recall a little easier.
        let accuracy = if request.assist.first_letter_hint {
            (self.accuracy + 0.1).min(1.0)
        } else {
            self.accuracy
        };
        let answer = if rng.gen_bool(accuracy) {
            QuizAnswer::correct(rng.gen_range(3..=QuizAnswer::MAX_QUALITY))
        } else {
            QuizAnswer::incorrect(rng.gen_range(0..=2))
        };
        Ok(answer)
    }
}

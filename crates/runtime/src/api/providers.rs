//! Asynchronous abstraction for answering quizzes.
//!
//! Runtime users plug in [`QuizProvider`] implementations so combat can run
//! with a human presenter, scripted fixtures, or simulated learners.
use std::collections::VecDeque;
use std::sync::Mutex;
use std::time::Duration;

use async_trait::async_trait;
use lexicon_core::{QuizAnswer, QuizRequest};

use super::errors::Result;

/// Source of answers for suspended card plays.
///
/// Different implementations can handle:
/// - Interactive presenters (UI/CLI)
/// - Simulated learners
/// - Scripted/replayed answers
/// - Testing fixtures
///
/// The driver races the returned future against `limit`; a provider that
/// does not answer in time is treated as a timeout.
#[async_trait]
pub trait QuizProvider: Send + Sync {
    async fn answer(&self, request: &QuizRequest, limit: Duration) -> Result<QuizAnswer>;
}

/// Answers every quiz correctly with a fixed quality.
pub struct AlwaysCorrectProvider {
    quality: u8,
}

impl AlwaysCorrectProvider {
    pub fn new(quality: u8) -> Self {
        Self {
            quality: quality.min(QuizAnswer::MAX_QUALITY),
        }
    }
}

impl Default for AlwaysCorrectProvider {
    fn default() -> Self {
        Self::new(QuizAnswer::MAX_QUALITY)
    }
}

#[async_trait]
impl QuizProvider for AlwaysCorrectProvider {
    async fn answer(&self, _request: &QuizRequest, _limit: Duration) -> Result<QuizAnswer> {
        Ok(QuizAnswer::correct(self.quality))
    }
}

/// Replays a fixed list of answers in order.
///
/// Once the script runs out every further quiz is answered incorrectly.
pub struct ScriptedQuizProvider {
    answers: Mutex<VecDeque<QuizAnswer>>,
}

impl ScriptedQuizProvider {
    pub fn new(answers: impl IntoIterator<Item = QuizAnswer>) -> Self {
        Self {
            answers: Mutex::new(answers.into_iter().collect()),
        }
    }

    pub fn remaining(&self) -> usize {
        self.answers.lock().map_or(0, |answers| answers.len())
    }
}

#[async_trait]
impl QuizProvider for ScriptedQuizProvider {
    async fn answer(&self, _request: &QuizRequest, _limit: Duration) -> Result<QuizAnswer> {
        let next = self
            .answers
            .lock()
            .ok()
            .and_then(|mut answers| answers.pop_front());
        Ok(next.unwrap_or(QuizAnswer::incorrect(0)))
    }
}

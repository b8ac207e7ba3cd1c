//! Async combat driver.
//!
//! The driver owns one [`CombatSession`] and its collaborators, awaits the
//! quiz provider whenever the session suspends on a quiz, and republishes
//! every combat event on the [`EventBus`].

use std::time::Duration;

use tokio::sync::broadcast;
use tracing::{debug, info, warn};

use lexicon_core::{
    CombatSession, EnemyData, EnemyId, PlayOutcome, QuizAnswer, QuizRequest, QuizTicket,
    TurnOutcome, WordId,
};

use crate::api::{QuizProvider, Result, RuntimeError, quiz_time_limit};
use crate::events::{Event, EventBus, QuizEvent, Topic};
use crate::oracle::OracleManager;

/// Driver configuration.
#[derive(Debug, Clone)]
pub struct DriverConfig {
    /// Seed for every combat roll.
    pub seed: u64,
    pub event_buffer_size: usize,
}

impl Default for DriverConfig {
    fn default() -> Self {
        Self {
            seed: 0,
            event_buffer_size: 256,
        }
    }
}

/// Drives a single combat session.
pub struct CombatDriver {
    session: CombatSession,
    oracles: OracleManager,
    quiz: Box<dyn QuizProvider>,
    event_bus: EventBus,
}

impl CombatDriver {
    /// Create a new driver builder
    pub fn builder() -> DriverBuilder {
        DriverBuilder::new()
    }

    /// Starts a combat against `enemies`.
    pub fn start(&mut self, enemies: &[EnemyData]) -> Result<()> {
        let env = self.oracles.as_env();
        let result = self.session.start_combat(&env, enemies);
        self.publish_pending();
        result.map_err(RuntimeError::from)
    }

    /// Starts a combat against a named encounter from the content bundle.
    pub fn start_encounter(&mut self, name: &str) -> Result<()> {
        let enemies = self
            .oracles
            .content()
            .encounter(name)
            .ok_or_else(|| RuntimeError::UnknownEncounter {
                name: name.to_string(),
            })?;
        info!(target: "lexicon::runtime", encounter = name, "starting encounter");
        self.start(&enemies)
    }

    /// Plays a card, answering its quiz through the provider when one is
    /// required.
    ///
    /// Rejections come back as [`PlayOutcome::Rejected`]; errors are reserved
    /// for provider failures.
    pub async fn play_card(
        &mut self,
        word: &WordId,
        target: Option<EnemyId>,
    ) -> Result<PlayOutcome> {
        let outcome = {
            let env = self.oracles.as_env();
            self.session.try_play_card(&env, word, target)
        };
        self.publish_pending();

        match outcome {
            PlayOutcome::AwaitingQuiz(ticket) => self.run_quiz(ticket).await,
            other => Ok(other),
        }
    }

    /// Ends the player's turn; enemies act before this returns.
    pub fn end_turn(&mut self) -> TurnOutcome {
        let outcome = {
            let env = self.oracles.as_env();
            self.session.end_player_turn(&env)
        };
        self.publish_pending();
        outcome
    }

    /// Subscribe to events from a specific topic
    pub fn subscribe(&self, topic: Topic) -> broadcast::Receiver<Event> {
        self.event_bus.subscribe(topic)
    }

    /// Read-only view of the running session.
    pub fn session(&self) -> &CombatSession {
        &self.session
    }

    pub fn oracles(&self) -> &OracleManager {
        &self.oracles
    }

    /// Get a reference to the event bus for advanced usage
    pub fn event_bus(&self) -> &EventBus {
        &self.event_bus
    }

    async fn run_quiz(&mut self, ticket: QuizTicket) -> Result<PlayOutcome> {
        let request = ticket.request().clone();
        let limit = quiz_time_limit(&request);
        self.event_bus.publish(Event::Quiz(QuizEvent::Presented {
            request: request.clone(),
            limit,
        }));

        let answer = match self.await_answer(&request, limit).await {
            Ok(Some(answer)) => answer,
            Ok(None) => {
                self.event_bus.publish(Event::Quiz(QuizEvent::TimedOut {
                    word: request.word_id.clone(),
                }));
                QuizAnswer::timed_out()
            }
            Err(error) => {
                warn!(
                    target: "lexicon::runtime",
                    %error,
                    "quiz provider failed, answering as timed out"
                );
                self.settle(ticket, QuizAnswer::timed_out());
                return Err(error);
            }
        };

        self.event_bus.publish(Event::Quiz(QuizEvent::Answered {
            word: request.word_id.clone(),
            answer,
        }));
        Ok(self.settle(ticket, answer))
    }

    /// `Ok(None)` when the provider missed the limit.
    async fn await_answer(
        &self,
        request: &QuizRequest,
        limit: Duration,
    ) -> Result<Option<QuizAnswer>> {
        match tokio::time::timeout(limit, self.quiz.answer(request, limit)).await {
            Ok(answer) => answer.map(Some),
            Err(_) => {
                debug!(
                    target: "lexicon::runtime",
                    word = %request.word_id,
                    limit_ms = limit.as_millis() as u64,
                    "quiz timed out"
                );
                Ok(None)
            }
        }
    }

    fn settle(&mut self, ticket: QuizTicket, answer: QuizAnswer) -> PlayOutcome {
        let outcome = {
            let env = self.oracles.as_env();
            self.session.answer_quiz(&env, ticket, answer)
        };
        self.publish_pending();
        outcome
    }

    fn publish_pending(&mut self) {
        for event in self.session.drain_events() {
            self.event_bus.publish(Event::Combat(event));
        }
    }
}

/// Builder for [`CombatDriver`].
pub struct DriverBuilder {
    config: DriverConfig,
    oracles: Option<OracleManager>,
    quiz: Option<Box<dyn QuizProvider>>,
}

impl DriverBuilder {
    fn new() -> Self {
        Self {
            config: DriverConfig::default(),
            oracles: None,
            quiz: None,
        }
    }

    /// Override driver configuration
    pub fn config(mut self, config: DriverConfig) -> Self {
        self.config = config;
        self
    }

    pub fn seed(mut self, seed: u64) -> Self {
        self.config.seed = seed;
        self
    }

    /// Set required oracle manager
    pub fn oracles(mut self, oracles: OracleManager) -> Self {
        self.oracles = Some(oracles);
        self
    }

    /// Set required quiz provider
    pub fn quiz_provider(mut self, provider: impl QuizProvider + 'static) -> Self {
        self.quiz = Some(Box::new(provider));
        self
    }

    pub fn build(self) -> Result<CombatDriver> {
        let oracles = self.oracles.ok_or(RuntimeError::MissingOracles)?;
        let quiz = self.quiz.ok_or(RuntimeError::MissingQuizProvider)?;
        Ok(CombatDriver {
            session: CombatSession::new(self.config.seed),
            oracles,
            quiz,
            event_bus: EventBus::with_capacity(self.config.event_buffer_size),
        })
    }
}

//! Async orchestration around the synchronous combat core.
//!
//! The core suspends a card play on a quiz and hands out a ticket; this crate
//! awaits the quiz collaborator at that point, enforces the answer time limit
//! and resumes the session. Consumers embed [`CombatDriver`] and observe the
//! combat through topic subscriptions on the [`EventBus`].
//!
//! Modules are organized by responsibility:
//! - [`driver`] hosts the combat driver and its builder
//! - [`api`] exposes the types downstream clients interact with
//! - [`events`] provides the topic-based event bus
//! - [`oracle`] provides in-memory collaborator adapters
pub mod api;
pub mod driver;
pub mod events;
pub mod oracle;

pub use api::{
    AlwaysCorrectProvider, QuizProvider, Result, RuntimeError, ScriptedQuizProvider,
    quiz_time_limit,
};
pub use driver::{CombatDriver, DriverBuilder, DriverConfig};
pub use events::{Event, EventBus, QuizEvent, Topic};
pub use oracle::{InMemoryLearning, OracleManager, StaticInventory, WordProgress};

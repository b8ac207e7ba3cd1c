//! Unified error types surfaced by the runtime API.
//!
//! Wraps combat setup failures, content problems and quiz collaborator
//! failures so clients can bubble them up with consistent context.
use lexicon_core::SetupError;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, RuntimeError>;

#[derive(Debug, Error)]
pub enum RuntimeError {
    #[error("combat setup failed")]
    Setup(#[from] SetupError),

    #[error("failed to load combat content")]
    Content(#[source] anyhow::Error),

    #[error("unknown encounter '{name}'")]
    UnknownEncounter { name: String },

    #[error("quiz provider failed: {0}")]
    QuizProvider(String),

    #[error("driver requires oracles to be configured before building")]
    MissingOracles,

    #[error("driver requires a quiz provider to be configured before building")]
    MissingQuizProvider,
}

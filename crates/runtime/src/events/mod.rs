//! Topic-based event bus for runtime events.
//!
//! Combat events drained from the session are republished here, together with
//! runtime-level quiz events, so consumers can subscribe only to the topics
//! they need.

mod bus;
mod types;

pub use bus::{Event, EventBus, Topic};
pub use types::QuizEvent;

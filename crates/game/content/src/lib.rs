//! Data-driven combat content and loaders.
//!
//! This crate reads the static data a combat needs from RON/TOML files:
//! - Card pool (one card per vocabulary word)
//! - Enemy roster and named encounters
//! - Relic effect table
//! - Synergy tuning
//! - Combat configuration
//!
//! Everything is gathered into a [`ContentBundle`], which implements the
//! core's `ContentOracle`. Content never appears in combat state; the session
//! copies what it needs when a combat starts.

mod bundle;

#[cfg(feature = "loaders")]
pub mod loaders;

pub use bundle::ContentBundle;

#[cfg(feature = "loaders")]
pub use loaders::{
    CardLoader, ConfigLoader, ContentFactory, EncounterLoader, EnemyLoader, LoadResult,
    RelicLoader, SynergyLoader,
};

//! Headless combat simulator.
//!
//! Loads content from a data directory, runs one encounter with a simulated
//! learner answering every quiz, and prints the combat summary as JSON.
//!
//! ```bash
//! LEXICON_ENCOUNTER=pack LEXICON_ACCURACY=0.6 RUST_LOG=lexicon=debug \
//!     cargo run -p lexicon-sim
//! ```
mod config;
mod learner;
mod logging;
mod policy;

use std::sync::Arc;

use anyhow::{Context, Result};
use lexicon_content::ContentFactory;
use lexicon_core::{PlayOutcome, TurnOutcome};
use lexicon_runtime::{CombatDriver, InMemoryLearning, OracleManager, StaticInventory};

use config::SimConfig;
use learner::SimulatedLearner;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if it exists (silently ignore if not found)
    let _ = dotenvy::dotenv();

    let config = SimConfig::from_env();
    let _guard = logging::setup_logging(config.log_dir.clone())?;

    tracing::info!(
        encounter = %config.encounter,
        seed = config.seed,
        accuracy = config.accuracy,
        "Starting simulation"
    );

    let content = ContentFactory::new(&config.data_dir)
        .bundle()
        .with_context(|| format!("loading content from {}", config.data_dir.display()))?;
    let oracles = OracleManager::new(
        Arc::new(content),
        Arc::new(InMemoryLearning::new()),
        Arc::new(StaticInventory::new().with_equipped(config.relics.iter().cloned())),
    );

    let mut driver = CombatDriver::builder()
        .seed(config.seed)
        .oracles(oracles)
        .quiz_provider(SimulatedLearner::new(config.accuracy, config.seed))
        .build()?;
    driver.start_encounter(&config.encounter)?;

    run_combat(&mut driver, config.max_turns).await?;

    match driver.session().summary() {
        Some(summary) => println!("{}", serde_json::to_string_pretty(&summary)?),
        None => tracing::warn!(
            turns = driver.session().turn(),
            "Turn cap reached before the combat ended"
        ),
    }
    Ok(())
}

/// Zero-cost draw cards can otherwise keep a turn going forever.
const MAX_PLAYS_PER_TURN: usize = 20;

async fn run_combat(driver: &mut CombatDriver, max_turns: u32) -> Result<()> {
    while driver.session().turn() <= max_turns {
        for _ in 0..MAX_PLAYS_PER_TURN {
            let Some((word, target)) = policy::choose_play(driver.session()) else {
                break;
            };
            match driver.play_card(&word, target).await? {
                PlayOutcome::Rejected(reason) => {
                    tracing::debug!(card = %word, %reason, "Play rejected, ending turn");
                    break;
                }
                _ if driver.session().phase().is_terminal() => return Ok(()),
                _ => {}
            }
        }

        match driver.end_turn() {
            TurnOutcome::Ended { .. } => return Ok(()),
            TurnOutcome::NextTurn { .. } => {}
            TurnOutcome::Rejected(reason) => {
                anyhow::bail!("end of turn rejected: {reason}");
            }
        }
    }
    Ok(())
}

//! Simulator configuration read from the environment.
use std::env;
use std::path::PathBuf;

/// Simulator configuration.
#[derive(Clone, Debug)]
pub struct SimConfig {
    pub data_dir: PathBuf,
    pub seed: u64,
    pub encounter: String,
    /// Equipped relic ids.
    pub relics: Vec<String>,
    /// Probability that the simulated learner answers correctly.
    pub accuracy: f64,
    /// Player turns before the run is abandoned.
    pub max_turns: u32,
    /// Directory for the log file; `None` uses the platform cache dir.
    pub log_dir: Option<PathBuf>,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from(concat!(env!("CARGO_MANIFEST_DIR"), "/../game/content/data")),
            seed: 0,
            encounter: "first_steps".to_string(),
            relics: Vec::new(),
            accuracy: 0.8,
            max_turns: 50,
            log_dir: None,
        }
    }
}

impl SimConfig {
    /// Construct configuration from environment variables.
    ///
    /// Environment variables:
    /// - `LEXICON_DATA_DIR` - Content directory (default: the content crate's `data/`)
    /// - `LEXICON_SEED` - Combat seed (default: 0)
    /// - `LEXICON_ENCOUNTER` - Encounter name (default: first_steps)
    /// - `LEXICON_RELICS` - Comma-separated equipped relic ids
    /// - `LEXICON_ACCURACY` - Answer accuracy in `[0, 1]` (default: 0.8)
    /// - `LEXICON_MAX_TURNS` - Turn cap (default: 50)
    /// - `LEXICON_LOG_DIR` - Log directory
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Ok(dir) = env::var("LEXICON_DATA_DIR") {
            config.data_dir = PathBuf::from(dir);
        }
        if let Some(seed) = read_env::<u64>("LEXICON_SEED") {
            config.seed = seed;
        }
        if let Ok(encounter) = env::var("LEXICON_ENCOUNTER") {
            config.encounter = encounter;
        }
        if let Ok(relics) = env::var("LEXICON_RELICS") {
            config.relics = parse_list(&relics);
        }
        if let Some(accuracy) = read_env::<f64>("LEXICON_ACCURACY") {
            config.accuracy = accuracy.clamp(0.0, 1.0);
        }
        if let Some(turns) = read_env::<u32>("LEXICON_MAX_TURNS") {
            config.max_turns = turns.max(1);
        }
        if let Ok(dir) = env::var("LEXICON_LOG_DIR") {
            config.log_dir = Some(PathBuf::from(dir));
        }

        config
    }
}

fn read_env<T>(key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    env::var(key).ok()?.parse().ok()
}

fn parse_list(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

//! Client configuration loaded from the process environment.
use std::env;
use std::str::FromStr;

/// Configuration required to bootstrap a play session.
#[derive(Clone, Debug)]
pub struct ClientConfig {
    /// Session seed; the only knob that affects determinism.
    pub seed: u64,
    /// Difficulty level applied to enemy templates.
    pub difficulty: u32,
    /// Starting gold.
    pub gold: u32,
}

impl ClientConfig {
    /// Construct configuration from process environment variables.
    ///
    /// - `GRIDFALL_SEED` (default: random)
    /// - `GRIDFALL_DIFFICULTY` (default: 1)
    /// - `GRIDFALL_GOLD` (default: 20)
    pub fn from_env() -> Self {
        Self {
            seed: read_env::<u64>("GRIDFALL_SEED").unwrap_or_else(rand::random),
            difficulty: read_env::<u32>("GRIDFALL_DIFFICULTY").unwrap_or(1),
            gold: read_env::<u32>("GRIDFALL_GOLD").unwrap_or(20),
        }
    }
}

fn read_env<T: FromStr>(key: &str) -> Option<T> {
    env::var(key).ok()?.trim().parse().ok()
}

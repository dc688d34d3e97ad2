use std::time::Duration;

use crate::constants::{GHOST_REDIRECT_INTERVAL, IMPAIRMENT_DURATION, INITIAL_LIVES, TICK_INTERVAL};
use crate::error::ConfigError;

/// Tunables handed to the game at construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    /// How often the driver should call [`Game::tick`](crate::game::Game::tick).
    pub tick_interval: Duration,
    pub ghost_redirect_interval: Duration,
    pub impairment_duration: Duration,
    pub initial_lives: u8,
    /// Seed for the game's random choices; `None` seeds from the operating system.
    pub rng_seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            tick_interval: TICK_INTERVAL,
            ghost_redirect_interval: GHOST_REDIRECT_INTERVAL,
            impairment_duration: IMPAIRMENT_DURATION,
            initial_lives: INITIAL_LIVES,
            rng_seed: None,
        }
    }
}

impl GameConfig {
    /// Returns a copy of the default configuration with a fixed RNG seed.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng_seed: Some(seed),
            ..Self::default()
        }
    }

    /// Rejects zero durations, which would make periodic timers fire forever.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let durations = [
            ("tick_interval", self.tick_interval),
            ("ghost_redirect_interval", self.ghost_redirect_interval),
            ("impairment_duration", self.impairment_duration),
        ];

        match durations.into_iter().find(|(_, duration)| duration.is_zero()) {
            Some((name, _)) => Err(ConfigError::ZeroDuration(name)),
            None => Ok(()),
        }
    }
}

//! Game balance and screen configuration
//!
//! Read from an optional JSON file next to the executable's working
//! directory. Missing fields fall back to the defaults in [`crate::consts`].

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::consts::*;
use crate::geometry::Bounds;

/// Config file looked up in the working directory
pub const CONFIG_FILE: &str = "asteroid-drift.json";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("malformed config: {0}")]
    Json(#[from] serde_json::Error),
    #[error("invalid config: {0}")]
    Invalid(String),
}

/// All tunables for a session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub width: f32,
    pub height: f32,
    pub difficulty_rate: f32,
    pub time_value: f32,
    pub score_file: PathBuf,

    // === Ship ===
    pub ship_max_speed: f32,
    pub ship_acceleration: f32,
    pub ship_deceleration: f32,
    pub ship_stop_speed: f32,
    pub ship_collision_radius: f32,
    pub ship_fire_interval: f32,
    pub ship_spawn_exclusion_radius: f32,

    // === Asteroids ===
    pub asteroid_count: u32,
    pub asteroid_speed: f32,
    pub asteroid_exclusion_radius: f32,
    pub asteroid_tiers: u32,
    pub asteroid_smallest: f32,
    pub asteroid_biggest: f32,
    pub asteroid_value: f32,
    pub spawn_retries: u32,

    // === Lasers ===
    pub laser_speed: f32,
    pub laser_length: f32,
    pub laser_collision_radius: f32,
    /// Lasers survive hits and only expire off-screen
    pub laser_pierce: bool,
    pub laser_penalty: f32,

    /// RNG seed; a fresh one is drawn when absent
    pub seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            width: WIDTH,
            height: HEIGHT,
            difficulty_rate: DIFFICULTY_RATE,
            time_value: TIME_VALUE,
            score_file: PathBuf::from(SCORES_FILE),

            ship_max_speed: SHIP_MAX_SPEED,
            ship_acceleration: SHIP_ACCELERATION,
            ship_deceleration: SHIP_DECELERATION,
            ship_stop_speed: SHIP_STOP_SPEED,
            ship_collision_radius: SHIP_COLLISION_RADIUS,
            ship_fire_interval: SHIP_FIRE_INTERVAL,
            ship_spawn_exclusion_radius: SHIP_SPAWN_EXCLUSION_RADIUS,

            asteroid_count: ASTEROID_COUNT,
            asteroid_speed: ASTEROID_SPEED,
            asteroid_exclusion_radius: ASTEROID_EXCLUSION_RADIUS,
            asteroid_tiers: ASTEROID_TIERS,
            asteroid_smallest: ASTEROID_SMALLEST,
            asteroid_biggest: ASTEROID_BIGGEST,
            asteroid_value: ASTEROID_VALUE,
            spawn_retries: SPAWN_RETRIES,

            laser_speed: LASER_SPEED,
            laser_length: LASER_LENGTH,
            laser_collision_radius: LASER_COLLISION_RADIUS,
            laser_pierce: false,
            laser_penalty: LASER_PENALTY,

            seed: None,
        }
    }
}

impl GameConfig {
    pub fn bounds(&self) -> Bounds {
        Bounds::new(self.width, self.height)
    }

    /// Check the relationships the simulation relies on
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.width > 0.0 && self.height > 0.0) {
            return Err(ConfigError::Invalid(format!(
                "screen must be non-empty, got {}x{}",
                self.width, self.height
            )));
        }
        if self.asteroid_tiers < 3 {
            return Err(ConfigError::Invalid(format!(
                "asteroid_tiers must be at least 3, got {}",
                self.asteroid_tiers
            )));
        }
        if !(self.asteroid_smallest > 0.0 && self.asteroid_smallest <= self.asteroid_biggest) {
            return Err(ConfigError::Invalid(format!(
                "asteroid radii must satisfy 0 < smallest <= biggest, got {} and {}",
                self.asteroid_smallest, self.asteroid_biggest
            )));
        }
        if self.laser_speed <= self.ship_max_speed {
            return Err(ConfigError::Invalid(format!(
                "laser_speed ({}) must exceed ship_max_speed ({})",
                self.laser_speed, self.ship_max_speed
            )));
        }
        if self.ship_fire_interval < 0.0 {
            return Err(ConfigError::Invalid("ship_fire_interval must not be negative".into()));
        }
        if self.spawn_retries == 0 {
            return Err(ConfigError::Invalid("spawn_retries must be at least 1".into()));
        }
        Ok(())
    }

    /// Parse and validate a config file
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config: Self = serde_json::from_str(&text)?;
        config.validate()?;
        Ok(config)
    }

    /// Load config, falling back to defaults when absent or unusable
    pub fn load(path: &Path) -> Self {
        if !path.exists() {
            log::info!("No config at {}, using defaults", path.display());
            return Self::default();
        }
        match Self::from_file(path) {
            Ok(config) => {
                log::info!("Loaded config from {}", path.display());
                config
            }
            Err(e) => {
                log::warn!("{e}; using defaults");
                Self::default()
            }
        }
    }
}

//! Asteroid Drift - a wrap-around asteroid shooter
//!
//! Core modules:
//! - `sim`: Frame-driven simulation (entities, spawning, collisions, frame controller)
//! - `scoreboard`: Score accrual and high score tracking
//! - `persistence`: Append-only score log
//! - `platform`: Renderer / input / clock collaborator traits
//! - `renderer`: Turns simulation state into draw calls
//! - `config`: Data-driven game balance

pub mod config;
pub mod geometry;
pub mod input;
pub mod persistence;
pub mod platform;
pub mod renderer;
pub mod scoreboard;
pub mod sim;

pub use config::GameConfig;
pub use geometry::Bounds;
pub use scoreboard::Scoreboard;

use glam::Vec2;

/// Default game configuration constants
pub mod consts {
    /// Screen dimensions (px)
    pub const WIDTH: f32 = 320.0;
    pub const HEIGHT: f32 = 240.0;

    /// Asteroids added to the target count per second of survival
    pub const DIFFICULTY_RATE: f32 = 0.5;
    /// Points passively gained per second of survival
    pub const TIME_VALUE: f32 = 10.0;
    /// Score log file, relative to the working directory
    pub const SCORES_FILE: &str = "Scores.dat";

    /// Ship defaults
    pub const SHIP_MAX_SPEED: f32 = 220.0; // px/s
    pub const SHIP_ACCELERATION: f32 = 400.0; // px/s²
    /// Velocity decay factor when not thrusting on an axis (1/s)
    pub const SHIP_DECELERATION: f32 = 1.5;
    /// Below this speed an axis stops integrating position
    pub const SHIP_STOP_SPEED: f32 = 4.0;
    pub const SHIP_COLLISION_RADIUS: f32 = 5.0;
    /// Seconds between shots (lower is faster)
    pub const SHIP_FIRE_INTERVAL: f32 = 0.12;
    /// Asteroids closer than this to the screen center are cleared on respawn
    pub const SHIP_SPAWN_EXCLUSION_RADIUS: f32 = 100.0;
    /// Ship drawing scale
    pub const SHIP_DRAW_SIZE: f32 = 2.0;
    /// Half-angle of the ship's tail fins (radians)
    pub const SHIP_WIDTH_FACTOR: f32 = 0.7;
    /// Initial drift so a fresh ship has a defined heading
    pub const SHIP_SPAWN_VELOCITY_Y: f32 = -0.01;

    /// Asteroid defaults
    pub const ASTEROID_COUNT: u32 = 15;
    pub const ASTEROID_SPEED: f32 = 45.0; // px/s
    /// Random spawns avoid this radius around the ship
    pub const ASTEROID_EXCLUSION_RADIUS: f32 = 50.0;
    /// Number of size tiers (at least 3)
    pub const ASTEROID_TIERS: u32 = 3;
    pub const ASTEROID_SMALLEST: f32 = 7.0; // px radius
    pub const ASTEROID_BIGGEST: f32 = 16.0; // px radius
    /// Score numerator; an asteroid is worth VALUE / radius
    pub const ASTEROID_VALUE: f32 = 100.0;
    /// Position samples tried before accepting a too-close spawn
    pub const SPAWN_RETRIES: u32 = 32;

    /// Laser defaults
    pub const LASER_SPEED: f32 = 600.0; // px/s, must exceed SHIP_MAX_SPEED
    pub const LASER_LENGTH: f32 = 7.0; // px
    pub const LASER_COLLISION_RADIUS: f32 = 1.0;
    /// Points lost per laser fired
    pub const LASER_PENALTY: f32 = 3.0;

    /// Display multiplier applied to the truncated score
    pub const SCORE_DISPLAY_SCALE: i64 = 100;
}

/// Wrap a coordinate into [0, extent)
#[inline]
pub fn wrap(value: f32, extent: f32) -> f32 {
    let wrapped = value.rem_euclid(extent);
    // rem_euclid can round up to `extent` for tiny negative inputs
    if wrapped >= extent { 0.0 } else { wrapped }
}

/// Heading of a velocity vector, measured from +y toward +x
///
/// Returns `None` for the zero vector, where the angle is undefined.
#[inline]
pub fn heading_of(vel: Vec2) -> Option<f32> {
    if vel == Vec2::ZERO {
        None
    } else {
        Some(vel.x.atan2(vel.y))
    }
}

/// Unit vector for a heading measured from +y toward +x
#[inline]
pub fn unit_from_heading(heading: f32) -> Vec2 {
    Vec2::new(heading.sin(), heading.cos())
}

//! Asteroid placement and ship respawn

use std::f32::consts::TAU;

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use super::entity::Entity;
use super::world::World;
use crate::config::GameConfig;
use crate::geometry::within_radius;

/// Where a new asteroid should appear
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Placement {
    /// Anywhere on screen, away from the ship when possible
    Random,
    At(Vec2),
}

/// Seeded source of new asteroids
#[derive(Debug, Clone)]
pub struct Spawner {
    rng: Pcg32,
}

impl Spawner {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: Pcg32::seed_from_u64(seed),
        }
    }

    /// Uniform screen position outside the exclusion radius around `avoid`
    ///
    /// Best effort: after `spawn_retries` misses the last sample is used
    /// even if it is too close.
    pub fn random_position(&mut self, config: &GameConfig, avoid: Vec2) -> Vec2 {
        let mut pos = Vec2::ZERO;
        for _ in 0..config.spawn_retries.max(1) {
            pos = Vec2::new(
                self.rng.random_range(0.0..config.width),
                self.rng.random_range(0.0..config.height),
            );
            if !within_radius(pos, avoid, config.asteroid_exclusion_radius) {
                return pos;
            }
        }
        log::debug!("No clear spawn point after {} tries", config.spawn_retries);
        pos
    }

    /// Build an asteroid with a random heading at the configured speed
    ///
    /// `tier: None` draws a uniform tier.
    pub fn asteroid(&mut self, config: &GameConfig, placement: Placement, tier: Option<u32>, avoid: Vec2) -> Entity {
        let pos = match placement {
            Placement::At(pos) => pos,
            Placement::Random => self.random_position(config, avoid),
        };
        let tier = tier.unwrap_or_else(|| self.rng.random_range(0..config.asteroid_tiers));
        let heading = self.rng.random_range(0.0..TAU);
        let vel = Vec2::new(heading.cos(), heading.sin()) * config.asteroid_speed;
        Entity::asteroid(pos, vel, tier, config)
    }

    /// Queue a new asteroid, keeping clear of the live ship (or screen center)
    pub fn spawn_asteroid(&mut self, world: &mut World, config: &GameConfig, placement: Placement, tier: Option<u32>) {
        let avoid = world
            .ship_position()
            .unwrap_or_else(|| config.bounds().center());
        let asteroid = self.asteroid(config, placement, tier, avoid);
        world.queue_add(asteroid);
    }
}

/// Queue a fresh ship at screen center, clearing asteroids around it
pub fn respawn_ship(world: &mut World, config: &GameConfig) {
    let center = config.bounds().center();
    let doomed = world.asteroids_near(center, config.ship_spawn_exclusion_radius);
    log::info!("Respawning ship, clearing {} nearby asteroids", doomed.len());
    for id in doomed {
        world.queue_delete(id);
    }
    world.queue_add(Entity::ship(config));
}

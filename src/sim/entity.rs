//! The moving-object model shared by ships, asteroids and lasers

use glam::Vec2;
use slotmap::new_key_type;

use super::asteroid::Asteroid;
use super::laser::Laser;
use super::ship::Ship;
use crate::config::GameConfig;
use crate::geometry::{Bounds, circles_overlap};
use crate::input::ShipControls;

new_key_type! {
    /// Handle to a live entity; stale handles resolve to nothing
    pub struct EntityId;
}

/// Position, velocity and collision radius
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Body {
    pub pos: Vec2,
    pub vel: Vec2,
    pub radius: f32,
}

impl Body {
    pub fn new(pos: Vec2, vel: Vec2, radius: f32) -> Self {
        Self { pos, vel, radius }
    }

    /// Move by velocity and wrap around the screen edges
    pub fn advance_wrapped(&mut self, dt: f32, bounds: &Bounds) {
        self.pos = bounds.wrap(self.pos + self.vel * dt);
    }
}

/// Variant-specific state
#[derive(Debug, Clone, PartialEq)]
pub enum EntityKind {
    Ship(Ship),
    Asteroid(Asteroid),
    Laser(Laser),
}

/// Whether an entity wants to stay after its update
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpdateOutcome {
    Continue,
    Expire,
}

/// Visual feedback for a destroyed asteroid
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Explosion {
    pub pos: Vec2,
    pub radius: f32,
    /// The asteroid broke into smaller pieces rather than vanishing
    pub split: bool,
}

/// Follow-up work requested by an entity, applied by the frame controller
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    /// A shot was fired; the laser joins next frame and the shot is charged
    Fire(Entity),
    /// Queue an asteroid of the given tier at a fixed position
    SpawnAsteroid { pos: Vec2, tier: u32 },
    /// Score a destroyed asteroid of this radius
    AwardAsteroid { radius: f32 },
    Explosion(Explosion),
}

/// Read-only context for entity updates
#[derive(Debug, Clone, Copy)]
pub struct UpdateEnv<'a> {
    pub bounds: Bounds,
    pub config: &'a GameConfig,
    pub controls: &'a ShipControls,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Entity {
    pub body: Body,
    pub kind: EntityKind,
}

impl Entity {
    pub fn ship(config: &GameConfig) -> Self {
        Ship::spawn(config)
    }

    pub fn asteroid(pos: Vec2, vel: Vec2, tier: u32, config: &GameConfig) -> Self {
        Asteroid::spawn(pos, vel, tier, config)
    }

    pub fn laser(from: Vec2, angle: f32, config: &GameConfig) -> Self {
        Laser::spawn(from, angle, config)
    }

    pub fn is_ship(&self) -> bool {
        matches!(self.kind, EntityKind::Ship(_))
    }

    pub fn is_asteroid(&self) -> bool {
        matches!(self.kind, EntityKind::Asteroid(_))
    }

    pub fn is_laser(&self) -> bool {
        matches!(self.kind, EntityKind::Laser(_))
    }

    /// Advance one frame
    ///
    /// Only lasers ever expire here; everything else is removed by
    /// collisions or resets.
    pub fn update(&mut self, dt: f32, env: &UpdateEnv<'_>, effects: &mut Vec<Effect>) -> UpdateOutcome {
        match &mut self.kind {
            EntityKind::Ship(ship) => {
                ship.update(&mut self.body, dt, env, effects);
                UpdateOutcome::Continue
            }
            EntityKind::Laser(laser) => laser.update(&mut self.body, dt, &env.bounds),
            EntityKind::Asteroid(_) => {
                self.body.advance_wrapped(dt, &env.bounds);
                UpdateOutcome::Continue
            }
        }
    }

    /// React to being destroyed
    pub fn explode(&self, config: &GameConfig, effects: &mut Vec<Effect>) {
        match &self.kind {
            EntityKind::Asteroid(asteroid) => asteroid.explode(&self.body, config, effects),
            EntityKind::Ship(_) | EntityKind::Laser(_) => {}
        }
    }

    /// Circle overlap, except that asteroids pass through each other
    pub fn collides_with(&self, other: &Entity) -> bool {
        if self.is_asteroid() && other.is_asteroid() {
            return false;
        }
        circles_overlap(self.body.pos, self.body.radius, other.body.pos, other.body.radius)
    }
}

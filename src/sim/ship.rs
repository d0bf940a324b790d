//! Player ship: eight-way thrust, speed cap, drift damping and firing

use std::f32::consts::FRAC_1_SQRT_2;

use glam::Vec2;

use super::entity::{Body, Effect, Entity, EntityKind, UpdateEnv};
use crate::config::GameConfig;
use crate::consts::SHIP_SPAWN_VELOCITY_Y;
use crate::{heading_of, unit_from_heading};
use crate::input::Thrust;

/// The nine thrust states reachable from exclusive direction flags
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThrustState {
    Coast,
    North,
    South,
    East,
    West,
    NorthEast,
    SouthEast,
    SouthWest,
    NorthWest,
}

impl ThrustState {
    pub fn from_thrust(t: Thrust) -> Self {
        // Screen y grows downward, so "up" is north
        match (t.right, t.left, t.up, t.down) {
            (false, false, false, false) => Self::Coast,
            (true, false, false, false) => Self::East,
            (false, true, false, false) => Self::West,
            (false, false, true, false) => Self::North,
            (false, false, false, true) => Self::South,
            (true, false, true, false) => Self::NorthEast,
            (true, false, false, true) => Self::SouthEast,
            (false, true, false, true) => Self::SouthWest,
            (false, true, true, false) => Self::NorthWest,
            // Unresolved opposing flags; Thrust::resolve never produces these
            _ => Self::Coast,
        }
    }

    /// Acceleration for this state
    ///
    /// Axes without thrust decay proportionally to their velocity.
    /// Diagonals thrust on both axes at 1/√2 so the magnitude matches.
    pub fn acceleration(self, vel: Vec2, accel: f32, decel: f32) -> Vec2 {
        let damp = -vel * decel;
        let diag = FRAC_1_SQRT_2 * accel;
        match self {
            Self::Coast => damp,
            Self::East => Vec2::new(accel, damp.y),
            Self::West => Vec2::new(-accel, damp.y),
            Self::North => Vec2::new(damp.x, -accel),
            Self::South => Vec2::new(damp.x, accel),
            Self::NorthEast => Vec2::new(diag, -diag),
            Self::SouthEast => Vec2::new(diag, diag),
            Self::SouthWest => Vec2::new(-diag, diag),
            Self::NorthWest => Vec2::new(-diag, -diag),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Ship {
    /// Acceleration chosen last frame, integrated at the start of this one
    pub accel: Vec2,
    /// Radians, measured from +y toward +x
    pub heading: f32,
    /// Seconds since the last shot
    pub cooldown: f32,
    pub thrust: ThrustState,
}

impl Ship {
    /// A fresh ship at screen center
    pub fn spawn(config: &GameConfig) -> Entity {
        Entity {
            body: Body::new(
                config.bounds().center(),
                Vec2::new(0.0, SHIP_SPAWN_VELOCITY_Y),
                config.ship_collision_radius,
            ),
            kind: EntityKind::Ship(Self {
                accel: Vec2::ZERO,
                heading: 0.0,
                cooldown: 0.0,
                thrust: ThrustState::Coast,
            }),
        }
    }

    pub fn update(&mut self, body: &mut Body, dt: f32, env: &UpdateEnv<'_>, effects: &mut Vec<Effect>) {
        let config = env.config;

        body.vel += self.accel * dt;

        self.thrust = ThrustState::from_thrust(env.controls.thrust);
        self.accel = self
            .thrust
            .acceleration(body.vel, config.ship_acceleration, config.ship_deceleration);

        let max = config.ship_max_speed;
        if body.vel.length_squared() >= max * max {
            body.vel = body.vel.normalize_or_zero() * max;
        }

        // Zero velocity has no direction; keep pointing where we were
        self.heading = heading_of(body.vel).unwrap_or(self.heading);

        // Residual drift below the stop speed does not move the ship
        let stop = config.ship_stop_speed;
        if body.vel.x.abs() > stop {
            body.pos.x += body.vel.x * dt;
        }
        if body.vel.y.abs() > stop {
            body.pos.y += body.vel.y * dt;
        }
        body.pos = env.bounds.wrap(body.pos);

        self.shoot(body.pos, dt, env, effects);
    }

    fn shoot(&mut self, pos: Vec2, dt: f32, env: &UpdateEnv<'_>, effects: &mut Vec<Effect>) {
        if env.controls.fire && self.cooldown >= env.config.ship_fire_interval {
            let target = env.controls.target;
            let angle = (pos.x - target.x).atan2(pos.y - target.y);
            // Lasers trail their head, so launch from past the nose to keep
            // the head clear of the ship
            let muzzle = pos - unit_from_heading(angle) * (2.0 * env.config.laser_length);
            effects.push(Effect::Fire(Entity::laser(muzzle, angle, env.config)));
            self.cooldown = 0.0;
        }
        self.cooldown += dt;
    }
}

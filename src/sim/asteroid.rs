//! Asteroids and the tier/radius mapping

use glam::Vec2;

use super::entity::{Body, Effect, Entity, EntityKind, Explosion};
use crate::config::GameConfig;

/// Linear map between size tiers and radii
///
/// Tier 0 is the smallest radius and tier `count - 1` the biggest.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TierScale {
    pub count: u32,
    pub smallest: f32,
    pub step: f32,
}

impl TierScale {
    pub fn new(count: u32, smallest: f32, biggest: f32) -> Self {
        let step = if count > 1 {
            (biggest - smallest) / (count - 1) as f32
        } else {
            0.0
        };
        Self {
            count,
            smallest,
            step,
        }
    }

    pub fn from_config(config: &GameConfig) -> Self {
        Self::new(
            config.asteroid_tiers,
            config.asteroid_smallest,
            config.asteroid_biggest,
        )
    }

    pub fn radius(&self, tier: u32) -> f32 {
        self.smallest + tier as f32 * self.step
    }

    /// Inverse of [`TierScale::radius`]
    pub fn tier_of(&self, radius: f32) -> u32 {
        if self.step <= 0.0 {
            return 0;
        }
        let tier = ((radius - self.smallest) / self.step).round().max(0.0) as u32;
        tier.min(self.count.saturating_sub(1))
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Asteroid {
    pub tier: u32,
}

impl Asteroid {
    pub fn spawn(pos: Vec2, vel: Vec2, tier: u32, config: &GameConfig) -> Entity {
        let scale = TierScale::from_config(config);
        let tier = tier.min(scale.count.saturating_sub(1));
        Entity {
            body: Body::new(pos, vel, scale.radius(tier)),
            kind: EntityKind::Asteroid(Self { tier }),
        }
    }

    /// Split into two smaller pieces unless already at the smallest size
    ///
    /// Either way the kill is scored by radius.
    pub fn explode(&self, body: &Body, config: &GameConfig, effects: &mut Vec<Effect>) {
        let scale = TierScale::from_config(config);
        let split = body.radius > scale.smallest;

        effects.push(Effect::Explosion(Explosion {
            pos: body.pos,
            radius: body.radius,
            split,
        }));

        if split {
            let child = scale.tier_of(body.radius).saturating_sub(1);
            for _ in 0..2 {
                effects.push(Effect::SpawnAsteroid {
                    pos: body.pos,
                    tier: child,
                });
            }
        }

        effects.push(Effect::AwardAsteroid {
            radius: body.radius,
        });
    }
}

//! Lasers: short straight shots that leave the screen instead of wrapping

use glam::Vec2;

use super::entity::{Body, Entity, EntityKind, UpdateOutcome};
use crate::config::GameConfig;
use crate::geometry::Bounds;
use crate::unit_from_heading;

#[derive(Debug, Clone, PartialEq)]
pub struct Laser {
    /// Far end of the drawn segment; the body position is the head
    pub tail: Vec2,
    /// Segment (tail, head) as it stood before the latest move
    pub trace: (Vec2, Vec2),
}

impl Laser {
    /// Shot fired from `from` along `angle` (measured from +y toward +x)
    ///
    /// The head starts `laser_length` along the angle and the shot travels
    /// back against it.
    pub fn spawn(from: Vec2, angle: f32, config: &GameConfig) -> Entity {
        let dir = unit_from_heading(angle);
        let head = from + dir * config.laser_length;
        Entity {
            body: Body::new(head, -dir * config.laser_speed, config.laser_collision_radius),
            kind: EntityKind::Laser(Self {
                tail: from,
                trace: (from, head),
            }),
        }
    }

    pub fn update(&mut self, body: &mut Body, dt: f32, bounds: &Bounds) -> UpdateOutcome {
        self.trace = (self.tail, body.pos);

        let delta = body.vel * dt;
        self.tail += delta;
        body.pos += delta;

        if bounds.contains(body.pos) {
            UpdateOutcome::Continue
        } else {
            UpdateOutcome::Expire
        }
    }
}

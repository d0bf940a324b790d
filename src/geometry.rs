//! Screen-space geometry: bounds, wrap-around and circle overlap

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::wrap;

/// The playfield rectangle `[0, width) x [0, height)`
///
/// Ships and asteroids treat it as a torus; lasers leave it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    pub width: f32,
    pub height: f32,
}

impl Bounds {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    pub fn center(&self) -> Vec2 {
        Vec2::new(self.width / 2.0, self.height / 2.0)
    }

    /// Wrap a point onto the torus
    #[inline]
    pub fn wrap(&self, p: Vec2) -> Vec2 {
        Vec2::new(wrap(p.x, self.width), wrap(p.y, self.height))
    }

    /// True when the point is strictly inside the rectangle
    #[inline]
    pub fn contains(&self, p: Vec2) -> bool {
        p.x > 0.0 && p.x < self.width && p.y > 0.0 && p.y < self.height
    }
}

/// Circle overlap: squared center distance below squared radius sum
#[inline]
pub fn circles_overlap(a: Vec2, ra: f32, b: Vec2, rb: f32) -> bool {
    let reach = ra + rb;
    a.distance_squared(b) < reach * reach
}

/// True when `p` lies strictly within `radius` of `center`
#[inline]
pub fn within_radius(p: Vec2, center: Vec2, radius: f32) -> bool {
    p.distance_squared(center) < radius * radius
}

//! Outline geometry for entities

use std::f32::consts::FRAC_PI_2;

use glam::Vec2;

use crate::consts::{SHIP_DRAW_SIZE, SHIP_WIDTH_FACTOR};

/// Point at distance `r` and screen angle `angle` from `center` (y flipped)
#[inline]
fn polar_offset(center: Vec2, r: f32, angle: f32) -> Vec2 {
    center + Vec2::new(r * angle.cos(), -r * angle.sin())
}

/// Arrowhead outline: nose, left fin, notch, right fin
///
/// The nose points along the heading (measured from +y toward +x).
pub fn ship_outline(pos: Vec2, heading: f32) -> [Vec2; 4] {
    let long = SHIP_DRAW_SIZE * 3.0;
    let back = heading - 3.0 * FRAC_PI_2;
    [
        pos + nose_direction(heading) * long,
        polar_offset(pos, long, back - SHIP_WIDTH_FACTOR),
        polar_offset(pos, SHIP_DRAW_SIZE, back),
        polar_offset(pos, long, back + SHIP_WIDTH_FACTOR),
    ]
}

/// Closed polygon edges in drawing order
pub fn closed_edges(points: &[Vec2]) -> impl Iterator<Item = (Vec2, Vec2)> + '_ {
    let n = points.len();
    (0..n).map(move |i| (points[i], points[(i + 1) % n]))
}

/// Unit vector from the ship's center toward its nose
pub fn nose_direction(heading: f32) -> Vec2 {
    polar_offset(Vec2::ZERO, 1.0, heading - FRAC_PI_2)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nose_follows_velocity() {
        // Moving right: heading = atan2(dx, dy) = π/2
        let right = crate::heading_of(Vec2::new(10.0, 0.0)).unwrap();
        let nose = nose_direction(right);
        assert!((nose - Vec2::X).length() < 1e-5);

        // Moving down the screen: heading 0
        let nose = nose_direction(0.0);
        assert!((nose - Vec2::Y).length() < 1e-5);
    }

    #[test]
    fn test_outline_is_centered_on_ship() {
        let pos = Vec2::new(50.0, 50.0);
        let pts = ship_outline(pos, 0.3);
        assert!((pts[0].distance(pos) - 6.0).abs() < 1e-4);
        assert!((pts[0] - (pos + nose_direction(0.3) * 6.0)).length() < 1e-4);
        assert!((pts[2].distance(pos) - 2.0).abs() < 1e-4);
        assert_eq!(closed_edges(&pts).count(), 4);
    }
}

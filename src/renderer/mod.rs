//! Frame drawing
//!
//! Turns a [`Session`] into primitive calls on any [`Renderer`]. The
//! backend only has to know lines, circles and text.

pub mod shapes;

use glam::Vec2;

use crate::platform::{Color, Renderer};
use crate::sim::{EntityKind, FrameReport, Session};

/// Approximate glyph height used to lay out the HUD
const LINE_HEIGHT: f32 = 20.0;

/// Draw one complete frame and present it
pub fn draw_frame(renderer: &mut dyn Renderer, session: &Session, report: &FrameReport) {
    renderer.clear();

    for (_, entity) in session.world().iter() {
        let body = &entity.body;
        match &entity.kind {
            EntityKind::Asteroid(_) => {
                renderer.draw_filled_circle(body.pos, body.radius - 1.0, Color::BLACK);
                renderer.draw_circle_outline(body.pos, body.radius, Color::WHITE);
            }
            EntityKind::Laser(laser) => {
                // Segment as it stood before this frame's move
                let (tail, head) = laser.trace;
                renderer.draw_line(tail, head, Color::LASER);
            }
            EntityKind::Ship(ship) => {
                let outline = shapes::ship_outline(body.pos, ship.heading);
                for (from, to) in shapes::closed_edges(&outline) {
                    renderer.draw_line(from, to, Color::WHITE);
                }
            }
        }
    }

    for explosion in session.explosions() {
        let color = if explosion.split {
            Color::ORANGE_RED
        } else {
            Color::GREEN
        };
        renderer.draw_filled_circle(explosion.pos, explosion.radius, color);
    }

    draw_hud(renderer, session, report);
    renderer.present();
}

fn draw_hud(renderer: &mut dyn Renderer, session: &Session, report: &FrameReport) {
    let bounds = session.config().bounds();
    let scoreboard = session.scoreboard();

    let score_color = if scoreboard.is_new_high() {
        Color::GOLD
    } else {
        Color::WHITE
    };
    renderer.write_text(
        &scoreboard.high_score_text(),
        Vec2::new(bounds.width - 242.0, 1.0),
        Color::WHITE,
    );
    renderer.write_text(
        &scoreboard.score_text(),
        Vec2::new(bounds.width - 194.0, 1.0 + LINE_HEIGHT),
        score_color,
    );

    let bottom = bounds.height - LINE_HEIGHT + 4.0;
    renderer.write_text(
        &format!("{:.0}", report.fps()),
        Vec2::new(-2.0, bottom),
        Color::WHITE,
    );
    renderer.write_text(
        &report.asteroid_target.to_string(),
        Vec2::new(bounds.width - 40.0, bottom),
        Color::WHITE,
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GameConfig;
    use crate::input::FrameInput;
    use crate::persistence::MemoryScores;
    use crate::sim::Entity;

    #[derive(Debug, Clone, PartialEq)]
    enum Call {
        Clear,
        Line(Vec2, Vec2, Color),
        Outline(Vec2, f32, Color),
        Filled(Vec2, f32, Color),
        Text(String, Color),
        Present,
    }

    #[derive(Default)]
    struct Recorder {
        calls: Vec<Call>,
    }

    impl Renderer for Recorder {
        fn clear(&mut self) {
            self.calls.push(Call::Clear);
        }
        fn draw_line(&mut self, from: Vec2, to: Vec2, color: Color) {
            self.calls.push(Call::Line(from, to, color));
        }
        fn draw_circle_outline(&mut self, center: Vec2, radius: f32, color: Color) {
            self.calls.push(Call::Outline(center, radius, color));
        }
        fn draw_filled_circle(&mut self, center: Vec2, radius: f32, color: Color) {
            self.calls.push(Call::Filled(center, radius, color));
        }
        fn write_text(&mut self, text: &str, _pos: Vec2, color: Color) {
            self.calls.push(Call::Text(text.to_string(), color));
        }
        fn present(&mut self) {
            self.calls.push(Call::Present);
        }
    }

    fn session() -> Session {
        let config = GameConfig {
            seed: Some(5),
            ..Default::default()
        };
        Session::new(config, &MemoryScores::new(), 0.0)
    }

    #[test]
    fn test_frame_is_bracketed_by_clear_and_present() {
        let s = session();
        let mut r = Recorder::default();
        draw_frame(&mut r, &s, &FrameReport::default());
        assert_eq!(r.calls.first(), Some(&Call::Clear));
        assert_eq!(r.calls.last(), Some(&Call::Present));
    }

    #[test]
    fn test_ship_is_four_white_lines() {
        let s = session();
        let mut r = Recorder::default();
        draw_frame(&mut r, &s, &FrameReport::default());
        let lines = r
            .calls
            .iter()
            .filter(|c| matches!(c, Call::Line(_, _, Color::WHITE)))
            .count();
        assert_eq!(lines, 4);
    }

    #[test]
    fn test_asteroids_and_lasers_drawn() {
        let mut s = session();
        let cfg = s.config().clone();
        s.world_mut()
            .insert(Entity::asteroid(Vec2::new(30.0, 30.0), Vec2::ZERO, 0, &cfg));
        s.world_mut()
            .insert(Entity::laser(Vec2::new(100.0, 100.0), 0.0, &cfg));

        let mut r = Recorder::default();
        draw_frame(&mut r, &s, &FrameReport::default());
        assert!(r.calls.contains(&Call::Outline(Vec2::new(30.0, 30.0), 7.0, Color::WHITE)));
        assert!(r.calls.contains(&Call::Filled(Vec2::new(30.0, 30.0), 6.0, Color::BLACK)));
        assert!(
            r.calls
                .iter()
                .any(|c| matches!(c, Call::Line(from, _, Color::LASER) if *from == Vec2::new(100.0, 100.0)))
        );
    }

    #[test]
    fn test_hud_text() {
        let mut s = session();
        let mut store = MemoryScores::new();
        let report = s.step(&FrameInput::default(), 0.02, 0.02, &mut store);
        let mut r = Recorder::default();
        draw_frame(&mut r, &s, &report);

        let texts: Vec<_> = r
            .calls
            .iter()
            .filter_map(|c| match c {
                Call::Text(t, _) => Some(t.clone()),
                _ => None,
            })
            .collect();
        assert_eq!(
            texts,
            vec![
                "Highscore: 000000000".to_string(),
                "Score: 000000000".to_string(),
                "50".to_string(),
                "15".to_string(),
            ]
        );
    }

    #[test]
    fn test_new_high_score_is_gold() {
        let mut s = session();
        s.scoreboard_mut().add_size(7.0);
        let mut r = Recorder::default();
        draw_frame(&mut r, &s, &FrameReport::default());
        assert!(
            r.calls
                .iter()
                .any(|c| matches!(c, Call::Text(t, Color::GOLD) if t.starts_with("Score")))
        );
    }
}

//! Whole-session runs through the public API with scripted collaborators

use std::collections::HashSet;

use glam::Vec2;

use asteroid_drift::config::GameConfig;
use asteroid_drift::input::{FrameInput, quit_requested};
use asteroid_drift::persistence::{ScoreLog, ScoreStore};
use asteroid_drift::platform::{Color, InputSource, Key, PointerState, Renderer};
use asteroid_drift::renderer::draw_frame;
use asteroid_drift::sim::{EntityKind, Session, TierScale};

#[derive(Default)]
struct Script {
    held: HashSet<Key>,
    pressed: HashSet<Key>,
    pointer: PointerState,
    closed: bool,
}

impl InputSource for Script {
    fn is_key_held(&self, key: Key) -> bool {
        self.held.contains(&key)
    }
    fn is_key_pressed(&self, key: Key) -> bool {
        self.pressed.contains(&key)
    }
    fn pointer(&self) -> PointerState {
        self.pointer
    }
    fn is_window_closed(&self) -> bool {
        self.closed
    }
}

#[derive(Default)]
struct CountingRenderer {
    frames: usize,
    primitives: usize,
}

impl Renderer for CountingRenderer {
    fn clear(&mut self) {}
    fn draw_line(&mut self, _: Vec2, _: Vec2, _: Color) {
        self.primitives += 1;
    }
    fn draw_circle_outline(&mut self, _: Vec2, _: f32, _: Color) {
        self.primitives += 1;
    }
    fn draw_filled_circle(&mut self, _: Vec2, _: f32, _: Color) {
        self.primitives += 1;
    }
    fn write_text(&mut self, _: &str, _: Vec2, _: Color) {}
    fn present(&mut self) {
        self.frames += 1;
    }
}

fn config(score_file: std::path::PathBuf) -> GameConfig {
    GameConfig {
        seed: Some(2024),
        score_file,
        ..Default::default()
    }
}

#[test]
fn test_play_reset_and_quit_persist_scores() {
    let dir = tempfile::tempdir().unwrap();
    let cfg = config(dir.path().join("Scores.dat"));
    let mut store = ScoreLog::new(cfg.score_file.clone());
    let mut session = Session::new(cfg, &store, 0.0);
    let mut renderer = CountingRenderer::default();
    let mut script = Script::default();

    let dt = 1.0 / 60.0;
    let mut now = 0.0;
    let mut frame = 0;
    while !quit_requested(&script) {
        frame += 1;
        now += f64::from(dt);

        script.pressed.clear();
        if frame == 120 {
            script.pressed.insert(Key::R);
        }
        if frame == 240 {
            script.pressed.insert(Key::Escape);
            continue;
        }

        let input = FrameInput::poll(&script);
        let report = session.step(&input, dt, now, &mut store);
        draw_frame(&mut renderer, &session, &report);

        for (_, e) in session.world().iter() {
            if !matches!(e.kind, EntityKind::Laser(_)) {
                assert!(e.body.pos.x >= 0.0 && e.body.pos.x < 320.0);
                assert!(e.body.pos.y >= 0.0 && e.body.pos.y < 240.0);
            }
        }
    }
    session.finish(&mut store);

    assert_eq!(renderer.frames, 239);
    assert!(renderer.primitives > 0);

    let scores = store.load_all().unwrap();
    assert!(!scores.is_empty() && scores.len() <= 2);
    assert!(scores.iter().all(|s| s % 100 == 0));
}

#[test]
fn test_thrusting_ship_moves_and_wraps() {
    let store = asteroid_drift::persistence::MemoryScores::new();
    let cfg = GameConfig {
        seed: Some(9),
        asteroid_count: 0,
        difficulty_rate: 0.0,
        ..Default::default()
    };
    let mut session = Session::new(cfg, &store, 0.0);
    let mut store = store;
    let mut script = Script::default();
    script.held.insert(Key::Right);

    let start = session.world().ship_position().unwrap();
    let dt = 1.0 / 60.0;
    let mut wrapped = false;
    let mut last_x = start.x;
    for i in 0..600 {
        let input = FrameInput::poll(&script);
        session.step(&input, dt, f64::from(i) * f64::from(dt), &mut store);
        let Some(pos) = session.world().ship_position() else {
            panic!("ship vanished with no asteroids around");
        };
        if pos.x < last_x {
            wrapped = true;
        }
        last_x = pos.x;
        assert!(pos.x >= 0.0 && pos.x < 320.0);
        assert_eq!(pos.y, start.y);
    }
    assert!(wrapped, "ship never crossed the right edge");
}

#[test]
fn test_shooting_everything_only_shrinks_asteroids() {
    let store = asteroid_drift::persistence::MemoryScores::new();
    let cfg = GameConfig {
        seed: Some(77),
        ..Default::default()
    };
    let scale = TierScale::from_config(&cfg);
    let mut session = Session::new(cfg, &store, 0.0);
    let mut store = store;
    let mut script = Script::default();
    script.pointer = PointerState {
        pos: Vec2::new(0.0, 0.0),
        buttons: PointerState::PRIMARY,
    };

    for i in 0..300 {
        let input = FrameInput::poll(&script);
        session.step(&input, 1.0 / 60.0, f64::from(i) / 60.0, &mut store);
        // Asteroids spawn far enough away that nothing but our own fire
        // could reach the ship this early
        if i < 30 {
            assert!(session.world().has_ship(), "ship lost at frame {i}");
        }
        for (_, e) in session.world().iter() {
            if let EntityKind::Asteroid(a) = &e.kind {
                assert_eq!(scale.radius(a.tier), e.body.radius);
                assert_eq!(scale.tier_of(e.body.radius), a.tier);
            }
        }
    }
}

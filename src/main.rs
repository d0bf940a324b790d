//! Asteroid Drift entry point
//!
//! Opens a window through macroquad, wires it to the platform traits and
//! runs the frame loop until the window closes or Escape is pressed.

use std::path::Path;

use glam::Vec2;
use macroquad::prelude as mq;

use asteroid_drift::config::{CONFIG_FILE, GameConfig};
use asteroid_drift::consts::{HEIGHT, WIDTH};
use asteroid_drift::input::{FrameInput, quit_requested};
use asteroid_drift::persistence::ScoreLog;
use asteroid_drift::platform::{Clock, Color, InputSource, Key, PointerState, Renderer};
use asteroid_drift::renderer::draw_frame;
use asteroid_drift::sim::Session;

/// Window pixels per playfield unit at startup
const WINDOW_SCALE: f32 = 3.0;
/// HUD font size in playfield units
const FONT_SIZE: f32 = 16.0;

/// Macroquad-backed renderer, input source and clock
struct Frontend {
    playfield: Vec2,
    scale: f32,
    offset: Vec2,
}

impl Frontend {
    fn new(config: &GameConfig) -> Self {
        let mut frontend = Self {
            playfield: Vec2::new(config.width, config.height),
            scale: WINDOW_SCALE,
            offset: Vec2::ZERO,
        };
        frontend.fit_window();
        frontend
    }

    /// Letterbox the playfield into the current window
    fn fit_window(&mut self) {
        let window = Vec2::new(mq::screen_width(), mq::screen_height());
        self.scale = (window.x / self.playfield.x).min(window.y / self.playfield.y);
        self.offset = (window - self.playfield * self.scale) / 2.0;
    }

    fn to_screen(&self, p: Vec2) -> (f32, f32) {
        let s = self.offset + p * self.scale;
        (s.x, s.y)
    }

    fn to_playfield(&self, x: f32, y: f32) -> Vec2 {
        (Vec2::new(x, y) - self.offset) / self.scale
    }
}

fn mq_color(c: Color) -> mq::Color {
    mq::Color::from_rgba(c.r, c.g, c.b, c.a)
}

fn key_code(key: Key) -> mq::KeyCode {
    match key {
        Key::Left => mq::KeyCode::Left,
        Key::Right => mq::KeyCode::Right,
        Key::Up => mq::KeyCode::Up,
        Key::Down => mq::KeyCode::Down,
        Key::A => mq::KeyCode::A,
        Key::D => mq::KeyCode::D,
        Key::W => mq::KeyCode::W,
        Key::S => mq::KeyCode::S,
        Key::Space => mq::KeyCode::Space,
        Key::Escape => mq::KeyCode::Escape,
        Key::R => mq::KeyCode::R,
        Key::O => mq::KeyCode::O,
        Key::P => mq::KeyCode::P,
        Key::I => mq::KeyCode::I,
        Key::Y => mq::KeyCode::Y,
    }
}

impl Renderer for Frontend {
    fn clear(&mut self) {
        self.fit_window();
        mq::clear_background(mq::BLACK);
    }

    fn draw_line(&mut self, from: Vec2, to: Vec2, color: Color) {
        let (x1, y1) = self.to_screen(from);
        let (x2, y2) = self.to_screen(to);
        mq::draw_line(x1, y1, x2, y2, self.scale, mq_color(color));
    }

    fn draw_circle_outline(&mut self, center: Vec2, radius: f32, color: Color) {
        let (x, y) = self.to_screen(center);
        mq::draw_circle_lines(x, y, radius * self.scale, self.scale, mq_color(color));
    }

    fn draw_filled_circle(&mut self, center: Vec2, radius: f32, color: Color) {
        let (x, y) = self.to_screen(center);
        mq::draw_circle(x, y, radius * self.scale, mq_color(color));
    }

    fn write_text(&mut self, text: &str, pos: Vec2, color: Color) {
        // macroquad anchors text at the baseline
        let (x, y) = self.to_screen(pos + Vec2::new(0.0, FONT_SIZE * 0.8));
        mq::draw_text(text, x, y, FONT_SIZE * self.scale, mq_color(color));
    }

    fn present(&mut self) {
        // Flushed by next_frame() in the main loop
    }
}

impl InputSource for Frontend {
    fn is_key_held(&self, key: Key) -> bool {
        mq::is_key_down(key_code(key))
    }

    fn is_key_pressed(&self, key: Key) -> bool {
        mq::is_key_pressed(key_code(key))
    }

    fn pointer(&self) -> PointerState {
        let (x, y) = mq::mouse_position();
        let buttons = if mq::is_mouse_button_down(mq::MouseButton::Left) {
            PointerState::PRIMARY
        } else {
            0
        };
        PointerState {
            pos: self.to_playfield(x, y),
            buttons,
        }
    }

    fn is_window_closed(&self) -> bool {
        mq::is_quit_requested()
    }
}

impl Clock for Frontend {
    fn frame_delta(&mut self) -> f32 {
        mq::get_frame_time()
    }

    fn now(&self) -> f64 {
        mq::get_time()
    }
}

fn window_conf() -> mq::Conf {
    mq::Conf {
        window_title: String::from("Asteroid Drift"),
        window_width: (WIDTH * WINDOW_SCALE) as i32,
        window_height: (HEIGHT * WINDOW_SCALE) as i32,
        window_resizable: true,
        ..Default::default()
    }
}

#[macroquad::main(window_conf)]
async fn main() {
    env_logger::init();
    log::info!("Asteroid Drift starting...");

    let config = GameConfig::load(Path::new(CONFIG_FILE));
    let mut store = ScoreLog::new(config.score_file.clone());
    let mut frontend = Frontend::new(&config);

    // Closing the window must still save the score
    mq::prevent_quit();

    let mut session = Session::new(config, &store, frontend.now());

    while !quit_requested(&frontend) {
        let dt = frontend.frame_delta();
        let input = FrameInput::poll(&frontend);
        let report = session.step(&input, dt, frontend.now(), &mut store);
        draw_frame(&mut frontend, &session, &report);
        mq::next_frame().await;
    }

    session.finish(&mut store);
    log::info!("Goodbye");
}

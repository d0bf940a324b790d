//! Platform abstraction layer
//!
//! The simulation never talks to a window directly. It consumes:
//! - a `Renderer` for lines, circles and text
//! - an `InputSource` for keys and the pointer
//! - a `Clock` for frame deltas and round timing

use glam::Vec2;

/// RGBA color, 0-255 per channel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    pub const WHITE: Color = Color::rgb(255, 255, 255);
    pub const BLACK: Color = Color::rgb(0, 0, 0);
    pub const GOLD: Color = Color::rgb(255, 215, 0);
    pub const GREEN: Color = Color::rgb(0, 128, 0);
    pub const ORANGE_RED: Color = Color::rgb(255, 69, 0);
    pub const LASER: Color = Color::rgb(60, 255, 20);
}

/// Drawing surface, in playfield coordinates
pub trait Renderer {
    fn clear(&mut self);
    fn draw_line(&mut self, from: Vec2, to: Vec2, color: Color);
    fn draw_circle_outline(&mut self, center: Vec2, radius: f32, color: Color);
    fn draw_filled_circle(&mut self, center: Vec2, radius: f32, color: Color);
    /// `pos` is the top-left corner of the text
    fn write_text(&mut self, text: &str, pos: Vec2, color: Color);
    fn present(&mut self);
}

/// Keys the game reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    Left,
    Right,
    Up,
    Down,
    A,
    D,
    W,
    S,
    Space,
    Escape,
    /// Manual reset
    R,
    /// Debug: clear asteroids and stop spawning
    O,
    /// Debug: resume spawning
    P,
    /// Debug: spawn one asteroid
    I,
    /// Debug: respawn the ship
    Y,
}

/// Pointer position (playfield coordinates) and button bitmask
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PointerState {
    pub pos: Vec2,
    pub buttons: u8,
}

impl PointerState {
    pub const PRIMARY: u8 = 0x01;

    pub fn primary_down(&self) -> bool {
        self.buttons & Self::PRIMARY != 0
    }
}

pub trait InputSource {
    /// Level-triggered: true every frame the key is down
    fn is_key_held(&self, key: Key) -> bool;
    /// Edge-triggered: true only on the frame the key went down
    fn is_key_pressed(&self, key: Key) -> bool;
    fn pointer(&self) -> PointerState;
    fn is_window_closed(&self) -> bool;
}

pub trait Clock {
    /// Seconds since the previous call
    fn frame_delta(&mut self) -> f32;
    /// Monotonic seconds since an arbitrary origin
    fn now(&self) -> f64;
}

//! Per-frame input snapshot
//!
//! Polls an [`InputSource`] once per frame so the simulation only ever
//! sees plain data.

use glam::Vec2;

use crate::platform::{InputSource, Key};

/// Exclusive direction flags: opposing keys cancel each other
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Thrust {
    pub right: bool,
    pub left: bool,
    pub up: bool,
    pub down: bool,
}

impl Thrust {
    /// Resolve raw held keys into at most one horizontal and one vertical direction
    pub fn resolve(right: bool, left: bool, up: bool, down: bool) -> Self {
        Self {
            right: right && !left,
            left: left && !right,
            up: up && !down,
            down: down && !up,
        }
    }
}

/// Ship controls for one frame
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ShipControls {
    pub thrust: Thrust,
    /// Fire key or primary button held
    pub fire: bool,
    /// Aim point in playfield coordinates
    pub target: Vec2,
}

/// Development shortcuts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DebugCommands {
    /// Delete all asteroids and stop spawning new ones
    pub clear_asteroids: bool,
    /// Resume asteroid spawning
    pub resume_asteroids: bool,
    pub spawn_asteroid: bool,
    pub respawn_ship: bool,
}

/// Everything the frame controller reads from the player in one frame
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct FrameInput {
    pub controls: ShipControls,
    /// Save, reset score and start a new round
    pub reset: bool,
    pub debug: DebugCommands,
}

impl FrameInput {
    pub fn poll(source: &dyn InputSource) -> Self {
        let held = |a: Key, b: Key| source.is_key_held(a) || source.is_key_held(b);
        let pointer = source.pointer();

        Self {
            controls: ShipControls {
                thrust: Thrust::resolve(
                    held(Key::Right, Key::D),
                    held(Key::Left, Key::A),
                    held(Key::Up, Key::W),
                    held(Key::Down, Key::S),
                ),
                fire: pointer.primary_down() || source.is_key_held(Key::Space),
                target: pointer.pos,
            },
            reset: source.is_key_pressed(Key::R),
            debug: DebugCommands {
                clear_asteroids: source.is_key_pressed(Key::O),
                resume_asteroids: source.is_key_pressed(Key::P),
                spawn_asteroid: source.is_key_pressed(Key::I),
                respawn_ship: source.is_key_pressed(Key::Y),
            },
        }
    }
}

/// True when the session should end (window closed or Escape)
pub fn quit_requested(source: &dyn InputSource) -> bool {
    source.is_window_closed() || source.is_key_pressed(Key::Escape)
}

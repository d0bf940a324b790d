//! Frame-driven simulation
//!
//! All gameplay logic lives here. Nothing in this module draws, reads
//! devices or touches the filesystem directly:
//! - Entities are a closed enum (ship, asteroid, laser)
//! - The live set is an arena; additions and deletions go through queues
//! - Time comes in as a measured per-frame delta

pub mod asteroid;
pub mod entity;
pub mod frame;
pub mod laser;
pub mod ship;
pub mod spawner;
pub mod world;

pub use asteroid::{Asteroid, TierScale};
pub use entity::{Body, Effect, Entity, EntityId, EntityKind, Explosion, UpdateEnv, UpdateOutcome};
pub use frame::{FrameReport, Session};
pub use laser::Laser;
pub use ship::{Ship, ThrustState};
pub use spawner::{Placement, Spawner, respawn_ship};
pub use world::World;

//! Frame controller
//!
//! One call to [`Session::step`] runs the whole per-frame sequence:
//! replenish asteroids, promote/drain the queues, update, collide,
//! handle resets and debug commands, then score time and ramp difficulty.
//! Frame time is measured, not simulated; there is no sub-stepping.

use rand::Rng;

use super::entity::{Effect, Entity, Explosion, UpdateEnv};
use super::spawner::{Placement, Spawner, respawn_ship};
use super::world::World;
use crate::config::GameConfig;
use crate::input::FrameInput;
use crate::persistence::ScoreStore;
use crate::scoreboard::Scoreboard;

/// What happened during one frame, for the HUD and diagnostics
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FrameReport {
    pub dt: f32,
    /// Asteroids queued by replenishment this frame
    pub spawned: usize,
    /// Entities promoted from the add queue
    pub promoted: usize,
    /// Entities removed by the delete queue
    pub removed: usize,
    /// Lasers that left the screen
    pub expired: usize,
    pub collisions: usize,
    /// Base asteroid count plus the current difficulty bonus
    pub asteroid_target: i64,
}

impl FrameReport {
    /// Instantaneous frames per second
    pub fn fps(&self) -> f32 {
        if self.dt > 0.0 { 1.0 / self.dt } else { 0.0 }
    }
}

/// All mutable game state, owned by the frame loop
#[derive(Debug, Clone)]
pub struct Session {
    config: GameConfig,
    world: World,
    scoreboard: Scoreboard,
    spawner: Spawner,
    /// Cleared by the debug "clear asteroids" command
    spawn_asteroids: bool,
    /// Extra asteroids on top of the base count
    difficulty_asteroids: i64,
    round_start: f64,
    round_time: f64,
    explosions: Vec<Explosion>,
    effects: Vec<Effect>,
}

impl Session {
    /// Start a session with the ship already live and past scores loaded
    pub fn new(config: GameConfig, store: &dyn ScoreStore, now: f64) -> Self {
        let seed = config.seed.unwrap_or_else(|| rand::rng().random());
        log::info!("Starting session (seed {seed})");

        let mut world = World::new();
        world.insert(Entity::ship(&config));

        let mut scoreboard = Scoreboard::new(&config);
        scoreboard.load(store);

        Self {
            spawner: Spawner::new(seed),
            world,
            scoreboard,
            spawn_asteroids: true,
            difficulty_asteroids: 0,
            round_start: now,
            round_time: 0.0,
            explosions: Vec::new(),
            effects: Vec::new(),
            config,
        }
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn world(&self) -> &World {
        &self.world
    }

    pub fn world_mut(&mut self) -> &mut World {
        &mut self.world
    }

    pub fn scoreboard(&self) -> &Scoreboard {
        &self.scoreboard
    }

    pub fn scoreboard_mut(&mut self) -> &mut Scoreboard {
        &mut self.scoreboard
    }

    /// Explosions produced during the latest frame
    pub fn explosions(&self) -> &[Explosion] {
        &self.explosions
    }

    pub fn spawning_enabled(&self) -> bool {
        self.spawn_asteroids
    }

    pub fn difficulty_asteroids(&self) -> i64 {
        self.difficulty_asteroids
    }

    /// Seconds since the current round started
    pub fn round_time(&self) -> f64 {
        self.round_time
    }

    pub fn asteroid_target(&self) -> i64 {
        i64::from(self.config.asteroid_count) + self.difficulty_asteroids
    }

    /// Advance the game by one measured frame
    pub fn step(&mut self, input: &FrameInput, dt: f32, now: f64, store: &mut dyn ScoreStore) -> FrameReport {
        let mut report = FrameReport {
            dt,
            ..Default::default()
        };
        self.explosions.clear();

        // Top up asteroids, but never before something (the ship) exists
        let current = self.world.count_asteroids() as i64;
        let missing = self.asteroid_target() - current;
        if !self.world.is_empty() {
            for _ in 0..missing.max(0) {
                self.spawner
                    .spawn_asteroid(&mut self.world, &self.config, Placement::Random, None);
                report.spawned += 1;
            }
        }

        report.promoted = self.world.promote_pending();
        report.removed = self.world.apply_deletes();

        let env = UpdateEnv {
            bounds: self.config.bounds(),
            config: &self.config,
            controls: &input.controls,
        };
        report.expired = self.world.update_all(dt, &env, &mut self.effects);
        self.apply_effects();

        report.collisions = self.resolve_collisions();
        self.apply_effects();

        if input.reset {
            self.reset(now, store);
        }

        if self.world.has_ship() {
            if self.spawn_asteroids {
                self.scoreboard.add_time(dt);
            }
            self.round_time = now - self.round_start;
        }

        self.run_debug_commands(input);

        self.difficulty_asteroids = if self.spawn_asteroids {
            (self.round_time * f64::from(self.config.difficulty_rate)).floor() as i64
        } else {
            -i64::from(self.config.asteroid_count)
        };
        report.asteroid_target = self.asteroid_target();

        log::trace!("{report:?}");
        report
    }

    /// Save the score, reload the high score and start a fresh round
    pub fn reset(&mut self, now: f64, store: &mut dyn ScoreStore) {
        log::info!("Manual reset at score {}", self.scoreboard.display_score());
        if let Err(e) = self.scoreboard.save(store) {
            log::error!("Failed to save score: {e}");
        }
        self.scoreboard.load(store);
        self.scoreboard.reset();
        self.world.clear();
        respawn_ship(&mut self.world, &self.config);
        self.round_start = now;
        self.round_time = 0.0;
    }

    /// Persist the final score on the way out
    pub fn finish(&self, store: &mut dyn ScoreStore) {
        log::info!("Session over, final score {}", self.scoreboard.display_score());
        if let Err(e) = self.scoreboard.save(store) {
            log::error!("Failed to save score: {e}");
        }
    }

    /// Explode and queue every colliding pair
    fn resolve_collisions(&mut self) -> usize {
        let pairs = self.world.collisions();
        for &(a, b) in &pairs {
            for id in [a, b] {
                let Some(entity) = self.world.get(id) else {
                    continue;
                };
                entity.explode(&self.config, &mut self.effects);
                let pierces = self.config.laser_pierce && entity.is_laser();
                if !pierces {
                    self.world.queue_delete(id);
                }
            }
        }
        pairs.len()
    }

    fn apply_effects(&mut self) {
        for effect in std::mem::take(&mut self.effects) {
            match effect {
                Effect::Fire(laser) => {
                    self.world.queue_add(laser);
                    self.scoreboard.remove_shoot();
                }
                Effect::SpawnAsteroid { pos, tier } => {
                    self.spawner.spawn_asteroid(
                        &mut self.world,
                        &self.config,
                        Placement::At(pos),
                        Some(tier),
                    );
                }
                Effect::AwardAsteroid { radius } => self.scoreboard.add_size(radius),
                Effect::Explosion(explosion) => self.explosions.push(explosion),
            }
        }
    }

    fn run_debug_commands(&mut self, input: &FrameInput) {
        let debug = &input.debug;
        if debug.clear_asteroids {
            log::info!("Debug: clearing asteroids and pausing spawns");
            self.spawn_asteroids = false;
            let doomed: Vec<_> = self
                .world
                .iter()
                .filter(|(_, e)| e.is_asteroid())
                .map(|(id, _)| id)
                .collect();
            for id in doomed {
                self.world.queue_delete(id);
            }
        }
        if debug.resume_asteroids {
            log::info!("Debug: resuming spawns");
            self.spawn_asteroids = true;
        }
        if debug.spawn_asteroid {
            self.spawner
                .spawn_asteroid(&mut self.world, &self.config, Placement::Random, None);
        }
        if debug.respawn_ship {
            respawn_ship(&mut self.world, &self.config);
        }
    }
}

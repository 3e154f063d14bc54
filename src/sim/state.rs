//! Game state and core simulation types
//!
//! One `GameState` holds everything a session mutates: the player, both
//! entity pools, the round counter, the fire timer and the RNG. The frame
//! driver owns it and hands it to `tick` once per frame.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::polygon::Polygon;
use super::pool::EntityPool;
use super::spawn;
use crate::settings::SimConfig;
use crate::{heading_vector, normalize_angle};

/// Session phase
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum GamePhase {
    /// Normal frame loop
    #[default]
    Playing,
    /// Player was hit; the session resets before the frame ends
    Restarting,
}

/// What a pooled entity is
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EntityKind {
    Bullet,
    Asteroid,
}

/// A bullet or asteroid
///
/// The polygon center is the entity's physics position, so the two can
/// never drift apart.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Entity {
    pub kind: EntityKind,
    pub shape: Polygon,
    pub vel: Vec2,
}

impl Entity {
    /// Regular-polygon bullet at `pos` facing `angle`
    pub fn bullet(pos: Vec2, angle: f32, vel: Vec2, size: f32, sides: usize) -> Self {
        Self {
            kind: EntityKind::Bullet,
            shape: Polygon::regular(sides, pos, angle, size),
            vel,
        }
    }

    /// Jagged asteroid of the given scale
    pub fn asteroid<R: Rng>(
        pos: Vec2,
        angle: f32,
        scale: f32,
        vel: Vec2,
        config: &SimConfig,
        rng: &mut R,
    ) -> Self {
        let mut shape = Polygon::random(
            config.asteroid_sides,
            pos,
            angle,
            config.asteroid_size,
            config.asteroid_jitter,
            rng,
        );
        shape.set_uniform_scale(scale);
        shape.rebuild();
        Self {
            kind: EntityKind::Asteroid,
            shape,
            vel,
        }
    }

    #[inline]
    pub fn pos(&self) -> Vec2 {
        self.shape.center
    }

    /// Uniform scale (asteroids halve this on every split)
    #[inline]
    pub fn scale(&self) -> f32 {
        self.shape.scale.x
    }
}

/// The player's ship
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    pub ship: Polygon,
    /// Exhaust flame, drawn only while thrusting and never collidable
    pub thruster: Polygon,
    pub vel: Vec2,
    /// Thrust was held on the last tick
    pub thrusting: bool,
}

impl Player {
    pub fn new(config: &SimConfig) -> Self {
        Self {
            ship: Polygon::regular(config.ship_sides, config.field_center(), 0.0, config.ship_size),
            thruster: Polygon::regular(config.ship_sides, Vec2::ZERO, 0.0, config.ship_size / 2.0),
            vel: Vec2::ZERO,
            thrusting: false,
        }
    }

    #[inline]
    pub fn pos(&self) -> Vec2 {
        self.ship.center
    }

    #[inline]
    pub fn heading(&self) -> f32 {
        self.ship.angle
    }

    /// Tip of the ship, where bullets leave from
    pub fn nose(&self) -> Vec2 {
        self.ship.vertices().first().copied().unwrap_or(self.ship.center)
    }

    /// Put the exhaust flame behind the ship's current position
    pub fn place_thruster(&mut self, offset: f32) {
        self.thruster.angle = normalize_angle(self.ship.angle + std::f32::consts::PI);
        self.thruster.center = self.ship.center + heading_vector(self.thruster.angle) * offset;
        self.thruster.rebuild();
    }

    /// Back to the field center, at rest, facing +x
    pub fn reset(&mut self, config: &SimConfig) {
        self.ship.center = config.field_center();
        self.ship.angle = 0.0;
        self.ship.rebuild();
        self.vel = Vec2::ZERO;
        self.thrusting = false;
    }
}

/// Something that happened during a tick, for the frame driver to react to
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    ShotFired { slot: usize },
    AsteroidDestroyed { slot: usize, scale: f32, children: usize },
    RoundCleared { round: u32 },
    PlayerHit,
    SessionRestarted,
}

/// Running totals across restarts
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SessionStats {
    pub shots_fired: u64,
    pub asteroids_destroyed: u64,
    pub restarts: u32,
    pub best_round: u32,
}

/// What a drawable polygon represents
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DrawKind {
    Ship,
    Thruster,
    Bullet,
    Asteroid,
}

impl From<EntityKind> for DrawKind {
    fn from(kind: EntityKind) -> Self {
        match kind {
            EntityKind::Bullet => DrawKind::Bullet,
            EntityKind::Asteroid => DrawKind::Asteroid,
        }
    }
}

/// Complete session state
#[derive(Debug, Clone)]
pub struct GameState {
    pub config: SimConfig,
    /// Seed the RNG was created from
    pub seed: u64,
    pub rng: Pcg32,
    /// Current round (1-based)
    pub round: u32,
    /// Milliseconds until the next shot is allowed
    pub bullet_timer: f32,
    pub phase: GamePhase,
    pub player: Player,
    pub bullets: EntityPool,
    pub asteroids: EntityPool,
    /// Simulation tick counter
    pub time_ticks: u64,
    /// Events from the most recent tick
    pub events: Vec<GameEvent>,
    pub stats: SessionStats,
}

impl GameState {
    /// Start a session: player centered, round 1 wave spawned
    pub fn new(config: SimConfig, seed: u64) -> Self {
        let mut state = Self::empty(config, seed);
        let count = state.config.wave_size(1);
        spawn::spawn_wave(&mut state, count);
        state.stats.best_round = 1;
        log::info!("Session started (seed {seed}): {count} asteroids");
        state
    }

    /// Session with no asteroids spawned; tests use this to stage a field
    pub fn empty(config: SimConfig, seed: u64) -> Self {
        Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
            round: 1,
            bullet_timer: 0.0,
            phase: GamePhase::Playing,
            player: Player::new(&config),
            bullets: EntityPool::with_capacity(config.max_objects),
            asteroids: EntityPool::with_capacity(config.max_objects),
            time_ticks: 0,
            events: Vec::new(),
            stats: SessionStats::default(),
            config,
        }
    }

    /// Take this tick's events
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    /// Every polygon a renderer should draw this frame
    pub fn drawables(&self) -> impl Iterator<Item = (DrawKind, &Polygon)> {
        let thruster = self
            .player
            .thrusting
            .then_some((DrawKind::Thruster, &self.player.thruster));
        std::iter::once((DrawKind::Ship, &self.player.ship))
            .chain(thruster)
            .chain(
                self.bullets
                    .iter()
                    .chain(self.asteroids.iter())
                    .map(|(_, e)| (DrawKind::from(e.kind), &e.shape)),
            )
    }
}

//! Astroids - a wrap-around arcade shooter
//!
//! Core modules:
//! - `sim`: Deterministic simulation (physics, collisions, pools, waves)
//! - `renderer`: Draw data for live polygons (no GPU calls)
//! - `settings`: Runtime configuration
//! - `error`: Pool and config error types

pub mod error;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use error::{ConfigError, SimError};
pub use settings::SimConfig;

use glam::Vec2;

/// Game configuration constants
pub mod consts {
    /// Play field dimensions
    pub const SCREEN_WIDTH: f32 = 1000.0;
    pub const SCREEN_HEIGHT: f32 = 1000.0;

    /// Slots per entity pool (bullets and asteroids each get one pool)
    pub const MAX_OBJECTS: usize = 20;
    /// Upper bound on wave size
    pub const MAX_ASTEROIDS: usize = MAX_OBJECTS;
    /// Asteroids in the first wave
    pub const START_COUNT: usize = 2;

    /// Ship defaults
    pub const SHIP_SIZE: f32 = 20.0;
    pub const SHIP_SIDES: usize = 3;
    /// Thrust acceleration (pixels/s²)
    pub const SHIP_ACCEL: f32 = 500.0;
    /// Turn rate (radians/s)
    pub const SHIP_TURN_RATE: f32 = 8.0;

    /// Bullet defaults
    pub const BULLET_SIZE: f32 = 3.0;
    pub const BULLET_SIDES: usize = 6;
    pub const BULLET_SPEED: f32 = 600.0;
    /// Minimum time between shots (milliseconds)
    pub const BULLET_INTERVAL: f32 = 500.0;

    /// Asteroid defaults - size is the unscaled outer radius
    pub const ASTEROID_SIZE: f32 = 12.5;
    pub const ASTEROID_SCALE: f32 = 4.0;
    pub const ASTEROID_SPEED: f32 = 100.0;
    /// Fraction of the radius a vertex may be pulled inward
    pub const ASTEROID_JITTER: f32 = 0.3;
    pub const ASTEROID_SIDES: usize = 24;

    /// Frame step used by the headless driver
    pub const FRAME_DT: f32 = 1.0 / 60.0;
}

/// Normalized angle to [-π, π)
#[inline]
pub fn normalize_angle(mut angle: f32) -> f32 {
    use std::f32::consts::PI;
    while angle >= PI {
        angle -= 2.0 * PI;
    }
    while angle < -PI {
        angle += 2.0 * PI;
    }
    angle
}

/// Unit vector pointing along `angle`
#[inline]
pub fn heading_vector(angle: f32) -> Vec2 {
    Vec2::new(angle.cos(), angle.sin())
}

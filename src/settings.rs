//! Simulation settings
//!
//! Defaults come from `crate::consts`; a JSON file can override any subset.

use std::path::Path;

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::ConfigError;

/// Tunable simulation parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    // === Field ===
    pub width: f32,
    pub height: f32,

    // === Pools & waves ===
    /// Slots in each entity pool
    pub max_objects: usize,
    /// Wave size cap (clamped to `max_objects`)
    pub max_asteroids: usize,
    /// Asteroids in round 1
    pub start_count: usize,

    // === Ship ===
    pub ship_size: f32,
    pub ship_sides: usize,
    pub ship_accel: f32,
    pub turn_rate: f32,

    // === Bullets ===
    pub bullet_size: f32,
    pub bullet_sides: usize,
    pub bullet_speed: f32,
    /// Milliseconds between shots
    pub bullet_interval: f32,

    // === Asteroids ===
    pub asteroid_size: f32,
    pub asteroid_scale: f32,
    pub asteroid_speed: f32,
    pub asteroid_jitter: f32,
    pub asteroid_sides: usize,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            width: SCREEN_WIDTH,
            height: SCREEN_HEIGHT,

            max_objects: MAX_OBJECTS,
            max_asteroids: MAX_ASTEROIDS,
            start_count: START_COUNT,

            ship_size: SHIP_SIZE,
            ship_sides: SHIP_SIDES,
            ship_accel: SHIP_ACCEL,
            turn_rate: SHIP_TURN_RATE,

            bullet_size: BULLET_SIZE,
            bullet_sides: BULLET_SIDES,
            bullet_speed: BULLET_SPEED,
            bullet_interval: BULLET_INTERVAL,

            asteroid_size: ASTEROID_SIZE,
            asteroid_scale: ASTEROID_SCALE,
            asteroid_speed: ASTEROID_SPEED,
            asteroid_jitter: ASTEROID_JITTER,
            asteroid_sides: ASTEROID_SIDES,
        }
    }
}

impl SimConfig {
    /// Parse and validate a JSON document
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validated()
    }

    /// Load settings from a JSON file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let config = Self::from_json(&json)?;
        log::info!("Loaded settings from {}", path.display());
        Ok(config)
    }

    /// Check invariants, clamping the wave cap to pool capacity
    pub fn validated(mut self) -> Result<Self, ConfigError> {
        self.validate()?;
        if self.max_asteroids > self.max_objects {
            log::warn!(
                "max_asteroids {} exceeds pool capacity {}, clamping",
                self.max_asteroids,
                self.max_objects
            );
            self.max_asteroids = self.max_objects;
        }
        Ok(self)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.width <= 0.0 || self.height <= 0.0 {
            return Err(ConfigError::Invalid(format!(
                "field must be positive, got {}x{}",
                self.width, self.height
            )));
        }
        if self.max_objects == 0 {
            return Err(ConfigError::Invalid("max_objects must be > 0".into()));
        }
        if self.start_count == 0 {
            return Err(ConfigError::Invalid("start_count must be > 0".into()));
        }
        // An empty wave would read as a cleared field on every tick
        if self.max_asteroids == 0 {
            return Err(ConfigError::Invalid("max_asteroids must be > 0".into()));
        }
        if self.asteroid_scale <= 0.0 {
            return Err(ConfigError::Invalid("asteroid_scale must be > 0".into()));
        }
        if self.bullet_interval <= 0.0 {
            return Err(ConfigError::Invalid("bullet_interval must be > 0".into()));
        }
        if !(0.0..1.0).contains(&self.asteroid_jitter) {
            return Err(ConfigError::Invalid("asteroid_jitter must be in [0, 1)".into()));
        }
        if self.ship_sides < 3 || self.bullet_sides < 3 || self.asteroid_sides < 3 {
            return Err(ConfigError::Invalid("polygons need at least 3 sides".into()));
        }
        Ok(())
    }

    /// Smallest scale a split child may have
    #[inline]
    pub fn split_threshold(&self) -> f32 {
        self.asteroid_scale / 4.0
    }

    /// Minimum distance between a freshly spawned asteroid and the player
    #[inline]
    pub fn spawn_clearance(&self) -> f32 {
        self.asteroid_size * self.asteroid_scale * 2.0
    }

    /// Asteroids spawned at the start of `round` (1-based)
    pub fn wave_size(&self, round: u32) -> usize {
        let wanted = (round as usize + self.start_count).saturating_sub(1);
        wanted.min(self.max_asteroids)
    }

    #[inline]
    pub fn field_center(&self) -> Vec2 {
        Vec2::new(self.width / 2.0, self.height / 2.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_defaults_are_valid() {
        let config = SimConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.split_threshold(), 1.0);
        assert_eq!(config.spawn_clearance(), 100.0);
        assert_eq!(config.field_center(), Vec2::new(500.0, 500.0));
    }

    #[test]
    fn test_partial_json_overrides() {
        let config = SimConfig::from_json(r#"{ "start_count": 3, "max_asteroids": 7 }"#).unwrap();
        assert_eq!(config.start_count, 3);
        assert_eq!(config.max_asteroids, 7);
        assert_eq!(config.max_objects, MAX_OBJECTS);
        assert_eq!(config.width, SCREEN_WIDTH);
    }

    #[test]
    fn test_wave_cap_clamped_to_pool() {
        let config =
            SimConfig::from_json(r#"{ "max_objects": 5, "max_asteroids": 50 }"#).unwrap();
        assert_eq!(config.max_asteroids, 5);
    }

    #[test]
    fn test_invalid_configs_rejected() {
        for json in [
            r#"{ "width": 0 }"#,
            r#"{ "max_objects": 0 }"#,
            r#"{ "start_count": 0 }"#,
            r#"{ "max_asteroids": 0 }"#,
            r#"{ "asteroid_scale": -1 }"#,
            r#"{ "bullet_sides": 2 }"#,
            r#"{ "asteroid_jitter": 1.5 }"#,
        ] {
            assert!(
                matches!(SimConfig::from_json(json), Err(ConfigError::Invalid(_))),
                "{json} should be rejected"
            );
        }
        assert!(matches!(SimConfig::from_json("{ nope"), Err(ConfigError::Parse(_))));
    }

    #[test]
    fn test_wave_size_sequence() {
        let config = SimConfig {
            start_count: 2,
            max_asteroids: 5,
            ..Default::default()
        };
        let sizes: Vec<usize> = (1..=7).map(|r| config.wave_size(r)).collect();
        assert_eq!(sizes, vec![2, 3, 4, 5, 5, 5, 5]);
    }

    proptest! {
        #[test]
        fn prop_wave_size_monotone_and_capped(
            start in 1usize..10,
            cap in 1usize..40,
            round in 1u32..200,
        ) {
            let config = SimConfig { start_count: start, max_asteroids: cap, ..Default::default() };
            let now = config.wave_size(round);
            let next = config.wave_size(round + 1);
            prop_assert!(now <= next);
            prop_assert!(next <= cap);
            prop_assert_eq!(now, (round as usize + start - 1).min(cap));
        }
    }
}

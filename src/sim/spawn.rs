//! Asteroid waves, splitting and fire control
//!
//! Everything here goes through the pools' add/remove contract. A request
//! that hits a full pool is logged and dropped.

use std::f32::consts::TAU;

use glam::Vec2;
use rand::Rng;

use super::state::{Entity, GameEvent, GameState};
use crate::error::SimError;
use crate::heading_vector;

/// Children produced by one split
pub const SPLIT_CHILDREN: usize = 2;

/// Push a spawn point out to `clearance` from the player if it is too close
///
/// The point is moved along the player-to-candidate direction, then wrapped
/// onto the field.
pub fn place_clear_of_player(
    candidate: Vec2,
    player: Vec2,
    clearance: f32,
    width: f32,
    height: f32,
) -> Vec2 {
    let offset = candidate - player;
    if offset.length() >= clearance {
        return candidate;
    }
    // atan2(0, 0) is 0, so a candidate on top of the player goes along +x
    let angle = offset.y.atan2(offset.x);
    let pushed = player + heading_vector(angle) * clearance;
    Vec2::new(pushed.x.rem_euclid(width), pushed.y.rem_euclid(height))
}

/// Spawn one asteroid with a random speed in `[0, speed / scale)`
///
/// Smaller asteroids can move faster.
pub fn spawn_asteroid(
    state: &mut GameState,
    pos: Vec2,
    angle: f32,
    scale: f32,
) -> Result<usize, SimError> {
    if state.asteroids.is_full() {
        return Err(SimError::PoolFull);
    }
    let speed = state.rng.random::<f32>() * (state.config.asteroid_speed / scale);
    let vel = heading_vector(angle) * speed;
    let rock = Entity::asteroid(pos, angle, scale, vel, &state.config, &mut state.rng);
    state.asteroids.add(rock)
}

/// Spawn `count` full-size asteroids at random spots away from the player
///
/// Returns how many actually fit in the pool.
pub fn spawn_wave(state: &mut GameState, count: usize) -> usize {
    let (width, height) = (state.config.width, state.config.height);
    let clearance = state.config.spawn_clearance();
    let scale = state.config.asteroid_scale;

    let mut spawned = 0;
    for _ in 0..count {
        let candidate = Vec2::new(
            state.rng.random::<f32>() * width,
            state.rng.random::<f32>() * height,
        );
        let pos = place_clear_of_player(candidate, state.player.pos(), clearance, width, height);
        let angle = state.rng.random::<f32>() * TAU;

        match spawn_asteroid(state, pos, angle, scale) {
            Ok(_) => spawned += 1,
            Err(e) => log::debug!("Wave asteroid dropped: {e}"),
        }
    }
    log::info!("Round {}: spawned {}/{} asteroids", state.round, spawned, count);
    spawned
}

/// Fire from the ship's nose if the fire timer has run out
///
/// Returns the bullet's slot. The timer only resets when a bullet was
/// actually placed.
pub fn try_fire(state: &mut GameState) -> Option<usize> {
    if state.bullet_timer > 0.0 {
        return None;
    }

    let heading = state.player.heading();
    let bullet = Entity::bullet(
        state.player.nose(),
        heading,
        heading_vector(heading) * state.config.bullet_speed,
        state.config.bullet_size,
        state.config.bullet_sides,
    );

    match state.bullets.add(bullet) {
        Ok(slot) => {
            state.bullet_timer = state.config.bullet_interval;
            state.stats.shots_fired += 1;
            state.events.push(GameEvent::ShotFired { slot });
            Some(slot)
        }
        Err(e) => {
            log::debug!("Shot dropped: {e}");
            None
        }
    }
}

/// Spawn the fragments of a destroyed asteroid
///
/// Two children at half scale appear at the parent's position, unless half
/// scale falls below the split threshold.
pub fn split_asteroid(state: &mut GameState, parent: &Entity) -> usize {
    let child_scale = parent.scale() / 2.0;
    if child_scale < state.config.split_threshold() {
        return 0;
    }

    let mut children = 0;
    for _ in 0..SPLIT_CHILDREN {
        let angle = state.rng.random::<f32>() * TAU;
        match spawn_asteroid(state, parent.pos(), angle, child_scale) {
            Ok(_) => children += 1,
            Err(e) => log::debug!("Fragment dropped: {e}"),
        }
    }
    log::trace!(
        "Split scale {} at {:?} into {} fragments",
        parent.scale(),
        parent.pos(),
        children
    );
    children
}

/// Remove a bullet and the asteroid it hit, then split the asteroid
pub fn resolve_hit(state: &mut GameState, asteroid_slot: usize, bullet_slot: usize) {
    // An already-empty bullet slot is not an error here
    let _ = state.bullets.remove(bullet_slot);

    let Ok(rock) = state.asteroids.remove(asteroid_slot) else {
        return;
    };
    let children = split_asteroid(state, &rock);
    state.stats.asteroids_destroyed += 1;
    state.events.push(GameEvent::AsteroidDestroyed {
        slot: asteroid_slot,
        scale: rock.scale(),
        children,
    });
}

/// Field cleared: advance the round and spawn a bigger wave
pub fn escalate(state: &mut GameState) {
    let cleared = state.round;
    state.events.push(GameEvent::RoundCleared { round: cleared });

    state.round += 1;
    state.stats.best_round = state.stats.best_round.max(state.round);
    let count = state.config.wave_size(state.round);
    log::info!("Round {} cleared, next wave: {}", cleared, count);
    spawn_wave(state, count);
}

//! Per-frame simulation step
//!
//! The frame driver calls `tick` once per frame with the elapsed time and a
//! key snapshot. Everything for that frame (movement, collisions, pool
//! changes, round escalation) finishes before it returns.

use super::geometry::{circles_overlap, polygons_intersect};
use super::physics::{out_of_bounds, step_asteroid, step_entity, step_player};
use super::spawn::{escalate, resolve_hit, spawn_wave, try_fire};
use super::state::{GameEvent, GamePhase, GameState};

/// Key state for a single frame
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickInput {
    /// Forward thrust (W)
    pub thrust: bool,
    /// Rotate counter-clockwise on screen (A)
    pub turn_left: bool,
    /// Rotate clockwise on screen (D)
    pub turn_right: bool,
    /// Shoot (Space)
    pub fire: bool,
}

/// Advance the game state by `dt` seconds
pub fn tick(state: &mut GameState, input: &TickInput, dt: f32) {
    state.events.clear();
    state.time_ticks += 1;

    step_player(&mut state.player, input, &state.config, dt);

    if input.fire {
        try_fire(state);
    }

    // Bullets fly straight and expire at the field edge
    let (width, height) = (state.config.width, state.config.height);
    let mut expired = Vec::new();
    for (slot, bullet) in state.bullets.iter_mut() {
        step_entity(bullet, dt);
        bullet.shape.rebuild();
        if out_of_bounds(bullet.pos(), width, height) {
            expired.push(slot);
        }
    }
    for slot in expired {
        let _ = state.bullets.remove(slot);
    }

    if state.bullet_timer > 0.0 {
        state.bullet_timer -= dt * 1000.0;
    }

    for (_, rock) in state.asteroids.iter_mut() {
        step_asteroid(rock, &state.config, dt);
    }

    if player_collides(state) {
        state.events.push(GameEvent::PlayerHit);
        state.phase = GamePhase::Restarting;
        restart(state);
        return;
    }

    for (asteroid_slot, bullet_slot) in find_hits(state) {
        resolve_hit(state, asteroid_slot, bullet_slot);
    }

    if state.asteroids.is_empty() {
        escalate(state);
    }
}

/// Ship overlaps any asteroid
fn player_collides(state: &GameState) -> bool {
    let ship = &state.player.ship;
    let ship_radius = ship.bounding_radius();
    state.asteroids.iter().any(|(_, rock)| {
        circles_overlap(ship.center, ship_radius, rock.pos(), rock.shape.bounding_radius())
            && polygons_intersect(ship.vertices(), rock.shape.vertices())
    })
}

/// Pair each asteroid with the lowest-slot bullet touching it
///
/// Asteroids are visited in slot order and a bullet is used at most once.
pub fn find_hits(state: &GameState) -> Vec<(usize, usize)> {
    let mut used = vec![false; state.bullets.capacity()];
    let mut hits = Vec::new();

    for (asteroid_slot, rock) in state.asteroids.iter() {
        let rock_radius = rock.shape.bounding_radius();
        let hit = state.bullets.iter().find(|(bullet_slot, bullet)| {
            !used[*bullet_slot]
                && circles_overlap(
                    bullet.pos(),
                    bullet.shape.bounding_radius(),
                    rock.pos(),
                    rock_radius,
                )
                && polygons_intersect(bullet.shape.vertices(), rock.shape.vertices())
        });
        if let Some((bullet_slot, _)) = hit {
            used[bullet_slot] = true;
            hits.push((asteroid_slot, bullet_slot));
        }
    }
    hits
}

/// Reset the session in place: ship centered and still, pools emptied,
/// round 1 wave respawned
pub fn restart(state: &mut GameState) {
    state.phase = GamePhase::Restarting;
    state.player.reset(&state.config);
    state.bullets.clear();
    state.asteroids.clear();
    state.round = 1;
    state.bullet_timer = 0.0;
    state.stats.restarts += 1;

    let count = state.config.wave_size(1);
    spawn_wave(state, count);

    state.events.push(GameEvent::SessionRestarted);
    state.phase = GamePhase::Playing;
    log::info!("Session restarted ({} restarts so far)", state.stats.restarts);
}

//! Per-frame integration and toroidal wrap
//!
//! Every step ends with a polygon rebuild so collision tests later in the
//! same frame see current vertices.

use glam::Vec2;

use super::state::{Entity, Player};
use super::tick::TickInput;
use crate::heading_vector;
use crate::settings::SimConfig;

/// Wrap a position that left the field back onto the opposite edge
///
/// Checks run x-low, y-low, x-high, y-high and stop at the first hit, so a
/// position outside on two axes only wraps one axis per call. Positions
/// exactly on an edge are left alone.
pub fn wrap_position(pos: Vec2, width: f32, height: f32) -> Vec2 {
    if pos.x < 0.0 {
        Vec2::new(width, pos.y)
    } else if pos.y < 0.0 {
        Vec2::new(pos.x, height)
    } else if pos.x > width {
        Vec2::new(0.0, pos.y)
    } else if pos.y > height {
        Vec2::new(pos.x, 0.0)
    } else {
        pos
    }
}

/// True when a position is strictly outside the field
#[inline]
pub fn out_of_bounds(pos: Vec2, width: f32, height: f32) -> bool {
    pos.x < 0.0 || pos.y < 0.0 || pos.x > width || pos.y > height
}

/// Advance the ship: thrust, turn, drag, move, wrap
pub fn step_player(player: &mut Player, input: &TickInput, config: &SimConfig, dt: f32) {
    player.thrusting = input.thrust;
    if input.thrust {
        player.vel += heading_vector(player.ship.angle) * config.ship_accel * dt;
        // Placed before the ship moves, so the flame trails a frame behind
        player.place_thruster(config.ship_size);
    }

    if input.turn_left {
        player.ship.angle -= config.turn_rate * dt;
    }
    if input.turn_right {
        player.ship.angle += config.turn_rate * dt;
    }

    // Frame-rate dependent drag: v -= v*dt, not exp(-dt)
    player.vel -= player.vel * dt;

    player.ship.center += player.vel * dt;
    player.ship.center = wrap_position(player.ship.center, config.width, config.height);
    player.ship.rebuild();
}

/// Move a pooled entity along its velocity (no drag, no turning)
pub fn step_entity(entity: &mut Entity, dt: f32) {
    entity.shape.center += entity.vel * dt;
}

/// Move and wrap an asteroid
pub fn step_asteroid(entity: &mut Entity, config: &SimConfig, dt: f32) {
    step_entity(entity, dt);
    entity.shape.center = wrap_position(entity.shape.center, config.width, config.height);
    entity.shape.rebuild();
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use std::f32::consts::FRAC_PI_2;

    const W: f32 = 1000.0;
    const H: f32 = 800.0;

    #[test]
    fn test_wrap_each_edge() {
        assert_eq!(wrap_position(Vec2::new(-1.0, 5.0), W, H), Vec2::new(W, 5.0));
        assert_eq!(wrap_position(Vec2::new(5.0, -1.0), W, H), Vec2::new(5.0, H));
        assert_eq!(wrap_position(Vec2::new(W + 1.0, 5.0), W, H), Vec2::new(0.0, 5.0));
        assert_eq!(wrap_position(Vec2::new(5.0, H + 1.0), W, H), Vec2::new(5.0, 0.0));
    }

    #[test]
    fn test_wrap_leaves_exact_edges() {
        for p in [
            Vec2::new(0.0, 0.0),
            Vec2::new(W, H),
            Vec2::new(0.0, H),
            Vec2::new(W, 0.0),
            Vec2::new(W / 2.0, H / 2.0),
        ] {
            assert_eq!(wrap_position(p, W, H), p);
        }
    }

    #[test]
    fn test_wrap_only_one_axis_per_call() {
        // Out on both axes: only x wraps this call
        let once = wrap_position(Vec2::new(-5.0, -5.0), W, H);
        assert_eq!(once, Vec2::new(W, -5.0));
        // y is handled on the next call
        assert_eq!(wrap_position(once, W, H), Vec2::new(W, H));

        let corner = wrap_position(Vec2::new(W + 3.0, H + 3.0), W, H);
        assert_eq!(corner, Vec2::new(0.0, H + 3.0));
    }

    #[test]
    fn test_out_of_bounds_is_strict() {
        assert!(!out_of_bounds(Vec2::new(0.0, H), W, H));
        assert!(out_of_bounds(Vec2::new(-0.01, 10.0), W, H));
        assert!(out_of_bounds(Vec2::new(10.0, H + 0.01), W, H));
    }

    #[test]
    fn test_thrust_accelerates_along_heading_with_drag() {
        let config = SimConfig::default();
        let mut player = Player::new(&config);
        let input = TickInput {
            thrust: true,
            ..Default::default()
        };
        let dt = 0.1;
        step_player(&mut player, &input, &config, dt);

        // v = 500 * 0.1 = 50, then drag: 50 - 50 * 0.1 = 45
        assert!((player.vel.x - 45.0).abs() < 1e-3);
        assert!(player.vel.y.abs() < 1e-3);
        assert!((player.pos().x - (500.0 + 4.5)).abs() < 1e-3);
        assert!(player.thrusting);
        // Flame was placed from the pre-move position
        assert!((player.thruster.center.x - (500.0 - config.ship_size)).abs() < 1e-3);
    }

    #[test]
    fn test_drag_decays_without_thrust() {
        let config = SimConfig::default();
        let mut player = Player::new(&config);
        player.vel = Vec2::new(100.0, 0.0);
        step_player(&mut player, &TickInput::default(), &config, 0.5);
        assert!((player.vel.x - 50.0).abs() < 1e-4);
        assert!(!player.thrusting);
    }

    #[test]
    fn test_turning() {
        let config = SimConfig::default();
        let mut player = Player::new(&config);
        let right = TickInput {
            turn_right: true,
            ..Default::default()
        };
        step_player(&mut player, &right, &config, FRAC_PI_2 / config.turn_rate);
        assert!((player.heading() - FRAC_PI_2).abs() < 1e-4);
        // Ship vertices were rebuilt: nose now points +y
        assert!((player.nose() - (player.pos() + Vec2::Y * config.ship_size)).length() < 1e-3);

        let left = TickInput {
            turn_left: true,
            ..Default::default()
        };
        step_player(&mut player, &left, &config, FRAC_PI_2 / config.turn_rate);
        assert!(player.heading().abs() < 1e-4);
    }

    #[test]
    fn test_asteroid_moves_wraps_and_rebuilds() {
        let config = SimConfig::default();
        let mut rng = <rand_pcg::Pcg32 as rand::SeedableRng>::seed_from_u64(1);
        let mut rock = Entity::asteroid(
            Vec2::new(995.0, 300.0),
            0.0,
            1.0,
            Vec2::new(100.0, 0.0),
            &config,
            &mut rng,
        );
        step_asteroid(&mut rock, &config, 0.1);
        assert_eq!(rock.pos(), Vec2::new(0.0, 300.0));
        let radius = rock.shape.bounding_radius();
        assert!(rock.shape.vertices().iter().all(|v| v.distance(rock.pos()) <= radius + 1e-3));
        assert!(rock.shape.vertices()[0].x < config.asteroid_size + 1e-3);
    }

    proptest! {
        #[test]
        fn prop_single_axis_excursion_wraps_in_bounds(
            x in -50.0f32..(W + 50.0),
            y in 0.0f32..=H,
        ) {
            let p = wrap_position(Vec2::new(x, y), W, H);
            prop_assert!(p.x >= 0.0 && p.x <= W);
            prop_assert!(p.y >= 0.0 && p.y <= H);
        }
    }
}

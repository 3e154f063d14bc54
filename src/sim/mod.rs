//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Seeded RNG only
//! - Lowest-free-slot placement and slot-order iteration
//! - No rendering or platform dependencies

pub mod geometry;
pub mod physics;
pub mod polygon;
pub mod pool;
pub mod spawn;
pub mod state;
pub mod tick;

pub use geometry::{point_in_polygon, polygons_intersect, segments_intersect};
pub use physics::wrap_position;
pub use polygon::Polygon;
pub use pool::EntityPool;
pub use spawn::{spawn_wave, split_asteroid, try_fire};
pub use state::{
    DrawKind, Entity, EntityKind, GameEvent, GamePhase, GameState, Player, SessionStats,
};
pub use tick::{TickInput, restart, tick};

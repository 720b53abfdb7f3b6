//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Elapsed time supplied by the caller
//! - Seeded RNG only
//! - Stable iteration order (spawn order)
//! - No rendering or platform dependencies

pub mod cleanup;
pub mod collision;
pub mod physics;
pub mod spawn;
pub mod state;
pub mod tick;

pub use cleanup::cull_offscreen;
pub use collision::{CollisionOutcome, circles_overlap, meteor_hits_ship, resolve_collisions, star_touches_ship};
pub use physics::{clamp_elapsed, move_entities, move_ship, tick_factor};
pub use spawn::{advance_spawners, spawn_meteor, spawn_star};
pub use state::{GameEvent, GamePhase, GameState, Meteor, Ship, SpawnTimers, Star};
pub use tick::{TickInput, tick};

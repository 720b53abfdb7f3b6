//! Circle-vs-circle collision between the ship and falling entities
//!
//! Meteors are checked first, in spawn order. The first hit ends the round
//! and nothing else is processed that frame. Stars are only checked when no
//! meteor hit, and every overlapping star is collected.

use glam::Vec2;

use super::state::{GameState, Meteor, Ship, Star};
use crate::distance;

/// Result of resolving one frame's collisions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CollisionOutcome {
    /// Meteor at this index hit the ship
    ShipHit { meteor: usize },
    /// No meteor hit; this many stars were collected and removed
    Clear { stars_collected: usize },
}

/// Strict overlap test: `distance < reach`
#[inline]
pub fn circles_overlap(a: Vec2, b: Vec2, reach: f32) -> bool {
    distance(a, b) < reach
}

/// Meteor hit zone is shrunk by `forgiveness`
pub fn meteor_hits_ship(meteor: &Meteor, ship: &Ship, forgiveness: f32) -> bool {
    circles_overlap(meteor.pos, ship.pos, meteor.radius + ship.radius - forgiveness)
}

pub fn star_touches_ship(star: &Star, ship: &Ship) -> bool {
    circles_overlap(star.pos, ship.pos, star.radius + ship.radius)
}

/// Check the ship against every entity. Collected stars are removed and
/// scored here; a meteor hit leaves all collections untouched.
pub fn resolve_collisions(state: &mut GameState) -> CollisionOutcome {
    let forgiveness = state.tuning.meteor_hit_forgiveness;
    if let Some(index) = state
        .meteors
        .iter()
        .position(|m| meteor_hits_ship(m, &state.ship, forgiveness))
    {
        return CollisionOutcome::ShipHit { meteor: index };
    }

    let before = state.stars.len();
    let ship = &state.ship;
    state.stars.retain(|s| !star_touches_ship(s, ship));
    let stars_collected = before - state.stars.len();

    let points = state.tuning.star_points.saturating_mul(stars_collected as u64);
    state.award(points);

    CollisionOutcome::Clear { stars_collected }
}

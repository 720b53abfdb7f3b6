//! Per-frame simulation step
//!
//! Order: ship input, entity fall, collisions, off-screen cleanup, spawning.

use super::cleanup::cull_offscreen;
use super::collision::{CollisionOutcome, resolve_collisions};
use super::physics::{clamp_elapsed, move_entities, move_ship, tick_factor};
use super::spawn::advance_spawners;
use super::state::{GameEvent, GamePhase, GameState};

/// Held controls for a single frame
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickInput {
    pub left: bool,
    pub right: bool,
}

/// Advance the game by one frame of `elapsed` seconds (clamped).
///
/// Does nothing once the round is over. A meteor hit stops the frame right
/// after collision checks: no cleanup, no spawning.
pub fn tick(state: &mut GameState, input: &TickInput, elapsed: f32) -> Vec<GameEvent> {
    let mut events = Vec::new();
    if state.phase != GamePhase::Running {
        return events;
    }

    let factor = tick_factor(clamp_elapsed(elapsed));

    move_ship(state, input.left, input.right);
    move_entities(state, factor);

    match resolve_collisions(state) {
        CollisionOutcome::ShipHit { meteor } => {
            log::debug!("Ship hit by meteor #{meteor} at score {}", state.score);
            state.phase = GamePhase::GameOver;
            events.push(GameEvent::ShipDestroyed);
            return events;
        }
        CollisionOutcome::Clear { stars_collected } => {
            events.extend(std::iter::repeat_n(GameEvent::StarCollected, stars_collected));
        }
    }

    let dodged = cull_offscreen(state);
    events.extend(std::iter::repeat_n(GameEvent::MeteorDodged, dodged));

    advance_spawners(state, factor);

    events
}

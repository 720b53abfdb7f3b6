//! Linear motion for the ship and falling entities

use crate::consts::{MAX_FRAME_DT, TICKS_PER_SECOND};

use super::state::GameState;

/// Clamp a measured frame time to `[0, MAX_FRAME_DT]` seconds
#[inline]
pub fn clamp_elapsed(elapsed: f32) -> f32 {
    if elapsed.is_nan() {
        return 0.0;
    }
    elapsed.clamp(0.0, MAX_FRAME_DT)
}

/// Convert elapsed seconds to 60 Hz ticks
#[inline]
pub fn tick_factor(elapsed: f32) -> f32 {
    elapsed * TICKS_PER_SECOND
}

/// Step the ship one frame. Speed is per frame, not per second.
///
/// A step is taken only if the ship stays fully inside `[0, width]`.
pub fn move_ship(state: &mut GameState, left: bool, right: bool) {
    let width = state.arena.x;
    let ship = &mut state.ship;

    if left && ship.left_edge() - ship.speed >= 0.0 {
        ship.pos.x -= ship.speed;
    }
    if right && ship.right_edge() + ship.speed <= width {
        ship.pos.x += ship.speed;
    }
}

/// Drop every meteor and star by `speed * factor`
pub fn move_entities(state: &mut GameState, factor: f32) {
    for meteor in &mut state.meteors {
        meteor.pos.y += meteor.speed * factor;
    }
    for star in &mut state.stars {
        star.pos.y += star.speed * factor;
    }
}

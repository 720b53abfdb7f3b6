//! Timed spawning of meteors and stars
//!
//! Accumulators count 60 Hz-equivalent ticks. When one reaches its interval
//! it spawns a single entity and resets to zero; overshoot is dropped.

use glam::Vec2;
use rand::Rng;

use super::state::{GameState, Meteor, Star};

/// Advance both spawn timers by `factor` ticks and spawn what is due
pub fn advance_spawners(state: &mut GameState, factor: f32) {
    state.timers.meteor += factor;
    state.timers.star += factor;

    if state.timers.meteor >= state.tuning.meteor_interval_ticks {
        spawn_meteor(state);
        state.timers.meteor = 0.0;
    }

    if state.timers.star >= state.tuning.star_interval_ticks {
        spawn_star(state);
        state.timers.star = 0.0;
    }
}

/// Spawn one meteor above a random column
pub fn spawn_meteor(state: &mut GameState) {
    let x = random_x(state);
    let t = &state.tuning;
    let (min_r, max_r) = (t.meteor_min_radius, t.meteor_max_radius);
    let (min_s, max_s) = (t.meteor_min_speed, t.meteor_max_speed);
    let spawn_y = t.meteor_spawn_y;

    let radius = sample(&mut state.rng, min_r, max_r);
    let speed = sample(&mut state.rng, min_s, max_s);

    state.meteors.push(Meteor {
        pos: Vec2::new(x, spawn_y),
        radius,
        speed,
    });
}

/// Spawn one star above a random column
pub fn spawn_star(state: &mut GameState) {
    let x = random_x(state);
    state.stars.push(Star {
        pos: Vec2::new(x, state.tuning.star_spawn_y),
        radius: state.tuning.star_radius,
        speed: state.tuning.star_speed,
    });
}

fn random_x(state: &mut GameState) -> f32 {
    let width = state.arena.x.max(0.0);
    sample(&mut state.rng, 0.0, width)
}

/// Uniform draw from `[min, max)`; an empty range yields `min`
fn sample<R: Rng>(rng: &mut R, min: f32, max: f32) -> f32 {
    if max > min {
        rng.random_range(min..max)
    } else {
        min
    }
}

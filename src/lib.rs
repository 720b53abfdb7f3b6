//! Meteor Dodge - a falling-objects arcade game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (movement, spawning, collisions, game state)
//! - `session`: Frame loop controller and best-score bookkeeping
//! - `renderer`: Draw list generation and Canvas 2D backend
//! - `platform`: Keyboard input and frame timing
//! - `persistence`: Key-value storage (LocalStorage on web)
//! - `tuning`: Data-driven game balance

pub mod persistence;
pub mod platform;
pub mod renderer;
pub mod session;
pub mod settings;
pub mod sim;
pub mod tuning;

pub use session::{FrameOutcome, Session};
pub use settings::Settings;
pub use tuning::Tuning;

use glam::Vec2;

/// Game configuration constants
pub mod consts {
    /// Simulation runs in 60 Hz-equivalent ticks regardless of display rate
    pub const TICKS_PER_SECOND: f32 = 60.0;
    /// Longest elapsed time a single frame may advance (tab suspend, slow frames)
    pub const MAX_FRAME_DT: f32 = 0.034;
    /// Elapsed time assumed for the first frame after start/restart
    pub const FIRST_FRAME_DT: f32 = 1.0 / TICKS_PER_SECOND;

    /// Ship defaults
    pub const SHIP_RADIUS: f32 = 30.0;
    /// Pixels per frame (not scaled by elapsed time)
    pub const SHIP_SPEED: f32 = 8.0;
    /// Distance from the bottom edge to the ship center
    pub const SHIP_BOTTOM_OFFSET: f32 = 80.0;

    /// Meteor defaults
    pub const METEOR_INTERVAL_TICKS: f32 = 30.0;
    pub const METEOR_SPAWN_Y: f32 = -20.0;
    pub const METEOR_MIN_RADIUS: f32 = 20.0;
    pub const METEOR_MAX_RADIUS: f32 = 50.0;
    pub const METEOR_MIN_SPEED: f32 = 3.0;
    pub const METEOR_MAX_SPEED: f32 = 8.0;
    /// Shrinks the meteor/ship hit zone so grazes are survivable
    pub const METEOR_HIT_FORGIVENESS: f32 = 10.0;
    /// Meteors below `height + margin` are culled and count as dodged
    pub const METEOR_CULL_MARGIN: f32 = 40.0;

    /// Star defaults
    pub const STAR_INTERVAL_TICKS: f32 = 180.0;
    pub const STAR_SPAWN_Y: f32 = -10.0;
    pub const STAR_RADIUS: f32 = 10.0;
    pub const STAR_SPEED: f32 = 4.0;
    pub const STAR_CULL_MARGIN: f32 = 20.0;

    /// Scoring
    pub const STAR_POINTS: u64 = 5;
    pub const DODGE_POINTS: u64 = 1;

    /// LocalStorage keys
    pub const BEST_SCORE_KEY: &str = "meteor_best";
    pub const SETTINGS_KEY: &str = "meteor_settings";
    pub const TUNING_KEY: &str = "meteor_tuning";
}

/// Euclidean distance between two centers
#[inline]
pub fn distance(a: Vec2, b: Vec2) -> f32 {
    a.distance(b)
}

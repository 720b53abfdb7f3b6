//! Data-driven game balance
//!
//! Every gameplay number lives here so playtesters can override them from
//! LocalStorage without rebuilding. Defaults come from [`crate::consts`].

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::persistence::KeyValueStore;

/// Balance parameters consumed by the simulation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    // === Ship ===
    pub ship_radius: f32,
    /// Pixels per frame
    pub ship_speed: f32,
    pub ship_bottom_offset: f32,

    // === Meteors ===
    pub meteor_interval_ticks: f32,
    pub meteor_spawn_y: f32,
    pub meteor_min_radius: f32,
    pub meteor_max_radius: f32,
    pub meteor_min_speed: f32,
    pub meteor_max_speed: f32,
    pub meteor_hit_forgiveness: f32,
    pub meteor_cull_margin: f32,

    // === Stars ===
    pub star_interval_ticks: f32,
    pub star_spawn_y: f32,
    pub star_radius: f32,
    pub star_speed: f32,
    pub star_cull_margin: f32,

    // === Scoring ===
    pub star_points: u64,
    pub dodge_points: u64,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            ship_radius: SHIP_RADIUS,
            ship_speed: SHIP_SPEED,
            ship_bottom_offset: SHIP_BOTTOM_OFFSET,

            meteor_interval_ticks: METEOR_INTERVAL_TICKS,
            meteor_spawn_y: METEOR_SPAWN_Y,
            meteor_min_radius: METEOR_MIN_RADIUS,
            meteor_max_radius: METEOR_MAX_RADIUS,
            meteor_min_speed: METEOR_MIN_SPEED,
            meteor_max_speed: METEOR_MAX_SPEED,
            meteor_hit_forgiveness: METEOR_HIT_FORGIVENESS,
            meteor_cull_margin: METEOR_CULL_MARGIN,

            star_interval_ticks: STAR_INTERVAL_TICKS,
            star_spawn_y: STAR_SPAWN_Y,
            star_radius: STAR_RADIUS,
            star_speed: STAR_SPEED,
            star_cull_margin: STAR_CULL_MARGIN,

            star_points: STAR_POINTS,
            dodge_points: DODGE_POINTS,
        }
    }
}

impl Tuning {
    /// Load overrides from the store, falling back to defaults
    pub fn load<S: KeyValueStore>(store: &S) -> Self {
        let raw = match store.get(TUNING_KEY) {
            Ok(Some(raw)) => raw,
            Ok(None) => return Self::default(),
            Err(e) => {
                log::warn!("Could not read tuning overrides: {e}");
                return Self::default();
            }
        };

        match serde_json::from_str::<Tuning>(&raw) {
            Ok(tuning) => {
                log::info!("Loaded tuning overrides");
                tuning.sanitized()
            }
            Err(e) => {
                log::warn!("Ignoring malformed tuning overrides: {e}");
                Self::default()
            }
        }
    }

    /// Repair values that would stall spawning or panic a range draw
    pub fn sanitized(mut self) -> Self {
        let d = Self::default();

        self.ship_radius = positive_or(self.ship_radius, d.ship_radius);
        self.ship_speed = positive_or(self.ship_speed, d.ship_speed);
        self.meteor_interval_ticks = positive_or(self.meteor_interval_ticks, d.meteor_interval_ticks);
        self.star_interval_ticks = positive_or(self.star_interval_ticks, d.star_interval_ticks);
        self.meteor_min_radius = positive_or(self.meteor_min_radius, d.meteor_min_radius);
        self.star_radius = positive_or(self.star_radius, d.star_radius);
        self.meteor_min_speed = positive_or(self.meteor_min_speed, d.meteor_min_speed);
        self.star_speed = positive_or(self.star_speed, d.star_speed);

        // Empty ranges collapse to their lower bound
        self.meteor_max_radius = self.meteor_max_radius.max(self.meteor_min_radius);
        self.meteor_max_speed = self.meteor_max_speed.max(self.meteor_min_speed);

        self
    }
}

/// `value` if it is a positive number, otherwise `fallback` (also catches NaN)
fn positive_or(value: f32, fallback: f32) -> f32 {
    if value > 0.0 { value } else { fallback }
}

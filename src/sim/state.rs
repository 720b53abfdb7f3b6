//! Game state and core simulation types
//!
//! Everything the frame loop mutates lives in [`GameState`]; restarting a
//! round resets it in place.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;

use crate::tuning::Tuning;

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GamePhase {
    /// Active gameplay
    Running,
    /// Round ended, waiting for restart
    GameOver,
}

/// Gameplay events emitted by a tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    /// A star touched the ship
    StarCollected,
    /// A meteor fell off-screen without hitting the ship
    MeteorDodged,
    /// A meteor hit the ship; the round is over
    ShipDestroyed,
}

/// The player's ship
#[derive(Debug, Clone, PartialEq)]
pub struct Ship {
    /// Center; y is fixed after setup
    pub pos: Vec2,
    pub radius: f32,
    /// Pixels per frame
    pub speed: f32,
}

impl Ship {
    /// Ship centered horizontally, `bottom_offset` above the bottom edge
    pub fn new(arena: Vec2, tuning: &Tuning) -> Self {
        Self {
            pos: Vec2::new(arena.x / 2.0, arena.y - tuning.ship_bottom_offset),
            radius: tuning.ship_radius,
            speed: tuning.ship_speed,
        }
    }

    pub fn left_edge(&self) -> f32 {
        self.pos.x - self.radius
    }

    pub fn right_edge(&self) -> f32 {
        self.pos.x + self.radius
    }
}

/// A falling meteor
#[derive(Debug, Clone, PartialEq)]
pub struct Meteor {
    pub pos: Vec2,
    pub radius: f32,
    /// Pixels per 60 Hz tick
    pub speed: f32,
}

/// A falling star
#[derive(Debug, Clone, PartialEq)]
pub struct Star {
    pub pos: Vec2,
    pub radius: f32,
    /// Pixels per 60 Hz tick
    pub speed: f32,
}

/// Spawn accumulators, in 60 Hz ticks
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct SpawnTimers {
    pub meteor: f32,
    pub star: f32,
}

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    /// Spawn RNG
    pub rng: Pcg32,
    /// Balance parameters
    pub tuning: Tuning,
    /// Playfield size (window size in CSS pixels)
    pub arena: Vec2,
    /// Current phase
    pub phase: GamePhase,
    /// Score for the current round
    pub score: u64,
    /// Player ship
    pub ship: Ship,
    /// Active meteors, oldest first
    pub meteors: Vec<Meteor>,
    /// Active stars, oldest first
    pub stars: Vec<Star>,
    pub timers: SpawnTimers,
}

impl GameState {
    /// Create a new game state with default tuning
    pub fn new(seed: u64, width: f32, height: f32) -> Self {
        Self::with_tuning(seed, width, height, Tuning::default())
    }

    pub fn with_tuning(seed: u64, width: f32, height: f32, tuning: Tuning) -> Self {
        let tuning = tuning.sanitized();
        let arena = Vec2::new(width, height);
        Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
            ship: Ship::new(arena, &tuning),
            tuning,
            arena,
            phase: GamePhase::Running,
            score: 0,
            meteors: Vec::new(),
            stars: Vec::new(),
            timers: SpawnTimers::default(),
        }
    }

    pub fn is_running(&self) -> bool {
        self.phase == GamePhase::Running
    }

    /// Start a fresh round. The ship keeps its y and is recentered on x.
    pub fn restart(&mut self) {
        self.score = 0;
        self.meteors.clear();
        self.stars.clear();
        self.timers = SpawnTimers::default();
        self.ship.pos.x = self.arena.x / 2.0;
        self.phase = GamePhase::Running;
    }

    /// Track a window resize. Existing entities and the ship stay put.
    pub fn resize(&mut self, width: f32, height: f32) {
        self.arena = Vec2::new(width, height);
    }

    pub(crate) fn award(&mut self, points: u64) {
        self.score = self.score.saturating_add(points);
    }
}

//! Frame loop controller
//!
//! Owns the game state, frame clock and best score. The browser glue calls
//! [`Session::frame`] from each animation callback and stops rescheduling
//! once it reports game over; [`Session::restart`] starts the next round.

use crate::persistence::{BestScore, KeyValueStore};
use crate::platform::FrameClock;
use crate::renderer::{DrawCommand, build_frame};
use crate::settings::Settings;
use crate::sim::{GameEvent, GameState, TickInput, tick};

/// What the caller should do after a frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameOutcome {
    /// Keep scheduling frames
    Continue { score: u64, score_changed: bool },
    /// The round just ended; show the summary and wait for restart
    GameOver { score: u64, best: u64, new_best: bool },
    /// Called while the round is over; nothing happened
    Halted,
}

impl FrameOutcome {
    /// Whether another animation frame should be requested
    pub fn reschedule(&self) -> bool {
        matches!(self, FrameOutcome::Continue { .. })
    }
}

/// One player's game, from page load onward
pub struct Session<S: KeyValueStore> {
    state: GameState,
    clock: FrameClock,
    best: BestScore<S>,
    settings: Settings,
}

impl<S: KeyValueStore> Session<S> {
    pub fn new(state: GameState, best: BestScore<S>, settings: Settings) -> Self {
        Self {
            state,
            clock: FrameClock::new(),
            best,
            settings,
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn best(&self) -> u64 {
        self.best.get()
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn fps(&self) -> u32 {
        self.clock.fps()
    }

    /// Run one frame at scheduler time `time_ms`
    pub fn frame(&mut self, time_ms: f64, input: &TickInput) -> FrameOutcome {
        if !self.state.is_running() {
            return FrameOutcome::Halted;
        }

        let elapsed = self.clock.advance(time_ms);
        let score_before = self.state.score;
        let events = tick(&mut self.state, input, elapsed);

        if events.contains(&GameEvent::ShipDestroyed) {
            return self.finish_round();
        }

        FrameOutcome::Continue {
            score: self.state.score,
            score_changed: self.state.score != score_before,
        }
    }

    fn finish_round(&mut self) -> FrameOutcome {
        let score = self.state.score;
        let new_best = self.best.record(score);
        self.clock.reset();

        if new_best {
            log::info!("Game over: new best score {score}");
        } else {
            log::info!("Game over: score {score}, best {}", self.best.get());
        }

        FrameOutcome::GameOver {
            score,
            best: self.best.get(),
            new_best,
        }
    }

    /// Start the next round. Ignored while a round is still running.
    pub fn restart(&mut self) -> bool {
        if self.state.is_running() {
            log::warn!("Restart requested mid-round; ignoring");
            return false;
        }
        self.state.restart();
        self.clock.reset();
        log::info!("Game restarted");
        true
    }

    pub fn resize(&mut self, width: f32, height: f32) {
        self.state.resize(width, height);
    }

    /// Draw list for the current state
    pub fn draw_list(&self) -> Vec<DrawCommand> {
        build_frame(&self.state, &self.settings)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::BEST_SCORE_KEY;
    use crate::persistence::MemoryStore;
    use crate::sim::{Meteor, Star};
    use glam::Vec2;
    use proptest::prelude::*;

    const FRAME_MS: f64 = 1000.0 / 60.0;

    fn session_with_best(best: &str) -> Session<MemoryStore> {
        let store = MemoryStore::new();
        store.set(BEST_SCORE_KEY, best).unwrap();
        Session::new(
            GameState::new(2024, 800.0, 600.0),
            BestScore::load(store),
            Settings::default(),
        )
    }

    fn drop_meteor_on_ship(session: &mut Session<MemoryStore>) {
        let pos = session.state.ship.pos;
        session.state.meteors.push(Meteor {
            pos,
            radius: 40.0,
            speed: 3.0,
        });
    }

    fn stored_best(session: &Session<MemoryStore>) -> Option<String> {
        session.best.store().get(BEST_SCORE_KEY).unwrap()
    }

    #[test]
    fn test_restart_keeps_best() {
        let mut session = session_with_best("42");
        session.state.score = 42;
        session.state.stars.push(Star {
            pos: Vec2::new(10.0, 10.0),
            radius: 10.0,
            speed: 4.0,
        });
        drop_meteor_on_ship(&mut session);

        let outcome = session.frame(0.0, &TickInput::default());
        assert_eq!(
            outcome,
            FrameOutcome::GameOver {
                score: 42,
                best: 42,
                new_best: false
            }
        );
        assert!(!outcome.reschedule());

        assert!(session.restart());
        let state = session.state();
        assert!(state.is_running());
        assert_eq!(state.score, 0);
        assert!(state.meteors.is_empty());
        assert!(state.stars.is_empty());
        assert_eq!(session.best(), 42);
        assert_eq!(stored_best(&session).as_deref(), Some("42"));
    }

    #[test]
    fn test_new_best_persisted() {
        let mut session = session_with_best("10");
        session.state.score = 15;
        drop_meteor_on_ship(&mut session);

        let outcome = session.frame(0.0, &TickInput::default());

        assert_eq!(
            outcome,
            FrameOutcome::GameOver {
                score: 15,
                best: 15,
                new_best: true
            }
        );
        assert_eq!(stored_best(&session).as_deref(), Some("15"));
    }

    #[test]
    fn test_halted_after_game_over() {
        let mut session = session_with_best("0");
        drop_meteor_on_ship(&mut session);
        session.frame(0.0, &TickInput::default());

        let x = session.state().ship.pos.x;
        let outcome = session.frame(FRAME_MS, &TickInput { left: true, right: false });
        assert_eq!(outcome, FrameOutcome::Halted);
        assert_eq!(session.state().ship.pos.x, x);
    }

    #[test]
    fn test_restart_ignored_mid_round() {
        let mut session = session_with_best("0");
        session.state.score = 3;
        assert!(!session.restart());
        assert_eq!(session.state().score, 3);
    }

    #[test]
    fn test_score_change_reported() {
        let mut session = session_with_best("0");
        let outcome = session.frame(0.0, &TickInput::default());
        assert_eq!(
            outcome,
            FrameOutcome::Continue {
                score: 0,
                score_changed: false
            }
        );

        let pos = session.state.ship.pos;
        session.state.stars.push(Star {
            pos,
            radius: 10.0,
            speed: 4.0,
        });
        let outcome = session.frame(FRAME_MS, &TickInput::default());
        assert_eq!(
            outcome,
            FrameOutcome::Continue {
                score: 5,
                score_changed: true
            }
        );
        assert!(outcome.reschedule());
    }

    #[test]
    fn test_draw_list_tracks_state() {
        let mut session = session_with_best("0");
        drop_meteor_on_ship(&mut session);
        // clear + meteor + ship
        assert_eq!(session.draw_list().len(), 3);
    }

    proptest! {
        #[test]
        fn prop_best_never_decreases(
            seed in any::<u64>(),
            rounds in prop::collection::vec(prop::collection::vec((any::<bool>(), any::<bool>()), 1..300), 1..5),
        ) {
            let store = MemoryStore::new();
            let mut session = Session::new(
                GameState::new(seed, 800.0, 600.0),
                BestScore::load(store),
                Settings::default(),
            );
            let mut best = session.best();
            let mut time = 0.0;

            for frames in rounds {
                for (left, right) in frames {
                    time += FRAME_MS;
                    session.frame(time, &TickInput { left, right });
                    prop_assert!(session.best() >= best);
                    best = session.best();
                }
                if !session.state().is_running() {
                    session.restart();
                    prop_assert_eq!(session.state().score, 0);
                }
                prop_assert!(session.best() >= best);
            }
        }
    }
}

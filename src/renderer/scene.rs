//! Draw list generation
//!
//! Builds a backend-agnostic list of fill commands from the game state, so
//! what gets drawn is testable without a canvas.

use glam::Vec2;

use crate::settings::Settings;
use crate::sim::{GameState, Ship};

/// Ship fill
pub const SHIP_COLOR: &str = "#00ffff";
/// Ship outline
pub const SHIP_OUTLINE: &str = "#008888";
pub const SHIP_OUTLINE_WIDTH: f64 = 2.0;
pub const METEOR_COLOR: &str = "#ff5733";
pub const METEOR_GLOW: f64 = 15.0;
pub const STAR_COLOR: &str = "#ffff33";
pub const STAR_GLOW: f64 = 20.0;

/// One drawing operation, in canvas pixel coordinates
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    /// Clear the whole surface
    Clear { width: f32, height: f32 },
    /// Filled circle with an optional same-colored halo
    Circle {
        center: Vec2,
        radius: f32,
        color: &'static str,
        glow: Option<f64>,
    },
    /// Filled, outlined triangle
    Triangle {
        points: [Vec2; 3],
        fill: &'static str,
        outline: &'static str,
        outline_width: f64,
    },
}

/// Triangle pointing up, inscribed in the ship's bounding square
pub fn ship_triangle(ship: &Ship) -> [Vec2; 3] {
    let r = ship.radius;
    let c = ship.pos;
    [
        c + Vec2::new(0.0, -r),
        c + Vec2::new(-r, r),
        c + Vec2::new(r, r),
    ]
}

/// Build the full frame: clear, meteors, stars, then the ship on top
pub fn build_frame(state: &GameState, settings: &Settings) -> Vec<DrawCommand> {
    let glow = settings.effective_glow();
    let mut commands = Vec::with_capacity(state.meteors.len() + state.stars.len() + 2);

    commands.push(DrawCommand::Clear {
        width: state.arena.x,
        height: state.arena.y,
    });

    commands.extend(state.meteors.iter().map(|m| DrawCommand::Circle {
        center: m.pos,
        radius: m.radius,
        color: METEOR_COLOR,
        glow: glow.then_some(METEOR_GLOW),
    }));

    commands.extend(state.stars.iter().map(|s| DrawCommand::Circle {
        center: s.pos,
        radius: s.radius,
        color: STAR_COLOR,
        glow: glow.then_some(STAR_GLOW),
    }));

    commands.push(DrawCommand::Triangle {
        points: ship_triangle(&state.ship),
        fill: SHIP_COLOR,
        outline: SHIP_OUTLINE,
        outline_width: SHIP_OUTLINE_WIDTH,
    });

    commands
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::{Meteor, Star};

    fn populated_state() -> GameState {
        let mut state = GameState::new(1, 800.0, 600.0);
        state.meteors.push(Meteor {
            pos: Vec2::new(100.0, 50.0),
            radius: 25.0,
            speed: 4.0,
        });
        state.stars.push(Star {
            pos: Vec2::new(300.0, 80.0),
            radius: 10.0,
            speed: 4.0,
        });
        state
    }

    #[test]
    fn test_frame_order() {
        let frame = build_frame(&populated_state(), &Settings::default());

        assert_eq!(frame.len(), 4);
        assert_eq!(
            frame[0],
            DrawCommand::Clear {
                width: 800.0,
                height: 600.0
            }
        );
        assert!(matches!(frame[1], DrawCommand::Circle { color: METEOR_COLOR, glow: Some(_), .. }));
        assert!(matches!(frame[2], DrawCommand::Circle { color: STAR_COLOR, .. }));
        assert!(matches!(frame[3], DrawCommand::Triangle { .. }));
    }

    #[test]
    fn test_glow_disabled() {
        let settings = Settings {
            glow: false,
            ..Default::default()
        };
        let frame = build_frame(&populated_state(), &settings);

        for cmd in &frame {
            if let DrawCommand::Circle { glow, .. } = cmd {
                assert!(glow.is_none());
            }
        }
    }

    #[test]
    fn test_ship_triangle() {
        let state = GameState::new(1, 800.0, 600.0);
        let [apex, left, right] = ship_triangle(&state.ship);
        assert_eq!(apex, Vec2::new(400.0, 490.0));
        assert_eq!(left, Vec2::new(370.0, 550.0));
        assert_eq!(right, Vec2::new(430.0, 550.0));
    }
}

//! Held-key tracking
//!
//! Key listeners write here; the frame loop polls it once per frame.

use crate::sim::TickInput;

/// Which directional keys are currently held
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InputState {
    left: bool,
    right: bool,
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a key transition. Returns true if the key is one we handle,
    /// so the caller can suppress the browser's default scrolling.
    pub fn set_key(&mut self, key: &str, held: bool) -> bool {
        match key {
            "ArrowLeft" => self.left = held,
            "ArrowRight" => self.right = held,
            _ => return false,
        }
        true
    }

    /// Forget all held keys (window lost focus)
    pub fn release_all(&mut self) {
        *self = Self::default();
    }

    /// Snapshot for the simulation
    pub fn tick_input(&self) -> TickInput {
        TickInput {
            left: self.left,
            right: self.right,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_arrow_keys() {
        let mut input = InputState::new();
        assert!(input.set_key("ArrowLeft", true));
        assert_eq!(
            input.tick_input(),
            TickInput {
                left: true,
                right: false
            }
        );

        assert!(input.set_key("ArrowRight", true));
        assert!(input.set_key("ArrowLeft", false));
        assert_eq!(
            input.tick_input(),
            TickInput {
                left: false,
                right: true
            }
        );
    }

    #[test]
    fn test_other_keys_ignored() {
        let mut input = InputState::new();
        assert!(!input.set_key("a", true));
        assert!(!input.set_key(" ", true));
        assert_eq!(input.tick_input(), TickInput::default());
    }

    #[test]
    fn test_release_all() {
        let mut input = InputState::new();
        input.set_key("ArrowLeft", true);
        input.set_key("ArrowRight", true);
        input.release_all();
        assert_eq!(input.tick_input(), TickInput::default());
    }
}

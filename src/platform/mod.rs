//! Platform abstraction layer
//!
//! Handles browser/native differences for:
//! - Input events (held arrow keys)
//! - Time (frame timestamps, FPS)
//!
//! Storage lives in [`crate::persistence`].

pub mod input;
pub mod time;

pub use input::InputState;
pub use time::FrameClock;

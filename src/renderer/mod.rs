//! Rendering module
//!
//! `scene` turns game state into fill commands; `canvas` draws them with the
//! browser's 2D context.

#[cfg(target_arch = "wasm32")]
pub mod canvas;
pub mod scene;

#[cfg(target_arch = "wasm32")]
pub use canvas::CanvasRenderer;
pub use scene::{DrawCommand, build_frame};

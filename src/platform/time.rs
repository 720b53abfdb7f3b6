//! Frame timing from `requestAnimationFrame` timestamps

use crate::consts::FIRST_FRAME_DT;
use crate::sim::clamp_elapsed;

/// Frames averaged for the FPS readout
const FPS_WINDOW: usize = 60;

/// Turns scheduler timestamps (ms) into clamped frame durations (s)
#[derive(Debug, Clone)]
pub struct FrameClock {
    last_time: Option<f64>,
    frame_times: [f64; FPS_WINDOW],
    frame_index: usize,
    frames_seen: usize,
    fps: u32,
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new()
    }
}

impl FrameClock {
    pub fn new() -> Self {
        Self {
            last_time: None,
            frame_times: [0.0; FPS_WINDOW],
            frame_index: 0,
            frames_seen: 0,
            fps: 0,
        }
    }

    /// Elapsed seconds since the previous frame, clamped.
    /// The first frame after a reset advances one nominal tick.
    pub fn advance(&mut self, time_ms: f64) -> f32 {
        let dt = match self.last_time {
            Some(last) => clamp_elapsed(((time_ms - last) / 1000.0) as f32),
            None => FIRST_FRAME_DT,
        };
        self.last_time = Some(time_ms);
        self.track_fps(time_ms);
        dt
    }

    /// Forget the previous timestamp (loop was halted)
    pub fn reset(&mut self) {
        self.last_time = None;
        self.frame_index = 0;
        self.frames_seen = 0;
        self.fps = 0;
    }

    pub fn fps(&self) -> u32 {
        self.fps
    }

    fn track_fps(&mut self, time_ms: f64) {
        // Slot about to be overwritten holds the oldest timestamp once full
        let oldest = self.frame_times[self.frame_index];
        self.frame_times[self.frame_index] = time_ms;
        self.frame_index = (self.frame_index + 1) % FPS_WINDOW;
        self.frames_seen += 1;

        if self.frames_seen > FPS_WINDOW {
            let elapsed = time_ms - oldest;
            if elapsed > 0.0 {
                self.fps = (FPS_WINDOW as f64 * 1000.0 / elapsed).round() as u32;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::MAX_FRAME_DT;

    #[test]
    fn test_first_frame_is_nominal() {
        let mut clock = FrameClock::new();
        assert_eq!(clock.advance(123_456.0), FIRST_FRAME_DT);
    }

    #[test]
    fn test_elapsed_seconds() {
        let mut clock = FrameClock::new();
        clock.advance(1000.0);
        assert!((clock.advance(1020.0) - 0.02).abs() < 1e-6);
    }

    #[test]
    fn test_gap_is_clamped() {
        let mut clock = FrameClock::new();
        clock.advance(1000.0);
        assert_eq!(clock.advance(9000.0), MAX_FRAME_DT);
        assert_eq!(clock.advance(8000.0), 0.0);
    }

    #[test]
    fn test_reset_forgets_last_frame() {
        let mut clock = FrameClock::new();
        clock.advance(1000.0);
        clock.reset();
        assert_eq!(clock.advance(50_000.0), FIRST_FRAME_DT);
    }

    #[test]
    fn test_fps_steady_60() {
        let mut clock = FrameClock::new();
        let frame_ms = 1000.0 / 60.0;
        for i in 0..=FPS_WINDOW * 2 {
            clock.advance(i as f64 * frame_ms);
        }
        assert_eq!(clock.fps(), 60);
    }
}

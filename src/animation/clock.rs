use serde::{Deserialize, Serialize};

/// Number of ticks one growth animation lasts.
pub const TOTAL_FRAMES: u32 = 100;
/// Reference tick cadence (~67 Hz).
pub const DEFAULT_TICK_INTERVAL_MS: u64 = 15;

/// Frame counter for one growth animation.
///
/// Reset on every dataset load; once `elapsed_frames >= total_frames` the
/// clock is inert until the next reset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnimationClock {
    elapsed_frames: u32,
    total_frames: u32,
}

impl Default for AnimationClock {
    fn default() -> Self {
        Self {
            elapsed_frames: 0,
            total_frames: TOTAL_FRAMES,
        }
    }
}

impl AnimationClock {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Clock positioned at `elapsed_frames`, used to sample a specific frame.
    #[must_use]
    pub fn at_frame(elapsed_frames: u32) -> Self {
        Self {
            elapsed_frames,
            total_frames: TOTAL_FRAMES,
        }
    }

    #[must_use]
    pub fn elapsed_frames(self) -> u32 {
        self.elapsed_frames
    }

    #[must_use]
    pub fn total_frames(self) -> u32 {
        self.total_frames
    }

    #[must_use]
    pub fn is_complete(self) -> bool {
        self.elapsed_frames >= self.total_frames
    }

    /// Linear progress in `[0, 1]`.
    #[must_use]
    pub fn progress(self) -> f64 {
        (f64::from(self.elapsed_frames) / f64::from(self.total_frames)).clamp(0.0, 1.0)
    }

    pub fn reset(&mut self) {
        self.elapsed_frames = 0;
    }

    /// Advances one frame. Returns `false` once the clock is complete.
    pub fn advance(&mut self) -> bool {
        if self.is_complete() {
            return false;
        }
        self.elapsed_frames += 1;
        true
    }
}

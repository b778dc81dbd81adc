//! Frame-sampled bar growth animation.
//!
//! The animation is plain state (`AnimationClock`) plus a pure transform
//! (`EasingAnimator::tick`). Scheduling lives behind `TickTimer` so a GTK
//! main loop, a test harness or any other host can drive the ticks.

mod clock;
mod easing;
mod timer;

pub use clock::{AnimationClock, DEFAULT_TICK_INTERVAL_MS, TOTAL_FRAMES};
pub use easing::{EasingAnimator, eased_progress};
pub use timer::{ManualTickTimer, TickControl, TickTimer};

use tracing::trace;

use crate::animation::AnimationClock;
use crate::core::ChartGeometry;

/// Quadratic ease-in: slow start, accelerating finish.
#[must_use]
pub fn eased_progress(progress: f64) -> f64 {
    let progress = progress.clamp(0.0, 1.0);
    progress * progress
}

/// Applies the eased clock position to every bar at once.
#[derive(Debug, Clone, Copy, Default)]
pub struct EasingAnimator;

impl EasingAnimator {
    /// Sets each bar's `current_height` to `target_height * eased_progress`.
    ///
    /// `target_height` is never touched. Returns whether any height changed,
    /// so a completed clock makes this a no-op.
    pub fn tick(clock: AnimationClock, geometry: &mut ChartGeometry) -> bool {
        let eased = eased_progress(clock.progress());
        let mut changed = false;
        for bar in geometry.bars_mut() {
            let height = bar.target_height() * eased;
            if bar.current_height() != height {
                bar.set_current_height(height);
                changed = true;
            }
        }
        trace!(
            elapsed_frames = clock.elapsed_frames(),
            eased, changed, "eased bar heights"
        );
        changed
    }
}

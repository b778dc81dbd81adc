use std::time::Duration;

use crate::error::{ChartError, ChartResult};

/// Whether a recurring timer should keep firing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickControl {
    Continue,
    Break,
}

/// Recurring-timer primitive the chart schedules its animation on.
///
/// Implementations fire the host callback (which calls
/// `ChartView::on_tick`) every `interval` until cancelled. At most one
/// schedule may be active at a time.
pub trait TickTimer {
    fn start(&mut self, interval: Duration) -> ChartResult<()>;

    /// Stops further ticks. Cancelling an inactive timer is a no-op.
    fn cancel(&mut self);

    fn is_active(&self) -> bool;
}

/// Headless timer for tests and hosts that pump ticks themselves.
///
/// It never fires on its own; it records the schedule requests it receives.
#[derive(Debug, Default)]
pub struct ManualTickTimer {
    interval: Option<Duration>,
    start_count: usize,
    cancel_count: usize,
}

impl ManualTickTimer {
    #[must_use]
    pub fn interval(&self) -> Option<Duration> {
        self.interval
    }

    #[must_use]
    pub fn start_count(&self) -> usize {
        self.start_count
    }

    #[must_use]
    pub fn cancel_count(&self) -> usize {
        self.cancel_count
    }
}

impl TickTimer for ManualTickTimer {
    fn start(&mut self, interval: Duration) -> ChartResult<()> {
        if self.interval.is_some() {
            return Err(ChartError::InvalidData(
                "tick schedule is already active".to_owned(),
            ));
        }
        if interval.is_zero() {
            return Err(ChartError::InvalidConfig(
                "tick interval must be > 0".to_owned(),
            ));
        }
        self.interval = Some(interval);
        self.start_count += 1;
        Ok(())
    }

    fn cancel(&mut self) {
        if self.interval.take().is_some() {
            self.cancel_count += 1;
        }
    }

    fn is_active(&self) -> bool {
        self.interval.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn manual_timer_refuses_overlapping_schedules() {
        let mut timer = ManualTickTimer::default();
        timer.start(Duration::from_millis(15)).expect("first start");
        assert!(timer.start(Duration::from_millis(15)).is_err());

        timer.cancel();
        timer.cancel();
        assert_eq!(timer.cancel_count(), 1);
        assert!(!timer.is_active());

        timer.start(Duration::from_millis(15)).expect("restart");
        assert_eq!(timer.start_count(), 2);
    }
}

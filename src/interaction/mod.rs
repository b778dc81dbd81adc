//! Pointer hit-testing and the hover tooltip state machine.

mod hit_test;
mod tooltip;

pub use hit_test::HitTester;
pub use tooltip::{TooltipController, TooltipState, TooltipView, tooltip_text};

pub use crate::core::PlotPoint;

//! stock-chart: animated stock-level bar chart engine.
//!
//! The crate keeps chart state explicit (`ChartGeometry`, `AnimationClock`,
//! `TooltipState`) and drives it through pure transforms, so any host
//! scheduler or drawing surface can embed it.

pub mod animation;
pub mod api;
pub mod core;
pub mod error;
pub mod interaction;
pub mod render;
pub mod telemetry;

#[cfg(feature = "gtk4-adapter")]
pub mod platform_gtk;

pub use api::{ChartView, ChartViewConfig, LoadOutcome};
pub use error::{ChartError, ChartResult};

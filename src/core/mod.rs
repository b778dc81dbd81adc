pub mod axis_ticks;
pub mod data_model;
pub mod geometry;
pub mod layout;
pub mod primitives;
pub mod scale;
pub mod types;

pub use axis_ticks::{axis_tick_target_count, quantity_axis_ticks};
pub use data_model::{CRITICAL_BELOW, ChartDataModel, ColorClass, WARNING_BELOW, top_by_quantity};
pub use geometry::{AxisBounds, BarGeometry, ChartGeometry};
pub use layout::{PlotArea, PlotMargins, PlotTransform};
pub use scale::LinearScale;
pub use types::{BarDatum, PlotPoint, Viewport};

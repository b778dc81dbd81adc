mod chart_view;
mod config;
mod frame_builder;
mod snapshot;
mod style;

pub use chart_view::{ChartView, LoadOutcome};
pub use config::ChartViewConfig;
pub use frame_builder::PLACEHOLDER_TEXT;
pub use snapshot::{CHART_SNAPSHOT_JSON_SCHEMA_V1, ChartSnapshot, ChartSnapshotJsonContractV1};
pub use style::{ChartStyle, ChartTheme};

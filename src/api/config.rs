use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::animation::DEFAULT_TICK_INTERVAL_MS;
use crate::core::data_model::{DEFAULT_AXIS_HEADROOM, DEFAULT_BAR_WIDTH, DEFAULT_EMPTY_AXIS_UPPER};
use crate::core::{ChartDataModel, PlotArea, PlotMargins, Viewport};
use crate::error::{ChartError, ChartResult};

use super::ChartTheme;

/// Public chart bootstrap configuration.
///
/// Serializable so host applications can persist chart setup next to their
/// own settings. Missing fields fall back to the reference defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartViewConfig {
    pub viewport: Viewport,
    #[serde(default = "default_tick_interval_ms")]
    pub tick_interval_ms: u64,
    #[serde(default = "default_bar_width")]
    pub bar_width: f64,
    #[serde(default = "default_axis_headroom")]
    pub axis_headroom: f64,
    #[serde(default = "default_empty_axis_upper")]
    pub empty_axis_upper: f64,
    #[serde(default = "default_title")]
    pub title: String,
    #[serde(default = "default_y_axis_label")]
    pub y_axis_label: String,
    #[serde(default)]
    pub theme: ChartTheme,
    #[serde(default)]
    pub margins: PlotMargins,
}

impl ChartViewConfig {
    #[must_use]
    pub fn new(viewport: Viewport) -> Self {
        Self {
            viewport,
            tick_interval_ms: default_tick_interval_ms(),
            bar_width: default_bar_width(),
            axis_headroom: default_axis_headroom(),
            empty_axis_upper: default_empty_axis_upper(),
            title: default_title(),
            y_axis_label: default_y_axis_label(),
            theme: ChartTheme::default(),
            margins: PlotMargins::default(),
        }
    }

    #[must_use]
    pub fn with_theme(mut self, theme: ChartTheme) -> Self {
        self.theme = theme;
        self
    }

    #[must_use]
    pub fn with_tick_interval_ms(mut self, tick_interval_ms: u64) -> Self {
        self.tick_interval_ms = tick_interval_ms;
        self
    }

    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    #[must_use]
    pub fn with_margins(mut self, margins: PlotMargins) -> Self {
        self.margins = margins;
        self
    }

    #[must_use]
    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_interval_ms)
    }

    pub fn data_model(&self) -> ChartResult<ChartDataModel> {
        ChartDataModel::new(self.bar_width, self.axis_headroom, self.empty_axis_upper)
    }

    pub fn plot_area(&self) -> ChartResult<PlotArea> {
        PlotArea::from_viewport(self.viewport, self.margins)
    }

    pub fn validate(&self) -> ChartResult<()> {
        if self.tick_interval_ms == 0 {
            return Err(ChartError::InvalidConfig(
                "tick interval must be > 0 ms".to_owned(),
            ));
        }
        self.data_model()?;
        self.plot_area()?;
        Ok(())
    }

    pub fn from_json_str(input: &str) -> ChartResult<Self> {
        let config: Self = serde_json::from_str(input)
            .map_err(|e| ChartError::InvalidConfig(format!("failed to parse config json: {e}")))?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_json_pretty(&self) -> ChartResult<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| ChartError::InvalidData(format!("failed to serialize config json: {e}")))
    }
}

fn default_tick_interval_ms() -> u64 {
    DEFAULT_TICK_INTERVAL_MS
}

fn default_bar_width() -> f64 {
    DEFAULT_BAR_WIDTH
}

fn default_axis_headroom() -> f64 {
    DEFAULT_AXIS_HEADROOM
}

fn default_empty_axis_upper() -> f64 {
    DEFAULT_EMPTY_AXIS_UPPER
}

fn default_title() -> String {
    "Top 10 Stock Levels".to_owned()
}

fn default_y_axis_label() -> String {
    "Quantity".to_owned()
}

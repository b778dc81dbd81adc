use serde::{Deserialize, Serialize};

use crate::core::{LinearScale, PlotPoint, Viewport};
use crate::error::{ChartError, ChartResult};

/// Pixel padding between the viewport edge and the plot area.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlotMargins {
    pub left: f64,
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
}

impl Default for PlotMargins {
    fn default() -> Self {
        Self {
            left: 64.0,
            top: 44.0,
            right: 20.0,
            bottom: 56.0,
        }
    }
}

impl PlotMargins {
    pub fn validate(self) -> ChartResult<()> {
        for (side, value) in [
            ("left", self.left),
            ("top", self.top),
            ("right", self.right),
            ("bottom", self.bottom),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(ChartError::InvalidConfig(format!(
                    "plot margin `{side}` must be finite and >= 0"
                )));
            }
        }
        Ok(())
    }
}

/// Pixel rectangle the bars are drawn into.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlotArea {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl PlotArea {
    pub fn from_viewport(viewport: Viewport, margins: PlotMargins) -> ChartResult<Self> {
        if !viewport.is_valid() {
            return Err(ChartError::InvalidViewport {
                width: viewport.width,
                height: viewport.height,
            });
        }
        margins.validate()?;

        let width = f64::from(viewport.width) - margins.left - margins.right;
        let height = f64::from(viewport.height) - margins.top - margins.bottom;
        if width <= 0.0 || height <= 0.0 {
            return Err(ChartError::InvalidConfig(format!(
                "plot margins leave no drawable area in {}x{} viewport",
                viewport.width, viewport.height
            )));
        }

        Ok(Self {
            left: margins.left,
            top: margins.top,
            width,
            height,
        })
    }

    #[must_use]
    pub fn right(self) -> f64 {
        self.left + self.width
    }

    #[must_use]
    pub fn bottom(self) -> f64 {
        self.top + self.height
    }

    #[must_use]
    pub fn contains(self, x: f64, y: f64) -> bool {
        x >= self.left && x <= self.right() && y >= self.top && y <= self.bottom()
    }
}

/// Maps between surface pixels and plot space for one loaded dataset.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlotTransform {
    area: PlotArea,
    x: LinearScale,
    y: LinearScale,
}

impl PlotTransform {
    pub fn new(area: PlotArea, x_domain: (f64, f64), y_domain: (f64, f64)) -> ChartResult<Self> {
        let x = LinearScale::new(x_domain, (area.left, area.right()))?;
        let y = LinearScale::new(y_domain, (area.bottom(), area.top))?;
        Ok(Self { area, x, y })
    }

    #[must_use]
    pub fn area(self) -> PlotArea {
        self.area
    }

    pub fn x_to_pixel(self, x: f64) -> ChartResult<f64> {
        self.x.domain_to_pixel(x)
    }

    pub fn y_to_pixel(self, y: f64) -> ChartResult<f64> {
        self.y.domain_to_pixel(y)
    }

    pub fn to_pixel(self, point: PlotPoint) -> ChartResult<(f64, f64)> {
        Ok((self.x_to_pixel(point.x)?, self.y_to_pixel(point.y)?))
    }

    #[must_use]
    pub fn width_to_pixels(self, width: f64) -> f64 {
        self.x.span_to_pixels(width)
    }

    #[must_use]
    pub fn height_to_pixels(self, height: f64) -> f64 {
        self.y.span_to_pixels(height)
    }

    /// Maps a surface pixel into plot space.
    ///
    /// Returns `None` for non-finite input and for pixels outside the plot area.
    #[must_use]
    pub fn to_plot(self, x: f64, y: f64) -> Option<PlotPoint> {
        if !x.is_finite() || !y.is_finite() || !self.area.contains(x, y) {
            return None;
        }
        let plot_x = self.x.pixel_to_domain(x).ok()?;
        let plot_y = self.y.pixel_to_domain(y).ok()?;
        Some(PlotPoint::new(plot_x, plot_y))
    }
}

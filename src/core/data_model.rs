use std::cmp::Reverse;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::{AxisBounds, BarDatum, BarGeometry, ChartGeometry};
use crate::error::{ChartError, ChartResult};

/// Quantities strictly below this value are critical.
pub const CRITICAL_BELOW: u64 = 10;
/// Quantities strictly below this value (and not critical) are a warning.
pub const WARNING_BELOW: u64 = 20;

pub const DEFAULT_BAR_WIDTH: f64 = 0.8;
pub const DEFAULT_AXIS_HEADROOM: f64 = 1.15;
pub const DEFAULT_EMPTY_AXIS_UPPER: f64 = 10.0;

/// Stock-level class used to pick a bar fill color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ColorClass {
    Critical,
    Warning,
    Normal,
}

impl ColorClass {
    #[must_use]
    pub const fn classify(quantity: u64) -> Self {
        if quantity < CRITICAL_BELOW {
            Self::Critical
        } else if quantity < WARNING_BELOW {
            Self::Warning
        } else {
            Self::Normal
        }
    }
}

/// Turns raw `(label, quantity)` data into render-ready bar geometry.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChartDataModel {
    bar_width: f64,
    axis_headroom: f64,
    empty_axis_upper: f64,
}

impl Default for ChartDataModel {
    fn default() -> Self {
        Self {
            bar_width: DEFAULT_BAR_WIDTH,
            axis_headroom: DEFAULT_AXIS_HEADROOM,
            empty_axis_upper: DEFAULT_EMPTY_AXIS_UPPER,
        }
    }
}

impl ChartDataModel {
    pub fn new(bar_width: f64, axis_headroom: f64, empty_axis_upper: f64) -> ChartResult<Self> {
        if !bar_width.is_finite() || bar_width <= 0.0 || bar_width > 1.0 {
            return Err(ChartError::InvalidConfig(
                "bar width must be finite and in (0, 1]".to_owned(),
            ));
        }
        if !axis_headroom.is_finite() || axis_headroom < 1.0 {
            return Err(ChartError::InvalidConfig(
                "axis headroom must be finite and >= 1".to_owned(),
            ));
        }
        if !empty_axis_upper.is_finite() || empty_axis_upper <= 0.0 {
            return Err(ChartError::InvalidConfig(
                "empty axis upper bound must be finite and > 0".to_owned(),
            ));
        }
        Ok(Self {
            bar_width,
            axis_headroom,
            empty_axis_upper,
        })
    }

    #[must_use]
    pub fn bar_width(self) -> f64 {
        self.bar_width
    }

    /// Upper bound of the quantity axis for a dataset whose largest quantity
    /// is `max_quantity`.
    #[must_use]
    pub fn axis_upper(self, max_quantity: u64) -> f64 {
        if max_quantity == 0 {
            return self.empty_axis_upper;
        }
        max_quantity as f64 * self.axis_headroom
    }

    /// Builds geometry for `data`, preserving its order.
    ///
    /// Every bar starts at zero height. Total over non-negative quantities:
    /// the only error is `ChartError::EmptyDataset` for an empty slice, which
    /// hosts render as a placeholder.
    pub fn load(self, data: &[BarDatum]) -> ChartResult<ChartGeometry> {
        if data.is_empty() {
            return Err(ChartError::EmptyDataset);
        }

        let half_width = self.bar_width * 0.5;
        let mut bars = Vec::with_capacity(data.len());
        let mut max_quantity = 0_u64;
        for (index, datum) in data.iter().enumerate() {
            max_quantity = max_quantity.max(datum.quantity);
            bars.push(BarGeometry::new(
                datum.label.clone(),
                datum.quantity,
                index as f64 - half_width,
                self.bar_width,
            ));
        }

        let axis = AxisBounds {
            lower: 0.0,
            upper: self.axis_upper(max_quantity),
        };
        debug!(
            bar_count = bars.len(),
            max_quantity,
            axis_upper = axis.upper,
            "loaded chart dataset"
        );
        Ok(ChartGeometry::new(bars, axis))
    }
}

/// Returns at most `limit` data sorted by descending quantity.
///
/// Ties keep their input order, so repeated calls over the same rows are
/// deterministic.
#[must_use]
pub fn top_by_quantity(data: impl IntoIterator<Item = BarDatum>, limit: usize) -> Vec<BarDatum> {
    let mut ranked: Vec<BarDatum> = data.into_iter().collect();
    ranked.sort_by_key(|datum| Reverse(datum.quantity));
    ranked.truncate(limit);
    ranked
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classification_boundaries() {
        assert_eq!(ColorClass::classify(0), ColorClass::Critical);
        assert_eq!(ColorClass::classify(9), ColorClass::Critical);
        assert_eq!(ColorClass::classify(10), ColorClass::Warning);
        assert_eq!(ColorClass::classify(19), ColorClass::Warning);
        assert_eq!(ColorClass::classify(20), ColorClass::Normal);
        assert_eq!(ColorClass::classify(u64::MAX), ColorClass::Normal);
    }

    #[test]
    fn all_zero_dataset_uses_floor_axis() {
        let model = ChartDataModel::default();
        assert_eq!(model.axis_upper(0), DEFAULT_EMPTY_AXIS_UPPER);
    }

    #[test]
    fn quantities_past_exact_float_range_still_load() {
        let geometry = ChartDataModel::default()
            .load(&[BarDatum::new("big", (1 << 53) + 1)])
            .expect("load");
        let bar = geometry.bar(0).expect("bar");
        assert_eq!(bar.quantity(), (1 << 53) + 1);
        assert_eq!(bar.color_class(), ColorClass::Normal);
        assert!(geometry.axis().upper.is_finite());
    }

    #[test]
    fn rejects_out_of_range_config() {
        assert!(ChartDataModel::new(0.0, 1.15, 10.0).is_err());
        assert!(ChartDataModel::new(1.5, 1.15, 10.0).is_err());
        assert!(ChartDataModel::new(0.8, 0.5, 10.0).is_err());
        assert!(ChartDataModel::new(0.8, 1.15, f64::NAN).is_err());
    }
}

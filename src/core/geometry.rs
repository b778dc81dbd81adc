use serde::{Deserialize, Serialize};

use crate::core::ColorClass;

/// Plot-space geometry of one bar.
///
/// `x_left`/`width` are in slot units (bar `i` is centered on `i`), heights in
/// quantity units. Only `current_height` changes while the chart animates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BarGeometry {
    label: String,
    quantity: u64,
    color_class: ColorClass,
    x_left: f64,
    width: f64,
    current_height: f64,
    target_height: f64,
}

impl BarGeometry {
    pub(crate) fn new(label: String, quantity: u64, x_left: f64, width: f64) -> Self {
        Self {
            label,
            quantity,
            color_class: ColorClass::classify(quantity),
            x_left,
            width,
            current_height: 0.0,
            target_height: quantity as f64,
        }
    }

    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }

    #[must_use]
    pub fn quantity(&self) -> u64 {
        self.quantity
    }

    #[must_use]
    pub fn color_class(&self) -> ColorClass {
        self.color_class
    }

    #[must_use]
    pub fn x_left(&self) -> f64 {
        self.x_left
    }

    #[must_use]
    pub fn width(&self) -> f64 {
        self.width
    }

    #[must_use]
    pub fn x_center(&self) -> f64 {
        self.x_left + self.width * 0.5
    }

    #[must_use]
    pub fn current_height(&self) -> f64 {
        self.current_height
    }

    #[must_use]
    pub fn target_height(&self) -> f64 {
        self.target_height
    }

    /// Sets the animated height, clamped into `[0, target_height]`.
    pub(crate) fn set_current_height(&mut self, height: f64) {
        debug_assert!(height.is_finite(), "bar height must stay finite");
        self.current_height = height.clamp(0.0, self.target_height);
    }
}

/// Axis range of the quantity axis; the lower bound is always zero.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AxisBounds {
    pub lower: f64,
    pub upper: f64,
}

/// Ordered bar geometry for one loaded dataset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartGeometry {
    bars: Vec<BarGeometry>,
    axis: AxisBounds,
}

impl ChartGeometry {
    pub(crate) fn new(bars: Vec<BarGeometry>, axis: AxisBounds) -> Self {
        Self { bars, axis }
    }

    #[must_use]
    pub fn bars(&self) -> &[BarGeometry] {
        &self.bars
    }

    #[must_use]
    pub fn bar(&self, index: usize) -> Option<&BarGeometry> {
        self.bars.get(index)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.bars.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bars.is_empty()
    }

    #[must_use]
    pub fn axis(&self) -> AxisBounds {
        self.axis
    }

    /// Slot-space x domain covering every bar slot with half a slot of padding.
    #[must_use]
    pub fn x_domain(&self) -> (f64, f64) {
        (-0.5, self.bars.len() as f64 - 0.5)
    }

    #[must_use]
    pub fn is_at_target(&self) -> bool {
        self.bars
            .iter()
            .all(|bar| bar.current_height == bar.target_height)
    }

    pub(crate) fn bars_mut(&mut self) -> &mut [BarGeometry] {
        &mut self.bars
    }
}

use crate::core::{BarGeometry, ChartGeometry, PlotPoint};

/// Stateless bar lookup against one geometry snapshot.
#[derive(Debug, Clone, Copy, Default)]
pub struct HitTester;

impl HitTester {
    /// Returns the index of the first bar whose current box contains `pointer`.
    ///
    /// A bar's box spans `[x_left, x_left + width)` horizontally and
    /// `[0, current_height]` vertically, so a bar that is still growing is
    /// only hit below its current top. Layout keeps bars disjoint; if they
    /// ever overlap, iteration order decides.
    #[must_use]
    pub fn locate(pointer: PlotPoint, geometry: &ChartGeometry) -> Option<usize> {
        geometry
            .bars()
            .iter()
            .position(|bar| Self::contains(bar, pointer))
    }

    #[must_use]
    pub fn contains(bar: &BarGeometry, pointer: PlotPoint) -> bool {
        let x_right = bar.x_left() + bar.width();
        pointer.x >= bar.x_left()
            && pointer.x < x_right
            && pointer.y >= 0.0
            && pointer.y <= bar.current_height()
    }
}

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::{ChartGeometry, PlotPoint};

/// Hover tooltip state. Only `TooltipController` changes it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum TooltipState {
    #[default]
    Hidden,
    Visible { bar_index: usize, quantity: u64 },
}

impl TooltipState {
    #[must_use]
    pub fn bar_index(self) -> Option<usize> {
        match self {
            Self::Hidden => None,
            Self::Visible { bar_index, .. } => Some(bar_index),
        }
    }

    #[must_use]
    pub fn is_visible(self) -> bool {
        matches!(self, Self::Visible { .. })
    }
}

/// What to draw for a visible tooltip.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TooltipView {
    /// Top-center of the hovered bar at its current height.
    pub anchor: PlotPoint,
    pub text: String,
}

#[must_use]
pub fn tooltip_text(quantity: u64) -> String {
    format!("Qty: {quantity}")
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TooltipController {
    state: TooltipState,
}

impl TooltipController {
    #[must_use]
    pub fn state(&self) -> TooltipState {
        self.state
    }

    /// Feeds one hit-test result. Returns `true` only when the state changed.
    pub fn update(&mut self, hit: Option<usize>, geometry: &ChartGeometry) -> bool {
        let next = match hit {
            Some(bar_index) => match geometry.bar(bar_index) {
                Some(bar) => TooltipState::Visible {
                    bar_index,
                    quantity: bar.quantity(),
                },
                None => {
                    debug_assert!(false, "hit index {bar_index} outside geometry");
                    TooltipState::Hidden
                }
            },
            None => TooltipState::Hidden,
        };
        self.transition(next)
    }

    /// Forces `Hidden`, e.g. when the dataset is replaced.
    pub fn hide(&mut self) -> bool {
        self.transition(TooltipState::Hidden)
    }

    #[must_use]
    pub fn view(&self, geometry: &ChartGeometry) -> Option<TooltipView> {
        let TooltipState::Visible {
            bar_index,
            quantity,
        } = self.state
        else {
            return None;
        };
        let bar = geometry.bar(bar_index)?;
        Some(TooltipView {
            anchor: PlotPoint::new(bar.x_center(), bar.current_height()),
            text: tooltip_text(quantity),
        })
    }

    fn transition(&mut self, next: TooltipState) -> bool {
        if next == self.state {
            return false;
        }
        debug!(from = ?self.state, to = ?next, "tooltip transition");
        self.state = next;
        true
    }
}

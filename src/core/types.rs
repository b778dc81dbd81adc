use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::core::primitives::{decimal_to_quantity, f64_to_quantity};
use crate::error::{ChartError, ChartResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

impl Viewport {
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    #[must_use]
    pub fn is_valid(self) -> bool {
        self.width > 0 && self.height > 0
    }
}

/// One labelled stock quantity, as delivered by the data source.
///
/// The chart never mutates a datum; reloading replaces the whole dataset.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BarDatum {
    pub label: String,
    pub quantity: u64,
}

impl BarDatum {
    #[must_use]
    pub fn new(label: impl Into<String>, quantity: u64) -> Self {
        Self {
            label: label.into(),
            quantity,
        }
    }

    /// Builds a datum from a signed store value, rejecting negative quantities.
    pub fn try_from_signed(label: impl Into<String>, quantity: i64) -> ChartResult<Self> {
        let label = label.into();
        match u64::try_from(quantity) {
            Ok(quantity) => Ok(Self { label, quantity }),
            Err(_) => Err(ChartError::InvalidQuantity {
                label,
                reason: format!("quantity must be >= 0, got {quantity}"),
            }),
        }
    }

    /// Builds a datum from a decimal column value.
    ///
    /// Negative, fractional and out-of-range values are rejected instead of
    /// being clamped or truncated.
    pub fn from_decimal(label: impl Into<String>, quantity: Decimal) -> ChartResult<Self> {
        let label = label.into();
        match decimal_to_quantity(quantity) {
            Ok(quantity) => Ok(Self { label, quantity }),
            Err(reason) => Err(ChartError::InvalidQuantity { label, reason }),
        }
    }

    /// Builds a datum from a floating-point value; non-finite values fail fast.
    pub fn from_f64(label: impl Into<String>, quantity: f64) -> ChartResult<Self> {
        let label = label.into();
        match f64_to_quantity(quantity) {
            Ok(quantity) => Ok(Self { label, quantity }),
            Err(reason) => Err(ChartError::InvalidQuantity { label, reason }),
        }
    }

    /// Converts `(label, quantity)` rows from a relational store in order.
    ///
    /// The first malformed row fails the whole batch with
    /// `ChartError::InvalidDatum` carrying that row's position.
    pub fn from_decimal_rows<S, I>(rows: I) -> ChartResult<Vec<Self>>
    where
        S: Into<String>,
        I: IntoIterator<Item = (S, Decimal)>,
    {
        rows.into_iter()
            .enumerate()
            .map(|(index, (label, quantity))| {
                Self::from_decimal(label, quantity).map_err(|err| err.at_row(index))
            })
            .collect()
    }
}

impl<S: Into<String>> From<(S, u64)> for BarDatum {
    fn from((label, quantity): (S, u64)) -> Self {
        Self::new(label, quantity)
    }
}

/// Point in plot space: x in bar-slot units, y in quantity units.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlotPoint {
    pub x: f64,
    pub y: f64,
}

impl PlotPoint {
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

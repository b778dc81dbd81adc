use crate::error::{ChartError, ChartResult};

/// Affine mapping between a data domain and a pixel range.
///
/// The pixel range may be inverted (`range_start > range_end`), which is how
/// the quantity axis grows upwards on a y-down surface.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearScale {
    domain_start: f64,
    domain_end: f64,
    range_start: f64,
    range_end: f64,
}

impl LinearScale {
    pub fn new(domain: (f64, f64), range: (f64, f64)) -> ChartResult<Self> {
        let (domain_start, domain_end) = domain;
        let (range_start, range_end) = range;
        if !domain_start.is_finite() || !domain_end.is_finite() || domain_start == domain_end {
            return Err(ChartError::InvalidData(
                "scale domain must be finite and non-zero".to_owned(),
            ));
        }
        if !range_start.is_finite() || !range_end.is_finite() || range_start == range_end {
            return Err(ChartError::InvalidData(
                "scale range must be finite and non-zero".to_owned(),
            ));
        }

        Ok(Self {
            domain_start,
            domain_end,
            range_start,
            range_end,
        })
    }

    #[must_use]
    pub fn domain(self) -> (f64, f64) {
        (self.domain_start, self.domain_end)
    }

    #[must_use]
    pub fn range(self) -> (f64, f64) {
        (self.range_start, self.range_end)
    }

    pub fn domain_to_pixel(self, value: f64) -> ChartResult<f64> {
        if !value.is_finite() {
            return Err(ChartError::InvalidData("value must be finite".to_owned()));
        }

        let normalized = (value - self.domain_start) / (self.domain_end - self.domain_start);
        Ok(self.range_start + normalized * (self.range_end - self.range_start))
    }

    pub fn pixel_to_domain(self, pixel: f64) -> ChartResult<f64> {
        if !pixel.is_finite() {
            return Err(ChartError::InvalidData("pixel must be finite".to_owned()));
        }

        let normalized = (pixel - self.range_start) / (self.range_end - self.range_start);
        Ok(self.domain_start + normalized * (self.domain_end - self.domain_start))
    }

    /// Pixel length of `span` domain units.
    #[must_use]
    pub fn span_to_pixels(self, span: f64) -> f64 {
        let ratio = (self.range_end - self.range_start) / (self.domain_end - self.domain_start);
        (span * ratio).abs()
    }
}

use crate::error::{ChartError, ChartResult};

pub const AXIS_QUANTITY_TARGET_SPACING_PX: f64 = 48.0;
pub const AXIS_QUANTITY_MIN_TICKS: usize = 2;
pub const AXIS_QUANTITY_MAX_TICKS: usize = 11;

/// Number of ticks that fits `axis_span_px` at roughly `target_spacing_px`.
#[must_use]
pub fn axis_tick_target_count(
    axis_span_px: f64,
    target_spacing_px: f64,
    min_ticks: usize,
    max_ticks: usize,
) -> usize {
    if !axis_span_px.is_finite() || axis_span_px <= 0.0 {
        return min_ticks;
    }
    if !target_spacing_px.is_finite() || target_spacing_px <= 0.0 {
        return min_ticks;
    }

    let raw = (axis_span_px / target_spacing_px).floor() as usize + 1;
    raw.clamp(min_ticks, max_ticks)
}

/// Whole-number ticks from zero up to `axis_upper` on a 1/2/5 step ladder.
///
/// Quantities are integers, so the step never drops below one.
pub fn quantity_axis_ticks(axis_upper: f64, target_count: usize) -> ChartResult<Vec<f64>> {
    if !axis_upper.is_finite() || axis_upper <= 0.0 {
        return Err(ChartError::InvalidData(
            "axis upper bound must be finite and > 0".to_owned(),
        ));
    }
    let intervals = target_count.max(AXIS_QUANTITY_MIN_TICKS) - 1;
    let step = nice_step(axis_upper / intervals as f64);

    let mut ticks = Vec::with_capacity(intervals + 2);
    let mut index = 0_u32;
    loop {
        let value = step * f64::from(index);
        if value > axis_upper + 1e-9 {
            break;
        }
        ticks.push(value);
        index += 1;
    }
    Ok(ticks)
}

fn nice_step(raw_step: f64) -> f64 {
    if raw_step <= 1.0 {
        return 1.0;
    }
    let magnitude = 10_f64.powf(raw_step.log10().floor());
    let residual = raw_step / magnitude;
    let multiplier = if residual <= 1.0 {
        1.0
    } else if residual <= 2.0 {
        2.0
    } else if residual <= 5.0 {
        5.0
    } else {
        10.0
    };
    multiplier * magnitude
}

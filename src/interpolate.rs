//! Gap filling by time-aware piecewise-linear interpolation.
//!
//! Timestamps are reduced to elapsed seconds since the first known sample of
//! the call, so large absolute epochs never erode interpolation precision.
//! Targets outside the known span yield `NaN`: the interpolator never
//! extrapolates.

use hifitime::Epoch;

use crate::helioval_errors::HeliovalError;
use crate::series::{MaskedSeries, TimeSeries};

/// Interpolate a time series onto a new set of times.
///
/// The first known timestamp becomes the zero epoch for this call only; both
/// grids are converted to elapsed seconds from it before piecewise-linear
/// interpolation.
///
/// Arguments
/// ---------
/// * `data`: known sample values
/// * `old_times`: timestamps of the known samples, same length as `data`,
///   sorted ascending (ties permitted)
/// * `new_times`: timestamps at which values are required
///
/// Return
/// ------
/// * One value per entry of `new_times`. Targets outside
///   `[old_times.first(), old_times.last()]` are `NaN`, and an empty known
///   set yields all `NaN`. [`HeliovalError::TimeGridMismatch`] if `data` and
///   `old_times` differ in length.
pub fn interp_timeseries(
    data: &[f64],
    old_times: &[Epoch],
    new_times: &[Epoch],
) -> Result<Vec<f64>, HeliovalError> {
    if data.len() != old_times.len() {
        return Err(HeliovalError::TimeGridMismatch(
            data.len(),
            old_times.len(),
        ));
    }
    if old_times.is_empty() {
        return Ok(vec![f64::NAN; new_times.len()]);
    }

    let epoch = old_times[0];
    let xs: Vec<f64> = old_times.iter().map(|t| (*t - epoch).to_seconds()).collect();

    Ok(new_times
        .iter()
        .map(|t| lerp_at(&xs, data, (*t - epoch).to_seconds()))
        .collect())
}

/// Piecewise-linear evaluation at `t` over the knots `(xs, ys)`.
///
/// `xs` is ascending; `t` outside `[xs.first(), xs.last()]` gives `NaN`.
fn lerp_at(xs: &[f64], ys: &[f64], t: f64) -> f64 {
    let last = xs.len() - 1;
    if t < xs[0] || t > xs[last] {
        return f64::NAN;
    }
    // First knot at or past t; an exact hit avoids the division so duplicate
    // knot times stay harmless.
    let pos = xs.partition_point(|&x| x < t);
    if xs[pos] == t {
        return ys[pos];
    }
    let (x0, x1) = (xs[pos - 1], xs[pos]);
    let (y0, y1) = (ys[pos - 1], ys[pos]);
    y0 + (y1 - y0) * (t - x0) / (x1 - x0)
}

impl TimeSeries {
    /// Fill the invalid samples of the series by interpolating its valid ones.
    ///
    /// Valid samples form the known set; the timestamps of invalid samples
    /// form the target set. Filled entries become valid where interpolation
    /// produced a finite value; targets outside the valid span stay invalid.
    ///
    /// Return
    /// ------
    /// * A new series on the same time grid with the gaps filled.
    pub fn fill_gaps(&self) -> Result<TimeSeries, HeliovalError> {
        let mut known_values = Vec::new();
        let mut known_times = Vec::new();
        let mut gap_times = Vec::new();
        let mut gap_indices = Vec::new();

        for (i, (&value, &valid)) in self
            .data
            .values()
            .iter()
            .zip(self.data.validity())
            .enumerate()
        {
            if valid {
                known_values.push(value);
                known_times.push(self.times[i]);
            } else {
                gap_times.push(self.times[i]);
                gap_indices.push(i);
            }
        }

        let filled = interp_timeseries(&known_values, &known_times, &gap_times)?;

        let mut values = self.data.values().to_vec();
        let mut valid = self.data.validity().to_vec();
        for (&i, value) in gap_indices.iter().zip(filled) {
            values[i] = value;
            valid[i] = value.is_finite();
        }

        TimeSeries::new(self.times.clone(), MaskedSeries::with_mask(values, valid)?)
    }
}

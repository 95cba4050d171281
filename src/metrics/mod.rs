//! Verification metrics comparing a forecast series against observations.
//!
//! Overview
//! -----------------
//! Every metric takes a forecast and an observation [`MaskedSeries`] of equal
//! length; position `i` of one corresponds to position `i` of the other. A
//! sample pair contributes to a statistic only when both sides are valid, and
//! the mask/domain bookkeeping lives entirely in the element-wise operations
//! of [`crate::series`]. Each metric here is a short algebraic transform over
//! them, so the exclusion rules cannot drift between formulas.
//!
//! Degenerate inputs (no usable pairs, a zero denominator) yield `NaN` rather
//! than an error: a caller sweeping a battery of metrics over many windows
//! gets a full result set with `NaN` holes instead of an abort. Mismatched
//! series lengths are the one loud failure
//! ([`HeliovalError::SeriesLengthMismatch`](crate::helioval_errors::HeliovalError)).
//!
//! Zero observations
//! -----------------
//! Metrics that divide by the observation exclude `o == 0` pairs through the
//! domain-masked division of [`MaskedSeries::div`];
//! [`mean_absolute_percentage_error`] additionally states the `o != 0`
//! restriction in its own body, the one place where that filter is part of
//! the metric's published contract.

pub mod absolute_error;
pub mod accuracy_ratio;
pub mod bias;
pub mod relative_error;
pub mod scaled_error;
pub mod squared_error;

pub use absolute_error::{mean_absolute_error, median_absolute_error};
pub use accuracy_ratio::{
    accuracy_ratio, geometric_mean_accuracy_ratio, mdlq, median_accuracy_ratio,
    median_log_accuracy_ratio, median_symmetric_accuracy, symmetric_accuracy,
};
pub use bias::{mean_error, mean_error_e, mean_error_stdnorm, mean_error_stdnorm_e};
pub use relative_error::{
    magnitude_of_relative_error, magnitude_relative_error, mean_absolute_percentage_error,
    mean_magnitude_relative_error, mean_magnitude_relative_error_e, mean_relative_error,
    mean_relative_error_e, relative_error,
};
pub use scaled_error::{mean_absolute_scaled_error, scaled_error};
pub use squared_error::{
    mean_squared_error, mean_squared_error_e, mean_squared_error_stdnorm,
    root_mean_squared_error, root_mean_squared_error_e, root_mean_squared_error_stdnorm,
    root_mean_squared_error_stdnorm_e,
};

use crate::helioval_errors::HeliovalError;
use crate::series::MaskedSeries;

/// Forecast error series `forecast − observation`.
///
/// The shared primitive every error-based metric builds on; a position is
/// valid only where both inputs are.
pub fn error(
    forecast: &MaskedSeries,
    obs: &MaskedSeries,
) -> Result<MaskedSeries, HeliovalError> {
    forecast.sub(obs)
}

/// Scalar division that answers `NaN` for an exactly-zero denominator.
pub(crate) fn div_or_nan(numerator: f64, denominator: f64) -> f64 {
    if denominator == 0.0 {
        f64::NAN
    } else {
        numerator / denominator
    }
}

/// Standard error of the valid samples: `std / sqrt(count)`, `NaN` when the
/// series has no valid sample.
pub(crate) fn standard_error(series: &MaskedSeries) -> f64 {
    div_or_nan(series.std(), (series.count() as f64).sqrt())
}

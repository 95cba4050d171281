//! Relative-error metrics: errors scaled by the magnitude of the observation.
//!
//! All of these divide by the observation, so pairs with `o == 0` drop out of
//! the domain-masked division; see the module note in [`crate::metrics`] on
//! how that interacts with MAPE's explicit filter.

use itertools::izip;

use crate::helioval_errors::HeliovalError;
use crate::series::MaskedSeries;

use super::{error, standard_error};

/// Relative error series, `(forecast − obs) / |obs|`.
///
/// Return
/// ------
/// * A series valid where both inputs are valid and `obs != 0`.
pub fn relative_error(
    forecast: &MaskedSeries,
    obs: &MaskedSeries,
) -> Result<MaskedSeries, HeliovalError> {
    error(forecast, obs)?.div(&obs.abs())
}

/// Mean relative error over usable pairs with a non-zero observation.
pub fn mean_relative_error(
    forecast: &MaskedSeries,
    obs: &MaskedSeries,
) -> Result<f64, HeliovalError> {
    Ok(relative_error(forecast, obs)?.mean())
}

/// Uncertainty of the mean relative error, `std / sqrt(count)` of the
/// relative-error series.
pub fn mean_relative_error_e(
    forecast: &MaskedSeries,
    obs: &MaskedSeries,
) -> Result<f64, HeliovalError> {
    Ok(standard_error(&relative_error(forecast, obs)?))
}

/// Magnitude of relative error series, `|(forecast − obs) / obs|`.
pub fn magnitude_of_relative_error(
    forecast: &MaskedSeries,
    obs: &MaskedSeries,
) -> Result<MaskedSeries, HeliovalError> {
    Ok(error(forecast, obs)?.div(obs)?.abs())
}

/// Magnitude of relative error series; alias of
/// [`magnitude_of_relative_error`].
pub fn magnitude_relative_error(
    forecast: &MaskedSeries,
    obs: &MaskedSeries,
) -> Result<MaskedSeries, HeliovalError> {
    magnitude_of_relative_error(forecast, obs)
}

/// Mean absolute percentage error (MAPE),
/// `100 × mean(|(forecast − obs) / obs|)` over pairs where `obs != 0`.
///
/// The restriction to non-zero observations is part of this metric's
/// contract: zero-observation pairs are silently excluded, never counted as
/// error.
pub fn mean_absolute_percentage_error(
    forecast: &MaskedSeries,
    obs: &MaskedSeries,
) -> Result<f64, HeliovalError> {
    let magnitude = magnitude_of_relative_error(forecast, obs)?;
    let mut sum = 0.0;
    let mut count = 0usize;
    for (&m, &valid, &o) in izip!(magnitude.values(), magnitude.validity(), obs.values()) {
        if valid && o != 0.0 {
            sum += m;
            count += 1;
        }
    }
    if count == 0 {
        return Ok(f64::NAN);
    }
    Ok(100.0 * sum / count as f64)
}

/// Mean magnitude of relative error (MMRE),
/// `mean(|(forecast − obs) / obs|)` over usable pairs.
pub fn mean_magnitude_relative_error(
    forecast: &MaskedSeries,
    obs: &MaskedSeries,
) -> Result<f64, HeliovalError> {
    Ok(magnitude_of_relative_error(forecast, obs)?.mean())
}

/// Uncertainty of the mean magnitude of relative error.
pub fn mean_magnitude_relative_error_e(
    forecast: &MaskedSeries,
    obs: &MaskedSeries,
) -> Result<f64, HeliovalError> {
    Ok(standard_error(&magnitude_of_relative_error(forecast, obs)?))
}

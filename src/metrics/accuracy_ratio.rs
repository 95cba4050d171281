//! Scale-invariant metrics built on the accuracy ratio `Q = forecast / obs`.
//!
//! The division is domain-masked, so pairs with `obs == 0` fall out of every
//! statistic here; log-based metrics further restrict to `Q > 0`.

use crate::helioval_errors::HeliovalError;
use crate::series::{percentile_of_sorted, MaskedSeries};

/// Accuracy ratio series, `Q = forecast / obs`.
///
/// Return
/// ------
/// * A series valid where both inputs are valid and `obs != 0`.
pub fn accuracy_ratio(
    forecast: &MaskedSeries,
    obs: &MaskedSeries,
) -> Result<MaskedSeries, HeliovalError> {
    forecast.div(obs)
}

/// 50th percentile of the accuracy ratio over usable, finite pairs.
///
/// Return
/// ------
/// * The percentile, `NaN` when no usable pair exists.
pub fn median_accuracy_ratio(
    forecast: &MaskedSeries,
    obs: &MaskedSeries,
) -> Result<f64, HeliovalError> {
    let mut q = accuracy_ratio(forecast, obs)?.compressed();
    if q.is_empty() {
        return Ok(f64::NAN);
    }
    q.sort_by(|a, b| a.total_cmp(b));
    Ok(percentile_of_sorted(&q, 0.5))
}

/// Median log accuracy ratio, `median(log10 Q)`.
pub fn median_log_accuracy_ratio(
    forecast: &MaskedSeries,
    obs: &MaskedSeries,
) -> Result<f64, HeliovalError> {
    Ok(accuracy_ratio(forecast, obs)?.log10().median())
}

/// Median log accuracy ratio (MdLQ); alias of [`median_log_accuracy_ratio`].
pub fn mdlq(forecast: &MaskedSeries, obs: &MaskedSeries) -> Result<f64, HeliovalError> {
    median_log_accuracy_ratio(forecast, obs)
}

/// Geometric mean of the accuracy ratio, `10^mean(log10 Q)`.
pub fn geometric_mean_accuracy_ratio(
    forecast: &MaskedSeries,
    obs: &MaskedSeries,
) -> Result<f64, HeliovalError> {
    Ok(10f64.powf(accuracy_ratio(forecast, obs)?.log10().mean()))
}

/// Symmetric accuracy, `100 × (exp(median(|log10 Q|)) − 1)`.
pub fn symmetric_accuracy(
    forecast: &MaskedSeries,
    obs: &MaskedSeries,
) -> Result<f64, HeliovalError> {
    let m = accuracy_ratio(forecast, obs)?.log10().abs().median();
    Ok(100.0 * (m.exp() - 1.0))
}

/// Median symmetric accuracy, the same formula as [`symmetric_accuracy`]
/// computed directly from the forecast/observation quotient.
pub fn median_symmetric_accuracy(
    forecast: &MaskedSeries,
    obs: &MaskedSeries,
) -> Result<f64, HeliovalError> {
    let m = forecast.div(obs)?.log10().abs().median();
    Ok(100.0 * (m.exp() - 1.0))
}

//! Scaled-error metrics: forecast skill against a naive baseline
//! (MASE-style).

use itertools::izip;

use crate::helioval_errors::HeliovalError;
use crate::series::MaskedSeries;

/// Scaled error series, `(obs − forecast) / mean(obs[1..] − baseline)`.
///
/// With no explicit baseline the observations shifted by one sample are used,
/// i.e. the normalizer is the mean one-step change of the observations
/// (a naive persistence forecast).
///
/// Arguments
/// ---------
/// * `forecast`: forecast series
/// * `obs`: observation series, same length
/// * `relative`: optional baseline, one sample shorter than `obs`; `None`
///   selects `obs[..n−1]` (one-step persistence)
///
/// Return
/// ------
/// * The scaled-error series; every position is invalid when the normalizer
///   is zero or cannot be computed (fewer than two samples, no usable
///   one-step pairs). [`HeliovalError::BaselineLengthMismatch`] when an
///   explicit baseline has the wrong length.
pub fn scaled_error(
    forecast: &MaskedSeries,
    obs: &MaskedSeries,
    relative: Option<&MaskedSeries>,
) -> Result<MaskedSeries, HeliovalError> {
    if forecast.len() != obs.len() {
        return Err(HeliovalError::SeriesLengthMismatch(
            forecast.len(),
            obs.len(),
        ));
    }
    let n = obs.len();
    if n == 0 {
        return MaskedSeries::with_mask(Vec::new(), Vec::new());
    }

    let normalizer = match relative {
        Some(baseline) => {
            if baseline.len() + 1 != n {
                return Err(HeliovalError::BaselineLengthMismatch(
                    baseline.len(),
                    n - 1,
                ));
            }
            masked_diff_mean(
                &obs.values()[1..],
                &obs.validity()[1..],
                baseline.values(),
                baseline.validity(),
            )
        }
        None => masked_diff_mean(
            &obs.values()[1..],
            &obs.validity()[1..],
            &obs.values()[..n - 1],
            &obs.validity()[..n - 1],
        ),
    };

    let normalizer_ok = normalizer != 0.0 && normalizer.is_finite();
    let mut values = Vec::with_capacity(n);
    let mut valid = Vec::with_capacity(n);
    for (&f, &fv, &o, &ov) in izip!(
        forecast.values(),
        forecast.validity(),
        obs.values(),
        obs.validity()
    ) {
        let ok = normalizer_ok && fv && ov;
        values.push(if ok { (o - f) / normalizer } else { f64::NAN });
        valid.push(ok);
    }
    MaskedSeries::with_mask(values, valid)
}

/// Mean absolute scaled error (MASE), `mean(|scaled_error|)` over usable
/// pairs.
pub fn mean_absolute_scaled_error(
    forecast: &MaskedSeries,
    obs: &MaskedSeries,
    relative: Option<&MaskedSeries>,
) -> Result<f64, HeliovalError> {
    Ok(scaled_error(forecast, obs, relative)?.abs().mean())
}

/// Mean of `a − b` over positions valid on both sides, `NaN` when none.
fn masked_diff_mean(a: &[f64], a_valid: &[bool], b: &[f64], b_valid: &[bool]) -> f64 {
    let mut sum = 0.0;
    let mut count = 0usize;
    for (&x, &xv, &y, &yv) in izip!(a, a_valid, b, b_valid) {
        if xv && yv {
            sum += x - y;
            count += 1;
        }
    }
    if count == 0 {
        f64::NAN
    } else {
        sum / count as f64
    }
}

//! Bias metrics: mean forecast error and its uncertainty, raw and normalized
//! by the spread of the observations.

use crate::helioval_errors::HeliovalError;
use crate::series::MaskedSeries;

use super::{div_or_nan, error, standard_error};

/// Mean error of the forecast, `mean(forecast − obs)`.
///
/// Arguments
/// ---------
/// * `forecast`: forecast series
/// * `obs`: observation series, same length
///
/// Return
/// ------
/// * The mean over usable pairs, `NaN` when there are none.
pub fn mean_error(forecast: &MaskedSeries, obs: &MaskedSeries) -> Result<f64, HeliovalError> {
    Ok(error(forecast, obs)?.mean())
}

/// Uncertainty of the mean error, `std(forecast − obs) / sqrt(count)`.
pub fn mean_error_e(forecast: &MaskedSeries, obs: &MaskedSeries) -> Result<f64, HeliovalError> {
    let e = error(forecast, obs)?;
    Ok(standard_error(&e))
}

/// Mean error normalized by the standard deviation of the observed values.
///
/// The normalizer ranges over the observation series' own valid samples; a
/// zero spread gives `NaN`.
pub fn mean_error_stdnorm(
    forecast: &MaskedSeries,
    obs: &MaskedSeries,
) -> Result<f64, HeliovalError> {
    Ok(div_or_nan(error(forecast, obs)?.mean(), obs.std()))
}

/// Uncertainty of the mean error, normalized by the standard deviation of the
/// observed values.
pub fn mean_error_stdnorm_e(
    forecast: &MaskedSeries,
    obs: &MaskedSeries,
) -> Result<f64, HeliovalError> {
    let e = error(forecast, obs)?;
    Ok(div_or_nan(standard_error(&e), obs.std()))
}

#[cfg(test)]
mod bias_test {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_mean_error() {
        let f = MaskedSeries::new(vec![1.0, 2.0, 3.0, 4.0]);
        let o = MaskedSeries::new(vec![1.0, 2.0, 4.0, 4.0]);
        assert_relative_eq!(mean_error(&f, &o).unwrap(), 0.25);
    }

    #[test]
    fn test_mean_error_excludes_masked_pairs() {
        let f = MaskedSeries::new(vec![1.0, 2.0, 3.0]);
        let o =
            MaskedSeries::with_mask(vec![1.0, 5.0, 4.0], vec![true, false, true]).unwrap();
        assert_relative_eq!(mean_error(&f, &o).unwrap(), -0.5);
    }

    #[test]
    fn test_mean_error_e() {
        let f = MaskedSeries::new(vec![1.0, 2.0, 3.0, 4.0]);
        let o = MaskedSeries::new(vec![1.0, 2.0, 4.0, 4.0]);
        // e = [0, 0, -1, 0]: std = sqrt(3)/4, count = 4
        assert_relative_eq!(
            mean_error_e(&f, &o).unwrap(),
            3f64.sqrt() / 8.0,
            epsilon = 1e-12
        );
    }

    #[test]
    fn test_mean_error_stdnorm() {
        let f = MaskedSeries::new(vec![1.0, 2.0, 3.0, 4.0]);
        let o = MaskedSeries::new(vec![1.0, 2.0, 4.0, 4.0]);
        assert_relative_eq!(
            mean_error_stdnorm(&f, &o).unwrap(),
            0.25 / 1.299038105676658,
            epsilon = 1e-12
        );
    }

    #[test]
    fn test_constant_observations_give_nan() {
        let f = MaskedSeries::new(vec![1.0, 2.0]);
        let o = MaskedSeries::new(vec![3.0, 3.0]);
        assert!(mean_error_stdnorm(&f, &o).unwrap().is_nan());
        assert!(mean_error_stdnorm_e(&f, &o).unwrap().is_nan());
    }

    #[test]
    fn test_all_masked_gives_nan() {
        let f = MaskedSeries::with_mask(vec![1.0, 2.0], vec![false, false]).unwrap();
        let o = MaskedSeries::new(vec![1.0, 2.0]);
        assert!(mean_error(&f, &o).unwrap().is_nan());
        assert!(mean_error_e(&f, &o).unwrap().is_nan());
    }
}

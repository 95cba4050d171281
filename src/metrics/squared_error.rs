//! Squared-error metrics: MSE and RMSE with their normalized and uncertainty
//! variants.

use crate::helioval_errors::HeliovalError;
use crate::series::MaskedSeries;

use super::{div_or_nan, error, standard_error};

/// Mean squared error, `mean((forecast − obs)²)` over usable pairs.
pub fn mean_squared_error(
    forecast: &MaskedSeries,
    obs: &MaskedSeries,
) -> Result<f64, HeliovalError> {
    Ok(error(forecast, obs)?.squared().mean())
}

/// Uncertainty of the mean squared error: the standard error of the squared
/// residuals, `std(e²) / sqrt(count)`.
pub fn mean_squared_error_e(
    forecast: &MaskedSeries,
    obs: &MaskedSeries,
) -> Result<f64, HeliovalError> {
    Ok(standard_error(&error(forecast, obs)?.squared()))
}

/// Mean squared error normalized by the standard deviation of the observed
/// values.
pub fn mean_squared_error_stdnorm(
    forecast: &MaskedSeries,
    obs: &MaskedSeries,
) -> Result<f64, HeliovalError> {
    Ok(div_or_nan(mean_squared_error(forecast, obs)?, obs.std()))
}

/// Root mean squared error, `sqrt(mean((forecast − obs)²))`.
pub fn root_mean_squared_error(
    forecast: &MaskedSeries,
    obs: &MaskedSeries,
) -> Result<f64, HeliovalError> {
    Ok(mean_squared_error(forecast, obs)?.sqrt())
}

/// Uncertainty of the root mean squared error,
/// `sqrt(std(e²) / sqrt(count))`.
pub fn root_mean_squared_error_e(
    forecast: &MaskedSeries,
    obs: &MaskedSeries,
) -> Result<f64, HeliovalError> {
    Ok(mean_squared_error_e(forecast, obs)?.sqrt())
}

/// Root mean squared error normalized by the standard deviation of the
/// observed values.
pub fn root_mean_squared_error_stdnorm(
    forecast: &MaskedSeries,
    obs: &MaskedSeries,
) -> Result<f64, HeliovalError> {
    Ok(div_or_nan(
        root_mean_squared_error(forecast, obs)?,
        obs.std(),
    ))
}

/// Uncertainty of the normalized root mean squared error.
pub fn root_mean_squared_error_stdnorm_e(
    forecast: &MaskedSeries,
    obs: &MaskedSeries,
) -> Result<f64, HeliovalError> {
    Ok(div_or_nan(
        root_mean_squared_error_e(forecast, obs)?,
        obs.std(),
    ))
}

#[cfg(test)]
mod squared_error_test {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_mse_and_rmse() {
        let f = MaskedSeries::new(vec![1.0, 2.0, 3.0, 4.0]);
        let o = MaskedSeries::new(vec![1.0, 2.0, 4.0, 4.0]);
        assert_relative_eq!(mean_squared_error(&f, &o).unwrap(), 0.25);
        assert_relative_eq!(root_mean_squared_error(&f, &o).unwrap(), 0.5);
    }

    #[test]
    fn test_mask_exclusion() {
        let f = MaskedSeries::new(vec![1.0, 2.0, 3.0]);
        let o =
            MaskedSeries::with_mask(vec![1.0, 5.0, 4.0], vec![true, false, true]).unwrap();
        // usable residuals are [0, -1]
        assert_relative_eq!(mean_squared_error(&f, &o).unwrap(), 0.5);
    }

    #[test]
    fn test_rmse_e() {
        let f = MaskedSeries::new(vec![1.0, 2.0, 3.0, 4.0]);
        let o = MaskedSeries::new(vec![1.0, 2.0, 4.0, 4.0]);
        // e² = [0, 0, 1, 0]: std(e²) = sqrt(3)/4, count = 4
        let expected = (3f64.sqrt() / 8.0).sqrt();
        assert_relative_eq!(
            root_mean_squared_error_e(&f, &o).unwrap(),
            expected,
            epsilon = 1e-12
        );
    }

    #[test]
    fn test_stdnorm_variants() {
        let f = MaskedSeries::new(vec![1.0, 2.0, 3.0, 4.0]);
        let o = MaskedSeries::new(vec![1.0, 2.0, 4.0, 4.0]);
        let std_o = o.std();
        assert_relative_eq!(
            root_mean_squared_error_stdnorm(&f, &o).unwrap(),
            0.5 / std_o,
            epsilon = 1e-12
        );
        assert_relative_eq!(
            mean_squared_error_stdnorm(&f, &o).unwrap(),
            0.25 / std_o,
            epsilon = 1e-12
        );
    }

    #[test]
    fn test_all_masked_gives_nan() {
        let f = MaskedSeries::with_mask(vec![1.0], vec![false]).unwrap();
        let o = MaskedSeries::new(vec![1.0]);
        assert!(mean_squared_error(&f, &o).unwrap().is_nan());
        assert!(root_mean_squared_error(&f, &o).unwrap().is_nan());
        assert!(root_mean_squared_error_e(&f, &o).unwrap().is_nan());
    }
}

//! Absolute-error metrics.

use crate::helioval_errors::HeliovalError;
use crate::series::MaskedSeries;

use super::error;

/// Mean absolute error, `mean(|forecast − obs|)` over usable pairs.
pub fn mean_absolute_error(
    forecast: &MaskedSeries,
    obs: &MaskedSeries,
) -> Result<f64, HeliovalError> {
    Ok(error(forecast, obs)?.abs().mean())
}

/// Median absolute error, `median(|forecast − obs|)` over usable pairs.
pub fn median_absolute_error(
    forecast: &MaskedSeries,
    obs: &MaskedSeries,
) -> Result<f64, HeliovalError> {
    Ok(error(forecast, obs)?.abs().median())
}

#[cfg(test)]
mod absolute_error_test {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_mean_absolute_error() {
        let f = MaskedSeries::new(vec![1.0, 2.0, 3.0, 4.0]);
        let o = MaskedSeries::new(vec![1.0, 2.0, 4.0, 4.0]);
        assert_relative_eq!(mean_absolute_error(&f, &o).unwrap(), 0.25);
    }

    #[test]
    fn test_median_absolute_error() {
        let f = MaskedSeries::new(vec![1.0, 2.0, 3.0, 4.0]);
        let o = MaskedSeries::new(vec![1.0, 2.0, 4.0, 4.0]);
        // |e| = [0, 0, 1, 0]
        assert_relative_eq!(median_absolute_error(&f, &o).unwrap(), 0.0);
    }

    #[test]
    fn test_sign_does_not_cancel() {
        let f = MaskedSeries::new(vec![0.0, 2.0]);
        let o = MaskedSeries::new(vec![1.0, 1.0]);
        assert_relative_eq!(mean_absolute_error(&f, &o).unwrap(), 1.0);
    }

    #[test]
    fn test_all_masked_gives_nan() {
        let f = MaskedSeries::with_mask(vec![1.0], vec![false]).unwrap();
        let o = MaskedSeries::new(vec![1.0]);
        assert!(mean_absolute_error(&f, &o).unwrap().is_nan());
        assert!(median_absolute_error(&f, &o).unwrap().is_nan());
    }
}

//! Masked series: the data model shared by the interpolator and the metrics.
//!
//! Overview
//! -----------------
//! `MaskedSeries` pairs a vector of samples with a same-length validity mask
//! (`true` = usable). Element-wise operations propagate validity with a
//! logical AND: a result position is usable **only when both operands are**.
//! Division and `log10` additionally invalidate positions whose input lies
//! outside the operation's domain (zero divisor, non-positive argument), so
//! downstream reductions never see manufactured infinities.
//!
//! Reductions (`count`, `mean`, `std`, `median`) range over valid positions
//! only and return `NaN` when none exists. Invalid positions carry an ignored
//! `NaN` payload.
//!
//! `TimeSeries` attaches a [`hifitime::Epoch`] per sample; gap filling over it
//! lives in [`crate::interpolate`].

use hifitime::Epoch;

use crate::helioval_errors::HeliovalError;

/// A sample series with a validity mask (`true` = usable).
#[derive(Debug, Clone, PartialEq)]
pub struct MaskedSeries {
    values: Vec<f64>,
    valid: Vec<bool>,
}

impl MaskedSeries {
    /// Build a series in which every sample is valid.
    pub fn new(values: Vec<f64>) -> Self {
        let valid = vec![true; values.len()];
        MaskedSeries { values, valid }
    }

    /// Build a series from samples and an explicit validity mask.
    ///
    /// Arguments
    /// ---------
    /// * `values`: the samples
    /// * `valid`: same-length mask, `true` marking a usable sample
    ///
    /// Return
    /// ------
    /// * The series, or [`HeliovalError::MaskLengthMismatch`] if the mask
    ///   length differs from the sample count.
    pub fn with_mask(values: Vec<f64>, valid: Vec<bool>) -> Result<Self, HeliovalError> {
        if values.len() != valid.len() {
            return Err(HeliovalError::MaskLengthMismatch(
                values.len(),
                valid.len(),
            ));
        }
        Ok(MaskedSeries { values, valid })
    }

    /// Build a series invalidating every sample above `ceiling`.
    ///
    /// Instruments commonly encode missing data as values above a documented
    /// validity maximum; this turns that convention into a mask.
    pub fn masked_greater(values: Vec<f64>, ceiling: f64) -> Self {
        let valid = values.iter().map(|&v| v <= ceiling).collect();
        MaskedSeries { values, valid }
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn values(&self) -> &[f64] {
        &self.values
    }

    pub fn validity(&self) -> &[bool] {
        &self.valid
    }

    /// Number of valid samples.
    pub fn count(&self) -> usize {
        self.valid.iter().filter(|&&v| v).count()
    }

    /// The valid samples, in order.
    pub fn compressed(&self) -> Vec<f64> {
        self.values
            .iter()
            .zip(&self.valid)
            .filter(|(_, &v)| v)
            .map(|(&x, _)| x)
            .collect()
    }

    /// Mean of the valid samples, `NaN` when there are none.
    pub fn mean(&self) -> f64 {
        let n = self.count();
        if n == 0 {
            return f64::NAN;
        }
        let sum: f64 = self
            .values
            .iter()
            .zip(&self.valid)
            .filter(|(_, &v)| v)
            .map(|(&x, _)| x)
            .sum();
        sum / n as f64
    }

    /// Population standard deviation of the valid samples, `NaN` when there
    /// are none.
    pub fn std(&self) -> f64 {
        let n = self.count();
        if n == 0 {
            return f64::NAN;
        }
        let mean = self.mean();
        let sq_sum: f64 = self
            .values
            .iter()
            .zip(&self.valid)
            .filter(|(_, &v)| v)
            .map(|(&x, _)| (x - mean) * (x - mean))
            .sum();
        (sq_sum / n as f64).sqrt()
    }

    /// Median of the valid samples, `NaN` when there are none.
    pub fn median(&self) -> f64 {
        let mut v = self.compressed();
        v.sort_by(|a, b| a.total_cmp(b));
        median_of_sorted(&v)
    }

    /// Absolute value, preserving the mask.
    pub fn abs(&self) -> Self {
        self.map(f64::abs)
    }

    /// Element-wise square, preserving the mask.
    pub fn squared(&self) -> Self {
        self.map(|x| x * x)
    }

    /// Base-10 logarithm; non-positive samples fall out of the domain and are
    /// invalidated.
    pub fn log10(&self) -> Self {
        let mut values = Vec::with_capacity(self.len());
        let mut valid = Vec::with_capacity(self.len());
        for (&x, &v) in self.values.iter().zip(&self.valid) {
            let ok = v && x > 0.0;
            values.push(if ok { x.log10() } else { f64::NAN });
            valid.push(ok);
        }
        MaskedSeries { values, valid }
    }

    /// Element-wise difference `self − rhs`.
    ///
    /// A result position is valid only where both operands are.
    ///
    /// Return
    /// ------
    /// * The difference series, or [`HeliovalError::SeriesLengthMismatch`]
    ///   when the operands differ in length.
    pub fn sub(&self, rhs: &MaskedSeries) -> Result<Self, HeliovalError> {
        self.zip_with(rhs, |a, b| (a - b, true))
    }

    /// Element-wise quotient `self / rhs`.
    ///
    /// A result position is valid only where both operands are **and** the
    /// divisor is non-zero; zero-divisor positions are invalidated rather
    /// than producing infinities.
    ///
    /// Return
    /// ------
    /// * The quotient series, or [`HeliovalError::SeriesLengthMismatch`]
    ///   when the operands differ in length.
    pub fn div(&self, rhs: &MaskedSeries) -> Result<Self, HeliovalError> {
        self.zip_with(rhs, |a, b| (a / b, b != 0.0))
    }

    fn map(&self, op: impl Fn(f64) -> f64) -> Self {
        let values = self
            .values
            .iter()
            .zip(&self.valid)
            .map(|(&x, &v)| if v { op(x) } else { f64::NAN })
            .collect();
        MaskedSeries {
            values,
            valid: self.valid.clone(),
        }
    }

    fn zip_with(
        &self,
        rhs: &MaskedSeries,
        op: impl Fn(f64, f64) -> (f64, bool),
    ) -> Result<Self, HeliovalError> {
        if self.len() != rhs.len() {
            return Err(HeliovalError::SeriesLengthMismatch(self.len(), rhs.len()));
        }
        let mut values = Vec::with_capacity(self.len());
        let mut valid = Vec::with_capacity(self.len());
        for ((&a, &av), (&b, &bv)) in self
            .values
            .iter()
            .zip(&self.valid)
            .zip(rhs.values.iter().zip(&rhs.valid))
        {
            let (x, in_domain) = op(a, b);
            let ok = av && bv && in_domain;
            values.push(if ok { x } else { f64::NAN });
            valid.push(ok);
        }
        Ok(MaskedSeries { values, valid })
    }
}

/// A masked series with one absolute timestamp per sample.
#[derive(Debug, Clone, PartialEq)]
pub struct TimeSeries {
    pub(crate) times: Vec<Epoch>,
    pub(crate) data: MaskedSeries,
}

impl TimeSeries {
    /// Attach timestamps to a masked series.
    ///
    /// Return
    /// ------
    /// * The timestamped series, or [`HeliovalError::TimeGridMismatch`] when
    ///   the sample and timestamp counts differ.
    pub fn new(times: Vec<Epoch>, data: MaskedSeries) -> Result<Self, HeliovalError> {
        if times.len() != data.len() {
            return Err(HeliovalError::TimeGridMismatch(data.len(), times.len()));
        }
        Ok(TimeSeries { times, data })
    }

    pub fn times(&self) -> &[Epoch] {
        &self.times
    }

    pub fn data(&self) -> &MaskedSeries {
        &self.data
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

/// Median of already-sorted data (even lengths average the middle pair).
pub(crate) fn median_of_sorted(sorted: &[f64]) -> f64 {
    let n = sorted.len();
    if n == 0 {
        return f64::NAN;
    }
    if n % 2 == 1 {
        sorted[n / 2]
    } else {
        0.5 * (sorted[n / 2 - 1] + sorted[n / 2])
    }
}

/// Percentile of already-sorted data with linear interpolation between ranks.
///
/// Arguments
/// ---------
/// * `sorted`: the data, ascending
/// * `fraction`: the percentile as a fraction in [0, 1] (0.5 = median)
pub(crate) fn percentile_of_sorted(sorted: &[f64], fraction: f64) -> f64 {
    if sorted.is_empty() {
        return f64::NAN;
    }
    if fraction <= 0.0 {
        return sorted[0];
    }
    if fraction >= 1.0 {
        return sorted[sorted.len() - 1];
    }
    let rank = fraction * (sorted.len() - 1) as f64;
    let lower = rank.floor() as usize;
    let upper = rank.ceil() as usize;
    if lower == upper {
        sorted[lower]
    } else {
        let weight = rank - lower as f64;
        sorted[lower] * (1.0 - weight) + sorted[upper] * weight
    }
}

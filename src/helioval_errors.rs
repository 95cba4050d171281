use thiserror::Error;

/// Errors raised when a caller violates one of the crate's length contracts.
///
/// Degenerate numeric situations (no usable samples, zero denominators) are
/// never reported through this enum: they yield `NaN` results so that a batch
/// of statistics over many windows keeps going. Mismatched lengths, on the
/// other hand, would silently misalign every downstream statistic and are
/// rejected loudly.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum HeliovalError {
    #[error("Forecast and observation series differ in length: {0} vs {1}")]
    SeriesLengthMismatch(usize, usize),

    #[error("Values and validity mask differ in length: {0} vs {1}")]
    MaskLengthMismatch(usize, usize),

    #[error("Sample values and timestamps differ in length: {0} vs {1}")]
    TimeGridMismatch(usize, usize),

    #[error("Scaled-error baseline has {0} samples, expected {1} (one fewer than the series)")]
    BaselineLengthMismatch(usize, usize),
}

use helioval::series::MaskedSeries;

/// Build a fully-valid series from a slice.
pub fn series(values: &[f64]) -> MaskedSeries {
    MaskedSeries::new(values.to_vec())
}

/// Build a series with an explicit validity mask.
pub fn masked(values: &[f64], valid: &[bool]) -> MaskedSeries {
    MaskedSeries::with_mask(values.to_vec(), valid.to_vec()).unwrap()
}

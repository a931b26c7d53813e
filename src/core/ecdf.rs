use crate::core::error::{EcdfError, Result};
use crate::core::model::PERCENTILES;

/// True when `values` is ascending under IEEE total ordering.
pub fn is_ascending(values: &[f64]) -> bool {
    values.is_sorted_by(|a, b| a.total_cmp(b).is_le())
}

/// Samples a sorted, non-empty slice at 100 evenly spaced ranks.
///
/// Rank `i` takes `sorted[floor(len * i / 100)]`: nearest rank from below,
/// never interpolated, so every output value is an input value. The last
/// rank lands on the maximum whenever `len <= 100`.
pub fn sample(sorted: &[f64]) -> Result<Vec<f64>> {
    if !is_ascending(sorted) {
        return Err(EcdfError::invalid("sample accepts only sorted lists"));
    }
    if sorted.is_empty() {
        return Err(EcdfError::invalid(
            "The length of the data was zero. There must be at least one data point.",
        ));
    }

    let len = sorted.len();
    Ok((0..PERCENTILES)
        .map(|i| sorted[len * i / PERCENTILES])
        .collect())
}

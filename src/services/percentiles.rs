//! Quantile helpers for already-sorted slices.
//!
//! - Empty input => `None`.
//! - `quantile <= 0` => first element.
//! - `quantile >= 1` => last element.
//! - Otherwise the position `quantile * (len - 1)` is interpolated linearly
//!   between the neighbouring order statistics (R-7, the spreadsheet default).

/// Returns the quantile of a slice that is already sorted in ascending order.
pub fn quantile_sorted(sorted_values: &[f64], quantile: f64) -> Option<f64> {
    let last = sorted_values.len().checked_sub(1)?;

    if quantile <= 0.0 {
        return sorted_values.first().copied();
    }
    if quantile >= 1.0 {
        return sorted_values.last().copied();
    }

    let position = quantile * last as f64;
    let lower = position.floor() as usize;
    let upper = position.ceil() as usize;
    let low_value = *sorted_values.get(lower)?;
    let high_value = *sorted_values.get(upper)?;
    if lower == upper {
        return Some(low_value);
    }
    Some(low_value + (high_value - low_value) * (position - lower as f64))
}

/// Sorts a copy of `values` ascending, using the IEEE total order.
pub fn sorted_copy(values: &[f64]) -> Vec<f64> {
    let mut sorted = values.to_vec();
    sorted.sort_by(f64::total_cmp);
    sorted
}

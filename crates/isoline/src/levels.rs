//! Contour level derivation from a data range.

/// Evenly spaced levels bracketing `[min_val, max_val]`.
///
/// The first level is `floor(min/interval) * interval` and the last is
/// `ceil(max/interval) * interval`, so at least one level sits at or below
/// the minimum and one at or above the maximum. Levels are computed as
/// `start + i * interval` rather than accumulated, keeping the step exact.
pub fn level_sequence(min_val: f64, max_val: f64, interval: f64) -> Vec<f64> {
    if interval <= 0.0 || !min_val.is_finite() || !max_val.is_finite() || max_val < min_val {
        return vec![];
    }

    let start = (min_val / interval).floor() * interval;
    let end = (max_val / interval).ceil() * interval;
    let count = ((end - start) / interval).round() as usize + 1;

    (0..count).map(|i| start + i as f64 * interval).collect()
}

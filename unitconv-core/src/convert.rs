//! Applying conversion paths to values

use crate::ConversionPath;

/// Fold `value` through every edge of `path`, left to right.
///
/// An empty path returns `value` unchanged. There is no failure mode:
/// overflow and NaN follow IEEE-754 and propagate to the result.
pub fn apply(path: &ConversionPath, value: f64) -> f64 {
    path.iter().fold(value, |acc, edge| edge.convert(acc))
}

/// Apply `path` once per value
pub fn apply_all(path: &ConversionPath, values: &[f64]) -> Vec<f64> {
    values.iter().map(|&v| apply(path, v)).collect()
}

//! Centered sample coordinates for square patches

use ndarray::{Array1, Array2};

/// Evenly spaced ramp of `size` values centered around zero
///
/// Sample `i` (1-based) sits at `i / size - 0.5`, so the ramp runs from
/// `1/size - 0.5` up to `0.5`. For `size == 4` this is
/// `[-0.25, 0.0, 0.25, 0.5]`; the grid is offset half a sample from symmetric.
pub fn centered_ramp(size: usize) -> Array1<f64> {
    let n = size as f64;
    Array1::from_shape_fn(size, |i| (i + 1) as f64 / n - 0.5)
}

/// Column and row coordinate grids built from the same ramp
///
/// Returns `(xm, ym)` where `xm[[r, c]] == ramp[c]` and `ym[[r, c]] == ramp[r]`.
pub fn meshgrid(ramp: &Array1<f64>) -> (Array2<f64>, Array2<f64>) {
    let n = ramp.len();
    let xm = Array2::from_shape_fn((n, n), |(_, c)| ramp.get(c).copied().unwrap_or(0.0));
    let ym = Array2::from_shape_fn((n, n), |(r, _)| ramp.get(r).copied().unwrap_or(0.0));
    (xm, ym)
}

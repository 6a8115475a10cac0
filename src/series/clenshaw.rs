//! Clenshaw summation of Fourier sine series in even multiples of an angle.
//!
//! Evaluates `y = sum(c[l] * sin(2 l x), l = 1..n)` from `sin(x)` and `cos(x)`
//! alone. The recurrence is the standard Clenshaw scheme for the Chebyshev-like
//! basis `sin(2 l x)`, unrolled by two so the accumulators return to their
//! original roles after each step.

use ndarray::{Array1, ArrayView1};
use num_traits::Float;

/// Sum `coeffs[l] * sin(2 l x)` for `l` in `1..coeffs.len()`.
///
/// `coeffs[0]` is never read. The caller guarantees `sinx² + cosx² ≈ 1`; this
/// is not checked.
pub fn sin_cos_series<T: Float>(sinx: T, cosx: T, coeffs: &[T]) -> T {
    let mut n = coeffs.len().saturating_sub(1);
    // One past the last coefficient.
    let mut index = n + 1;
    let two = T::one() + T::one();
    // 2 * cos(2x)
    let ar = two * (cosx - sinx) * (cosx + sinx);

    let mut k0 = if n & 1 == 1 {
        index -= 1;
        coeffs[index]
    } else {
        T::zero()
    };
    let mut k1 = T::zero();

    n /= 2;
    while n > 0 {
        n -= 1;
        index -= 1;
        k1 = ar * k0 - k1 + coeffs[index];
        index -= 1;
        k0 = ar * k1 - k0 + coeffs[index];
    }

    two * sinx * cosx * k0
}

/// Evaluate a series at every angle (radians) in `angles`.
pub fn sin_cos_series_batch(angles: ArrayView1<'_, f64>, coeffs: &[f64]) -> Array1<f64> {
    angles.mapv(|x| {
        let (s, c) = x.sin_cos();
        sin_cos_series(s, c, coeffs)
    })
}

/// Direct summation with one `sin` call per harmonic.
///
/// Reference for testing the recurrence; accumulates error from the repeated
/// trigonometric evaluations and is not used on the production path.
#[doc(hidden)]
pub fn sin_series_direct(x: f64, coeffs: &[f64]) -> f64 {
    coeffs
        .iter()
        .enumerate()
        .skip(1)
        .map(|(l, &c)| c * (2.0 * l as f64 * x).sin())
        .sum()
}

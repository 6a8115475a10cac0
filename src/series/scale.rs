//! Scale factors A1 and A2.
//!
//! A1 − 1 is the mean value of the derivative of
//! `I1 = ∫ sqrt(1 + k² sin²σ) dσ`, and A2 − 1 the same for
//! `I2 = ∫ 1 / sqrt(1 + k² sin²σ) dσ`, both with `k² = 4 eps / (1 − eps)²`.
//! The numerator polynomial is chosen by `order / 2`, so an odd order shares
//! the polynomial of the even order below it.

use super::order::SeriesOrder;
use super::tables;

/// A1 − 1 truncated at `order`.
pub fn evaluate_a1(order: SeriesOrder, eps: f64) -> f64 {
    let t = tables::A1[order.get() / 2].eval(eps * eps);
    (t + eps) / (1.0 - eps)
}

/// A2 − 1 truncated at `order`.
pub fn evaluate_a2(order: SeriesOrder, eps: f64) -> f64 {
    let t = tables::A2[order.get() / 2].eval(eps * eps);
    (t - eps) / (1.0 + eps)
}

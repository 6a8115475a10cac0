//! Per-harmonic Fourier coefficients C1, C1p and C2.
//!
//! `c[l] = eps^l * P(eps²) / D` with `P` and `D` read from the table row for
//! the requested order. The power of eps is built by repeated multiplication,
//! so every coefficient vanishes identically on the sphere (eps = 0).

use super::coeffs::{Coeffs, Family, C1, C1p, C2};
use super::order::SeriesOrder;
use super::poly::Rational;
use super::tables;

fn fill<F: Family>(order: SeriesOrder, table: &[Rational], eps: f64) -> Coeffs<F> {
    let eps2 = eps * eps;
    let mut values = Vec::with_capacity(F::len(order));
    values.push(0.0);
    let mut d = eps;
    for (i, p) in table.iter().enumerate() {
        if i > 0 {
            d *= eps;
        }
        values.push(p.eval_scaled(d, eps2));
    }
    Coeffs::from_generated(order, values)
}

/// Coefficients C1[1..=order] of the distance integral B1.
pub fn evaluate_c1_coeffs(order: SeriesOrder, eps: f64) -> Coeffs<C1> {
    fill(order, tables::C1[order.get()], eps)
}

/// Coefficients C1p[1..=order] of the inverse of B1.
pub fn evaluate_c1p_coeffs(order: SeriesOrder, eps: f64) -> Coeffs<C1p> {
    fill(order, tables::C1P[order.get()], eps)
}

/// Coefficients C2[1..=order] of the reduced-length integral B2.
pub fn evaluate_c2_coeffs(order: SeriesOrder, eps: f64) -> Coeffs<C2> {
    fill(order, tables::C2[order.get()], eps)
}

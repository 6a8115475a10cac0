//! A3 coefficients: the scale factor of the longitude integral I3 as a
//! polynomial in eps whose coefficients are polynomials in n.

use super::coeffs::{Coeffs, A3};
use super::order::SeriesOrder;
use super::poly::horner;
use super::tables;

/// Coefficients of eps^0 .. eps^(order-1) of A3, evaluated at third flattening `n`.
pub fn evaluate_a3_coeffs(order: SeriesOrder, n: f64) -> Coeffs<A3> {
    let values = tables::A3[order.get()]
        .iter()
        .map(|p| p.eval(n))
        .collect();
    Coeffs::from_generated(order, values)
}

impl Coeffs<A3> {
    /// The A3 scale factor at `eps`.
    pub fn evaluate(&self, eps: f64) -> f64 {
        horner(eps, self.as_slice())
    }
}

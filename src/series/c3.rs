//! C3 coefficients of the longitude integral, built in two stages.
//!
//! The C3x table depends only on the ellipsoid (through n) and is computed
//! once. Each geodesic line then collapses it into per-harmonic values at its
//! own eps with [`evaluate_c3_coeffs`].

use super::coeffs::{Coeffs, Family, C3, C3x};
use super::order::SeriesOrder;
use super::poly::horner;
use super::tables;

/// Triangular table of C3 polynomial coefficients at third flattening `n`.
///
/// Harmonic `l` (1 ≤ l < order) owns `order − l` consecutive entries, lowest
/// power of eps first. Orders 0 and 1 give an empty table.
pub fn evaluate_c3x_coeffs(order: SeriesOrder, n: f64) -> Coeffs<C3x> {
    let values = tables::C3X[order.get()]
        .iter()
        .map(|p| p.eval(n))
        .collect();
    Coeffs::from_generated(order, values)
}

/// Collapse a C3x table into C3[1..order] at `eps`. Entry 0 is left at zero.
pub fn evaluate_c3_coeffs(c3x: &Coeffs<C3x>, eps: f64) -> Coeffs<C3> {
    let order = c3x.order();
    let size = C3::len(order);
    let table = c3x.as_slice();

    let mut values = vec![0.0; size];
    let mut mult = 1.0;
    let mut offset = 0;
    for (i, value) in values.iter_mut().enumerate().skip(1) {
        // Degree of the polynomial in eps for this harmonic.
        let m = size - i;
        mult *= eps;
        *value = mult * horner(eps, &table[offset..offset + m]);
        offset += m;
    }
    debug_assert_eq!(offset, table.len(), "C3x table not fully consumed");

    Coeffs::from_generated(order, values)
}

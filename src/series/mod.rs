//! Series expansions for the geodesic integrals and their Clenshaw evaluation.
//!
//! Coefficient sequences are generated once per (order, parameter) and then
//! evaluated at many angles:
//!
//! ```
//! use geoseries::series::{evaluate_c1_coeffs, SeriesOrder};
//!
//! let c1 = evaluate_c1_coeffs(SeriesOrder::DEFAULT, 0.0034);
//! let sigma: f64 = 0.8;
//! let b1 = c1.sum(sigma.sin(), sigma.cos());
//! assert!(b1.abs() < 0.01);
//! ```

use crate::error::SeriesError;

pub mod a3;
pub mod c3;
pub mod clenshaw;
pub mod coeffs;
pub mod harmonic;
pub mod order;
pub mod poly;
pub mod scale;
mod tables;

#[cfg(test)]
mod nested;

pub use a3::evaluate_a3_coeffs;
pub use c3::{evaluate_c3_coeffs, evaluate_c3x_coeffs};
pub use clenshaw::{sin_cos_series, sin_cos_series_batch};
pub use coeffs::{Coeffs, Family, Fourier, SeriesFamily, A3, C1, C1p, C2, C3, C3x};
pub use harmonic::{evaluate_c1_coeffs, evaluate_c1p_coeffs, evaluate_c2_coeffs};
pub use order::SeriesOrder;
pub use poly::horner;
pub use scale::{evaluate_a1, evaluate_a2};

/// Generate any family by name, returning the raw values.
///
/// `param` is eps for A1, A2, C1, C1p and C2, and n for A3, C3x and C3. C3 also
/// needs the `eps` at which its C3x table is collapsed. The scalar families come
/// back as a single-element vector.
pub fn generate(
    family: SeriesFamily,
    order: SeriesOrder,
    param: f64,
    eps: Option<f64>,
) -> Result<Vec<f64>, SeriesError> {
    let values = match family {
        SeriesFamily::A1 => vec![evaluate_a1(order, param)],
        SeriesFamily::A2 => vec![evaluate_a2(order, param)],
        SeriesFamily::A3 => evaluate_a3_coeffs(order, param).into_vec(),
        SeriesFamily::C1 => evaluate_c1_coeffs(order, param).into_vec(),
        SeriesFamily::C1p => evaluate_c1p_coeffs(order, param).into_vec(),
        SeriesFamily::C2 => evaluate_c2_coeffs(order, param).into_vec(),
        SeriesFamily::C3x => evaluate_c3x_coeffs(order, param).into_vec(),
        SeriesFamily::C3 => {
            let eps = eps.ok_or_else(|| {
                SeriesError::InvalidParameter("C3 requires eps in addition to n".into())
            })?;
            evaluate_c3_coeffs(&evaluate_c3x_coeffs(order, param), eps).into_vec()
        }
    };
    Ok(values)
}

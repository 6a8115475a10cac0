//! Fourier series expansions of the ellipsoidal geodesic integrals, with
//! Clenshaw summation for evaluating them.
//!
//! - [`series`]: coefficient generators for A1, A2, A3, C1, C1p, C2, C3x, C3
//!   and the evaluator [`series::sin_cos_series`]
//! - [`geodesic`]: ellipsoid parameters, per-line series bundles, meridian arcs

pub mod error;
pub mod geodesic;
pub mod series;
#[cfg(feature = "python")]
mod py;

#[cfg(feature = "python")]
use pyo3::prelude::*;

/// A Python module implemented in Rust.
#[cfg(feature = "python")]
#[pymodule]
fn geoseries(m: &Bound<'_, PyModule>) -> PyResult<()> {
    py::register(m)?;
    Ok(())
}

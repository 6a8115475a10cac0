//! PyO3 bindings for coefficient generation and series evaluation.

use numpy::{PyArray1, PyReadonlyArray1};
use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

use crate::error::SeriesError;
use crate::geodesic::{Ellipsoid, MeridianArc};
use crate::series::{self, SeriesFamily, SeriesOrder};

fn to_py_err(e: SeriesError) -> PyErr {
    PyValueError::new_err(e.to_string())
}

/// Generate the coefficients of one series family.
///
/// Args:
///     family: Family name ("A1", "A2", "A3", "C1", "C1p", "C2", "C3x", "C3").
///     order: Truncation order, 0 to 8.
///     param: eps for A1/A2/C1/C1p/C2, third flattening n for A3/C3x/C3.
///     eps: Expansion parameter for C3 (required for that family only).
///
/// Returns:
///     List of coefficients. For C1/C1p/C2/C3 index 0 is unused.
#[pyfunction]
#[pyo3(signature = (family, order, param, eps=None))]
pub fn coefficients(family: &str, order: usize, param: f64, eps: Option<f64>) -> PyResult<Vec<f64>> {
    let family = SeriesFamily::from_name(family).map_err(to_py_err)?;
    let order = SeriesOrder::new(order).map_err(to_py_err)?;
    series::generate(family, order, param, eps).map_err(to_py_err)
}

/// Evaluate sum(coeffs[l] * sin(2 l x)) at every angle in `x` (radians).
///
/// Args:
///     x: 1D array of angles.
///     coeffs: Coefficients; index 0 is ignored.
///
/// Returns:
///     1D array of series values, same length as `x`.
#[pyfunction]
pub fn sin_cos_series<'py>(
    py: Python<'py>,
    x: PyReadonlyArray1<'py, f64>,
    coeffs: Vec<f64>,
) -> PyResult<Bound<'py, PyArray1<f64>>> {
    let angles = x.as_array().to_owned();
    let out = py.allow_threads(move || series::sin_cos_series_batch(angles.view(), &coeffs));
    Ok(PyArray1::from_owned_array(py, out))
}

/// Meridian arc length from the equator, in metres.
///
/// Args:
///     lat: 1D array of geodetic latitudes in degrees.
///     order: Truncation order, 0 to 8. Defaults to 6.
///     a: Semi-major axis in metres. Defaults to WGS84.
///     f: Flattening. Defaults to WGS84.
#[pyfunction]
#[pyo3(signature = (lat, order=6, a=6_378_137.0, f=1.0 / 298.257_223_563))]
pub fn meridian_distance<'py>(
    py: Python<'py>,
    lat: PyReadonlyArray1<'py, f64>,
    order: usize,
    a: f64,
    f: f64,
) -> PyResult<Bound<'py, PyArray1<f64>>> {
    let order = SeriesOrder::new(order).map_err(to_py_err)?;
    let ellipsoid = Ellipsoid::try_new(a, f).map_err(to_py_err)?;
    let lat = lat.as_array().to_owned();
    let out = py.allow_threads(move || {
        let arc = MeridianArc::new(&ellipsoid, order);
        lat.mapv(|deg| arc.distance(deg.to_radians()))
    });
    Ok(PyArray1::from_owned_array(py, out))
}

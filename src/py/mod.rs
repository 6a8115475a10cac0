use pyo3::prelude::*;

mod series;

/// Register all Python-visible functions.
pub fn register(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(series::coefficients, m)?)?;
    m.add_function(wrap_pyfunction!(series::sin_cos_series, m)?)?;
    m.add_function(wrap_pyfunction!(series::meridian_distance, m)?)?;
    m.add("MAX_ORDER", crate::series::SeriesOrder::MAX)?;
    Ok(())
}

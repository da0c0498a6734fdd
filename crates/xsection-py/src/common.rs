use nalgebra::Vector2;
use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;
use xsection::SectionError;

/// Python `[(x, y), ...]` → vertex list; ring closure is left to the engine.
pub fn points_from_py(pts: Vec<(f64, f64)>) -> Vec<Vector2<f64>> {
    pts.into_iter().map(|(x, y)| Vector2::new(x, y)).collect()
}

pub fn map_section_err(err: SectionError) -> PyErr {
    PyValueError::new_err(err.to_string())
}

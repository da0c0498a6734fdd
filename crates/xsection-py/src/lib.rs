//! PyO3 bindings for the `xsection` engine.
//!
//! Notes
//! - Keep bindings thin and predictable: polygons cross the boundary as lists of
//!   `(x, y)` tuples, results as plain tuples/strings.
//! - Engine errors (too few vertices, zero area) surface as `ValueError`.

mod common;
mod section;

use pyo3::prelude::*;

#[pymodule]
fn xsection_native(_py: Python, m: &PyModule) -> PyResult<()> {
    m.add("__version__", xsection::VERSION)?;
    section::register(m)
}

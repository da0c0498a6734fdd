//! Section-property bindings (kept separate so `lib.rs` stays tiny).

use crate::common::{map_section_err, points_from_py};
use pyo3::prelude::*;
use xsection::{Ring, SectionCfg};

/// Signed polygon area (positive for counter-clockwise vertices).
#[pyfunction]
pub fn area(pts: Vec<(f64, f64)>) -> PyResult<f64> {
    let pts = points_from_py(pts);
    let ring = Ring::new(&pts).map_err(map_section_err)?;
    Ok(xsection::area(&ring))
}

/// Area centroid `(cx, cy)`.
#[pyfunction]
pub fn centroid(pts: Vec<(f64, f64)>) -> PyResult<(f64, f64)> {
    let c = xsection::centroid_of(&points_from_py(pts)).map_err(map_section_err)?;
    Ok((c.x, c.y))
}

/// `(Ixx, Iyy, Ixy)` about the input origin, or about the centroid when `centroidal=True`.
#[pyfunction]
#[pyo3(signature = (pts, centroidal = false))]
pub fn inertia(pts: Vec<(f64, f64)>, centroidal: bool) -> PyResult<(f64, f64, f64)> {
    let pts = points_from_py(pts);
    let ring = Ring::new(&pts).map_err(map_section_err)?;
    let i = if centroidal {
        xsection::centroidal_inertia(&ring, SectionCfg::default())
    } else {
        xsection::inertia(&ring, SectionCfg::default())
    }
    .map_err(map_section_err)?;
    Ok((i.ixx, i.iyy, i.ixy))
}

/// `(I1, I2, theta)` from the three inertia scalars; theta in radians.
#[pyfunction]
pub fn principal(ixx: f64, iyy: f64, ixy: f64) -> (f64, f64, f64) {
    let p = xsection::principal(ixx, iyy, ixy);
    (p.i1, p.i2, p.theta)
}

/// Multi-line text summary of all properties.
#[pyfunction]
pub fn summary(pts: Vec<(f64, f64)>) -> PyResult<String> {
    let props = xsection::section_properties(&points_from_py(pts)).map_err(map_section_err)?;
    Ok(xsection::report::summary(&props))
}

pub fn register(m: &PyModule) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(area, m)?)?;
    m.add_function(wrap_pyfunction!(centroid, m)?)?;
    m.add_function(wrap_pyfunction!(inertia, m)?)?;
    m.add_function(wrap_pyfunction!(principal, m)?)?;
    m.add_function(wrap_pyfunction!(summary, m)?)?;
    Ok(())
}

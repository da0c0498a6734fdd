//! Area moments of a closed polygon via per-edge cross terms.
//!
//! Every sum runs over the `N` edges of a `Ring` with `c_i = x_i·y_{i+1} − x_{i+1}·y_i`:
//! - area:     `A = Σ c_i / 2` (signed, positive for counter-clockwise)
//! - centroid: `cx = Σ (x_i + x_{i+1}) c_i / 6A`, `cy = Σ (y_i + y_{i+1}) c_i / 6A`
//! - inertia:  `Ixx = Σ (y_i² + y_i y_{i+1} + y_{i+1}²) c_i / 12`,
//!   `Iyy = Σ (x_i² + x_i x_{i+1} + x_{i+1}²) c_i / 12`,
//!   `Ixy = Σ (x_i y_{i+1} + 2x_i y_i + 2x_{i+1} y_{i+1} + x_{i+1} y_i) c_i / 24`
//!
//! `inertia` reports moments about the input origin. The centroidal variant is a
//! separate call (`centroidal_inertia`) so existing results stay comparable.

use nalgebra::Vector2;

use super::ring::{cross, Ring};
use super::types::{Inertia, SectionCfg};
use crate::error::SectionError;

/// Signed shoelace area. Degenerate rings return 0 (or a tiny residue) without error.
pub fn area(ring: &Ring<'_>) -> f64 {
    let s: f64 = ring.edges().map(|(p, q)| cross(p, q)).sum();
    s / 2.0
}

/// Area, failing with `DegenerateArea` when it is zero within `cfg`.
pub(crate) fn nonzero_area(ring: &Ring<'_>, cfg: SectionCfg) -> Result<f64, SectionError> {
    let a = area(ring);
    if cfg.is_degenerate(a, ring.extent()) {
        return Err(SectionError::DegenerateArea { area: a });
    }
    Ok(a)
}

/// Area centroid `(cx, cy)`.
pub fn centroid(ring: &Ring<'_>, cfg: SectionCfg) -> Result<Vector2<f64>, SectionError> {
    let a = nonzero_area(ring, cfg)?;
    Ok(centroid_with_area(ring, a))
}

fn centroid_with_area(ring: &Ring<'_>, a: f64) -> Vector2<f64> {
    let mut sx = 0.0;
    let mut sy = 0.0;
    for (p, q) in ring.edges() {
        let c = cross(p, q);
        sx += (p.x + q.x) * c;
        sy += (p.y + q.y) * c;
    }
    Vector2::new(sx / (6.0 * a), sy / (6.0 * a))
}

/// Second moments and product of area about the origin of the input coordinates.
///
/// No parallel-axis shift is applied, so `Ixx`/`Iyy` are only guaranteed
/// non-negative when measured about the centroid (see `centroidal_inertia`).
/// Degenerate rings are rejected for consistency with `centroid`.
pub fn inertia(ring: &Ring<'_>, cfg: SectionCfg) -> Result<Inertia, SectionError> {
    nonzero_area(ring, cfg)?;
    Ok(origin_inertia(ring))
}

fn origin_inertia(ring: &Ring<'_>) -> Inertia {
    let mut sxx = 0.0;
    let mut syy = 0.0;
    let mut sxy = 0.0;
    for (p, q) in ring.edges() {
        let c = cross(p, q);
        sxx += (p.y * p.y + p.y * q.y + q.y * q.y) * c;
        syy += (p.x * p.x + p.x * q.x + q.x * q.x) * c;
        sxy += (p.x * q.y + 2.0 * p.x * p.y + 2.0 * q.x * q.y + q.x * p.y) * c;
    }
    Inertia::new(sxx / 12.0, syy / 12.0, sxy / 24.0)
}

/// Second moments and product of area about the centroid (parallel-axis shifted).
pub fn centroidal_inertia(ring: &Ring<'_>, cfg: SectionCfg) -> Result<Inertia, SectionError> {
    let a = nonzero_area(ring, cfg)?;
    let c = centroid_with_area(ring, a);
    Ok(origin_inertia(ring).about_centroid(a, c))
}

/// Area, centroid and origin-referenced inertia sharing one area evaluation.
pub(crate) fn moments(
    ring: &Ring<'_>,
    cfg: SectionCfg,
) -> Result<(f64, Vector2<f64>, Inertia), SectionError> {
    let a = nonzero_area(ring, cfg)?;
    Ok((a, centroid_with_area(ring, a), origin_inertia(ring)))
}

use std::fmt;

/// Errors surfaced by the section-property engine.
///
/// Floating-point overflow is not represented here: non-finite intermediate
/// sums propagate as `inf`/`NaN` in the returned values.
#[derive(Clone, Debug, PartialEq)]
pub enum SectionError {
    /// Fewer than three ring vertices (after dropping an explicit closing vertex).
    InvalidPolygon { vertices: usize },
    /// Enclosed area is zero within tolerance; centroid and inertia are undefined.
    DegenerateArea { area: f64 },
}

impl fmt::Display for SectionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SectionError::InvalidPolygon { vertices } => write!(
                f,
                "polygon has {vertices} distinct ring vertices (needs ≥3)"
            ),
            SectionError::DegenerateArea { area } => {
                write!(f, "polygon encloses no area (A = {area:e})")
            }
        }
    }
}

impl std::error::Error for SectionError {}

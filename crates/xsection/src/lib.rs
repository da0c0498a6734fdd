//! Cross-sectional properties of planar polygons.
//!
//! Area, centroid, second moments / product of area and principal axes of a
//! simple (possibly non-convex) polygon given as ordered 2D vertices.
//!
//! Conventions
//! - Points are `nalgebra::Vector2<f64>`; the ring is implicitly closed.
//! - Area is signed (counter-clockwise positive) and orientation is never fixed up.
//! - `inertia` reports moments about the input origin; use `centroidal_inertia`
//!   or `SectionProperties::centroidal_inertia` for moments about the centroid.
//! - Floating-point overflow is not trapped; `inf`/`NaN` propagate to the caller.

pub mod api;
pub mod error;
pub mod geom2;
pub mod outline;
pub mod report;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use error::SectionError;
pub use geom2::{
    area, area_of, centroid, centroid_of, centroidal_inertia, inertia, inertia_of, principal,
    section_properties, section_properties_with, Inertia, Principal, Ring, SectionCfg,
    SectionProperties,
};
pub use nalgebra::Vector2 as Vec2;

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::error::SectionError;
    pub use crate::geom2::rand::{draw_star_polygon, ReplayToken, StarCfg, VertexCount};
    pub use crate::geom2::{
        area, centroid, centroidal_inertia, inertia, principal, section_properties,
        section_properties_with, Inertia, Principal, Ring, SectionCfg, SectionProperties,
    };
    pub use crate::outline::{outline_geometry, Outline, OutlineCfg};
    pub use crate::report::{summary, Report};
    pub use nalgebra::Vector2 as Vec2;
}


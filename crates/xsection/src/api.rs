//! Curated surface for callers outside this crate (CLI, Python bindings).
//!
//! Keeps the binaries on one import path so internal module moves do not ripple.

// Engine
pub use crate::geom2::{
    area, area_of, centroid, centroid_of, centroidal_inertia, inertia, inertia_of, principal,
    section_properties, section_properties_with, Inertia, Principal, Ring, SectionCfg,
    SectionProperties,
};
pub use crate::error::SectionError;
// Presentation helpers
pub use crate::outline::{outline_geometry, Outline, OutlineCfg, Segment};
pub use crate::report::{summary, Report};
// Random polygons
pub use crate::geom2::rand::{
    draw_star_polygon, ReplayToken as StarReplay, StarCfg, VertexCount,
};

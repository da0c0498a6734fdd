//! Planar section properties of simple polygons.
//!
//! Purpose
//! - Turn an ordered vertex list into area, centroid, second moments / product
//!   of area and the principal-axis decomposition.
//! - Keep every stage a pure function of a borrowed `Ring`; no caching, no state.
//!
//! Pipeline
//! - `Ring` (closure normalization) → `area` → `centroid` → `inertia` → `principal`.
//! - Area is signed (CCW positive); orientation is never corrected.
//! - `inertia` is taken about the input origin. `centroidal_inertia` applies the
//!   parallel-axis shift as a separate, explicit step.
//!
//! Code cross-refs: `Ring`, `SectionCfg`, `Inertia`, `Principal`, `SectionProperties`

mod moments;
mod principal;
pub mod rand;
mod ring;
mod types;

pub use moments::{area, centroid, centroidal_inertia, inertia};
pub use principal::principal;
pub use ring::{cross, Ring};
pub use types::{Inertia, Principal, SectionCfg, SectionProperties};

use nalgebra::Vector2;

use crate::error::SectionError;

/// Full property set with default tolerances.
pub fn section_properties(points: &[Vector2<f64>]) -> Result<SectionProperties, SectionError> {
    section_properties_with(points, SectionCfg::default())
}

/// Full property set; fails fast on invalid or degenerate input.
pub fn section_properties_with(
    points: &[Vector2<f64>],
    cfg: SectionCfg,
) -> Result<SectionProperties, SectionError> {
    let ring = Ring::new(points)?;
    let (area, centroid, inertia) = moments::moments(&ring, cfg)?;
    Ok(SectionProperties {
        area,
        centroid,
        inertia,
        principal: inertia.principal(),
    })
}

/// Signed area of a raw vertex list.
pub fn area_of(points: &[Vector2<f64>]) -> Result<f64, SectionError> {
    Ok(area(&Ring::new(points)?))
}

/// Centroid of a raw vertex list with default tolerances.
pub fn centroid_of(points: &[Vector2<f64>]) -> Result<Vector2<f64>, SectionError> {
    centroid(&Ring::new(points)?, SectionCfg::default())
}

/// Origin-referenced inertia of a raw vertex list with default tolerances.
pub fn inertia_of(points: &[Vector2<f64>]) -> Result<Inertia, SectionError> {
    inertia(&Ring::new(points)?, SectionCfg::default())
}

#[cfg(test)]
mod tests;

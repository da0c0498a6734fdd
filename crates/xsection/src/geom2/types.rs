//! Value types and tolerances for planar section properties.
//!
//! - `SectionCfg`: centralizes the degeneracy tolerance used before dividing by `A`.
//! - `Inertia`: second moments and product of area `(Ixx, Iyy, Ixy)`.
//! - `Principal`: principal moments `I1 >= I2` and orientation `theta`.
//! - `SectionProperties`: the full result of one computation.
//!
//! Code cross-refs: `moments::{area,centroid,inertia}`, `principal::principal`

use nalgebra::Vector2;

/// Section configuration (tolerances).
#[derive(Clone, Copy, Debug)]
pub struct SectionCfg {
    /// Relative area tolerance. A ring is degenerate when
    /// `|A| <= eps_area * extent²`, `extent` being the larger bounding-box side.
    pub eps_area: f64,
}

impl Default for SectionCfg {
    fn default() -> Self {
        Self { eps_area: 1e-12 }
    }
}

impl SectionCfg {
    /// True when `area` is indistinguishable from zero at the given length scale.
    ///
    /// Non-finite areas (NaN, or `inf` after overflow) are not flagged; they
    /// propagate to the caller unchanged. A negative `eps_area` acts as zero, so an
    /// exactly-zero area is always degenerate.
    #[inline]
    pub fn is_degenerate(&self, area: f64, extent: f64) -> bool {
        area.is_finite() && area.abs() <= self.eps_area.max(0.0) * extent * extent
    }
}

/// Second moments `Ixx = ∫y² dA`, `Iyy = ∫x² dA` and product `Ixy = ∫xy dA`.
///
/// Values from `moments::inertia` are taken about the origin of the input
/// coordinates, not about the centroid. Use `about_centroid` for the latter.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Inertia {
    pub ixx: f64,
    pub iyy: f64,
    pub ixy: f64,
}

impl Inertia {
    #[inline]
    pub fn new(ixx: f64, iyy: f64, ixy: f64) -> Self {
        Self { ixx, iyy, ixy }
    }

    /// Parallel-axis shift from origin-referenced moments to centroidal ones:
    /// `(Ixx − A·cy², Iyy − A·cx², Ixy − A·cx·cy)`.
    #[inline]
    pub fn about_centroid(&self, area: f64, centroid: Vector2<f64>) -> Inertia {
        Inertia {
            ixx: self.ixx - area * centroid.y * centroid.y,
            iyy: self.iyy - area * centroid.x * centroid.x,
            ixy: self.ixy - area * centroid.x * centroid.y,
        }
    }

    /// Trace of the 2×2 tensor, invariant under rotation.
    #[inline]
    pub fn trace(&self) -> f64 {
        self.ixx + self.iyy
    }

    #[inline]
    pub fn principal(&self) -> Principal {
        super::principal::principal(self.ixx, self.iyy, self.ixy)
    }
}

/// Principal moments and orientation.
///
/// `i1 >= i2`; `theta` (radians) rotates the x-axis onto the `i1` axis.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Principal {
    pub i1: f64,
    pub i2: f64,
    pub theta: f64,
}

impl Principal {
    /// Unit directions of the two principal axes: `theta` and `theta + π/2`.
    pub fn axes(&self) -> (Vector2<f64>, Vector2<f64>) {
        let (s, c) = self.theta.sin_cos();
        (Vector2::new(c, s), Vector2::new(-s, c))
    }
}

/// Area, centroid, origin-referenced inertia and its principal decomposition.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SectionProperties {
    /// Signed area; positive for counter-clockwise rings.
    pub area: f64,
    pub centroid: Vector2<f64>,
    pub inertia: Inertia,
    pub principal: Principal,
}

impl SectionProperties {
    /// `(A, cx, cy, Ixx, Iyy, Ixy, I1, I2, theta)` in report order.
    pub fn scalars(&self) -> [f64; 9] {
        [
            self.area,
            self.centroid.x,
            self.centroid.y,
            self.inertia.ixx,
            self.inertia.iyy,
            self.inertia.ixy,
            self.principal.i1,
            self.principal.i2,
            self.principal.theta,
        ]
    }

    /// Moments about the centroid derived from the stored origin-referenced ones.
    pub fn centroidal_inertia(&self) -> Inertia {
        self.inertia.about_centroid(self.area, self.centroid)
    }
}

//! Drawing geometry for a section outline with centroid and principal axes.
//!
//! Purpose
//! - Compute everything a renderer needs (closed ring, padded view box, centroid,
//!   axis segments, pixel projection) as plain data, so drawing backends hold no
//!   geometry logic and no shared state.
//!
//! Conventions
//! - Border around the shape is `border_frac` of the larger bounding-box side.
//! - Each principal axis extends `axis_frac` of the smaller side on both sides of
//!   the centroid. The major axis follows `theta`, the minor one `theta + π/2`.
//! - Pixel space has y pointing down; `project` flips it and keeps aspect 1:1.

use nalgebra::Vector2;

use crate::error::SectionError;
use crate::geom2::{section_properties_with, Ring, SectionCfg, SectionProperties};

/// Rendering parameters (explicit, per call).
#[derive(Clone, Copy, Debug)]
pub struct OutlineCfg {
    /// Output size in pixels `(width, height)`.
    pub size: (u32, u32),
    pub border_frac: f64,
    pub axis_frac: f64,
}

impl Default for OutlineCfg {
    fn default() -> Self {
        Self {
            size: (800, 800),
            border_frac: 0.05,
            axis_frac: 0.10,
        }
    }
}

/// Line segment `a → b` in section coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Segment {
    pub a: Vector2<f64>,
    pub b: Vector2<f64>,
}

/// Everything needed to draw one section.
#[derive(Clone, Debug)]
pub struct Outline {
    /// Closed ring (first == last).
    pub ring: Vec<Vector2<f64>>,
    /// Padded view box in section coordinates.
    pub view_min: Vector2<f64>,
    pub view_max: Vector2<f64>,
    pub major: Segment,
    pub minor: Segment,
    pub props: SectionProperties,
    pub size: (u32, u32),
}

impl Outline {
    /// Map a section point to pixel coordinates (y down, equal aspect, centered).
    pub fn project(&self, p: Vector2<f64>) -> Vector2<f64> {
        let (w, h) = (f64::from(self.size.0), f64::from(self.size.1));
        let span = self.view_max - self.view_min;
        let scale = if span.x > 0.0 && span.y > 0.0 {
            (w / span.x).min(h / span.y)
        } else {
            1.0
        };
        let used = span * scale;
        let off = Vector2::new((w - used.x) / 2.0, (h - used.y) / 2.0);
        Vector2::new(
            off.x + (p.x - self.view_min.x) * scale,
            off.y + (self.view_max.y - p.y) * scale,
        )
    }
}

/// Build drawing geometry for `points`.
pub fn outline_geometry(
    points: &[Vector2<f64>],
    cfg: &OutlineCfg,
    section: SectionCfg,
) -> Result<Outline, SectionError> {
    let props = section_properties_with(points, section)?;
    let ring = Ring::new(points)?;
    let (lo, hi) = ring.bounds();
    let d = hi - lo;
    let border = cfg.border_frac * d.x.max(d.y);
    let pad = Vector2::new(border, border);
    let length = cfg.axis_frac * d.x.min(d.y);
    let (u, v) = props.principal.axes();
    let c = props.centroid;
    Ok(Outline {
        ring: ring.closed(),
        view_min: lo - pad,
        view_max: hi + pad,
        major: Segment {
            a: c - u * length,
            b: c + u * length,
        },
        minor: Segment {
            a: c - v * length,
            b: c + v * length,
        },
        props,
        size: cfg.size,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::vector;

    fn rect() -> Vec<Vector2<f64>> {
        vec![
            vector![0.0, 0.0],
            vector![4.0, 0.0],
            vector![4.0, 2.0],
            vector![0.0, 2.0],
        ]
    }

    #[test]
    fn border_and_axis_lengths() {
        let o = outline_geometry(&rect(), &OutlineCfg::default(), SectionCfg::default()).unwrap();
        assert_eq!(o.ring.len(), 5);
        assert!((o.view_min - vector![-0.2, -0.2]).norm() < 1e-12);
        assert!((o.view_max - vector![4.2, 2.2]).norm() < 1e-12);
        // both segments are centered on the centroid with half-length 0.2
        for s in [o.major, o.minor] {
            assert!(((s.a + s.b) / 2.0 - o.props.centroid).norm() < 1e-12);
            assert!(((s.b - s.a).norm() - 0.4).abs() < 1e-12);
        }
        assert!((o.major.b - o.major.a).dot(&(o.minor.b - o.minor.a)).abs() < 1e-12);
    }

    #[test]
    fn projection_flips_y_and_keeps_aspect() {
        let cfg = OutlineCfg {
            size: (440, 440),
            ..OutlineCfg::default()
        };
        let o = outline_geometry(&rect(), &cfg, SectionCfg::default()).unwrap();
        // view box 4.4 x 2.4 → scale 100, vertical slack 100 px
        let top_left = o.project(vector![-0.2, 2.2]);
        assert!((top_left - vector![0.0, 100.0]).norm() < 1e-9);
        let bottom_right = o.project(vector![4.2, -0.2]);
        assert!((bottom_right - vector![440.0, 340.0]).norm() < 1e-9);
    }

    #[test]
    fn degenerate_input_is_rejected() {
        let pts = vec![vector![0.0, 0.0], vector![1.0, 0.0], vector![2.0, 0.0]];
        assert!(outline_geometry(&pts, &OutlineCfg::default(), SectionCfg::default()).is_err());
    }
}

//! Closed-ring view over a caller's vertex slice.
//!
//! The ring is implicitly closed: the last vertex connects back to the first.
//! When the caller already repeated the first vertex at the end, that copy is
//! excluded from the view so it is never doubled. The caller's slice is only
//! borrowed; indices wrap modulo `N`.

use nalgebra::Vector2;

use crate::error::SectionError;

/// Borrowed closed polygon boundary with `N >= 3` vertices.
#[derive(Clone, Copy, Debug)]
pub struct Ring<'a> {
    pts: &'a [Vector2<f64>],
}

impl<'a> Ring<'a> {
    /// Validate and wrap `points`.
    ///
    /// An explicit closing vertex (last exactly equal to first) is dropped from the view.
    /// Returns `InvalidPolygon` when fewer than three ring vertices remain.
    pub fn new(points: &'a [Vector2<f64>]) -> Result<Self, SectionError> {
        let pts = match points {
            [first, .., last] if first == last => &points[..points.len() - 1],
            _ => points,
        };
        if pts.len() < 3 {
            return Err(SectionError::InvalidPolygon {
                vertices: pts.len(),
            });
        }
        Ok(Self { pts })
    }

    /// Number of distinct ring vertices (edges).
    #[inline]
    pub fn len(&self) -> usize {
        self.pts.len()
    }

    /// Always false: construction rejects rings with fewer than three vertices.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.pts.is_empty()
    }

    /// Vertex `i mod N`.
    #[inline]
    pub fn vertex(&self, i: usize) -> Vector2<f64> {
        self.pts[i % self.pts.len()]
    }

    /// The `N` edges `(p_i, p_{i+1 mod N})`.
    pub fn edges(&self) -> impl Iterator<Item = (Vector2<f64>, Vector2<f64>)> + 'a {
        let pts = self.pts;
        (0..pts.len()).map(move |i| (pts[i], pts[(i + 1) % pts.len()]))
    }

    /// Fresh closed sequence of `N + 1` points with first == last.
    pub fn closed(&self) -> Vec<Vector2<f64>> {
        let mut out = Vec::with_capacity(self.pts.len() + 1);
        out.extend_from_slice(self.pts);
        out.push(self.pts[0]);
        out
    }

    /// Axis-aligned bounding box `(min, max)`.
    pub fn bounds(&self) -> (Vector2<f64>, Vector2<f64>) {
        let mut lo = self.pts[0];
        let mut hi = self.pts[0];
        for p in &self.pts[1..] {
            lo = lo.inf(p);
            hi = hi.sup(p);
        }
        (lo, hi)
    }

    /// Larger side of the bounding box; the length scale for tolerances.
    pub fn extent(&self) -> f64 {
        let (lo, hi) = self.bounds();
        let d = hi - lo;
        d.x.max(d.y)
    }
}

/// Per-edge cross term `p.x*q.y − q.x*p.y`, shared by every moment sum.
#[inline]
pub fn cross(p: Vector2<f64>, q: Vector2<f64>) -> f64 {
    p.x * q.y - q.x * p.y
}

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::vector;

    fn square() -> Vec<Vector2<f64>> {
        vec![
            vector![0.0, 0.0],
            vector![1.0, 0.0],
            vector![1.0, 1.0],
            vector![0.0, 1.0],
        ]
    }

    #[test]
    fn explicit_closure_is_not_doubled() {
        let open = square();
        let mut closed = open.clone();
        closed.push(open[0]);
        let a = Ring::new(&open).unwrap();
        let b = Ring::new(&closed).unwrap();
        assert_eq!(a.len(), 4);
        assert_eq!(b.len(), 4);
        assert_eq!(a.closed(), b.closed());
        // caller data untouched
        assert_eq!(closed.len(), 5);
    }

    #[test]
    fn closed_repeats_first_vertex() {
        let pts = square();
        let ring = Ring::new(&pts).unwrap();
        let c = ring.closed();
        assert_eq!(c.len(), 5);
        assert_eq!(c[0], c[4]);
        assert_eq!(ring.vertex(5), pts[1]);
    }

    #[test]
    fn edges_wrap_around() {
        let pts = square();
        let ring = Ring::new(&pts).unwrap();
        let edges: Vec<_> = ring.edges().collect();
        assert_eq!(edges.len(), 4);
        assert_eq!(edges[3], (pts[3], pts[0]));
    }

    #[test]
    fn too_few_vertices_rejected() {
        let two = vec![vector![0.0, 0.0], vector![1.0, 0.0]];
        assert_eq!(
            Ring::new(&two).unwrap_err(),
            SectionError::InvalidPolygon { vertices: 2 }
        );
        // three points, but the last one only closes the ring
        let closed_two = vec![vector![0.0, 0.0], vector![1.0, 0.0], vector![0.0, 0.0]];
        assert!(matches!(
            Ring::new(&closed_two),
            Err(SectionError::InvalidPolygon { vertices: 2 })
        ));
        assert!(Ring::new(&[]).is_err());
    }

    #[test]
    fn bounds_and_extent() {
        let pts = vec![vector![-1.0, 0.5], vector![3.0, 0.0], vector![0.0, 2.0]];
        let ring = Ring::new(&pts).unwrap();
        let (lo, hi) = ring.bounds();
        assert_eq!(lo, vector![-1.0, 0.0]);
        assert_eq!(hi, vector![3.0, 2.0]);
        assert!((ring.extent() - 4.0).abs() < 1e-15);
    }
}

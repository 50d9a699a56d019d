//! Planar convex faces.

use config::constants::{EPSILON, PLANE_EPSILON, VERTEX_MERGE_EPSILON};
use glam::{DVec2, DVec3};

use super::Wire;
use crate::error::MeshError;

/// A planar, convex polygon bounded by a closed wire.
///
/// Vertices are stored without the closing repeat. The normal follows the
/// winding (counter-clockwise when seen from the side the normal points to).
#[derive(Debug, Clone)]
pub struct Face {
    vertices: Vec<DVec3>,
    normal: DVec3,
    area: f64,
}

impl Face {
    /// Builds a face from a closed wire.
    ///
    /// # Errors
    ///
    /// - [`MeshError::InvalidTopology`] if the wire is open
    /// - [`MeshError::DegenerateGeometry`] if the outline has zero area, is
    ///   not planar, or is not convex
    pub fn from_wire(wire: &Wire) -> Result<Self, MeshError> {
        if !wire.is_closed() {
            return Err(MeshError::invalid_topology(
                "face requires a closed wire (last point must repeat the first)",
            ));
        }

        let points = wire.points();
        let mut vertices: Vec<DVec3> = Vec::with_capacity(points.len() - 1);
        for p in &points[..points.len() - 1] {
            if vertices
                .last()
                .map_or(true, |last| last.distance(*p) > VERTEX_MERGE_EPSILON)
            {
                vertices.push(*p);
            }
        }
        Self::from_vertices(vertices)
    }

    /// Builds a face from an outline without closing repeat.
    pub fn from_vertices(vertices: Vec<DVec3>) -> Result<Self, MeshError> {
        if vertices.len() < 3 {
            return Err(MeshError::degenerate(format!(
                "face needs at least 3 vertices, got {}",
                vertices.len()
            )));
        }

        // Newell's method: robust for any simple polygon
        let n = vertices.len();
        let twice_area: DVec3 = (0..n)
            .map(|i| vertices[i].cross(vertices[(i + 1) % n]))
            .sum();
        let area = twice_area.length() * 0.5;
        if area <= EPSILON {
            return Err(MeshError::degenerate("face has zero area"));
        }
        let normal = twice_area / (2.0 * area);

        let centroid = vertices.iter().copied().sum::<DVec3>() / n as f64;
        let offset = normal.dot(centroid);
        if let Some(off) = vertices
            .iter()
            .map(|v| (normal.dot(*v) - offset).abs())
            .find(|d| *d > PLANE_EPSILON)
        {
            return Err(MeshError::degenerate(format!(
                "face is not planar (vertex {off:.3e} off plane)"
            )));
        }

        for i in 0..n {
            let a = vertices[i];
            let b = vertices[(i + 1) % n];
            let c = vertices[(i + 2) % n];
            if (b - a).cross(c - b).dot(normal) < -VERTEX_MERGE_EPSILON {
                return Err(MeshError::degenerate(format!(
                    "face is not convex at vertex {}",
                    (i + 1) % n
                )));
            }
        }

        Ok(Self {
            vertices,
            normal,
            area,
        })
    }

    /// Outline vertices (no closing repeat).
    #[inline]
    pub fn vertices(&self) -> &[DVec3] {
        &self.vertices
    }

    /// Unit normal.
    #[inline]
    pub fn normal(&self) -> DVec3 {
        self.normal
    }

    /// Enclosed area.
    #[inline]
    pub fn area(&self) -> f64 {
        self.area
    }

    /// Average of the outline vertices.
    pub fn centroid(&self) -> DVec3 {
        self.vertices.iter().copied().sum::<DVec3>() / self.vertices.len() as f64
    }

    /// Signed distance of the face plane from the origin along the normal.
    pub fn plane_offset(&self) -> f64 {
        self.normal.dot(self.vertices[0])
    }

    /// Axis-aligned bounds of the outline.
    pub fn bounds(&self) -> (DVec3, DVec3) {
        self.vertices.iter().fold(
            (DVec3::splat(f64::INFINITY), DVec3::splat(f64::NEG_INFINITY)),
            |(min, max), v| (min.min(*v), max.max(*v)),
        )
    }

    /// Returns true if `other` lies in the same plane (either orientation).
    pub fn is_coplanar_with(&self, other: &Face) -> bool {
        self.normal.dot(other.normal).abs() >= 1.0 - VERTEX_MERGE_EPSILON
            && other
                .vertices
                .iter()
                .all(|v| (self.normal.dot(*v) - self.plane_offset()).abs() <= PLANE_EPSILON)
    }

    /// Returns true if `other` is coplanar and the two interiors overlap.
    ///
    /// Faces that only touch along an edge or at a vertex do not overlap.
    pub fn overlaps(&self, other: &Face) -> bool {
        if !self.is_coplanar_with(other) {
            return false;
        }
        let (u, v) = self.basis();
        let project = |p: &DVec3| DVec2::new(p.dot(u), p.dot(v));
        let a: Vec<DVec2> = self.vertices.iter().map(project).collect();
        let b: Vec<DVec2> = other.vertices.iter().map(project).collect();
        convex_interiors_overlap(&a, &b)
    }

    /// Orthonormal in-plane axes `(u, v)` with `u × v == normal`.
    pub fn basis(&self) -> (DVec3, DVec3) {
        let u = self.normal.any_orthonormal_vector();
        (u, self.normal.cross(u))
    }
}

/// Separating-axis test for two convex outlines.
fn convex_interiors_overlap(a: &[DVec2], b: &[DVec2]) -> bool {
    let separated_along = |axis: DVec2| {
        let range = |poly: &[DVec2]| {
            poly.iter()
                .map(|p| p.dot(axis))
                .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), d| {
                    (lo.min(d), hi.max(d))
                })
        };
        let (a_lo, a_hi) = range(a);
        let (b_lo, b_hi) = range(b);
        a_hi <= b_lo + PLANE_EPSILON || b_hi <= a_lo + PLANE_EPSILON
    };

    let edges = |poly: &[DVec2]| {
        (0..poly.len())
            .map(|i| poly[(i + 1) % poly.len()] - poly[i])
            .collect::<Vec<_>>()
    };

    !edges(a)
        .into_iter()
        .chain(edges(b))
        .filter(|e| e.length() > EPSILON)
        .any(|e| separated_along(e.perp().normalize()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn square(origin: DVec3, size: f64) -> Face {
        Face::from_vertices(vec![
            origin,
            origin + DVec3::X * size,
            origin + DVec3::new(size, size, 0.0),
            origin + DVec3::Y * size,
        ])
        .unwrap()
    }

    #[test]
    fn test_face_from_closed_wire() {
        let wire = Wire::new(vec![
            DVec3::ZERO,
            DVec3::new(2.0, 0.0, 0.0),
            DVec3::new(2.0, 2.0, 0.0),
            DVec3::new(0.0, 2.0, 0.0),
            DVec3::ZERO,
        ])
        .unwrap();
        let face = Face::from_wire(&wire).unwrap();
        assert_eq!(face.vertices().len(), 4);
        assert_relative_eq!(face.area(), 4.0, epsilon = 1e-12);
        assert_relative_eq!(face.normal().z, 1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_face_rejects_open_wire() {
        let wire = Wire::new(vec![DVec3::ZERO, DVec3::X, DVec3::Y]).unwrap();
        assert!(matches!(
            Face::from_wire(&wire),
            Err(MeshError::InvalidTopology { .. })
        ));
    }

    #[test]
    fn test_clockwise_face_points_down() {
        let face = Face::from_vertices(vec![DVec3::ZERO, DVec3::Y, DVec3::X]).unwrap();
        assert_relative_eq!(face.normal().z, -1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_face_rejects_collinear_points() {
        let result = Face::from_vertices(vec![DVec3::ZERO, DVec3::X, DVec3::X * 2.0]);
        assert!(matches!(result, Err(MeshError::DegenerateGeometry { .. })));
    }

    #[test]
    fn test_face_rejects_non_planar() {
        let result = Face::from_vertices(vec![
            DVec3::ZERO,
            DVec3::X,
            DVec3::new(1.0, 1.0, 0.5),
            DVec3::Y,
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn test_face_rejects_concave() {
        let result = Face::from_vertices(vec![
            DVec3::ZERO,
            DVec3::new(4.0, 0.0, 0.0),
            DVec3::new(4.0, 4.0, 0.0),
            DVec3::new(2.0, 1.0, 0.0),
            DVec3::new(0.0, 4.0, 0.0),
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn test_overlapping_squares() {
        let a = square(DVec3::ZERO, 2.0);
        let b = square(DVec3::new(1.0, 1.0, 0.0), 2.0);
        assert!(a.overlaps(&b));
        assert!(b.overlaps(&a));
    }

    #[test]
    fn test_touching_squares_do_not_overlap() {
        let a = square(DVec3::ZERO, 2.0);
        let b = square(DVec3::new(2.0, 0.0, 0.0), 2.0);
        assert!(!a.overlaps(&b));
    }

    #[test]
    fn test_parallel_planes_do_not_overlap() {
        let a = square(DVec3::ZERO, 2.0);
        let b = square(DVec3::new(0.0, 0.0, 1.0), 2.0);
        assert!(!a.is_coplanar_with(&b));
        assert!(!a.overlaps(&b));
    }
}

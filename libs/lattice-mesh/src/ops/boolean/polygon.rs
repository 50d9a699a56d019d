//! # Polygon for BSP Operations
//!
//! Convex polygon with its supporting plane and plane splitting.

use glam::DVec3;

use super::plane::{Classification, Plane};

/// A convex polygon with associated plane.
#[derive(Debug, Clone)]
pub struct Polygon {
    /// Vertices in counter-clockwise order.
    vertices: Vec<DVec3>,
    /// Plane containing this polygon.
    plane: Plane,
}

/// Output buckets of [`Polygon::split`].
#[derive(Debug, Default)]
pub struct Split {
    /// Coplanar, facing the same way as the splitting plane.
    pub coplanar_front: Vec<Polygon>,
    /// Coplanar, facing the opposite way.
    pub coplanar_back: Vec<Polygon>,
    /// Entirely or partially in front.
    pub front: Vec<Polygon>,
    /// Entirely or partially behind.
    pub back: Vec<Polygon>,
}

impl Polygon {
    /// Create polygon from vertices.
    ///
    /// Returns `None` if the first three vertices are collinear.
    pub fn from_vertices(vertices: Vec<DVec3>) -> Option<Self> {
        if vertices.len() < 3 {
            return None;
        }
        let plane = Plane::from_points(vertices[0], vertices[1], vertices[2])?;
        Some(Self { vertices, plane })
    }

    /// Polygon vertices.
    pub fn vertices(&self) -> &[DVec3] {
        &self.vertices
    }

    /// Supporting plane.
    pub fn plane(&self) -> &Plane {
        &self.plane
    }

    /// Reverse winding order and plane.
    pub fn flip(&mut self) {
        self.vertices.reverse();
        self.plane = self.plane.flipped();
    }

    /// Classify this polygon relative to a plane.
    pub fn classify(&self, plane: &Plane) -> Classification {
        let mut front = false;
        let mut back = false;
        for v in &self.vertices {
            match plane.classify_point(*v) {
                Classification::Front => front = true,
                Classification::Back => back = true,
                _ => {}
            }
        }
        match (front, back) {
            (true, true) => Classification::Spanning,
            (true, false) => Classification::Front,
            (false, true) => Classification::Back,
            (false, false) => Classification::Coplanar,
        }
    }

    /// Split this polygon by `plane` into the buckets of `out`.
    pub fn split(self, plane: &Plane, out: &mut Split) {
        match self.classify(plane) {
            Classification::Coplanar => {
                if self.plane.normal().dot(plane.normal()) > 0.0 {
                    out.coplanar_front.push(self);
                } else {
                    out.coplanar_back.push(self);
                }
            }
            Classification::Front => out.front.push(self),
            Classification::Back => out.back.push(self),
            Classification::Spanning => {
                let n = self.vertices.len();
                let mut front_verts = Vec::with_capacity(n + 1);
                let mut back_verts = Vec::with_capacity(n + 1);

                for i in 0..n {
                    let vi = self.vertices[i];
                    let vj = self.vertices[(i + 1) % n];
                    let ti = plane.classify_point(vi);
                    let tj = plane.classify_point(vj);

                    if ti != Classification::Back {
                        front_verts.push(vi);
                    }
                    if ti != Classification::Front {
                        back_verts.push(vi);
                    }

                    // Edge crosses the plane
                    if matches!(
                        (ti, tj),
                        (Classification::Front, Classification::Back)
                            | (Classification::Back, Classification::Front)
                    ) {
                        let di = plane.signed_distance(vi);
                        let dj = plane.signed_distance(vj);
                        let crossing = vi.lerp(vj, di / (di - dj));
                        front_verts.push(crossing);
                        back_verts.push(crossing);
                    }
                }

                // Split parts keep the parent plane; re-deriving it from
                // nearly collinear split points would be unstable.
                if front_verts.len() >= 3 {
                    out.front.push(Polygon {
                        vertices: front_verts,
                        plane: self.plane,
                    });
                }
                if back_verts.len() >= 3 {
                    out.back.push(Polygon {
                        vertices: back_verts,
                        plane: self.plane,
                    });
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn triangle(z: f64) -> Polygon {
        Polygon::from_vertices(vec![
            DVec3::new(0.0, 0.0, z),
            DVec3::new(1.0, 0.0, z),
            DVec3::new(0.5, 1.0, z),
        ])
        .unwrap()
    }

    #[test]
    fn test_polygon_flip() {
        let poly = triangle(0.0);
        let mut flipped = poly.clone();
        flipped.flip();
        assert_eq!(flipped.vertices()[0], poly.vertices()[2]);
        assert_eq!(flipped.plane().normal(), -poly.plane().normal());
    }

    #[test]
    fn test_polygon_classify() {
        let plane = Plane::new(DVec3::Z, 0.0);
        assert_eq!(triangle(1.0).classify(&plane), Classification::Front);
        assert_eq!(triangle(-1.0).classify(&plane), Classification::Back);
        assert_eq!(triangle(0.0).classify(&plane), Classification::Coplanar);
    }

    #[test]
    fn test_polygon_split_coplanar_orientation() {
        let plane = Plane::new(DVec3::Z, 0.0);
        let mut out = Split::default();
        triangle(0.0).split(&plane, &mut out);
        let mut flipped = triangle(0.0);
        flipped.flip();
        flipped.split(&plane, &mut out);
        assert_eq!(out.coplanar_front.len(), 1);
        assert_eq!(out.coplanar_back.len(), 1);
    }

    #[test]
    fn test_polygon_split_spanning() {
        let poly = Polygon::from_vertices(vec![
            DVec3::new(0.0, 0.0, -1.0),
            DVec3::new(1.0, 0.0, -1.0),
            DVec3::new(0.5, 0.0, 1.0),
        ])
        .unwrap();
        let plane = Plane::new(DVec3::Z, 0.0);

        let mut out = Split::default();
        poly.split(&plane, &mut out);

        assert_eq!(out.front.len(), 1);
        assert_eq!(out.back.len(), 1);
        assert_eq!(out.front[0].vertices().len(), 3);
        assert_eq!(out.back[0].vertices().len(), 4);
        assert!(out.front[0]
            .vertices()
            .iter()
            .all(|v| v.z >= -1e-12));
    }
}

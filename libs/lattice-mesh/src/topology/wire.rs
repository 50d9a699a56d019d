//! Polygonal wires.

use config::constants::VERTEX_MERGE_EPSILON;
use glam::DVec3;

use crate::error::MeshError;

/// An open or closed polyline.
///
/// A wire is closed when its last point repeats its first point; faces can
/// only be built from closed wires.
#[derive(Debug, Clone, PartialEq)]
pub struct Wire {
    points: Vec<DVec3>,
}

impl Wire {
    /// Creates a wire through `points` in order.
    ///
    /// Fails when a coordinate is not finite or when fewer than three
    /// distinct points are given.
    pub fn new(points: Vec<DVec3>) -> Result<Self, MeshError> {
        if let Some(bad) = points.iter().find(|p| !p.is_finite()) {
            return Err(MeshError::degenerate(format!(
                "wire point is not finite: {bad:?}"
            )));
        }

        let mut distinct: Vec<DVec3> = Vec::with_capacity(points.len());
        for p in &points {
            if !distinct.iter().any(|q| q.distance(*p) <= VERTEX_MERGE_EPSILON) {
                distinct.push(*p);
            }
        }
        if distinct.len() < 3 {
            return Err(MeshError::degenerate(format!(
                "wire needs at least 3 distinct points, got {}",
                distinct.len()
            )));
        }

        Ok(Self { points })
    }

    /// The points as given, including the closing repeat if present.
    pub fn points(&self) -> &[DVec3] {
        &self.points
    }

    /// Number of edges between consecutive points.
    pub fn edge_count(&self) -> usize {
        self.points.len().saturating_sub(1)
    }

    /// Returns true if the last point repeats the first.
    pub fn is_closed(&self) -> bool {
        match (self.points.first(), self.points.last()) {
            (Some(first), Some(last)) if self.points.len() > 1 => {
                first.distance(*last) <= VERTEX_MERGE_EPSILON
            }
            _ => false,
        }
    }

    /// Translates every point by `offset`.
    pub fn translate(&mut self, offset: DVec3) {
        for p in &mut self.points {
            *p += offset;
        }
    }

    /// Returns a translated copy.
    pub fn translated(&self, offset: DVec3) -> Self {
        let mut copy = self.clone();
        copy.translate(offset);
        copy
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn triangle(closed: bool) -> Vec<DVec3> {
        let mut points = vec![DVec3::ZERO, DVec3::X, DVec3::Y];
        if closed {
            points.push(DVec3::ZERO);
        }
        points
    }

    #[test]
    fn test_closed_wire() {
        let wire = Wire::new(triangle(true)).unwrap();
        assert!(wire.is_closed());
        assert_eq!(wire.edge_count(), 3);
    }

    #[test]
    fn test_open_wire() {
        let wire = Wire::new(triangle(false)).unwrap();
        assert!(!wire.is_closed());
        assert_eq!(wire.edge_count(), 2);
    }

    #[test]
    fn test_too_few_distinct_points() {
        let result = Wire::new(vec![DVec3::ZERO, DVec3::X, DVec3::ZERO]);
        assert!(matches!(result, Err(MeshError::DegenerateGeometry { .. })));
    }

    #[test]
    fn test_non_finite_point() {
        let result = Wire::new(vec![DVec3::ZERO, DVec3::X, DVec3::new(f64::NAN, 0.0, 0.0)]);
        assert!(result.is_err());
    }

    #[test]
    fn test_translated() {
        let wire = Wire::new(triangle(true)).unwrap();
        let moved = wire.translated(DVec3::new(2.0, 3.0, 0.0));
        assert_eq!(moved.points()[1], DVec3::new(3.0, 3.0, 0.0));
        assert!(moved.is_closed());
        assert_eq!(wire.points()[1], DVec3::X);
    }
}

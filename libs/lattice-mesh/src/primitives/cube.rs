//! # Box Primitive
//!
//! Generates the mesh of an axis-aligned rectangular box.

use crate::error::MeshError;
use crate::mesh::Mesh;
use glam::DVec3;

/// Creates a rectangular box with one corner at the origin.
///
/// # Arguments
///
/// * `size` - Dimensions [x, y, z]; the box spans `[0, size]` on each axis
///
/// # Returns
///
/// A mesh with 8 vertices and 12 triangles (2 per face).
///
/// # Example
///
/// ```rust
/// use lattice_mesh::primitives::create_box;
/// use glam::DVec3;
///
/// let mesh = create_box(DVec3::new(100.0, 100.0, 2.0)).unwrap();
/// assert_eq!(mesh.vertex_count(), 8);
/// assert_eq!(mesh.triangle_count(), 12);
/// ```
pub fn create_box(size: DVec3) -> Result<Mesh, MeshError> {
    if !size.is_finite() || size.min_element() <= 0.0 {
        return Err(MeshError::degenerate(format!(
            "box size must be positive: {size:?}"
        )));
    }

    let mut mesh = Mesh::with_capacity(8, 12);
    let (min, max) = (DVec3::ZERO, size);

    // Bottom face (z = min.z)
    let v0 = mesh.add_vertex(DVec3::new(min.x, min.y, min.z));
    let v1 = mesh.add_vertex(DVec3::new(max.x, min.y, min.z));
    let v2 = mesh.add_vertex(DVec3::new(max.x, max.y, min.z));
    let v3 = mesh.add_vertex(DVec3::new(min.x, max.y, min.z));

    // Top face (z = max.z)
    let v4 = mesh.add_vertex(DVec3::new(min.x, min.y, max.z));
    let v5 = mesh.add_vertex(DVec3::new(max.x, min.y, max.z));
    let v6 = mesh.add_vertex(DVec3::new(max.x, max.y, max.z));
    let v7 = mesh.add_vertex(DVec3::new(min.x, max.y, max.z));

    // Counter-clockwise seen from outside
    mesh.add_triangle(v0, v2, v1);
    mesh.add_triangle(v0, v3, v2);

    mesh.add_triangle(v4, v5, v6);
    mesh.add_triangle(v4, v6, v7);

    mesh.add_triangle(v0, v1, v5);
    mesh.add_triangle(v0, v5, v4);

    mesh.add_triangle(v2, v3, v7);
    mesh.add_triangle(v2, v7, v6);

    mesh.add_triangle(v3, v0, v4);
    mesh.add_triangle(v3, v4, v7);

    mesh.add_triangle(v1, v2, v6);
    mesh.add_triangle(v1, v6, v5);

    Ok(mesh)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_box_counts() {
        let mesh = create_box(DVec3::splat(10.0)).unwrap();
        assert_eq!(mesh.vertex_count(), 8);
        assert_eq!(mesh.triangle_count(), 12);
    }

    #[test]
    fn test_box_corner_at_origin() {
        let mesh = create_box(DVec3::new(10.0, 20.0, 30.0)).unwrap();
        let (min, max) = mesh.bounding_box();
        assert_eq!(min, DVec3::ZERO);
        assert_eq!(max, DVec3::new(10.0, 20.0, 30.0));
    }

    #[test]
    fn test_box_volume_is_positive() {
        let mesh = create_box(DVec3::new(100.0, 100.0, 2.0)).unwrap();
        assert_relative_eq!(mesh.volume(), 20_000.0, epsilon = 1e-9);
    }

    #[test]
    fn test_box_is_closed_and_valid() {
        let mesh = create_box(DVec3::splat(10.0)).unwrap();
        assert!(mesh.is_closed());
        assert!(mesh.validate());
    }

    #[test]
    fn test_box_invalid_size() {
        assert!(create_box(DVec3::new(0.0, 10.0, 10.0)).is_err());
        assert!(create_box(DVec3::new(-5.0, 10.0, 10.0)).is_err());
        assert!(create_box(DVec3::new(f64::NAN, 10.0, 10.0)).is_err());
    }
}

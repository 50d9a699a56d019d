//! # Boolean Operation Tests

use super::*;
use crate::primitives::create_box;
use approx::assert_relative_eq;
use glam::DVec3;

/// Creates a box at a specific position.
fn box_at(pos: DVec3, size: DVec3) -> Mesh {
    let mut mesh = create_box(size).unwrap();
    mesh.translate(pos);
    mesh
}

// =============================================================================
// DIFFERENCE TESTS
// =============================================================================

#[test]
fn test_difference_empty_tool_returns_base() {
    let a = box_at(DVec3::ZERO, DVec3::ONE);
    let result = difference(&a, &Mesh::new()).unwrap();
    assert_eq!(result.vertex_count(), a.vertex_count());
    assert_eq!(result.triangle_count(), a.triangle_count());
}

#[test]
fn test_difference_empty_base_fails() {
    let b = box_at(DVec3::ZERO, DVec3::ONE);
    assert!(matches!(
        difference(&Mesh::new(), &b),
        Err(MeshError::InvalidTopology { .. })
    ));
}

#[test]
fn test_difference_non_overlapping_keeps_volume() {
    let a = box_at(DVec3::ZERO, DVec3::splat(2.0));
    let b = box_at(DVec3::new(5.0, 0.0, 0.0), DVec3::ONE);

    let result = difference(&a, &b).unwrap();
    assert_relative_eq!(result.volume(), 8.0, epsilon = 1e-9);
    assert!(result.is_closed());
    assert!(result.is_within(DVec3::ZERO, DVec3::splat(2.0), 1e-9));
}

#[test]
fn test_difference_corner_overlap() {
    let a = box_at(DVec3::ZERO, DVec3::splat(2.0));
    let b = box_at(DVec3::ONE, DVec3::splat(2.0));

    let result = difference(&a, &b).unwrap();
    assert_relative_eq!(result.volume(), 7.0, epsilon = 1e-9);
    assert!(result.is_closed());
    assert!(result.is_within(DVec3::ZERO, DVec3::splat(2.0), 1e-9));
}

#[test]
fn test_difference_enclosed_cavity() {
    let a = box_at(DVec3::ZERO, DVec3::splat(4.0));
    let b = box_at(DVec3::ONE, DVec3::splat(2.0));

    let result = difference(&a, &b).unwrap();
    assert_relative_eq!(result.volume(), 56.0, epsilon = 1e-9);
    assert!(result.is_closed());
    assert_relative_eq!(result.surface_area(), 96.0 + 24.0, epsilon = 1e-9);
}

#[test]
fn test_difference_flush_through_hole() {
    // Tool shares the top and bottom planes of the base
    let a = box_at(DVec3::ZERO, DVec3::new(4.0, 4.0, 1.0));
    let b = box_at(DVec3::new(1.0, 1.0, 0.0), DVec3::new(2.0, 2.0, 1.0));

    let result = difference(&a, &b).unwrap();
    assert_relative_eq!(result.volume(), 12.0, epsilon = 1e-9);
    assert!(result.is_closed());
    // 2 * (16 - 4) caps + 16 outer wall + 8 hole wall
    assert_relative_eq!(result.surface_area(), 48.0, epsilon = 1e-9);
    assert!(result.validate());
}

#[test]
fn test_difference_tool_crossing_boundary() {
    let a = box_at(DVec3::ZERO, DVec3::new(4.0, 4.0, 1.0));
    let b = box_at(DVec3::new(3.0, 1.0, -1.0), DVec3::new(2.0, 2.0, 3.0));

    let result = difference(&a, &b).unwrap();
    assert_relative_eq!(result.volume(), 14.0, epsilon = 1e-9);
    assert!(result.is_closed());
    assert!(result.is_within(DVec3::ZERO, DVec3::new(4.0, 4.0, 1.0), 1e-9));
}

#[test]
fn test_difference_closes_t_junctions() {
    // Two pockets split the top face many times while the side faces stay
    // whole, which leaves split vertices on the side faces' top edges
    let a = box_at(DVec3::ZERO, DVec3::new(6.0, 3.0, 2.0));
    let mut b = box_at(DVec3::new(1.0, -1.0, 1.0), DVec3::new(1.0, 2.0, 2.0));
    b.merge(&box_at(DVec3::new(4.0, 2.0, 1.5), DVec3::new(1.0, 2.0, 1.0)));

    let result = difference(&a, &b).unwrap();
    assert_relative_eq!(result.volume(), 36.0 - 1.0 - 0.5, epsilon = 1e-9);
    assert!(result.is_closed());
    assert!(result.validate());
}

#[test]
fn test_difference_consuming_tool_fails() {
    let a = box_at(DVec3::ZERO, DVec3::ONE);
    let b = box_at(DVec3::splat(-1.0), DVec3::splat(3.0));
    assert!(matches!(
        difference(&a, &b),
        Err(MeshError::BooleanFailed { .. })
    ));
}

#[test]
fn test_difference_is_deterministic() {
    let a = box_at(DVec3::ZERO, DVec3::new(4.0, 4.0, 1.0));
    let b = box_at(DVec3::new(1.0, 1.0, 0.0), DVec3::new(2.0, 2.0, 1.0));

    let first = difference(&a, &b).unwrap();
    let second = difference(&a, &b).unwrap();
    assert_eq!(first.vertices(), second.vertices());
    assert_eq!(first.triangles(), second.triangles());
}

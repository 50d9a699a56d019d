//! # Extrusion Tests

use super::*;
use crate::topology::Face;
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

fn hexagon(center: DVec3, radius: f64) -> Face {
    let vertices = (0..6)
        .map(|i| {
            let angle = std::f64::consts::FRAC_PI_3 * i as f64;
            center + DVec3::new(radius * angle.cos(), radius * angle.sin(), 0.0)
        })
        .collect();
    Face::from_vertices(vertices).unwrap()
}

#[test]
fn test_extrude_square_prism() {
    let shell = Shell::new(vec![square(DVec3::ZERO, 2.0)]).unwrap();
    let mesh = extrude(&shell, DVec3::new(0.0, 0.0, 3.0)).unwrap();

    assert_eq!(mesh.vertex_count(), 8);
    assert_eq!(mesh.triangle_count(), 12);
    assert!(mesh.is_closed());
    assert!(mesh.validate());
    assert_relative_eq!(mesh.volume(), 12.0, epsilon = 1e-9);
}

#[test]
fn test_extrude_hexagon_prism() {
    let shell = Shell::new(vec![hexagon(DVec3::new(5.0, 5.0, 0.0), 2.0)]).unwrap();
    let mesh = extrude(&shell, DVec3::new(0.0, 0.0, 1.5)).unwrap();

    let area = 1.5 * 3f64.sqrt() * 4.0;
    assert!(mesh.is_closed());
    assert_relative_eq!(mesh.volume(), area * 1.5, epsilon = 1e-9);

    let (min, max) = mesh.bounding_box();
    assert_relative_eq!(min.z, 0.0);
    assert_relative_eq!(max.z, 1.5);
}

#[test]
fn test_extrude_reversed_face_is_still_outward() {
    let face = Face::from_vertices(vec![
        DVec3::ZERO,
        DVec3::Y,
        DVec3::new(1.0, 1.0, 0.0),
        DVec3::X,
    ])
    .unwrap();
    assert!(face.normal().z < 0.0);

    let shell = Shell::new(vec![face]).unwrap();
    let mesh = extrude(&shell, DVec3::Z).unwrap();
    assert_relative_eq!(mesh.volume(), 1.0, epsilon = 1e-9);
}

#[test]
fn test_extrude_disjoint_faces() {
    let shell = Shell::new(vec![
        square(DVec3::ZERO, 1.0),
        square(DVec3::new(3.0, 0.0, 0.0), 1.0),
        hexagon(DVec3::new(10.0, 0.0, 0.0), 1.0),
    ])
    .unwrap();
    let mesh = extrude(&shell, DVec3::new(0.0, 0.0, 2.0)).unwrap();

    let hex_area = 1.5 * 3f64.sqrt();
    assert!(mesh.is_closed());
    assert_relative_eq!(mesh.volume(), 2.0 * (2.0 + hex_area), epsilon = 1e-9);
}

#[test]
fn test_extrude_adjacent_faces_has_no_internal_wall() {
    let shell = Shell::new(vec![square(DVec3::ZERO, 1.0), square(DVec3::X, 1.0)]).unwrap();
    let mesh = extrude(&shell, DVec3::Z).unwrap();

    assert_eq!(mesh.vertex_count(), 12);
    // 2 faces x 2 caps x 2 triangles + 6 boundary edges x 2 triangles
    assert_eq!(mesh.triangle_count(), 20);
    assert!(mesh.is_closed());
    assert_relative_eq!(mesh.volume(), 2.0, epsilon = 1e-9);
}

#[test]
fn test_extrude_oblique_direction() {
    let shell = Shell::new(vec![square(DVec3::ZERO, 1.0)]).unwrap();
    let mesh = extrude(&shell, DVec3::new(1.0, 0.0, 2.0)).unwrap();
    assert!(mesh.is_closed());
    assert_relative_eq!(mesh.volume(), 2.0, epsilon = 1e-9);
}

#[test]
fn test_extrude_zero_direction_fails() {
    let shell = Shell::new(vec![square(DVec3::ZERO, 1.0)]).unwrap();
    assert!(matches!(
        extrude(&shell, DVec3::ZERO),
        Err(MeshError::DegenerateGeometry { .. })
    ));
}

#[test]
fn test_extrude_in_plane_direction_fails() {
    let shell = Shell::new(vec![square(DVec3::ZERO, 1.0)]).unwrap();
    assert!(extrude(&shell, DVec3::X).is_err());
}

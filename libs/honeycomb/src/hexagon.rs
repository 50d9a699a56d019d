//! # Hexagon Generator
//!
//! Regular hexagons in the z = 0 plane, as closed point loops.

use config::constants::HEXAGON_EDGES;
use glam::{DMat3, DVec3};

/// Angle between consecutive hexagon vertices (60°).
pub const EDGE_ANGLE: f64 = std::f64::consts::TAU / HEXAGON_EDGES as f64;

/// Generates a regular hexagon centred on the origin.
///
/// The first vertex is `(circumradius, 0, 0)`; each next vertex is the
/// previous one rotated by 60° about +z. The seventh point repeats the first
/// so the loop is explicitly closed.
///
/// ## Example
///
/// ```rust
/// use honeycomb::generate_hexagon;
///
/// let hex = generate_hexagon(5.0);
/// assert_eq!(hex[0], hex[6]);
/// assert!((hex[0].x - 5.0).abs() < 1e-12);
/// ```
pub fn generate_hexagon(circumradius: f64) -> [DVec3; HEXAGON_EDGES + 1] {
    let rotation = DMat3::from_rotation_z(EDGE_ANGLE);
    let mut points = [DVec3::ZERO; HEXAGON_EDGES + 1];
    points[0] = DVec3::new(circumradius, 0.0, 0.0);
    for i in 1..HEXAGON_EDGES {
        points[i] = rotation * points[i - 1];
    }
    points[HEXAGON_EDGES] = points[0];
    points
}

/// Distance from the centre to the middle of an edge.
pub fn hexagon_apothem(circumradius: f64) -> f64 {
    circumradius * (EDGE_ANGLE / 2.0).cos()
}

/// Area enclosed by a regular hexagon.
pub fn hexagon_area(circumradius: f64) -> f64 {
    1.5 * 3f64.sqrt() * circumradius * circumradius
}

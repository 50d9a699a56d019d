//! # Linear Extrusion
//!
//! Sweeps every face of a [`Shell`] along a direction vector, producing one
//! closed solid per connected patch of faces.
//!
//! Each face contributes a bottom cap (at its original position) and a top
//! cap (translated by the direction). Side walls are generated only for
//! boundary edges, i.e. edges not shared with another face of the shell, so
//! faces that touch along an edge extrude into a single watertight prism
//! without internal walls.

#[cfg(test)]
mod tests;

use std::collections::HashMap;

use config::constants::{EPSILON, MAX_TRIANGLES};
use glam::DVec3;
use tracing::debug;

use crate::error::MeshError;
use crate::mesh::Mesh;
use crate::topology::Shell;

/// Extrudes a shell along `direction`.
///
/// # Arguments
///
/// * `shell` - Faces to sweep
/// * `direction` - Sweep vector (length = extrusion distance)
///
/// # Returns
///
/// A closed mesh with outward-facing triangles, regardless of the winding
/// of the input faces.
///
/// # Errors
///
/// - [`MeshError::DegenerateGeometry`] if `direction` is zero or lies in the
///   plane of a face
/// - [`MeshError::InvalidTopology`] if two faces traverse a shared edge in
///   the same direction (they fold over each other)
///
/// # Example
///
/// ```rust
/// use glam::DVec3;
/// use lattice_mesh::{extrude, Face, Shell};
///
/// let face = Face::from_vertices(vec![DVec3::ZERO, DVec3::X, DVec3::Y]).unwrap();
/// let shell = Shell::new(vec![face]).unwrap();
/// let prism = extrude(&shell, DVec3::new(0.0, 0.0, 2.0)).unwrap();
/// assert!((prism.volume() - 1.0).abs() < 1e-12);
/// ```
pub fn extrude(shell: &Shell, direction: DVec3) -> Result<Mesh, MeshError> {
    let length = direction.length();
    if !direction.is_finite() || length <= EPSILON {
        return Err(MeshError::degenerate(format!(
            "extrusion direction must be non-zero: {direction:?}"
        )));
    }

    // Orient every loop so its normal points along the sweep
    let mut loops: Vec<Vec<u32>> = Vec::with_capacity(shell.face_count());
    for (index, (face, outline)) in shell.faces().iter().zip(shell.loops()).enumerate() {
        let along = face.normal().dot(direction) / length;
        if along.abs() <= EPSILON {
            return Err(MeshError::degenerate(format!(
                "extrusion direction lies in the plane of face {index}"
            )));
        }
        let mut outline = outline.clone();
        if along < 0.0 {
            outline.reverse();
        }
        loops.push(outline);
    }

    let mut edges: HashMap<(u32, u32), u32> = HashMap::new();
    for outline in &loops {
        for (a, b) in loop_edges(outline) {
            *edges.entry((a, b)).or_insert(0) += 1;
        }
    }
    if let Some(((a, b), _)) = edges.iter().find(|(_, &count)| count > 1) {
        return Err(MeshError::invalid_topology(format!(
            "edge {a}-{b} is traversed twice in the same direction"
        )));
    }

    let n = shell.vertices().len() as u32;
    let cap_triangles: usize = loops.iter().map(|l| 2 * (l.len() - 2)).sum();
    let boundary: Vec<(u32, u32)> = loops
        .iter()
        .flat_map(|outline| loop_edges(outline))
        .filter(|(a, b)| !edges.contains_key(&(*b, *a)))
        .collect();
    let triangle_count = cap_triangles + 2 * boundary.len();
    if triangle_count > MAX_TRIANGLES {
        return Err(MeshError::TooManyTriangles {
            count: triangle_count,
            max: MAX_TRIANGLES,
        });
    }

    let mut mesh = Mesh::with_capacity(2 * n as usize, triangle_count);
    for v in shell.vertices() {
        mesh.add_vertex(*v);
    }
    for v in shell.vertices() {
        mesh.add_vertex(*v + direction);
    }

    // Caps: top keeps the loop winding, bottom is reversed
    for outline in &loops {
        let first = outline[0];
        for pair in outline[1..].windows(2) {
            mesh.add_triangle(n + first, n + pair[0], n + pair[1]);
            mesh.add_triangle(first, pair[1], pair[0]);
        }
    }

    // Walls: outward side of a boundary edge is to its right
    for &(a, b) in &boundary {
        mesh.add_triangle(a, b, n + b);
        mesh.add_triangle(a, n + b, n + a);
    }

    debug!(
        faces = shell.face_count(),
        boundary_edges = boundary.len(),
        triangles = mesh.triangle_count(),
        "Extruded shell"
    );

    Ok(mesh)
}

/// Directed edges of a closed loop, including the closing edge.
fn loop_edges(outline: &[u32]) -> impl Iterator<Item = (u32, u32)> + '_ {
    (0..outline.len()).map(move |i| (outline[i], outline[(i + 1) % outline.len()]))
}

//! # Boolean Operations (CSG)
//!
//! Constructive Solid Geometry difference using BSP trees.
//!
//! ## Algorithm
//!
//! Based on the csg.js algorithm by Evan Wallace:
//! - Difference: A.invert(); A.clipTo(B); B.clipTo(A); B.invert(); B.clipTo(A); B.invert(); A.build(B); A.invert()
//!
//! Only difference is provided: the lattice is always carved out of its
//! container in one operation.
//!
//! ## Example
//!
//! ```rust
//! use glam::DVec3;
//! use lattice_mesh::{create_box, difference};
//!
//! let a = create_box(DVec3::splat(2.0)).unwrap();
//! let mut b = create_box(DVec3::splat(2.0)).unwrap();
//! b.translate(DVec3::splat(1.0));
//! let result = difference(&a, &b).unwrap();
//! assert!((result.volume() - 7.0).abs() < 1e-6);
//! ```

mod bsp;
mod plane;
mod polygon;
mod seam;

#[cfg(test)]
mod tests;

use config::constants::{EPSILON, MAX_TRIANGLES};
use tracing::debug;

use crate::error::MeshError;
use crate::mesh::{Mesh, VertexWelder};
use bsp::BspTree;
use polygon::Polygon;
use seam::PointGrid;

// =============================================================================
// PUBLIC API
// =============================================================================

/// Compute difference of two meshes (A - B).
///
/// Returns a mesh containing geometry from A that is not in B. Faces of B
/// that end up inside A become the walls of the carved cavities.
///
/// ## Parameters
///
/// - `a`: First mesh (base)
/// - `b`: Second mesh (to subtract)
///
/// ## Errors
///
/// - [`MeshError::InvalidTopology`] if `a` is empty
/// - [`MeshError::BooleanFailed`] if nothing of `a` survives
/// - [`MeshError::TooManyTriangles`] if the result exceeds [`MAX_TRIANGLES`]
pub fn difference(a: &Mesh, b: &Mesh) -> Result<Mesh, MeshError> {
    let polys_a = mesh_to_polygons(a);
    let polys_b = mesh_to_polygons(b);

    if polys_a.is_empty() {
        return Err(MeshError::invalid_topology(
            "difference base has no usable triangles",
        ));
    }
    if polys_b.is_empty() {
        return Ok(a.clone());
    }

    debug!(
        base = polys_a.len(),
        tool = polys_b.len(),
        "Computing boolean difference"
    );

    let mut bsp_a = BspTree::new(polys_a);
    let mut bsp_b = BspTree::new(polys_b);

    // A - B = ~(~A | B)
    bsp_a.invert();
    bsp_a.clip_to(&bsp_b);
    bsp_b.clip_to(&bsp_a);
    bsp_b.invert();
    bsp_b.clip_to(&bsp_a);
    bsp_b.invert();
    bsp_a.build(bsp_b.all_polygons());
    bsp_a.invert();

    let result = polygons_to_mesh(&bsp_a.all_polygons())?;
    if result.is_empty() {
        return Err(MeshError::boolean_failed(
            "difference removed the entire base solid",
        ));
    }

    debug!(
        nodes = bsp_a.node_count(),
        vertices = result.vertex_count(),
        triangles = result.triangle_count(),
        "Boolean difference complete"
    );
    Ok(result)
}

// =============================================================================
// CONVERSION HELPERS
// =============================================================================

/// Convert mesh to list of polygons, one per non-degenerate triangle.
fn mesh_to_polygons(mesh: &Mesh) -> Vec<Polygon> {
    mesh.corners()
        .filter_map(|corners| Polygon::from_vertices(corners.to_vec()))
        .collect()
}

/// Convert polygons back to an indexed mesh.
///
/// Coincident vertices are welded, polygons below [`EPSILON`] area are
/// dropped and T-junctions are closed before triangulating, so every edge of
/// the result is shared by exactly two triangles.
fn polygons_to_mesh(polygons: &[Polygon]) -> Result<Mesh, MeshError> {
    let mut welder = VertexWelder::new();
    let mut outlines: Vec<Vec<u32>> = Vec::with_capacity(polygons.len());
    for poly in polygons {
        let mut outline: Vec<u32> = Vec::with_capacity(poly.vertices().len());
        for v in poly.vertices() {
            let id = welder.insert(*v);
            if outline.last() != Some(&id) {
                outline.push(id);
            }
        }
        while outline.len() > 1 && outline.first() == outline.last() {
            outline.pop();
        }
        outlines.push(outline);
    }

    let mut positions = welder.into_positions();
    outlines.retain(|outline| {
        outline.len() >= 3 && seam::outline_area(outline, &positions) > EPSILON
    });

    let outlines: Vec<Vec<u32>> = {
        let grid = PointGrid::build(&positions, &outlines);
        outlines.iter().map(|outline| grid.split_outline(outline)).collect()
    };

    let mut triangles: Vec<[u32; 3]> = Vec::new();
    for outline in &outlines {
        seam::triangulate(outline, &mut positions, &mut triangles);
        if triangles.len() > MAX_TRIANGLES {
            return Err(MeshError::TooManyTriangles {
                count: triangles.len(),
                max: MAX_TRIANGLES,
            });
        }
    }

    // Only vertices of kept polygons and fan centroids end up in the mesh
    let mut remap = vec![u32::MAX; positions.len()];
    let mut mesh = Mesh::with_capacity(positions.len(), triangles.len());
    for triangle in triangles {
        let [a, b, c] = triangle.map(|id| {
            let slot = &mut remap[id as usize];
            if *slot == u32::MAX {
                *slot = mesh.add_vertex(positions[id as usize]);
            }
            *slot
        });
        mesh.add_triangle(a, b, c);
    }
    Ok(mesh)
}

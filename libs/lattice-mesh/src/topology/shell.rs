//! Shells: faces joined into one skin.

use glam::DVec3;
use tracing::debug;

use super::Face;
use crate::error::MeshError;
use crate::mesh::VertexWelder;

/// A set of faces sharing one welded vertex pool.
///
/// Vertices that coincide between faces are merged, so faces touching along
/// an edge reference the same two vertex indices. Coplanar faces whose
/// interiors overlap are rejected: such a shell has no consistent inside.
#[derive(Debug, Clone)]
pub struct Shell {
    faces: Vec<Face>,
    vertices: Vec<DVec3>,
    loops: Vec<Vec<u32>>,
}

impl Shell {
    /// Joins `faces` into a shell.
    ///
    /// # Errors
    ///
    /// - [`MeshError::InvalidTopology`] if there are no faces or two
    ///   coplanar faces overlap
    /// - [`MeshError::DegenerateGeometry`] if welding collapses a face
    pub fn new(faces: Vec<Face>) -> Result<Self, MeshError> {
        if faces.is_empty() {
            return Err(MeshError::invalid_topology("shell needs at least one face"));
        }

        if let Some((i, j)) = find_overlap(&faces) {
            return Err(MeshError::invalid_topology(format!(
                "faces {i} and {j} overlap; shell is not manifold"
            )));
        }

        let mut welder = VertexWelder::new();
        let mut loops = Vec::with_capacity(faces.len());
        for (index, face) in faces.iter().enumerate() {
            let mut outline: Vec<u32> = Vec::with_capacity(face.vertices().len());
            for v in face.vertices() {
                let id = welder.insert(*v);
                if outline.last() != Some(&id) {
                    outline.push(id);
                }
            }
            if outline.len() > 1 && outline.first() == outline.last() {
                outline.pop();
            }
            if outline.len() < 3 {
                return Err(MeshError::degenerate(format!(
                    "face {index} collapsed while welding shell vertices"
                )));
            }
            loops.push(outline);
        }

        let vertices = welder.into_positions();
        debug!(
            faces = faces.len(),
            vertices = vertices.len(),
            "Joined faces into shell"
        );

        Ok(Self {
            faces,
            vertices,
            loops,
        })
    }

    /// Faces in insertion order.
    pub fn faces(&self) -> &[Face] {
        &self.faces
    }

    /// Number of faces.
    pub fn face_count(&self) -> usize {
        self.faces.len()
    }

    /// Welded vertex pool.
    pub fn vertices(&self) -> &[DVec3] {
        &self.vertices
    }

    /// Per-face vertex indices into [`Shell::vertices`], same winding as the
    /// face.
    pub fn loops(&self) -> &[Vec<u32>] {
        &self.loops
    }

    /// Total area of all faces.
    pub fn area(&self) -> f64 {
        self.faces.iter().map(Face::area).sum()
    }
}

/// Sweep-and-prune over x bounds; returns the first overlapping pair.
fn find_overlap(faces: &[Face]) -> Option<(usize, usize)> {
    let bounds: Vec<(DVec3, DVec3)> = faces.iter().map(Face::bounds).collect();
    let mut order: Vec<usize> = (0..faces.len()).collect();
    order.sort_by(|&a, &b| bounds[a].0.x.total_cmp(&bounds[b].0.x));

    let mut active: Vec<usize> = Vec::new();
    for &i in &order {
        let (min_i, max_i) = bounds[i];
        active.retain(|&j| bounds[j].1.x > min_i.x);
        for &j in &active {
            let (min_j, max_j) = bounds[j];
            let boxes_overlap = min_i.cmple(max_j).all() && min_j.cmple(max_i).all();
            if boxes_overlap && faces[i].overlaps(&faces[j]) {
                return Some((j.min(i), j.max(i)));
            }
        }
        active.push(i);
    }
    None
}

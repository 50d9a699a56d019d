//! # Mesh Data Structure
//!
//! Core solid representation: shared vertices and triangle indices.

use std::collections::HashMap;

use config::constants::{EPSILON, VERTEX_MERGE_EPSILON};
use glam::DVec3;

/// A triangle mesh with vertices and indices.
///
/// All geometry calculations use f64. Triangles are wound counter-clockwise
/// when seen from outside the solid.
///
/// # Example
///
/// ```rust
/// use lattice_mesh::Mesh;
/// use glam::DVec3;
///
/// let mut mesh = Mesh::new();
/// mesh.add_vertex(DVec3::new(0.0, 0.0, 0.0));
/// mesh.add_vertex(DVec3::new(1.0, 0.0, 0.0));
/// mesh.add_vertex(DVec3::new(0.0, 1.0, 0.0));
/// mesh.add_triangle(0, 1, 2);
/// assert_eq!(mesh.triangle_count(), 1);
/// ```
#[derive(Debug, Clone, Default)]
pub struct Mesh {
    /// Vertex positions
    vertices: Vec<DVec3>,
    /// Triangle indices (3 indices per triangle)
    triangles: Vec<[u32; 3]>,
}

impl Mesh {
    /// Creates an empty mesh.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a mesh with pre-allocated capacity.
    pub fn with_capacity(vertex_count: usize, triangle_count: usize) -> Self {
        Self {
            vertices: Vec::with_capacity(vertex_count),
            triangles: Vec::with_capacity(triangle_count),
        }
    }

    /// Returns the number of vertices.
    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Returns the number of triangles.
    #[inline]
    pub fn triangle_count(&self) -> usize {
        self.triangles.len()
    }

    /// Returns true if the mesh has no triangles.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.triangles.is_empty()
    }

    /// Adds a vertex and returns its index.
    pub fn add_vertex(&mut self, position: DVec3) -> u32 {
        let index = self.vertices.len() as u32;
        self.vertices.push(position);
        index
    }

    /// Adds a triangle by vertex indices.
    pub fn add_triangle(&mut self, v0: u32, v1: u32, v2: u32) {
        self.triangles.push([v0, v1, v2]);
    }

    /// Returns a reference to the vertices.
    #[inline]
    pub fn vertices(&self) -> &[DVec3] {
        &self.vertices
    }

    /// Returns a reference to the triangles.
    #[inline]
    pub fn triangles(&self) -> &[[u32; 3]] {
        &self.triangles
    }

    /// Returns the three corners of a triangle.
    #[inline]
    pub fn triangle_corners(&self, index: usize) -> [DVec3; 3] {
        let [a, b, c] = self.triangles[index];
        [
            self.vertices[a as usize],
            self.vertices[b as usize],
            self.vertices[c as usize],
        ]
    }

    /// Iterates over the corners of every triangle.
    pub fn corners(&self) -> impl Iterator<Item = [DVec3; 3]> + '_ {
        (0..self.triangles.len()).map(move |i| self.triangle_corners(i))
    }

    /// Computes the axis-aligned bounding box.
    ///
    /// Returns (min, max) corners of the bounding box.
    pub fn bounding_box(&self) -> (DVec3, DVec3) {
        if self.vertices.is_empty() {
            return (DVec3::ZERO, DVec3::ZERO);
        }

        let mut min = self.vertices[0];
        let mut max = self.vertices[0];

        for v in &self.vertices[1..] {
            min = min.min(*v);
            max = max.max(*v);
        }

        (min, max)
    }

    /// Signed volume enclosed by the surface (divergence theorem).
    ///
    /// Positive for outward-facing triangles. Exact for closed surfaces,
    /// including surfaces with T-junctions.
    pub fn volume(&self) -> f64 {
        self.corners()
            .map(|[a, b, c]| a.dot(b.cross(c)))
            .sum::<f64>()
            / 6.0
    }

    /// Total area of all triangles.
    pub fn surface_area(&self) -> f64 {
        self.corners()
            .map(|[a, b, c]| (b - a).cross(c - a).length() * 0.5)
            .sum()
    }

    /// Translates the mesh by a vector.
    pub fn translate(&mut self, offset: DVec3) {
        for v in &mut self.vertices {
            *v += offset;
        }
    }

    /// Merges another mesh into this one.
    pub fn merge(&mut self, other: &Mesh) {
        let offset = self.vertices.len() as u32;

        self.vertices.extend_from_slice(&other.vertices);
        self.triangles.extend(
            other
                .triangles
                .iter()
                .map(|tri| [tri[0] + offset, tri[1] + offset, tri[2] + offset]),
        );
    }

    /// Checks that every edge is shared by exactly two triangles with
    /// opposite orientation.
    ///
    /// Coincident vertices are welded first, so meshes built from separate
    /// polygons still qualify. Surfaces with T-junctions do not.
    pub fn is_closed(&self) -> bool {
        if self.triangles.is_empty() {
            return false;
        }

        let mut welder = VertexWelder::new();
        let remap: Vec<u32> = self.vertices.iter().map(|v| welder.insert(*v)).collect();

        let mut edges: HashMap<(u32, u32), i32> = HashMap::new();
        for tri in &self.triangles {
            let t = [
                remap[tri[0] as usize],
                remap[tri[1] as usize],
                remap[tri[2] as usize],
            ];
            for i in 0..3 {
                let (a, b) = (t[i], t[(i + 1) % 3]);
                if a == b {
                    return false;
                }
                *edges.entry((a, b)).or_insert(0) += 1;
            }
        }

        edges
            .iter()
            .all(|(&(a, b), &count)| count == 1 && edges.get(&(b, a)) == Some(&1))
    }

    /// Validates the mesh for correctness.
    ///
    /// Checks:
    /// - All triangle indices are valid
    /// - No degenerate triangles (repeated index or zero area)
    pub fn validate(&self) -> bool {
        let vertex_count = self.vertices.len() as u32;

        self.triangles.iter().all(|tri| {
            if tri.iter().any(|&i| i >= vertex_count) {
                return false;
            }
            if tri[0] == tri[1] || tri[1] == tri[2] || tri[0] == tri[2] {
                return false;
            }
            let v0 = self.vertices[tri[0] as usize];
            let v1 = self.vertices[tri[1] as usize];
            let v2 = self.vertices[tri[2] as usize];
            (v1 - v0).cross(v2 - v0).length() > EPSILON
        })
    }

    /// Checks that every vertex lies inside the box `[min, max]`, with
    /// `tolerance` slack.
    pub fn is_within(&self, min: DVec3, max: DVec3, tolerance: f64) -> bool {
        let slack = DVec3::splat(tolerance);
        self.vertices
            .iter()
            .all(|v| v.cmpge(min - slack).all() && v.cmple(max + slack).all())
    }
}

// =============================================================================
// VERTEX WELDING
// =============================================================================

/// Deduplicates positions that coincide within [`VERTEX_MERGE_EPSILON`].
///
/// Positions are snapped to a grid of that pitch and looked up by cell. On a
/// miss the 26 neighbouring cells are searched too, so near-duplicates that
/// round to adjacent cells still weld.
#[derive(Debug, Default)]
pub struct VertexWelder {
    lookup: HashMap<[i64; 3], u32>,
    positions: Vec<DVec3>,
}

impl VertexWelder {
    /// Creates an empty welder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the index of `position`, inserting it if it is new.
    pub fn insert(&mut self, position: DVec3) -> u32 {
        let key = Self::key(position);
        if let Some(&index) = self.lookup.get(&key) {
            return index;
        }
        if let Some(index) = self.find_near(key, position) {
            return index;
        }
        let index = self.positions.len() as u32;
        self.positions.push(position);
        self.lookup.insert(key, index);
        index
    }

    /// Welded positions in insertion order.
    pub fn positions(&self) -> &[DVec3] {
        &self.positions
    }

    /// Consumes the welder, returning its positions.
    pub fn into_positions(self) -> Vec<DVec3> {
        self.positions
    }

    fn find_near(&self, key: [i64; 3], position: DVec3) -> Option<u32> {
        for dx in -1..=1 {
            for dy in -1..=1 {
                for dz in -1..=1 {
                    let cell = [key[0] + dx, key[1] + dy, key[2] + dz];
                    if let Some(&index) = self.lookup.get(&cell) {
                        if self.positions[index as usize].distance(position) <= VERTEX_MERGE_EPSILON
                        {
                            return Some(index);
                        }
                    }
                }
            }
        }
        None
    }

    fn key(position: DVec3) -> [i64; 3] {
        let snapped = (position / VERTEX_MERGE_EPSILON).round();
        [snapped.x as i64, snapped.y as i64, snapped.z as i64]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn tetrahedron() -> Mesh {
        let mut mesh = Mesh::new();
        mesh.add_vertex(DVec3::ZERO);
        mesh.add_vertex(DVec3::X);
        mesh.add_vertex(DVec3::Y);
        mesh.add_vertex(DVec3::Z);
        mesh.add_triangle(0, 2, 1);
        mesh.add_triangle(0, 1, 3);
        mesh.add_triangle(0, 3, 2);
        mesh.add_triangle(1, 2, 3);
        mesh
    }

    #[test]
    fn test_mesh_new() {
        let mesh = Mesh::new();
        assert!(mesh.is_empty());
        assert_eq!(mesh.vertex_count(), 0);
        assert_eq!(mesh.triangle_count(), 0);
    }

    #[test]
    fn test_mesh_bounding_box() {
        let mut mesh = Mesh::new();
        mesh.add_vertex(DVec3::new(-1.0, -2.0, -3.0));
        mesh.add_vertex(DVec3::new(4.0, 5.0, 6.0));
        let (min, max) = mesh.bounding_box();
        assert_eq!(min, DVec3::new(-1.0, -2.0, -3.0));
        assert_eq!(max, DVec3::new(4.0, 5.0, 6.0));
    }

    #[test]
    fn test_tetrahedron_volume() {
        assert_relative_eq!(tetrahedron().volume(), 1.0 / 6.0, epsilon = 1e-12);
    }

    #[test]
    fn test_tetrahedron_is_closed() {
        assert!(tetrahedron().is_closed());
    }

    #[test]
    fn test_open_surface_is_not_closed() {
        let mut mesh = tetrahedron();
        mesh.triangles.pop();
        assert!(!mesh.is_closed());
    }

    #[test]
    fn test_translate_keeps_volume() {
        let mut mesh = tetrahedron();
        mesh.translate(DVec3::new(10.0, -4.0, 2.0));
        assert_relative_eq!(mesh.volume(), 1.0 / 6.0, epsilon = 1e-9);
        assert_eq!(mesh.bounding_box().0, DVec3::new(10.0, -4.0, 2.0));
    }

    #[test]
    fn test_mesh_merge() {
        let mut a = tetrahedron();
        let mut b = tetrahedron();
        b.translate(DVec3::splat(5.0));
        a.merge(&b);
        assert_eq!(a.vertex_count(), 8);
        assert_eq!(a.triangle_count(), 8);
        assert_eq!(a.triangles()[4], [4, 6, 5]);
        assert_relative_eq!(a.volume(), 2.0 / 6.0, epsilon = 1e-9);
    }

    #[test]
    fn test_mesh_validate_invalid_index() {
        let mut mesh = Mesh::new();
        mesh.add_vertex(DVec3::ZERO);
        mesh.add_triangle(0, 1, 2);
        assert!(!mesh.validate());
    }

    #[test]
    fn test_is_within() {
        let mesh = tetrahedron();
        assert!(mesh.is_within(DVec3::ZERO, DVec3::ONE, 0.0));
        assert!(!mesh.is_within(DVec3::ZERO, DVec3::splat(0.5), 0.0));
    }

    #[test]
    fn test_welder_merges_near_duplicates() {
        let mut welder = VertexWelder::new();
        let a = welder.insert(DVec3::new(1.0, 2.0, 3.0));
        let b = welder.insert(DVec3::new(1.0, 2.0, 3.0 + VERTEX_MERGE_EPSILON * 0.1));
        let c = welder.insert(DVec3::new(1.0, 2.0, 4.0));
        assert_eq!(a, b);
        assert_ne!(a, c);
        assert_eq!(welder.positions().len(), 2);
    }

    #[test]
    fn test_welder_merges_across_cell_boundary() {
        // 0.49 and 0.51 grid steps round to different cells
        let mut welder = VertexWelder::new();
        let a = welder.insert(DVec3::new(VERTEX_MERGE_EPSILON * 0.49, 0.0, 0.0));
        let b = welder.insert(DVec3::new(VERTEX_MERGE_EPSILON * 0.51, 0.0, 0.0));
        assert_eq!(a, b);
        assert_eq!(welder.positions().len(), 1);
    }
}

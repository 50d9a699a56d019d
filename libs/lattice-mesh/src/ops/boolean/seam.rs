//! # Seam Repair
//!
//! BSP splitting cuts a polygon without touching its neighbours, leaving
//! T-junctions: a vertex of one polygon sitting inside an edge of the next.
//! Splitting every edge at the welded vertices lying on it gives both sides
//! of a seam the same vertex sequence, so the triangulated surface is
//! edge-manifold.
//!
//! Candidate vertices come from a hash grid over welded positions, sized the
//! same way as the triangle index of the manifold boolean backend.

use std::collections::HashMap;

use config::constants::{EPSILON, SEAM_EPSILON};
use glam::DVec3;

/// Cell size multiplier for spatial hashing.
const CELL_SIZE_FACTOR: f64 = 2.0;

/// Minimum cell size to avoid too many cells.
const MIN_CELL_SIZE: f64 = 1e-3;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
struct CellCoord {
    x: i64,
    y: i64,
    z: i64,
}

impl CellCoord {
    fn from_position(pos: DVec3, cell_size: f64) -> Self {
        Self {
            x: (pos.x / cell_size).floor() as i64,
            y: (pos.y / cell_size).floor() as i64,
            z: (pos.z / cell_size).floor() as i64,
        }
    }
}

/// Hash grid over the vertices referenced by a set of outlines.
#[derive(Debug)]
pub struct PointGrid<'a> {
    positions: &'a [DVec3],
    grid: HashMap<CellCoord, Vec<u32>>,
    cell_size: f64,
}

impl<'a> PointGrid<'a> {
    /// Indexes every vertex used by `outlines`.
    pub fn build(positions: &'a [DVec3], outlines: &[Vec<u32>]) -> Self {
        let mut used = vec![false; positions.len()];
        let mut ids = Vec::new();
        let mut min = DVec3::splat(f64::INFINITY);
        let mut max = DVec3::splat(f64::NEG_INFINITY);
        for &id in outlines.iter().flatten() {
            if !used[id as usize] {
                used[id as usize] = true;
                ids.push(id);
                let p = positions[id as usize];
                min = min.min(p);
                max = max.max(p);
            }
        }

        let extent = (max - min).max(DVec3::ZERO);
        let avg_extent = (extent.x + extent.y + extent.z) / 3.0;
        let count = ids.len().max(1) as f64;
        let cell_size = (avg_extent / count.cbrt() * CELL_SIZE_FACTOR).max(MIN_CELL_SIZE);

        let mut grid: HashMap<CellCoord, Vec<u32>> = HashMap::new();
        for id in ids {
            let cell = CellCoord::from_position(positions[id as usize], cell_size);
            grid.entry(cell).or_default().push(id);
        }

        Self {
            positions,
            grid,
            cell_size,
        }
    }

    /// Indexed vertices strictly inside segment `a → b`, ordered from `a`.
    pub fn points_on_segment(&self, a: u32, b: u32) -> Vec<u32> {
        let pa = self.positions[a as usize];
        let pb = self.positions[b as usize];
        let edge = pb - pa;
        let length = edge.length();
        if length <= EPSILON {
            return Vec::new();
        }

        let slack = DVec3::splat(SEAM_EPSILON);
        let lo = CellCoord::from_position(pa.min(pb) - slack, self.cell_size);
        let hi = CellCoord::from_position(pa.max(pb) + slack, self.cell_size);
        let span = |l: i64, h: i64| (h - l + 1) as u64;
        let cells = span(lo.x, hi.x)
            .saturating_mul(span(lo.y, hi.y))
            .saturating_mul(span(lo.z, hi.z));

        let mut hits: Vec<(f64, u32)> = Vec::new();
        let mut test = |id: u32| {
            if id == a || id == b {
                return;
            }
            let offset = self.positions[id as usize] - pa;
            let along = offset.dot(edge) / length;
            if along <= SEAM_EPSILON || along >= length - SEAM_EPSILON {
                return;
            }
            let across = offset - edge * (along / length);
            if across.length() <= SEAM_EPSILON {
                hits.push((along, id));
            }
        };

        // Long edges over a fine grid: scanning occupied cells is cheaper
        if cells > self.grid.len() as u64 {
            for &id in self.grid.values().flatten() {
                test(id);
            }
        } else {
            for x in lo.x..=hi.x {
                for y in lo.y..=hi.y {
                    for z in lo.z..=hi.z {
                        if let Some(ids) = self.grid.get(&CellCoord { x, y, z }) {
                            for &id in ids {
                                test(id);
                            }
                        }
                    }
                }
            }
        }

        hits.sort_by(|l, r| l.0.total_cmp(&r.0).then(l.1.cmp(&r.1)));
        hits.into_iter().map(|(_, id)| id).collect()
    }

    /// Splits every edge of `outline` at the indexed vertices lying on it.
    pub fn split_outline(&self, outline: &[u32]) -> Vec<u32> {
        let mut split = Vec::with_capacity(outline.len());
        for (i, &a) in outline.iter().enumerate() {
            let b = outline[(i + 1) % outline.len()];
            split.push(a);
            split.extend(self.points_on_segment(a, b));
        }
        split
    }
}

/// Area of the polygon traced by `outline`.
pub fn outline_area(outline: &[u32], positions: &[DVec3]) -> f64 {
    let n = outline.len();
    let mut normal = DVec3::ZERO;
    for i in 0..n {
        let p = positions[outline[i] as usize];
        let q = positions[outline[(i + 1) % n] as usize];
        normal += p.cross(q);
    }
    normal.length() * 0.5
}

/// Triangulates a convex outline into `triangles`.
///
/// Outlines whose vertices are all proper corners are fanned from the first
/// vertex. An outline with a vertex on a straight run would give that fan a
/// zero-area triangle, so it is fanned from its centroid instead; the
/// centroid is appended to `positions`.
pub fn triangulate(outline: &[u32], positions: &mut Vec<DVec3>, triangles: &mut Vec<[u32; 3]>) {
    let n = outline.len();
    if n < 3 {
        return;
    }
    let points: Vec<DVec3> = outline.iter().map(|&id| positions[id as usize]).collect();

    let has_flat_vertex =
        (0..n).any(|i| is_flat(points[(i + n - 1) % n], points[i], points[(i + 1) % n]));
    if !has_flat_vertex {
        for i in 1..n - 1 {
            push_triangle(
                triangles,
                [outline[0], outline[i], outline[i + 1]],
                [points[0], points[i], points[i + 1]],
            );
        }
        return;
    }

    let centroid = points.iter().fold(DVec3::ZERO, |acc, p| acc + *p) / n as f64;
    let apex = positions.len() as u32;
    positions.push(centroid);
    for i in 0..n {
        let j = (i + 1) % n;
        push_triangle(
            triangles,
            [apex, outline[i], outline[j]],
            [centroid, points[i], points[j]],
        );
    }
}

fn is_flat(prev: DVec3, point: DVec3, next: DVec3) -> bool {
    let base = next - prev;
    let length = base.length();
    if length <= EPSILON {
        return true;
    }
    base.cross(point - prev).length() / length <= SEAM_EPSILON
}

fn push_triangle(triangles: &mut Vec<[u32; 3]>, ids: [u32; 3], points: [DVec3; 3]) {
    let [a, b, c] = ids;
    if a == b || b == c || a == c {
        return;
    }
    let area = (points[1] - points[0]).cross(points[2] - points[0]).length() * 0.5;
    if area > EPSILON {
        triangles.push(ids);
    }
}

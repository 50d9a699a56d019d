//! # BSP Tree
//!
//! Binary Space Partitioning tree for CSG boolean operations.
//! Based on the csg.js algorithm by Evan Wallace.
//!
//! ## Algorithm
//!
//! Each BSP node contains:
//! - A dividing plane
//! - Polygons coplanar with the plane
//! - Front subtree (polygons in front of plane)
//! - Back subtree (polygons behind plane)
//!
//! ## Stack Safety
//!
//! Nodes live in an arena and link to their children by index. Every
//! operation walks the tree with an explicit work stack, or simply scans the
//! arena when visiting order does not matter, so lattices with thousands of
//! planes never recurse.

use super::plane::Plane;
use super::polygon::{Polygon, Split};

/// A node in the BSP tree.
#[derive(Debug, Clone, Default)]
struct BspNode {
    /// Dividing plane; `None` until the first polygon arrives
    plane: Option<Plane>,
    /// Polygons coplanar with this node's plane
    polygons: Vec<Polygon>,
    /// Arena index of the front subtree
    front: Option<usize>,
    /// Arena index of the back subtree
    back: Option<usize>,
}

/// Arena-backed BSP tree; node 0 is the root.
#[derive(Debug, Clone)]
pub struct BspTree {
    nodes: Vec<BspNode>,
}

impl BspTree {
    /// Creates a BSP tree from polygons.
    pub fn new(polygons: Vec<Polygon>) -> Self {
        let mut tree = Self {
            nodes: vec![BspNode::default()],
        };
        tree.build(polygons);
        tree
    }

    /// Inserts polygons into the tree, splitting them along existing planes
    /// and creating nodes where needed.
    ///
    /// The first polygon reaching an empty node becomes its splitter.
    pub fn build(&mut self, polygons: Vec<Polygon>) {
        let mut stack: Vec<(usize, Vec<Polygon>)> = vec![(0, polygons)];

        while let Some((index, polys)) = stack.pop() {
            if polys.is_empty() {
                continue;
            }

            let plane = match self.nodes[index].plane {
                Some(plane) => plane,
                None => {
                    let plane = *polys[0].plane();
                    self.nodes[index].plane = Some(plane);
                    plane
                }
            };

            let mut split = Split::default();
            for poly in polys {
                poly.split(&plane, &mut split);
            }

            let node = &mut self.nodes[index];
            node.polygons.append(&mut split.coplanar_front);
            node.polygons.append(&mut split.coplanar_back);

            if !split.front.is_empty() {
                let child = self.child(index, Side::Front);
                stack.push((child, split.front));
            }
            if !split.back.is_empty() {
                let child = self.child(index, Side::Back);
                stack.push((child, split.back));
            }
        }
    }

    /// Converts solid space to empty space and vice versa.
    pub fn invert(&mut self) {
        for node in &mut self.nodes {
            for poly in &mut node.polygons {
                poly.flip();
            }
            node.plane = node.plane.map(|p| p.flipped());
            std::mem::swap(&mut node.front, &mut node.back);
        }
    }

    /// Removes the parts of `polygons` that lie inside this tree's solid.
    pub fn clip_polygons(&self, polygons: Vec<Polygon>) -> Vec<Polygon> {
        let mut result = Vec::new();
        let mut stack: Vec<(usize, Vec<Polygon>)> = vec![(0, polygons)];

        while let Some((index, polys)) = stack.pop() {
            let node = &self.nodes[index];
            let Some(plane) = node.plane else {
                result.extend(polys);
                continue;
            };

            let mut split = Split::default();
            for poly in polys {
                poly.split(&plane, &mut split);
            }
            let mut front = split.front;
            front.append(&mut split.coplanar_front);
            let mut back = split.back;
            back.append(&mut split.coplanar_back);

            match node.front {
                Some(child) => stack.push((child, front)),
                None => result.extend(front),
            }
            // Without a back subtree, back polygons are inside the solid
            if let Some(child) = node.back {
                stack.push((child, back));
            }
        }

        result
    }

    /// Removes the parts of this tree's polygons that lie inside `other`.
    pub fn clip_to(&mut self, other: &BspTree) {
        for node in &mut self.nodes {
            let polygons = std::mem::take(&mut node.polygons);
            node.polygons = other.clip_polygons(polygons);
        }
    }

    /// Collects all polygons from the tree.
    pub fn all_polygons(&self) -> Vec<Polygon> {
        self.nodes
            .iter()
            .flat_map(|node| node.polygons.iter().cloned())
            .collect()
    }

    /// Returns the number of polygons in this tree.
    pub fn polygon_count(&self) -> usize {
        self.nodes.iter().map(|node| node.polygons.len()).sum()
    }

    /// Returns the number of nodes in this tree.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    fn child(&mut self, index: usize, side: Side) -> usize {
        let existing = match side {
            Side::Front => self.nodes[index].front,
            Side::Back => self.nodes[index].back,
        };
        if let Some(child) = existing {
            return child;
        }

        let child = self.nodes.len();
        self.nodes.push(BspNode::default());
        match side {
            Side::Front => self.nodes[index].front = Some(child),
            Side::Back => self.nodes[index].back = Some(child),
        }
        child
    }
}

#[derive(Debug, Clone, Copy)]
enum Side {
    Front,
    Back,
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::DVec3;

    fn triangle(z: f64) -> Polygon {
        Polygon::from_vertices(vec![
            DVec3::new(0.0, 0.0, z),
            DVec3::new(1.0, 0.0, z),
            DVec3::new(0.0, 1.0, z),
        ])
        .unwrap()
    }

    #[test]
    fn test_bsp_new_empty() {
        let tree = BspTree::new(vec![]);
        assert_eq!(tree.polygon_count(), 0);
        assert_eq!(tree.node_count(), 1);
    }

    #[test]
    fn test_bsp_new_multiple() {
        let tree = BspTree::new(vec![triangle(0.0), triangle(1.0), triangle(-1.0)]);
        assert_eq!(tree.polygon_count(), 3);
        assert_eq!(tree.node_count(), 3);
    }

    #[test]
    fn test_bsp_coplanar_polygons_share_node() {
        let mut flipped = triangle(0.0);
        flipped.flip();
        let tree = BspTree::new(vec![triangle(0.0), flipped]);
        assert_eq!(tree.node_count(), 1);
        assert_eq!(tree.polygon_count(), 2);
    }

    #[test]
    fn test_bsp_invert() {
        let mut tree = BspTree::new(vec![triangle(0.0)]);
        tree.invert();
        let normal = tree.all_polygons()[0].plane().normal();
        assert!((normal + DVec3::Z).length() < 1e-12);
    }

    #[test]
    fn test_bsp_clip_polygons_front_survives() {
        let tree = BspTree::new(vec![triangle(0.0)]);
        let result = tree.clip_polygons(vec![triangle(1.0)]);
        assert_eq!(result.len(), 1);
    }

    #[test]
    fn test_bsp_clip_polygons_back_is_removed() {
        let tree = BspTree::new(vec![triangle(0.0)]);
        let result = tree.clip_polygons(vec![triangle(-1.0)]);
        assert!(result.is_empty());
    }

    #[test]
    fn test_empty_tree_clips_nothing() {
        let tree = BspTree::new(vec![]);
        let result = tree.clip_polygons(vec![triangle(-1.0), triangle(1.0)]);
        assert_eq!(result.len(), 2);
    }
}

//! # STL Export
//!
//! Writes meshes as ASCII STL:
//!
//! ```text
//! solid name
//!   facet normal ni nj nk
//!     outer loop
//!       vertex v1x v1y v1z
//!       vertex v2x v2y v2z
//!       vertex v3x v3y v3z
//!     endloop
//!   endfacet
//! endsolid name
//! ```

use std::io::Write;

use config::constants::EPSILON;
use glam::DVec3;

use crate::error::MeshError;
use crate::mesh::Mesh;

/// Writes `mesh` as an ASCII STL solid called `name`.
///
/// Whitespace in `name` is replaced by underscores so the header stays a
/// single token.
///
/// # Errors
///
/// Returns [`MeshError::Io`] if the writer fails.
///
/// # Example
///
/// ```rust
/// use glam::DVec3;
/// use lattice_mesh::{create_box, export::write_stl};
///
/// let mesh = create_box(DVec3::ONE).unwrap();
/// let mut out = Vec::new();
/// write_stl(&mesh, "cube", &mut out).unwrap();
/// assert!(String::from_utf8(out).unwrap().starts_with("solid cube"));
/// ```
pub fn write_stl<W: Write>(mesh: &Mesh, name: &str, mut writer: W) -> Result<(), MeshError> {
    let name: String = name
        .chars()
        .map(|c| if c.is_whitespace() { '_' } else { c })
        .collect();

    writeln!(writer, "solid {name}")?;

    for [v0, v1, v2] in mesh.corners() {
        let n = facet_normal(v0, v1, v2);
        writeln!(writer, "  facet normal {:.6e} {:.6e} {:.6e}", n.x, n.y, n.z)?;
        writeln!(writer, "    outer loop")?;
        for v in [v0, v1, v2] {
            writeln!(writer, "      vertex {:.6e} {:.6e} {:.6e}", v.x, v.y, v.z)?;
        }
        writeln!(writer, "    endloop")?;
        writeln!(writer, "  endfacet")?;
    }

    writeln!(writer, "endsolid {name}")?;
    writer.flush()?;
    Ok(())
}

/// Unit normal from the winding, zero for degenerate triangles.
fn facet_normal(v0: DVec3, v1: DVec3, v2: DVec3) -> DVec3 {
    let normal = (v1 - v0).cross(v2 - v0);
    let len = normal.length();
    if len > EPSILON {
        normal / len
    } else {
        DVec3::ZERO
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::primitives::create_box;

    fn export(mesh: &Mesh, name: &str) -> String {
        let mut out = Vec::new();
        write_stl(mesh, name, &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_box_stl_structure() {
        let mesh = create_box(DVec3::new(2.0, 3.0, 4.0)).unwrap();
        let text = export(&mesh, "box");

        assert!(text.starts_with("solid box\n"));
        assert!(text.trim_end().ends_with("endsolid box"));
        assert_eq!(text.matches("facet normal").count(), 12);
        assert_eq!(text.matches("vertex").count(), 36);
        assert_eq!(text.matches("endloop").count(), 12);
    }

    #[test]
    fn test_facet_normals_point_outward() {
        let mesh = create_box(DVec3::ONE).unwrap();
        let text = export(&mesh, "cube");
        // Bottom face triangles come first
        let first = text.lines().nth(1).unwrap();
        assert!(first.contains("-1.000000e0"), "{first}");
    }

    #[test]
    fn test_name_whitespace_is_replaced() {
        let text = export(&Mesh::new(), "honeycomb solid");
        assert_eq!(text, "solid honeycomb_solid\nendsolid honeycomb_solid\n");
    }

    #[test]
    fn test_degenerate_triangle_has_zero_normal() {
        let n = facet_normal(DVec3::ZERO, DVec3::X, DVec3::X * 2.0);
        assert_eq!(n, DVec3::ZERO);
    }
}

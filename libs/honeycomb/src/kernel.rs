//! # Geometry Kernel Interface
//!
//! The honeycomb feature never touches geometry directly; it calls a
//! [`GeometryKernel`]. [`MeshKernel`] implements the trait on top of
//! `lattice-mesh`.

use glam::DVec3;
use lattice_mesh::{Face, Mesh, MeshError, Shell, Wire};

/// Primitives a CAD kernel must offer to build a honeycomb.
///
/// Every call is blocking and deterministic. Errors are returned unchanged
/// to the caller of the builder.
pub trait GeometryKernel {
    /// Closed 3D solid
    type Solid;
    /// Polyline, closed when its last point repeats its first
    type Wire;
    /// Planar face bounded by a closed wire
    type Face;
    /// Faces joined into one skin
    type Shell;
    /// Kernel failure
    type Error: std::error::Error + Send + Sync + 'static;

    /// Axis-aligned box spanning `[0, l] × [0, w] × [0, h]`.
    fn make_box(&self, length: f64, width: f64, height: f64) -> Result<Self::Solid, Self::Error>;

    /// Polyline through `points`.
    fn make_polygon(&self, points: &[DVec3]) -> Result<Self::Wire, Self::Error>;

    /// Planar face bounded by a closed wire.
    fn make_face(&self, wire: &Self::Wire) -> Result<Self::Face, Self::Error>;

    /// Shell from faces; shared vertices are merged.
    fn make_shell(&self, faces: Vec<Self::Face>) -> Result<Self::Shell, Self::Error>;

    /// Sweeps every face of `shell` along `direction` into a prism.
    fn extrude(&self, shell: &Self::Shell, direction: DVec3) -> Result<Self::Solid, Self::Error>;

    /// Boolean difference `base - tool`.
    fn cut(&self, base: &Self::Solid, tool: &Self::Solid) -> Result<Self::Solid, Self::Error>;
}

/// [`GeometryKernel`] backed by the `lattice-mesh` triangle-mesh kernel.
#[derive(Debug, Clone, Copy, Default)]
pub struct MeshKernel;

impl GeometryKernel for MeshKernel {
    type Solid = Mesh;
    type Wire = Wire;
    type Face = Face;
    type Shell = Shell;
    type Error = MeshError;

    fn make_box(&self, length: f64, width: f64, height: f64) -> Result<Mesh, MeshError> {
        lattice_mesh::create_box(DVec3::new(length, width, height))
    }

    fn make_polygon(&self, points: &[DVec3]) -> Result<Wire, MeshError> {
        Wire::new(points.to_vec())
    }

    fn make_face(&self, wire: &Wire) -> Result<Face, MeshError> {
        Face::from_wire(wire)
    }

    fn make_shell(&self, faces: Vec<Face>) -> Result<Shell, MeshError> {
        Shell::new(faces)
    }

    fn extrude(&self, shell: &Shell, direction: DVec3) -> Result<Mesh, MeshError> {
        lattice_mesh::extrude(shell, direction)
    }

    fn cut(&self, base: &Mesh, tool: &Mesh) -> Result<Mesh, MeshError> {
        lattice_mesh::difference(base, tool)
    }
}

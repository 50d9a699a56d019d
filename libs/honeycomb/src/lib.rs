//! # Honeycomb
//!
//! Parametric honeycomb lattice solids: a box with a staggered array of
//! hexagonal prisms cut out of it.
//!
//! ## Architecture
//!
//! ```text
//! LatticeParameters → validate → LatticeField → faces → shell → extrude → cut → Solid
//!                                  (tiling)          (GeometryKernel calls)
//! ```
//!
//! ## Modules
//!
//! - [`params`]: the five properties, validation and property schema
//! - [`hexagon`]: regular hexagon outlines
//! - [`tiling`]: radial tiling engine and field clipping
//! - [`kernel`]: the geometry kernel trait and the `lattice-mesh` adapter
//! - [`builder`]: face → shell → extrude → cut assembly
//! - [`feature`]: host-facing feature object with recompute and saved state
//!
//! ## Usage
//!
//! ```rust
//! use honeycomb::{build_honeycomb, LatticeParameters};
//!
//! let params = LatticeParameters::new(40.0, 30.0, 2.0, 4.0, 1.0);
//! let solid = build_honeycomb(&params).unwrap();
//! assert!(solid.volume() < 40.0 * 30.0 * 2.0);
//! ```

pub mod builder;
pub mod error;
pub mod feature;
pub mod hexagon;
pub mod kernel;
pub mod params;
pub mod tiling;

pub use builder::{assemble_solid, hexagon_faces, HexLatticeBuilder, LatticeSolid};
pub use error::{ConfigurationError, HoneycombError};
pub use feature::{FeatureState, HoneycombFeature};
pub use hexagon::{generate_hexagon, hexagon_apothem, hexagon_area};
pub use kernel::{GeometryKernel, MeshKernel};
pub use params::{property_schema, LatticeParameters, Property, PropertySpec};
pub use tiling::{
    compute_lattice_offsets, CellClip, LatticeCell, LatticeField, LatticeLayout, PlacedCell,
    TilingConfig,
};

use lattice_mesh::Mesh;

/// Builds a honeycomb with the mesh kernel and default tiling.
///
/// # Errors
///
/// See [`HexLatticeBuilder::build`].
pub fn build_honeycomb(params: &LatticeParameters) -> Result<Mesh, HoneycombError> {
    HexLatticeBuilder::new(MeshKernel).build(params)
}

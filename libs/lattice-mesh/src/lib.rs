//! # Lattice Mesh
//!
//! Pure Rust geometry kernel used to build honeycomb lattice solids.
//! Solids are triangle meshes; construction follows the classic CAD recipe
//! of wire → face → shell → extrusion → boolean.
//!
//! ## Architecture
//!
//! ```text
//! points → Wire → Face ─┐
//!                       ├→ Shell → extrude → Mesh ─┐
//! points → Wire → Face ─┘                          ├→ difference → Mesh
//!                               create_box → Mesh ─┘
//! ```
//!
//! ## Algorithms
//!
//! - **Boolean Operations**: BSP trees (csg.js algorithm), arena-backed
//! - **Seams**: T-junctions closed after the boolean, so results are edge-manifold
//! - **Faces**: Newell normals, convexity and planarity checks
//! - **Shells**: Vertex welding, separating-axis overlap detection
//! - **Extrusion**: Caps for every face, walls for boundary edges only
//!
//! ## Usage
//!
//! ```rust
//! use glam::DVec3;
//! use lattice_mesh::{create_box, difference, extrude, Face, Shell, Wire};
//!
//! let container = create_box(DVec3::new(10.0, 10.0, 1.0)).unwrap();
//! let wire = Wire::new(vec![
//!     DVec3::new(4.0, 4.0, 0.0),
//!     DVec3::new(6.0, 4.0, 0.0),
//!     DVec3::new(6.0, 6.0, 0.0),
//!     DVec3::new(4.0, 6.0, 0.0),
//!     DVec3::new(4.0, 4.0, 0.0),
//! ])
//! .unwrap();
//! let shell = Shell::new(vec![Face::from_wire(&wire).unwrap()]).unwrap();
//! let tool = extrude(&shell, DVec3::Z).unwrap();
//! let result = difference(&container, &tool).unwrap();
//! assert!((result.volume() - 96.0).abs() < 1e-6);
//! ```

pub mod error;
pub mod export;
pub mod mesh;
pub mod ops;
pub mod primitives;
pub mod topology;

pub use error::MeshError;
pub use mesh::Mesh;
pub use ops::{difference, extrude};
pub use primitives::create_box;
pub use topology::{Face, Shell, Wire};

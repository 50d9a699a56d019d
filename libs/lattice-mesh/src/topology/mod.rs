//! # Topology
//!
//! Boundary-representation building blocks consumed by the extrusion:
//! closed polygon [`Wire`]s, planar convex [`Face`]s and [`Shell`]s that
//! join faces and weld the vertices they share.

mod face;
mod shell;
mod wire;

pub use face::Face;
pub use shell::Shell;
pub use wire::Wire;

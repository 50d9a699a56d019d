//! # Mesh Operations
//!
//! Operations producing solids: linear extrusion of shells and boolean
//! difference (CSG).

pub mod boolean;
pub mod extrude;

pub use boolean::difference;
pub use extrude::extrude;

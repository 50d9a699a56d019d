//! # Config Crate
//!
//! Centralized configuration constants for the honeycomb lattice workspace.
//! All magic numbers and tunable parameters are defined here so the kernel,
//! the lattice feature and the command-line host agree on them.
//!
//! ## Usage
//!
//! ```rust
//! use config::constants::{DEFAULT_CIRCUMRADIUS, DEFAULT_THICKNESS, EPSILON};
//!
//! // Wall pitch of the default lattice
//! let pitch = DEFAULT_CIRCUMRADIUS + DEFAULT_THICKNESS;
//! assert!((pitch - 6.0).abs() < EPSILON);
//! ```
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: All constants defined once, used everywhere
//! - **Host Compatible**: Feature defaults match the CAD feature's properties
//! - **Tunable Heuristics**: Empirical tiling constants live here, not inline

pub mod constants;

#[cfg(test)]
mod tests;

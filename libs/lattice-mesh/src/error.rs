//! # Mesh Errors
//!
//! Error types for kernel operations.

use thiserror::Error;

/// Errors that can occur while constructing geometry.
#[derive(Debug, Error)]
pub enum MeshError {
    /// Invalid mesh or shell topology
    #[error("Invalid topology: {message}")]
    InvalidTopology {
        /// Description of the problem
        message: String,
    },

    /// Degenerate geometry (zero area, non-planar, collapsed)
    #[error("Degenerate geometry: {message}")]
    DegenerateGeometry {
        /// Description of the problem
        message: String,
    },

    /// Boolean operation failed
    #[error("Boolean operation failed: {message}")]
    BooleanFailed {
        /// Description of the problem
        message: String,
    },

    /// Too many triangles
    #[error("Too many triangles: {count} (max: {max})")]
    TooManyTriangles {
        /// Triangles produced
        count: usize,
        /// Configured limit
        max: usize,
    },

    /// Export failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl MeshError {
    /// Creates an invalid topology error.
    pub fn invalid_topology(message: impl Into<String>) -> Self {
        Self::InvalidTopology {
            message: message.into(),
        }
    }

    /// Creates a degenerate geometry error.
    pub fn degenerate(message: impl Into<String>) -> Self {
        Self::DegenerateGeometry {
            message: message.into(),
        }
    }

    /// Creates a boolean operation failed error.
    pub fn boolean_failed(message: impl Into<String>) -> Self {
        Self::BooleanFailed {
            message: message.into(),
        }
    }
}

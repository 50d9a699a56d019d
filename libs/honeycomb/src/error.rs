//! # Error Types
//!
//! Errors raised while configuring or building a honeycomb solid.
//!
//! ## Error Policy
//!
//! - Parameters are validated before any kernel call
//! - Kernel failures propagate unchanged as the error source
//! - No retries and no partial results

use std::error::Error;

use thiserror::Error;

// =============================================================================
// ERROR TYPES
// =============================================================================

/// Invalid or inconsistent feature parameters.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigurationError {
    /// A dimension must be strictly positive.
    #[error("{name} must be greater than zero (got {value})")]
    NonPositive {
        /// Property name
        name: &'static str,
        /// Rejected value
        value: f64,
    },

    /// A property may be zero but never negative.
    #[error("{name} must not be negative (got {value})")]
    Negative {
        /// Property name
        name: &'static str,
        /// Rejected value
        value: f64,
    },

    /// NaN or infinite value.
    #[error("{name} must be a finite number (got {value})")]
    NotFinite {
        /// Property name
        name: &'static str,
        /// Rejected value
        value: f64,
    },

    /// Hexagon plus wall does not fit inside half the smaller box side.
    #[error(
        "circumradius + thickness ({circumradius} + {thickness}) must be less than {limit} \
         (half the smaller of length and width)"
    )]
    WallTooLarge {
        /// Hexagon circumradius
        circumradius: f64,
        /// Wall thickness
        thickness: f64,
        /// `min(length, width) / 2`
        limit: f64,
    },

    /// The tiling loop would visit too many cells.
    #[error("lattice would visit {cells} cells (max: {max})")]
    TooManyCells {
        /// Cells the tiling loop would visit
        cells: u64,
        /// Configured limit
        max: usize,
    },

    /// No property with this name exists.
    #[error("unknown property '{name}'")]
    UnknownProperty {
        /// Requested name
        name: String,
    },

    /// A saved state belongs to a different feature type.
    #[error("state is for '{found}', expected '{expected}'")]
    StateMismatch {
        /// Type this feature restores
        expected: String,
        /// Type recorded in the state
        found: String,
    },
}

/// Errors produced while building a honeycomb solid.
///
/// ## Example
///
/// ```rust
/// use honeycomb::{build_honeycomb, HoneycombError, LatticeParameters};
///
/// let params = LatticeParameters {
///     circumradius: 0.0,
///     ..LatticeParameters::default()
/// };
/// match build_honeycomb(&params) {
///     Err(HoneycombError::Configuration(e)) => eprintln!("bad input: {e}"),
///     Err(e) => eprintln!("kernel failure: {e}"),
///     Ok(solid) => println!("volume {}", solid.volume()),
/// }
/// ```
#[derive(Debug, Error)]
pub enum HoneycombError {
    /// Parameters were rejected before any kernel call.
    #[error(transparent)]
    Configuration(#[from] ConfigurationError),

    /// The geometry kernel failed; the source is the kernel's own error.
    #[error("geometry construction failed: {0}")]
    GeometryConstruction(#[source] Box<dyn Error + Send + Sync>),
}

impl HoneycombError {
    /// Wraps a kernel error.
    pub fn geometry<E>(error: E) -> Self
    where
        E: Error + Send + Sync + 'static,
    {
        Self::GeometryConstruction(Box::new(error))
    }

    /// Returns true if the parameters were rejected before any kernel call.
    pub fn is_configuration(&self) -> bool {
        matches!(self, Self::Configuration(_))
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use lattice_mesh::MeshError;

    #[test]
    fn test_configuration_display() {
        let err = ConfigurationError::NonPositive {
            name: "Circumradius",
            value: 0.0,
        };
        assert_eq!(err.to_string(), "Circumradius must be greater than zero (got 0)");
    }

    #[test]
    fn test_configuration_is_transparent() {
        let err = HoneycombError::from(ConfigurationError::UnknownProperty {
            name: "Depth".into(),
        });
        assert!(err.is_configuration());
        assert_eq!(err.to_string(), "unknown property 'Depth'");
    }

    #[test]
    fn test_geometry_error_keeps_source() {
        let err = HoneycombError::geometry(MeshError::boolean_failed("empty"));
        assert!(!err.is_configuration());

        let source = err.source().unwrap();
        let mesh_error = source.downcast_ref::<MeshError>().unwrap();
        assert!(matches!(mesh_error, MeshError::BooleanFailed { .. }));
    }
}

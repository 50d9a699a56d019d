//! # Configuration Constants
//!
//! Centralized constants for the honeycomb lattice pipeline.
//!
//! ## Categories
//!
//! - **Precision**: Floating-point comparison tolerances
//! - **Feature Defaults**: Default values of the five lattice properties
//! - **Tiling**: Hexagon topology and the empirical row margin
//! - **Limits**: Maximum values for safety bounds

// =============================================================================
// PRECISION CONSTANTS
// =============================================================================

/// Epsilon for floating-point comparisons.
///
/// # Example
///
/// ```rust
/// use config::constants::EPSILON;
///
/// fn approximately_equal(a: f64, b: f64) -> bool {
///     (a - b).abs() < EPSILON
/// }
///
/// assert!(approximately_equal(1.0, 1.0 + 1e-11));
/// ```
pub const EPSILON: f64 = 1e-10;

/// Epsilon for vertex deduplication.
///
/// Used when welding nearly-identical vertices, e.g. the corners shared by
/// faces of a shell or the closing point of a polygon wire.
pub const VERTEX_MERGE_EPSILON: f64 = 1e-8;

/// Distance within which a vertex counts as lying on a polygon edge.
///
/// Used when closing T-junctions left by BSP splitting: a vertex this close
/// to the interior of a neighbouring edge is inserted into that edge.
pub const SEAM_EPSILON: f64 = 1e-6;

/// Tolerance for point/plane classification during BSP boolean operations.
///
/// Larger than [`VERTEX_MERGE_EPSILON`] because split points accumulate
/// rounding error as polygons are cut repeatedly.
pub const PLANE_EPSILON: f64 = 1e-5;

// =============================================================================
// FEATURE DEFAULTS
// =============================================================================

/// Default length (x extent) of the honeycomb container box.
pub const DEFAULT_LENGTH: f64 = 100.0;

/// Default width (y extent) of the honeycomb container box.
pub const DEFAULT_WIDTH: f64 = 100.0;

/// Default height (z extent) of the honeycomb container box.
pub const DEFAULT_HEIGHT: f64 = 2.0;

/// Default hexagon circumradius (centre to vertex).
pub const DEFAULT_CIRCUMRADIUS: f64 = 5.0;

/// Default honeycomb wall thickness.
pub const DEFAULT_THICKNESS: f64 = 1.0;

// =============================================================================
// TILING CONSTANTS
// =============================================================================

/// Number of edges of a lattice cell.
///
/// # Example
///
/// ```rust
/// use config::constants::HEXAGON_EDGES;
///
/// let step_degrees = 360.0 / HEXAGON_EDGES as f64;
/// assert_eq!(step_degrees, 60.0);
/// ```
pub const HEXAGON_EDGES: usize = 6;

/// Extra rows added to the row count of the tiling loop.
///
/// Odd columns are shifted by half a pitch, so without a margin the rows
/// at the top and bottom of the rectangle leave gaps. The value is
/// empirical, not derived from the packing geometry.
pub const ROW_MARGIN: f64 = 3.0;

/// Grid resolution (per axis) used when sampling a rectangle for coverage
/// gaps.
pub const COVERAGE_SAMPLES: usize = 64;

// =============================================================================
// LIMIT CONSTANTS
// =============================================================================

/// Maximum number of (column, row) iterations of the tiling loop.
///
/// Guards against runaway lattices when the hexagon is tiny compared to the
/// bounding box.
///
/// # Example
///
/// ```rust
/// use config::constants::MAX_LATTICE_CELLS;
///
/// // The default 100 x 100 lattice visits 18 columns x 24 rows
/// assert!(18 * 24 < MAX_LATTICE_CELLS);
/// ```
pub const MAX_LATTICE_CELLS: usize = 100_000;

/// Maximum number of triangles in a mesh produced by the kernel.
pub const MAX_TRIANGLES: usize = 10_000_000;

/// Version tag stored with serialized honeycomb features.
pub const FEATURE_VERSION: &str = "0.1.0";

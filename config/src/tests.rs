//! # Tests for Config Constants
//!
//! Unit tests verifying the sanity of configuration constants and helpers.

use crate::constants::*;

// =============================================================================
// PRECISION TESTS
// =============================================================================

#[test]
fn test_epsilon_is_positive() {
    assert!(EPSILON > 0.0, "EPSILON must be positive");
}

#[test]
fn test_vertex_merge_epsilon_larger_than_epsilon() {
    assert!(
        VERTEX_MERGE_EPSILON >= EPSILON,
        "VERTEX_MERGE_EPSILON should be >= EPSILON"
    );
}

#[test]
fn test_plane_epsilon_larger_than_merge_epsilon() {
    assert!(PLANE_EPSILON > VERTEX_MERGE_EPSILON);
}

#[test]
fn test_seam_epsilon_between_merge_and_plane() {
    assert!(SEAM_EPSILON > VERTEX_MERGE_EPSILON);
    assert!(SEAM_EPSILON < PLANE_EPSILON);
}

// =============================================================================
// FEATURE DEFAULT TESTS
// =============================================================================

#[test]
fn test_defaults_match_feature_properties() {
    assert_eq!(DEFAULT_LENGTH, 100.0);
    assert_eq!(DEFAULT_WIDTH, 100.0);
    assert_eq!(DEFAULT_HEIGHT, 2.0);
    assert_eq!(DEFAULT_CIRCUMRADIUS, 5.0);
    assert_eq!(DEFAULT_THICKNESS, 1.0);
}

#[test]
fn test_default_cell_fits_container() {
    // At least one complete cell must fit in the default box
    let pitch = DEFAULT_CIRCUMRADIUS + DEFAULT_THICKNESS;
    assert!(pitch < DEFAULT_LENGTH.min(DEFAULT_WIDTH) / 2.0);
}

// =============================================================================
// TILING TESTS
// =============================================================================

#[test]
fn test_hexagon_edges() {
    assert_eq!(HEXAGON_EDGES, 6);
}

#[test]
fn test_row_margin_is_positive() {
    assert!(ROW_MARGIN > 0.0);
}

#[test]
fn test_coverage_samples_reasonable() {
    assert!(COVERAGE_SAMPLES >= 8);
    assert!(COVERAGE_SAMPLES <= 1024);
}

// =============================================================================
// LIMIT TESTS
// =============================================================================

#[test]
fn test_max_lattice_cells_covers_defaults() {
    assert!(MAX_LATTICE_CELLS >= 1_000);
}

#[test]
fn test_max_triangles_reasonable() {
    assert!(MAX_TRIANGLES >= 1_000_000);
}

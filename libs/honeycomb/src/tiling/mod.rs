//! # Radial Tiling Engine
//!
//! Computes where the hexagons of a honeycomb go.
//!
//! ## Algorithm
//!
//! Cells are indexed by `(column, row)` around the centre of the bounding
//! rectangle. With `d = thickness + 2·r·sin(60°)` the centre-to-centre pitch:
//!
//! - every column steps `d·sin(60°)` along x
//! - odd columns hold only odd rows, stepping `d·cos(60°)` along y
//! - even columns step `d` along y and are limited to `|row| <= n_rows / 2`
//!
//! Odd columns are thereby shifted by half a pitch, giving the staggered
//! packing in which neighbours share a wall of exactly `thickness`.
//!
//! The loop visits `column ∈ [-n_cols, n_cols)` and `row ∈ [-n_rows, n_rows)`
//! where `n_cols = ceil(L / (r + t) / 2)` and
//! `n_rows = ceil(W / (r + t) / 2 + row_margin)`. The row margin (3 by
//! default) is empirical; [`LatticeField::coverage_gaps`] checks it.


use config::constants::{MAX_LATTICE_CELLS, ROW_MARGIN, VERTEX_MERGE_EPSILON};
use glam::{DVec2, DVec3};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::ConfigurationError;
use crate::hexagon::{generate_hexagon, hexagon_apothem, EDGE_ANGLE};
use crate::params::LatticeParameters;

// =============================================================================
// CONFIGURATION
// =============================================================================

/// Which tiled cells end up in the lattice field.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CellClip {
    /// Keep cells whose hexagon overlaps the rectangle with positive area.
    ///
    /// Cells outside the rectangle cannot change the cut, so the solid is
    /// the same as cutting every tiled cell.
    #[default]
    Overlap,
    /// Keep only cells whose hexagon lies entirely inside the rectangle,
    /// leaving a solid frame around the lattice.
    Contained,
}

/// Tunables of the tiling engine.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TilingConfig {
    /// Extra rows added to the row count of the loop
    pub row_margin: f64,
    /// Field clipping policy
    pub clip: CellClip,
}

impl Default for TilingConfig {
    fn default() -> Self {
        Self {
            row_margin: ROW_MARGIN,
            clip: CellClip::default(),
        }
    }
}

impl TilingConfig {
    /// Checks the row margin.
    pub fn validate(&self) -> Result<(), ConfigurationError> {
        let value = self.row_margin;
        if !value.is_finite() {
            return Err(ConfigurationError::NotFinite {
                name: "RowMargin",
                value,
            });
        }
        if value < 0.0 {
            return Err(ConfigurationError::Negative {
                name: "RowMargin",
                value,
            });
        }
        Ok(())
    }
}

// =============================================================================
// CELLS
// =============================================================================

/// Integer index of a lattice cell; `(0, 0)` is the centre cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct LatticeCell {
    /// Column index (x direction)
    pub column: i64,
    /// Row index (y direction)
    pub row: i64,
}

impl LatticeCell {
    /// The centre cell.
    pub const ORIGIN: LatticeCell = LatticeCell { column: 0, row: 0 };

    /// Creates a cell index.
    pub const fn new(column: i64, row: i64) -> Self {
        Self { column, row }
    }

    /// True for odd columns, negative ones included (`-1` is odd).
    pub fn is_odd_column(self) -> bool {
        self.column.rem_euclid(2) == 1
    }
}

/// Loop bounds of the tiling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LatticeBounds {
    /// Columns run over `[-columns, columns)`
    pub columns: i64,
    /// Rows run over `[-rows, rows)`
    pub rows: i64,
}

impl LatticeBounds {
    /// Bounds for `params` with the default row margin.
    pub fn from_params(params: &LatticeParameters) -> Self {
        Self::with_margin(params, ROW_MARGIN)
    }

    /// Bounds for `params` with an explicit row margin.
    pub fn with_margin(params: &LatticeParameters, row_margin: f64) -> Self {
        let pitch = params.circumradius + params.thickness;
        Self {
            columns: to_count((params.length / pitch / 2.0).ceil()),
            rows: to_count((params.width / pitch / 2.0 + row_margin).ceil()),
        }
    }

    /// Number of `(column, row)` pairs the loop visits.
    pub fn visited_cells(&self) -> u64 {
        let columns = (self.columns.max(0) as u64).saturating_mul(2);
        let rows = (self.rows.max(0) as u64).saturating_mul(2);
        columns.saturating_mul(rows)
    }

    /// Whether the parity rule places a hexagon at `cell`.
    pub fn admits(&self, cell: LatticeCell) -> bool {
        if cell.is_odd_column() {
            cell.row.rem_euclid(2) == 1
        } else {
            let half = self.rows as f64 / 2.0;
            let row = cell.row as f64;
            -half <= row && row <= half
        }
    }
}

/// Saturating float-to-count conversion; NaN maps to zero.
fn to_count(value: f64) -> i64 {
    if value.is_nan() {
        0
    } else {
        value.clamp(0.0, i64::MAX as f64) as i64
    }
}

// =============================================================================
// LAYOUT
// =============================================================================

/// Geometry of the tiling: pitch, steps and loop bounds.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LatticeLayout {
    /// Centre-to-centre distance of neighbouring hexagons
    pub center_distance: f64,
    /// x step per column
    pub x_delta: f64,
    /// Loop bounds
    pub bounds: LatticeBounds,
    /// Centre of the origin cell (middle of the rectangle)
    pub origin: DVec2,
}

impl LatticeLayout {
    /// Computes the layout for `params`.
    pub fn new(params: &LatticeParameters, row_margin: f64) -> Self {
        let center_distance = params.thickness + 2.0 * params.circumradius * EDGE_ANGLE.sin();
        Self {
            center_distance,
            x_delta: center_distance * EDGE_ANGLE.sin(),
            bounds: LatticeBounds::with_margin(params, row_margin),
            origin: DVec2::new(params.length / 2.0, params.width / 2.0),
        }
    }

    /// Translation of `cell` relative to the origin cell.
    pub fn offset(&self, cell: LatticeCell) -> DVec2 {
        let y_delta = if cell.is_odd_column() {
            self.center_distance * EDGE_ANGLE.cos()
        } else {
            self.center_distance
        };
        DVec2::new(cell.column as f64 * self.x_delta, cell.row as f64 * y_delta)
    }

    /// Absolute centre of `cell`.
    pub fn center(&self, cell: LatticeCell) -> DVec2 {
        self.origin + self.offset(cell)
    }

    /// Cells emitted by the tiling loop, origin excluded, in loop order
    /// (column-major).
    pub fn cells(&self) -> impl Iterator<Item = LatticeCell> + '_ {
        let LatticeBounds { columns, rows } = self.bounds;
        (-columns..columns)
            .flat_map(move |column| (-rows..rows).map(move |row| LatticeCell::new(column, row)))
            .filter(move |&cell| cell != LatticeCell::ORIGIN && self.bounds.admits(cell))
    }
}

/// Translations of every hexagon around the centred one.
///
/// The centre hexagon itself is not listed; each returned offset is added to
/// the rectangle midpoint `(length / 2, width / 2)`. Offsets come in loop
/// order and are not clipped to the rectangle.
///
/// # Errors
///
/// The inputs are validated like [`LatticeParameters::validate`], so a
/// degenerate hexagon cannot start an unbounded loop.
///
/// ## Example
///
/// ```rust
/// use honeycomb::compute_lattice_offsets;
///
/// let offsets = compute_lattice_offsets(100.0, 100.0, 5.0, 1.0).unwrap();
/// assert!(!offsets.is_empty());
/// assert!(offsets.iter().all(|o| *o != glam::DVec2::ZERO));
/// ```
pub fn compute_lattice_offsets(
    length: f64,
    width: f64,
    circumradius: f64,
    thickness: f64,
) -> Result<Vec<DVec2>, ConfigurationError> {
    let params = LatticeParameters {
        length,
        width,
        circumradius,
        thickness,
        ..LatticeParameters::default()
    };
    params.validate()?;
    let layout = LatticeLayout::new(&params, ROW_MARGIN);
    Ok(layout.cells().map(|cell| layout.offset(cell)).collect())
}

// =============================================================================
// LATTICE FIELD
// =============================================================================

/// A hexagon placed in the rectangle.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PlacedCell {
    /// Lattice index
    pub cell: LatticeCell,
    /// Absolute centre in the z = 0 plane
    pub center: DVec2,
}

/// The cells of one honeycomb, after clipping to the rectangle.
///
/// The origin cell always comes first, followed by the surviving cells in
/// loop order.
#[derive(Debug, Clone)]
pub struct LatticeField {
    layout: LatticeLayout,
    size: DVec2,
    circumradius: f64,
    clip: CellClip,
    tiled: usize,
    cells: Vec<PlacedCell>,
}

impl LatticeField {
    /// Tiles the rectangle of `params` and clips the result per `config`.
    ///
    /// # Errors
    ///
    /// Any [`ConfigurationError`] from validating `params` or `config`, and
    /// [`ConfigurationError::TooManyCells`] when the configured row margin
    /// makes the loop exceed [`MAX_LATTICE_CELLS`].
    pub fn compute(
        params: &LatticeParameters,
        config: &TilingConfig,
    ) -> Result<Self, ConfigurationError> {
        params.validate()?;
        config.validate()?;

        let layout = LatticeLayout::new(params, config.row_margin);
        let visited = layout.bounds.visited_cells();
        if visited > MAX_LATTICE_CELLS as u64 {
            return Err(ConfigurationError::TooManyCells {
                cells: visited,
                max: MAX_LATTICE_CELLS,
            });
        }

        let size = DVec2::new(params.length, params.width);
        let mut field = Self {
            layout,
            size,
            circumradius: params.circumradius,
            clip: config.clip,
            tiled: 1,
            cells: vec![PlacedCell {
                cell: LatticeCell::ORIGIN,
                center: layout.origin,
            }],
        };

        for cell in layout.cells() {
            field.tiled += 1;
            let center = layout.center(cell);
            if field.keeps(center) {
                field.cells.push(PlacedCell { cell, center });
            }
        }

        debug!(
            columns = layout.bounds.columns,
            rows = layout.bounds.rows,
            tiled = field.tiled,
            kept = field.cells.len(),
            clip = ?field.clip,
            "Computed lattice field"
        );
        Ok(field)
    }

    /// Placed cells, origin first.
    pub fn cells(&self) -> &[PlacedCell] {
        &self.cells
    }

    /// Number of placed cells.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// True when no cell is placed.
    ///
    /// The origin cell is placed by every clip policy, so a computed field is
    /// never empty.
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Cells produced by the tiling loop before clipping, origin included.
    pub fn tiled_count(&self) -> usize {
        self.tiled
    }

    /// Whether `cell` survived clipping.
    pub fn contains(&self, cell: LatticeCell) -> bool {
        self.cells.iter().any(|placed| placed.cell == cell)
    }

    /// Layout the field was tiled with.
    pub fn layout(&self) -> &LatticeLayout {
        &self.layout
    }

    /// Clipping policy the field was computed with.
    pub fn clip(&self) -> CellClip {
        self.clip
    }

    /// Hexagon circumradius.
    pub fn circumradius(&self) -> f64 {
        self.circumradius
    }

    /// Closed hexagon outlines of all placed cells, in field order.
    pub fn hexagons(&self) -> impl Iterator<Item = [DVec3; 7]> + '_ {
        let base = generate_hexagon(self.circumradius);
        self.cells.iter().map(move |placed| {
            let shift = placed.center.extend(0.0);
            base.map(|p| p + shift)
        })
    }

    /// Counts sample points of the rectangle that no tiled cell accounts for.
    ///
    /// The rectangle is sampled on a `samples × samples` grid of cell
    /// midpoints. A point is covered when it lies in the honeycomb tile
    /// (hexagon of apothem `center_distance / 2`) of some cell the loop
    /// produced. Clipping is ignored: this measures the loop bounds only.
    pub fn coverage_gaps(&self, samples: usize) -> usize {
        if samples == 0 {
            return 0;
        }

        let centers: Vec<DVec2> = std::iter::once(self.layout.origin)
            .chain(self.layout.cells().map(|cell| self.layout.center(cell)))
            .collect();
        let reach = self.layout.center_distance / 2.0 + VERTEX_MERGE_EPSILON;
        let normals = edge_normals();
        let step = self.size / samples as f64;

        let mut gaps = 0;
        for i in 0..samples {
            for j in 0..samples {
                let p = DVec2::new((i as f64 + 0.5) * step.x, (j as f64 + 0.5) * step.y);
                let covered = centers
                    .iter()
                    .any(|c| normals.iter().all(|n| (p - *c).dot(*n).abs() <= reach));
                if !covered {
                    gaps += 1;
                }
            }
        }
        gaps
    }

    fn keeps(&self, center: DVec2) -> bool {
        match self.clip {
            CellClip::Overlap => self.overlaps_rectangle(center),
            CellClip::Contained => self.inside_rectangle(center),
        }
    }

    fn inside_rectangle(&self, center: DVec2) -> bool {
        let base = generate_hexagon(self.circumradius);
        base[..6].iter().all(|p| {
            let q = center + p.truncate();
            q.cmpge(DVec2::splat(-VERTEX_MERGE_EPSILON)).all()
                && q.cmple(self.size + VERTEX_MERGE_EPSILON).all()
        })
    }

    /// Separating-axis test of the hexagon against `[0, L] × [0, W]`.
    fn overlaps_rectangle(&self, center: DVec2) -> bool {
        let apothem = hexagon_apothem(self.circumradius);
        let corners = [
            DVec2::ZERO,
            DVec2::new(self.size.x, 0.0),
            self.size,
            DVec2::new(0.0, self.size.y),
        ];

        let hex_axes = edge_normals().map(|n| (n, apothem));
        let rect_axes = [(DVec2::X, self.circumradius), (DVec2::Y, apothem)];

        hex_axes.iter().chain(rect_axes.iter()).all(|&(axis, half)| {
            let c = center.dot(axis);
            let (lo, hi) = corners
                .iter()
                .map(|p| p.dot(axis))
                .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), d| {
                    (lo.min(d), hi.max(d))
                });
            c + half > lo + VERTEX_MERGE_EPSILON && c - half < hi - VERTEX_MERGE_EPSILON
        })
    }
}

/// Unit normals of the hexagon edges, one per parallel pair (30°, 90°, 150°).
fn edge_normals() -> [DVec2; 3] {
    [1.0, 3.0, 5.0].map(|k| DVec2::from_angle(k * EDGE_ANGLE / 2.0))
}

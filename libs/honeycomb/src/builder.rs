//! # Honeycomb Builder
//!
//! Turns [`LatticeParameters`] into a solid:
//!
//! ```text
//! params ─→ validate ─→ LatticeField ─→ hexagon faces ─→ shell ─→ extrude ─┐
//!                                                      make_box ─→ cut ←──┘
//! ```

use config::constants::COVERAGE_SAMPLES;
use glam::DVec3;
use tracing::{debug, enabled, info, warn, Level};

use crate::error::HoneycombError;
use crate::kernel::GeometryKernel;
use crate::params::LatticeParameters;
use crate::tiling::{LatticeField, TilingConfig};

/// A built solid together with the lattice it was cut with.
#[derive(Debug, Clone)]
pub struct LatticeSolid<S> {
    /// The perforated solid
    pub solid: S,
    /// Cells that were cut out
    pub field: LatticeField,
}

/// Builds honeycomb solids through a [`GeometryKernel`].
///
/// ## Example
///
/// ```rust
/// use honeycomb::{HexLatticeBuilder, LatticeParameters, MeshKernel};
///
/// let builder = HexLatticeBuilder::new(MeshKernel);
/// let params = LatticeParameters::new(30.0, 20.0, 1.0, 3.0, 1.0);
/// let solid = builder.build(&params).unwrap();
/// assert!(solid.volume() > 0.0);
/// assert!(solid.volume() < 600.0);
/// ```
#[derive(Debug, Clone, Default)]
pub struct HexLatticeBuilder<K> {
    kernel: K,
    config: TilingConfig,
}

impl<K: GeometryKernel> HexLatticeBuilder<K> {
    /// Creates a builder with the default tiling configuration.
    pub fn new(kernel: K) -> Self {
        Self {
            kernel,
            config: TilingConfig::default(),
        }
    }

    /// Replaces the tiling configuration.
    pub fn with_config(mut self, config: TilingConfig) -> Self {
        self.config = config;
        self
    }

    /// The kernel used for all geometry.
    pub fn kernel(&self) -> &K {
        &self.kernel
    }

    /// The tiling configuration.
    pub fn config(&self) -> &TilingConfig {
        &self.config
    }

    /// Builds the solid for `params`.
    ///
    /// # Errors
    ///
    /// - [`HoneycombError::Configuration`] before any kernel call
    /// - [`HoneycombError::GeometryConstruction`] with the kernel's error
    pub fn build(&self, params: &LatticeParameters) -> Result<K::Solid, HoneycombError> {
        self.build_lattice(params).map(|built| built.solid)
    }

    /// Builds the solid and returns it with its lattice field.
    pub fn build_lattice(
        &self,
        params: &LatticeParameters,
    ) -> Result<LatticeSolid<K::Solid>, HoneycombError> {
        let field = LatticeField::compute(params, &self.config)?;

        self.check_coverage(&field);

        let container = self
            .kernel
            .make_box(params.length, params.width, params.height)
            .map_err(HoneycombError::geometry)?;
        let faces = hexagon_faces(&self.kernel, &field)?;
        let solid = assemble_solid(&self.kernel, &container, faces, params.height)?;

        info!(
            cells = field.len(),
            length = params.length,
            width = params.width,
            height = params.height,
            "Built honeycomb solid"
        );
        Ok(LatticeSolid { solid, field })
    }

    /// Samples `field` for coverage gaps and warns about them.
    ///
    /// Sampling tests every tiled centre per sample point, so it only runs
    /// when a subscriber records warnings. Returns the gap count, or `None`
    /// when skipped.
    fn check_coverage(&self, field: &LatticeField) -> Option<usize> {
        if !enabled!(Level::WARN) {
            return None;
        }
        let gaps = field.coverage_gaps(COVERAGE_SAMPLES);
        if gaps > 0 {
            warn!(
                gaps,
                samples = COVERAGE_SAMPLES * COVERAGE_SAMPLES,
                row_margin = self.config.row_margin,
                "Tiling leaves parts of the rectangle uncovered"
            );
        }
        Some(gaps)
    }
}

/// Creates one planar face per placed hexagon, in field order.
pub fn hexagon_faces<K: GeometryKernel>(
    kernel: &K,
    field: &LatticeField,
) -> Result<Vec<K::Face>, HoneycombError> {
    let mut faces = Vec::with_capacity(field.len());
    for hexagon in field.hexagons() {
        let wire = kernel
            .make_polygon(&hexagon)
            .map_err(HoneycombError::geometry)?;
        faces.push(kernel.make_face(&wire).map_err(HoneycombError::geometry)?);
    }
    debug!(faces = faces.len(), "Created hexagon faces");
    Ok(faces)
}

/// Joins `faces` into a shell, extrudes it by `height` along +z and cuts the
/// prisms out of `container`.
///
/// Kernel errors are returned unchanged as the error source.
pub fn assemble_solid<K: GeometryKernel>(
    kernel: &K,
    container: &K::Solid,
    faces: Vec<K::Face>,
    height: f64,
) -> Result<K::Solid, HoneycombError> {
    let shell = kernel.make_shell(faces).map_err(HoneycombError::geometry)?;
    let prisms = kernel
        .extrude(&shell, DVec3::new(0.0, 0.0, height))
        .map_err(HoneycombError::geometry)?;
    debug!("Extruded hexagon shell");
    kernel
        .cut(container, &prisms)
        .map_err(HoneycombError::geometry)
}

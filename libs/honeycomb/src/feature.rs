//! # Honeycomb Feature
//!
//! The object a CAD host keeps in its document: five named properties, the
//! last successfully built shape and a serializable state.

use config::constants::FEATURE_VERSION;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::builder::HexLatticeBuilder;
use crate::error::{ConfigurationError, HoneycombError};
use crate::kernel::{GeometryKernel, MeshKernel};
use crate::params::{LatticeParameters, Property};
use crate::tiling::TilingConfig;

/// Serializable snapshot of a feature.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeatureState {
    /// Feature type tag, always [`HoneycombFeature::TYPE_NAME`]
    #[serde(rename = "type")]
    pub type_name: String,
    /// Version of the code that wrote the state
    pub version: String,
    /// Property values
    #[serde(default)]
    pub parameters: LatticeParameters,
    /// Tiling tunables
    #[serde(default)]
    pub tiling: TilingConfig,
}

/// A parametric honeycomb solid.
///
/// Property changes only mark the feature as touched; [`recompute`] rebuilds
/// the shape. A failed recompute keeps the previous shape.
///
/// [`recompute`]: HoneycombFeature::recompute
///
/// ## Example
///
/// ```rust
/// use honeycomb::HoneycombFeature;
///
/// let mut feature = HoneycombFeature::new();
/// feature.set_property("Length", 40.0).unwrap();
/// feature.set_property("width", 30.0).unwrap();
/// feature.recompute().unwrap();
/// assert!(feature.shape().is_some());
/// assert!(!feature.is_touched());
/// ```
#[derive(Debug)]
pub struct HoneycombFeature<K: GeometryKernel = MeshKernel> {
    parameters: LatticeParameters,
    builder: HexLatticeBuilder<K>,
    shape: Option<K::Solid>,
    touched: bool,
    last_error: Option<String>,
}

impl HoneycombFeature<MeshKernel> {
    /// Creates a feature with default properties on the mesh kernel.
    pub fn new() -> Self {
        Self::with_kernel(MeshKernel)
    }
}

impl Default for HoneycombFeature<MeshKernel> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: GeometryKernel> HoneycombFeature<K> {
    /// Type tag written into [`FeatureState`].
    pub const TYPE_NAME: &'static str = "HoneycombSolid";

    /// Creates a feature with default properties on `kernel`.
    pub fn with_kernel(kernel: K) -> Self {
        Self {
            parameters: LatticeParameters::default(),
            builder: HexLatticeBuilder::new(kernel),
            shape: None,
            touched: true,
            last_error: None,
        }
    }

    /// Replaces the tiling configuration.
    pub fn with_config(mut self, config: TilingConfig) -> Self {
        self.builder = self.builder.with_config(config);
        self.touched = true;
        self
    }

    /// Current property values.
    pub fn parameters(&self) -> &LatticeParameters {
        &self.parameters
    }

    /// Replaces all property values.
    pub fn set_parameters(&mut self, parameters: LatticeParameters) {
        self.parameters = parameters;
        self.touched = true;
    }

    /// Reads a property by name (case-insensitive).
    pub fn property(&self, name: &str) -> Result<f64, ConfigurationError> {
        Ok(self.parameters.get(Property::from_name(name)?))
    }

    /// Writes a property by name (case-insensitive).
    ///
    /// # Errors
    ///
    /// - [`ConfigurationError::UnknownProperty`] for names not in the schema
    /// - [`ConfigurationError::NotFinite`] / [`ConfigurationError::Negative`]
    ///   for values a host length property cannot hold
    pub fn set_property(&mut self, name: &str, value: f64) -> Result<(), ConfigurationError> {
        let property = Property::from_name(name)?;
        self.parameters.set(property, value)?;
        self.touched = true;
        debug!(property = property.name(), value, "Property changed");
        Ok(())
    }

    /// True when a property changed since the last successful recompute.
    pub fn is_touched(&self) -> bool {
        self.touched
    }

    /// Rebuilds the shape from the current properties.
    ///
    /// On failure the previous shape stays in place, the feature stays
    /// touched and the error message is kept in [`last_error`].
    ///
    /// [`last_error`]: HoneycombFeature::last_error
    pub fn recompute(&mut self) -> Result<&K::Solid, HoneycombError> {
        match self.builder.build(&self.parameters) {
            Ok(solid) => {
                self.touched = false;
                self.last_error = None;
                Ok(self.shape.insert(solid))
            }
            Err(error) => {
                warn!(%error, "Recompute failed; keeping previous shape");
                self.last_error = Some(error.to_string());
                Err(error)
            }
        }
    }

    /// Last successfully built shape.
    pub fn shape(&self) -> Option<&K::Solid> {
        self.shape.as_ref()
    }

    /// Message of the most recent failed recompute, cleared on success.
    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    /// The kernel this feature builds with.
    pub fn kernel(&self) -> &K {
        self.builder.kernel()
    }

    /// Snapshot of the feature for saving.
    pub fn state(&self) -> FeatureState {
        FeatureState {
            type_name: Self::TYPE_NAME.to_string(),
            version: FEATURE_VERSION.to_string(),
            parameters: self.parameters,
            tiling: *self.builder.config(),
        }
    }

    /// Restores a feature from a saved state. The restored feature is
    /// touched and has no shape until recomputed.
    ///
    /// # Errors
    ///
    /// [`ConfigurationError::StateMismatch`] if the state belongs to another
    /// feature type.
    pub fn from_state(kernel: K, state: FeatureState) -> Result<Self, ConfigurationError> {
        if state.type_name != Self::TYPE_NAME {
            return Err(ConfigurationError::StateMismatch {
                expected: Self::TYPE_NAME.to_string(),
                found: state.type_name,
            });
        }
        if state.version != FEATURE_VERSION {
            debug!(
                saved = %state.version,
                current = FEATURE_VERSION,
                "Restoring state written by another version"
            );
        }

        let mut feature = Self::with_kernel(kernel).with_config(state.tiling);
        feature.parameters = state.parameters;
        Ok(feature)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_feature_is_touched() {
        let feature = HoneycombFeature::new();
        assert!(feature.is_touched());
        assert!(feature.shape().is_none());
        assert_eq!(feature.property("Circumradius").unwrap(), 5.0);
    }

    #[test]
    fn test_unknown_property() {
        let mut feature = HoneycombFeature::new();
        assert!(matches!(
            feature.set_property("Depth", 1.0),
            Err(ConfigurationError::UnknownProperty { .. })
        ));
        assert!(feature.property("Depth").is_err());
    }

    #[test]
    fn test_state_has_type_and_version() {
        let state = HoneycombFeature::new().state();
        assert_eq!(state.type_name, "HoneycombSolid");
        assert_eq!(state.version, FEATURE_VERSION);
        assert_eq!(state.parameters, LatticeParameters::default());
    }

    #[test]
    fn test_foreign_state_is_rejected() {
        let mut state = HoneycombFeature::new().state();
        state.type_name = "GyroidSolid".to_string();
        assert!(matches!(
            HoneycombFeature::from_state(MeshKernel, state),
            Err(ConfigurationError::StateMismatch { .. })
        ));
    }
}

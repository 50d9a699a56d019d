//! # Lattice Parameters
//!
//! The five scalars driving a honeycomb solid, their validation and the
//! property schema a host uses to expose them.

use config::constants::{
    DEFAULT_CIRCUMRADIUS, DEFAULT_HEIGHT, DEFAULT_LENGTH, DEFAULT_THICKNESS, DEFAULT_WIDTH,
    MAX_LATTICE_CELLS,
};
use serde::{Deserialize, Serialize};

use crate::error::ConfigurationError;
use crate::tiling::LatticeBounds;

// =============================================================================
// PARAMETERS
// =============================================================================

/// Dimensions of a honeycomb solid.
///
/// Missing fields deserialize to their defaults, so a partial JSON document
/// such as `{"circumradius": 3.0}` is a complete parameter set.
///
/// ## Example
///
/// ```rust
/// use honeycomb::LatticeParameters;
///
/// let params: LatticeParameters = serde_json::from_str(r#"{"thickness": 0.5}"#).unwrap();
/// assert_eq!(params.length, 100.0);
/// assert_eq!(params.thickness, 0.5);
/// assert!(params.validate().is_ok());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LatticeParameters {
    /// Box extent along x
    pub length: f64,
    /// Box extent along y
    pub width: f64,
    /// Box extent along z, also the extrusion depth
    pub height: f64,
    /// Hexagon circumradius (centre to vertex)
    pub circumradius: f64,
    /// Wall thickness between neighbouring hexagons
    pub thickness: f64,
}

impl Default for LatticeParameters {
    fn default() -> Self {
        Self {
            length: DEFAULT_LENGTH,
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            circumradius: DEFAULT_CIRCUMRADIUS,
            thickness: DEFAULT_THICKNESS,
        }
    }
}

impl LatticeParameters {
    /// Creates a parameter set.
    pub fn new(length: f64, width: f64, height: f64, circumradius: f64, thickness: f64) -> Self {
        Self {
            length,
            width,
            height,
            circumradius,
            thickness,
        }
    }

    /// Checks the parameters before any geometry is built.
    ///
    /// # Errors
    ///
    /// - [`ConfigurationError::NotFinite`] / [`ConfigurationError::NonPositive`]
    ///   for the first offending property, in schema order
    /// - [`ConfigurationError::WallTooLarge`] if
    ///   `circumradius + thickness >= min(length, width) / 2`
    /// - [`ConfigurationError::TooManyCells`] if the tiling loop would exceed
    ///   [`MAX_LATTICE_CELLS`]
    pub fn validate(&self) -> Result<(), ConfigurationError> {
        for property in Property::ALL {
            let value = self.get(property);
            let name = property.name();
            if !value.is_finite() {
                return Err(ConfigurationError::NotFinite { name, value });
            }
            if value <= 0.0 {
                return Err(ConfigurationError::NonPositive { name, value });
            }
        }

        let limit = self.length.min(self.width) / 2.0;
        if self.circumradius + self.thickness >= limit {
            return Err(ConfigurationError::WallTooLarge {
                circumradius: self.circumradius,
                thickness: self.thickness,
                limit,
            });
        }

        let cells = LatticeBounds::from_params(self).visited_cells();
        if cells > MAX_LATTICE_CELLS as u64 {
            return Err(ConfigurationError::TooManyCells {
                cells,
                max: MAX_LATTICE_CELLS,
            });
        }

        Ok(())
    }

    /// Reads one property.
    pub fn get(&self, property: Property) -> f64 {
        match property {
            Property::Length => self.length,
            Property::Width => self.width,
            Property::Height => self.height,
            Property::Circumradius => self.circumradius,
            Property::Thickness => self.thickness,
        }
    }

    /// Writes one property.
    ///
    /// Accepts any finite value `>= 0`, the range of a host length property;
    /// strict positivity is left to [`LatticeParameters::validate`].
    pub fn set(&mut self, property: Property, value: f64) -> Result<(), ConfigurationError> {
        let name = property.name();
        if !value.is_finite() {
            return Err(ConfigurationError::NotFinite { name, value });
        }
        if value < 0.0 {
            return Err(ConfigurationError::Negative { name, value });
        }
        *self.field_mut(property) = value;
        Ok(())
    }

    fn field_mut(&mut self, property: Property) -> &mut f64 {
        match property {
            Property::Length => &mut self.length,
            Property::Width => &mut self.width,
            Property::Height => &mut self.height,
            Property::Circumradius => &mut self.circumradius,
            Property::Thickness => &mut self.thickness,
        }
    }
}

// =============================================================================
// PROPERTY SCHEMA
// =============================================================================

/// One of the five host-visible properties.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Property {
    /// Box extent along x
    Length,
    /// Box extent along y
    Width,
    /// Box extent along z
    Height,
    /// Hexagon circumradius
    Circumradius,
    /// Wall thickness
    Thickness,
}

/// Schema entry describing how a host presents a property.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PropertySpec {
    /// Property name as shown by the host
    pub name: &'static str,
    /// Property group
    pub group: &'static str,
    /// Tooltip text
    pub description: &'static str,
    /// Initial value
    pub default: f64,
}

impl Property {
    /// All properties in schema order.
    pub const ALL: [Property; 5] = [
        Property::Length,
        Property::Width,
        Property::Height,
        Property::Circumradius,
        Property::Thickness,
    ];

    /// Host-facing name.
    pub fn name(self) -> &'static str {
        self.spec().name
    }

    /// Looks a property up by name, ignoring ASCII case.
    pub fn from_name(name: &str) -> Result<Self, ConfigurationError> {
        Self::ALL
            .into_iter()
            .find(|p| p.name().eq_ignore_ascii_case(name.trim()))
            .ok_or_else(|| ConfigurationError::UnknownProperty {
                name: name.to_string(),
            })
    }

    /// Schema entry for this property.
    pub fn spec(self) -> PropertySpec {
        match self {
            Property::Length => PropertySpec {
                name: "Length",
                group: "Honeycomb",
                description: "Length of the honeycomb",
                default: DEFAULT_LENGTH,
            },
            Property::Width => PropertySpec {
                name: "Width",
                group: "Honeycomb",
                description: "Width of the honeycomb",
                default: DEFAULT_WIDTH,
            },
            Property::Height => PropertySpec {
                name: "Height",
                group: "Honeycomb",
                description: "Height of the honeycomb",
                default: DEFAULT_HEIGHT,
            },
            Property::Circumradius => PropertySpec {
                name: "Circumradius",
                group: "Polygon",
                description: "Radius of the circle through the hexagon vertices",
                default: DEFAULT_CIRCUMRADIUS,
            },
            Property::Thickness => PropertySpec {
                name: "Thickness",
                group: "Walls",
                description: "Thickness of the honeycomb walls",
                default: DEFAULT_THICKNESS,
            },
        }
    }
}

/// The full property schema in display order.
pub fn property_schema() -> Vec<PropertySpec> {
    Property::ALL.into_iter().map(Property::spec).collect()
}

// =============================================================================
// TESTS
// =============================================================================

//! # Shape Dimension Model
//!
//! The closed set of profile shapes and the dimensions each one needs.
//! `Dimensions` is a sum type: a circle record cannot carry a web thickness,
//! and a channel record cannot forget its flanges at compile time.
//!
//! All lengths are millimetres.
//!
//! ## JSON Example
//!
//! ```json
//! {
//!   "shape": "h-beam",
//!   "flange_width": 200.0,
//!   "web_height": 400.0,
//!   "flange_thickness": 16.0,
//!   "web_thickness": 10.0
//! }
//! ```
//!
//! A field left out of the JSON, or set to `null`, reads as `0.0`, which the
//! validator then reports the same way as any other non-positive value.

use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize};

use crate::errors::{CalcError, CalcResult};

/// Profile shape classification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ShapeKind {
    /// Solid round bar
    Circle,
    /// Round hollow section (concentric annulus)
    Pipe,
    /// Solid rectangle
    Rectangle,
    /// Rectangular hollow section with uniform wall
    Box,
    /// Doubly symmetric wide flange (H / I section)
    HBeam,
    /// Equal or unequal leg angle
    LAngle,
    /// Channel (C / U section)
    Channel,
}

impl ShapeKind {
    /// All shape kinds, in the order a picker lists them
    pub const ALL: [ShapeKind; 7] = [
        ShapeKind::Circle,
        ShapeKind::Pipe,
        ShapeKind::Rectangle,
        ShapeKind::Box,
        ShapeKind::HBeam,
        ShapeKind::LAngle,
        ShapeKind::Channel,
    ];

    /// Stable kebab-case identifier (matches the JSON tag)
    pub fn as_str(&self) -> &'static str {
        match self {
            ShapeKind::Circle => "circle",
            ShapeKind::Pipe => "pipe",
            ShapeKind::Rectangle => "rectangle",
            ShapeKind::Box => "box",
            ShapeKind::HBeam => "h-beam",
            ShapeKind::LAngle => "l-angle",
            ShapeKind::Channel => "channel",
        }
    }

    /// Get display name
    pub fn display_name(&self) -> &'static str {
        match self {
            ShapeKind::Circle => "Round Bar",
            ShapeKind::Pipe => "Round Pipe",
            ShapeKind::Rectangle => "Rectangle",
            ShapeKind::Box => "Square/Rectangular Tube",
            ShapeKind::HBeam => "H-Beam",
            ShapeKind::LAngle => "Angle (L)",
            ShapeKind::Channel => "Channel",
        }
    }

    /// True when the principal axes do not pass through an obvious
    /// geometric center, so the centroid is reported separately.
    pub fn has_centroid(&self) -> bool {
        matches!(self, ShapeKind::LAngle | ShapeKind::Channel)
    }

    /// True when the section has identical properties about every axis
    pub fn is_isotropic(&self) -> bool {
        matches!(self, ShapeKind::Circle | ShapeKind::Pipe)
    }
}

impl std::fmt::Display for ShapeKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for ShapeKind {
    type Err = CalcError;

    fn from_str(s: &str) -> CalcResult<Self> {
        let normalized = s.trim().to_lowercase().replace('_', "-");
        ShapeKind::ALL
            .into_iter()
            .find(|kind| kind.as_str() == normalized)
            .ok_or_else(|| {
                CalcError::invalid_input(
                    "shape",
                    s,
                    "Expected one of: circle, pipe, rectangle, box, h-beam, l-angle, channel",
                )
            })
    }
}

fn zero_if_null<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<f64>::deserialize(deserializer)?.unwrap_or(0.0))
}

/// One named dimension of a shape, in display order
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DimensionField {
    /// Field name as it appears in JSON
    pub name: &'static str,
    /// Human-readable label used in messages and reports
    pub label: &'static str,
    /// Drawing symbol (D, tf, ...)
    pub symbol: &'static str,
    /// Value in mm
    pub value: f64,
}

impl DimensionField {
    fn new(name: &'static str, label: &'static str, symbol: &'static str, value: f64) -> Self {
        DimensionField {
            name,
            label,
            symbol,
            value,
        }
    }
}

/// Governing dimensions of a cross-section, one variant per shape (mm).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "shape", rename_all = "kebab-case")]
pub enum Dimensions {
    Circle {
        #[serde(default, deserialize_with = "zero_if_null")]
        diameter: f64,
    },
    Pipe {
        #[serde(default, deserialize_with = "zero_if_null")]
        outer_diameter: f64,
        #[serde(default, deserialize_with = "zero_if_null")]
        inner_diameter: f64,
    },
    Rectangle {
        #[serde(default, deserialize_with = "zero_if_null")]
        width: f64,
        #[serde(default, deserialize_with = "zero_if_null")]
        height: f64,
    },
    Box {
        #[serde(default, deserialize_with = "zero_if_null")]
        outer_width: f64,
        #[serde(default, deserialize_with = "zero_if_null")]
        outer_height: f64,
        #[serde(default, deserialize_with = "zero_if_null")]
        thickness: f64,
    },
    HBeam {
        #[serde(default, deserialize_with = "zero_if_null")]
        flange_width: f64,
        /// Overall depth, flange face to flange face
        #[serde(default, deserialize_with = "zero_if_null")]
        web_height: f64,
        #[serde(default, deserialize_with = "zero_if_null")]
        flange_thickness: f64,
        #[serde(default, deserialize_with = "zero_if_null")]
        web_thickness: f64,
    },
    LAngle {
        /// Leg lying along the X axis
        #[serde(default, deserialize_with = "zero_if_null")]
        leg_a: f64,
        /// Leg lying along the Y axis
        #[serde(default, deserialize_with = "zero_if_null")]
        leg_b: f64,
        #[serde(default, deserialize_with = "zero_if_null")]
        leg_thickness: f64,
    },
    Channel {
        /// Flange width measured from the back of the web
        #[serde(default, deserialize_with = "zero_if_null")]
        channel_width: f64,
        /// Overall depth
        #[serde(default, deserialize_with = "zero_if_null")]
        channel_height: f64,
        #[serde(default, deserialize_with = "zero_if_null")]
        channel_flange_thickness: f64,
        #[serde(default, deserialize_with = "zero_if_null")]
        channel_web_thickness: f64,
    },
}

impl Dimensions {
    /// Shape this record describes
    pub fn shape(&self) -> ShapeKind {
        match self {
            Dimensions::Circle { .. } => ShapeKind::Circle,
            Dimensions::Pipe { .. } => ShapeKind::Pipe,
            Dimensions::Rectangle { .. } => ShapeKind::Rectangle,
            Dimensions::Box { .. } => ShapeKind::Box,
            Dimensions::HBeam { .. } => ShapeKind::HBeam,
            Dimensions::LAngle { .. } => ShapeKind::LAngle,
            Dimensions::Channel { .. } => ShapeKind::Channel,
        }
    }

    /// Dimensions a fresh form starts with for each shape
    ///
    /// # Example
    /// ```rust
    /// use section_core::shapes::{Dimensions, ShapeKind};
    ///
    /// let dims = Dimensions::default_for(ShapeKind::Pipe);
    /// assert_eq!(dims, Dimensions::Pipe { outer_diameter: 100.0, inner_diameter: 80.0 });
    /// ```
    pub fn default_for(kind: ShapeKind) -> Self {
        match kind {
            ShapeKind::Circle => Dimensions::Circle { diameter: 100.0 },
            ShapeKind::Pipe => Dimensions::Pipe {
                outer_diameter: 100.0,
                inner_diameter: 80.0,
            },
            ShapeKind::Rectangle => Dimensions::Rectangle {
                width: 100.0,
                height: 200.0,
            },
            ShapeKind::Box => Dimensions::Box {
                outer_width: 100.0,
                outer_height: 200.0,
                thickness: 10.0,
            },
            ShapeKind::HBeam => Dimensions::HBeam {
                flange_width: 200.0,
                web_height: 400.0,
                flange_thickness: 16.0,
                web_thickness: 10.0,
            },
            ShapeKind::LAngle => Dimensions::LAngle {
                leg_a: 100.0,
                leg_b: 100.0,
                leg_thickness: 10.0,
            },
            ShapeKind::Channel => Dimensions::Channel {
                channel_width: 75.0,
                channel_height: 150.0,
                channel_flange_thickness: 10.0,
                channel_web_thickness: 6.0,
            },
        }
    }

    /// Named fields of this record in display (and validation) order
    pub fn fields(&self) -> Vec<DimensionField> {
        match *self {
            Dimensions::Circle { diameter } => {
                vec![DimensionField::new("diameter", "diameter", "D", diameter)]
            }
            Dimensions::Pipe {
                outer_diameter,
                inner_diameter,
            } => vec![
                DimensionField::new("outer_diameter", "outer diameter", "D", outer_diameter),
                DimensionField::new("inner_diameter", "inner diameter", "d", inner_diameter),
            ],
            Dimensions::Rectangle { width, height } => vec![
                DimensionField::new("width", "width", "B", width),
                DimensionField::new("height", "height", "H", height),
            ],
            Dimensions::Box {
                outer_width,
                outer_height,
                thickness,
            } => vec![
                DimensionField::new("outer_width", "outer width", "B", outer_width),
                DimensionField::new("outer_height", "outer height", "H", outer_height),
                DimensionField::new("thickness", "thickness", "t", thickness),
            ],
            Dimensions::HBeam {
                flange_width,
                web_height,
                flange_thickness,
                web_thickness,
            } => vec![
                DimensionField::new("flange_width", "flange width", "B", flange_width),
                DimensionField::new("web_height", "web height", "H", web_height),
                DimensionField::new("flange_thickness", "flange thickness", "tf", flange_thickness),
                DimensionField::new("web_thickness", "web thickness", "tw", web_thickness),
            ],
            Dimensions::LAngle {
                leg_a,
                leg_b,
                leg_thickness,
            } => vec![
                DimensionField::new("leg_a", "leg A", "A", leg_a),
                DimensionField::new("leg_b", "leg B", "B", leg_b),
                DimensionField::new("leg_thickness", "leg thickness", "t", leg_thickness),
            ],
            Dimensions::Channel {
                channel_width,
                channel_height,
                channel_flange_thickness,
                channel_web_thickness,
            } => vec![
                DimensionField::new("channel_width", "channel width", "B", channel_width),
                DimensionField::new("channel_height", "channel height", "H", channel_height),
                DimensionField::new(
                    "channel_flange_thickness",
                    "flange thickness",
                    "tf",
                    channel_flange_thickness,
                ),
                DimensionField::new(
                    "channel_web_thickness",
                    "web thickness",
                    "tw",
                    channel_web_thickness,
                ),
            ],
        }
    }

    /// Short designation in the usual mill notation, e.g. `H400×200×10×16`
    pub fn designation(&self) -> String {
        match *self {
            Dimensions::Circle { diameter } => format!("φ{}", diameter),
            Dimensions::Pipe {
                outer_diameter,
                inner_diameter,
            } => format!(
                "φ{}×{:.1}t",
                outer_diameter,
                (outer_diameter - inner_diameter) / 2.0
            ),
            Dimensions::Rectangle { width, height } => format!("{}×{}", width, height),
            Dimensions::Box {
                outer_width,
                outer_height,
                thickness,
            } => format!("□{}×{}×{}", outer_width, outer_height, thickness),
            Dimensions::HBeam {
                flange_width,
                web_height,
                flange_thickness,
                web_thickness,
            } => format!(
                "H{}×{}×{}×{}",
                web_height, flange_width, web_thickness, flange_thickness
            ),
            Dimensions::LAngle {
                leg_a,
                leg_b,
                leg_thickness,
            } => format!("L{}×{}×{}", leg_a, leg_b, leg_thickness),
            Dimensions::Channel {
                channel_width,
                channel_height,
                channel_flange_thickness,
                channel_web_thickness,
            } => format!(
                "[{}×{}×{}×{}",
                channel_height, channel_width, channel_web_thickness, channel_flange_thickness
            ),
        }
    }
}

//! # Section Property Calculations
//!
//! Every calculation follows the same pattern:
//!
//! - [`Dimensions`] - Input record (JSON-serializable)
//! - [`SectionProperties`] - Result record (JSON-serializable)
//! - [`compute`] - Validates, then dispatches to exactly one shape algorithm
//!
//! ## Available Shapes
//!
//! - [`round`] - Solid circle and pipe
//! - [`rectangular`] - Solid rectangle and box tube
//! - [`h_beam`] - Doubly symmetric wide flange
//! - [`l_angle`] - Angle, asymmetric about both axes
//! - [`channel`] - Channel, symmetric about X only
//!
//! ## Example
//!
//! ```rust
//! use section_core::calculations::compute;
//! use section_core::shapes::Dimensions;
//!
//! let props = compute(&Dimensions::Rectangle { width: 100.0, height: 200.0 }).unwrap();
//! assert_eq!(props.area_mm2, 20_000.0);
//! assert!(props.cx_mm.is_none());
//! ```

pub mod channel;
pub mod h_beam;
pub mod l_angle;
pub mod rectangular;
pub mod round;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::equations::radius_of_gyration;
use crate::errors::{CalcError, CalcResult};
use crate::shapes::{Dimensions, ShapeKind};
use crate::validation::validate;

/// Derived properties of a cross-section.
///
/// Values are about the section's own centroidal axes: X horizontal (strong
/// axis), Y vertical (weak axis). `sx`/`sy` are elastic section moduli.
///
/// ## JSON Example
///
/// ```json
/// {
///   "area_mm2": 1900.0,
///   "ix_mm4": 1747583.3,
///   "iy_mm4": 1747583.3,
///   "sx_mm3": 24281.0,
///   "sy_mm3": 24281.0,
///   "rx_mm": 30.33,
///   "ry_mm": 30.33,
///   "cx_mm": 28.2,
///   "cy_mm": 28.2
/// }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SectionProperties {
    /// Cross-sectional area (mm²)
    pub area_mm2: f64,

    /// Moment of inertia about the X axis (mm⁴)
    pub ix_mm4: f64,

    /// Moment of inertia about the Y axis (mm⁴)
    pub iy_mm4: f64,

    /// Elastic section modulus about X at the governing fiber (mm³)
    pub sx_mm3: f64,

    /// Elastic section modulus about Y at the governing fiber (mm³)
    pub sy_mm3: f64,

    /// Radius of gyration about X (mm)
    pub rx_mm: f64,

    /// Radius of gyration about Y (mm)
    pub ry_mm: f64,

    /// Centroid X offset (mm), only for angle and channel
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cx_mm: Option<f64>,

    /// Centroid Y offset (mm), only for angle and channel
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cy_mm: Option<f64>,
}

impl SectionProperties {
    /// Assemble a record from A, I and S; radii of gyration are derived.
    pub(crate) fn from_parts(area: f64, ix: f64, iy: f64, sx: f64, sy: f64) -> Self {
        SectionProperties {
            area_mm2: area,
            ix_mm4: ix,
            iy_mm4: iy,
            sx_mm3: sx,
            sy_mm3: sy,
            rx_mm: radius_of_gyration(ix, area),
            ry_mm: radius_of_gyration(iy, area),
            cx_mm: None,
            cy_mm: None,
        }
    }

    /// Attach centroid offsets (asymmetric shapes only)
    pub(crate) fn with_centroid(mut self, cx: f64, cy: f64) -> Self {
        self.cx_mm = Some(cx);
        self.cy_mm = Some(cy);
        self
    }

    /// Smaller of the two radii of gyration (governs buckling)
    pub fn r_min(&self) -> f64 {
        self.rx_mm.min(self.ry_mm)
    }

    /// Slenderness ratio L/r_min for an unbraced length in mm
    pub fn slenderness(&self, unbraced_length_mm: f64) -> f64 {
        unbraced_length_mm / self.r_min()
    }

    fn is_well_formed(&self) -> bool {
        let values = [
            self.area_mm2,
            self.ix_mm4,
            self.iy_mm4,
            self.sx_mm3,
            self.sy_mm3,
            self.rx_mm,
            self.ry_mm,
        ];
        self.area_mm2 > 0.0 && values.iter().all(|v| v.is_finite() && *v > 0.0)
    }
}

/// Compute section properties for a dimension record.
///
/// Runs the validator first; if it reports anything, no arithmetic is
/// attempted and every violation is returned.
///
/// # Returns
///
/// * `Ok(SectionProperties)` - Complete property record
/// * `Err(CalcError::InvalidDimensions)` - Validation failed
pub fn compute(dims: &Dimensions) -> CalcResult<SectionProperties> {
    let violations = validate(dims);
    if !violations.is_empty() {
        debug!(shape = %dims.shape(), count = violations.len(), "dimensions rejected");
        return Err(CalcError::invalid_dimensions(dims.shape().as_str(), violations));
    }

    let props = match *dims {
        Dimensions::Circle { diameter } => round::circle(diameter),
        Dimensions::Pipe {
            outer_diameter,
            inner_diameter,
        } => round::pipe(outer_diameter, inner_diameter),
        Dimensions::Rectangle { width, height } => rectangular::rectangle(width, height),
        Dimensions::Box {
            outer_width,
            outer_height,
            thickness,
        } => rectangular::box_tube(outer_width, outer_height, thickness),
        Dimensions::HBeam {
            flange_width,
            web_height,
            flange_thickness,
            web_thickness,
        } => h_beam::h_beam(flange_width, web_height, flange_thickness, web_thickness),
        Dimensions::LAngle {
            leg_a,
            leg_b,
            leg_thickness,
        } => l_angle::l_angle(leg_a, leg_b, leg_thickness),
        Dimensions::Channel {
            channel_width,
            channel_height,
            channel_flange_thickness,
            channel_web_thickness,
        } => channel::channel(
            channel_width,
            channel_height,
            channel_flange_thickness,
            channel_web_thickness,
        ),
    };

    debug_assert!(props.is_well_formed(), "degenerate result for {:?}: {:?}", dims, props);
    debug!(shape = %dims.shape(), area_mm2 = props.area_mm2, "section computed");
    Ok(props)
}

/// Compute properties when the caller tracks the shape selection separately
/// from the dimension record (e.g. a form with a shape picker).
///
/// A mismatch between `kind` and the record is reported as an input error.
pub fn compute_properties(kind: ShapeKind, dims: &Dimensions) -> CalcResult<SectionProperties> {
    if dims.shape() != kind {
        return Err(CalcError::invalid_input(
            "shape",
            kind.as_str(),
            format!("Dimensions describe a {}", dims.shape()),
        ));
    }
    compute(dims)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_compute_rejects_invalid_without_result() {
        let dims = Dimensions::Pipe {
            outer_diameter: 100.0,
            inner_diameter: 120.0,
        };
        let err = compute(&dims).unwrap_err();
        assert_eq!(err.error_code(), "INVALID_DIMENSIONS");
        assert_eq!(err.violations(), validate(&dims).as_slice());
    }

    #[test]
    fn test_every_default_computes() {
        for kind in ShapeKind::ALL {
            let props = compute(&Dimensions::default_for(kind)).unwrap();
            assert!(props.area_mm2 > 0.0);
            assert_eq!(props.cx_mm.is_some(), kind.has_centroid());
            assert_eq!(props.cy_mm.is_some(), kind.has_centroid());
        }
    }

    #[test]
    fn test_radius_of_gyration_identity() {
        for kind in ShapeKind::ALL {
            let p = compute(&Dimensions::default_for(kind)).unwrap();
            assert_relative_eq!(p.rx_mm, (p.ix_mm4 / p.area_mm2).sqrt(), max_relative = 1e-12);
            assert_relative_eq!(p.ry_mm, (p.iy_mm4 / p.area_mm2).sqrt(), max_relative = 1e-12);
        }
    }

    #[test]
    fn test_compute_is_deterministic() {
        let dims = Dimensions::default_for(ShapeKind::Channel);
        let a = compute(&dims).unwrap();
        let b = compute(&dims).unwrap();
        assert_eq!(a.ix_mm4.to_bits(), b.ix_mm4.to_bits());
        assert_eq!(a.sy_mm3.to_bits(), b.sy_mm3.to_bits());
        assert_eq!(a, b);
    }

    #[test]
    fn test_compute_properties_shape_mismatch() {
        let dims = Dimensions::default_for(ShapeKind::Circle);
        let err = compute_properties(ShapeKind::Pipe, &dims).unwrap_err();
        assert_eq!(err.error_code(), "INVALID_INPUT");
        assert!(compute_properties(ShapeKind::Circle, &dims).is_ok());
    }

    #[test]
    fn test_slenderness_uses_weak_axis() {
        let props = compute(&Dimensions::Rectangle {
            width: 100.0,
            height: 200.0,
        })
        .unwrap();
        assert_relative_eq!(props.r_min(), props.ry_mm);
        assert_relative_eq!(props.slenderness(3000.0), 3000.0 / props.ry_mm);
    }

    #[test]
    fn test_serialization_skips_absent_centroid() {
        let props = compute(&Dimensions::default_for(ShapeKind::Box)).unwrap();
        let json = serde_json::to_string(&props).unwrap();
        assert!(!json.contains("cx_mm"));
        let roundtrip: SectionProperties = serde_json::from_str(&json).unwrap();
        assert_relative_eq!(props.ix_mm4, roundtrip.ix_mm4, max_relative = 1e-12);
        assert!(roundtrip.cx_mm.is_none());

        let props = compute(&Dimensions::default_for(ShapeKind::LAngle)).unwrap();
        let json = serde_json::to_string(&props).unwrap();
        assert!(json.contains("cx_mm"));
    }
}

//! # Dimension Validation
//!
//! Rejects missing, non-positive, out-of-range and geometrically
//! inconsistent dimensions before any arithmetic runs. Every rule is checked; nothing short-circuits,
//! so the caller gets the full list of problems in one pass.
//!
//! Field checks come first, in field order. Cross-field checks follow and
//! only fire when the fields they compare are themselves usable, so a zero
//! thickness reports "must be positive" once rather than also tripping the
//! wall-thickness rule.
//!
//! ## Example
//!
//! ```rust
//! use section_core::shapes::Dimensions;
//! use section_core::validation::validate;
//!
//! let dims = Dimensions::Pipe { outer_diameter: 100.0, inner_diameter: 120.0 };
//! let problems = validate(&dims);
//! assert_eq!(problems, vec!["inner diameter must be smaller than outer diameter"]);
//! ```

use crate::shapes::Dimensions;

/// Smallest accepted dimension (mm)
pub const MIN_DIMENSION_MM: f64 = 1e-3;

/// Largest accepted dimension (mm). Fourth powers stay near 1e24, far from
/// overflow, and the smallest wall is still 1e-9 of the largest outline.
pub const MAX_DIMENSION_MM: f64 = 1e6;

/// Validate a dimension record.
///
/// Returns the violation messages in the order the rules were checked;
/// an empty vector means the record can be computed.
pub fn validate(dims: &Dimensions) -> Vec<String> {
    let mut violations: Vec<String> = dims
        .fields()
        .iter()
        .filter_map(|field| field_violation(field.label, field.value))
        .collect();

    match *dims {
        Dimensions::Circle { .. } | Dimensions::Rectangle { .. } => {}
        Dimensions::Pipe {
            outer_diameter,
            inner_diameter,
        } => {
            if usable(&[outer_diameter, inner_diameter]) {
                if inner_diameter >= outer_diameter {
                    violations.push("inner diameter must be smaller than outer diameter".to_string());
                } else if outer_diameter - inner_diameter < 2.0 * MIN_DIMENSION_MM {
                    // D⁴ − d⁴ loses every significant digit below this
                    violations.push(format!("wall thickness must be at least {} mm", MIN_DIMENSION_MM));
                }
            }
        }
        Dimensions::Box {
            outer_width,
            outer_height,
            thickness,
        } => {
            if usable(&[outer_width, thickness]) && 2.0 * thickness >= outer_width {
                violations.push("thickness must be less than half the outer width".to_string());
            }
            if usable(&[outer_height, thickness]) && 2.0 * thickness >= outer_height {
                violations.push("thickness must be less than half the outer height".to_string());
            }
        }
        Dimensions::HBeam {
            flange_width,
            web_height,
            flange_thickness,
            web_thickness,
        } => {
            if usable(&[web_height, flange_thickness]) && 2.0 * flange_thickness >= web_height {
                violations.push("flange thickness must be less than half the web height".to_string());
            }
            if usable(&[flange_width, web_thickness]) && web_thickness >= flange_width {
                violations.push("web thickness must be smaller than flange width".to_string());
            }
        }
        Dimensions::LAngle {
            leg_a,
            leg_b,
            leg_thickness,
        } => {
            if usable(&[leg_a, leg_thickness]) && leg_thickness >= leg_a {
                violations.push("leg thickness must be smaller than leg A".to_string());
            }
            if usable(&[leg_b, leg_thickness]) && leg_thickness >= leg_b {
                violations.push("leg thickness must be smaller than leg B".to_string());
            }
        }
        Dimensions::Channel {
            channel_width,
            channel_height,
            channel_flange_thickness,
            channel_web_thickness,
        } => {
            if usable(&[channel_height, channel_flange_thickness])
                && 2.0 * channel_flange_thickness >= channel_height
            {
                violations.push("flange thickness must be less than half the channel height".to_string());
            }
            if usable(&[channel_width, channel_web_thickness])
                && channel_web_thickness >= channel_width
            {
                violations.push("web thickness must be smaller than channel width".to_string());
            }
        }
    }

    violations
}

/// True when `validate` would return no violations
pub fn is_valid(dims: &Dimensions) -> bool {
    validate(dims).is_empty()
}

fn field_violation(label: &str, value: f64) -> Option<String> {
    // `!(value > 0.0)` also catches NaN
    if !(value > 0.0) {
        Some(format!("{} must be positive", label))
    } else if !value.is_finite() {
        Some(format!("{} must be finite", label))
    } else if value < MIN_DIMENSION_MM {
        Some(format!("{} must be at least {} mm", label, MIN_DIMENSION_MM))
    } else if value > MAX_DIMENSION_MM {
        Some(format!("{} must be at most {} mm", label, MAX_DIMENSION_MM))
    } else {
        None
    }
}

fn usable(values: &[f64]) -> bool {
    values
        .iter()
        .all(|v| (MIN_DIMENSION_MM..=MAX_DIMENSION_MM).contains(v))
}

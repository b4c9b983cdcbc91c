//! Round sections: solid bar and pipe.
//!
//! Both are isotropic, so X and Y properties are identical and no centroid
//! is reported.

use std::f64::consts::PI;

use super::SectionProperties;
use crate::equations::{circular_area, circular_moment_of_inertia, circular_section_modulus};

/// Solid circle of diameter `D`.
///
/// ```text
///        ___
///      /     \
///     |   +   |  D
///      \ ___ /
/// ```
///
/// A = πD²/4, I = πD⁴/64, S = πD³/32, r = D/4
pub fn circle(diameter: f64) -> SectionProperties {
    let area = circular_area(diameter);
    let i = circular_moment_of_inertia(diameter);
    let s = circular_section_modulus(diameter);
    SectionProperties::from_parts(area, i, i, s, s)
}

/// Concentric annulus with outer diameter `D` and inner diameter `d`.
///
/// A = π/4 (D² − d²), I = π/64 (D⁴ − d⁴), S = I / (D/2)
pub fn pipe(outer_diameter: f64, inner_diameter: f64) -> SectionProperties {
    let area = PI / 4.0 * (outer_diameter.powi(2) - inner_diameter.powi(2));
    let i = PI / 64.0 * (outer_diameter.powi(4) - inner_diameter.powi(4));
    let s = i / (outer_diameter / 2.0);
    SectionProperties::from_parts(area, i, i, s, s)
}

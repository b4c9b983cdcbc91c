//! Rectangular sections: solid rectangle and box tube.

use super::SectionProperties;
use crate::equations::{rectangular_area, rectangular_moment_of_inertia, rectangular_section_modulus};

/// Solid rectangle, width `B` (along X) by height `H` (along Y).
///
/// Ix = BH³/12, Iy = HB³/12, Sx = BH²/6, Sy = HB²/6
pub fn rectangle(width: f64, height: f64) -> SectionProperties {
    SectionProperties::from_parts(
        rectangular_area(width, height),
        rectangular_moment_of_inertia(width, height),
        rectangular_moment_of_inertia(height, width),
        rectangular_section_modulus(width, height),
        rectangular_section_modulus(height, width),
    )
}

/// Hollow rectangle with uniform wall `t`: outer `B × H` minus inner
/// `(B − 2t) × (H − 2t)`.
///
/// ```text
///     ┌───────────┐
///     │ ┌───────┐ │
///   H │ │       │ │
///     │ └───────┘ │
///     └───────────┘
///           B       wall t
/// ```
pub fn box_tube(outer_width: f64, outer_height: f64, thickness: f64) -> SectionProperties {
    let inner_width = outer_width - 2.0 * thickness;
    let inner_height = outer_height - 2.0 * thickness;

    let area = rectangular_area(outer_width, outer_height) - rectangular_area(inner_width, inner_height);
    let ix = rectangular_moment_of_inertia(outer_width, outer_height)
        - rectangular_moment_of_inertia(inner_width, inner_height);
    let iy = rectangular_moment_of_inertia(outer_height, outer_width)
        - rectangular_moment_of_inertia(inner_height, inner_width);

    SectionProperties::from_parts(area, ix, iy, ix / (outer_height / 2.0), iy / (outer_width / 2.0))
}

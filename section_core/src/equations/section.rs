//! # Cross-Section Property Formulas
//!
//! Building blocks shared by the seven shape algorithms. Each composite
//! shape is assembled from rectangles and circles using the primitives here
//! plus the parallel axis theorem.
//!
//! ## Notation
//!
//! - `A` = Cross-sectional area
//! - `I` = Moment of inertia (second moment of area)
//! - `S` = Elastic section modulus (I/c, where c = distance to extreme fiber)
//! - `r` = Radius of gyration (√(I/A))
//! - `b` = Width of section (perpendicular to the bending axis)
//! - `d` = Depth of section (measured across the bending axis)
//!
//! ## References
//!
//! - Roark's Formulas for Stress and Strain, 8th Edition, Appendix A
//! - AISC Steel Construction Manual, Part 1: Dimensions and Properties

use std::f64::consts::PI;

// =============================================================================
// RECTANGULAR SECTION PROPERTIES
// =============================================================================

/// Calculate cross-sectional area for rectangular section
///
/// ```text
///     ┌─────────┐
///     │         │
///   d │         │
///     │         │
///     └─────────┘
///          b
/// ```
///
/// # Formula
/// A = b × d
///
/// # Example
/// ```rust
/// use section_core::equations::section::rectangular_area;
///
/// let area = rectangular_area(100.0, 200.0);
/// assert!((area - 20_000.0).abs() < 1e-9);
/// ```
#[inline]
pub fn rectangular_area(b: f64, d: f64) -> f64 {
    b * d
}

/// Calculate moment of inertia for rectangular section about its own
/// centroidal axis
///
/// ```text
///     ┌─────────┐
///     │         │
///   d │ ════════│ ← neutral axis at d/2
///     │         │
///     └─────────┘
///          b
/// ```
///
/// # Formula
/// I = bd³/12
///
/// For the other axis swap the arguments: I = db³/12.
///
/// # Example
/// ```rust
/// use section_core::equations::section::rectangular_moment_of_inertia;
///
/// // 100 × 200 mm, bending about the horizontal axis
/// let i = rectangular_moment_of_inertia(100.0, 200.0);
/// assert!((i - 6.6667e7).abs() / 6.6667e7 < 1e-4);
/// ```
#[inline]
pub fn rectangular_moment_of_inertia(b: f64, d: f64) -> f64 {
    b * d.powi(3) / 12.0
}

/// Calculate section modulus for rectangular section
///
/// # Formula
/// S = I/c = bd³/12 ÷ d/2 = bd²/6
///
/// # Example
/// ```rust
/// use section_core::equations::section::rectangular_section_modulus;
///
/// let s = rectangular_section_modulus(100.0, 200.0);
/// assert!((s - 666_666.67).abs() < 0.01);
/// ```
#[inline]
pub fn rectangular_section_modulus(b: f64, d: f64) -> f64 {
    b * d.powi(2) / 6.0
}

// =============================================================================
// CIRCULAR SECTION PROPERTIES
// =============================================================================

/// Area of a solid circle from its diameter: A = πD²/4
#[inline]
pub fn circular_area(diameter: f64) -> f64 {
    PI * diameter.powi(2) / 4.0
}

/// Moment of inertia of a solid circle about any diameter: I = πD⁴/64
///
/// # Example
/// ```rust
/// use section_core::equations::section::circular_moment_of_inertia;
///
/// let i = circular_moment_of_inertia(100.0);
/// assert!((i - 4.909e6).abs() / 4.909e6 < 1e-3);
/// ```
#[inline]
pub fn circular_moment_of_inertia(diameter: f64) -> f64 {
    PI * diameter.powi(4) / 64.0
}

/// Section modulus of a solid circle: S = πD³/32
#[inline]
pub fn circular_section_modulus(diameter: f64) -> f64 {
    PI * diameter.powi(3) / 32.0
}

// =============================================================================
// GENERAL RELATIONSHIPS
// =============================================================================

/// Calculate radius of gyration from moment of inertia and area
///
/// Used in column buckling calculations (slenderness ratio = L/r).
///
/// # Formula
/// r = √(I/A)
#[inline]
pub fn radius_of_gyration(moment_of_inertia: f64, area: f64) -> f64 {
    (moment_of_inertia / area).sqrt()
}

/// Transfer a moment of inertia to a parallel axis
///
/// # Formula
/// I_axis = I_centroid + A·d²
///
/// # Example
/// ```rust
/// use section_core::equations::section::{parallel_axis, rectangular_moment_of_inertia};
///
/// // 10 × 10 square about an axis through one edge
/// let i_c = rectangular_moment_of_inertia(10.0, 10.0);
/// let i_edge = parallel_axis(i_c, 100.0, 5.0);
/// assert!((i_edge - 10.0 * 10.0_f64.powi(3) / 3.0).abs() < 1e-9);
/// ```
#[inline]
pub fn parallel_axis(centroidal_inertia: f64, area: f64, offset: f64) -> f64 {
    centroidal_inertia + area * offset.powi(2)
}

/// Centroid of a composite made of `(area, centroid coordinate)` parts
///
/// Returns the area-weighted first moment divided by the total area.
pub fn composite_centroid(parts: &[(f64, f64)]) -> f64 {
    let total_area: f64 = parts.iter().map(|(a, _)| a).sum();
    let first_moment: f64 = parts.iter().map(|(a, c)| a * c).sum();
    first_moment / total_area
}

/// Section modulus at the governing (farthest) fiber
///
/// An asymmetric section has two extreme fibers per axis. The one farther
/// from the centroid carries the larger stress for a given moment, so the
/// reported modulus uses that distance.
///
/// # Formula
/// S = I / max(c₁, c₂)
#[inline]
pub fn governing_section_modulus(moment_of_inertia: f64, c_near: f64, c_far: f64) -> f64 {
    moment_of_inertia / c_near.max(c_far)
}

// =============================================================================
// UNIT TESTS
// =============================================================================

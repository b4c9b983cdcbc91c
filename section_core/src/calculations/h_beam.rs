//! Doubly symmetric H / wide flange section.

use super::SectionProperties;
use crate::equations::rectangular_moment_of_inertia;

/// H-beam from flange width `B`, overall depth `H`, flange thickness `tf`
/// and web thickness `tw`.
///
/// ```text
///     ┌───────────┐  tf
///     └───┐   ┌───┘
///         │   │
///       H │tw │
///         │   │
///     ┌───┘   └───┐
///     └───────────┘
///           B
/// ```
///
/// Strong axis: full `B × H` rectangle minus the two voids beside the web,
/// Ix = [BH³ − (B − tw)·h_w³]/12 with h_w = H − 2tf.
///
/// Weak axis: both flanges and the web share the vertical centerline, so
/// their own inertias add directly: Iy = 2·tf·B³/12 + h_w·tw³/12.
pub fn h_beam(flange_width: f64, web_height: f64, flange_thickness: f64, web_thickness: f64) -> SectionProperties {
    let b = flange_width;
    let h = web_height;
    let tf = flange_thickness;
    let tw = web_thickness;
    let clear_web = h - 2.0 * tf;

    let area = 2.0 * b * tf + clear_web * tw;

    let ix = rectangular_moment_of_inertia(b, h) - rectangular_moment_of_inertia(b - tw, clear_web);
    let iy = 2.0 * rectangular_moment_of_inertia(tf, b) + rectangular_moment_of_inertia(clear_web, tw);

    SectionProperties::from_parts(area, ix, iy, ix / (h / 2.0), iy / (b / 2.0))
}

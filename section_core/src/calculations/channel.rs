//! Channel section, symmetric about the horizontal mid-height axis only.
//!
//! ```text
//!   ┌──────────┐  tf
//!   │ ┌────────┘
//!   │ │
//! H │ │ tw
//!   │ │
//!   │ └────────┐
//!   └──────────┘
//!        B
//! ```
//!
//! `B` is measured from the back of the web to the flange tips. The
//! centroid X offset is measured from the back of the web; the Y offset is
//! always `H/2`.

use super::SectionProperties;
use crate::equations::{composite_centroid, governing_section_modulus, parallel_axis, rectangular_moment_of_inertia};

/// Channel from width `B`, height `H`, flange thickness `tf` and web
/// thickness `tw`.
pub fn channel(channel_width: f64, channel_height: f64, flange_thickness: f64, web_thickness: f64) -> SectionProperties {
    let b = channel_width;
    let h = channel_height;
    let tf = flange_thickness;
    let tw = web_thickness;
    let clear_web = h - 2.0 * tf;

    let flange_area = b * tf;
    let web_area = clear_web * tw;
    let area = 2.0 * flange_area + web_area;

    // X axis: full-height web strip plus the two flange outstands
    let outstand = b - tw;
    let ix = rectangular_moment_of_inertia(tw, h)
        + 2.0 * parallel_axis(
            rectangular_moment_of_inertia(outstand, tf),
            outstand * tf,
            (h - tf) / 2.0,
        );

    // Y axis: flanges centered at B/2, clear web at tw/2
    let cx = composite_centroid(&[(2.0 * flange_area, b / 2.0), (web_area, tw / 2.0)]);
    let iy = 2.0 * parallel_axis(rectangular_moment_of_inertia(tf, b), flange_area, b / 2.0 - cx)
        + parallel_axis(rectangular_moment_of_inertia(clear_web, tw), web_area, cx - tw / 2.0);

    let sx = ix / (h / 2.0);
    let sy = governing_section_modulus(iy, cx, b - cx);

    SectionProperties::from_parts(area, ix, iy, sx, sy).with_centroid(cx, h / 2.0)
}

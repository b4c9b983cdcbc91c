//! Angle section (equal or unequal legs).
//!
//! The angle has no axis of symmetry in its natural orientation, so the
//! centroid must be located first and each axis has two extreme fibers.
//!
//! ## Geometry
//!
//! ```text
//!   y
//!   ┌─┐
//!   │ │
//!   │ │ leg B
//!   │ │
//!   │ └──────────┐ t
//!   └────────────┘
//!  O     leg A      x
//! ```
//!
//! Origin `O` is the outer corner. Leg A runs along X, leg B along Y, both
//! `t` thick. The section is split into leg A (full `a × t`) and the part of
//! leg B above it (`t × (b − t)`), so the corner square is counted once.
//!
//! Principal (inclined) axes are not computed; X and Y are the geometric
//! axes through the centroid, parallel to the legs.

use super::SectionProperties;
use crate::equations::{
    composite_centroid, governing_section_modulus, parallel_axis, rectangular_moment_of_inertia,
};

/// Angle with legs `a` (along X) and `b` (along Y), thickness `t`.
pub fn l_angle(leg_a: f64, leg_b: f64, leg_thickness: f64) -> SectionProperties {
    let a = leg_a;
    let b = leg_b;
    let t = leg_thickness;

    // Leg A: a wide, t tall, centered at (a/2, t/2)
    let area_a = a * t;
    let (xa, ya) = (a / 2.0, t / 2.0);

    // Remainder of leg B: t wide, (b − t) tall, centered at (t/2, (b + t)/2)
    let area_b = t * (b - t);
    let (xb, yb) = (t / 2.0, (b + t) / 2.0);

    let area = area_a + area_b;
    let cx = composite_centroid(&[(area_a, xa), (area_b, xb)]);
    let cy = composite_centroid(&[(area_a, ya), (area_b, yb)]);

    let ix = parallel_axis(rectangular_moment_of_inertia(a, t), area_a, cy - ya)
        + parallel_axis(rectangular_moment_of_inertia(t, b - t), area_b, yb - cy);
    let iy = parallel_axis(rectangular_moment_of_inertia(t, a), area_a, xa - cx)
        + parallel_axis(rectangular_moment_of_inertia(b - t, t), area_b, cx - xb);

    let sx = governing_section_modulus(ix, cy, b - cy);
    let sy = governing_section_modulus(iy, cx, a - cx);

    SectionProperties::from_parts(area, ix, iy, sx, sy).with_centroid(cx, cy)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_area() {
        let p = l_angle(100.0, 75.0, 7.0);
        assert_relative_eq!(p.area_mm2, 7.0 * (100.0 + 75.0 - 7.0), max_relative = 1e-12);
    }

    #[test]
    fn test_equal_angle_is_symmetric_about_diagonal() {
        let p = l_angle(100.0, 100.0, 10.0);
        let cx = p.cx_mm.unwrap();
        let cy = p.cy_mm.unwrap();
        assert_relative_eq!(cx, cy, max_relative = 1e-12);
        assert_relative_eq!(p.ix_mm4, p.iy_mm4, max_relative = 1e-12);
        assert_relative_eq!(p.sx_mm3, p.sy_mm3, max_relative = 1e-12);

        // Cx = (100·10·50 + 90·10·5) / 1900
        assert_relative_eq!(cx, 54_500.0 / 1900.0, max_relative = 1e-12);
    }

    #[test]
    fn test_l100x100x10_inertia() {
        let p = l_angle(100.0, 100.0, 10.0);
        // Plain plate model, no root or toe radii: about 1.80e6 mm⁴
        assert_relative_eq!(p.ix_mm4, 1.800e6, max_relative = 1e-3);
    }

    #[test]
    fn test_other_decomposition_agrees() {
        // Split as full leg B plus remainder of leg A instead
        let (a, b, t) = (150.0, 90.0, 9.0);
        let p = l_angle(a, b, t);
        let cy = p.cy_mm.unwrap();

        let area_b = t * b;
        let area_a = (a - t) * t;
        let ix = rectangular_moment_of_inertia(t, b)
            + area_b * (b / 2.0 - cy).powi(2)
            + rectangular_moment_of_inertia(a - t, t)
            + area_a * (cy - t / 2.0).powi(2);
        assert_relative_eq!(p.ix_mm4, ix, max_relative = 1e-10);
    }

    #[test]
    fn test_section_modulus_uses_far_fiber() {
        let p = l_angle(125.0, 75.0, 7.0);
        let cx = p.cx_mm.unwrap();
        let cy = p.cy_mm.unwrap();
        // Centroid sits near the corner, so the far fibers are the leg tips
        assert_relative_eq!(p.sx_mm3, p.ix_mm4 / (75.0 - cy), max_relative = 1e-12);
        assert_relative_eq!(p.sy_mm3, p.iy_mm4 / (125.0 - cx), max_relative = 1e-12);
        assert!(p.sx_mm3 < p.ix_mm4 / cy);
    }

    #[test]
    fn test_centroid_inside_bounding_box() {
        for (a, b, t) in [(25.0, 25.0, 3.0), (75.0, 50.0, 6.0), (150.0, 100.0, 9.0), (10.0, 10.0, 9.9)] {
            let p = l_angle(a, b, t);
            let cx = p.cx_mm.unwrap();
            let cy = p.cy_mm.unwrap();
            assert!(cx > 0.0 && cx < a, "cx = {} for L{}x{}x{}", cx, a, b, t);
            assert!(cy > 0.0 && cy < b, "cy = {} for L{}x{}x{}", cy, a, b, t);
        }
    }
}

//! Property-based tests for section property invariants using the `proptest` crate.

use approx::assert_relative_eq;
use proptest::prelude::*;

use section_core::{compute, validate, Dimensions, ShapeKind};

// ---------------------------------------------------------------------------
// Strategy helpers
// ---------------------------------------------------------------------------

/// Any dimension value, including zero, negative, out-of-range and
/// out-of-proportion ones.
fn arb_any_dim() -> impl Strategy<Value = f64> {
    prop_oneof![
        Just(0.0),
        Just(1e-90),
        Just(1e80),
        -100.0f64..0.0,
        0.1f64..1000.0,
    ]
}

/// Positive outer dimension in a realistic mm range.
fn arb_outer() -> impl Strategy<Value = f64> {
    1.0f64..1000.0
}

/// Fraction strictly inside (0, 1), used to place a thickness below its limit.
fn arb_fraction() -> impl Strategy<Value = f64> {
    0.01f64..0.99
}

/// Arbitrary record of any shape, valid or not.
fn arb_dimensions() -> impl Strategy<Value = Dimensions> {
    prop_oneof![
        arb_any_dim().prop_map(|diameter| Dimensions::Circle { diameter }),
        (arb_any_dim(), arb_any_dim()).prop_map(|(outer_diameter, inner_diameter)| Dimensions::Pipe {
            outer_diameter,
            inner_diameter,
        }),
        (arb_any_dim(), arb_any_dim()).prop_map(|(width, height)| Dimensions::Rectangle { width, height }),
        (arb_any_dim(), arb_any_dim(), arb_any_dim()).prop_map(|(outer_width, outer_height, thickness)| {
            Dimensions::Box {
                outer_width,
                outer_height,
                thickness,
            }
        }),
        (arb_any_dim(), arb_any_dim(), arb_any_dim(), arb_any_dim()).prop_map(|(b, h, tf, tw)| {
            Dimensions::HBeam {
                flange_width: b,
                web_height: h,
                flange_thickness: tf,
                web_thickness: tw,
            }
        }),
        (arb_any_dim(), arb_any_dim(), arb_any_dim()).prop_map(|(leg_a, leg_b, leg_thickness)| {
            Dimensions::LAngle {
                leg_a,
                leg_b,
                leg_thickness,
            }
        }),
        (arb_any_dim(), arb_any_dim(), arb_any_dim(), arb_any_dim()).prop_map(|(b, h, tf, tw)| {
            Dimensions::Channel {
                channel_width: b,
                channel_height: h,
                channel_flange_thickness: tf,
                channel_web_thickness: tw,
            }
        }),
    ]
}

/// Valid record of any shape: thicknesses are placed below their limits.
fn arb_valid_dimensions() -> impl Strategy<Value = Dimensions> {
    prop_oneof![
        arb_outer().prop_map(|diameter| Dimensions::Circle { diameter }),
        (arb_outer(), arb_fraction()).prop_map(|(d, f)| Dimensions::Pipe {
            outer_diameter: d,
            inner_diameter: d * f,
        }),
        (arb_outer(), arb_outer()).prop_map(|(width, height)| Dimensions::Rectangle { width, height }),
        (arb_outer(), arb_outer(), arb_fraction()).prop_map(|(b, h, f)| Dimensions::Box {
            outer_width: b,
            outer_height: h,
            thickness: b.min(h) / 2.0 * f,
        }),
        (arb_outer(), arb_outer(), arb_fraction(), arb_fraction()).prop_map(|(b, h, ff, fw)| {
            Dimensions::HBeam {
                flange_width: b,
                web_height: h,
                flange_thickness: h / 2.0 * ff,
                web_thickness: b * fw,
            }
        }),
        (arb_outer(), arb_outer(), arb_fraction()).prop_map(|(a, b, f)| Dimensions::LAngle {
            leg_a: a,
            leg_b: b,
            leg_thickness: a.min(b) * f,
        }),
        (arb_outer(), arb_outer(), arb_fraction(), arb_fraction()).prop_map(|(b, h, ff, fw)| {
            Dimensions::Channel {
                channel_width: b,
                channel_height: h,
                channel_flange_thickness: h / 2.0 * ff,
                channel_web_thickness: b * fw,
            }
        }),
    ]
}

const REL: f64 = 1e-9;

// ---------------------------------------------------------------------------
// 1. compute fails exactly when validate reports something
// ---------------------------------------------------------------------------

proptest! {
    #[test]
    fn compute_fails_iff_validation_fails(dims in arb_dimensions()) {
        let violations = validate(&dims);
        match compute(&dims) {
            Ok(props) => {
                prop_assert!(violations.is_empty(), "computed despite {:?}", violations);
                prop_assert!(props.area_mm2 > 0.0);
            }
            Err(e) => {
                prop_assert!(!violations.is_empty());
                prop_assert_eq!(e.violations(), violations.as_slice());
            }
        }
    }
}

// ---------------------------------------------------------------------------
// 2. Generated valid records pass validation and yield positive, finite values
// ---------------------------------------------------------------------------

proptest! {
    #[test]
    fn valid_records_compute(dims in arb_valid_dimensions()) {
        prop_assert!(validate(&dims).is_empty(), "{:?}: {:?}", dims, validate(&dims));
        let p = compute(&dims).unwrap();
        for v in [p.area_mm2, p.ix_mm4, p.iy_mm4, p.sx_mm3, p.sy_mm3, p.rx_mm, p.ry_mm] {
            prop_assert!(v.is_finite() && v > 0.0, "{:?} -> {:?}", dims, p);
        }
        prop_assert_eq!(p.cx_mm.is_some(), dims.shape().has_centroid());
    }
}

// ---------------------------------------------------------------------------
// 3. Radius of gyration identity: r = sqrt(I / A)
// ---------------------------------------------------------------------------

proptest! {
    #[test]
    fn radius_of_gyration_identity(dims in arb_valid_dimensions()) {
        let p = compute(&dims).unwrap();
        let rx = (p.ix_mm4 / p.area_mm2).sqrt();
        let ry = (p.iy_mm4 / p.area_mm2).sqrt();
        prop_assert!((p.rx_mm - rx).abs() <= REL * rx, "rx={} expected {}", p.rx_mm, rx);
        prop_assert!((p.ry_mm - ry).abs() <= REL * ry, "ry={} expected {}", p.ry_mm, ry);
    }
}

// ---------------------------------------------------------------------------
// 4. Circle and pipe are isotropic
// ---------------------------------------------------------------------------

proptest! {
    #[test]
    fn round_sections_are_isotropic(d in arb_outer(), f in arb_fraction()) {
        for dims in [
            Dimensions::Circle { diameter: d },
            Dimensions::Pipe { outer_diameter: d, inner_diameter: d * f },
        ] {
            let p = compute(&dims).unwrap();
            prop_assert_eq!(p.ix_mm4, p.iy_mm4);
            prop_assert_eq!(p.sx_mm3, p.sy_mm3);
            prop_assert_eq!(p.rx_mm, p.ry_mm);
        }
    }
}

// ---------------------------------------------------------------------------
// 5. A box whose wall fills the outline approaches the solid rectangle
// ---------------------------------------------------------------------------

proptest! {
    #[test]
    fn box_converges_to_rectangle(b in arb_outer(), h in arb_outer()) {
        let tube = compute(&Dimensions::Box {
            outer_width: b,
            outer_height: h,
            thickness: b.min(h) / 2.0 * (1.0 - 1e-9),
        })
        .unwrap();
        let solid = compute(&Dimensions::Rectangle { width: b, height: h }).unwrap();

        for (got, want) in [
            (tube.area_mm2, solid.area_mm2),
            (tube.ix_mm4, solid.ix_mm4),
            (tube.iy_mm4, solid.iy_mm4),
            (tube.sx_mm3, solid.sx_mm3),
            (tube.sy_mm3, solid.sy_mm3),
        ] {
            prop_assert!((got - want).abs() <= 1e-6 * want, "box {} vs rectangle {}", got, want);
        }
    }
}

// ---------------------------------------------------------------------------
// 6. Validation is idempotent, compute is bit-identical
// ---------------------------------------------------------------------------

proptest! {
    #[test]
    fn validate_is_idempotent(dims in arb_dimensions()) {
        prop_assert_eq!(validate(&dims), validate(&dims));
    }

    #[test]
    fn compute_is_pure(dims in arb_valid_dimensions()) {
        let a = compute(&dims).unwrap();
        let b = compute(&dims).unwrap();
        prop_assert_eq!(a.area_mm2.to_bits(), b.area_mm2.to_bits());
        prop_assert_eq!(a.ix_mm4.to_bits(), b.ix_mm4.to_bits());
        prop_assert_eq!(a.iy_mm4.to_bits(), b.iy_mm4.to_bits());
        prop_assert_eq!(a.sx_mm3.to_bits(), b.sx_mm3.to_bits());
        prop_assert_eq!(a.sy_mm3.to_bits(), b.sy_mm3.to_bits());
        prop_assert_eq!(a, b);
    }
}

// ---------------------------------------------------------------------------
// 7. Angle centroid lies inside its bounding box
// ---------------------------------------------------------------------------

proptest! {
    #[test]
    fn angle_centroid_within_legs(a in arb_outer(), b in arb_outer(), f in arb_fraction()) {
        let p = compute(&Dimensions::LAngle {
            leg_a: a,
            leg_b: b,
            leg_thickness: a.min(b) * f,
        })
        .unwrap();
        let cx = p.cx_mm.unwrap();
        let cy = p.cy_mm.unwrap();
        prop_assert!(cx > 0.0 && cx < a, "cx={} outside (0, {})", cx, a);
        prop_assert!(cy > 0.0 && cy < b, "cy={} outside (0, {})", cy, b);
    }
}

// ---------------------------------------------------------------------------
// 8. Concrete scenarios
// ---------------------------------------------------------------------------

#[test]
fn circle_d100() {
    let p = compute(&Dimensions::Circle { diameter: 100.0 }).unwrap();
    assert_relative_eq!(p.area_mm2, 7854.0, max_relative = 1e-3);
    assert_relative_eq!(p.ix_mm4, 4.909e6, max_relative = 1e-3);
    assert_relative_eq!(p.iy_mm4, 4.909e6, max_relative = 1e-3);
    assert_relative_eq!(p.sx_mm3, 98_175.0, max_relative = 1e-3);
}

#[test]
fn pipe_100_80() {
    let p = compute(&Dimensions::Pipe {
        outer_diameter: 100.0,
        inner_diameter: 80.0,
    })
    .unwrap();
    assert_relative_eq!(p.area_mm2, 2827.0, max_relative = 1e-3);
    assert_relative_eq!(p.ix_mm4, 2.898e6, max_relative = 1e-3);
    assert_eq!(p.ix_mm4, p.iy_mm4);
}

#[test]
fn rectangle_100_200() {
    let p = compute(&Dimensions::Rectangle {
        width: 100.0,
        height: 200.0,
    })
    .unwrap();
    assert_relative_eq!(p.area_mm2, 20_000.0);
    assert_relative_eq!(p.ix_mm4, 6.667e7, max_relative = 1e-3);
    assert_relative_eq!(p.sx_mm3, 6.667e5, max_relative = 1e-3);
}

#[test]
fn box_100_200_10() {
    let p = compute(&Dimensions::Box {
        outer_width: 100.0,
        outer_height: 200.0,
        thickness: 10.0,
    })
    .unwrap();
    assert_relative_eq!(p.area_mm2, 5600.0, max_relative = 1e-12);
}

#[test]
fn pipe_inner_larger_than_outer() {
    let dims = Dimensions::Pipe {
        outer_diameter: 100.0,
        inner_diameter: 120.0,
    };
    let violations = validate(&dims);
    assert_eq!(violations, vec!["inner diameter must be smaller than outer diameter".to_string()]);
    assert!(compute(&dims).is_err());
}

#[test]
fn h_beam_200_400_16_10() {
    let p = compute(&Dimensions::default_for(ShapeKind::HBeam)).unwrap();
    assert_relative_eq!(p.area_mm2, 10_080.0, max_relative = 1e-12);
}

#[test]
fn dimensions_from_json() {
    let dims: Dimensions = serde_json::from_str(
        r#"{"shape": "channel", "channel_width": 75, "channel_height": 150,
            "channel_flange_thickness": 10, "channel_web_thickness": 6}"#,
    )
    .unwrap();
    assert_eq!(dims, Dimensions::default_for(ShapeKind::Channel));

    // Missing fields read as zero and are reported, not rejected by serde
    let dims: Dimensions = serde_json::from_str(r#"{"shape": "box", "outer_width": 100}"#).unwrap();
    assert_eq!(validate(&dims).len(), 2);

    assert!(serde_json::from_str::<Dimensions>(r#"{"shape": "triangle"}"#).is_err());
}

//! Standard profile dimensions (mm), JIS-style mill series.
//!
//! Properties are not tabulated here; the catalog computes them from these
//! dimensions with the same engine callers use, so table and calculator can
//! never disagree. Fillet and toe radii are ignored.

/// Round bar: D
pub const ROUND_BAR: &[f64] = &[
    10.0, 13.0, 16.0, 19.0, 22.0, 25.0, 28.0, 32.0, 38.0, 44.0, 50.0, 60.0, 70.0, 80.0, 90.0, 100.0,
];

/// Carbon steel pipe (SGP): (D, d), nominal size in the trailing comment
pub const PIPE_SGP: &[(f64, f64)] = &[
    (21.7, 15.9),   // 15A
    (27.2, 21.4),   // 20A
    (34.0, 27.6),   // 25A
    (42.7, 35.5),   // 32A
    (48.6, 41.2),   // 40A
    (60.5, 52.7),   // 50A
    (76.3, 67.9),   // 65A
    (89.1, 80.1),   // 80A
    (101.6, 92.0),  // 90A
    (114.3, 105.3), // 100A
    (139.8, 130.0), // 125A
    (165.2, 154.8), // 150A
    (216.3, 204.7), // 200A
];

/// Square and rectangular tube (STKR): (B, H, t)
pub const BOX_STKR: &[(f64, f64, f64)] = &[
    (50.0, 50.0, 2.3),
    (50.0, 50.0, 3.2),
    (60.0, 60.0, 2.3),
    (60.0, 60.0, 3.2),
    (75.0, 75.0, 2.3),
    (75.0, 75.0, 3.2),
    (75.0, 75.0, 4.5),
    (100.0, 100.0, 3.2),
    (100.0, 100.0, 4.5),
    (100.0, 100.0, 6.0),
    (125.0, 125.0, 4.5),
    (125.0, 125.0, 6.0),
    (150.0, 150.0, 4.5),
    (150.0, 150.0, 6.0),
    (150.0, 150.0, 9.0),
    (200.0, 200.0, 6.0),
    (200.0, 200.0, 9.0),
    (250.0, 250.0, 6.0),
    (250.0, 250.0, 9.0),
    // rectangular
    (100.0, 50.0, 3.2),
    (100.0, 50.0, 4.5),
    (150.0, 75.0, 4.5),
    (150.0, 100.0, 4.5),
    (200.0, 100.0, 4.5),
    (200.0, 100.0, 6.0),
];

/// Hot rolled H-beam: (H, B, tw, tf), the order the mill designation uses
pub const H_BEAM: &[(f64, f64, f64, f64)] = &[
    (100.0, 50.0, 5.0, 7.0),
    (100.0, 100.0, 6.0, 8.0),
    (125.0, 60.0, 6.0, 8.0),
    (125.0, 125.0, 6.5, 9.0),
    (150.0, 75.0, 5.0, 7.0),
    (150.0, 100.0, 6.0, 9.0),
    (150.0, 150.0, 7.0, 10.0),
    (175.0, 90.0, 5.0, 8.0),
    (175.0, 175.0, 7.5, 11.0),
    (198.0, 99.0, 4.5, 7.0),
    (200.0, 100.0, 5.5, 8.0),
    (194.0, 150.0, 6.0, 9.0),
    (200.0, 200.0, 8.0, 12.0),
    (248.0, 124.0, 5.0, 8.0),
    (250.0, 125.0, 6.0, 9.0),
    (244.0, 175.0, 7.0, 11.0),
    (250.0, 250.0, 9.0, 14.0),
    (298.0, 149.0, 5.5, 8.0),
    (300.0, 150.0, 6.5, 9.0),
    (294.0, 200.0, 8.0, 12.0),
    (300.0, 300.0, 10.0, 15.0),
    (346.0, 174.0, 6.0, 9.0),
    (350.0, 175.0, 7.0, 11.0),
    (340.0, 250.0, 9.0, 14.0),
    (350.0, 350.0, 12.0, 19.0),
    // 400 series
    (396.0, 199.0, 7.0, 11.0),
    (400.0, 200.0, 8.0, 13.0),
    (390.0, 300.0, 10.0, 16.0),
    (400.0, 400.0, 13.0, 21.0),
    (414.0, 405.0, 18.0, 28.0),
    (428.0, 407.0, 20.0, 35.0),
    (458.0, 417.0, 30.0, 50.0),
    (498.0, 432.0, 45.0, 70.0),
    // 450 series
    (446.0, 199.0, 8.0, 12.0),
    (450.0, 200.0, 9.0, 14.0),
    (440.0, 300.0, 11.0, 18.0),
    // 500 series
    (496.0, 199.0, 9.0, 14.0),
    (500.0, 200.0, 10.0, 16.0),
    (482.0, 300.0, 11.0, 15.0),
    (488.0, 300.0, 11.0, 18.0),
    // 600 series
    (596.0, 199.0, 10.0, 15.0),
    (600.0, 200.0, 11.0, 17.0),
    (582.0, 300.0, 12.0, 17.0),
    (588.0, 300.0, 12.0, 20.0),
    // 700 series
    (594.0, 302.0, 14.0, 23.0),
    (692.0, 300.0, 13.0, 20.0),
    (700.0, 300.0, 13.0, 24.0),
    // 800 series
    (792.0, 300.0, 14.0, 22.0),
    (800.0, 300.0, 14.0, 26.0),
    // 900 series
    (890.0, 299.0, 15.0, 23.0),
    (900.0, 300.0, 16.0, 28.0),
    (912.0, 302.0, 18.0, 34.0),
    (918.0, 303.0, 19.0, 37.0),
];

/// Angles: (A, B, t)
pub const ANGLE: &[(f64, f64, f64)] = &[
    // equal leg
    (25.0, 25.0, 3.0),
    (30.0, 30.0, 3.0),
    (40.0, 40.0, 3.0),
    (40.0, 40.0, 5.0),
    (50.0, 50.0, 4.0),
    (50.0, 50.0, 6.0),
    (60.0, 60.0, 5.0),
    (60.0, 60.0, 6.0),
    (65.0, 65.0, 6.0),
    (70.0, 70.0, 6.0),
    (75.0, 75.0, 6.0),
    (75.0, 75.0, 9.0),
    (80.0, 80.0, 6.0),
    (90.0, 90.0, 7.0),
    (90.0, 90.0, 10.0),
    (100.0, 100.0, 7.0),
    (100.0, 100.0, 10.0),
    (100.0, 100.0, 13.0),
    (120.0, 120.0, 8.0),
    (130.0, 130.0, 9.0),
    (130.0, 130.0, 12.0),
    (150.0, 150.0, 12.0),
    (150.0, 150.0, 15.0),
    // unequal leg
    (75.0, 50.0, 6.0),
    (90.0, 75.0, 6.0),
    (100.0, 75.0, 7.0),
    (125.0, 75.0, 7.0),
    (150.0, 90.0, 9.0),
    (150.0, 100.0, 9.0),
];

/// Channels: (H, B, tw, tf)
pub const CHANNEL: &[(f64, f64, f64, f64)] = &[
    (75.0, 40.0, 5.0, 5.0),
    (100.0, 45.0, 5.0, 6.0),
    (125.0, 50.0, 5.5, 6.5),
    (150.0, 53.0, 6.5, 7.5),
    (180.0, 58.0, 7.0, 8.0),
    (200.0, 65.0, 7.5, 9.0),
    (250.0, 75.0, 9.0, 11.0),
    (300.0, 80.0, 9.0, 12.0),
    (380.0, 85.0, 10.5, 13.5),
];

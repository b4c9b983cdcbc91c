//! Standard Section Catalog
//!
//! Manufactured standard sizes for each shape, with their properties
//! computed once by [`compute`](crate::calculations::compute) and kept for
//! display and lookup.
//!
//! ## Data Source
//!
//! Dimensions follow the JIS mill series (see [`jis`]). Rectangles have no
//! standard series.
//!
//! ## Caching
//!
//! The catalog is built on first access and never changes afterwards. The
//! outputs are pure functions of the dimensions, so nothing ever needs
//! invalidating and the shared instance is safe to read from any thread.
//!
//! ## Example
//!
//! ```rust
//! use section_core::catalog::{catalog, standard_sections};
//! use section_core::shapes::ShapeKind;
//!
//! let h400 = catalog().lookup("H400×200×8×13").unwrap();
//! assert_eq!(h400.kind(), ShapeKind::HBeam);
//! assert!(standard_sections(ShapeKind::Rectangle).is_empty());
//! ```

pub mod jis;

use std::collections::HashMap;

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::calculations::{compute, SectionProperties};
use crate::errors::{CalcError, CalcResult};
use crate::report::format_value;
use crate::shapes::{Dimensions, ShapeKind};

static CATALOG: Lazy<StandardCatalog> = Lazy::new(StandardCatalog::builtin);

/// The shared built-in catalog
pub fn catalog() -> &'static StandardCatalog {
    &CATALOG
}

/// Standard sections of one shape, in table order
pub fn standard_sections(kind: ShapeKind) -> Vec<&'static StandardSection> {
    CATALOG.sections_of(kind)
}

/// A named standard size with its computed properties
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StandardSection {
    /// Stable identifier, e.g. `h-beam-26`
    pub id: String,

    /// Mill designation, e.g. `H400×200×8×13`
    pub name: String,

    /// Governing dimensions
    pub dimensions: Dimensions,

    /// Properties computed from `dimensions`
    pub properties: SectionProperties,
}

impl StandardSection {
    /// Shape of this section
    pub fn kind(&self) -> ShapeKind {
        self.dimensions.shape()
    }
}

impl std::fmt::Display for StandardSection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} (A={:.1} mm², Ix={:.4e} mm⁴, Sx={:.4e} mm³)",
            self.name, self.properties.area_mm2, self.properties.ix_mm4, self.properties.sx_mm3
        )
    }
}

/// In-memory catalog indexed by id and by name
#[derive(Debug, Clone, Default)]
pub struct StandardCatalog {
    /// Sections in insertion order
    sections: Vec<StandardSection>,

    /// Lowercase id and name -> index into `sections`
    by_key: HashMap<String, usize>,

    /// Indices grouped by shape for filtering
    by_kind: HashMap<ShapeKind, Vec<usize>>,
}

impl StandardCatalog {
    /// Create an empty catalog
    pub fn new() -> Self {
        Self::default()
    }

    /// Build the catalog from the built-in JIS tables
    pub fn builtin() -> Self {
        let mut catalog = StandardCatalog::new();

        let tables: [(ShapeKind, Vec<Dimensions>); 6] = [
            (
                ShapeKind::Circle,
                jis::ROUND_BAR.iter().map(|&diameter| Dimensions::Circle { diameter }).collect(),
            ),
            (
                ShapeKind::Pipe,
                jis::PIPE_SGP
                    .iter()
                    .map(|&(outer_diameter, inner_diameter)| Dimensions::Pipe {
                        outer_diameter,
                        inner_diameter,
                    })
                    .collect(),
            ),
            (
                ShapeKind::Box,
                jis::BOX_STKR
                    .iter()
                    .map(|&(outer_width, outer_height, thickness)| Dimensions::Box {
                        outer_width,
                        outer_height,
                        thickness,
                    })
                    .collect(),
            ),
            (
                ShapeKind::HBeam,
                jis::H_BEAM
                    .iter()
                    .map(|&(height, width, tw, tf)| Dimensions::HBeam {
                        flange_width: width,
                        web_height: height,
                        flange_thickness: tf,
                        web_thickness: tw,
                    })
                    .collect(),
            ),
            (
                ShapeKind::LAngle,
                jis::ANGLE
                    .iter()
                    .map(|&(leg_a, leg_b, leg_thickness)| Dimensions::LAngle {
                        leg_a,
                        leg_b,
                        leg_thickness,
                    })
                    .collect(),
            ),
            (
                ShapeKind::Channel,
                jis::CHANNEL
                    .iter()
                    .map(|&(height, width, tw, tf)| Dimensions::Channel {
                        channel_width: width,
                        channel_height: height,
                        channel_flange_thickness: tf,
                        channel_web_thickness: tw,
                    })
                    .collect(),
            ),
        ];

        for (kind, rows) in tables {
            for (i, dims) in rows.into_iter().enumerate() {
                let id = format!("{}-{}", kind.as_str(), i);
                // Rows that fail validation are dropped, not fatal
                if let Err(e) = catalog.insert(id.clone(), dims) {
                    warn!(%id, error = %e, "skipping standard section");
                }
            }
        }

        info!(sections = catalog.len(), "standard catalog built");
        catalog
    }

    /// Compute and insert a section under `id`, named by its designation.
    ///
    /// Fails with the validator's messages if the dimensions are invalid.
    pub fn insert(&mut self, id: impl Into<String>, dimensions: Dimensions) -> CalcResult<()> {
        let properties = compute(&dimensions)?;
        let section = StandardSection {
            id: id.into(),
            name: dimensions.designation(),
            dimensions,
            properties,
        };

        let index = self.sections.len();
        self.by_key.entry(section.id.to_lowercase()).or_insert(index);
        self.by_key.entry(section.name.to_lowercase()).or_insert(index);
        self.by_kind.entry(section.kind()).or_default().push(index);
        self.sections.push(section);
        Ok(())
    }

    /// Look up a section by id or designation (case-insensitive)
    pub fn lookup(&self, query: &str) -> CalcResult<&StandardSection> {
        self.by_key
            .get(&query.trim().to_lowercase())
            .map(|&i| &self.sections[i])
            .ok_or_else(|| CalcError::section_not_found(query))
    }

    /// All sections of one shape, in insertion order
    pub fn sections_of(&self, kind: ShapeKind) -> Vec<&StandardSection> {
        self.by_kind
            .get(&kind)
            .map(|indices| indices.iter().map(|&i| &self.sections[i]).collect())
            .unwrap_or_default()
    }

    /// Sections whose designation contains `query` (case-insensitive),
    /// optionally restricted to one shape. An empty query matches everything.
    pub fn search(&self, kind: Option<ShapeKind>, query: &str) -> Vec<&StandardSection> {
        let needle = query.trim().to_lowercase();
        self.iter()
            .filter(|s| kind.map_or(true, |k| s.kind() == k))
            .filter(|s| needle.is_empty() || s.name.to_lowercase().contains(&needle))
            .collect()
    }

    /// Lightest section of a shape whose strong-axis modulus reaches
    /// `required_sx_mm3`, i.e. the smallest area that still works in bending
    pub fn lightest_with_sx(&self, kind: ShapeKind, required_sx_mm3: f64) -> Option<&StandardSection> {
        self.sections_of(kind)
            .into_iter()
            .filter(|s| s.properties.sx_mm3 >= required_sx_mm3)
            .min_by(|a, b| a.properties.area_mm2.total_cmp(&b.properties.area_mm2))
    }

    /// Iterate over every section in insertion order
    pub fn iter(&self) -> impl Iterator<Item = &StandardSection> {
        self.sections.iter()
    }

    /// Get the number of sections in the catalog
    pub fn len(&self) -> usize {
        self.sections.len()
    }

    /// Check if the catalog is empty
    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }
}

/// Render every section of a catalog as markdown tables, one per shape.
///
/// Used by the `gen-catalog` binary to produce `CATALOG.md`.
pub fn generate_catalog_markdown(catalog: &StandardCatalog) -> String {
    let mut md = String::new();
    md.push_str("# Standard Section Catalog\n\n");
    md.push_str("> Generated by `cargo run --bin gen-catalog`. Do not edit by hand.\n\n");
    md.push_str(&format!("{} sections. All values in mm.\n\n", catalog.len()));

    for kind in ShapeKind::ALL {
        let sections = catalog.sections_of(kind);
        if sections.is_empty() {
            continue;
        }

        md.push_str(&format!("## {} ({})\n\n", kind.display_name(), sections.len()));
        md.push_str("| Designation | A (mm²) | Ix (mm⁴) | Iy (mm⁴) | Sx (mm³) | Sy (mm³) | rx (mm) | ry (mm) |");
        if kind.has_centroid() {
            md.push_str(" Cx (mm) | Cy (mm) |");
        }
        md.push('\n');
        md.push_str("|---|---|---|---|---|---|---|---|");
        if kind.has_centroid() {
            md.push_str("---|---|");
        }
        md.push('\n');

        for s in sections {
            let p = &s.properties;
            md.push_str(&format!(
                "| {} | {} | {} | {} | {} | {} | {} | {} |",
                s.name,
                format_value(p.area_mm2, true),
                format_value(p.ix_mm4, true),
                format_value(p.iy_mm4, true),
                format_value(p.sx_mm3, true),
                format_value(p.sy_mm3, true),
                format_value(p.rx_mm, true),
                format_value(p.ry_mm, true),
            ));
            if let (Some(cx), Some(cy)) = (p.cx_mm, p.cy_mm) {
                md.push_str(&format!(" {} | {} |", format_value(cx, true), format_value(cy, true)));
            }
            md.push('\n');
        }
        md.push('\n');
    }

    md
}

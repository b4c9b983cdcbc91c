//! # section_core - Cross-Section Property Engine
//!
//! `section_core` computes the geometric properties of structural profiles
//! (area, moments of inertia, section moduli, radii of gyration, centroid)
//! from a handful of dimensions. All inputs and outputs are
//! JSON-serializable, so the same records travel between the CLI, files and
//! any tool that speaks JSON.
//!
//! ## Design Philosophy
//!
//! - **Stateless**: Pure functions from dimensions to properties
//! - **JSON-First**: All public records implement Serialize/Deserialize
//! - **Rich Errors**: Every validation failure is reported, not just the first
//! - **Closed Shapes**: A shape is a `Dimensions` variant, so dispatch is an
//!   exhaustive `match`
//!
//! ## Quick Start
//!
//! ```rust
//! use section_core::{compute, validate, Dimensions};
//!
//! let dims = Dimensions::HBeam {
//!     flange_width: 200.0,
//!     web_height: 400.0,
//!     flange_thickness: 16.0,
//!     web_thickness: 10.0,
//! };
//! assert!(validate(&dims).is_empty());
//!
//! let props = compute(&dims).unwrap();
//! assert!((props.area_mm2 - 10_080.0).abs() < 1e-9);
//! ```
//!
//! ## Modules
//!
//! - [`shapes`] - Shape kinds and dimension records
//! - [`validation`] - Field and cross-field checks
//! - [`calculations`] - Property algorithms, one per shape
//! - [`equations`] - Shared geometry formulas
//! - [`catalog`] - Standard mill sizes with precomputed properties
//! - [`report`] - Labelled rows and number formatting
//! - [`settings`] - TOML report settings
//! - [`export`] - Atomic JSON export of records and the catalog
//! - [`errors`] - Structured error types

pub mod calculations;
pub mod catalog;
pub mod equations;
pub mod errors;
pub mod export;
pub mod report;
pub mod settings;
pub mod shapes;
pub mod validation;

// Re-export commonly used types at crate root for convenience
pub use calculations::{compute, compute_properties, SectionProperties};
pub use catalog::{catalog, standard_sections, StandardCatalog, StandardSection};
pub use errors::{CalcError, CalcResult};
pub use export::{load_record, save_catalog, save_record, CalculationRecord};
pub use report::PropertyReport;
pub use settings::ReportSettings;
pub use shapes::{Dimensions, ShapeKind};
pub use validation::validate;

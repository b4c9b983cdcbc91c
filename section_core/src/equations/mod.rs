//! # Section Geometry Equations
//!
//! Fundamental cross-section formulas kept in one place so every shape
//! algorithm composes the same primitives.
//!
//! ## Modules
//!
//! - [`section`] - Rectangle and circle primitives, parallel axis transfer,
//!   radius of gyration, governing-fiber section modulus
//!
//! ## Axis Conventions
//!
//! - **X axis**: horizontal, the strong bending axis in the shape's natural
//!   orientation
//! - **Y axis**: vertical, the weak bending axis
//! - **Centroid offsets**: measured from the outer corner (angle) or the
//!   back of the web (channel)
//!
//! ## References
//!
//! - Roark's Formulas for Stress and Strain, 8th Edition
//! - AISC Steel Construction Manual, Part 1

pub mod section;

pub use section::{
    circular_area,
    circular_moment_of_inertia,
    circular_section_modulus,
    composite_centroid,
    governing_section_modulus,
    parallel_axis,
    radius_of_gyration,
    rectangular_area,
    rectangular_moment_of_inertia,
    rectangular_section_modulus,
};

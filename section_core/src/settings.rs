//! # Report Settings
//!
//! Presentation options for reports and the CLI. Every field has a default,
//! so a settings file only needs the keys it changes.
//!
//! ## TOML Example
//!
//! ```toml
//! format = "json"
//! show_centroid = false
//! group_thousands = false
//! ```

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};

/// Output format for a computed section
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable table
    #[default]
    Text,
    /// JSON for scripts and LLM tools
    Json,
}

/// Report and display settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReportSettings {
    /// Output format
    pub format: OutputFormat,

    /// Print X and Y rows even for circle and pipe, where they are equal
    pub show_both_axes_for_isotropic: bool,

    /// Include centroid rows for angle and channel
    pub show_centroid: bool,

    /// Insert thousands separators for values between 1,000 and 1,000,000
    pub group_thousands: bool,

    /// Pretty-print JSON output
    pub pretty_json: bool,
}

impl Default for ReportSettings {
    fn default() -> Self {
        ReportSettings {
            format: OutputFormat::Text,
            show_both_axes_for_isotropic: false,
            show_centroid: true,
            group_thousands: true,
            pretty_json: true,
        }
    }
}

impl ReportSettings {
    /// Parse settings from TOML text
    pub fn from_toml_str(text: &str) -> CalcResult<Self> {
        toml::from_str(text).map_err(|e| CalcError::config_error("<string>", e.to_string()))
    }

    /// Load settings from a TOML file
    pub fn load(path: &Path) -> CalcResult<Self> {
        let text = fs::read_to_string(path)
            .map_err(|e| CalcError::file_error("read", path.display().to_string(), e.to_string()))?;
        toml::from_str(&text).map_err(|e| CalcError::config_error(path.display().to_string(), e.to_string()))
    }
}

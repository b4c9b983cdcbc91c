//! # Property Reports
//!
//! Turns a [`SectionProperties`] record into labelled rows with symbols and
//! units, and renders them as a plain-text table.
//!
//! Circle and pipe collapse to a single `I`, `S`, `r` row each since both
//! axes are identical. Centroid rows appear only for angle and channel.
//!
//! ## Number Formatting
//!
//! | Magnitude | Format | Example |
//! |---|---|---|
//! | ≥ 1,000,000 | exponent, 3 decimals | `4.909e6` |
//! | ≥ 1,000 | up to 1 decimal, grouped | `7,854` / `2,827.4` |
//! | ≥ 1 | 2 decimals | `25.00` |
//! | < 1 | 4 significant figures | `0.1235` |

use serde::{Deserialize, Serialize};

use crate::calculations::SectionProperties;
use crate::settings::ReportSettings;
use crate::shapes::Dimensions;

/// One printable line of a report
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PropertyRow {
    pub label: String,
    pub symbol: String,
    pub value: f64,
    pub unit: String,
}

impl PropertyRow {
    fn new(label: &str, symbol: &str, value: f64, unit: &str) -> Self {
        PropertyRow {
            label: label.to_string(),
            symbol: symbol.to_string(),
            value,
            unit: unit.to_string(),
        }
    }
}

/// Report of one computed section
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PropertyReport {
    /// Shape display name
    pub shape: String,

    /// Mill-style designation of the input
    pub designation: String,

    /// Input dimensions as rows
    pub inputs: Vec<PropertyRow>,

    /// Computed properties as rows
    pub rows: Vec<PropertyRow>,
}

impl PropertyReport {
    /// Build the report rows for a computed section
    pub fn new(dims: &Dimensions, props: &SectionProperties, settings: &ReportSettings) -> Self {
        let kind = dims.shape();
        let inputs = dims
            .fields()
            .iter()
            .map(|f| PropertyRow::new(f.label, f.symbol, f.value, "mm"))
            .collect();

        let mut rows = vec![PropertyRow::new("Area", "A", props.area_mm2, "mm²")];

        if settings.show_centroid {
            if let (Some(cx), Some(cy)) = (props.cx_mm, props.cy_mm) {
                rows.push(PropertyRow::new("Centroid X", "Cx", cx, "mm"));
                rows.push(PropertyRow::new("Centroid Y", "Cy", cy, "mm"));
            }
        }

        if kind.is_isotropic() && !settings.show_both_axes_for_isotropic {
            rows.push(PropertyRow::new("Moment of inertia", "I", props.ix_mm4, "mm⁴"));
            rows.push(PropertyRow::new("Section modulus", "S", props.sx_mm3, "mm³"));
            rows.push(PropertyRow::new("Radius of gyration", "r", props.rx_mm, "mm"));
        } else {
            rows.push(PropertyRow::new("Moment of inertia X", "Ix", props.ix_mm4, "mm⁴"));
            rows.push(PropertyRow::new("Moment of inertia Y", "Iy", props.iy_mm4, "mm⁴"));
            rows.push(PropertyRow::new("Section modulus X", "Sx", props.sx_mm3, "mm³"));
            rows.push(PropertyRow::new("Section modulus Y", "Sy", props.sy_mm3, "mm³"));
            rows.push(PropertyRow::new("Radius of gyration X", "rx", props.rx_mm, "mm"));
            rows.push(PropertyRow::new("Radius of gyration Y", "ry", props.ry_mm, "mm"));
        }

        PropertyReport {
            shape: kind.display_name().to_string(),
            designation: dims.designation(),
            inputs,
            rows,
        }
    }

    /// Render as an aligned plain-text table
    pub fn render_text(&self, settings: &ReportSettings) -> String {
        let rule = "═".repeat(44);
        let mut out = String::new();
        out.push_str(&rule);
        out.push('\n');
        out.push_str(&format!("  {}  {}\n", self.shape.to_uppercase(), self.designation));
        out.push_str(&rule);
        out.push('\n');
        out.push_str("Input:\n");
        for row in &self.inputs {
            out.push_str(&render_row(row, settings));
        }
        out.push('\n');
        out.push_str("Properties:\n");
        for row in &self.rows {
            out.push_str(&render_row(row, settings));
        }
        out.push_str(&rule);
        out.push('\n');
        out
    }
}

fn render_row(row: &PropertyRow, settings: &ReportSettings) -> String {
    format!(
        "  {:<22} {:<3} = {:>14} {}\n",
        row.label,
        row.symbol,
        format_value(row.value, settings.group_thousands),
        row.unit
    )
}

/// Format a property value for display (see the module table)
pub fn format_value(value: f64, group_thousands: bool) -> String {
    if value == 0.0 {
        return "0".to_string();
    }
    if !value.is_finite() {
        return value.to_string();
    }

    let magnitude = value.abs();
    if magnitude >= 1e6 {
        format!("{:.3e}", value)
    } else if magnitude >= 1000.0 {
        let fixed = format!("{:.1}", value);
        let trimmed = fixed.strip_suffix(".0").unwrap_or(&fixed);
        if group_thousands {
            group_digits(trimmed)
        } else {
            trimmed.to_string()
        }
    } else if magnitude >= 1.0 {
        format!("{:.2}", value)
    } else {
        let decimals = (3 - magnitude.log10().floor() as i32).max(0) as usize;
        format!("{:.*}", decimals, value)
    }
}

/// Insert commas between thousands groups of the integer part
fn group_digits(number: &str) -> String {
    let (sign, unsigned) = match number.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", number),
    };
    let (int_part, frac_part) = match unsigned.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (unsigned, None),
    };

    let mut grouped = String::new();
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    match frac_part {
        Some(f) => format!("{}{}.{}", sign, grouped, f),
        None => format!("{}{}", sign, grouped),
    }
}

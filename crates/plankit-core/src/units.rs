//! Measurement units for calibrated lengths
//!
//! The scale calibrator stores the unit the user entered alongside the
//! derived scale factor; areas are reported in the squared unit.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Real-world length unit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Unit {
    /// Millimeters
    Mm,
    /// Centimeters
    Cm,
    /// Meters
    M,
    /// Inches
    In,
    /// Feet
    Ft,
    /// Yards
    Yd,
    /// Kilometers
    Km,
    /// Miles
    Mi,
}

impl Default for Unit {
    fn default() -> Self {
        Self::M
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Mm => write!(f, "mm"),
            Self::Cm => write!(f, "cm"),
            Self::M => write!(f, "m"),
            Self::In => write!(f, "in"),
            Self::Ft => write!(f, "ft"),
            Self::Yd => write!(f, "yd"),
            Self::Km => write!(f, "km"),
            Self::Mi => write!(f, "mi"),
        }
    }
}

impl FromStr for Unit {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "mm" => Ok(Self::Mm),
            "cm" => Ok(Self::Cm),
            "m" => Ok(Self::M),
            "in" | "inch" => Ok(Self::In),
            "ft" | "foot" | "feet" => Ok(Self::Ft),
            "yd" | "yard" => Ok(Self::Yd),
            "km" => Ok(Self::Km),
            "mi" | "mile" => Ok(Self::Mi),
            _ => Err(format!("Unknown unit: {}", s)),
        }
    }
}

impl Unit {
    /// All units a calibration dialog should offer, in display order.
    pub fn all() -> &'static [Unit] {
        &[
            Unit::Mm,
            Unit::Cm,
            Unit::M,
            Unit::In,
            Unit::Ft,
            Unit::Yd,
            Unit::Km,
            Unit::Mi,
        ]
    }
}

/// Format a length for display in the given unit
pub fn format_length(value: f64, unit: Unit) -> String {
    format!("{:.3} {}", value, unit)
}

/// Format an area for display in the given unit squared
pub fn format_area(value: f64, unit: Unit) -> String {
    format!("{:.3} {}\u{b2}", value, unit)
}

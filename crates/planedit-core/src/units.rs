//! Unit conversion utilities
//!
//! Plan coordinates are stored in centimeters. This module converts them
//! to and from the length unit chosen for display, including fractional
//! inch input.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Length unit used to display and enter plan coordinates
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LengthUnit {
    /// Millimeters
    Millimeter,
    /// Centimeters (the plan's storage unit)
    Centimeter,
    /// Meters
    Meter,
    /// Inches
    Inch,
}

impl Default for LengthUnit {
    fn default() -> Self {
        Self::Centimeter
    }
}

impl fmt::Display for LengthUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl FromStr for LengthUnit {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "millimeter" | "mm" => Ok(Self::Millimeter),
            "centimeter" | "cm" => Ok(Self::Centimeter),
            "meter" | "m" => Ok(Self::Meter),
            "inch" | "in" => Ok(Self::Inch),
            _ => Err(format!("Unknown length unit: {}", s)),
        }
    }
}

impl LengthUnit {
    /// Number of centimeters in one unit.
    fn centimeters_per_unit(self) -> f32 {
        match self {
            Self::Millimeter => 0.1,
            Self::Centimeter => 1.0,
            Self::Meter => 100.0,
            Self::Inch => 2.54,
        }
    }

    /// Converts a length in centimeters into this unit.
    pub fn centimeter_to_unit(self, value_cm: f32) -> f32 {
        match self {
            Self::Centimeter => value_cm,
            Self::Millimeter => value_cm * 10.0,
            other => value_cm / other.centimeters_per_unit(),
        }
    }

    /// Converts a length given in this unit into centimeters.
    pub fn unit_to_centimeter(self, value: f32) -> f32 {
        match self {
            Self::Centimeter => value,
            Self::Millimeter => value / 10.0,
            other => value * other.centimeters_per_unit(),
        }
    }

    /// Short label of the unit ("mm", "cm", "m" or "in")
    pub fn label(self) -> &'static str {
        match self {
            Self::Millimeter => "mm",
            Self::Centimeter => "cm",
            Self::Meter => "m",
            Self::Inch => "in",
        }
    }

    /// Default number of decimals shown for this unit
    pub fn default_decimals(self) -> usize {
        match self {
            Self::Millimeter => 0,
            Self::Centimeter => 1,
            Self::Meter => 3,
            Self::Inch => 3,
        }
    }
}

/// Format length value for display
///
/// * `value_cm` - Value in centimeters
/// * `unit` - Target length unit
/// * `decimals` - Number of decimals to show
pub fn format_length(value_cm: f32, unit: LengthUnit, decimals: usize) -> String {
    format!("{:.*}", decimals, unit.centimeter_to_unit(value_cm))
}

/// Parse length string to centimeters
///
/// Inches accept fractions such as `1 1/2` or `3/8`.
///
/// * `input` - String to parse
/// * `unit` - Assumed length unit
pub fn parse_length(input: &str, unit: LengthUnit) -> Result<f32, String> {
    let input = input.trim();
    if input.is_empty() {
        return Ok(0.0);
    }

    if unit != LengthUnit::Inch || !input.contains('/') {
        let value = input.parse::<f32>().map_err(|e| e.to_string())?;
        return Ok(unit.unit_to_centimeter(value));
    }

    let mut total_inches = 0.0;
    let mut negative = false;
    for (i, part) in input.split_whitespace().enumerate() {
        let part = if i == 0 && part.starts_with('-') {
            negative = true;
            &part[1..]
        } else {
            part
        };
        if part.contains('/') {
            let frac_parts: Vec<&str> = part.split('/').collect();
            if frac_parts.len() != 2 {
                return Err("Invalid fraction format".to_string());
            }
            let num = frac_parts[0]
                .parse::<f32>()
                .map_err(|_| "Invalid numerator")?;
            let den = frac_parts[1]
                .parse::<f32>()
                .map_err(|_| "Invalid denominator")?;
            if den == 0.0 {
                return Err("Division by zero".to_string());
            }
            total_inches += num / den;
        } else {
            total_inches += part.parse::<f32>().map_err(|_| "Invalid number part")?;
        }
    }
    if negative {
        total_inches = -total_inches;
    }
    Ok(LengthUnit::Inch.unit_to_centimeter(total_inches))
}

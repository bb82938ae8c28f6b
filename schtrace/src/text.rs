//! Font sizes for schematic text labels.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::core::SchTraceError;
use crate::geometry::Matrix;

/// Category of a schematic text label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TextCategory {
    PinNumber,
    ReferenceDesignator,
    ManufacturerNumber,
    NetLabel,
}

impl TextCategory {
    pub const ALL: [TextCategory; 4] = [
        TextCategory::PinNumber,
        TextCategory::ReferenceDesignator,
        TextCategory::ManufacturerNumber,
        TextCategory::NetLabel,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            TextCategory::PinNumber => "pin_number",
            TextCategory::ReferenceDesignator => "reference_designator",
            TextCategory::ManufacturerNumber => "manufacturer_number",
            TextCategory::NetLabel => "net_label",
        }
    }
}

impl fmt::Display for TextCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TextCategory {
    type Err = SchTraceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        TextCategory::ALL
            .into_iter()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| SchTraceError::UnknownTextCategory(s.to_string()))
    }
}

/// Font size in schematic units.
pub fn base_font_size(category: TextCategory) -> f64 {
    match category {
        TextCategory::PinNumber => 0.15,
        TextCategory::ReferenceDesignator
        | TextCategory::ManufacturerNumber
        | TextCategory::NetLabel => 0.18,
    }
}

/// Font size in screen units under `transform`.
pub fn screen_font_size(transform: &Matrix, category: TextCategory) -> f64 {
    transform.horizontal_scale() * base_font_size(category)
}

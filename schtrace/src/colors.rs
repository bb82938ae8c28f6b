//! Theme colors for schematic traces.

use serde::{Deserialize, Serialize};

/// Fixed palette cycled over the straight segments of one trace, so stacked
/// segments can be told apart.
pub const SEGMENT_PALETTE: [&str; 6] = [
    "rgb(255,0,0)",
    "rgb(0,255,0)",
    "rgb(0,0,255)",
    "rgb(255,255,0)",
    "rgb(255, 0, 255)",
    "rgb(0, 255,255)",
];

/// Palette color for the `index`-th straight segment (wraps every 6).
pub fn segment_color(index: usize) -> &'static str {
    SEGMENT_PALETTE[index % SEGMENT_PALETTE.len()]
}

/// Key → color map for the schematic theme.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SchematicColors {
    pub background: String,
    pub wire: String,
    pub junction: String,
}

impl Default for SchematicColors {
    fn default() -> Self {
        Self {
            background: "rgb(245, 241, 237)".to_string(),
            wire: "rgb(0, 150, 0)".to_string(),
            junction: "rgb(0, 150, 0)".to_string(),
        }
    }
}

impl SchematicColors {
    pub fn get(&self, key: &str) -> Option<&str> {
        match key {
            "background" => Some(&self.background),
            "wire" => Some(&self.wire),
            "junction" => Some(&self.junction),
            _ => None,
        }
    }
}

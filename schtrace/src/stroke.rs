//! Base stroke width for schematic lines.

use crate::geometry::Matrix;

/// Schematic line width in schematic units before transformation.
pub const SCH_STROKE_PER_UNIT: f64 = 0.02;

/// Screen-space stroke width for a schematic line under `transform`.
pub fn sch_stroke_size(transform: &Matrix) -> f64 {
    stroke_size_with(transform, SCH_STROKE_PER_UNIT)
}

pub(crate) fn stroke_size_with(transform: &Matrix, per_unit: f64) -> f64 {
    transform.horizontal_scale() * per_unit
}

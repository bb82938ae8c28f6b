//! Output drawing primitives.
//!
//! Primitives are plain values handed to a markup serializer. Their position
//! in the output vector is their paint order.

use serde::{Deserialize, Serialize};

use crate::geometry::{fmt_num, Point};

/// Stroke line-cap style. Schematic wires are always drawn with round caps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LineCap {
    Round,
}

impl LineCap {
    pub fn as_str(&self) -> &'static str {
        match self {
            LineCap::Round => "round",
        }
    }
}

/// A stroked path.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PathPrimitive {
    /// Path data (`M x y L x y`, `M x y Q cx cy x y`).
    pub d: String,
    pub stroke: String,
    pub fill: String,
    pub stroke_width: f64,
    pub stroke_linecap: LineCap,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub opacity: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub class: Option<String>,
}

/// A filled circle.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CirclePrimitive {
    pub center: Point,
    pub radius: f64,
    pub fill: String,
}

/// One drawing primitive.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Primitive {
    Path(PathPrimitive),
    Circle(CirclePrimitive),
}

impl Primitive {
    /// SVG element name for this primitive.
    pub fn element_name(&self) -> &'static str {
        match self {
            Primitive::Path(_) => "path",
            Primitive::Circle(_) => "circle",
        }
    }

    pub fn as_path(&self) -> Option<&PathPrimitive> {
        match self {
            Primitive::Path(p) => Some(p),
            _ => None,
        }
    }

    pub fn as_circle(&self) -> Option<&CirclePrimitive> {
        match self {
            Primitive::Circle(c) => Some(c),
            _ => None,
        }
    }

    pub fn is_circle(&self) -> bool {
        matches!(self, Primitive::Circle(_))
    }

    /// Ordered SVG attribute pairs, ready for a markup serializer.
    pub fn attributes(&self) -> Vec<(&'static str, String)> {
        match self {
            Primitive::Path(p) => {
                let mut attrs = Vec::with_capacity(7);
                if let Some(ref class) = p.class {
                    attrs.push(("class", class.clone()));
                }
                attrs.push(("d", p.d.clone()));
                attrs.push(("stroke", p.stroke.clone()));
                attrs.push(("fill", p.fill.clone()));
                attrs.push(("stroke-width", format!("{}px", fmt_num(p.stroke_width))));
                attrs.push(("stroke-linecap", p.stroke_linecap.as_str().to_string()));
                if let Some(opacity) = p.opacity {
                    attrs.push(("opacity", fmt_num(opacity)));
                }
                attrs
            }
            Primitive::Circle(c) => vec![
                ("cx", fmt_num(c.center.x)),
                ("cy", fmt_num(c.center.y)),
                ("r", fmt_num(c.radius)),
                ("fill", c.fill.clone()),
            ],
        }
    }

    /// Single-line SVG element, e.g. `<circle cx="1" cy="2" r="0.03" fill="red" />`.
    pub fn to_svg_element(&self) -> String {
        let attrs: Vec<String> = self
            .attributes()
            .iter()
            .map(|(k, v)| format!("{}=\"{}\"", k, escape_attr_value(v)))
            .collect();
        format!("<{} {} />", self.element_name(), attrs.join(" "))
    }
}

/// Escape a value for use inside a double-quoted XML attribute.
pub fn escape_attr_value(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for ch in value.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(ch),
        }
    }
    out
}

impl From<PathPrimitive> for Primitive {
    fn from(p: PathPrimitive) -> Self {
        Primitive::Path(p)
    }
}

impl From<CirclePrimitive> for Primitive {
    fn from(c: CirclePrimitive) -> Self {
        Primitive::Circle(c)
    }
}

/// `M x1 y1 L x2 y2`
pub fn line_command(from: Point, to: Point) -> String {
    format!(
        "M {} {} L {} {}",
        fmt_num(from.x),
        fmt_num(from.y),
        fmt_num(to.x),
        fmt_num(to.y)
    )
}

/// `M x1 y1 Q cx cy x2 y2`
pub fn quad_command(from: Point, control: Point, to: Point) -> String {
    format!(
        "M {} {} Q {} {} {} {}",
        fmt_num(from.x),
        fmt_num(from.y),
        fmt_num(control.x),
        fmt_num(control.y),
        fmt_num(to.x),
        fmt_num(to.y)
    )
}

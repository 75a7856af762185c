//! Style of the brush overlay drawn over an axis.

use egui::{Color32, Stroke};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::Color;

/// `(rendering attribute, option key)` pairs applied by [`map_style_attributes`].
pub const AREA_SELECT_STYLE_MAPPING: [(&str, &str); 5] = [
    ("fill", "color"),
    ("lineWidth", "borderWidth"),
    ("stroke", "borderColor"),
    ("width", "width"),
    ("opacity", "opacity"),
];

/// The `areaSelectStyle` option group, as the user writes it.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase", deny_unknown_fields)]
pub struct AreaSelectStyleOptions {
    /// Brush width across the axis, in points.
    pub width: f32,
    pub border_width: f32,
    pub border_color: Color,
    pub color: Color,
    pub opacity: f32,
}

impl Default for AreaSelectStyleOptions {
    fn default() -> Self {
        Self {
            width: 20.0,
            border_width: 1.0,
            border_color: default_brush_color(),
            color: default_brush_color(),
            opacity: 0.3,
        }
    }
}

fn default_brush_color() -> Color {
    Color::new(Color32::from_rgb(160, 197, 232), "rgba(160,197,232)")
}

/// Brush style in rendering terms.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AreaSelectStyle {
    pub fill: Color,
    pub line_width: f32,
    pub stroke: Color,
    pub width: f32,
    pub opacity: f32,
}

impl AreaSelectStyle {
    pub fn from_options(options: &AreaSelectStyleOptions) -> Self {
        Self {
            fill: options.color.clone(),
            line_width: options.border_width,
            stroke: options.border_color.clone(),
            width: options.width,
            opacity: options.opacity,
        }
    }

    /// Fill color with `opacity` applied, ready for an egui painter.
    pub fn fill_color(&self) -> Color32 {
        self.fill.color32().gamma_multiply(self.opacity)
    }

    pub fn egui_stroke(&self) -> Stroke {
        Stroke::new(self.line_width, self.stroke.color32())
    }
}

impl From<&AreaSelectStyleOptions> for AreaSelectStyle {
    fn from(options: &AreaSelectStyleOptions) -> Self {
        Self::from_options(options)
    }
}

/// Rename keys of an untyped attribute map using a `(target, source)` table.
///
/// Source keys missing from `source` are left out of the result.
pub fn map_style_attributes(
    source: &Map<String, Value>,
    table: &[(&str, &str)],
) -> Map<String, Value> {
    table
        .iter()
        .filter_map(|&(target, key)| {
            source
                .get(key)
                .map(|value| (target.to_owned(), value.clone()))
        })
        .collect()
}

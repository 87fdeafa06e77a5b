use serde::{Deserialize, Serialize};

use crate::render::{Color, FontSpec};

pub const DEFAULT_MARKER_COLOR: Color = Color::rgb(1.0 / 255.0, 184.0 / 255.0, 170.0 / 255.0);

/// Host-supplied visual settings, immutable for one update cycle.
///
/// Field names follow the host property names (`defaultColor`, `lineWidth`,
/// ...). `font_size` is in points.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StyleSettings {
    #[serde(default = "default_color")]
    pub default_color: Color,
    /// Constant shown for the per-category color override; `None` follows `default_color`.
    #[serde(default)]
    pub data_point_color: Option<Color>,
    #[serde(default = "default_line_width")]
    pub line_width: f64,
    #[serde(default = "default_font_family")]
    pub font_family: String,
    #[serde(default = "default_font_size")]
    pub font_size: f64,
    #[serde(default = "default_radius")]
    pub radius: f64,
}

impl Default for StyleSettings {
    fn default() -> Self {
        Self {
            default_color: default_color(),
            data_point_color: None,
            line_width: default_line_width(),
            font_family: default_font_family(),
            font_size: default_font_size(),
            radius: default_radius(),
        }
    }
}

impl StyleSettings {
    #[must_use]
    pub fn with_default_color(mut self, color: Color) -> Self {
        self.default_color = color;
        self
    }

    #[must_use]
    pub fn with_data_point_color(mut self, color: Color) -> Self {
        self.data_point_color = Some(color);
        self
    }

    #[must_use]
    pub fn with_line_width(mut self, line_width: f64) -> Self {
        self.line_width = line_width;
        self
    }

    #[must_use]
    pub fn with_font(mut self, family: impl Into<String>, size_pt: f64) -> Self {
        self.font_family = family.into();
        self.font_size = size_pt;
        self
    }

    #[must_use]
    pub fn with_radius(mut self, radius: f64) -> Self {
        self.radius = radius;
        self
    }

    #[must_use]
    pub fn resolved_data_point_color(&self) -> Color {
        self.data_point_color.unwrap_or(self.default_color)
    }

    #[must_use]
    pub fn font(&self) -> FontSpec {
        FontSpec::new(self.font_family.clone(), self.font_size)
    }
}

fn default_color() -> Color {
    DEFAULT_MARKER_COLOR
}

fn default_line_width() -> f64 {
    2.0
}

fn default_font_family() -> String {
    "Segoe UI".to_owned()
}

fn default_font_size() -> f64 {
    9.0
}

fn default_radius() -> f64 {
    5.0
}

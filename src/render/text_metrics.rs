use serde::{Deserialize, Serialize};

/// CSS points to pixels at 96 DPI.
pub const PX_PER_PT: f64 = 96.0 / 72.0;

/// Font used for measuring and drawing labels.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FontSpec {
    pub family: String,
    pub size_pt: f64,
}

impl FontSpec {
    #[must_use]
    pub fn new(family: impl Into<String>, size_pt: f64) -> Self {
        Self {
            family: family.into(),
            size_pt,
        }
    }

    #[must_use]
    pub fn size_px(&self) -> f64 {
        self.size_pt * PX_PER_PT
    }
}

/// Text measurement collaborator used to reserve room for the target label.
pub trait TextMeasurer {
    /// Rendered advance width of `text` in pixels.
    fn measure_text_width(&self, text: &str, font: &FontSpec) -> f64;
}

/// Deterministic, backend-independent width estimate from per-glyph classes.
#[derive(Debug, Clone, Copy, Default)]
pub struct EstimatedTextMeasurer;

impl TextMeasurer for EstimatedTextMeasurer {
    fn measure_text_width(&self, text: &str, font: &FontSpec) -> f64 {
        let font_size_px = font.size_px();
        if text.is_empty() || !font_size_px.is_finite() || font_size_px <= 0.0 {
            return 0.0;
        }
        let units = text.chars().fold(0.0, |acc, ch| {
            acc + match ch {
                '0'..='9' => 0.62,
                '.' | ',' => 0.34,
                '-' | '+' | '%' => 0.42,
                ' ' => 0.33,
                'A'..='Z' => 0.68,
                _ => 0.58,
            }
        });
        units * font_size_px
    }
}

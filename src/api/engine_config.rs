use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};
use crate::render::Color;

use super::TransitionEasing;

/// Public engine bootstrap configuration.
///
/// This type is serializable so host applications can persist/load chart setup
/// without inventing their own ad-hoc format.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LollipopEngineConfig {
    #[serde(default = "default_transition_duration_ms")]
    pub transition_duration_ms: f64,
    #[serde(default)]
    pub easing: TransitionEasing,
    #[serde(default = "default_dimmed_opacity")]
    pub dimmed_opacity: f64,
    /// Outer padding of the category scale, in category steps.
    #[serde(default = "default_category_padding")]
    pub category_padding: f64,
    #[serde(default = "default_label_color")]
    pub label_color: Color,
}

impl Default for LollipopEngineConfig {
    fn default() -> Self {
        Self {
            transition_duration_ms: default_transition_duration_ms(),
            easing: TransitionEasing::default(),
            dimmed_opacity: default_dimmed_opacity(),
            category_padding: default_category_padding(),
            label_color: default_label_color(),
        }
    }
}

impl LollipopEngineConfig {
    #[must_use]
    pub fn with_transition(mut self, duration_ms: f64, easing: TransitionEasing) -> Self {
        self.transition_duration_ms = duration_ms;
        self.easing = easing;
        self
    }

    #[must_use]
    pub fn with_dimmed_opacity(mut self, opacity: f64) -> Self {
        self.dimmed_opacity = opacity;
        self
    }

    #[must_use]
    pub fn with_category_padding(mut self, padding: f64) -> Self {
        self.category_padding = padding;
        self
    }

    #[must_use]
    pub fn with_label_color(mut self, color: Color) -> Self {
        self.label_color = color;
        self
    }

    pub fn to_json_pretty(&self) -> ChartResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| {
            ChartError::InvalidData(format!("failed to serialize engine config json: {e}"))
        })
    }

    pub fn from_json_str(input: &str) -> ChartResult<Self> {
        serde_json::from_str(input).map_err(|e| {
            ChartError::InvalidData(format!("failed to parse engine config json: {e}"))
        })
    }
}

fn default_transition_duration_ms() -> f64 {
    500.0
}

fn default_dimmed_opacity() -> f64 {
    0.5
}

fn default_category_padding() -> f64 {
    0.5
}

fn default_label_color() -> Color {
    Color::BLACK
}

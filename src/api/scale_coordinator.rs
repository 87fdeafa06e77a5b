use serde::{Deserialize, Serialize};

use crate::core::{DataModel, LinearScale, PointScale, Viewport};
use crate::error::ChartResult;

use super::StyleSettings;

/// Scales of one update cycle.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartScales {
    pub category: PointScale,
    pub value: LinearScale,
    pub target_label_width: f64,
}

impl ChartScales {
    /// Right edge of the plotting area; the target label starts past it.
    #[must_use]
    pub fn category_range_end(&self) -> f64 {
        self.category.range_end()
    }

    #[must_use]
    pub fn x(&self, category: &str) -> Option<f64> {
        self.category.position(category)
    }

    #[must_use]
    pub fn y(&self, value: f64) -> f64 {
        self.value.map(value)
    }
}

/// Derives the category and value scales for one cycle.
///
/// The category range reserves `target_label_width + font_size / 2` on the
/// right for the target label. The value range is inverted and inset by
/// `radius + line_width` so markers stay inside the viewport.
pub fn build_scales(
    model: &DataModel,
    viewport: Viewport,
    settings: &StyleSettings,
    target_label_width: f64,
    category_padding: f64,
) -> ChartResult<ChartScales> {
    let category_range_end = viewport.width - target_label_width - settings.font_size / 2.0;
    let category = PointScale::new(
        model.categories(),
        (0.0, category_range_end),
        category_padding,
    )?;

    let inset = settings.radius + settings.line_width;
    let value = LinearScale::new(
        (model.min_value, model.max_value),
        (viewport.height - inset, inset),
    )?;

    Ok(ChartScales {
        category,
        value,
        target_label_width,
    })
}

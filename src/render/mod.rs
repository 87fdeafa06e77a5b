mod frame;
mod layer_stack;
mod layered_frame;
mod null_renderer;
mod primitives;
mod style_variables;
mod text_metrics;

pub use frame::RenderFrame;
pub use layer_stack::SceneLayerKind;
pub use layered_frame::{LayerPrimitives, LayeredRenderFrame};
pub use null_renderer::NullRenderer;
pub use primitives::{CirclePrimitive, Color, LinePrimitive, TextHAlign, TextPrimitive};
pub use style_variables::StyleVariables;
pub use text_metrics::{EstimatedTextMeasurer, FontSpec, PX_PER_PT, TextMeasurer};

use crate::error::ChartResult;

/// Contract implemented by any rendering backend.
///
/// Backends receive a fully materialized, deterministic `RenderFrame` so
/// drawing code remains isolated from chart domain and interaction logic.
pub trait Renderer {
    fn render(&mut self, frame: &RenderFrame) -> ChartResult<()>;

    /// Receives the exported style variables once per update cycle.
    fn apply_style_variables(&mut self, _variables: &StyleVariables) -> ChartResult<()> {
        Ok(())
    }
}

#[cfg(feature = "cairo-backend")]
mod cairo_backend;
#[cfg(feature = "cairo-backend")]
pub use cairo_backend::{CairoContextRenderer, CairoRenderStats, CairoRenderer, PangoTextMeasurer};

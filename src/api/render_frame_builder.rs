use crate::core::Viewport;
use crate::render::{
    CirclePrimitive, LayeredRenderFrame, LinePrimitive, PX_PER_PT, SceneLayerKind, TextHAlign,
    TextPrimitive,
};

use super::scene::SceneGraph;
use super::{LollipopEngineConfig, StyleSettings};

/// Materializes the scene at eased progress `t` into layered draw commands.
///
/// Degenerate primitives (zero stroke, zero radius, empty text) are skipped
/// rather than emitted, so the frame always validates.
pub(super) fn build_layered_frame(
    scene: &SceneGraph,
    viewport: Viewport,
    settings: &StyleSettings,
    config: &LollipopEngineConfig,
    t: f64,
) -> LayeredRenderFrame {
    let mut frame = LayeredRenderFrame::canonical(viewport);
    let stroke_width = settings.line_width;
    let stroke_color = settings.default_color;
    let font_size_px = settings.font_size * PX_PER_PT;
    let text = |content: &str, x: f64, y: f64, opacity: f64, h_align: TextHAlign| {
        TextPrimitive::new(
            content,
            x,
            y,
            font_size_px,
            config.label_color.with_opacity(opacity),
            h_align,
        )
        .with_font_family(settings.font_family.as_str())
    };

    if stroke_width > 0.0 {
        if let Some(target_line) = scene.target_line() {
            let g = target_line.geometry.at(t);
            frame.push_line(
                SceneLayerKind::TargetLine,
                LinePrimitive::new(g.x1, g.y1, g.x2, g.y2, stroke_width, stroke_color),
            );
        }
    }

    if let Some(label) = scene.target_label().filter(|label| !label.text.is_empty()) {
        let anchor = label.anchor.at(t);
        frame.push_text(
            SceneLayerKind::TargetLabel,
            text(&label.text, anchor.x, anchor.y, 1.0, TextHAlign::Left),
        );
    }

    for point in scene.data_points().values() {
        let g = point.geometry.at(t);
        if g.radius <= 0.0 {
            continue;
        }
        frame.push_circle(
            SceneLayerKind::DataPoints,
            CirclePrimitive::new(g.cx, g.cy, g.radius, point.fill.at(t).with_opacity(point.opacity)),
        );
    }

    if stroke_width > 0.0 {
        for connector in scene.connectors().values() {
            let g = connector.geometry.at(t);
            frame.push_line(
                SceneLayerKind::Connectors,
                LinePrimitive::new(
                    g.x1,
                    g.y1,
                    g.x2,
                    g.y2,
                    stroke_width,
                    stroke_color.with_opacity(connector.opacity),
                ),
            );
        }
    }

    for label in scene
        .category_labels()
        .values()
        .filter(|label| !label.text.is_empty())
    {
        let anchor = label.anchor.at(t);
        frame.push_text(
            SceneLayerKind::CategoryLabels,
            text(&label.text, anchor.x, anchor.y, label.opacity, TextHAlign::Center),
        );
    }

    frame
}

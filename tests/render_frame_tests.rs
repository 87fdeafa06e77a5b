use lollipop_chart::api::{StyleSettings, UpdateInput};
use lollipop_chart::core::{CategoryColumn, ColumnSource, DataView, ValueColumn, Viewport};
use lollipop_chart::error::ChartError;
use lollipop_chart::render::{Color, NullRenderer, PX_PER_PT, SceneLayerKind, TextHAlign};
use lollipop_chart::{LollipopEngine, LollipopEngineConfig};

fn input(settings: StyleSettings) -> UpdateInput {
    let data_view = DataView::categorical(
        CategoryColumn::new(ColumnSource::named("Category"), ["a", "b", "c"]),
        ValueColumn::from_values(ColumnSource::named("Value"), &[10.0, 25.0, 40.0]),
        ValueColumn::from_values(ColumnSource::named("Target"), &[20.0]),
    );
    UpdateInput::new(Viewport::new(360.0, 180.0), Some(data_view)).with_settings(settings)
}

fn engine() -> LollipopEngine<NullRenderer> {
    LollipopEngine::headless(NullRenderer::default()).expect("engine init")
}

#[test]
fn frame_contains_one_primitive_per_element() {
    let mut engine = engine();
    engine.update(&input(StyleSettings::default())).expect("update");
    engine.render().expect("render");

    let renderer = engine.renderer();
    assert_eq!(renderer.render_calls, 1);
    assert_eq!(renderer.last_line_count, 4);
    assert_eq!(renderer.last_circle_count, 3);
    assert_eq!(renderer.last_text_count, 4);
}

#[test]
fn layers_follow_canonical_paint_order() {
    let mut engine = engine();
    engine.update(&input(StyleSettings::default())).expect("update");
    let frame = engine.build_render_frame();

    let kinds: Vec<SceneLayerKind> = frame.layers.iter().map(|layer| layer.kind).collect();
    assert_eq!(kinds, SceneLayerKind::CANONICAL);

    let target = frame.layer(SceneLayerKind::TargetLabel).expect("target label");
    assert_eq!(target.texts[0].text, "20");
    assert_eq!(target.texts[0].h_align, TextHAlign::Left);

    let labels = frame.layer(SceneLayerKind::CategoryLabels).expect("labels");
    let texts: Vec<&str> = labels.texts.iter().map(|text| text.text.as_str()).collect();
    assert_eq!(texts, ["a", "b", "c"]);
    assert!(labels.texts.iter().all(|text| text.h_align == TextHAlign::Center));
    assert!(
        labels
            .texts
            .iter()
            .all(|text| (text.font_size_px - 9.0 * PX_PER_PT).abs() < 1e-12)
    );
    assert!(labels.texts.iter().all(|text| text.font_family == "Segoe UI"));
}

#[test]
fn stroke_and_fill_follow_style_settings() {
    let settings = StyleSettings::default()
        .with_default_color(Color::from_css("#336699").expect("color"))
        .with_line_width(3.0);
    let mut engine = engine();
    engine.update(&input(settings)).expect("update");
    let frame = engine.build_render_frame();

    let connectors = frame.layer(SceneLayerKind::Connectors).expect("connectors");
    assert!(connectors.lines.iter().all(|line| line.stroke_width == 3.0));
    assert!(
        connectors
            .lines
            .iter()
            .all(|line| line.color.to_hex() == "#336699")
    );
    let points = frame.layer(SceneLayerKind::DataPoints).expect("points");
    assert!(
        points
            .circles
            .iter()
            .all(|circle| circle.fill_color.to_hex() == "#336699")
    );
}

#[test]
fn zero_line_width_drops_every_line() {
    let mut engine = engine();
    engine
        .update(&input(StyleSettings::default().with_line_width(0.0)))
        .expect("update");
    engine.render().expect("render");
    assert_eq!(engine.renderer().last_line_count, 0);
    assert_eq!(engine.renderer().last_circle_count, 3);
}

#[test]
fn zero_radius_drops_every_marker() {
    let mut engine = engine();
    engine
        .update(&input(StyleSettings::default().with_radius(0.0)))
        .expect("update");
    engine.render().expect("render");
    assert_eq!(engine.renderer().last_circle_count, 0);
    assert_eq!(engine.renderer().last_line_count, 4);
}

#[test]
fn style_variables_reach_the_renderer() {
    let mut engine = engine();
    engine
        .update(&input(StyleSettings::default().with_font("Arial", 11.0)))
        .expect("update");

    let variables = engine
        .renderer()
        .style_variables
        .as_ref()
        .expect("variables applied");
    assert_eq!(variables.get("--font-size"), Some("11pt"));
    assert_eq!(variables.get("--font-family"), Some("Arial"));
    assert_eq!(variables.get("--line-width"), Some("2"));
    assert_eq!(variables.get("--default-color"), Some("#01b8aa"));
    assert_eq!(engine.style_variables(), variables);
}

#[test]
fn dimmed_elements_render_translucent() {
    let mut engine = engine();
    engine.update(&input(StyleSettings::default())).expect("update");
    engine.click_and_resolve("a").expect("select");
    let frame = engine.build_render_frame();

    let points = frame.layer(SceneLayerKind::DataPoints).expect("points");
    let alphas: Vec<f64> = points.circles.iter().map(|c| c.fill_color.alpha).collect();
    assert_eq!(alphas, [1.0, 0.5, 0.5]);

    let labels = frame.layer(SceneLayerKind::CategoryLabels).expect("labels");
    let alphas: Vec<f64> = labels.texts.iter().map(|t| t.color.alpha).collect();
    assert_eq!(alphas, [1.0, 0.5, 0.5]);

    // The target line is not selectable.
    let target = frame.layer(SceneLayerKind::TargetLine).expect("target");
    assert_eq!(target.lines[0].color.alpha, 1.0);
}

#[test]
fn empty_model_renders_target_line_and_label_only() {
    let mut engine = engine();
    engine
        .update(&UpdateInput::new(Viewport::new(300.0, 150.0), None))
        .expect("update");
    engine.render().expect("render");

    let renderer = engine.renderer();
    assert_eq!(renderer.last_line_count, 1);
    assert_eq!(renderer.last_circle_count, 0);
    assert_eq!(renderer.last_text_count, 1);
    let frame = renderer.last_frame.as_ref().expect("frame");
    assert_eq!(frame.texts[0].text, "0");
}

#[test]
fn invalid_viewport_leaves_engine_untouched() {
    let mut engine = engine();
    engine.update(&input(StyleSettings::default())).expect("update");
    let before = engine.snapshot();

    let mut bad = input(StyleSettings::default());
    bad.viewport = Viewport::new(f64::NAN, 100.0);
    let err = engine.update(&bad).expect_err("invalid viewport");
    assert!(matches!(err, ChartError::InvalidViewport { .. }));

    assert_eq!(engine.version(), 1);
    assert_eq!(engine.snapshot(), before);
}

#[test]
fn invalid_style_is_rejected_before_mutation() {
    let mut engine = engine();
    engine.update(&input(StyleSettings::default())).expect("update");

    let err = engine
        .update(&input(StyleSettings::default().with_radius(-2.0)))
        .expect_err("negative radius");
    assert!(matches!(err, ChartError::InvalidStyle(_)));
    assert_eq!(engine.version(), 1);
    assert_eq!(engine.settings().radius, 5.0);
}

#[test]
fn label_color_comes_from_engine_config() {
    let config = LollipopEngineConfig::default().with_label_color(Color::rgb(1.0, 0.0, 0.0));
    let mut engine = LollipopEngine::new(
        NullRenderer::default(),
        config,
        lollipop_chart::api::HostServices::headless(),
    )
    .expect("engine init");
    engine.update(&input(StyleSettings::default())).expect("update");
    let frame = engine.build_render_frame().flatten();
    assert!(frame.texts.iter().all(|text| text.color.to_hex() == "#ff0000"));
}

#[test]
fn frames_stay_valid_through_a_transition() {
    let mut engine = engine();
    engine.update(&input(StyleSettings::default())).expect("first");

    let mut shrunk = input(StyleSettings::default());
    shrunk.viewport = Viewport::new(120.0, 60.0);
    engine.update(&shrunk).expect("second");
    for _ in 0..6 {
        engine.advance(100.0).expect("advance");
        engine.render().expect("valid frame");
    }
    assert!(!engine.is_animating());
    assert_eq!(engine.renderer().render_calls, 6);
}

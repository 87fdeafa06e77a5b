use lollipop_chart::api::{ClickResolution, HostServices, SelectionService, UpdateInput};
use lollipop_chart::core::{
    CategoryColumn, ColumnSource, DataView, SelectionId, ValueColumn, Viewport,
};
use lollipop_chart::interaction::VisualMode;
use lollipop_chart::render::NullRenderer;
use lollipop_chart::{LollipopEngine, LollipopEngineConfig};

fn input(categories: &[&str], highlights: Option<Vec<Option<f64>>>) -> UpdateInput {
    let values: Vec<f64> = (1..=categories.len()).map(|i| i as f64 * 10.0).collect();
    let mut value_column = ValueColumn::from_values(ColumnSource::named("Value"), &values);
    if let Some(highlights) = highlights {
        value_column = value_column.with_highlights(highlights);
    }
    let data_view = DataView::categorical(
        CategoryColumn::new(ColumnSource::named("Category"), categories.iter().copied()),
        value_column,
        ValueColumn::from_values(ColumnSource::named("Target"), &[15.0]),
    );
    UpdateInput::new(Viewport::new(400.0, 200.0), Some(data_view))
}

fn engine() -> LollipopEngine<NullRenderer> {
    LollipopEngine::headless(NullRenderer::default()).expect("engine init")
}

/// (data point, connector, label) opacity of `category`.
fn opacities(engine: &LollipopEngine<NullRenderer>, category: &str) -> (f64, f64, f64) {
    let scene = engine.scene();
    (
        scene.data_point(category).expect("point").opacity,
        scene.connector(category).expect("connector").opacity,
        scene.category_label(category).expect("label").opacity,
    )
}

#[test]
fn click_dims_every_other_category() {
    let mut engine = engine();
    engine.update(&input(&["a", "b", "c"], None)).expect("update");

    let ticket = engine.click("b").expect("click");
    assert_eq!(ticket.index, 1);
    assert_eq!(ticket.selection, vec![SelectionId::new("Category=b")]);
    // Nothing changes until the ticket resolves.
    assert_eq!(opacities(&engine, "a"), (1.0, 1.0, 1.0));

    assert_eq!(
        engine.resolve_click(&ticket),
        ClickResolution::Applied { dimmed: true }
    );
    assert_eq!(engine.mode(), VisualMode::Selected);
    assert_eq!(opacities(&engine, "a"), (0.5, 0.5, 0.5));
    assert_eq!(opacities(&engine, "b"), (1.0, 1.0, 1.0));
    assert_eq!(opacities(&engine, "c"), (0.5, 0.5, 0.5));
}

#[test]
fn clicking_selected_category_again_restores_full_opacity() {
    let mut engine = engine();
    engine.update(&input(&["a", "b", "c"], None)).expect("update");
    engine.click_and_resolve("b").expect("select");

    let resolution = engine.click_and_resolve("b").expect("deselect");
    assert_eq!(resolution, ClickResolution::Applied { dimmed: false });
    assert_eq!(engine.mode(), VisualMode::Neutral);
    for category in ["a", "b", "c"] {
        assert_eq!(opacities(&engine, category), (1.0, 1.0, 1.0));
    }
    assert!(!engine.services().selection.has_selection());
}

#[test]
fn ticket_from_previous_cycle_is_stale() {
    let mut engine = engine();
    engine.update(&input(&["a", "b", "c"], None)).expect("update");
    let ticket = engine.click("a").expect("click");

    engine.update(&input(&["a", "b", "c"], None)).expect("newer update");
    assert_eq!(engine.resolve_click(&ticket), ClickResolution::Stale);
    for category in ["a", "b", "c"] {
        assert_eq!(opacities(&engine, category), (1.0, 1.0, 1.0));
    }
}

#[test]
fn host_highlight_drives_opacity() {
    let mut engine = engine();
    let summary = engine
        .update(&input(&["a", "b", "c"], Some(vec![None, Some(20.0), None])))
        .expect("update");

    assert_eq!(summary.mode, VisualMode::Highlighted);
    assert_eq!(opacities(&engine, "a"), (0.5, 0.5, 0.5));
    assert_eq!(opacities(&engine, "b"), (1.0, 1.0, 1.0));
    assert_eq!(opacities(&engine, "c"), (0.5, 0.5, 0.5));
}

#[test]
fn highlight_suppresses_click_resolution() {
    let mut engine = engine();
    engine
        .update(&input(&["a", "b", "c"], Some(vec![None, Some(20.0), None])))
        .expect("update");

    let resolution = engine.click_and_resolve("a").expect("click");
    assert_eq!(resolution, ClickResolution::SuppressedByHighlight);
    assert_eq!(engine.mode(), VisualMode::Highlighted);
    assert_eq!(opacities(&engine, "a"), (0.5, 0.5, 0.5));
    assert_eq!(opacities(&engine, "b"), (1.0, 1.0, 1.0));
}

#[test]
fn highlight_wins_over_existing_selection() {
    let mut engine = engine();
    engine.update(&input(&["a", "b", "c"], None)).expect("update");
    engine.click_and_resolve("b").expect("select");

    let summary = engine
        .update(&input(&["a", "b", "c"], Some(vec![None, None, Some(30.0)])))
        .expect("highlight update");
    assert_eq!(summary.mode, VisualMode::Highlighted);
    assert_eq!(opacities(&engine, "b"), (0.5, 0.5, 0.5));
    assert_eq!(opacities(&engine, "c"), (1.0, 1.0, 1.0));
}

#[test]
fn entering_category_under_selection_starts_opaque() {
    let mut engine = engine();
    engine.update(&input(&["a", "b", "c"], None)).expect("update");
    engine.click_and_resolve("b").expect("select");

    let summary = engine
        .update(&input(&["a", "b", "c", "d"], None))
        .expect("grow");
    assert_eq!(summary.mode, VisualMode::Selected);
    assert_eq!(summary.scene.data_points.entered, 1);
    assert_eq!(opacities(&engine, "d"), (1.0, 1.0, 1.0));
    assert_eq!(opacities(&engine, "a"), (0.5, 0.5, 0.5));
    assert_eq!(opacities(&engine, "b"), (1.0, 1.0, 1.0));
}

#[test]
fn neutral_update_clears_previous_dimming() {
    let mut engine = engine();
    engine
        .update(&input(&["a", "b"], Some(vec![Some(10.0), None])))
        .expect("highlight");
    assert_eq!(opacities(&engine, "b"), (0.5, 0.5, 0.5));

    let summary = engine.update(&input(&["a", "b"], None)).expect("neutral");
    assert_eq!(summary.mode, VisualMode::Neutral);
    assert_eq!(opacities(&engine, "b"), (1.0, 1.0, 1.0));
}

#[test]
fn dimmed_opacity_is_configurable() {
    let config = LollipopEngineConfig::default().with_dimmed_opacity(0.2);
    let mut engine = LollipopEngine::new(NullRenderer::default(), config, HostServices::headless())
        .expect("engine init");
    engine.update(&input(&["a", "b"], None)).expect("update");
    engine.click_and_resolve("a").expect("select");
    assert_eq!(opacities(&engine, "b"), (0.2, 0.2, 0.2));
}

#[test]
fn clicking_unknown_category_is_an_error() {
    let mut engine = engine();
    engine.update(&input(&["a"], None)).expect("update");
    assert!(engine.click("zzz").is_err());
    assert!(!engine.services().selection.has_selection());
}

use approx::assert_abs_diff_eq;
use lollipop_chart::api::UpdateInput;
use lollipop_chart::core::{CategoryColumn, ColumnSource, DataView, ValueColumn, Viewport};
use lollipop_chart::render::NullRenderer;
use lollipop_chart::LollipopEngine;

fn data_view(rows: &[(&str, f64)], target: f64) -> DataView {
    DataView::categorical(
        CategoryColumn::new(
            ColumnSource::named("Category"),
            rows.iter().map(|(category, _)| *category),
        ),
        ValueColumn::from_values(
            ColumnSource::named("Value"),
            &rows.iter().map(|(_, value)| *value).collect::<Vec<_>>(),
        ),
        ValueColumn::from_values(ColumnSource::named("Target"), &[target]),
    )
}

fn input(width: f64, height: f64, rows: &[(&str, f64)], target: f64) -> UpdateInput {
    UpdateInput::new(
        Viewport::new(width, height),
        Some(data_view(rows, target)),
    )
}

fn engine() -> LollipopEngine<NullRenderer> {
    LollipopEngine::headless(NullRenderer::default()).expect("engine init")
}

fn current_cy(engine: &LollipopEngine<NullRenderer>, category: &str) -> f64 {
    let t = engine.transition().eased_progress();
    engine
        .scene()
        .data_point(category)
        .expect("data point")
        .geometry
        .at(t)
        .cy
}

const ROWS: [(&str, f64); 3] = [("a", 10.0), ("b", 20.0), ("c", 30.0)];

#[test]
fn first_update_enters_every_layer() {
    let mut engine = engine();
    let summary = engine.update(&input(400.0, 200.0, &ROWS, 15.0)).expect("update");

    assert_eq!(summary.version, 1);
    assert_eq!(summary.item_count, 3);
    assert_eq!(summary.scene.target_line.entered, 1);
    assert_eq!(summary.scene.target_label.entered, 1);
    assert_eq!(summary.scene.data_points.entered, 3);
    assert_eq!(summary.scene.connectors.entered, 3);
    assert_eq!(summary.scene.category_labels.entered, 3);
    assert_eq!(engine.scene().element_count(), 11);
}

#[test]
fn viewport_change_keeps_element_identity() {
    let mut engine = engine();
    engine.update(&input(400.0, 200.0, &ROWS, 15.0)).expect("first");
    let before: Vec<_> = engine
        .scene()
        .data_points()
        .values()
        .map(|point| point.id)
        .collect();

    let summary = engine.update(&input(640.0, 320.0, &ROWS, 15.0)).expect("resize");
    assert_eq!(summary.scene.data_points.entered, 0);
    assert_eq!(summary.scene.data_points.updated, 3);
    assert_eq!(summary.scene.data_points.exited, 0);
    assert_eq!(summary.scene.connectors.updated, 3);
    assert_eq!(summary.scene.category_labels.updated, 3);

    let after: Vec<_> = engine
        .scene()
        .data_points()
        .values()
        .map(|point| point.id)
        .collect();
    assert_eq!(before, after);
}

#[test]
fn removed_category_exits_all_of_its_layers() {
    let mut engine = engine();
    engine.update(&input(400.0, 200.0, &ROWS, 15.0)).expect("first");

    let summary = engine
        .update(&input(400.0, 200.0, &[("a", 10.0), ("c", 30.0)], 15.0))
        .expect("second");
    assert_eq!(summary.scene.data_points.exited, 1);
    assert_eq!(summary.scene.connectors.exited, 1);
    assert_eq!(summary.scene.category_labels.exited, 1);

    let scene = engine.scene();
    assert!(scene.data_point("b").is_none());
    assert!(scene.connector("b").is_none());
    assert!(scene.category_label("b").is_none());
    assert_eq!(scene.data_point("c").expect("c").index, 1);
    assert_eq!(scene.connector("c").expect("c").index, 1);
    assert_eq!(scene.category_label("c").expect("c").index, 1);
}

#[test]
fn reordered_data_reorders_layers_without_new_ids() {
    let mut engine = engine();
    engine.update(&input(400.0, 200.0, &ROWS, 15.0)).expect("first");
    let c_id = engine.scene().data_point("c").expect("c").id;

    let reversed = [("c", 30.0), ("b", 20.0), ("a", 10.0)];
    let summary = engine.update(&input(400.0, 200.0, &reversed, 15.0)).expect("reorder");
    assert_eq!(summary.scene.data_points.entered, 0);

    let order: Vec<&str> = engine
        .scene()
        .data_points()
        .keys()
        .map(String::as_str)
        .collect();
    assert_eq!(order, ["c", "b", "a"]);
    assert_eq!(engine.scene().data_point("c").expect("c").id, c_id);
    assert_eq!(engine.scene().data_point("c").expect("c").index, 0);
}

#[test]
fn mid_flight_update_retargets_from_current_position() {
    let mut engine = engine();
    // Domain [0, 10] on a 100px tall viewport maps to [93, 7].
    engine
        .update(&input(200.0, 100.0, &[("a", 0.0), ("b", 10.0)], 0.0))
        .expect("first");
    assert_abs_diff_eq!(current_cy(&engine, "a"), 93.0, epsilon = 1e-9);

    engine
        .update(&input(200.0, 100.0, &[("a", 10.0), ("b", 0.0)], 0.0))
        .expect("second");
    assert_abs_diff_eq!(current_cy(&engine, "a"), 93.0, epsilon = 1e-9);

    assert!(engine.advance(250.0).expect("advance"));
    assert_abs_diff_eq!(current_cy(&engine, "a"), 50.0, epsilon = 1e-9);

    engine
        .update(&input(200.0, 100.0, &[("a", 0.0), ("b", 10.0)], 0.0))
        .expect("third");
    assert_abs_diff_eq!(current_cy(&engine, "a"), 50.0, epsilon = 1e-9);

    assert!(!engine.advance(500.0).expect("advance"));
    assert_abs_diff_eq!(current_cy(&engine, "a"), 93.0, epsilon = 1e-9);
    assert!(!engine.is_animating());
}

#[test]
fn target_line_keeps_its_id_when_target_moves() {
    let mut engine = engine();
    engine
        .update(&input(300.0, 110.0, &[("a", 0.0), ("b", 10.0)], 0.0))
        .expect("first");
    let line = engine.scene().target_line().expect("target line");
    let id = line.id;
    assert_abs_diff_eq!(line.geometry.target().y1, 103.0, epsilon = 1e-9);

    let summary = engine
        .update(&input(300.0, 110.0, &[("a", 0.0), ("b", 10.0)], 5.0))
        .expect("second");
    assert_eq!(summary.scene.target_line.updated, 1);

    let line = engine.scene().target_line().expect("target line");
    assert_eq!(line.id, id);
    let geometry = line.geometry.target();
    assert_abs_diff_eq!(geometry.y1, 55.0, epsilon = 1e-9);
    assert_eq!(geometry.y1, geometry.y2);
    assert_eq!(geometry.x1, 0.0);

    let label = engine.scene().target_label().expect("target label");
    assert_eq!(label.text, "5");
}

#[test]
fn category_labels_sit_on_the_far_side_of_the_target() {
    let mut engine = engine();
    engine
        .update(&input(300.0, 200.0, &[("low", 1.0), ("high", 9.0)], 5.0))
        .expect("update");
    let target_y = engine.scales().expect("scales").y(5.0);
    let font_size = engine.settings().font_size;

    let low = engine.scene().category_label("low").expect("low").anchor.target();
    let high = engine.scene().category_label("high").expect("high").anchor.target();
    assert_abs_diff_eq!(low.y, target_y - font_size, epsilon = 1e-9);
    assert_abs_diff_eq!(high.y, target_y + font_size, epsilon = 1e-9);
}

#[test]
fn malformed_update_clears_data_layers_but_keeps_target() {
    let mut engine = engine();
    engine.update(&input(400.0, 200.0, &ROWS, 15.0)).expect("first");

    let summary = engine
        .update(&UpdateInput::new(Viewport::new(400.0, 200.0), None))
        .expect("empty update");
    assert_eq!(summary.item_count, 0);
    assert_eq!(summary.scene.data_points.exited, 3);
    assert_eq!(summary.scene.target_line.updated, 1);
    assert!(engine.scene().data_points().is_empty());
    assert!(engine.scene().target_line().is_some());
}

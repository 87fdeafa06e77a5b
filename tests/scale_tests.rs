use approx::assert_abs_diff_eq;
use lollipop_chart::LollipopEngine;
use lollipop_chart::api::{StyleSettings, UpdateInput, build_scales};
use lollipop_chart::core::{
    CategoryColumn, ColumnIdentityBuilder, ColumnSource, DataModel, DataView, LinearScale,
    PointScale, ValueColumn, Viewport, normalize,
};
use lollipop_chart::render::{Color, NullRenderer};
use proptest::prelude::*;

fn model(values: &[f64], target: f64) -> DataModel {
    let labels: Vec<String> = (0..values.len()).map(|i| format!("c{i}")).collect();
    let data_view = DataView::categorical(
        CategoryColumn::new(ColumnSource::named("c"), labels),
        ValueColumn::from_values(ColumnSource::named("v"), values),
        ValueColumn::from_values(ColumnSource::named("t"), &[target]),
    );
    normalize(Some(&data_view), Color::BLACK, &ColumnIdentityBuilder)
}

#[test]
fn value_range_is_inset_by_radius_and_line_width() {
    let scales = build_scales(
        &model(&[0.0, 100.0], 50.0),
        Viewport::new(300.0, 200.0),
        &StyleSettings::default(),
        30.0,
        0.5,
    )
    .expect("scales");

    // radius 5 + line width 2
    assert_eq!(scales.y(0.0), 193.0);
    assert_eq!(scales.y(100.0), 7.0);
    assert_eq!(scales.y(50.0), 100.0);
}

#[test]
fn category_range_reserves_target_label_room() {
    let settings = StyleSettings::default().with_font("Segoe UI", 10.0);
    let scales = build_scales(
        &model(&[1.0, 2.0, 3.0, 4.0], 2.0),
        Viewport::new(400.0, 100.0),
        &settings,
        45.0,
        0.5,
    )
    .expect("scales");

    assert_eq!(scales.category_range_end(), 350.0);
    let positions: Vec<f64> = ["c0", "c1", "c2", "c3"]
        .iter()
        .map(|category| scales.x(category).expect("known category"))
        .collect();
    let step = scales.category.step();
    assert_abs_diff_eq!(step, 350.0 / 4.0, epsilon = 1e-9);
    assert_abs_diff_eq!(positions[0], step / 2.0, epsilon = 1e-9);
    for pair in positions.windows(2) {
        assert_abs_diff_eq!(pair[1] - pair[0], step, epsilon = 1e-9);
    }
}

#[test]
fn single_valued_domain_maps_to_midpoint() {
    let scales = build_scales(
        &model(&[5.0, 5.0], 5.0),
        Viewport::new(200.0, 114.0),
        &StyleSettings::default(),
        10.0,
        0.5,
    )
    .expect("scales");
    assert!(scales.value.is_degenerate());
    assert_eq!(scales.y(5.0), 57.0);
}

#[test]
fn point_scale_rejects_non_finite_range() {
    assert!(PointScale::new(["a"], (0.0, f64::INFINITY), 0.5).is_err());
    assert!(PointScale::new(["a"], (0.0, 10.0), -1.0).is_err());
}

#[test]
fn extreme_finite_values_keep_the_scene_renderable() {
    let scales = build_scales(
        &model(&[-1e308, 1e308], 0.0),
        Viewport::new(300.0, 100.0),
        &StyleSettings::default(),
        30.0,
        0.5,
    )
    .expect("scales");
    assert_eq!(scales.y(-1e308), 93.0);
    assert_eq!(scales.y(0.0), 50.0);
    assert_eq!(scales.y(1e308), 7.0);

    let data_view = DataView::categorical(
        CategoryColumn::new(ColumnSource::named("c"), ["a", "b"]),
        ValueColumn::from_values(ColumnSource::named("v"), &[-1e308, 1e308]),
        ValueColumn::from_values(ColumnSource::named("t"), &[0.0]),
    );
    let mut engine = LollipopEngine::headless(NullRenderer::default()).expect("engine init");
    engine
        .update(&UpdateInput::new(Viewport::new(300.0, 100.0), Some(data_view)))
        .expect("update");

    let marker = engine.scene().data_point("b").expect("marker").geometry.target();
    assert!(marker.cy.is_finite());
    engine.advance(1_000.0).expect("advance");
    engine.render().expect("render");
}

proptest! {
    #[test]
    fn value_scale_is_monotonically_non_increasing(
        lo in -1.0e6f64..1.0e6,
        span in 0.0f64..1.0e6,
        height in 0.0f64..4000.0,
        a in -2.0e6f64..2.0e6,
        b in -2.0e6f64..2.0e6,
    ) {
        let scale = LinearScale::new((lo, lo + span), (height - 7.0, 7.0)).expect("finite scale");
        let (small, large) = if a <= b { (a, b) } else { (b, a) };
        if height - 7.0 >= 7.0 {
            prop_assert!(scale.map(large) <= scale.map(small) + 1e-6);
        }
        prop_assert!(scale.map(a).is_finite());
    }

    #[test]
    fn linear_scale_round_trips_inside_domain(
        lo in -1.0e4f64..1.0e4,
        span in 1.0f64..1.0e4,
        fraction in 0.0f64..=1.0,
    ) {
        let scale = LinearScale::new((lo, lo + span), (500.0, 10.0)).expect("finite scale");
        let value = lo + span * fraction;
        let restored = scale.invert(scale.map(value));
        prop_assert!((restored - value).abs() <= 1e-6 * span.max(1.0));
    }

    #[test]
    fn point_positions_stay_within_range(count in 1usize..64, width in 1.0f64..5000.0) {
        let categories: Vec<String> = (0..count).map(|i| format!("k{i}")).collect();
        let scale = PointScale::new(categories.clone(), (0.0, width), 0.5).expect("scale");
        for category in &categories {
            let x = scale.position(category).expect("known");
            prop_assert!((0.0..=width).contains(&x));
        }
    }
}

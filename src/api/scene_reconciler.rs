use serde::{Deserialize, Serialize};

use crate::core::{DataItem, DataModel, PixelPoint};

use super::connector_geometry::connector_geometry;
use super::reconcile::{ReconcileOutcome, reconcile_layer};
use super::scene::{
    CategoryLabelElement, CircleGeometry, ConnectorElement, DataPointElement, LineGeometry,
    SceneGraph, TargetKey, TargetLabelElement, TargetLineElement,
};
use super::transition::Animated;
use super::{ChartScales, StyleSettings};

/// Per-layer reconciliation counts of one update cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SceneReconcileSummary {
    pub target_line: ReconcileOutcome,
    pub target_label: ReconcileOutcome,
    pub data_points: ReconcileOutcome,
    pub connectors: ReconcileOutcome,
    pub category_labels: ReconcileOutcome,
}

pub(super) struct SceneLayout<'a> {
    pub model: &'a DataModel,
    pub scales: &'a ChartScales,
    pub settings: &'a StyleSettings,
    pub target_text: &'a str,
}

struct Placement<'a> {
    index: usize,
    item: &'a DataItem,
    x: f64,
    y: f64,
}

/// Merges the cycle's layout into the persistent scene.
///
/// Entering elements are created at their final geometry; survivors are
/// re-targeted from their value at `t`, the eased progress of the transition
/// being replaced. Opacity is left to the selection coordinator.
pub(super) fn reconcile_scene(
    scene: &mut SceneGraph,
    layout: &SceneLayout<'_>,
    t: f64,
) -> SceneReconcileSummary {
    let SceneGraph {
        ids,
        target_line,
        target_label,
        data_points,
        connectors,
        category_labels,
    } = scene;
    let SceneLayout {
        model,
        scales,
        settings,
        target_text,
    } = *layout;

    let target_y = scales.y(model.target);
    let range_end = scales.category_range_end();
    let font_size = settings.font_size;
    let radius = settings.radius;

    let placements: Vec<Placement<'_>> = model
        .items
        .iter()
        .enumerate()
        .filter_map(|(index, item)| {
            Some(Placement {
                index,
                item,
                x: scales.x(&item.category)?,
                y: scales.y(item.value),
            })
        })
        .collect();

    let mut summary = SceneReconcileSummary {
        target_line: reconcile_layer(
            target_line,
            [(TargetKey, LineGeometry::new(0.0, target_y, range_end, target_y))],
            |_, geometry| TargetLineElement {
                id: ids.allocate(),
                geometry: Animated::fixed(geometry),
            },
            |_, element, geometry| element.geometry.retarget(t, geometry),
        ),
        ..SceneReconcileSummary::default()
    };

    let label_anchor = PixelPoint::new(range_end + font_size / 2.0, target_y);
    summary.target_label = reconcile_layer(
        target_label,
        [(TargetKey, label_anchor)],
        |_, anchor| TargetLabelElement {
            id: ids.allocate(),
            anchor: Animated::fixed(anchor),
            text: target_text.to_owned(),
        },
        |_, element, anchor| {
            element.anchor.retarget(t, anchor);
            target_text.clone_into(&mut element.text);
        },
    );

    summary.data_points = reconcile_layer(
        data_points,
        placements
            .iter()
            .map(|placement| (placement.item.category.clone(), placement)),
        |_, placement| DataPointElement {
            id: ids.allocate(),
            index: placement.index,
            geometry: Animated::fixed(CircleGeometry::new(placement.x, placement.y, radius)),
            fill: Animated::fixed(placement.item.color),
            opacity: 1.0,
            selection_id: placement.item.selection_id.clone(),
            value: placement.item.value,
            highlighted: placement.item.highlighted,
        },
        |_, element, placement| {
            element.index = placement.index;
            element
                .geometry
                .retarget(t, CircleGeometry::new(placement.x, placement.y, radius));
            element.fill.retarget(t, placement.item.color);
            element.selection_id = placement.item.selection_id.clone();
            element.value = placement.item.value;
            element.highlighted = placement.item.highlighted;
        },
    );

    summary.connectors = reconcile_layer(
        connectors,
        placements.iter().map(|placement| {
            let stem = connector_geometry(placement.x, target_y, placement.y, radius);
            (placement.item.category.clone(), (placement.index, stem))
        }),
        |_, (index, stem)| ConnectorElement {
            id: ids.allocate(),
            index,
            geometry: Animated::fixed(stem),
            opacity: 1.0,
        },
        |_, element, (index, stem)| {
            element.index = index;
            element.geometry.retarget(t, stem);
        },
    );

    summary.category_labels = reconcile_layer(
        category_labels,
        placements.iter().map(|placement| {
            let y = if placement.item.value >= model.target {
                target_y + font_size
            } else {
                target_y - font_size
            };
            (
                placement.item.category.clone(),
                (placement.index, PixelPoint::new(placement.x, y)),
            )
        }),
        |key, (index, anchor)| CategoryLabelElement {
            id: ids.allocate(),
            index,
            anchor: Animated::fixed(anchor),
            text: key.clone(),
            opacity: 1.0,
        },
        |_, element, (index, anchor)| {
            element.index = index;
            element.anchor.retarget(t, anchor);
        },
    );

    summary
}

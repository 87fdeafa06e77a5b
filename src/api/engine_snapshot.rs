use serde::{Deserialize, Serialize};

use crate::core::Viewport;
use crate::interaction::VisualMode;
use crate::render::{Color, Renderer, SceneLayerKind};

use super::LollipopEngine;
use super::scene::{CircleGeometry, ElementId, LineGeometry, SceneGraph};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ElementGeometry {
    Line(LineGeometry),
    Circle(CircleGeometry),
    Text { x: f64, y: f64, text: String },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ElementSnapshot {
    pub id: ElementId,
    pub layer: SceneLayerKind,
    pub key: String,
    pub index: Option<usize>,
    pub geometry: ElementGeometry,
    #[serde(default)]
    pub fill: Option<Color>,
    pub opacity: f64,
}

/// Serializable deterministic scene snapshot used by regression tests and
/// debugging tooling. Geometry is captured at the current transition progress.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SceneSnapshot {
    pub version: u64,
    pub viewport: Viewport,
    pub mode: VisualMode,
    pub transition_progress: f64,
    pub target: f64,
    pub elements: Vec<ElementSnapshot>,
}

impl SceneSnapshot {
    #[must_use]
    pub fn elements_in(&self, layer: SceneLayerKind) -> Vec<&ElementSnapshot> {
        self.elements
            .iter()
            .filter(|element| element.layer == layer)
            .collect()
    }
}

fn capture_elements(scene: &SceneGraph, t: f64) -> Vec<ElementSnapshot> {
    let mut elements = Vec::with_capacity(scene.element_count());

    if let Some(line) = scene.target_line() {
        elements.push(ElementSnapshot {
            id: line.id,
            layer: SceneLayerKind::TargetLine,
            key: "target".to_owned(),
            index: None,
            geometry: ElementGeometry::Line(line.geometry.at(t)),
            fill: None,
            opacity: 1.0,
        });
    }
    if let Some(label) = scene.target_label() {
        let anchor = label.anchor.at(t);
        elements.push(ElementSnapshot {
            id: label.id,
            layer: SceneLayerKind::TargetLabel,
            key: "target".to_owned(),
            index: None,
            geometry: ElementGeometry::Text {
                x: anchor.x,
                y: anchor.y,
                text: label.text.clone(),
            },
            fill: None,
            opacity: 1.0,
        });
    }
    elements.extend(scene.data_points().iter().map(|(key, point)| ElementSnapshot {
        id: point.id,
        layer: SceneLayerKind::DataPoints,
        key: key.clone(),
        index: Some(point.index),
        geometry: ElementGeometry::Circle(point.geometry.at(t)),
        fill: Some(point.fill.at(t)),
        opacity: point.opacity,
    }));
    elements.extend(scene.connectors().iter().map(|(key, connector)| ElementSnapshot {
        id: connector.id,
        layer: SceneLayerKind::Connectors,
        key: key.clone(),
        index: Some(connector.index),
        geometry: ElementGeometry::Line(connector.geometry.at(t)),
        fill: None,
        opacity: connector.opacity,
    }));
    elements.extend(scene.category_labels().iter().map(|(key, label)| {
        let anchor = label.anchor.at(t);
        ElementSnapshot {
            id: label.id,
            layer: SceneLayerKind::CategoryLabels,
            key: key.clone(),
            index: Some(label.index),
            geometry: ElementGeometry::Text {
                x: anchor.x,
                y: anchor.y,
                text: label.text.clone(),
            },
            fill: None,
            opacity: label.opacity,
        }
    }));

    elements
}

impl<R: Renderer> LollipopEngine<R> {
    #[must_use]
    pub fn snapshot(&self) -> SceneSnapshot {
        let t = self.transition.eased_progress();
        SceneSnapshot {
            version: self.version,
            viewport: self.viewport,
            mode: self.mode,
            transition_progress: self.transition.progress(),
            target: self.model.target,
            elements: capture_elements(&self.scene, t),
        }
    }
}

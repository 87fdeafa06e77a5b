//! Persistent scene graph reconciled across update cycles.
//!
//! Every element carries its geometry as [`Animated`] values so the shared
//! transition can be re-targeted from mid-flight positions. Opacity is not
//! animated: selection and highlight changes apply immediately.

use std::fmt;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::core::{PixelPoint, SelectionId};
use crate::render::Color;

use super::transition::{Animated, Interpolate};

/// Stable identity of one scene element; never reused within an engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ElementId(u64);

impl ElementId {
    #[must_use]
    pub fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for ElementId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub(crate) struct ElementIdAllocator {
    next: u64,
}

impl ElementIdAllocator {
    pub(crate) fn allocate(&mut self) -> ElementId {
        self.next += 1;
        ElementId(self.next)
    }
}

/// Key of the singleton target layers.
///
/// The key is fixed rather than derived from the target value so a changed
/// target animates instead of re-entering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct TargetKey;

impl fmt::Display for TargetKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("target")
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LineGeometry {
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
}

impl LineGeometry {
    #[must_use]
    pub fn new(x1: f64, y1: f64, x2: f64, y2: f64) -> Self {
        Self { x1, y1, x2, y2 }
    }

    #[must_use]
    pub fn length(self) -> f64 {
        (self.x2 - self.x1).hypot(self.y2 - self.y1)
    }
}

impl Interpolate for LineGeometry {
    fn interpolate(self, to: Self, t: f64) -> Self {
        Self {
            x1: self.x1.interpolate(to.x1, t),
            y1: self.y1.interpolate(to.y1, t),
            x2: self.x2.interpolate(to.x2, t),
            y2: self.y2.interpolate(to.y2, t),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CircleGeometry {
    pub cx: f64,
    pub cy: f64,
    pub radius: f64,
}

impl CircleGeometry {
    #[must_use]
    pub fn new(cx: f64, cy: f64, radius: f64) -> Self {
        Self { cx, cy, radius }
    }

    #[must_use]
    pub fn contains(self, point: PixelPoint) -> bool {
        (point.x - self.cx).hypot(point.y - self.cy) <= self.radius
    }
}

impl Interpolate for CircleGeometry {
    fn interpolate(self, to: Self, t: f64) -> Self {
        Self {
            cx: self.cx.interpolate(to.cx, t),
            cy: self.cy.interpolate(to.cy, t),
            radius: self.radius.interpolate(to.radius, t),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct TargetLineElement {
    pub id: ElementId,
    pub geometry: Animated<LineGeometry>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TargetLabelElement {
    pub id: ElementId,
    pub anchor: Animated<PixelPoint>,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DataPointElement {
    pub id: ElementId,
    /// Position of the item in the current model; shared with its connector and label.
    pub index: usize,
    pub geometry: Animated<CircleGeometry>,
    pub fill: Animated<Color>,
    pub opacity: f64,
    pub selection_id: SelectionId,
    pub value: f64,
    pub highlighted: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ConnectorElement {
    pub id: ElementId,
    pub index: usize,
    pub geometry: Animated<LineGeometry>,
    pub opacity: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CategoryLabelElement {
    pub id: ElementId,
    pub index: usize,
    pub anchor: Animated<PixelPoint>,
    pub text: String,
    pub opacity: f64,
}

/// All persistent elements, one keyed map per layer.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SceneGraph {
    pub(crate) ids: ElementIdAllocator,
    pub(crate) target_line: IndexMap<TargetKey, TargetLineElement>,
    pub(crate) target_label: IndexMap<TargetKey, TargetLabelElement>,
    pub(crate) data_points: IndexMap<String, DataPointElement>,
    pub(crate) connectors: IndexMap<String, ConnectorElement>,
    pub(crate) category_labels: IndexMap<String, CategoryLabelElement>,
}

impl SceneGraph {
    #[must_use]
    pub fn target_line(&self) -> Option<&TargetLineElement> {
        self.target_line.get(&TargetKey)
    }

    #[must_use]
    pub fn target_label(&self) -> Option<&TargetLabelElement> {
        self.target_label.get(&TargetKey)
    }

    #[must_use]
    pub fn data_points(&self) -> &IndexMap<String, DataPointElement> {
        &self.data_points
    }

    #[must_use]
    pub fn connectors(&self) -> &IndexMap<String, ConnectorElement> {
        &self.connectors
    }

    #[must_use]
    pub fn category_labels(&self) -> &IndexMap<String, CategoryLabelElement> {
        &self.category_labels
    }

    #[must_use]
    pub fn data_point(&self, category: &str) -> Option<&DataPointElement> {
        self.data_points.get(category)
    }

    #[must_use]
    pub fn connector(&self, category: &str) -> Option<&ConnectorElement> {
        self.connectors.get(category)
    }

    #[must_use]
    pub fn category_label(&self, category: &str) -> Option<&CategoryLabelElement> {
        self.category_labels.get(category)
    }

    #[must_use]
    pub fn element_count(&self) -> usize {
        self.target_line.len()
            + self.target_label.len()
            + self.data_points.len()
            + self.connectors.len()
            + self.category_labels.len()
    }

    /// Sets every selectable element to `opacity`.
    pub(crate) fn set_all_opacity(&mut self, opacity: f64) {
        for point in self.data_points.values_mut() {
            point.opacity = opacity;
        }
        for connector in self.connectors.values_mut() {
            connector.opacity = opacity;
        }
        for label in self.category_labels.values_mut() {
            label.opacity = opacity;
        }
    }
}
